// Binary entry point for the console front end.
use anyhow::Result;
use duke::cli::{parse_args, print_help};
use duke::config::Config;
use duke::context::{AppContext, StandardContext};
use duke::controller::Interpreter;
use duke::storage::LocalStorage;
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let opts = parse_args(env::args().skip(1));
    if opts.show_help {
        print_help("duke");
        return Ok(());
    }

    let ctx = StandardContext::new(opts.root);
    let config = Config::load_or_init(&ctx)?;

    // A broken logger should not keep the user from their tasks.
    if let Err(e) = config.level_filter() {
        eprintln!("{:#}, logging at info", e);
    }
    let logger = ctx
        .get_log_path()
        .and_then(|path| duke::logging::init(&path, config.level_filter_or_info()));
    if let Err(e) = logger {
        eprintln!("Logging disabled: {:#}", e);
    }

    let storage = LocalStorage::new(config.store_path(&ctx)?);
    let mut duke = match Interpreter::open(Box::new(storage)) {
        Ok(interpreter) => interpreter.with_help_threshold(config.help_threshold),
        Err(e) => {
            log::error!("Startup failed: {}", e);
            eprintln!("Error loading tasks:\n{}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", duke.greet())?;

    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(stdout, "{}", duke.process(&line))?;
        if duke.is_finished() {
            return Ok(());
        }
    }

    // EOF without `bye`: save the same way.
    writeln!(stdout, "{}", duke.finish())?;
    Ok(())
}
