// File: ./src/cli.rs
//! Command-line options and help for the console front end.
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub root: Option<PathBuf>,
    pub show_help: bool,
}

/// Parses `args` (without the binary name). Unknown flags are ignored.
pub fn parse_args<I, S>(args: I) -> CliOptions
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut opts = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--help" | "-h" | "help" => opts.show_help = true,
            "--root" | "-r" => {
                if let Some(path) = args.next() {
                    opts.root = Some(PathBuf::from(path.as_ref()));
                }
            }
            _ => { /* Ignore unknown flags */ }
        }
    }
    opts
}

pub fn print_help(binary_name: &str) {
    println!(
        "Duke v{} - a chatty task tracker for the terminal",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS (type them at the prompt):");
    for item in crate::help::get_command_help() {
        println!("    {:<42}{}", item.keys, item.desc);
    }
    println!();
    println!("Tasks are saved when you type 'bye'.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_flag_takes_a_value() {
        let opts = parse_args(["--root", "/tmp/duke"]);
        assert_eq!(opts.root, Some(PathBuf::from("/tmp/duke")));
        assert!(!opts.show_help);
    }

    #[test]
    fn help_and_unknown_flags() {
        let opts = parse_args(["--verbose", "-h"]);
        assert!(opts.show_help);
        assert_eq!(opts.root, None);
    }

    #[test]
    fn dangling_root_is_ignored() {
        assert_eq!(parse_args(["-r"]), CliOptions::default());
    }
}
