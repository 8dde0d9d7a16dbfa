// Manages the durable, line-oriented task store.
//
// One record per line, in list order:
//
//     KIND|DONE|DESCRIPTION|EXTRA
//
// KIND is T/D/E, DONE is 1/0, EXTRA is empty (todo), yyyy-mm-dd (deadline)
// or the event's time text. Inside text, `|` and `\` are written as `\|` and
// `\\`, and line breaks as `\n` / `\r`, so a record never spans two lines.
use crate::error::{DukeError, Result};
use crate::model::item::STORE_DATE_FORMAT;
use crate::model::{Task, TaskKind, TaskList};
use chrono::NaiveDate;
use fs2::FileExt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const FIELD_SEPARATOR: char = '|';
const ESCAPE: char = '\\';
const FIELD_COUNT: usize = 4;

/// Load-on-start / save-on-exit contract the interpreter depends on.
pub trait Persistence {
    /// A missing store is an empty list. A malformed record is `CorruptStore`;
    /// an unreadable file is `StorageUnavailable`.
    fn load(&self) -> Result<TaskList>;

    /// Overwrites the whole store. Failure is `StorageUnavailable`.
    fn save(&mut self, tasks: &TaskList) -> Result<()>;
}

/// File-backed store.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive advisory lock next to `file_path`.
    pub fn with_lock<F, T, E>(file_path: &Path, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: From<io::Error>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    pub fn to_store_string(tasks: &TaskList) -> String {
        let mut out = String::new();
        for task in tasks {
            out.push_str(&encode_record(task));
            out.push('\n');
        }
        out
    }

    pub fn from_store_string(content: &str) -> Result<TaskList> {
        let mut list = TaskList::new();
        for (i, line) in content.lines().enumerate() {
            let task = decode_record(line).map_err(|reason| DukeError::CorruptStore {
                line: i + 1,
                reason,
            })?;
            list.add(task);
        }
        Ok(list)
    }
}

impl Persistence for LocalStorage {
    fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            log::info!("No store at {}, starting empty", self.path.display());
            return Ok(TaskList::new());
        }
        let content = Self::with_lock(&self.path, || fs::read_to_string(&self.path))?;
        let list = Self::from_store_string(&content)?;
        log::info!("Loaded {} tasks from {}", list.count(), self.path.display());
        Ok(list)
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let body = Self::to_store_string(tasks);
        Self::with_lock(&self.path, || Self::atomic_write(&self.path, &body))?;
        log::info!("Saved {} tasks to {}", tasks.count(), self.path.display());
        Ok(())
    }
}

fn encode_record(task: &Task) -> String {
    let extra = match task.kind() {
        TaskKind::Todo => String::new(),
        TaskKind::Deadline(due) => due.format(STORE_DATE_FORMAT).to_string(),
        TaskKind::Event(when) => escape_field(when),
    };
    format!(
        "{}{sep}{}{sep}{}{sep}{}",
        task.kind().marker(),
        if task.is_done() { "1" } else { "0" },
        escape_field(task.description()),
        extra,
        sep = FIELD_SEPARATOR
    )
}

fn decode_record(line: &str) -> std::result::Result<Task, String> {
    let fields = split_fields(line)?;
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }
    let (marker, done, description, extra) = (&fields[0], &fields[1], &fields[2], &fields[3]);

    let done = match done.as_str() {
        "1" => true,
        "0" => false,
        other => return Err(format!("invalid done flag '{}'", other)),
    };
    if description.trim().is_empty() {
        return Err("empty description".to_string());
    }

    let kind = match marker.as_str() {
        "T" if extra.is_empty() => TaskKind::Todo,
        "T" => return Err("todo record carries an extra field".to_string()),
        "D" => TaskKind::Deadline(parse_store_date(extra)?),
        "E" if !extra.trim().is_empty() => TaskKind::Event(extra.clone()),
        "E" => return Err("event record has no time".to_string()),
        other => return Err(format!("unknown task kind '{}'", other)),
    };

    let mut task = Task::new(description.clone(), kind);
    task.set_done(done);
    Ok(task)
}

/// Fixed-width `yyyy-mm-dd`; chrono alone would also take `2024-3-5`.
fn parse_store_date(text: &str) -> std::result::Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(text, STORE_DATE_FORMAT)
        .map_err(|e| format!("invalid deadline date '{}': {}", text, e))?;
    if date.format(STORE_DATE_FORMAT).to_string() != text {
        return Err(format!("deadline date '{}' is not yyyy-mm-dd", text));
    }
    Ok(date)
}

fn escape_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            FIELD_SEPARATOR | ESCAPE => {
                out.push(ESCAPE);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Splits on unescaped separators and unescapes each field.
fn split_fields(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(next) if next == FIELD_SEPARATOR || next == ESCAPE => current.push(next),
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                Some(next) => return Err(format!("invalid escape '\\{}'", next)),
                None => return Err("dangling escape at end of line".to_string()),
            },
            FIELD_SEPARATOR => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    Ok(fields)
}
