use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
#[cfg(test)]
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

/// Append-only error log. The file is opened on the first write and kept open
/// for the rest of the process.
pub struct ErrorLog {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

pub fn format_line<Tz>(at: &DateTime<Tz>, msg: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{} {}", at.format("%m/%d/%Y %I:%M:%S %p"), msg)
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), file: Mutex::new(None) }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn error(&self, msg: &str) {
        let line = format_line(&Local::now(), msg);
        let mut guard = match self.file.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.is_none() {
            *guard = OpenOptions::new().create(true).append(true).open(&self.path).ok();
        }
        if let Some(f) = guard.as_mut() {
            let _ = writeln!(f, "{}", line);
            let _ = f.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::fs;

    #[test]
    fn line_uses_twelve_hour_clock() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 9).unwrap();
        assert_eq!(format_line(&at, "boom"), "03/07/2024 03:04:09 PM boom");

        let morning = Utc.with_ymd_and_hms(2024, 12, 25, 0, 30, 0).unwrap();
        assert_eq!(format_line(&morning, "x"), "12/25/2024 12:30:00 AM x");
    }

    #[test]
    fn nothing_is_created_until_first_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = ErrorLog::new(dir.path().join("translator.log"));
        assert!(!log.path().exists());
    }

    #[test]
    fn errors_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.log");
        fs::write(&path, "older line\n").unwrap();

        let log = ErrorLog::new(&path);
        log.error("first");
        log.error("second");

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "older line");
        assert!(lines[1].ends_with(" first"));
        assert!(lines[2].ends_with(" second"));
    }
}
