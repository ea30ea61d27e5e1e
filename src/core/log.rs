//! This module provides a simple logging API.
//!
//! The tower never logs on its own: until [`init`] is called every macro
//! invocation is a no-op, so embedding the crate costs nothing.

use std::{
    fmt::{self, Display},
    fs::{File, OpenOptions},
    io::{self, Write},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, Once, OnceLock,
    },
};

#[repr(usize)]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Level {
    /// Designates operations handed an argument they can't deal with.
    Error = 1,
    /// Designates hazardous situations.
    Warn,
    /// Designates useful information.
    Info,
    /// Designates arithmetic faults such as a division by zero.
    Debug,
}

#[derive(Debug, PartialEq, PartialOrd)]
pub enum ParseError<'p> {
    InvalidString(&'p str),
}

static INIT: Once = Once::new();
static LOG_LEVEL: AtomicUsize = AtomicUsize::new(Level::Info as usize);
static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();

pub const LOG_FILE_PATH: &str = "abacus.log";

#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log::write($crate::log::Level::Error, file!(), line!(), format_args!($($args)*))
    };
}

#[macro_export]
macro_rules! debug {
    ($($args:tt)*) => {
        $crate::log::write($crate::log::Level::Debug, file!(), line!(), format_args!($($args)*))
    };
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        };

        f.write_str(string)
    }
}

/// Opens [`LOG_FILE_PATH`] for appending and starts recording everything at
/// `level` or above. Calling it again only changes the level.
pub fn init(level: Level) -> io::Result<()> {
    let mut result = Ok(());

    INIT.call_once(|| {
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE_PATH)
        {
            Ok(file) => {
                let _ = LOG_FILE.set(Mutex::new(file));
            }
            Err(e) => result = Err(e),
        };
    });

    set_level(level);
    result
}

pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as usize, Ordering::Release);
}

pub fn is_initialised() -> bool {
    LOG_FILE.get().is_some()
}

#[doc(hidden)]
pub fn write(level: Level, file: &str, line: u32, args: fmt::Arguments) {
    if let Err(e) = log(level, &format!("{file}:{line} - {args}")) {
        eprintln!("Failed to log: {e}");
    }
}

fn log(level: Level, message: &str) -> io::Result<()> {
    let global_level = LOG_LEVEL.load(Ordering::Acquire);
    if (level as usize) > global_level {
        return Ok(());
    }

    match LOG_FILE.get() {
        Some(file) => {
            // a poisoned lock still holds a usable file handle
            let mut file = file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            writeln!(file, "[{level:#?}]: {message}")?;
            file.flush()
        }
        None => Ok(()),
    }
}

impl<'p> TryFrom<&'p str> for Level {
    type Error = ParseError<'p>;

    fn try_from(s: &'p str) -> Result<Self, ParseError<'p>> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "warn" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(ParseError::InvalidString(s)),
        }
    }
}

impl<'p> Display for ParseError<'p> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidString(s) => {
                write!(
                    f,
                    "Attempted to convert a string {s} that doesn't match a log level"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader};

    use super::*;

    fn log_lines_containing(content: &str) -> io::Result<Vec<String>> {
        let reader = BufReader::new(File::open(LOG_FILE_PATH)?);

        reader
            .lines()
            .filter(|line| match line {
                Ok(line) => line.contains(content),
                Err(_) => true,
            })
            .collect()
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!(Level::try_from("DEBUG"), Ok(Level::Debug));
        assert_eq!(Level::try_from("warn"), Ok(Level::Warn));
        assert_eq!(
            Level::try_from("verbose"),
            Err(ParseError::InvalidString("verbose"))
        );
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn test_error_content() {
        init(Level::Debug).unwrap();

        let content = "some really constructive tower error";
        error!("{}", content);

        let lines = log_lines_containing(content).unwrap();
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|line| line.contains("[Error]")));
    }
}
