
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.pad(label)
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }
    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

trait LogSink: Send + Sync {
    fn write_line(&self, level: LogLevel, line: &str);
}

/// Info goes to stdout, everything louder to stderr.
struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Info => println!("{line}"),
            LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
        }
    }
}

struct SessionFileSink {
    file: Mutex<File>,
}

impl SessionFileSink {
    fn open(dir: &Path) -> std::io::Result<(Self, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S%.3f");
        let path = dir.join(format!("smartsched-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                file: Mutex::new(file),
            },
            path,
        ))
    }
}

impl LogSink for SessionFileSink {
    fn write_line(&self, level: LogLevel, line: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "[{timestamp}] {level:<5} {line}");
        }
    }
}

/// The session file is opened on the first file-targeted message, not before,
/// so a run that never logs to file leaves nothing behind.
enum FileLog {
    Pending(PathBuf),
    Open {
        sink: Arc<dyn LogSink>,
        path: PathBuf,
        dir: PathBuf,
    },
    Unavailable(PathBuf),
}

impl FileLog {
    fn dir(&self) -> &Path {
        match self {
            FileLog::Pending(dir) | FileLog::Unavailable(dir) => dir.as_path(),
            FileLog::Open { dir, .. } => dir.as_path(),
        }
    }
}

#[derive(Clone)]
pub struct Logger {
    console: Arc<dyn LogSink>,
    file: Arc<Mutex<FileLog>>,
    file_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            console: Arc::new(ConsoleSink),
            file: Arc::new(Mutex::new(FileLog::Pending(PathBuf::from("logs")))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn file_sink(&self) -> Option<Arc<dyn LogSink>> {
        let mut state = self.file.lock().ok()?;
        let dir = match &*state {
            FileLog::Open { sink, .. } => return Some(sink.clone()),
            FileLog::Unavailable(_) => return None,
            FileLog::Pending(dir) => dir.clone(),
        };

        match SessionFileSink::open(&dir) {
            Ok((sink, path)) => {
                let sink: Arc<dyn LogSink> = Arc::new(sink);
                *state = FileLog::Open {
                    sink: sink.clone(),
                    path,
                    dir,
                };
                Some(sink)
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                *state = FileLog::Unavailable(dir);
                None
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            self.console.write_line(level, message);
        }
        if target.file() && self.file_logging_enabled() {
            if let Some(sink) = self.file_sink() {
                sink.write_line(level, message);
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Only takes effect before the session file has been opened.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut state) = self.file.lock() {
            if let FileLog::Pending(current) = &mut *state {
                *current = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.file.lock().ok().map(|s| s.dir().to_path_buf())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        match &*self.file.lock().ok()? {
            FileLog::Open { path, .. } => Some(path.clone()),
            _ => None,
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .field("file_enabled", &self.file_logging_enabled())
            .finish()
    }
}
