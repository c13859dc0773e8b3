//! Logging init: file under the XDG state dir, or fallback to stderr.
//!
//! Console output of the CLI (echoed assignments, summaries) stays on
//! stdout; tracing only carries diagnostics.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Per-write sink: the log file, or stderr when cloning the handle fails.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileSinkMaker(fs::File);

impl<'a> MakeWriter<'a> for FileSinkMaker {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,qhu=debug"))
}

/// Initialize structured logging to `~/.local/state/qhu/qhu.log`.
///
/// Returns Err when the state dir or the file cannot be opened; callers
/// should then use [`init_logging_stderr`] so the CLI still runs.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qhu")?;
    let log_dir = xdg_dirs.get_state_home().join("qhu");

    fs::create_dir_all(&log_dir)?;
    let log_path: PathBuf = log_dir.join("qhu.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileSinkMaker(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("qhu logging initialized at {}", log_path.display());

    Ok(())
}

/// Initialize logging to stderr only; used when [`init_logging`] fails.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
