use std::{
    fs::{self, DirEntry},
    io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::{Context, Result, anyhow};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "calcapp.log";
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Keeps the non-blocking file writer alive; drop it last so buffered lines flush.
pub struct LoggingGuard {
    _worker_guard: WorkerGuard,
    run_id: String,
}

impl LoggingGuard {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

pub fn init_tracing(logging_config: &LoggingConfig) -> Result<LoggingGuard> {
    ensure_logging_config(logging_config)?;
    let env_filter = build_env_filter(&logging_config.filter)?;

    let log_dir = absolute_log_dir(&logging_config.dir)?;
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create logging directory {}", log_dir.display()))?;
    let purge = LogRetention::new(&log_dir, LOG_FILE_PREFIX, logging_config.retention_days)
        .purge(SystemTime::now());

    let appender = match logging_config.rotation {
        LoggingRotation::Daily => rolling::daily(&log_dir, LOG_FILE_PREFIX),
        LoggingRotation::Hourly => rolling::hourly(&log_dir, LOG_FILE_PREFIX),
    };
    let (writer, worker_guard) = tracing_appender::non_blocking(appender);

    let json_file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(env_filter);
    let stderr_layer = logging_config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(json_file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    let guard = LoggingGuard {
        _worker_guard: worker_guard,
        run_id: Uuid::now_v7().to_string(),
    };
    tracing::info!(
        target: "logging",
        run_id = %guard.run_id,
        dir = %log_dir.display(),
        filter = %logging_config.filter,
        rotation = ?logging_config.rotation,
        retention_days = logging_config.retention_days,
        removed_files = purge.removed,
        "logging_initialized"
    );
    for warning in &purge.warnings {
        tracing::warn!(target: "logging", warning = %warning, "logging_retention_warning");
    }

    Ok(guard)
}

fn ensure_logging_config(logging_config: &LoggingConfig) -> Result<()> {
    if logging_config.filter.trim().is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }
    if logging_config.dir.as_os_str().is_empty() {
        return Err(anyhow!("logging.dir cannot be empty"));
    }
    Ok(())
}

fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).with_context(|| format!("failed to parse logging.filter '{filter}'"))
}

fn absolute_log_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .context("failed to read current working directory for logging.dir resolution")?;
    Ok(cwd.join(dir))
}

#[derive(Debug, Default)]
struct PurgeReport {
    removed: usize,
    warnings: Vec<String>,
}

/// Deletes rolled log files whose mtime is older than the retention window.
struct LogRetention<'a> {
    dir: &'a Path,
    prefix: &'a str,
    keep_for: Duration,
}

impl<'a> LogRetention<'a> {
    fn new(dir: &'a Path, prefix: &'a str, retention_days: usize) -> Self {
        let seconds = u64::try_from(retention_days)
            .unwrap_or(u64::MAX)
            .saturating_mul(SECONDS_PER_DAY);
        Self {
            dir,
            prefix,
            keep_for: Duration::from_secs(seconds),
        }
    }

    fn cutoff(&self, now: SystemTime) -> SystemTime {
        now.checked_sub(self.keep_for)
            .unwrap_or(SystemTime::UNIX_EPOCH)
    }

    fn purge(&self, now: SystemTime) -> PurgeReport {
        let cutoff = self.cutoff(now);
        let mut report = PurgeReport::default();

        let entries = match fs::read_dir(self.dir) {
            Ok(entries) => entries,
            Err(err) => {
                report
                    .warnings
                    .push(format!("failed to scan {}: {err}", self.dir.display()));
                return report;
            }
        };

        for entry in entries.flatten() {
            if !entry.file_name().to_string_lossy().starts_with(self.prefix) {
                continue;
            }
            let path = entry.path();
            match rolled_file_mtime(&entry) {
                Ok(Some(modified)) if modified <= cutoff => match fs::remove_file(&path) {
                    Ok(()) => report.removed += 1,
                    Err(err) => report
                        .warnings
                        .push(format!("failed to remove {}: {err}", path.display())),
                },
                Ok(_) => {}
                Err(err) => report
                    .warnings
                    .push(format!("failed to stat {}: {err}", path.display())),
            }
        }

        report
    }
}

/// `None` for directories and other non-file entries.
fn rolled_file_mtime(entry: &DirEntry) -> io::Result<Option<SystemTime>> {
    let metadata = entry.metadata()?;
    if !metadata.is_file() {
        return Ok(None);
    }
    metadata.modified().map(Some)
}
