use std::error::Error;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

/// Directory that holds the log files, `~/.ribocode/logs`
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ribocode")
        .join("logs")
}

/// Initialize file logging under the default log directory
pub fn init_logging() -> Result<PathBuf, Box<dyn Error>> {
    init_logging_in(&log_dir())
}

/// Initialize logging into a timestamped file inside `log_dir`
pub fn init_logging_in(log_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = log_dir.join(format!("ribocode_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Map a `RIBOCODE_LOG_LEVEL` value onto an env_logger filter level
pub fn parse_log_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Set logging level based on environment variable or default
pub fn set_log_level() {
    let level = std::env::var("RIBOCODE_LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string());

    let env_filter = parse_log_level(&level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{level}', defaulting to 'info'");
        "info"
    });

    std::env::set_var("RUST_LOG", format!("ribocode={env_filter}"));
}

/// Log system information at startup
pub fn log_system_info() {
    info!("=== ribocode starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Current working directory: {:?}", std::env::current_dir().unwrap_or_default());
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("RIBOCODE_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

pub fn log_shutdown() {
    info!("=== ribocode shutting down ===");
}

/// Log an error that aborts the run, echoing it to stderr as well
pub fn log_critical_error(error: &str, context: Option<&str>) {
    if let Some(ctx) = context {
        error!("CRITICAL ERROR [{ctx}]: {error}");
        eprintln!("[{}] CRITICAL ERROR [{}]: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), ctx, error);
    } else {
        error!("CRITICAL ERROR: {error}");
        eprintln!("[{}] CRITICAL ERROR: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), error);
    }
}
