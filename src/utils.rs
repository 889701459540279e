use crate::consts::{APP_NAME, HISTORY_FILE_ENV, HISTORY_FILE_NAME, LOG_ENV};
use crate::exceptions::HivePrefixError;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// `$XDG_CONFIG_HOME/hiveprefix`, falling back to `~/.config/hiveprefix`.
pub fn get_app_config_dir() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_NAME)
}

/// Where prefix history lives: an explicit path, then `HIVEPREFIX_HISTORY_FILE`,
/// then the app config dir.
pub fn resolve_history_file(explicit: Option<&Path>) -> Result<PathBuf, HivePrefixError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(raw) = std::env::var_os(HISTORY_FILE_ENV).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(raw);
        if !path.is_absolute() {
            return Err(HivePrefixError::Configuration(format!(
                "{} must be an absolute path, got '{}'",
                HISTORY_FILE_ENV,
                path.display()
            )));
        }
        return Ok(path);
    }

    Ok(get_app_config_dir().join(HISTORY_FILE_NAME))
}

/// The `--history-file` value in a raw, not yet parsed, argument list. Used by
/// shell completion, which runs before clap has parsed the command line.
pub fn history_file_from_args<S: AsRef<str>>(args: &[S]) -> Option<PathBuf> {
    args.iter()
        .enumerate()
        .filter_map(|(idx, arg)| {
            let arg: &str = arg.as_ref();
            if arg == "--history-file" {
                args.get(idx + 1).map(|value| {
                    let value: &str = value.as_ref();
                    PathBuf::from(value)
                })
            } else {
                arg.strip_prefix("--history-file=").map(PathBuf::from)
            }
        })
        .last()
}

/// Logs go to stderr so stdout stays clean for tables and JSON.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
