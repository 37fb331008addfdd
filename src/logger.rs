//! Process-wide diagnostic channel
//!
//! Every line goes to stderr. When `SUPABASE_GATE_LOG_FILE` is set, lines are
//! also appended to that file with a UTC timestamp.

use crate::constants::{ENV_LOG_FILE, ENV_LOG_VERBOSE, MAX_LOG_BYTES};
use chrono::{SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

struct Logger {
    path: Option<PathBuf>,
    verbose: bool,
}

impl Logger {
    fn init() -> Self {
        let path = std::env::var(ENV_LOG_FILE)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let verbose = std::env::var(ENV_LOG_VERBOSE)
            .map(|v| v == "1")
            .unwrap_or(false);

        Self { path, verbose }
    }

    fn rotate_if_needed(&self, path: &Path) {
        if let Ok(meta) = fs::metadata(path) {
            if meta.len() > MAX_LOG_BYTES {
                let backup = backup_path(path);
                let _ = fs::remove_file(&backup);
                let _ = fs::rename(path, &backup);
            }
        }
    }

    fn timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn write_file(&self, level: &str, message: &str) {
        let Some(path) = &self.path else {
            return;
        };

        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        self.rotate_if_needed(path);
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{} [{}] {}", Self::timestamp(), level, message);
        }
    }

    fn log(&self, level: &str, message: &str, verbose_only: bool) {
        if verbose_only && !self.verbose {
            return;
        }

        eprintln!("[{}] {}", level, message);
        self.write_file(level, message);
    }
}

/// `<file name>.bak` next to the log file, whatever its extension
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::init)
}

/// Read the diagnostics settings from the environment now rather than on first use
pub fn init_logger() {
    let _ = get_logger();
}

/// Debug lines are printed only with `SUPABASE_GATE_LOG_VERBOSE=1`
pub fn log_debug(message: &str) {
    get_logger().log("DEBUG", message, true);
}

pub fn log_info(message: &str) {
    get_logger().log("INFO", message, false);
}

pub fn log_warn(message: &str) {
    get_logger().log("WARN", message, false);
}

pub fn log_error(message: &str) {
    get_logger().log("ERROR", message, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_logging_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gate.log");
        let logger = Logger {
            path: Some(path.clone()),
            verbose: false,
        };

        logger.log("ERROR", "Error getting current user: connect error", false);
        logger.log("INFO", "second", false);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[ERROR] Error getting current user: connect error"));
        assert!(lines[1].ends_with("[INFO] second"));
    }

    #[test]
    fn test_verbose_only_lines_skipped_when_quiet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gate.log");
        let logger = Logger {
            path: Some(path.clone()),
            verbose: false,
        };

        logger.log("DEBUG", "retrying", true);
        assert!(!path.exists());

        let verbose = Logger {
            path: Some(path.clone()),
            verbose: true,
        };
        verbose.log("DEBUG", "retrying", true);
        assert!(fs::read_to_string(&path).unwrap().contains("[DEBUG] retrying"));
    }

    #[test]
    fn test_rotation_moves_large_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gate.log");
        fs::write(&path, vec![b'x'; (MAX_LOG_BYTES + 1) as usize]).unwrap();

        let logger = Logger {
            path: Some(path.clone()),
            verbose: false,
        };
        logger.log("WARN", "fresh", false);

        assert!(dir.path().join("gate.log.bak").exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("[WARN] fresh\n"));
    }

    #[test]
    fn test_backup_path_appends_to_full_name() {
        assert_eq!(
            backup_path(Path::new("/var/log/diag.txt")),
            PathBuf::from("/var/log/diag.txt.bak")
        );
        assert_eq!(backup_path(Path::new("gate")), PathBuf::from("gate.bak"));
    }

    #[test]
    fn test_rotation_keeps_custom_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diag.txt");
        fs::write(&path, vec![b'x'; (MAX_LOG_BYTES + 1) as usize]).unwrap();

        let logger = Logger {
            path: Some(path.clone()),
            verbose: false,
        };
        logger.log("INFO", "rotated", false);

        assert!(dir.path().join("diag.txt.bak").exists());
        assert!(!dir.path().join("diag.log.bak").exists());
    }
}
