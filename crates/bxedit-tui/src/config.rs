//! Command line and environment configuration.

use bxedit_core::EditorConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Environment variable overriding the quit confirmation count.
pub const QUIT_TIMES_ENV: &str = "BXEDIT_QUIT_TIMES";
/// Environment variable overriding the status message lifetime, in seconds.
pub const MESSAGE_SECS_ENV: &str = "BXEDIT_MESSAGE_SECS";
/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "BXEDIT_LOG_FILE";
/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "BXEDIT_LOG";

/// CLI arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "bxedit", version, about = "A small terminal text editor")]
pub struct Args {
    /// File to open. A path that does not exist yet is created on first save.
    pub file: Option<PathBuf>,
    /// Extra Ctrl-X presses needed to quit with unsaved changes.
    #[arg(long = "quit-times")]
    pub quit_times: Option<usize>,
    /// Write logs to this file.
    #[arg(long = "log-file", env = LOG_FILE_ENV)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Build the session configuration: flags, then environment, then defaults.
    pub fn editor_config(&self, env: impl Fn(&str) -> Option<String>) -> EditorConfig {
        let mut config = EditorConfig::default();

        if let Some(times) = parse_env(&env, QUIT_TIMES_ENV) {
            config.quit_times = times;
        }
        if let Some(secs) = parse_env(&env, MESSAGE_SECS_ENV) {
            config.message_timeout = Duration::from_secs(secs);
        }
        if let Some(times) = self.quit_times {
            config.quit_times = times;
        }
        config
    }
}

fn parse_env<T: std::str::FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring invalid environment value");
            None
        }
    }
}

/// Read a variable from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = Args::default().editor_config(env_from(&[]));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let env = env_from(&[(QUIT_TIMES_ENV, "1"), (MESSAGE_SECS_ENV, " 9 ")]);
        let config = Args::default().editor_config(env);
        assert_eq!(config.quit_times, 1);
        assert_eq!(config.message_timeout, Duration::from_secs(9));
    }

    #[test]
    fn test_flag_beats_environment() {
        let args = Args {
            quit_times: Some(0),
            ..Args::default()
        };
        let config = args.editor_config(env_from(&[(QUIT_TIMES_ENV, "7")]));
        assert_eq!(config.quit_times, 0);
    }

    #[test]
    fn test_invalid_environment_is_ignored() {
        let env = env_from(&[(QUIT_TIMES_ENV, "lots"), (MESSAGE_SECS_ENV, "-1")]);
        let config = Args::default().editor_config(env);
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_parse_command_line() {
        let args = Args::parse_from(["bxedit", "notes.c", "--quit-times", "2"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.c")));
        assert_eq!(args.quit_times, Some(2));
    }
}
