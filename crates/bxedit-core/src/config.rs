//! Session tunables.

use std::time::Duration;

/// Default number of extra Ctrl-X presses required to quit with unsaved changes.
pub const DEFAULT_QUIT_TIMES: usize = 3;

/// Default lifetime of a status message.
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Extra quit presses required while the document is dirty.
    pub quit_times: usize,
    /// How long a status message stays visible.
    pub message_timeout: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quit_times: DEFAULT_QUIT_TIMES,
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
        }
    }
}
