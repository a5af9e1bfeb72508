//! The fixed set of log sources a server instance monitors

use crate::follower::LineFollower;
use crate::types::LogLines;
use crate::{Result, TailError};
use std::path::PathBuf;

/// One watched log file: display name plus its follower.
struct LogSource {
    name: String,
    follower: LineFollower,
}

/// Ordered, immutable collection of log sources established at startup.
///
/// Membership never changes after construction. Polling mutates every
/// member's read offset, so callers must serialize access (the server
/// keeps the set behind a mutex).
pub struct WatchSet {
    sources: Vec<LogSource>,
}

impl WatchSet {
    /// Open every path for tailing, in argument order.
    ///
    /// The supplied path string doubles as the source's display name in
    /// poll results. Any open failure aborts construction; the set never
    /// partially starts.
    pub async fn open(paths: &[PathBuf]) -> Result<Self> {
        if paths.is_empty() {
            return Err(TailError::Config(
                "At least one log file must be watched".to_string(),
            ));
        }

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let follower = LineFollower::open(path).await.map_err(|e| {
                TailError::Server(format!("Failed to open {}: {}", path.display(), e))
            })?;
            sources.push(LogSource {
                name: path.to_string_lossy().into_owned(),
                follower,
            });
        }

        Ok(Self { sources })
    }

    /// Number of watched log files.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the set is empty (construction refuses an empty path list).
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Poll every source in registration order and aggregate new lines by
    /// name. Duplicate names overwrite earlier entries (last-write-wins).
    pub async fn poll_all(&mut self) -> Result<LogLines> {
        let mut logs = LogLines::new();
        for source in &mut self.sources {
            let lines = source.follower.poll().await?;
            logs.insert(source.name.clone(), lines);
        }
        Ok(logs)
    }
}
