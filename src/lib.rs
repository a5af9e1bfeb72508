//! # LogTail - Log-Tailing Instrumentation Server
//!
//! LogTail watches a fixed set of log files, incrementally captures newly
//! appended lines since the last poll, and exposes them over an HTTP/JSON
//! interface together with a pass/fail verdict. It is built for external
//! fuzzing/testing tooling that polls a target's logs to detect failures.
//!
//! ## Features
//!
//! - **Incremental Tailing**: each poll returns only lines appended since the
//!   previous poll; partial lines are buffered until their newline arrives
//! - **Robust Decoding**: invalid UTF-8 is replaced, never an error
//! - **Verdict Derivation**: `"fail"` as soon as any watched file produced
//!   new output, `"pass"` otherwise
//! - **Concurrent Serving**: async I/O with Tokio; poll cycles over the
//!   shared watch set are serialized for offset correctness
//!
//! ## Quick Start
//!
//! ```no_run
//! use logtail::config::ServerConfig;
//! use logtail::server::TailServer;
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let paths = vec![PathBuf::from("/var/log/target.log")];
//!     let server = TailServer::new(config, &paths).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod follower;
pub mod server;
pub mod types;

/// Common error types used throughout LogTail
pub mod error {
    use std::fmt;

    /// LogTail error types
    #[derive(Debug)]
    pub enum TailError {
        /// I/O operation failed
        Io(std::io::Error),
        /// Serialization/deserialization failed
        Serde(serde_json::Error),
        /// Configuration error
        Config(String),
        /// Server error
        Server(String),
        /// Client error
        Client(String),
    }

    impl fmt::Display for TailError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                TailError::Io(e) => write!(f, "I/O error: {}", e),
                TailError::Serde(e) => write!(f, "Serialization error: {}", e),
                TailError::Config(e) => write!(f, "Configuration error: {}", e),
                TailError::Server(e) => write!(f, "Server error: {}", e),
                TailError::Client(e) => write!(f, "Client error: {}", e),
            }
        }
    }

    impl std::error::Error for TailError {}

    impl From<std::io::Error> for TailError {
        fn from(err: std::io::Error) -> Self {
            TailError::Io(err)
        }
    }

    impl From<serde_json::Error> for TailError {
        fn from(err: serde_json::Error) -> Self {
            TailError::Serde(err)
        }
    }

    /// Result type alias for LogTail operations
    pub type Result<T> = std::result::Result<T, TailError>;
}

pub use error::{Result, TailError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::EnvForwarder;
    pub use crate::config::ServerConfig;
    pub use crate::follower::LineFollower;
    pub use crate::server::{TailServer, WatchSet};
    pub use crate::types::{PollResponse, Verdict};
    pub use crate::{Result, TailError};
}
