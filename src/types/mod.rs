//! Wire types for the LogTail HTTP interface

pub mod poll;

pub use poll::{InstrumentReport, LogLines, PollResponse, Verdict};
