//! Incremental line follower for a single log file
//!
//! A [`LineFollower`] owns one open read handle, a byte offset that only
//! grows, and a carry buffer for a trailing partial line. Each [`poll`]
//! returns the complete lines appended since the previous poll without
//! waiting for new data.
//!
//! [`poll`]: LineFollower::poll

use crate::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, SeekFrom};

/// Stateful reader that yields only newly appended lines of a file.
///
/// The follower starts at end-of-file at open time, so content written
/// before the follower existed is never returned. File truncation and
/// rotation are not detected; a truncated file simply stops producing
/// lines until it grows past the stored offset again.
pub struct LineFollower {
    file: File,
    /// Byte offset of the last read position. Monotonically non-decreasing.
    offset: u64,
    /// Bytes after the last newline seen, carried to the next poll.
    partial: Vec<u8>,
}

impl LineFollower {
    /// Open `path` for reading, positioned at the current end of file.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref()).await?;
        let offset = file.seek(SeekFrom::End(0)).await?;

        Ok(Self {
            file,
            offset,
            partial: Vec::new(),
        })
    }

    /// Return all complete lines appended since the last poll.
    ///
    /// Reads whatever is available past the stored offset and returns
    /// immediately; an empty vector means nothing new was terminated by a
    /// newline yet. A trailing fragment without a newline is buffered and
    /// prefixed to the next poll's data. Invalid UTF-8 is replaced with
    /// U+FFFD rather than failing. Blank lines are skipped.
    pub async fn poll(&mut self) -> Result<Vec<String>> {
        self.file.seek(SeekFrom::Start(self.offset)).await?;

        let mut buf = Vec::new();
        let read = self.file.read_to_end(&mut buf).await?;
        self.offset += read as u64;
        self.partial.extend_from_slice(&buf);

        let mut lines = Vec::new();
        while let Some(pos) = self.partial.iter().position(|&b| b == b'\n') {
            let rest = self.partial.split_off(pos + 1);
            let raw = std::mem::replace(&mut self.partial, rest);

            let mut line = String::from_utf8_lossy(&raw[..pos]).into_owned();
            if line.ends_with('\r') {
                line.pop();
            }
            if !line.is_empty() {
                lines.push(line);
            }
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn append(path: &Path, bytes: &[u8]) {
        let mut f = std::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
    }

    #[tokio::test]
    async fn test_open_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = LineFollower::open(dir.path().join("missing.log")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_existing_content_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "old line 1\nold line 2\n").unwrap();

        let mut follower = LineFollower::open(&path).await.unwrap();
        assert!(follower.poll().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_complete_line_returned_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "").unwrap();

        let mut follower = LineFollower::open(&path).await.unwrap();
        append(&path, b"hello world\n");

        assert_eq!(follower.poll().await.unwrap(), vec!["hello world"]);
        // Already consumed; a quiescent poll is empty.
        assert!(follower.poll().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_multiple_lines_in_one_poll() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "").unwrap();

        let mut follower = LineFollower::open(&path).await.unwrap();
        append(&path, b"first\nsecond\nthird\n");

        assert_eq!(
            follower.poll().await.unwrap(),
            vec!["first", "second", "third"]
        );
    }

    #[tokio::test]
    async fn test_partial_line_withheld_until_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "").unwrap();

        let mut follower = LineFollower::open(&path).await.unwrap();

        append(&path, b"incomp");
        assert!(follower.poll().await.unwrap().is_empty());

        append(&path, b"lete li");
        assert!(follower.poll().await.unwrap().is_empty());

        append(&path, b"ne\n");
        assert_eq!(follower.poll().await.unwrap(), vec!["incomplete line"]);
    }

    #[tokio::test]
    async fn test_complete_line_plus_trailing_fragment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "").unwrap();

        let mut follower = LineFollower::open(&path).await.unwrap();
        append(&path, b"done\npend");

        assert_eq!(follower.poll().await.unwrap(), vec!["done"]);

        append(&path, b"ing\n");
        assert_eq!(follower.poll().await.unwrap(), vec!["pending"]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "").unwrap();

        let mut follower = LineFollower::open(&path).await.unwrap();
        append(&path, b"bad \xff\xfe bytes\n");

        let lines = follower.poll().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains('\u{FFFD}'));
        assert!(lines[0].starts_with("bad "));
        assert!(lines[0].ends_with(" bytes"));
    }

    #[tokio::test]
    async fn test_crlf_stripped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "").unwrap();

        let mut follower = LineFollower::open(&path).await.unwrap();
        append(&path, b"windows line\r\n");

        assert_eq!(follower.poll().await.unwrap(), vec!["windows line"]);
    }

    #[tokio::test]
    async fn test_blank_lines_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "").unwrap();

        let mut follower = LineFollower::open(&path).await.unwrap();
        append(&path, b"\n\nreal line\n\r\n");

        assert_eq!(follower.poll().await.unwrap(), vec!["real line"]);
    }
}
