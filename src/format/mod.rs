use std::path::Path;

use crate::error::TraceError;
use crate::snapshot::Snapshot;

mod field;
pub mod native;
pub mod reference;

pub use native::{NativeFormat, NativeLayout};
pub use reference::ReferenceFormat;

/// A textual trace layout that can be turned into a sequence of snapshots.
pub trait TraceFormat {
    fn name(&self) -> &'static str;

    /// Parses a single line, `line` is 1-based.
    ///
    /// Returns `Ok(None)` for lines that are not instruction records.
    fn parse_line(&self, line: usize, text: &str) -> Result<Option<Snapshot>, TraceError>;

    fn parse_str(&self, log: &str) -> Result<Vec<Snapshot>, TraceError> {
        let mut snapshots = Vec::new();
        for (idx, text) in log.lines().enumerate() {
            match self.parse_line(idx + 1, text)? {
                Some(snapshot) => snapshots.push(snapshot),
                None => log::trace!("{}: skipping line {}: {}", self.name(), idx + 1, text),
            }
        }
        Ok(snapshots)
    }

    fn parse_file(&self, path: &Path) -> Result<Vec<Snapshot>, TraceError> {
        let log = std::fs::read_to_string(path).map_err(|source| TraceError::Open {
            path: path.to_owned(),
            source,
        })?;
        let snapshots = self.parse_str(&log)?;
        log::debug!(
            "{}: parsed {} snapshots from {}",
            self.name(),
            snapshots.len(),
            path.display()
        );
        Ok(snapshots)
    }
}
