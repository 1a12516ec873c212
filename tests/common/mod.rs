use std::path::{Path, PathBuf};

use tracecmp::{NativeFormat, ReferenceFormat, Snapshot, TraceError, TraceFormat};

pub fn trace_path(name: &str) -> PathBuf {
    Path::new("tests/traces").join(name)
}

pub fn load_ours(name: &str) -> Result<Vec<Snapshot>, TraceError> {
    NativeFormat::default().parse_file(&trace_path(name))
}

pub fn load_theirs(name: &str) -> Result<Vec<Snapshot>, TraceError> {
    ReferenceFormat.parse_file(&trace_path(name))
}
