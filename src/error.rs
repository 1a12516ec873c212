use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum TraceError {
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    // a numeric field on a record line could not be decoded
    MalformedNumber {
        line: usize,
        field: &'static str,
        text: String,
    },
    // a record line is missing a token or a register
    MalformedRecord {
        line: usize,
        reason: String,
        text: String,
    },
}

impl TraceError {
    pub fn line(&self) -> Option<usize> {
        match self {
            TraceError::Open { .. } => None,
            TraceError::MalformedNumber { line, .. } | TraceError::MalformedRecord { line, .. } => {
                Some(*line)
            }
        }
    }
}

impl Display for TraceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::Open { path, .. } => {
                write!(f, "cannot open trace file {}", path.display())
            }
            TraceError::MalformedNumber { line, field, text } => {
                write!(f, "invalid {field} value on line {line}: {text}")
            }
            TraceError::MalformedRecord { line, reason, text } => {
                write!(f, "invalid record on line {line} ({reason}): {text}")
            }
        }
    }
}

impl Error for TraceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TraceError::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}
