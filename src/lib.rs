pub mod compare;
pub mod error;
pub mod format;
pub mod report;
pub mod snapshot;

pub use compare::{compare, Comparison, Divergence, Outcome};
pub use error::TraceError;
pub use format::{NativeFormat, ReferenceFormat, TraceFormat};
pub use report::Report;
pub use snapshot::{Field, Snapshot};
