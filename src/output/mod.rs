//! Output records and sinks
//!
//! A walk appends one `OutputRecord` per artifact to a `RecordSink`, in the
//! order artifacts are discovered. The only sink shipped is `JsonlWriter`,
//! which writes newline-delimited JSON.

pub mod writer;

pub use writer::{create_output, JsonlWriter, OutputRecord, RecordSink};
