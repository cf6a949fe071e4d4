//! Newline-delimited JSON writer
//!
//! Each record is one compact JSON object followed by `\n`:
//!
//! ```text
//! {"file":"com/example/app/1.0/app-1.0.jar","size":52817}
//! {"file":"com/example/app/1.0/app-1.0.pom","size":1204}
//! ```
//!
//! Writes are buffered. Records are never rewritten, so whatever was
//! appended before an error is kept once the writer is flushed.

use crate::error::{SinkError, SinkResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One artifact in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// Repository path without leading separator
    pub file: String,

    /// Size in bytes
    pub size: u64,
}

/// Destination for output records
pub trait RecordSink {
    /// Append one record after all previously appended ones
    fn append(&mut self, record: &OutputRecord) -> SinkResult<()>;

    /// Push buffered records to the destination
    fn flush(&mut self) -> SinkResult<()>;
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn append(&mut self, record: &OutputRecord) -> SinkResult<()> {
        (**self).append(record)
    }

    fn flush(&mut self) -> SinkResult<()> {
        (**self).flush()
    }
}

/// NDJSON record writer over any `Write`
pub struct JsonlWriter<W: Write> {
    inner: BufWriter<W>,
    records: u64,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
            records: 0,
        }
    }

    /// Number of records appended so far
    pub fn records_written(&self) -> u64 {
        self.records
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> SinkResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }
}

impl<W: Write> RecordSink for JsonlWriter<W> {
    fn append(&mut self, record: &OutputRecord) -> SinkResult<()> {
        serde_json::to_writer(&mut self.inner, record).map_err(|e| {
            if e.is_io() {
                SinkError::Io(e.into())
            } else {
                SinkError::Serialize(e)
            }
        })?;
        self.inner.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Create (or truncate) the output file and wrap it in a writer
pub fn create_output(path: &Path) -> SinkResult<JsonlWriter<File>> {
    let file = File::create(path)?;
    Ok(JsonlWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn record(file: &str, size: u64) -> OutputRecord {
        OutputRecord {
            file: file.to_string(),
            size,
        }
    }

    #[test]
    fn test_jsonl_format() {
        let mut writer = JsonlWriter::new(Vec::new());
        writer.append(&record("README.txt", 42)).unwrap();
        writer.append(&record("releases/a b\"c.jar", 0)).unwrap();
        assert_eq!(writer.records_written(), 2);

        let bytes = writer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{\"file\":\"README.txt\",\"size\":42}\n\
             {\"file\":\"releases/a b\\\"c.jar\",\"size\":0}\n"
        );
    }

    /// Writer that fails every write
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_surfaces() {
        let mut writer = JsonlWriter::new(FullDisk);
        // Buffered: the first append fits in the buffer
        writer.append(&record("a", 1)).unwrap();
        let err = writer.flush().unwrap_err();
        assert!(matches!(err, SinkError::Io(_)));
    }

    #[test]
    fn test_create_output_failure_is_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.jsonl");

        let err = create_output(&path).err().unwrap();
        assert!(matches!(err, SinkError::Io(_)));
    }

    #[test]
    fn test_create_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut writer = create_output(&path).unwrap();
        writer.append(&record("x", 7)).unwrap();
        writer.flush().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\"file\":\"x\",\"size\":7}\n"
        );
    }
}
