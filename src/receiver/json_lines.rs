use std::io::Write;

use parking_lot::Mutex;

use crate::error::ProfilerError;
use crate::record::ProfilingRecord;
use super::ProfilingReceiver;

/// Writes each record as one line of JSON.
///
/// Best effort: a record that can't be written is logged and dropped.
pub struct JsonLinesReceiver<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesReceiver<W>
where
    W: Write + Send,
{
    pub fn new(writer: W) -> Self {
        JsonLinesReceiver {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_record(&self, record: &ProfilingRecord) -> Result<(), ProfilerError> {
        let line = serde_json::to_string(record)?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

impl<W> ProfilingReceiver for JsonLinesReceiver<W>
where
    W: Write + Send,
{
    fn on_information_received(&self, record: ProfilingRecord) {
        if let Err(e) = self.write_record(&record) {
            tracing::warn!(tag = %record.tag, error = %e, "Failed to write profiling record");
        }
    }
}
