use parking_lot::Mutex;

use crate::record::ProfilingRecord;
use super::ProfilingReceiver;

/// Keeps every delivered record in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingReceiver {
    records: Mutex<Vec<ProfilingRecord>>,
}

impl RecordingReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records received so far
    pub fn records(&self) -> Vec<ProfilingRecord> {
        self.records.lock().clone()
    }

    /// Drain the records received so far
    pub fn take(&self) -> Vec<ProfilingRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn last(&self) -> Option<ProfilingRecord> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl ProfilingReceiver for RecordingReceiver {
    fn on_information_received(&self, record: ProfilingRecord) {
        self.records.lock().push(record);
    }
}
