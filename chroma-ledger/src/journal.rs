use anyhow::anyhow;
use chroma_core::{JournalError, LedgerEvent};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// One recorded notification together with its position in the stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// Contiguous zero-based position in emission order
    pub seq: u64,

    /// Milliseconds since the Unix epoch at record time
    pub timestamp: u64,

    /// The notification itself
    pub event: LedgerEvent,
}

/// Durable sink for the registry's notification stream.
///
/// The registry calls `record` exactly once per applied state change, in
/// emission order. Rejected operations never reach the journal.
pub trait EventJournal {
    /// Append one notification
    ///
    /// # Parameters
    /// * `seq` - Contiguous zero-based sequence number of the event
    /// * `event` - The notification to record
    ///
    /// # Returns
    /// Ok(()) if the record was accepted, or an error describing why not
    fn record(&mut self, seq: u64, event: &LedgerEvent) -> Result<(), JournalError>;
}

// Lets a caller keep a handle on a journal after boxing it into a registry
impl<J: EventJournal> EventJournal for Arc<Mutex<J>> {
    fn record(&mut self, seq: u64, event: &LedgerEvent) -> Result<(), JournalError> {
        let mut journal = self
            .lock()
            .map_err(|e| JournalError::Context(anyhow!("failed to acquire journal lock: {}", e)))?;
        journal.record(seq, event)
    }
}

/// Journal keeping records in memory, for tests and for embedders that
/// forward the stream elsewhere themselves
#[derive(Debug, Clone, Default)]
pub struct MemoryEventJournal {
    records: Vec<JournalRecord>,
}

impl MemoryEventJournal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the records accepted so far
    pub fn records(&self) -> &[JournalRecord] {
        &self.records
    }
}

impl EventJournal for MemoryEventJournal {
    fn record(&mut self, seq: u64, event: &LedgerEvent) -> Result<(), JournalError> {
        self.records.push(JournalRecord {
            seq,
            timestamp: current_timestamp(),
            event: event.clone(),
        });
        Ok(())
    }
}

/// A basic file-backed journal writing length-prefixed bincode records
pub struct FileEventJournal {
    /// Buffered writer over the journal file
    writer: BufWriter<File>,
}

impl FileEventJournal {
    /// Open a journal file for appending, creating it if absent
    pub fn open(path: &Path) -> Result<Self, JournalError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Read every record back from a journal file, in write order
    pub fn replay(path: &Path) -> Result<JournalReplay, JournalError> {
        let file = File::open(path)?;
        Ok(JournalReplay {
            reader: BufReader::new(file),
        })
    }
}

impl EventJournal for FileEventJournal {
    fn record(&mut self, seq: u64, event: &LedgerEvent) -> Result<(), JournalError> {
        let record = JournalRecord {
            seq,
            timestamp: current_timestamp(),
            event: event.clone(),
        };

        // Serialize the record
        let serialized = bincode::serialize(&record)?;

        // Write the record length and data
        let record_len = serialized.len() as u64;
        self.writer.write_all(&record_len.to_le_bytes())?;
        self.writer.write_all(&serialized)?;
        self.writer.flush()?;

        Ok(())
    }
}

/// Iterator over journal records read back from a file
pub struct JournalReplay {
    reader: BufReader<File>,
}

impl Iterator for JournalReplay {
    type Item = Result<JournalRecord, JournalError>;

    fn next(&mut self) -> Option<Self::Item> {
        // Read the record length
        let mut len_buf = [0u8; 8];
        match self.reader.read_exact(&mut len_buf) {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                // End of file
                return None;
            }
            Err(e) => {
                return Some(Err(JournalError::from(e)));
            }
        }

        let record_len = u64::from_le_bytes(len_buf);

        // Read the record data
        let mut record_data = vec![0u8; record_len as usize];
        if let Err(e) = self.reader.read_exact(&mut record_data) {
            return Some(Err(JournalError::from(e)));
        }

        // Deserialize the record
        match bincode::deserialize(&record_data) {
            Ok(record) => Some(Ok(record)),
            Err(e) => Some(Err(JournalError::from(e))),
        }
    }
}

/// Get the current timestamp in milliseconds
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
