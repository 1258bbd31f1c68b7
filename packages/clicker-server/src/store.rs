//! The click log: the only durable state in the system.
//!
//! A click is an entry with an id and a timestamp. The counter is the number of entries. Entries
//! are never modified or removed.

use crate::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clicker_types::ClickStats;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEntry {
    pub id: u64,
    pub clicked_at: DateTime<Utc>,
}

/// The result of recording a click: the new entry and the total it brought the log to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedClick {
    pub entry: ClickEntry,
    pub total: u64,
}

/// Somewhere clicks are recorded.
///
/// `record` must be atomic with respect to other `record` calls: the totals handed out are
/// distinct and strictly increasing.
#[async_trait]
pub trait ClickLog: Send + Sync {
    async fn record(&self) -> Result<RecordedClick, StoreError>;

    async fn stats(&self) -> Result<ClickStats, StoreError>;
}

/// What we need to remember about the log to answer requests without rereading it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Tally {
    total: u64,
    last_id: u64,
    latest: Option<DateTime<Utc>>,
}

impl Tally {
    fn next_entry(&self) -> ClickEntry {
        ClickEntry {
            id: self.last_id + 1,
            clicked_at: Utc::now(),
        }
    }

    fn push(&mut self, entry: &ClickEntry) -> u64 {
        self.total += 1;
        self.last_id = self.last_id.max(entry.id);
        self.latest = self.latest.max(Some(entry.clicked_at));
        self.total
    }

    fn stats(&self) -> ClickStats {
        ClickStats {
            total_clicks: self.total,
            latest_click: self.latest,
        }
    }
}

/// A click log that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryClickLog {
    tally: parking_lot::Mutex<Tally>,
}

impl MemoryClickLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClickLog for MemoryClickLog {
    async fn record(&self) -> Result<RecordedClick, StoreError> {
        let mut tally = self.tally.lock();
        let entry = tally.next_entry();
        let total = tally.push(&entry);
        Ok(RecordedClick { entry, total })
    }

    async fn stats(&self) -> Result<ClickStats, StoreError> {
        Ok(self.tally.lock().stats())
    }
}

/// A click log persisted as JSON lines, one entry per line.
///
/// The file is read once on open. After that every click appends a line and syncs it before the
/// new total is handed out, so a total the client has seen is never lost on restart. A write that
/// fails is cut back off the file and the click is not counted.
#[derive(Debug)]
pub struct JsonLinesClickLog {
    path: PathBuf,
    inner: tokio::sync::Mutex<Appender>,
}

#[derive(Debug)]
struct Appender {
    file: fs::File,
    tally: Tally,
    // Length of the file up to the end of the last entry known to be on disk.
    synced_len: u64,
}

impl JsonLinesClickLog {
    /// Open the log at `path`, creating it (and its parent directories) if it doesn't exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let (tally, needs_newline) = match fs::read_to_string(&path).await {
            Ok(contents) => (
                replay(&path, &contents)?,
                !contents.is_empty() && !contents.ends_with('\n'),
            ),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => (Tally::default(), false),
            Err(err) => return Err(StoreError::io(&path)(err)),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(StoreError::io(parent))?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(StoreError::io(&path))?;

        // The last entry was written without its newline; terminate it so the next one starts on
        // a line of its own.
        if needs_newline {
            append(&mut file, b"\n")
                .await
                .map_err(StoreError::io(&path))?;
        }

        let synced_len = file
            .metadata()
            .await
            .map_err(StoreError::io(&path))?
            .len();

        tracing::info!(path = %path.display(), clicks = tally.total, "opened click log");

        Ok(Self::from_parts(path, file, tally, synced_len))
    }

    fn from_parts(path: PathBuf, file: fs::File, tally: Tally, synced_len: u64) -> Self {
        Self {
            path,
            inner: tokio::sync::Mutex::new(Appender {
                file,
                tally,
                synced_len,
            }),
        }
    }
}

// `write_all` on a tokio file only fills a buffer; the write itself and its error surface on
// `flush`.
async fn append(file: &mut fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_data().await
}

fn replay(path: &Path, contents: &str) -> Result<Tally, StoreError> {
    let mut tally = Tally::default();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let entry: ClickEntry =
            serde_json::from_str(line).map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
        tally.push(&entry);
    }

    Ok(tally)
}

#[async_trait]
impl ClickLog for JsonLinesClickLog {
    async fn record(&self) -> Result<RecordedClick, StoreError> {
        let mut guard = self.inner.lock().await;
        let Appender {
            file,
            tally,
            synced_len,
        } = &mut *guard;

        let entry = tally.next_entry();
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        if let Err(err) = append(file, line.as_bytes()).await {
            // A torn line would make every later open fail.
            if let Err(trunc) = file.set_len(*synced_len).await {
                tracing::error!(
                    path = %self.path.display(),
                    err = %trunc,
                    "failed to truncate click log after a failed write"
                );
            }
            return Err(StoreError::io(&self.path)(err));
        }

        *synced_len += line.len() as u64;
        let total = tally.push(&entry);
        Ok(RecordedClick { entry, total })
    }

    async fn stats(&self) -> Result<ClickStats, StoreError> {
        Ok(self.inner.lock().await.tally.stats())
    }
}
