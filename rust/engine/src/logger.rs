use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::simulation::Target;

/// One target occurrence observed during a simulation run.
/// Serialized to JSONL format so recorded hands can be inspected later.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    /// 1-based trial number on which the target occurred
    pub trial: u64,
    /// Seed of the deck that produced the hand (enables exact replay)
    pub seed: u64,
    /// Classification the run was looking for
    pub target: Target,
    /// The five cards as the classifier left them
    pub cards: Vec<Card>,
    /// Timestamp when the hit was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Destination for hits observed by [`crate::simulation::simulate`].
pub trait HitSink {
    fn record(&mut self, hit: &HitRecord) -> std::io::Result<()>;
}

impl HitSink for Vec<HitRecord> {
    fn record(&mut self, hit: &HitRecord) -> std::io::Result<()> {
        self.push(hit.clone());
        Ok(())
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct HitLogger {
    writer: BufWriter<File>,
    written: u64,
}

impl HitLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            written: 0,
        })
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl HitSink for HitLogger {
    fn record(&mut self, hit: &HitRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = hit.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}

impl Drop for HitLogger {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
