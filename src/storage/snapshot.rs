//! Framed binary snapshots of address book contents.
//!
//! A snapshot file is a sequence of frames, one per save:
//!
//! ```text
//! [payload length: u64 little-endian][payload: JSON document]
//! ```
//!
//! Saving always appends a new frame, so a file accumulates the history of
//! every save made to it. The length prefix lets readers walk the frames
//! without ambiguity. A save that finds a cut-off frame at the end of the
//! file (an earlier write interrupted partway) drops that tail first, so the
//! new frame starts on a frame boundary.

use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Payload format version written into every frame.
pub const SNAPSHOT_VERSION: u32 = 1;

const HEADER_LEN: usize = std::mem::size_of::<u64>();

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: &'a [ContactRecord],
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    version: u32,
    contacts: Vec<ContactRecord>,
}

/// Append one snapshot frame holding `records` to the file at `path`.
///
/// The file is created if it does not exist. Bytes after the last complete
/// frame are truncated away before the new frame is written.
pub fn append(path: &Path, records: &[ContactRecord]) -> BookResult<()> {
    let payload = serde_json::to_vec(&SnapshotRef {
        version: SNAPSHOT_VERSION,
        contacts: records,
    })?;

    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    frame.extend_from_slice(&payload);

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    let mut existing = Vec::new();
    file.read_to_end(&mut existing)?;
    let boundary = complete_prefix_len(&existing);
    if boundary < existing.len() {
        tracing::warn!(
            path = %path.display(),
            dropped = existing.len() - boundary,
            "Dropping incomplete snapshot frame before append"
        );
        file.set_len(boundary as u64)?;
    }

    file.seek(SeekFrom::Start(boundary as u64))?;
    file.write_all(&frame)?;
    file.flush()?;

    tracing::info!(
        path = %path.display(),
        contacts = records.len(),
        bytes = frame.len(),
        "Snapshot appended"
    );
    Ok(())
}

/// Read the first snapshot stored in the file.
pub fn read_first(path: &Path) -> BookResult<Vec<ContactRecord>> {
    let bytes = fs::read(path)?;
    let frame = FrameReader::new(&bytes)
        .next()
        .ok_or_else(|| BookError::Deserialization("snapshot file is empty".to_string()))??;
    decode(frame)
}

/// Read the most recently appended snapshot stored in the file.
pub fn read_latest(path: &Path) -> BookResult<Vec<ContactRecord>> {
    let bytes = fs::read(path)?;
    let mut last = None;
    for frame in FrameReader::new(&bytes) {
        last = Some(frame?);
    }
    let frame =
        last.ok_or_else(|| BookError::Deserialization("snapshot file is empty".to_string()))?;
    decode(frame)
}

/// Read every snapshot stored in the file, oldest first.
pub fn read_all(path: &Path) -> BookResult<Vec<Vec<ContactRecord>>> {
    let bytes = fs::read(path)?;
    FrameReader::new(&bytes)
        .map(|frame| frame.and_then(decode))
        .collect()
}

/// Length of the leading run of complete frames in `bytes`.
fn complete_prefix_len(bytes: &[u8]) -> usize {
    let mut frames = FrameReader::new(bytes);
    let mut boundary = 0;
    while let Some(Ok(_)) = frames.next() {
        boundary = bytes.len() - frames.rest.len();
    }
    boundary
}

fn decode(payload: &[u8]) -> BookResult<Vec<ContactRecord>> {
    let snapshot: Snapshot = serde_json::from_slice(payload)
        .map_err(|e| BookError::Deserialization(e.to_string()))?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(BookError::Deserialization(format!(
            "unsupported snapshot version {}",
            snapshot.version
        )));
    }

    Ok(snapshot.contacts)
}

/// Walks the frames of a snapshot file held in memory.
struct FrameReader<'a> {
    rest: &'a [u8],
    failed: bool,
}

impl<'a> FrameReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            rest: bytes,
            failed: false,
        }
    }
}

impl<'a> Iterator for FrameReader<'a> {
    type Item = BookResult<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }

        if self.rest.len() < HEADER_LEN {
            self.failed = true;
            return Some(Err(BookError::Deserialization(
                "truncated frame header".to_string(),
            )));
        }

        let (header, body) = self.rest.split_at(HEADER_LEN);
        let mut len_bytes = [0u8; HEADER_LEN];
        len_bytes.copy_from_slice(header);
        let len = u64::from_le_bytes(len_bytes);

        match usize::try_from(len) {
            Ok(len) if len <= body.len() => {
                let (payload, rest) = body.split_at(len);
                self.rest = rest;
                Some(Ok(payload))
            }
            _ => {
                self.failed = true;
                Some(Err(BookError::Deserialization(format!(
                    "truncated frame: expected {} bytes, {} available",
                    len,
                    body.len()
                ))))
            }
        }
    }
}
