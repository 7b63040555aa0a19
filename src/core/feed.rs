//! Message feeds: newline-delimited JSON files, one per channel.
//!
//! Whatever bridges the chat platform appends one `InboundMessage` per line;
//! a `TrackedFeed` picks up new lines on every poll.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use log::warn;

use super::model::InboundMessage;

pub struct FeedTailer {
    file: File,
    position: u64,
}

impl FeedTailer {
    /// Open a feed. Unless `from_start` is set, only lines appended later are read.
    pub fn open(path: impl AsRef<Path>, from_start: bool) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let position = if from_start { 0 } else { file.metadata()?.len() };
        Ok(Self { file, position })
    }

    pub fn read_new_lines(&mut self) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();

        // Truncated and rewritten since the last poll: start over.
        if self.file.metadata()?.len() < self.position {
            warn!("Feed shrank below offset {}, reading from the start", self.position);
            self.position = 0;
        }

        self.file.seek(SeekFrom::Start(self.position))?;
        let mut reader = BufReader::new(&self.file);
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            let bytes_read = reader.read_until(b'\n', &mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            // Leave a half-written line for the next poll.
            if !buffer.ends_with(b"\n") {
                break;
            }
            self.position += bytes_read as u64;

            match std::str::from_utf8(&buffer) {
                Ok(text) => lines.push(text.trim_end_matches(&['\r', '\n'][..]).to_string()),
                Err(e) => warn!("Skipping feed line that is not valid UTF-8: {}", e),
            }
        }

        Ok(lines)
    }

    pub fn rewind(&mut self) -> io::Result<()> {
        self.position = 0;
        self.file.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

/// Decode one feed line. Blank lines are skipped silently, bad JSON with a warning.
pub fn parse_feed_line(line: &str) -> Option<InboundMessage> {
    let trimmed = line.trim().trim_start_matches('\u{feff}');
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str(trimmed) {
        Ok(message) => Some(message),
        Err(e) => {
            warn!("Skipping malformed feed line: {}", e);
            None
        }
    }
}

/// A feed file under watch, labelled by its channel name.
pub struct TrackedFeed {
    tailer: FeedTailer,
    pub source: String,
    path: PathBuf,
}

impl TrackedFeed {
    pub fn new(source: impl Into<String>, path: impl AsRef<Path>, from_start: bool) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let tailer = FeedTailer::open(&path, from_start)?;
        Ok(Self {
            tailer,
            source: source.into(),
            path,
        })
    }

    /// Channel name taken from the file stem (`general.jsonl` -> `general`).
    pub fn source_name(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    pub fn read_new_messages(&mut self) -> io::Result<Vec<InboundMessage>> {
        let lines = self.tailer.read_new_lines()?;
        Ok(lines.iter().filter_map(|line| parse_feed_line(line)).collect())
    }

    pub fn rewind(&mut self) -> io::Result<()> {
        self.tailer.rewind()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
