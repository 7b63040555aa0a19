use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::alerts::engine::NotificationEngine;
use super::alerts::model::Notification;
use super::error::{Error, Result};
use super::feed::TrackedFeed;

/// A notification together with the channel it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedNotification {
    pub source: String,
    pub notification: Notification,
}

pub struct CoordinatorOutput {
    pub notifications: Vec<SourcedNotification>,
    pub logs: Vec<String>,
}

/// Polls every tracked feed and runs each new message through the engine.
pub struct Coordinator {
    feeds: HashMap<PathBuf, TrackedFeed>,
    engine: NotificationEngine,
}

impl Coordinator {
    pub fn new(engine: NotificationEngine) -> Self {
        Self {
            feeds: HashMap::new(),
            engine,
        }
    }

    /// Start watching a feed. Returns false if it was already tracked.
    pub fn track(&mut self, path: impl AsRef<Path>, from_start: bool) -> Result<bool> {
        let path = path.as_ref();
        if self.feeds.contains_key(path) {
            return Ok(false);
        }

        let feed = TrackedFeed::new(TrackedFeed::source_name(path), path, from_start).map_err(|source| {
            Error::Feed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.feeds.insert(path.to_path_buf(), feed);
        Ok(true)
    }

    pub fn untrack(&mut self, path: impl AsRef<Path>) -> bool {
        self.feeds.remove(path.as_ref()).is_some()
    }

    pub fn tracked_count(&self) -> usize {
        self.feeds.len()
    }

    pub fn tick(&mut self) -> CoordinatorOutput {
        let mut notifications = Vec::new();
        let mut logs = Vec::new();

        for feed in self.feeds.values_mut() {
            let messages = match feed.read_new_messages() {
                Ok(messages) => messages,
                Err(e) => {
                    // Log error but keep polling the other feeds
                    logs.push(format!("Error reading feed {}: {}", feed.source, e));
                    continue;
                }
            };

            if messages.is_empty() {
                continue;
            }
            logs.push(format!("Read {} new messages from {}", messages.len(), feed.source));

            notifications.extend(messages.iter().filter_map(|message| {
                self.engine.process(message).map(|notification| SourcedNotification {
                    source: feed.source.clone(),
                    notification,
                })
            }));
        }

        CoordinatorOutput {
            notifications,
            logs,
        }
    }

    /// Re-read every feed from the beginning on the next tick.
    pub fn replay_feeds(&mut self) -> Vec<String> {
        let mut logs = Vec::new();
        for feed in self.feeds.values_mut() {
            if let Err(e) = feed.rewind() {
                logs.push(format!("Failed to rewind {:?}: {}", feed.path(), e));
            }
        }
        logs
    }
}
