//! Wishlist, wanted series and score threshold shared by every pipeline run.
//!
//! `PreferenceSet` is plain data. `SharedPreferences` is the handle that the
//! pipeline and the command layer clone; all access goes through its lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use super::config::Settings;

const WISHLIST_PREVIEW_LEN: usize = 5;
const SERIES_PREVIEW_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreferenceSet {
    /// Lower-cased, unique, in insertion order.
    wishlist_names: Vec<String>,
    /// Unique, in insertion order. Matched case-sensitively.
    wanted_series: Vec<String>,
    pub min_score: i64,
}

impl PreferenceSet {
    pub fn new(
        wishlist_names: impl IntoIterator<Item = String>,
        wanted_series: impl IntoIterator<Item = String>,
        min_score: i64,
    ) -> Self {
        let mut set = Self {
            wishlist_names: Vec::new(),
            wanted_series: Vec::new(),
            min_score,
        };
        for name in wishlist_names {
            set.add_wishlist_name(&name);
        }
        for series in wanted_series {
            set.add_wanted_series(&series);
        }
        set
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.namelist.iter().cloned(),
            settings.series_list.iter().cloned(),
            settings.min_kak,
        )
    }

    pub fn wishlist_names(&self) -> &[String] {
        &self.wishlist_names
    }

    pub fn wanted_series(&self) -> &[String] {
        &self.wanted_series
    }

    pub fn is_wishlisted(&self, character_name: &str) -> bool {
        let folded = character_name.to_lowercase();
        self.wishlist_names.iter().any(|name| *name == folded)
    }

    /// True if any wanted series appears verbatim in `text`.
    pub fn mentions_wanted_series(&self, text: &str) -> bool {
        self.wanted_series.iter().any(|series| text.contains(series.as_str()))
    }

    fn add_wishlist_name(&mut self, name: &str) -> AddOutcome {
        add_unique(&mut self.wishlist_names, name.to_lowercase())
    }

    fn remove_wishlist_name(&mut self, name: &str) -> RemoveOutcome {
        remove_existing(&mut self.wishlist_names, &name.to_lowercase())
    }

    fn add_wanted_series(&mut self, series: &str) -> AddOutcome {
        add_unique(&mut self.wanted_series, series.to_string())
    }

    fn remove_wanted_series(&mut self, series: &str) -> RemoveOutcome {
        remove_existing(&mut self.wanted_series, series)
    }

    pub fn summary(&self) -> PreferenceSummary {
        PreferenceSummary {
            min_score: self.min_score,
            wishlist_count: self.wishlist_names.len(),
            series_count: self.wanted_series.len(),
            wishlist_preview: preview(&self.wishlist_names, WISHLIST_PREVIEW_LEN),
            series_preview: preview(&self.wanted_series, SERIES_PREVIEW_LEN),
        }
    }
}

fn add_unique(entries: &mut Vec<String>, entry: String) -> AddOutcome {
    if entries.contains(&entry) {
        AddOutcome::AlreadyPresent
    } else {
        entries.push(entry);
        AddOutcome::Added
    }
}

fn remove_existing(entries: &mut Vec<String>, entry: &str) -> RemoveOutcome {
    match entries.iter().position(|e| e == entry) {
        Some(index) => {
            entries.remove(index);
            RemoveOutcome::Removed
        }
        None => RemoveOutcome::NotPresent,
    }
}

fn preview(entries: &[String], len: usize) -> Preview {
    Preview {
        shown: entries.iter().take(len).cloned().collect(),
        hidden: entries.len().saturating_sub(len),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotPresent,
}

/// First few entries of a list plus how many were left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub shown: Vec<String>,
    pub hidden: usize,
}

/// Overview of the current preferences, as shown by the config command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceSummary {
    pub min_score: i64,
    pub wishlist_count: usize,
    pub series_count: usize,
    pub wishlist_preview: Preview,
    pub series_preview: Preview,
}

/// Cloneable handle to the process-wide preference set.
///
/// Every mutation runs its check and its write under one write lock, so a
/// reader sees either the state before or after it. Listings are copied out
/// under the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedPreferences {
    inner: Arc<RwLock<PreferenceSet>>,
}

impl SharedPreferences {
    pub fn new(set: PreferenceSet) -> Self {
        Self {
            inner: Arc::new(RwLock::new(set)),
        }
    }

    /// Hold the read lock for the duration of one match.
    pub fn read(&self) -> RwLockReadGuard<'_, PreferenceSet> {
        // Each mutation is a single push or remove, so a poisoned set is still whole.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PreferenceSet> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> PreferenceSet {
        self.read().clone()
    }

    pub fn add_wishlist_name(&self, name: &str) -> AddOutcome {
        self.write().add_wishlist_name(name)
    }

    pub fn remove_wishlist_name(&self, name: &str) -> RemoveOutcome {
        self.write().remove_wishlist_name(name)
    }

    pub fn list_wishlist_names(&self) -> Vec<String> {
        self.read().wishlist_names.clone()
    }

    pub fn add_wanted_series(&self, series: &str) -> AddOutcome {
        self.write().add_wanted_series(series)
    }

    pub fn remove_wanted_series(&self, series: &str) -> RemoveOutcome {
        self.write().remove_wanted_series(series)
    }

    pub fn list_wanted_series(&self) -> Vec<String> {
        self.read().wanted_series.clone()
    }

    pub fn min_score(&self) -> i64 {
        self.read().min_score
    }

    pub fn summary(&self) -> PreferenceSummary {
        self.read().summary()
    }
}
