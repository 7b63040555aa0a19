// Notification model types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Why a roll is worth a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchReason {
    /// Character name is on the wishlist
    OnWishlist,
    /// Description mentions a wanted series
    WantedSeries,
    /// Kakera value reaches the minimum score
    HighValue,
}

impl MatchReason {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OnWishlist => "Wishlist",
            Self::WantedSeries => "Wanted Series",
            Self::HighValue => "High Value",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OnWishlist => "This character is on your wishlist!",
            Self::WantedSeries => "This character is from a wanted series!",
            Self::HighValue => "High value character!",
        }
    }

    /// Get all reasons, in evaluation order
    pub fn all() -> &'static [MatchReason] {
        &[Self::OnWishlist, Self::WantedSeries, Self::HighValue]
    }
}

/// Outcome of comparing one roll against the preference set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub wishlisted: bool,
    pub wanted_series: bool,
    pub high_value: bool,
}

impl MatchResult {
    pub fn is_match(&self, reason: MatchReason) -> bool {
        match reason {
            MatchReason::OnWishlist => self.wishlisted,
            MatchReason::WantedSeries => self.wanted_series,
            MatchReason::HighValue => self.high_value,
        }
    }

    pub fn reasons(&self) -> BTreeSet<MatchReason> {
        MatchReason::all()
            .iter()
            .copied()
            .filter(|reason| self.is_match(*reason))
            .collect()
    }

    pub fn any(&self) -> bool {
        self.wishlisted || self.wanted_series || self.high_value
    }
}

/// A roll that passed the decider, handed to the delivery side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub character_name: String,
    pub score: i64,
    pub reasons: BTreeSet<MatchReason>,
}

impl Notification {
    pub fn has_reason(&self, reason: MatchReason) -> bool {
        self.reasons.contains(&reason)
    }
}
