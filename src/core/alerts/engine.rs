// Notification engine - runs the roll pipeline and decides what to emit.

use log::{debug, info};

use super::model::{MatchResult, Notification};
use super::triggers::match_preferences;
use crate::core::classifier::classify;
use crate::core::model::{InboundMessage, RollEvent};
use crate::core::parser::extract;
use crate::core::preferences::SharedPreferences;
use crate::core::valuation::kakera_value;

/// Result of the decider for one roll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Notify(Notification),
    Suppressed,
}

impl Decision {
    pub fn into_notification(self) -> Option<Notification> {
        match self {
            Self::Notify(notification) => Some(notification),
            Self::Suppressed => None,
        }
    }
}

/// Emit iff at least one reason matched; the reasons are exactly the matched flags.
pub fn decide(event: &RollEvent, score: i64, result: &MatchResult) -> Decision {
    if !result.any() {
        return Decision::Suppressed;
    }

    Decision::Notify(Notification {
        character_name: event.character_name.clone(),
        score,
        reasons: result.reasons(),
    })
}

/// Stateless per message; only the shared preferences change between calls.
#[derive(Debug, Clone)]
pub struct NotificationEngine {
    preferences: SharedPreferences,
}

impl NotificationEngine {
    pub fn new(preferences: SharedPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &SharedPreferences {
        &self.preferences
    }

    /// Classify, score, match and decide. Non-rolls and unmatched rolls yield `None`.
    pub fn process(&self, message: &InboundMessage) -> Option<Notification> {
        let event = match classify(message) {
            Ok(event) => event,
            Err(reason) => {
                debug!("Skipping message: {:?}", reason);
                return None;
            }
        };

        let score = kakera_value(&extract(&event.description_text));

        let result = {
            let prefs = self.preferences.read();
            match_preferences(&event, score, &prefs)
        };
        debug!(
            "Roll {} scored {} (wishlist: {}, series: {}, high value: {})",
            event.character_name, score, result.wishlisted, result.wanted_series, result.high_value
        );

        let notification = decide(&event, score, &result).into_notification()?;
        info!(
            "Notable roll: {} ({} kakera, {:?})",
            notification.character_name, notification.score, notification.reasons
        );
        Some(notification)
    }
}
