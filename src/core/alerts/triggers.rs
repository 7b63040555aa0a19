// Preference matching for roll events.
//
// Each reason has its own check; `match_preferences` runs all of them.

use super::model::{MatchReason, MatchResult};
use crate::core::model::RollEvent;
use crate::core::preferences::PreferenceSet;

/// Context provided to the checks
pub struct TriggerContext<'a> {
    pub event: &'a RollEvent,
    pub score: i64,
    pub preferences: &'a PreferenceSet,
}

/// Evaluate a single reason against the context.
pub fn evaluate_trigger(reason: MatchReason, ctx: &TriggerContext) -> bool {
    match reason {
        MatchReason::OnWishlist => evaluate_wishlist(ctx),
        MatchReason::WantedSeries => evaluate_wanted_series(ctx),
        MatchReason::HighValue => evaluate_high_value(ctx),
    }
}

pub fn match_preferences(event: &RollEvent, score: i64, preferences: &PreferenceSet) -> MatchResult {
    let ctx = TriggerContext {
        event,
        score,
        preferences,
    };

    MatchResult {
        wishlisted: evaluate_trigger(MatchReason::OnWishlist, &ctx),
        wanted_series: evaluate_trigger(MatchReason::WantedSeries, &ctx),
        high_value: evaluate_trigger(MatchReason::HighValue, &ctx),
    }
}

/// Exact name match after case folding, no fuzzy matching
fn evaluate_wishlist(ctx: &TriggerContext) -> bool {
    ctx.preferences.is_wishlisted(&ctx.event.character_name)
}

/// Series name must appear verbatim in the description
fn evaluate_wanted_series(ctx: &TriggerContext) -> bool {
    ctx.preferences
        .mentions_wanted_series(&ctx.event.description_text)
}

fn evaluate_high_value(ctx: &TriggerContext) -> bool {
    ctx.score >= ctx.preferences.min_score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(name: &str, description: &str) -> RollEvent {
        RollEvent {
            character_name: name.to_string(),
            description_text: description.to_string(),
            footer_text: None,
            has_image: true,
            has_author: true,
        }
    }

    fn make_prefs(names: &[&str], series: &[&str], min_score: i64) -> PreferenceSet {
        PreferenceSet::new(
            names.iter().map(|n| n.to_string()),
            series.iter().map(|s| s.to_string()),
            min_score,
        )
    }

    #[test]
    fn test_wishlist_is_case_insensitive() {
        let prefs = make_prefs(&["Rem"], &[], 1000);
        for name in ["rem", "REM", "Rem"] {
            let result = match_preferences(&make_event(name, ""), 0, &prefs);
            assert!(result.wishlisted, "{name} should match the wishlist");
        }
        let result = match_preferences(&make_event("Remilia", ""), 0, &prefs);
        assert!(!result.wishlisted);
    }

    #[test]
    fn test_wanted_series_is_case_sensitive_substring() {
        let prefs = make_prefs(&[], &["Re:Zero"], 1000);

        let hit = make_event("Rem", "Re:Zero kara Hajimeru Isekai Seikatsu");
        assert!(match_preferences(&hit, 0, &prefs).wanted_series);

        let miss = make_event("Rem", "re:zero kara hajimeru isekai seikatsu");
        assert!(!match_preferences(&miss, 0, &prefs).wanted_series);
    }

    #[test]
    fn test_high_value_threshold_is_inclusive() {
        let prefs = make_prefs(&[], &[], 500);
        let event = make_event("Someone", "");
        assert!(match_preferences(&event, 500, &prefs).high_value);
        assert!(match_preferences(&event, 501, &prefs).high_value);
        assert!(!match_preferences(&event, 499, &prefs).high_value);
    }

    #[test]
    fn test_zero_threshold_matches_everything() {
        let prefs = make_prefs(&[], &[], 0);
        let result = match_preferences(&make_event("Someone", ""), 0, &prefs);
        assert_eq!(
            result,
            MatchResult {
                wishlisted: false,
                wanted_series: false,
                high_value: true,
            }
        );
    }

    #[test]
    fn test_evaluate_single_trigger() {
        let prefs = make_prefs(&["rem"], &["Re:Zero"], 1000);
        let event = make_event("Rem", "Re:Zero");
        let ctx = TriggerContext {
            event: &event,
            score: 10,
            preferences: &prefs,
        };
        assert!(evaluate_trigger(MatchReason::OnWishlist, &ctx));
        assert!(evaluate_trigger(MatchReason::WantedSeries, &ctx));
        assert!(!evaluate_trigger(MatchReason::HighValue, &ctx));
    }
}
