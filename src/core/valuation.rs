use super::parser::ExtractedValues;

/// Claim availability term of the rank formula. Held at 1 until the roll
/// source exposes a real value for it.
pub const CLAIM_AVAILABILITY: f64 = 1.0;

/// Turn extracted fields into a single kakera score.
///
/// A stated value always wins. Otherwise the like and claim ranks are folded
/// into an estimate; with neither present the score is 0.
pub fn kakera_value(values: &ExtractedValues) -> i64 {
    if let Some(kakera) = values.kakera {
        return kakera;
    }

    if values.likes.is_none() && values.claims.is_none() {
        return 0;
    }

    estimate_from_ranks(values.likes.unwrap_or(0), values.claims.unwrap_or(0))
}

/// `(25000 * (pkak + 70)^-0.75 + 20) * (1 + CA / 5500) + 0.5`, truncated.
pub fn estimate_from_ranks(likes_rank: i64, claims_rank: i64) -> i64 {
    let pkak = (likes_rank as f64 + claims_rank as f64) / 2.0;
    let multiplier = 1.0 + CLAIM_AVAILABILITY / 5500.0;
    let value = (25000.0 * (pkak + 70.0).powf(-0.75) + 20.0) * multiplier + 0.5;
    value.trunc() as i64
}
