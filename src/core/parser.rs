//! Extraction of numeric fields from roll descriptions.
//!
//! Three independent rules, each applied once to the whole text:
//! - direct value: `**1234**<:kakera:ID>` (emphasis optional)
//! - likes rank: `Likes: #56`
//! - claims rank: `Claims: #78`

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref KAKERA_VALUE: Regex =
        Regex::new(r"(?:\*\*)?([0-9]+)(?:\*\*)?<:kakera:[^>]*>").expect("Invalid kakera regex");
    static ref LIKES_RANK: Regex = Regex::new(r"Likes: #?([0-9]+)").expect("Invalid likes regex");
    static ref CLAIMS_RANK: Regex = Regex::new(r"Claims: #?([0-9]+)").expect("Invalid claims regex");
}

/// Raw numeric fields found in a description. `None` means the rule did not match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractedValues {
    pub kakera: Option<i64>,
    pub likes: Option<i64>,
    pub claims: Option<i64>,
}

impl ExtractedValues {
    pub fn is_empty(&self) -> bool {
        self.kakera.is_none() && self.likes.is_none() && self.claims.is_none()
    }
}

pub fn extract(text: &str) -> ExtractedValues {
    ExtractedValues {
        kakera: first_number(&KAKERA_VALUE, text),
        likes: first_number(&LIKES_RANK, text),
        claims: first_number(&CLAIMS_RANK, text),
    }
}

// Digit runs too long for i64 count as absent.
fn first_number(pattern: &Regex, text: &str) -> Option<i64> {
    let caps = pattern.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_direct_value() {
        let values = extract("Re:Zero\n**500**<:kakera:469835869059153940>");
        assert_eq!(values.kakera, Some(500));
        assert_eq!(values.likes, None);
        assert_eq!(values.claims, None);
    }

    #[test]
    fn test_extract_direct_value_without_emphasis() {
        let values = extract("Some Series\n92<:kakera:469835869059153940>");
        assert_eq!(values.kakera, Some(92));
    }

    #[test]
    fn test_extract_ranks() {
        let values = extract("Some Series\nClaims: #30\nLikes: #50");
        assert_eq!(values.kakera, None);
        assert_eq!(values.likes, Some(50));
        assert_eq!(values.claims, Some(30));
    }

    #[test]
    fn test_extract_rank_without_hash() {
        let values = extract("Likes: 12");
        assert_eq!(values.likes, Some(12));
    }

    #[test]
    fn test_first_match_wins() {
        let values = extract("**10**<:kakera:1> **20**<:kakera:1>\nLikes: #1\nLikes: #2");
        assert_eq!(values.kakera, Some(10));
        assert_eq!(values.likes, Some(1));
    }

    #[test]
    fn test_extract_nothing() {
        let values = extract("Just a character with no numbers attached");
        assert!(values.is_empty());
    }

    #[test]
    fn test_overflowing_number_is_absent() {
        let values = extract("Likes: #99999999999999999999999");
        assert_eq!(values.likes, None);
    }
}
