//! Decides whether an inbound message is a character roll.
//!
//! List views from the roll source reuse the same embed layout as rolls, but
//! carry an "N / M" page counter in the footer.

use lazy_static::lazy_static;
use regex::Regex;

use super::model::{InboundMessage, RollEvent};

lazy_static! {
    static ref PAGINATION: Regex = Regex::new(r"\d+ / \d+").expect("Invalid pagination regex");
}

/// Why a message was not treated as a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotARoll {
    NoEmbed,
    /// Rolls always carry both the character image and the author line.
    MissingImageOrAuthor,
    Pagination,
}

pub fn classify(message: &InboundMessage) -> Result<RollEvent, NotARoll> {
    let embed = message.embed.as_ref().ok_or(NotARoll::NoEmbed)?;

    if !embed.has_image || !embed.has_author {
        return Err(NotARoll::MissingImageOrAuthor);
    }

    if let Some(footer) = embed.footer_text.as_deref() {
        if is_pagination_footer(footer) {
            return Err(NotARoll::Pagination);
        }
    }

    Ok(RollEvent {
        character_name: embed.author_name.clone(),
        description_text: embed.description_text.clone(),
        footer_text: embed.footer_text.clone(),
        has_image: embed.has_image,
        has_author: embed.has_author,
    })
}

pub fn is_pagination_footer(footer: &str) -> bool {
    PAGINATION.is_match(footer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Embed;

    fn roll_embed() -> Embed {
        Embed {
            has_image: true,
            has_author: true,
            author_name: "Rem".to_string(),
            description_text: "Re:Zero\n**500**<:kakera:469835869059153940>".to_string(),
            footer_text: None,
        }
    }

    #[test]
    fn test_accepts_roll() {
        let event = classify(&InboundMessage::with_embed(roll_embed())).expect("Should classify");
        assert_eq!(event.character_name, "Rem");
        assert!(event.description_text.contains("Re:Zero"));
        assert!(event.footer_text.is_none());
    }

    #[test]
    fn test_keeps_non_pagination_footer() {
        let mut embed = roll_embed();
        embed.footer_text = Some("Belongs to someone".to_string());
        let event = classify(&InboundMessage::with_embed(embed)).unwrap();
        assert_eq!(event.footer_text.as_deref(), Some("Belongs to someone"));
    }

    #[test]
    fn test_rejects_missing_embed() {
        assert_eq!(classify(&InboundMessage::default()), Err(NotARoll::NoEmbed));
    }

    #[test]
    fn test_rejects_missing_image_or_author() {
        let mut embed = roll_embed();
        embed.has_image = false;
        assert_eq!(
            classify(&InboundMessage::with_embed(embed)),
            Err(NotARoll::MissingImageOrAuthor)
        );

        let mut embed = roll_embed();
        embed.has_author = false;
        assert_eq!(
            classify(&InboundMessage::with_embed(embed)),
            Err(NotARoll::MissingImageOrAuthor)
        );
    }

    #[test]
    fn test_rejects_pagination() {
        let mut embed = roll_embed();
        embed.footer_text = Some("3 / 10".to_string());
        assert_eq!(classify(&InboundMessage::with_embed(embed)), Err(NotARoll::Pagination));

        let mut embed = roll_embed();
        embed.footer_text = Some("Page 12 / 40 - sorted by value".to_string());
        assert_eq!(classify(&InboundMessage::with_embed(embed)), Err(NotARoll::Pagination));
    }

    #[test]
    fn test_pagination_footer_needs_spaced_slash() {
        assert!(is_pagination_footer("1 / 2"));
        assert!(!is_pagination_footer("1/2"));
        assert!(!is_pagination_footer("Claims: #12"));
    }
}
