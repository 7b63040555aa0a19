use serde::{Deserialize, Serialize};

/// Embed content of an inbound chat message.
///
/// Every field is optional on the wire; absent flags read as `false` and
/// absent strings as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    pub has_image: bool,
    pub has_author: bool,
    pub author_name: String,
    pub description_text: String,
    pub footer_text: Option<String>,
}

/// A chat message as delivered by the feed. Only the first embed matters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundMessage {
    pub embed: Option<Embed>,
}

impl InboundMessage {
    pub fn with_embed(embed: Embed) -> Self {
        Self { embed: Some(embed) }
    }
}

/// A message the classifier accepted as a character roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RollEvent {
    pub character_name: String,
    pub description_text: String,
    pub footer_text: Option<String>,
    pub has_image: bool,
    pub has_author: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_message() {
        let msg: InboundMessage =
            serde_json::from_str(r#"{"embed":{"author_name":"Rem","has_image":true}}"#).unwrap();
        let embed = msg.embed.unwrap();
        assert_eq!(embed.author_name, "Rem");
        assert!(embed.has_image);
        assert!(!embed.has_author);
        assert!(embed.description_text.is_empty());
        assert!(embed.footer_text.is_none());
    }

    #[test]
    fn test_deserialize_plain_message() {
        let msg: InboundMessage = serde_json::from_str(r#"{"content":"hello"}"#).unwrap();
        assert!(msg.embed.is_none());
    }
}
