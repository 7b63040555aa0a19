//! Text commands for editing the preference lists at runtime.
//!
//! ```text
//! /wishlist add <character>     /series add <series>
//! /wishlist remove <character>  /series remove <series>
//! /wishlist list                /series list
//! /config                       /help
//! ```

use super::preferences::{AddOutcome, Preview, RemoveOutcome, SharedPreferences};

const WISHLIST_USAGE: &str =
    "Usage: `/wishlist add <character>`, `/wishlist remove <character>`, or `/wishlist list`";
const SERIES_USAGE: &str = "Usage: `/series add <series>`, `/series remove <series>`, or `/series list`";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    WishlistAdd(String),
    WishlistRemove(String),
    WishlistList,
    SeriesAdd(String),
    SeriesRemove(String),
    SeriesList,
    Config,
    Help,
    /// Recognised command with a bad action or missing argument.
    Usage(&'static str),
}

impl Command {
    /// Parse a line. Returns `None` for anything that is not a command.
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let text = text.trim();
        let rest = text.strip_prefix('/')?;

        let (name, args) = split_word(rest);
        match name.to_lowercase().as_str() {
            "wishlist" => Some(parse_list_action(
                args,
                Self::WishlistAdd,
                Self::WishlistRemove,
                Self::WishlistList,
                WISHLIST_USAGE,
            )),
            "series" => Some(parse_list_action(
                args,
                Self::SeriesAdd,
                Self::SeriesRemove,
                Self::SeriesList,
                SERIES_USAGE,
            )),
            "config" => Some(Self::Config),
            "help" => Some(Self::Help),
            _ => None,
        }
    }

    /// Run the command against the shared preferences and build the reply.
    pub fn apply(&self, prefs: &SharedPreferences) -> String {
        match self {
            Self::WishlistAdd(name) => match prefs.add_wishlist_name(name) {
                AddOutcome::Added => format!("✅ Added **{name}** to wishlist!"),
                AddOutcome::AlreadyPresent => format!("**{name}** is already on your wishlist!"),
            },
            Self::WishlistRemove(name) => match prefs.remove_wishlist_name(name) {
                RemoveOutcome::Removed => format!("❌ Removed **{name}** from wishlist!"),
                RemoveOutcome::NotPresent => format!("**{name}** is not on your wishlist!"),
            },
            Self::WishlistList => {
                let names = prefs.list_wishlist_names();
                if names.is_empty() {
                    "Your wishlist is empty!".to_string()
                } else {
                    bullet_list("📝 Your Wishlist", names.iter().map(|name| title_case(name)))
                }
            }
            Self::SeriesAdd(series) => match prefs.add_wanted_series(series) {
                AddOutcome::Added => format!("✅ Added **{series}** to wanted series!"),
                AddOutcome::AlreadyPresent => format!("**{series}** is already in your wanted series!"),
            },
            Self::SeriesRemove(series) => match prefs.remove_wanted_series(series) {
                RemoveOutcome::Removed => format!("❌ Removed **{series}** from wanted series!"),
                RemoveOutcome::NotPresent => format!("**{series}** is not in your wanted series!"),
            },
            Self::SeriesList => {
                let series = prefs.list_wanted_series();
                if series.is_empty() {
                    "No wanted series configured!".to_string()
                } else {
                    bullet_list("📺 Wanted Series", series.into_iter())
                }
            }
            Self::Config => render_config(prefs),
            Self::Help => help_text().to_string(),
            Self::Usage(usage) => (*usage).to_string(),
        }
    }
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn parse_list_action(
    args: &str,
    add: fn(String) -> Command,
    remove: fn(String) -> Command,
    list: Command,
    usage: &'static str,
) -> Command {
    let (action, argument) = split_word(args);
    match (action.to_lowercase().as_str(), argument) {
        ("add", arg) if !arg.is_empty() => add(arg.to_string()),
        ("remove", arg) if !arg.is_empty() => remove(arg.to_string()),
        ("list", _) => list,
        _ => Command::Usage(usage),
    }
}

fn bullet_list(title: &str, entries: impl Iterator<Item = String>) -> String {
    let mut out = title.to_string();
    for entry in entries {
        out.push_str("\n• ");
        out.push_str(&entry);
    }
    out
}

/// Upper-case the first letter of every word, lower-case the rest.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

fn render_preview(preview: &Preview) -> String {
    let mut out = preview.shown.join(", ");
    if preview.hidden > 0 {
        out.push_str(&format!(" (+{} more)", preview.hidden));
    }
    out
}

fn render_config(prefs: &SharedPreferences) -> String {
    let summary = prefs.summary();
    let mut out = format!(
        "⚙️ Configuration\nMin Kakera Value: {}\nWishlist Count: {}\nWanted Series Count: {}",
        summary.min_score, summary.wishlist_count, summary.series_count
    );
    if summary.wishlist_count > 0 {
        out.push_str("\nWishlist Preview: ");
        out.push_str(&render_preview(&summary.wishlist_preview));
    }
    if summary.series_count > 0 {
        out.push_str("\nSeries Preview: ");
        out.push_str(&render_preview(&summary.series_preview));
    }
    out
}

pub const fn help_text() -> &'static str {
    r"
Commands:
/wishlist add|remove <character> - Edit your wishlist
/wishlist list                   - Show your wishlist
/series add|remove <series>      - Edit wanted series
/series list                     - Show wanted series
/config                          - Show current configuration
/help                            - Show this help message
"
}
