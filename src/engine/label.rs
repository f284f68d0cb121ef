//! Trait label resolution for preference options.
//!
//! Options should carry an explicit trait label. Older question banks only
//! encoded the trait inside the option text, so a label is derived from the
//! text when none is set:
//!
//! 1. the first non-empty parenthetical annotation, trimmed
//!    (`"I take charge (Leader)"` gives `"Leader"`);
//! 2. otherwise the first two words, stripped of surrounding punctuation;
//! 3. blank text has no label.

use crate::types::snapshot::AnswerOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabel {
    pub name: String,
    pub derived: bool,
}

pub fn resolve_label(option: &AnswerOption) -> Option<ResolvedLabel> {
    if let Some(name) = option
        .trait_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        return Some(ResolvedLabel {
            name: name.to_string(),
            derived: false,
        });
    }

    derive_trait_label(&option.text).map(|name| ResolvedLabel {
        name,
        derived: true,
    })
}

pub fn derive_trait_label(text: &str) -> Option<String> {
    parenthetical(text).or_else(|| leading_words(text, 2))
}

fn parenthetical(text: &str) -> Option<String> {
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let close = after.find(')')?;
        let inner = after[..close].trim();
        if !inner.is_empty() {
            return Some(inner.to_string());
        }
        rest = &after[close + 1..];
    }
    None
}

fn leading_words(text: &str, count: usize) -> Option<String> {
    let words = text
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .take(count)
        .collect::<Vec<_>>();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(text: &str, trait_name: Option<&str>) -> AnswerOption {
        AnswerOption {
            id: "o".to_string(),
            text: text.to_string(),
            is_correct: None,
            trait_name: trait_name.map(str::to_string),
            weight: None,
            group_id: None,
        }
    }

    #[test]
    fn parenthetical_annotation_wins() {
        assert_eq!(
            derive_trait_label("I take charge of the room (Leader)").as_deref(),
            Some("Leader")
        );
    }

    #[test]
    fn empty_parentheses_are_skipped() {
        assert_eq!(
            derive_trait_label("Plan ahead () then act ( Organizer )").as_deref(),
            Some("Organizer")
        );
    }

    #[test]
    fn unclosed_parenthesis_falls_back_to_words() {
        assert_eq!(
            derive_trait_label("Careful planner (unfinished").as_deref(),
            Some("Careful planner")
        );
    }

    #[test]
    fn first_two_words_strip_punctuation() {
        assert_eq!(
            derive_trait_label("  \"Detail-oriented,  always checks twice").as_deref(),
            Some("Detail-oriented always")
        );
        assert_eq!(derive_trait_label("Creative").as_deref(), Some("Creative"));
    }

    #[test]
    fn blank_text_has_no_label() {
        assert_eq!(derive_trait_label(""), None);
        assert_eq!(derive_trait_label("  -- ... "), None);
    }

    #[test]
    fn explicit_label_beats_text() {
        let resolved = resolve_label(&option("Something (Other)", Some(" Leader ")))
            .expect("label should resolve");
        assert_eq!(resolved.name, "Leader");
        assert!(!resolved.derived);
    }

    #[test]
    fn blank_label_uses_derivation() {
        let resolved =
            resolve_label(&option("Team player first", Some("  "))).expect("label should derive");
        assert_eq!(resolved.name, "Team player");
        assert!(resolved.derived);
    }
}
