// tests for keyword moderation

use modchat::{Config, Moderator};

fn moderator() -> Moderator {
    let config = Config::with_api_key("test-key".to_string());
    Moderator::new(&config.banned_terms).unwrap()
}

#[test]
fn test_clean_text_is_safe() {
    let moderation = moderator().check("How do I sort a vector in Rust?");
    assert!(moderation.is_safe);
    assert!(moderation.matched.is_empty());
}

#[test]
fn test_whole_word_match() {
    let moderation = moderator().check("How do I kill a process in Linux?");
    assert!(!moderation.is_safe);
    assert_eq!(moderation.matched, vec!["kill"]);
}

#[test]
fn test_substring_does_not_match() {
    // "kill" is embedded in larger words, no boundary hit
    let moderation = moderator().check("skilled workers spotted a killer whale");
    assert!(moderation.is_safe);
}

#[test]
fn test_case_insensitive_match() {
    let moderation = moderator().check("KILL the lights before the Attack scene");
    assert!(!moderation.is_safe);
    assert_eq!(moderation.matched, vec!["kill", "attack"]);
}

#[test]
fn test_matches_in_list_order() {
    // "attack" appears first in the text but "kill" comes first in the list
    let moderation = moderator().check("attack first, kill later");
    assert_eq!(moderation.matched, vec!["kill", "attack"]);
}

#[test]
fn test_punctuation_counts_as_boundary() {
    let moderation = moderator().check("is this a bomb?");
    assert!(!moderation.is_safe);
    assert_eq!(moderation.matched, vec!["bomb"]);
}

#[test]
fn test_empty_text_is_safe() {
    let moderation = moderator().check("");
    assert!(moderation.is_safe);
    assert!(moderation.matched.is_empty());
}

#[test]
fn test_redact_clean_text_unchanged() {
    let text = "Nothing objectionable here.";
    assert_eq!(moderator().redact(text), text);
}

#[test]
fn test_redact_empty_text() {
    assert_eq!(moderator().redact(""), "");
}

#[test]
fn test_redact_replaces_whole_word() {
    let redacted = moderator().redact("Use the attack command");
    assert_eq!(redacted, "Use the [REDACTED] command");
}

#[test]
fn test_redact_is_case_insensitive() {
    let redacted = moderator().redact("Kill it with fire, KILL it now");
    assert_eq!(redacted, "[REDACTED] it with fire, [REDACTED] it now");
}

#[test]
fn test_redact_leaves_substrings_alone() {
    let text = "the killer was skilled";
    assert_eq!(moderator().redact(text), text);
}

#[test]
fn test_redacted_output_is_safe() {
    let moderator = moderator();
    let redacted = moderator.redact("hack the weapon, destroy the drugs");
    assert!(moderator.check(&redacted).is_safe);
}

#[test]
fn test_redact_is_idempotent() {
    let moderator = moderator();
    let once = moderator.redact("murder on the dance floor");
    let twice = moderator.redact(&once);
    assert_eq!(once, twice);
}
