//! slot_ignore resolution
//!
//! Turns the user's `slot_ignore` entry into canonical slot paths. Accepted
//! spellings:
//!
//! - `project.name`, `stack.database`: used as written
//! - `human.who`: the `human.` tier prefix maps onto `human_context.`
//! - `human_context.who`: the canonical path itself
//! - `who`: bare tokens are HUMAN fields only; `database` would be ambiguous
//!   across stack tiers, so other tiers must be spelled out
//!
//! Anything that does not name a slot of the resolved type is dropped.

use crate::schema::Slot;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

const HUMAN_SHORT_PREFIX: &str = "human.";
const HUMAN_SECTION_PREFIX: &str = "human_context.";
const PASSTHROUGH_PREFIXES: &[&str] = &["project.", "stack.", HUMAN_SECTION_PREFIX];

/// Resolve a raw `slot_ignore` value against the slots of the resolved type.
///
/// `raw` may be a sequence of strings or one comma-separated string. Other
/// shapes ignore nothing.
pub fn resolve_ignored(raw: Option<&Value>, available: &[Slot]) -> BTreeSet<&'static str> {
    let tokens = match raw {
        Some(Value::String(s)) => split_tokens(s),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .flat_map(split_tokens)
            .collect(),
        _ => Vec::new(),
    };

    let mut ignored = BTreeSet::new();
    let mut dropped = Vec::new();

    for token in tokens {
        let path = normalize_token(token);
        match available.iter().find(|slot| slot.path == path) {
            Some(slot) => {
                ignored.insert(slot.path);
            }
            None => dropped.push(token),
        }
    }

    if !dropped.is_empty() {
        debug!("Dropping slot_ignore entries with no matching slot: {:?}", dropped);
    }

    ignored
}

/// Canonical slot path for a single trimmed token
pub fn normalize_token(token: &str) -> String {
    if PASSTHROUGH_PREFIXES.iter().any(|p| token.starts_with(p)) {
        token.to_string()
    } else if let Some(field) = token.strip_prefix(HUMAN_SHORT_PREFIX) {
        format!("{}{}", HUMAN_SECTION_PREFIX, field)
    } else {
        format!("{}{}", HUMAN_SECTION_PREFIX, token)
    }
}

fn split_tokens(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
