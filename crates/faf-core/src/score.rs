//! Score calculation
//!
//! The denominator is driven by the schema alone: only effective slots are
//! looked up, so extra keys in a document can never inflate a score.

use crate::document::is_filled;
use crate::schema::Slot;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Outcome of scoring one document against an effective slot list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    /// Effective slots holding a value
    pub filled: usize,
    /// Effective slot count
    pub total: usize,
    /// Percentage in `0..=100`
    pub score: u8,
    /// Effective slots without a value, in schema order
    pub missing: Vec<Slot>,
}

/// Score `document` against `slots` minus `ignored`
pub fn compute(slots: &[Slot], ignored: &BTreeSet<&'static str>, document: &Value) -> ScoreCard {
    let mut filled = 0;
    let mut total = 0;
    let mut missing = Vec::new();

    for slot in slots.iter().filter(|slot| !ignored.contains(slot.path)) {
        total += 1;
        if is_filled(document, slot.path) {
            filled += 1;
        } else {
            missing.push(*slot);
        }
    }

    ScoreCard {
        filled,
        total,
        score: percentage(filled, total),
        missing,
    }
}

/// `filled / total` as a whole percentage, rounding halves up.
///
/// Integer arithmetic keeps 2/3 at 67 and 1/8 at 13 with no float drift. An
/// empty schema scores 0.
pub fn percentage(filled: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let filled = filled.min(total);
    let rounded = (filled * 200 + total) / (total * 2);
    rounded.min(100) as u8
}
