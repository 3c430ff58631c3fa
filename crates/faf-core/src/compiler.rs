//! FAF compiler - Document in, completeness score out
//!
//! Single pass, no state:
//!
//! ```text
//! document ─▶ resolve_type ─▶ slots_for ─▶ resolve_ignored ─▶ compute ─▶ CompileResult
//! ```

use crate::document::lookup;
use crate::error::{FafError, Result};
use crate::medal::Medal;
use crate::schema::{resolve_type, slots_for, Slot, Tier};
use crate::score::{compute, percentage};
use crate::slot_ignore::resolve_ignored;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::trace;

/// Result of compiling one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileResult {
    /// Alias-resolved registry id the document was scored as
    pub canonical_type: &'static str,
    /// Full slot list for `canonical_type`, before ignores
    pub slots: Vec<Slot>,
    /// slot_ignore entries that matched a slot of this type
    pub ignored: BTreeSet<&'static str>,
    /// Effective slots holding a value
    pub filled: usize,
    /// Slot count after ignores
    pub total: usize,
    /// Completeness percentage in `0..=100`
    pub score: u8,
    /// Effective slots still lacking a value
    pub missing: Vec<Slot>,
}

/// Filled/total for one tier of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierScore {
    /// Tier being reported
    pub tier: Tier,
    /// Filled slots in this tier
    pub filled: usize,
    /// Non-ignored slots in this tier
    pub total: usize,
    /// Tier percentage
    pub score: u8,
}

impl CompileResult {
    /// Medal band for this score
    pub fn medal(&self) -> Medal {
        Medal::from_score(self.score)
    }

    /// Slots that count toward the score, in schema order
    pub fn effective_slots(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots
            .iter()
            .filter(move |slot| !self.ignored.contains(slot.path))
    }

    /// Slots that count toward the score and hold a value
    pub fn filled_slots(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.effective_slots()
            .filter(move |slot| !self.missing.contains(slot))
    }

    /// Per-tier filled/total for every tier this type includes.
    ///
    /// A tier whose slots are all ignored still appears, with a zero total.
    pub fn tier_breakdown(&self) -> Vec<TierScore> {
        Tier::ALL
            .iter()
            .filter(|tier| self.slots.iter().any(|slot| slot.tier == **tier))
            .map(|&tier| {
                let total = self.effective_slots().filter(|s| s.tier == tier).count();
                let missing = self.missing.iter().filter(|s| s.tier == tier).count();
                let filled = total - missing;
                TierScore {
                    tier,
                    filled,
                    total,
                    score: percentage(filled, total),
                }
            })
            .collect()
    }
}

/// Compile a decoded document into its completeness score.
///
/// Fails only when the root is not a mapping.
pub fn compile(document: &Value) -> Result<CompileResult> {
    if !document.is_object() {
        return Err(FafError::invalid_document(document));
    }

    let raw_type = lookup(document, "project.type").and_then(Value::as_str);
    let canonical_type = resolve_type(raw_type);
    let slots = slots_for(canonical_type);
    let ignored = resolve_ignored(document.get("slot_ignore"), &slots);
    let card = compute(&slots, &ignored, document);

    trace!(
        "Compiled {} document: {}/{} slots filled ({}%), {} ignored",
        canonical_type,
        card.filled,
        card.total,
        card.score,
        ignored.len()
    );

    Ok(CompileResult {
        canonical_type,
        slots,
        ignored,
        filled: card.filled,
        total: card.total,
        score: card.score,
        missing: card.missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_cli() -> Value {
        json!({
            "project": { "name": "faf", "goal": "score context", "main_language": "Rust", "type": "cli" },
            "human_context": {
                "who": "devs", "what": "scorer", "where": "terminal",
                "why": "context", "when": "now", "how": "cargo"
            }
        })
    }

    #[test]
    fn test_rejects_non_mapping_root() {
        assert_eq!(
            compile(&json!("project: x")),
            Err(FafError::InvalidDocument { found: "string" })
        );
        assert!(compile(&json!([1, 2])).is_err());
        assert!(compile(&Value::Null).is_err());
    }

    #[test]
    fn test_empty_mapping_is_generic() {
        let result = compile(&json!({})).unwrap();
        assert_eq!(result.canonical_type, "generic");
        assert_eq!(result.total, 12);
        assert_eq!(result.filled, 0);
        assert_eq!(result.score, 0);
        assert_eq!(result.missing.len(), 12);
    }

    #[test]
    fn test_non_string_type_is_generic() {
        let result = compile(&json!({ "project": { "type": 42 } })).unwrap();
        assert_eq!(result.canonical_type, "generic");
    }

    #[test]
    fn test_full_cli_document() {
        let result = compile(&full_cli()).unwrap();
        assert_eq!(result.canonical_type, "cli");
        assert_eq!((result.filled, result.total, result.score), (9, 9, 100));
        assert!(result.missing.is_empty());
        assert_eq!(result.medal(), Medal::Trophy);
    }

    #[test]
    fn test_tier_breakdown_sums_to_totals() {
        let doc = json!({
            "project": { "name": "app", "type": "fullstack" },
            "stack": { "frontend": "React", "database": "PG", "hosting": "Vercel" },
            "human_context": { "who": "devs" },
            "slot_ignore": ["stack.cicd", "why"]
        });
        let result = compile(&doc).unwrap();
        let breakdown = result.tier_breakdown();

        assert_eq!(breakdown.len(), 5);
        assert_eq!(breakdown.iter().map(|t| t.filled).sum::<usize>(), result.filled);
        assert_eq!(breakdown.iter().map(|t| t.total).sum::<usize>(), result.total);

        let universal = breakdown.iter().find(|t| t.tier == Tier::Universal).unwrap();
        assert_eq!((universal.filled, universal.total), (1, 2));
        let human = breakdown.iter().find(|t| t.tier == Tier::Human).unwrap();
        assert_eq!((human.filled, human.total), (1, 5));
    }

    #[test]
    fn test_tier_breakdown_skips_excluded_tiers() {
        let result = compile(&full_cli()).unwrap();
        let tiers: Vec<Tier> = result.tier_breakdown().iter().map(|t| t.tier).collect();
        assert_eq!(tiers, vec![Tier::Project, Tier::Human]);
    }

    #[test]
    fn test_filled_slots_complement_missing() {
        let mut doc = full_cli();
        doc["human_context"]["how"] = json!("");
        let result = compile(&doc).unwrap();
        assert_eq!(result.filled_slots().count(), result.filled);
        assert!(result.filled_slots().all(|s| s.path != "human_context.how"));
        assert_eq!(result.missing[0].path, "human_context.how");
    }

    #[test]
    fn test_result_serializes() {
        let result = compile(&full_cli()).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["canonical_type"], "cli");
        assert_eq!(value["score"], 100);
        assert_eq!(value["slots"][0]["path"], "project.name");
        assert_eq!(value["slots"][0]["tier"], "PROJECT");
    }
}
