//! Output rendering for `faf score`

use colored::Colorize;
use faf_core::{CompileResult, Medal, TierScore};
use serde::Serialize;

/// JSON shape printed by `faf score --json`
#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    #[serde(flatten)]
    pub result: &'a CompileResult,
    pub medal: Medal,
    pub tiers: Vec<TierScore>,
}

impl<'a> ScoreReport<'a> {
    pub fn new(result: &'a CompileResult) -> Self {
        Self {
            result,
            medal: result.medal(),
            tiers: result.tier_breakdown(),
        }
    }
}

/// Render a result as JSON
pub fn render_json(result: &CompileResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ScoreReport::new(result))
}

/// Render a result as human-readable text
pub fn render_text(result: &CompileResult, show_missing: bool) -> String {
    let medal = result.medal();
    let mut out = String::new();

    out.push_str(&format!(
        "Score: {}% ({}/{}) {}\n",
        result.score.to_string().bold(),
        result.filled,
        result.total,
        medal
    ));
    out.push_str(&format!("Type: {}\n", result.canonical_type));

    for tier in result.tier_breakdown() {
        out.push_str(&format!("  {:<10} {}/{}\n", tier.tier.to_string(), tier.filled, tier.total));
    }

    if !result.ignored.is_empty() {
        let ignored: Vec<&str> = result.ignored.iter().copied().collect();
        out.push_str(&format!("Ignored: {}\n", ignored.join(", ").dimmed()));
    }

    if show_missing && !result.missing.is_empty() {
        out.push_str(&format!("{}\n", "Missing:".yellow()));
        for slot in &result.missing {
            out.push_str(&format!("  - {}\n", slot.path));
        }
    }

    if let (Some(next), Some(points)) = (medal.next(), Medal::points_to_next(result.score)) {
        out.push_str(&format!(
            "Next: {}% {} {} ({}% to go!)\n",
            next.threshold(),
            next.emoji(),
            next.label(),
            points
        ));
    }

    out
}
