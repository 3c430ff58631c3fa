//! Slot schema - Tier field tables, type registry and alias resolution
//!
//! Every slot the scorer can ever ask for is declared here as `const` data.
//! A project type never invents slots; it only selects which tiers apply.

pub mod alias;
pub mod registry;

use serde::Serialize;

pub use alias::{resolve_type, ALIASES};
pub use registry::{generic, lookup, slots_for, TypeDefinition, GENERIC_TYPE, TYPE_DEFINITIONS};

/// A named group of related slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// Project identity
    Project,
    /// Client-side stack
    Frontend,
    /// Server-side stack
    Backend,
    /// Delivery concerns shared by deployable projects
    Universal,
    /// Human-authored 6W context
    Human,
}

impl Tier {
    /// All tiers in slot-list order
    pub const ALL: [Tier; 5] = [
        Tier::Project,
        Tier::Frontend,
        Tier::Backend,
        Tier::Universal,
        Tier::Human,
    ];

    /// The fixed slot table for this tier
    pub fn slots(self) -> &'static [Slot] {
        match self {
            Tier::Project => &PROJECT_SLOTS,
            Tier::Frontend => &FRONTEND_SLOTS,
            Tier::Backend => &BACKEND_SLOTS,
            Tier::Universal => &UNIVERSAL_SLOTS,
            Tier::Human => &HUMAN_SLOTS,
        }
    }

    /// Top-level document key holding this tier's fields
    pub fn section(self) -> &'static str {
        match self {
            Tier::Project => "project",
            Tier::Frontend | Tier::Backend | Tier::Universal => "stack",
            Tier::Human => "human_context",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Project => write!(f, "PROJECT"),
            Tier::Frontend => write!(f, "FRONTEND"),
            Tier::Backend => write!(f, "BACKEND"),
            Tier::Universal => write!(f, "UNIVERSAL"),
            Tier::Human => write!(f, "HUMAN"),
        }
    }
}

/// One expected field of the scoring schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    /// Tier this slot belongs to
    pub tier: Tier,
    /// Key inside the tier's section
    pub field: &'static str,
    /// Stable dotted path into the document, e.g. `stack.database`
    pub path: &'static str,
}

impl Slot {
    const fn new(tier: Tier, field: &'static str, path: &'static str) -> Self {
        Self { tier, field, path }
    }
}

/// Identity fields every type scores
pub const PROJECT_SLOTS: [Slot; 3] = [
    Slot::new(Tier::Project, "name", "project.name"),
    Slot::new(Tier::Project, "goal", "project.goal"),
    Slot::new(Tier::Project, "main_language", "project.main_language"),
];

/// Client-side stack fields
pub const FRONTEND_SLOTS: [Slot; 4] = [
    Slot::new(Tier::Frontend, "frontend", "stack.frontend"),
    Slot::new(Tier::Frontend, "css_framework", "stack.css_framework"),
    Slot::new(Tier::Frontend, "ui_library", "stack.ui_library"),
    Slot::new(Tier::Frontend, "state_management", "stack.state_management"),
];

/// Server-side stack fields
pub const BACKEND_SLOTS: [Slot; 5] = [
    Slot::new(Tier::Backend, "backend", "stack.backend"),
    Slot::new(Tier::Backend, "runtime", "stack.runtime"),
    Slot::new(Tier::Backend, "database", "stack.database"),
    Slot::new(Tier::Backend, "connection", "stack.connection"),
    Slot::new(Tier::Backend, "api_type", "stack.api_type"),
];

/// Hosting, build and CI fields
pub const UNIVERSAL_SLOTS: [Slot; 3] = [
    Slot::new(Tier::Universal, "hosting", "stack.hosting"),
    Slot::new(Tier::Universal, "build", "stack.build"),
    Slot::new(Tier::Universal, "cicd", "stack.cicd"),
];

/// The 6W human context
pub const HUMAN_SLOTS: [Slot; 6] = [
    Slot::new(Tier::Human, "who", "human_context.who"),
    Slot::new(Tier::Human, "what", "human_context.what"),
    Slot::new(Tier::Human, "where", "human_context.where"),
    Slot::new(Tier::Human, "why", "human_context.why"),
    Slot::new(Tier::Human, "when", "human_context.when"),
    Slot::new(Tier::Human, "how", "human_context.how"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_sizes() {
        assert_eq!(Tier::Project.slots().len(), 3);
        assert_eq!(Tier::Frontend.slots().len(), 4);
        assert_eq!(Tier::Backend.slots().len(), 5);
        assert_eq!(Tier::Universal.slots().len(), 3);
        assert_eq!(Tier::Human.slots().len(), 6);
    }

    #[test]
    fn test_paths_follow_section_and_field() {
        for tier in Tier::ALL {
            for slot in tier.slots() {
                assert_eq!(slot.tier, tier);
                assert_eq!(slot.path, format!("{}.{}", tier.section(), slot.field));
            }
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<&str> = Tier::ALL
            .iter()
            .flat_map(|t| t.slots().iter().map(|s| s.path))
            .collect();
        let count = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), count);
        assert_eq!(count, 21);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::Human.to_string(), "HUMAN");
        assert_eq!(
            serde_json::to_string(&Tier::Universal).unwrap(),
            "\"UNIVERSAL\""
        );
    }
}
