//! Type schema registry
//!
//! Flat table of canonical project type → included tiers. Types are keyed by
//! id; two types with the same tier signature (`dapp`, `react-native`) stay
//! separate entries so they can diverge later.

use super::{Slot, Tier};
use serde::Serialize;

/// Canonical id used when a type is absent or unrecognised
pub const GENERIC_TYPE: &str = "generic";

const MINIMAL: &[Tier] = &[Tier::Project, Tier::Human];
const FRONTEND_APP: &[Tier] = &[Tier::Project, Tier::Frontend, Tier::Universal, Tier::Human];
const BACKEND_SERVICE: &[Tier] = &[Tier::Project, Tier::Backend, Tier::Universal, Tier::Human];
const FULL_STACK: &[Tier] = &[
    Tier::Project,
    Tier::Frontend,
    Tier::Backend,
    Tier::Universal,
    Tier::Human,
];
// No UNIVERSAL tier here, unlike BACKEND_SERVICE.
const BACKEND_ONLY: &[Tier] = &[Tier::Project, Tier::Backend, Tier::Human];
const CLIENT_ONLY: &[Tier] = &[Tier::Project, Tier::Frontend, Tier::Human];
const GENERIC: &[Tier] = &[Tier::Project, Tier::Universal, Tier::Human];

/// Schema definition for one canonical project type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeDefinition {
    /// Canonical lowercase id
    pub id: &'static str,
    /// Tiers scored for this type
    pub tiers: &'static [Tier],
}

impl TypeDefinition {
    const fn new(id: &'static str, tiers: &'static [Tier]) -> Self {
        Self { id, tiers }
    }

    /// Whether this type scores the given tier
    pub fn includes(&self, tier: Tier) -> bool {
        self.tiers.contains(&tier)
    }

    /// Slots for this type, in PROJECT, FRONTEND, BACKEND, UNIVERSAL, HUMAN order
    /// regardless of how `tiers` is written.
    pub fn slots(&self) -> Vec<Slot> {
        Tier::ALL
            .iter()
            .filter(|tier| self.includes(**tier))
            .flat_map(|tier| tier.slots().iter().copied())
            .collect()
    }

    /// Number of slots this type scores against
    pub fn slot_count(&self) -> usize {
        Tier::ALL
            .iter()
            .filter(|tier| self.includes(**tier))
            .map(|tier| tier.slots().len())
            .sum()
    }
}

/// Every canonical type the scorer knows about
pub const TYPE_DEFINITIONS: &[TypeDefinition] = &[
    // 9 slots
    TypeDefinition::new("cli", MINIMAL),
    TypeDefinition::new("kubernetes", MINIMAL),
    TypeDefinition::new("terraform", MINIMAL),
    TypeDefinition::new("github-action", MINIMAL),
    TypeDefinition::new("chrome-extension", MINIMAL),
    TypeDefinition::new("smart-contract", MINIMAL),
    TypeDefinition::new("jupyter", MINIMAL),
    // 16 slots
    TypeDefinition::new("frontend", FRONTEND_APP),
    TypeDefinition::new("react", FRONTEND_APP),
    TypeDefinition::new("vue", FRONTEND_APP),
    // 17 slots
    TypeDefinition::new("backend-api", BACKEND_SERVICE),
    TypeDefinition::new("node-api", BACKEND_SERVICE),
    TypeDefinition::new("python-api", BACKEND_SERVICE),
    // 21 slots
    TypeDefinition::new("fullstack", FULL_STACK),
    TypeDefinition::new("nextjs", FULL_STACK),
    TypeDefinition::new("turborepo", FULL_STACK),
    TypeDefinition::new("monorepo", FULL_STACK),
    // 14 slots
    TypeDefinition::new("mcp-server", BACKEND_ONLY),
    TypeDefinition::new("data-science", BACKEND_ONLY),
    TypeDefinition::new("ml-model", BACKEND_ONLY),
    // 13 slots
    TypeDefinition::new("dapp", CLIENT_ONLY),
    TypeDefinition::new("react-native", CLIENT_ONLY),
    // 12 slots
    TypeDefinition::new(GENERIC_TYPE, GENERIC),
];

/// Find the definition for a canonical id
pub fn lookup(id: &str) -> Option<&'static TypeDefinition> {
    TYPE_DEFINITIONS.iter().find(|def| def.id == id)
}

/// The generic fallback definition
pub fn generic() -> &'static TypeDefinition {
    // GENERIC_TYPE is the last entry of TYPE_DEFINITIONS
    &TYPE_DEFINITIONS[TYPE_DEFINITIONS.len() - 1]
}

/// Slot list for a canonical id; unknown ids get the generic schema
pub fn slots_for(id: &str) -> Vec<Slot> {
    lookup(id).unwrap_or_else(generic).slots()
}
