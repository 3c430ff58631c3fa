//! FAF Core - Type-aware completeness scoring for `.faf` project context
//!
//! A `.faf` document describes a project: its identity, its stack, and the
//! human context around it (who, what, where, why, when, how). FAF Core measures
//! how much of that description is present, against the fields that actually
//! matter for the project's kind. A CLI tool is not penalised for lacking a
//! database, and a fullstack app is.
//!
//! # Architecture
//!
//! 1. **Schema** (`schema`): five tier tables, the type registry and the alias table, all `const`
//! 2. **Slot ignore** (`slot_ignore`): user exclusions with `human.` and bare-word shorthand
//! 3. **Document** (`document`): safe dotted-path walking and filledness
//! 4. **Score** (`score`): filled / total with half-up rounding
//! 5. **Compiler** (`compiler`): the single-pass pipeline tying it together
//!
//! # Quick Start
//!
//! ```
//! use faf_core::compile;
//! use serde_json::json;
//!
//! let document = json!({
//!     "project": { "name": "faf", "goal": "Score context", "main_language": "Rust", "type": "cli-tool" },
//!     "human_context": { "who": "devs", "what": "a scorer", "why": "AI context" },
//! });
//!
//! let result = compile(&document).unwrap();
//!
//! assert_eq!(result.canonical_type, "cli");
//! assert_eq!((result.filled, result.total, result.score), (6, 9, 67));
//! println!("Score: {}% {}", result.score, result.medal());
//! ```
//!
//! # Design Principles
//!
//! 1. **Schema-driven**: the slot list comes from the registry, never from document content
//! 2. **Total over content**: unknown types, stray ignores and missing paths degrade, never fail
//! 3. **Pure**: no I/O, no caching, no shared mutable state

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod compiler;
pub mod document;
pub mod error;
pub mod medal;
pub mod schema;
pub mod score;
pub mod slot_ignore;

// Re-export commonly used types for convenience
pub use compiler::{compile, CompileResult, TierScore};
pub use error::{FafError, Result};
pub use medal::Medal;
pub use schema::{resolve_type, Slot, Tier, TypeDefinition, GENERIC_TYPE, TYPE_DEFINITIONS};
pub use score::ScoreCard;
pub use slot_ignore::resolve_ignored;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
