//! Type alias resolution
//!
//! Maps the spellings people actually write in `project.type` onto registry ids.
//! Aliases resolve in a single hop; every target is itself a registry key.

use super::registry::{lookup, GENERIC_TYPE};
use tracing::debug;

/// Alternate spelling → canonical registry id
pub const ALIASES: &[(&str, &str)] = &[
    ("cli-tool", "cli"),
    ("k8s", "kubernetes"),
    ("tf", "terraform"),
    ("rn", "react-native"),
    ("expo", "react-native"),
    ("flask", "python-api"),
    ("fastapi", "python-api"),
    ("express", "node-api"),
    ("next", "nextjs"),
    ("turbo", "turborepo"),
    ("gha", "github-action"),
    ("nx", "monorepo"),
    ("lerna", "monorepo"),
];

/// Resolve a raw `project.type` value to a canonical registry id.
///
/// Never fails: absent, blank and unrecognised spellings all land on
/// [`GENERIC_TYPE`].
pub fn resolve_type(raw: Option<&str>) -> &'static str {
    let normalized = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return GENERIC_TYPE,
    };

    if let Some((_, target)) = ALIASES.iter().find(|(alias, _)| *alias == normalized) {
        return *target;
    }

    match lookup(&normalized) {
        Some(def) => def.id,
        None => {
            debug!("Unknown project type {:?}, scoring as {}", normalized, GENERIC_TYPE);
            GENERIC_TYPE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_targets_registry_entry() {
        for (alias, target) in ALIASES {
            assert!(lookup(target).is_some(), "{} -> {} is dangling", alias, target);
            assert!(lookup(alias).is_none(), "{} shadows a canonical id", alias);
        }
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(resolve_type(Some("cli-tool")), "cli");
        assert_eq!(resolve_type(Some("k8s")), "kubernetes");
        assert_eq!(resolve_type(Some("expo")), "react-native");
        assert_eq!(resolve_type(Some("lerna")), "monorepo");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(resolve_type(Some("  K8S ")), "kubernetes");
        assert_eq!(resolve_type(Some("NextJS")), "nextjs");
        assert_eq!(resolve_type(Some("\tReact\n")), "react");
    }

    #[test]
    fn test_canonical_ids_pass_through() {
        assert_eq!(resolve_type(Some("dapp")), "dapp");
        assert_eq!(resolve_type(Some("react-native")), "react-native");
        assert_eq!(resolve_type(Some("generic")), "generic");
    }

    #[test]
    fn test_blank_and_missing_fall_back() {
        assert_eq!(resolve_type(None), GENERIC_TYPE);
        assert_eq!(resolve_type(Some("")), GENERIC_TYPE);
        assert_eq!(resolve_type(Some("   ")), GENERIC_TYPE);
    }

    #[test]
    fn test_typos_fall_back() {
        assert_eq!(resolve_type(Some("reactt")), GENERIC_TYPE);
        assert_eq!(resolve_type(Some("unknown-xyz")), GENERIC_TYPE);
    }
}
