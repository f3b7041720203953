//! Evolution edge resolution.
//!
//! Each species declares its successors as single-hop edges by species key.
//! Resolution links one edge at a time and never follows chains; a
//! multi-stage line is just each stage's own edges. A dangling target is a
//! legitimate dataset state (authored intent toward an entry that is not
//! in the current snapshot), so the edge survives with an explicitly
//! absent target instead of being dropped.

use crate::catalog::identity::SpeciesKey;
use crate::catalog::model::Species;
use crate::catalog::store::Catalog;
use serde_json::Value;
use tracing::debug;

/// One resolved evolution edge.
#[derive(Clone, Copy, Debug)]
pub struct EvolutionLink<'a> {
    pub source: &'a Species,
    /// The declared target key, kept even when it dangles.
    pub to: &'a SpeciesKey,
    /// Absent when the declared target key has no row in the species table.
    pub target: Option<&'a Species>,
    pub method: &'a str,
    pub param: &'a Value,
}

impl EvolutionLink<'_> {
    /// Resolved display name, falling back to the declared key.
    pub fn target_name(&self) -> &str {
        match self.target {
            Some(target) => target.display_name(),
            None => &self.to.0,
        }
    }

    pub fn method_text(&self) -> &str {
        if self.method.is_empty() { "Unknown" } else { self.method }
    }

    /// Parameter rendered for display: `?` when nothing was authored, bare
    /// text for strings, compact JSON otherwise.
    pub fn param_text(&self) -> String {
        match self.param {
            Value::Null => "?".to_string(),
            Value::String(text) if text.is_empty() => "?".to_string(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// Resolve every declared edge of `species` against the catalog.
pub fn resolve_evolutions<'a>(catalog: &'a Catalog, species: &'a Species) -> Vec<EvolutionLink<'a>> {
    species
        .evolutions
        .iter()
        .map(|edge| {
            let target = catalog.species_by_key(&edge.to);
            if target.is_none() {
                debug!(
                    source = %species.key.0,
                    target = %edge.to.0,
                    "evolution edge references unknown species"
                );
            }
            EvolutionLink {
                source: species,
                to: &edge.to,
                target,
                method: &edge.method,
                param: &edge.param,
            }
        })
        .collect()
}
