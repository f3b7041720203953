//! Free-text search combined with categorical filters.
//!
//! Selection state is always passed in explicitly; nothing here holds
//! ambient state, so every function is pure over its inputs. Filters
//! preserve the relative order of whatever list the caller hands in, and
//! an empty result is just an empty list.

use crate::catalog::identity::{AbilityKey, MoveClass, MoveKey, TypeTag};
use crate::catalog::model::{Ability, Move, Species};
use crate::catalog::store::Catalog;
use std::collections::BTreeSet;

/// Distinct type tags present in the species list, for facet controls.
pub fn species_facets(species: &[Species]) -> BTreeSet<TypeTag> {
    species
        .iter()
        .flat_map(|entry| entry.types.iter().cloned())
        .collect()
}

/// Filter a species list by free-text query and selected type facets.
///
/// The query is matched case-insensitively as a substring of the display
/// name, the zero-padded dex label, and the raw dex number, so "6" and
/// "006" both reach id 6. The facet test passes when the species' types
/// intersect the selection; an empty selection passes everything. Search
/// ANDs with the facet test; facets OR among themselves.
pub fn filter_species<'a>(
    species: &'a [Species],
    query: &str,
    selected: &BTreeSet<TypeTag>,
) -> Vec<&'a Species> {
    let needle = query.trim().to_lowercase();
    species
        .iter()
        .filter(|entry| matches_species_query(entry, &needle))
        .filter(|entry| {
            selected.is_empty() || entry.types.iter().any(|tag| selected.contains(tag))
        })
        .collect()
}

fn matches_species_query(species: &Species, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    species.display_name().to_lowercase().contains(needle)
        || species.id.padded().contains(needle)
        || species.id.to_string().contains(needle)
}

/// Ability table entries whose key, name, or description contains the
/// query, in key order.
pub fn filter_abilities<'a>(
    catalog: &'a Catalog,
    query: &str,
) -> Vec<(&'a AbilityKey, &'a Ability)> {
    let needle = query.trim().to_lowercase();
    catalog
        .abilities()
        .filter(|(key, ability)| {
            needle.is_empty()
                || key.0.to_lowercase().contains(&needle)
                || ability.name.to_lowercase().contains(&needle)
                || ability.desc.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Move table entries passing the query and the optional tag/class
/// equality filters, sorted by display name.
pub fn filter_moves<'a>(
    catalog: &'a Catalog,
    query: &str,
    tag: Option<&TypeTag>,
    class: Option<&MoveClass>,
) -> Vec<(&'a MoveKey, &'a Move)> {
    let needle = query.trim().to_lowercase();
    let mut entries: Vec<(&MoveKey, &Move)> = catalog
        .moves()
        .filter(|(_, entry)| tag.is_none() || entry.type_tag.as_ref() == tag)
        .filter(|(_, entry)| class.is_none() || entry.class.as_ref() == class)
        .filter(|(key, entry)| {
            needle.is_empty()
                || key.0.to_lowercase().contains(&needle)
                || entry.name.to_lowercase().contains(&needle)
                || entry.desc.to_lowercase().contains(&needle)
        })
        .collect();
    entries.sort_by(|a, b| a.1.name.cmp(&b.1.name));
    entries
}

/// Distinct move type tags, for the move list's tag filter control.
pub fn move_type_options(catalog: &Catalog) -> BTreeSet<TypeTag> {
    catalog
        .moves()
        .filter_map(|(_, entry)| entry.type_tag.clone())
        .collect()
}
