//! Relational queries over the catalog and its cross-reference indices.
//!
//! A species can qualify for a move through two independent paths (level-up
//! learnset, teachable-move table). Results merge the paths into one row
//! per species, keyed on dex number so the same species arriving from both
//! indices never duplicates, and carry a provenance label saying which
//! paths held.

use crate::catalog::identity::{AbilityKey, MoveKey};
use crate::catalog::model::Species;
use crate::catalog::store::Catalog;
use crate::index::CrossIndex;
use std::collections::BTreeMap;
use tracing::debug;

/// A species carrying a queried ability. `hidden` marks matches that came
/// from the hidden-ability slot.
#[derive(Clone, Copy, Debug)]
pub struct AbilityHolder<'a> {
    pub species: &'a Species,
    pub hidden: bool,
}

/// One merged learner row for a queried move.
#[derive(Clone, Copy, Debug)]
pub struct MoveLearner<'a> {
    pub species: &'a Species,
    /// Level of the first level-up declaration, when that path holds.
    pub level: Option<u32>,
    /// Whether the teachable table grants the move.
    pub teachable: bool,
}

impl MoveLearner<'_> {
    /// Provenance label: `Lv n`, `TM`, or `Lv n + TM`.
    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(level) = self.level {
            parts.push(format!("Lv {level}"));
        }
        if self.teachable {
            parts.push("TM".to_string());
        }
        parts.join(" + ")
    }

    // Level rows sort ahead of teachable-only rows.
    fn priority(&self) -> u8 {
        if self.level.is_some() { 0 } else { 1 }
    }
}

/// Species whose regular or hidden abilities include `key`, ascending by
/// dex number. Unknown keys yield an empty list.
pub fn species_with_ability<'a>(
    catalog: &'a Catalog,
    index: &CrossIndex,
    key: &AbilityKey,
) -> Vec<AbilityHolder<'a>> {
    index
        .holders_of(key)
        .iter()
        .filter_map(|&id| catalog.species_by_id(id))
        .map(|species| AbilityHolder {
            species,
            hidden: species.hidden_ability.as_ref() == Some(key),
        })
        .collect()
}

/// Merged learners of `key` across both qualification paths.
///
/// Ordering is a stable total order: rows with a level annotation first,
/// then teachable-only rows, dex number ascending within each group.
pub fn learners_of_move<'a>(
    catalog: &'a Catalog,
    index: &CrossIndex,
    key: &MoveKey,
) -> Vec<MoveLearner<'a>> {
    // Accumulate by dex number, applying each source index in turn, then
    // drain in sort order. BTreeMap iteration gives the id order; the
    // stable sort afterwards only regroups by priority.
    let mut rows: BTreeMap<_, (Option<u32>, bool)> = BTreeMap::new();

    for &(id, level) in index.level_learners(key) {
        let entry = rows.entry(id).or_default();
        // First declared level wins when a species lists the move at
        // several levels.
        entry.0.get_or_insert(level);
    }

    for species_key in index.taught_by(key) {
        match catalog.species_by_key(species_key) {
            Some(species) => rows.entry(species.id).or_default().1 = true,
            None => debug!(
                species = %species_key.0,
                move_key = %key.0,
                "teachable table references unknown species"
            ),
        }
    }

    let mut learners: Vec<MoveLearner<'a>> = rows
        .into_iter()
        .filter_map(|(id, (level, teachable))| {
            catalog.species_by_id(id).map(|species| MoveLearner {
                species,
                level,
                teachable,
            })
        })
        .collect();
    learners.sort_by_key(MoveLearner::priority);
    learners
}
