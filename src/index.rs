//! Derived reverse indices over a loaded catalog.
//!
//! The four tables only declare forward references (species to ability,
//! species to move). Answering "who references X" without an O(n) scan per
//! query needs the inverses, so they are built eagerly here, exactly once
//! per load, and never recomputed. Every accessor is total over absent
//! keys: an unknown key yields an empty result, not an error.

use crate::catalog::identity::{AbilityKey, DexNumber, MoveKey, SpeciesKey};
use crate::catalog::store::Catalog;
use std::collections::{BTreeMap, BTreeSet};

/// The four cross-reference indices, immutable after `build`.
#[derive(Debug, Default)]
pub struct CrossIndex {
    ability_holders: BTreeMap<AbilityKey, Vec<DexNumber>>,
    level_learners: BTreeMap<MoveKey, Vec<(DexNumber, u32)>>,
    teachable: BTreeMap<SpeciesKey, BTreeSet<MoveKey>>,
    taught_by: BTreeMap<MoveKey, BTreeSet<SpeciesKey>>,
}

impl CrossIndex {
    /// Build all four indices: one pass over the species list plus one pass
    /// over the teachable table.
    ///
    /// The species list is already ascending by dex number, so the buckets
    /// come out id-ordered without a separate sort.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::default();

        for species in catalog.species() {
            for ability in &species.abilities {
                index.record_holder(ability, species.id);
            }
            if let Some(hidden) = &species.hidden_ability {
                index.record_holder(hidden, species.id);
            }
            for entry in &species.level_moves {
                index
                    .level_learners
                    .entry(entry.key.clone())
                    .or_default()
                    .push((species.id, entry.level));
            }
        }

        for (key, moves) in &catalog.teachable_table().0 {
            let set: BTreeSet<MoveKey> = moves.iter().cloned().collect();
            for move_key in &set {
                index
                    .taught_by
                    .entry(move_key.clone())
                    .or_default()
                    .insert(key.clone());
            }
            index.teachable.insert(key.clone(), set);
        }

        index
    }

    fn record_holder(&mut self, ability: &AbilityKey, id: DexNumber) {
        let bucket = self.ability_holders.entry(ability.clone()).or_default();
        // A species declaring the same ability twice (for example as both a
        // regular and hidden slot) still gets one entry. Appends happen in
        // id order, so any duplicate is adjacent.
        if bucket.last() != Some(&id) {
            bucket.push(id);
        }
    }

    /// Dex numbers of species carrying the ability, ascending.
    pub fn holders_of(&self, key: &AbilityKey) -> &[DexNumber] {
        self.ability_holders.get(key).map_or(&[], Vec::as_slice)
    }

    /// Every (species, level) pair declaring the move in a level-up
    /// learnset, in species-id order. A species appears once per declared
    /// level.
    pub fn level_learners(&self, key: &MoveKey) -> &[(DexNumber, u32)] {
        self.level_learners.get(key).map_or(&[], Vec::as_slice)
    }

    /// Moves the teachable table grants the species.
    pub fn teachable_for(&self, key: &SpeciesKey) -> impl Iterator<Item = &MoveKey> {
        self.teachable.get(key).into_iter().flatten()
    }

    /// Species keys the teachable table says can be taught the move.
    pub fn taught_by(&self, key: &MoveKey) -> impl Iterator<Item = &SpeciesKey> {
        self.taught_by.get(key).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::TableSet;
    use serde_json::{Value, json};

    fn catalog(species: Value, teachable: Value) -> Catalog {
        let tables = TableSet {
            species: serde_json::from_value(species).unwrap(),
            teachable: serde_json::from_value(teachable).unwrap(),
            ..TableSet::default()
        };
        Catalog::load(tables).unwrap()
    }

    #[test]
    fn ability_holders_cover_hidden_slot_and_stay_id_ordered() {
        let catalog = catalog(
            json!([
                {"id": 2, "identityKey": "B", "hiddenAbility": "STATIC"},
                {"id": 1, "identityKey": "A", "abilities": ["STATIC", "STATIC"]}
            ]),
            json!({}),
        );
        let index = CrossIndex::build(&catalog);

        let holders = index.holders_of(&AbilityKey("STATIC".into()));
        assert_eq!(holders, &[DexNumber(1), DexNumber(2)]);
        assert!(index.holders_of(&AbilityKey("GHOST_ABILITY".into())).is_empty());
    }

    #[test]
    fn level_learners_keep_duplicate_levels() {
        let catalog = catalog(
            json!([{
                "id": 1,
                "identityKey": "A",
                "moves": [
                    {"move": "TACKLE", "level": 1},
                    {"move": "TACKLE", "level": 15}
                ]
            }]),
            json!({}),
        );
        let index = CrossIndex::build(&catalog);

        assert_eq!(
            index.level_learners(&MoveKey("TACKLE".into())),
            &[(DexNumber(1), 1), (DexNumber(1), 15)]
        );
    }

    #[test]
    fn taught_by_is_the_structural_inverse_of_the_teachable_table() {
        let catalog = catalog(
            json!([{"id": 1, "identityKey": "A"}, {"id": 2, "identityKey": "B"}]),
            json!({"A": ["THUNDER", "PROTECT"], "B": ["THUNDER"]}),
        );
        let index = CrossIndex::build(&catalog);

        let learners: Vec<&str> = index
            .taught_by(&MoveKey("THUNDER".into()))
            .map(|key| key.0.as_str())
            .collect();
        assert_eq!(learners, vec!["A", "B"]);

        let moves: Vec<&str> = index
            .teachable_for(&SpeciesKey("A".into()))
            .map(|key| key.0.as_str())
            .collect();
        assert_eq!(moves, vec!["PROTECT", "THUNDER"]);

        assert_eq!(index.taught_by(&MoveKey("FLY".into())).count(), 0);
        assert_eq!(index.teachable_for(&SpeciesKey("C".into())).count(), 0);
    }
}
