//! Immutable owner of the four loaded tables.
//!
//! The catalog is built once per load and never mutated afterwards. It is
//! strict about the two structural invariants (unique dex number, unique
//! species key) because every derived index keys on them; everything else
//! about the dataset is tolerated. Lookups return `Option` rather than
//! erroring: the tables are externally authored and references are allowed
//! to dangle.

use crate::catalog::identity::{AbilityKey, DexNumber, MoveKey, SpeciesKey};
use crate::catalog::model::{Ability, Move, Species, TableSet, TeachableTable};
use anyhow::{Result, bail};
use std::collections::BTreeMap;

/// The four source tables plus primary-key lookups over the species list.
#[derive(Debug)]
pub struct Catalog {
    species: Vec<Species>,
    by_id: BTreeMap<DexNumber, usize>,
    by_key: BTreeMap<SpeciesKey, usize>,
    abilities: BTreeMap<AbilityKey, Ability>,
    moves: BTreeMap<MoveKey, Move>,
    teachable: TeachableTable,
}

impl Catalog {
    /// Take ownership of the parsed tables and build the key lookups.
    ///
    /// Sorts the species list ascending by dex number once; all downstream
    /// ordering guarantees lean on this. Duplicate ids or species keys are
    /// a load failure.
    pub fn load(tables: TableSet) -> Result<Self> {
        let TableSet {
            mut species,
            abilities,
            moves,
            teachable,
        } = tables;

        species.sort_by_key(|entry| entry.id);

        let mut by_id = BTreeMap::new();
        let mut by_key = BTreeMap::new();
        for (position, entry) in species.iter().enumerate() {
            if by_id.insert(entry.id, position).is_some() {
                bail!("duplicate dex number {} in species table", entry.id);
            }
            if by_key.insert(entry.key.clone(), position).is_some() {
                bail!("duplicate species key {} in species table", entry.key.0);
            }
        }

        Ok(Self {
            species,
            by_id,
            by_key,
            abilities,
            moves,
            teachable,
        })
    }

    /// All species, ascending by dex number.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn species_by_id(&self, id: DexNumber) -> Option<&Species> {
        self.by_id.get(&id).map(|&position| &self.species[position])
    }

    pub fn species_by_key(&self, key: &SpeciesKey) -> Option<&Species> {
        self.by_key.get(key).map(|&position| &self.species[position])
    }

    pub fn ability(&self, key: &AbilityKey) -> Option<&Ability> {
        self.abilities.get(key)
    }

    pub fn move_data(&self, key: &MoveKey) -> Option<&Move> {
        self.moves.get(key)
    }

    /// Moves an item can teach this species. `None` when the table has no
    /// entry for the key, which is common.
    pub fn teachable_moves_for(&self, key: &SpeciesKey) -> Option<&[MoveKey]> {
        self.teachable.get(key)
    }

    /// Iterate the ability table in key order.
    pub fn abilities(&self) -> impl Iterator<Item = (&AbilityKey, &Ability)> {
        self.abilities.iter()
    }

    /// Iterate the move table in key order.
    pub fn moves(&self) -> impl Iterator<Item = (&MoveKey, &Move)> {
        self.moves.iter()
    }

    /// Raw teachable table, for index construction.
    pub fn teachable_table(&self) -> &TeachableTable {
        &self.teachable
    }
}
