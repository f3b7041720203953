//! Cross-reference index and query layer for a static creature catalog.
//!
//! Four externally authored tables (species, abilities, moves, and the
//! item-teachable move table) are loaded once, cross-indexed eagerly, and
//! queried read-only for the rest of the process. The crate answers the
//! relational questions a flat table cannot: which species carry an
//! ability, who learns a move and through which path, and what a species
//! evolves into. Dangling references are normal dataset conditions and
//! degrade to explicit absences; only a failed table retrieval is fatal.

use anyhow::Result;
use std::collections::BTreeSet;

pub mod catalog;
pub mod detail;
pub mod evolution;
pub mod filter;
pub mod index;
pub mod loader;
pub mod relation;
pub mod selection;

pub use catalog::{
    Ability, AbilityKey, BaseStats, Catalog, DexNumber, EvolutionEdge, LevelMove, Move, MoveClass,
    MoveKey, Species, SpeciesKey, TableSet, TeachableTable, TypeTag,
};
pub use detail::{AbilitySlot, AbilitySlotKind, LevelMoveRow, MoveRow, move_meta};
pub use evolution::{EvolutionLink, resolve_evolutions};
pub use filter::{
    filter_abilities, filter_moves, filter_species, move_type_options, species_facets,
};
pub use index::CrossIndex;
pub use loader::{DATA_DIR_ENV, DirSource, TableSource, load_dex};
pub use relation::{AbilityHolder, MoveLearner, learners_of_move, species_with_ability};
pub use selection::{selected_ability, selected_move, selected_species};

/// A loaded catalog plus its cross-reference indices, ready to query.
///
/// Built once by [`loader::load_dex`] (or [`Dex::from_tables`] when the
/// tables are already in hand) and immutable afterwards. The convenience
/// methods delegate to the query modules so callers holding a `Dex` do not
/// have to thread the catalog and index pair themselves.
#[derive(Debug)]
pub struct Dex {
    catalog: Catalog,
    cross: CrossIndex,
}

impl Dex {
    /// Validate the tables, then build every derived index eagerly.
    pub fn from_tables(tables: TableSet) -> Result<Self> {
        let catalog = Catalog::load(tables)?;
        let cross = CrossIndex::build(&catalog);
        Ok(Self { catalog, cross })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cross_index(&self) -> &CrossIndex {
        &self.cross
    }

    pub fn species_with_ability(&self, key: &AbilityKey) -> Vec<AbilityHolder<'_>> {
        relation::species_with_ability(&self.catalog, &self.cross, key)
    }

    pub fn learners_of_move(&self, key: &MoveKey) -> Vec<MoveLearner<'_>> {
        relation::learners_of_move(&self.catalog, &self.cross, key)
    }

    pub fn filter_species(&self, query: &str, selected: &BTreeSet<TypeTag>) -> Vec<&Species> {
        filter::filter_species(self.catalog.species(), query, selected)
    }

    pub fn species_facets(&self) -> BTreeSet<TypeTag> {
        filter::species_facets(self.catalog.species())
    }

    pub fn resolve_evolutions<'a>(&'a self, species: &'a Species) -> Vec<EvolutionLink<'a>> {
        evolution::resolve_evolutions(&self.catalog, species)
    }
}
