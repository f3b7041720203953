//! Catalog wiring for the four source tables.
//!
//! `model` mirrors the wire contract and applies the lenient-field rules,
//! `identity` carries the key newtypes and tag enums, and `store::Catalog`
//! owns a loaded snapshot with primary-key lookups. Derived cross-reference
//! indices live in the crate-level `index` module.

pub mod identity;
pub mod model;
pub mod store;

pub use identity::{AbilityKey, DexNumber, MoveClass, MoveKey, SpeciesKey, TypeTag};
pub use model::{
    Ability, BaseStats, EvolutionEdge, LevelMove, Move, Species, TableSet, TeachableTable,
    parse_ability_table, parse_move_table, parse_species_table, parse_teachable_table,
};
pub use store::Catalog;
