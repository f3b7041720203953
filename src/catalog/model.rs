//! Deserializable representation of the four source tables.
//!
//! The types mirror the wire contract of the externally authored dataset.
//! Shape problems inside a record degrade instead of failing the parse:
//! a list or mapping field that is absent or wrong-shaped becomes an empty
//! container, and a non-numeric stat becomes an absent value. Only a table
//! that fails to parse as a whole is a load error.

use crate::catalog::identity::{AbilityKey, DexNumber, MoveClass, MoveKey, SpeciesKey, TypeTag};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// One species record from the entity table.
#[derive(Clone, Debug, Deserialize)]
pub struct Species {
    pub id: DexNumber,
    #[serde(rename = "identityKey")]
    pub key: SpeciesKey,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub types: Vec<TypeTag>,
    #[serde(rename = "baseStats", default, deserialize_with = "lenient_or_default")]
    pub base_stats: BaseStats,
    #[serde(default, deserialize_with = "lenient_list")]
    pub abilities: Vec<AbilityKey>,
    #[serde(rename = "hiddenAbility", default, deserialize_with = "lenient_or_default")]
    pub hidden_ability: Option<AbilityKey>,
    #[serde(rename = "moves", default, deserialize_with = "lenient_list")]
    pub level_moves: Vec<LevelMove>,
    #[serde(rename = "eggMoves", default, deserialize_with = "lenient_list")]
    pub egg_moves: Vec<MoveKey>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub evolutions: Vec<EvolutionEdge>,
}

impl Species {
    /// Display name with the dataset's fallback for unnamed records.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "Unknown" } else { &self.name }
    }
}

/// The six named base stats. Absent or non-numeric values stay absent and
/// count as zero in the total.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct BaseStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub hp: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub atk: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub def: Option<u32>,
    #[serde(rename = "spAtk", default, deserialize_with = "lenient_count")]
    pub sp_atk: Option<u32>,
    #[serde(rename = "spDef", default, deserialize_with = "lenient_count")]
    pub sp_def: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub speed: Option<u32>,
}

impl BaseStats {
    /// Stat rows in display order, labels as the dataset presents them.
    pub fn rows(&self) -> [(&'static str, Option<u32>); 6] {
        [
            ("HP", self.hp),
            ("ATK", self.atk),
            ("DEF", self.def),
            ("Sp. ATK", self.sp_atk),
            ("Sp. DEF", self.sp_def),
            ("SPEED", self.speed),
        ]
    }

    pub fn total(&self) -> u32 {
        self.rows().iter().filter_map(|(_, value)| *value).sum()
    }
}

/// A level-up learnset entry. The same move key may appear at several levels.
#[derive(Clone, Debug, Deserialize)]
pub struct LevelMove {
    #[serde(rename = "move")]
    pub key: MoveKey,
    #[serde(default)]
    pub level: u32,
}

/// A forward-declared evolution edge. `to` may dangle; `param` is free-form.
#[derive(Clone, Debug, Deserialize)]
pub struct EvolutionEdge {
    pub to: SpeciesKey,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub param: Value,
}

/// One ability table entry.
#[derive(Clone, Debug, Deserialize)]
pub struct Ability {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

/// One move table entry. Power, accuracy, and pp tolerate non-numeric data.
#[derive(Clone, Debug, Deserialize)]
pub struct Move {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_or_default")]
    pub type_tag: Option<TypeTag>,
    #[serde(rename = "category", default, deserialize_with = "lenient_or_default")]
    pub class: Option<MoveClass>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub power: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub accuracy: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pp: Option<u32>,
    #[serde(default)]
    pub desc: String,
}

/// Item-teachable move table: species key to the moves an item can teach it.
///
/// Values that are not lists come through as empty rather than failing the
/// table, so one malformed row cannot take down the load.
#[derive(Clone, Debug, Default)]
pub struct TeachableTable(pub BTreeMap<SpeciesKey, Vec<MoveKey>>);

impl TeachableTable {
    pub fn get(&self, key: &SpeciesKey) -> Option<&[MoveKey]> {
        self.0.get(key).map(Vec::as_slice)
    }
}

impl<'de> Deserialize<'de> for TeachableTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<SpeciesKey, Value>::deserialize(deserializer)?;
        let table = raw
            .into_iter()
            .map(|(key, value)| (key, move_keys_from_value(value)))
            .collect();
        Ok(Self(table))
    }
}

fn move_keys_from_value(value: Value) -> Vec<MoveKey> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(key) => Some(MoveKey(key)),
            _ => None,
        })
        .collect()
}

/// The four parsed tables, bundled for `Catalog::load`.
#[derive(Clone, Debug, Default)]
pub struct TableSet {
    pub species: Vec<Species>,
    pub abilities: BTreeMap<AbilityKey, Ability>,
    pub moves: BTreeMap<MoveKey, Move>,
    pub teachable: TeachableTable,
}

pub fn parse_species_table(data: &str) -> Result<Vec<Species>> {
    serde_json::from_str(data).context("parsing species table")
}

pub fn parse_ability_table(data: &str) -> Result<BTreeMap<AbilityKey, Ability>> {
    serde_json::from_str(data).context("parsing ability table")
}

pub fn parse_move_table(data: &str) -> Result<BTreeMap<MoveKey, Move>> {
    serde_json::from_str(data).context("parsing move table")
}

pub fn parse_teachable_table(data: &str) -> Result<TeachableTable> {
    serde_json::from_str(data).context("parsing teachable-move table")
}

// A wrong-shaped field is expected external-data noise, not an error. These
// helpers go through Value so a bad field consumes cleanly and falls back.

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}
