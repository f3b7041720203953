//! Per-species panel data.
//!
//! Everything a species page shows beyond the raw record: ability slots
//! with their table entries resolved, the level-up learnset in level order,
//! egg and teachable moves in key order, and the formatted move metadata
//! line. Unresolved references surface as the raw key with an `N/A`
//! description, never as an error.

use crate::catalog::identity::{AbilityKey, MoveKey};
use crate::catalog::model::{Ability, Move, Species};
use crate::catalog::store::Catalog;
use tracing::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AbilitySlotKind {
    Normal,
    Hidden,
}

impl AbilitySlotKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AbilitySlotKind::Normal => "Ability",
            AbilitySlotKind::Hidden => "Hidden Ability",
        }
    }
}

/// One declared ability slot with its table entry, when the key resolves.
#[derive(Clone, Copy, Debug)]
pub struct AbilitySlot<'a> {
    pub key: &'a AbilityKey,
    pub kind: AbilitySlotKind,
    pub ability: Option<&'a Ability>,
}

impl AbilitySlot<'_> {
    pub fn display_name(&self) -> &str {
        match self.ability {
            Some(ability) if !ability.name.is_empty() => &ability.name,
            _ => &self.key.0,
        }
    }

    pub fn description(&self) -> &str {
        match self.ability {
            Some(ability) if !ability.desc.is_empty() => &ability.desc,
            _ => "N/A",
        }
    }
}

/// A move reference with its table entry, when the key resolves.
#[derive(Clone, Copy, Debug)]
pub struct MoveRow<'a> {
    pub key: &'a MoveKey,
    pub entry: Option<&'a Move>,
}

impl MoveRow<'_> {
    pub fn display_name(&self) -> &str {
        match self.entry {
            Some(entry) if !entry.name.is_empty() => &entry.name,
            _ => &self.key.0,
        }
    }

    /// Formatted metadata line, `N/A` when nothing is known about the move.
    pub fn meta(&self) -> String {
        self.entry.map_or_else(|| "N/A".to_string(), move_meta)
    }
}

/// A level-up learnset row.
#[derive(Clone, Copy, Debug)]
pub struct LevelMoveRow<'a> {
    pub level: u32,
    pub row: MoveRow<'a>,
}

/// Declared ability slots in declaration order, hidden slot last.
pub fn ability_slots<'a>(catalog: &'a Catalog, species: &'a Species) -> Vec<AbilitySlot<'a>> {
    let mut slots = Vec::new();
    for key in &species.abilities {
        slots.push(slot(catalog, key, AbilitySlotKind::Normal));
    }
    if let Some(key) = &species.hidden_ability {
        slots.push(slot(catalog, key, AbilitySlotKind::Hidden));
    }
    slots
}

fn slot<'a>(catalog: &'a Catalog, key: &'a AbilityKey, kind: AbilitySlotKind) -> AbilitySlot<'a> {
    let ability = catalog.ability(key);
    if ability.is_none() {
        debug!(ability = %key.0, "ability key has no table entry");
    }
    AbilitySlot { key, kind, ability }
}

/// The level-up learnset sorted ascending by level (stable, so ties keep
/// declaration order).
pub fn level_move_rows<'a>(catalog: &'a Catalog, species: &'a Species) -> Vec<LevelMoveRow<'a>> {
    let mut rows: Vec<LevelMoveRow<'a>> = species
        .level_moves
        .iter()
        .map(|entry| LevelMoveRow {
            level: entry.level,
            row: move_row(catalog, &entry.key),
        })
        .collect();
    rows.sort_by_key(|row| row.level);
    rows
}

/// Egg moves in key order.
pub fn egg_move_rows<'a>(catalog: &'a Catalog, species: &'a Species) -> Vec<MoveRow<'a>> {
    sorted_move_rows(catalog, species.egg_moves.iter())
}

/// Teachable moves in key order; empty when the table has no entry.
pub fn teachable_move_rows<'a>(catalog: &'a Catalog, species: &'a Species) -> Vec<MoveRow<'a>> {
    let keys = catalog.teachable_moves_for(&species.key).unwrap_or_default();
    sorted_move_rows(catalog, keys.iter())
}

fn sorted_move_rows<'a>(
    catalog: &'a Catalog,
    keys: impl Iterator<Item = &'a MoveKey>,
) -> Vec<MoveRow<'a>> {
    let mut rows: Vec<MoveRow<'a>> = keys.map(|key| move_row(catalog, key)).collect();
    rows.sort_by(|a, b| a.key.cmp(b.key));
    rows
}

fn move_row<'a>(catalog: &'a Catalog, key: &'a MoveKey) -> MoveRow<'a> {
    let entry = catalog.move_data(key);
    if entry.is_none() {
        debug!(move_key = %key.0, "move key has no table entry");
    }
    MoveRow { key, entry }
}

/// Metadata line for a resolved move: tag and class, then the numeric
/// fields that are present, `N/A` when the entry carries nothing at all.
pub fn move_meta(entry: &Move) -> String {
    let mut bits = Vec::new();
    if let Some(tag) = &entry.type_tag {
        bits.push(tag.as_str().to_string());
    }
    if let Some(class) = &entry.class {
        bits.push(class.as_str().to_string());
    }

    let mut numbers = Vec::new();
    if let Some(power) = entry.power {
        numbers.push(format!("Pow {power}"));
    }
    if let Some(accuracy) = entry.accuracy {
        numbers.push(format!("Acc {accuracy}"));
    }
    if let Some(pp) = entry.pp {
        numbers.push(format!("PP {pp}"));
    }

    let meta = [bits.join(" • "), numbers.join(" • ")]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" — ");
    if meta.is_empty() { "N/A".to_string() } else { meta }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::TableSet;
    use serde_json::json;

    fn catalog() -> Catalog {
        let tables = TableSet {
            species: serde_json::from_value(json!([{
                "id": 25,
                "identityKey": "PIKACHU",
                "name": "Pikachu",
                "abilities": ["STATIC"],
                "hiddenAbility": "LIGHTNINGROD",
                "moves": [
                    {"move": "THUNDER", "level": 43},
                    {"move": "TAILWHIP", "level": 6},
                    {"move": "GROWL", "level": 6}
                ],
                "eggMoves": ["WISH", "CHARM"]
            }]))
            .unwrap(),
            abilities: serde_json::from_value(json!({
                "STATIC": {"name": "Static", "desc": "Contact may paralyze."}
            }))
            .unwrap(),
            moves: serde_json::from_value(json!({
                "THUNDER": {
                    "name": "Thunder", "type": "ELECTRIC", "category": "Special",
                    "power": 110, "accuracy": 70, "pp": 10, "desc": "A lightning attack."
                },
                "GROWL": {"name": "Growl", "type": "NORMAL", "category": "Status", "desc": ""}
            }))
            .unwrap(),
            teachable: serde_json::from_value(json!({"PIKACHU": ["THUNDER", "PROTECT"]}))
                .unwrap(),
        };
        Catalog::load(tables).unwrap()
    }

    #[test]
    fn ability_slots_resolve_with_raw_key_fallback() {
        let catalog = catalog();
        let pikachu = catalog.species_by_id(crate::DexNumber(25)).unwrap();

        let slots = ability_slots(&catalog, pikachu);
        assert_eq!(slots.len(), 2);

        assert_eq!(slots[0].kind, AbilitySlotKind::Normal);
        assert_eq!(slots[0].display_name(), "Static");
        assert_eq!(slots[0].description(), "Contact may paralyze.");

        // Unresolved key: raw key shown, description degrades.
        assert_eq!(slots[1].kind, AbilitySlotKind::Hidden);
        assert_eq!(slots[1].display_name(), "LIGHTNINGROD");
        assert_eq!(slots[1].description(), "N/A");
    }

    #[test]
    fn level_moves_sort_by_level_keeping_declaration_order_on_ties() {
        let catalog = catalog();
        let pikachu = catalog.species_by_id(crate::DexNumber(25)).unwrap();

        let rows = level_move_rows(&catalog, pikachu);
        let order: Vec<(u32, &str)> = rows
            .iter()
            .map(|row| (row.level, row.row.key.0.as_str()))
            .collect();
        assert_eq!(order, vec![(6, "TAILWHIP"), (6, "GROWL"), (43, "THUNDER")]);
    }

    #[test]
    fn egg_and_teachable_rows_sort_by_key() {
        let catalog = catalog();
        let pikachu = catalog.species_by_id(crate::DexNumber(25)).unwrap();

        let eggs: Vec<&str> = egg_move_rows(&catalog, pikachu)
            .iter()
            .map(|row| row.key.0.as_str())
            .collect();
        assert_eq!(eggs, vec!["CHARM", "WISH"]);

        let taught = teachable_move_rows(&catalog, pikachu);
        let keys: Vec<&str> = taught.iter().map(|row| row.key.0.as_str()).collect();
        assert_eq!(keys, vec!["PROTECT", "THUNDER"]);
        // PROTECT is not in the move table: raw key, N/A metadata.
        assert_eq!(taught[0].display_name(), "PROTECT");
        assert_eq!(taught[0].meta(), "N/A");
    }

    #[test]
    fn move_meta_formats_present_fields_only() {
        let catalog = catalog();
        let thunder = catalog.move_data(&crate::MoveKey("THUNDER".into())).unwrap();
        assert_eq!(
            move_meta(thunder),
            "ELECTRIC • Special — Pow 110 • Acc 70 • PP 10"
        );

        let growl = catalog.move_data(&crate::MoveKey("GROWL".into())).unwrap();
        assert_eq!(move_meta(growl), "NORMAL • Status");
    }
}
