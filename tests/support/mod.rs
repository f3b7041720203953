//! Shared fixtures for the integration suite.
//!
//! Builds a small but realistic dataset directory: a two-stage fire line,
//! an electric pair sharing an ability, dangling references of every kind,
//! and one deliberately malformed teachable row.

use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn dataset_dir() -> TempDir {
    let dir = TempDir::new().expect("allocate dataset dir");
    write_table(dir.path(), "species.json", &species_table());
    write_table(dir.path(), "abilities.json", &ability_table());
    write_table(dir.path(), "moves.json", &move_table());
    write_table(dir.path(), "teachable.json", &teachable_table());
    dir
}

pub fn write_table(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_vec_pretty(value).expect("encode table"))
        .expect("write table");
}

pub fn species_table() -> Value {
    json!([
        {
            "id": 1,
            "identityKey": "BULBASAUR",
            "name": "Bulbasaur",
            "types": ["GRASS", "POISON"],
            "baseStats": {"hp": 45, "atk": 49, "def": 49, "spAtk": 65, "spDef": 65, "speed": 45},
            "abilities": ["OVERGROW"],
            "moves": [{"move": "TACKLE", "level": 1}, {"move": "GROWL", "level": 3}],
            "eggMoves": [],
            "evolutions": [{"to": "IVYSAUR", "method": "level", "param": 16}]
        },
        {
            "id": 4,
            "identityKey": "CHARMANDER",
            "name": "Charmander",
            "types": ["FIRE"],
            "baseStats": {"hp": 39, "atk": 52, "def": 43, "spAtk": 60, "spDef": 50, "speed": 65},
            "abilities": ["BLAZE"],
            "hiddenAbility": "SOLARPOWER",
            "moves": [{"move": "SCRATCH", "level": 1}, {"move": "EMBER", "level": 7}],
            "evolutions": [{"to": "CHARIZARD", "method": "level", "param": 36}]
        },
        {
            "id": 6,
            "identityKey": "CHARIZARD",
            "name": "Charizard",
            "types": ["FIRE", "FLYING"],
            "baseStats": {"hp": 78, "atk": 84, "def": 78, "spAtk": 109, "spDef": 85, "speed": 100},
            "abilities": ["BLAZE"],
            "hiddenAbility": "SOLARPOWER",
            "moves": [{"move": "FLAMETHROWER", "level": 17}]
        },
        {
            "id": 25,
            "identityKey": "PIKACHU",
            "name": "Pikachu",
            "types": ["ELECTRIC"],
            "baseStats": {"hp": 35, "atk": 55, "def": 40, "spAtk": 50, "spDef": 50, "speed": 90},
            "abilities": ["STATIC"],
            "hiddenAbility": "LIGHTNINGROD",
            "moves": [{"move": "THUNDERSHOCK", "level": 1}, {"move": "THUNDER", "level": 43}],
            "eggMoves": ["WISH"]
        },
        {
            "id": 26,
            "identityKey": "RAICHU",
            "name": "Raichu",
            "types": ["ELECTRIC"],
            "baseStats": {"hp": 60, "atk": 90, "def": 55, "spAtk": 90, "spDef": 80, "speed": 110},
            "abilities": ["STATIC"],
            "moves": []
        }
    ])
}

pub fn ability_table() -> Value {
    // LIGHTNINGROD and SOLARPOWER are referenced by species but absent
    // here, exercising the raw-key fallback paths.
    json!({
        "BLAZE": {"name": "Blaze", "desc": "Powers up fire moves in a pinch."},
        "OVERGROW": {"name": "Overgrow", "desc": "Powers up grass moves in a pinch."},
        "STATIC": {"name": "Static", "desc": "Contact may cause paralysis."}
    })
}

pub fn move_table() -> Value {
    json!({
        "EMBER": {"name": "Ember", "type": "FIRE", "category": "Special", "power": 40, "accuracy": 100, "pp": 25, "desc": "A weak fire attack."},
        "FLAMETHROWER": {"name": "Flamethrower", "type": "FIRE", "category": "Special", "power": 90, "accuracy": 100, "pp": 15, "desc": "A powerful fire attack."},
        "GROWL": {"name": "Growl", "type": "NORMAL", "category": "Status", "accuracy": 100, "pp": 40, "desc": "Lowers the foe's attack."},
        "PROTECT": {"name": "Protect", "type": "NORMAL", "category": "Status", "pp": 10, "desc": "Evades attack that turn."},
        "SCRATCH": {"name": "Scratch", "type": "NORMAL", "category": "Physical", "power": 40, "accuracy": 100, "pp": 35, "desc": "Scratches with sharp claws."},
        "TACKLE": {"name": "Tackle", "type": "NORMAL", "category": "Physical", "power": 40, "accuracy": 100, "pp": 35, "desc": "A full-body charge."},
        "THUNDER": {"name": "Thunder", "type": "ELECTRIC", "category": "Special", "power": 110, "accuracy": 70, "pp": 10, "desc": "A lightning attack."},
        "THUNDERSHOCK": {"name": "Thundershock", "type": "ELECTRIC", "category": "Special", "power": 40, "accuracy": 100, "pp": 30, "desc": "A jolt of electricity."}
    })
}

pub fn teachable_table() -> Value {
    // CHARMANDER's row is deliberately not a list; GHOST is an identity
    // key with no species row.
    json!({
        "PIKACHU": ["THUNDER", "PROTECT"],
        "RAICHU": ["THUNDER"],
        "CHARIZARD": ["PROTECT"],
        "CHARMANDER": "PROTECT",
        "GHOST": ["THUNDER"]
    })
}
