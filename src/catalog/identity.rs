use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Numeric dex number of a species (unique, stable sort key).
///
/// Distinct from [`SpeciesKey`]: the number orders and addresses entries,
/// the key is the foreign-key target used by the other tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DexNumber(pub u32);

impl DexNumber {
    /// Zero-padded 3-digit form used for dex labels and id search.
    pub fn padded(self) -> String {
        format!("{:03}", self.0)
    }
}

impl fmt::Display for DexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable string key uniquely identifying a species.
///
/// The teachable table and evolution edges reference species by this key,
/// never by dex number.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesKey(pub String);

/// Key into the ability table.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityKey(pub String);

/// Key into the move table.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveKey(pub String);

/// Elemental tag carried by species and moves.
///
/// Known variants keep serialization consistent; `Other` preserves forward
/// compatibility with datasets that introduce new tags.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    Other(String),
}

impl TypeTag {
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Normal => "NORMAL",
            TypeTag::Fire => "FIRE",
            TypeTag::Water => "WATER",
            TypeTag::Electric => "ELECTRIC",
            TypeTag::Grass => "GRASS",
            TypeTag::Ice => "ICE",
            TypeTag::Fighting => "FIGHTING",
            TypeTag::Poison => "POISON",
            TypeTag::Ground => "GROUND",
            TypeTag::Flying => "FLYING",
            TypeTag::Psychic => "PSYCHIC",
            TypeTag::Bug => "BUG",
            TypeTag::Rock => "ROCK",
            TypeTag::Ghost => "GHOST",
            TypeTag::Dragon => "DRAGON",
            TypeTag::Dark => "DARK",
            TypeTag::Steel => "STEEL",
            TypeTag::Fairy => "FAIRY",
            TypeTag::Other(value) => value.as_str(),
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "NORMAL" => TypeTag::Normal,
            "FIRE" => TypeTag::Fire,
            "WATER" => TypeTag::Water,
            "ELECTRIC" => TypeTag::Electric,
            "GRASS" => TypeTag::Grass,
            "ICE" => TypeTag::Ice,
            "FIGHTING" => TypeTag::Fighting,
            "POISON" => TypeTag::Poison,
            "GROUND" => TypeTag::Ground,
            "FLYING" => TypeTag::Flying,
            "PSYCHIC" => TypeTag::Psychic,
            "BUG" => TypeTag::Bug,
            "ROCK" => TypeTag::Rock,
            "GHOST" => TypeTag::Ghost,
            "DRAGON" => TypeTag::Dragon,
            "DARK" => TypeTag::Dark,
            "STEEL" => TypeTag::Steel,
            "FAIRY" => TypeTag::Fairy,
            other => TypeTag::Other(other.to_string()),
        }
    }
}

// Tags sort by their wire string so facet listings come out alphabetical,
// matching how the source dataset presents them.
impl Ord for TypeTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for TypeTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

/// Damage class of a move.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum MoveClass {
    Physical,
    Special,
    Status,
    Other(String),
}

impl MoveClass {
    pub fn as_str(&self) -> &str {
        match self {
            MoveClass::Physical => "Physical",
            MoveClass::Special => "Special",
            MoveClass::Status => "Status",
            MoveClass::Other(value) => value.as_str(),
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "Physical" => MoveClass::Physical,
            "Special" => MoveClass::Special,
            "Status" => MoveClass::Status,
            other => MoveClass::Other(other.to_string()),
        }
    }
}

impl Serialize for MoveClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MoveClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}
