//! Table retrieval and catalog initialization.
//!
//! The four tables are fetched as independent concurrent operations and
//! joined fail-fast: one failed retrieval aborts the whole initialization
//! and no partial catalog or index is ever handed out. There is no retry
//! and no timeout; the system is either fully ready or not ready at all.

use crate::Dex;
use crate::catalog::identity::{AbilityKey, MoveKey};
use crate::catalog::model::{
    Ability, Move, Species, TableSet, TeachableTable, parse_ability_table, parse_move_table,
    parse_species_table, parse_teachable_table,
};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the dataset directory for [`DirSource`].
pub const DATA_DIR_ENV: &str = "MONDEX_DATA_DIR";

pub const SPECIES_FILE: &str = "species.json";
pub const ABILITIES_FILE: &str = "abilities.json";
pub const MOVES_FILE: &str = "moves.json";
pub const TEACHABLE_FILE: &str = "teachable.json";

/// One fetch per table. Implementations own the transport; the core only
/// requires that each call eventually yields a parsed table or an error.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch_species(&self) -> Result<Vec<Species>>;
    async fn fetch_abilities(&self) -> Result<BTreeMap<AbilityKey, Ability>>;
    async fn fetch_moves(&self) -> Result<BTreeMap<MoveKey, Move>>;
    async fn fetch_teachable(&self) -> Result<TeachableTable>;
}

/// Reads the four JSON table files from a dataset directory.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the dataset directory from `MONDEX_DATA_DIR`.
    pub fn from_env() -> Result<Self> {
        match env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Ok(Self::new(dir)),
            _ => bail!("Set {DATA_DIR_ENV} to the directory holding the four table files."),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))
    }
}

#[async_trait]
impl TableSource for DirSource {
    async fn fetch_species(&self) -> Result<Vec<Species>> {
        parse_species_table(&self.read(SPECIES_FILE).await?)
    }

    async fn fetch_abilities(&self) -> Result<BTreeMap<AbilityKey, Ability>> {
        parse_ability_table(&self.read(ABILITIES_FILE).await?)
    }

    async fn fetch_moves(&self) -> Result<BTreeMap<MoveKey, Move>> {
        parse_move_table(&self.read(MOVES_FILE).await?)
    }

    async fn fetch_teachable(&self) -> Result<TeachableTable> {
        parse_teachable_table(&self.read(TEACHABLE_FILE).await?)
    }
}

/// Fetch all four tables concurrently and build the ready-to-query [`Dex`].
///
/// The join is fail-fast: the first error aborts initialization with
/// context naming the table, before any index construction starts.
pub async fn load_dex(source: &dyn TableSource) -> Result<Dex> {
    let (species, abilities, moves, teachable) = tokio::try_join!(
        async { source.fetch_species().await.context("species table") },
        async { source.fetch_abilities().await.context("ability table") },
        async { source.fetch_moves().await.context("move table") },
        async { source.fetch_teachable().await.context("teachable-move table") },
    )?;

    Dex::from_tables(TableSet {
        species,
        abilities,
        moves,
        teachable,
    })
}
