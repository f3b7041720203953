//! Cross-page selection tokens.
//!
//! The navigation layer hands the core a single opaque token per page: an
//! ability key, a move key, or a species id. Unknown, malformed, and absent
//! tokens all resolve to "nothing selected"; only a token naming a real
//! table entry selects anything.

use crate::catalog::identity::{AbilityKey, DexNumber, MoveKey};
use crate::catalog::model::{Ability, Move, Species};
use crate::catalog::store::Catalog;

/// Resolve an ability token against the ability table.
pub fn selected_ability<'a>(
    catalog: &'a Catalog,
    token: Option<&str>,
) -> Option<(AbilityKey, &'a Ability)> {
    let key = AbilityKey(token?.to_string());
    let ability = catalog.ability(&key)?;
    Some((key, ability))
}

/// Resolve a move token against the move table.
pub fn selected_move<'a>(catalog: &'a Catalog, token: Option<&str>) -> Option<(MoveKey, &'a Move)> {
    let key = MoveKey(token?.to_string());
    let entry = catalog.move_data(&key)?;
    Some((key, entry))
}

/// Resolve a species token: parsed as a decimal dex number, then looked up.
pub fn selected_species<'a>(catalog: &'a Catalog, token: Option<&str>) -> Option<&'a Species> {
    let id: u32 = token?.trim().parse().ok()?;
    catalog.species_by_id(DexNumber(id))
}
