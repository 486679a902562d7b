use crate::domain::catalog::{
    entity::CatalogItem,
    filters::{Rarity, WeaponType},
};

/// A single test applied to one skin.
pub type SkinPredicate<'a> = Box<dyn Fn(&CatalogItem) -> bool + Send + Sync + 'a>;

/// Optional constraints on a skin listing. Every supplied constraint must
/// hold for a skin to be kept; absent ones are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinFilter {
    pub weapon: Option<WeaponType>,
    pub rarity: Option<Rarity>,
    pub collection: Option<String>,
    pub crate_id: Option<String>,
}

impl SkinFilter {
    pub fn is_empty(&self) -> bool {
        self.weapon.is_none()
            && self.rarity.is_none()
            && self.collection.is_none()
            && self.crate_id.is_none()
    }

    /// Composes the supplied constraints into one conjunctive predicate.
    pub fn predicate(&self) -> SkinPredicate<'_> {
        let mut clauses: Vec<SkinPredicate<'_>> = Vec::with_capacity(4);

        if let Some(weapon) = self.weapon {
            clauses.push(Box::new(move |skin: &CatalogItem| {
                skin.weapon_type() == Some(weapon.as_str())
            }));
        }
        if let Some(rarity) = self.rarity {
            let rarity_id = rarity.rarity_id();
            clauses.push(Box::new(move |skin: &CatalogItem| {
                skin.rarity_id() == Some(rarity_id.as_str())
            }));
        }
        if let Some(collection) = self.collection.as_deref() {
            clauses.push(Box::new(move |skin: &CatalogItem| {
                skin.collection_ids().any(|id| id == collection)
            }));
        }
        if let Some(crate_id) = self.crate_id.as_deref() {
            clauses.push(Box::new(move |skin: &CatalogItem| {
                skin.crate_ids().any(|id| id == crate_id)
            }));
        }

        clauses.into_iter().fold(always(), and)
    }

    /// Keeps the matching skins in their original order.
    pub fn apply(&self, skins: &[CatalogItem]) -> Vec<CatalogItem> {
        let matches = self.predicate();
        skins.iter().filter(|&skin| matches(skin)).cloned().collect()
    }
}

pub fn always<'a>() -> SkinPredicate<'a> {
    Box::new(|_: &CatalogItem| true)
}

pub fn and<'a>(left: SkinPredicate<'a>, right: SkinPredicate<'a>) -> SkinPredicate<'a> {
    Box::new(move |skin: &CatalogItem| left(skin) && right(skin))
}
