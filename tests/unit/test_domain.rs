use csgo_api::{
    application::filter_skins::dto::SkinFilter,
    domain::catalog::{
        entity::{CatalogItem, EntityKind},
        filters::{Rarity, WeaponType},
        language::{Language, SUPPORTED_LANGUAGES},
    },
};
use serde_json::json;

#[test]
fn language_allow_list_has_twenty_eight_codes() {
    assert_eq!(SUPPORTED_LANGUAGES.len(), 28);
    assert_eq!(Language::all().count(), 28);
    assert!("pt-BR".parse::<Language>().is_ok());
    assert!("pt-br".parse::<Language>().is_err());
}

#[test]
fn enumerations_have_seven_values_each() {
    assert_eq!(WeaponType::ALL.len(), 7);
    assert_eq!(Rarity::ALL.len(), 7);
    for rarity in Rarity::ALL {
        assert_eq!(rarity.as_str().parse::<Rarity>().ok(), Some(rarity));
    }
}

#[test]
fn skins_toggle_selects_document() {
    assert_eq!(EntityKind::skins(true).file_name(), "skins.json");
    assert_eq!(
        EntityKind::skins(false).file_name(),
        "skins_not_grouped.json"
    );
}

#[test]
fn filter_keeps_only_skins_meeting_every_constraint() {
    let skins: Vec<CatalogItem> = [
        json!({ "name": "M4A1-S | Hyper Beast", "weapon": { "type": "rifle" }, "rarity": { "id": "rarity_covert_weapon" } }),
        json!({ "name": "AK-47 | Redline", "weapon": { "type": "rifle" }, "rarity": { "id": "rarity_classified_weapon" } }),
        json!({ "name": "AWP | Asiimov", "weapon": { "type": "sniper" }, "rarity": { "id": "rarity_covert_weapon" } }),
    ]
    .into_iter()
    .map(CatalogItem::new)
    .collect();

    let filter = SkinFilter {
        weapon: Some(WeaponType::Rifle),
        rarity: Some(Rarity::Covert),
        ..SkinFilter::default()
    };
    let kept = filter.apply(&skins);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name(), Some("M4A1-S | Hyper Beast"));
}
