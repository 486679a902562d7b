pub mod filter_skins;
pub mod search_catalog;
