use super::errors::DomainError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponType {
    Pistol,
    Rifle,
    Smg,
    Sniper,
    Shotgun,
    Machinegun,
    Knife,
}

impl WeaponType {
    pub const ALL: [WeaponType; 7] = [
        WeaponType::Pistol,
        WeaponType::Rifle,
        WeaponType::Smg,
        WeaponType::Sniper,
        WeaponType::Shotgun,
        WeaponType::Machinegun,
        WeaponType::Knife,
    ];

    /// Value of `weapon.type` in the catalog documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pistol => "pistol",
            Self::Rifle => "rifle",
            Self::Smg => "smg",
            Self::Sniper => "sniper",
            Self::Shotgun => "shotgun",
            Self::Machinegun => "machinegun",
            Self::Knife => "knife",
        }
    }
}

impl FromStr for WeaponType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|weapon| weapon.as_str() == s)
            .ok_or_else(|| DomainError::ValidationError("Invalid weapon type".into()))
    }
}

/// Skin rarity tier as accepted in the `rarity` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Consumer,
    Industrial,
    MilSpec,
    Restricted,
    Classified,
    Covert,
    Contraband,
}

impl Rarity {
    pub const ALL: [Rarity; 7] = [
        Rarity::Consumer,
        Rarity::Industrial,
        Rarity::MilSpec,
        Rarity::Restricted,
        Rarity::Classified,
        Rarity::Covert,
        Rarity::Contraband,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Industrial => "industrial",
            Self::MilSpec => "mil-spec",
            Self::Restricted => "restricted",
            Self::Classified => "classified",
            Self::Covert => "covert",
            Self::Contraband => "contraband",
        }
    }

    /// The `rarity.id` a weapon skin of this tier carries, e.g. `rarity_covert_weapon`.
    pub fn rarity_id(&self) -> String {
        format!("rarity_{}_weapon", self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rarity| rarity.as_str() == s)
            .ok_or_else(|| DomainError::ValidationError("Invalid rarity".into()))
    }
}
