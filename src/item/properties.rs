use serde::{Serialize, Deserialize};

/// Broad category an item belongs to
///
/// Categories drive sorting and which UI panel an item appears in;
/// they carry no inventory-math meaning of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Shield,
    Consumable,
    Quest,
    Mundane,
}

/// Rarity tier of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemQuality {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}
