//! The item model the builder stages changes against.
//!
//! An [`ItemStack`] is a type, an amount and an [`ItemMeta`]. The metadata
//! carries one [`CategoryMeta`] picked by the type's [`MetaKind`]; the
//! category never changes unless the type does.

macro_rules! key_type {
    ($(#[$meta:meta])* $name:ident { $($konst:ident = $key:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        pub struct $name(NamespacedKey);

        impl $name {
            $(pub const $konst: $name = $name(NamespacedKey::minecraft($key));)*

            #[inline]
            pub const fn new(key: NamespacedKey) -> Self {
                Self(key)
            }

            #[inline]
            pub fn key(&self) -> &NamespacedKey {
                &self.0
            }
        }

        impl From<NamespacedKey> for $name {
            #[inline]
            fn from(key: NamespacedKey) -> Self {
                Self(key)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

mod attribute;
mod color;
mod enchant;
mod flags;
mod meta;
mod player;
mod potion;

pub use attribute::*;
pub use color::*;
pub use enchant::*;
pub use flags::*;
pub use meta::*;
pub use player::*;
pub use potion::*;

use crate::NamespacedKey;

/// The closed set of metadata categories.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaKind {
    None,
    Damageable,
    Colorable,
    Potion,
    Skull,
    FishBucket,
}

key_type!(
    /// An item type identifier such as `minecraft:diamond_sword`.
    ItemType {
        AIR = "air",
        STONE = "stone",
        PAPER = "paper",
        DIAMOND = "diamond",
        DIAMOND_SWORD = "diamond_sword",
        DIAMOND_PICKAXE = "diamond_pickaxe",
        IRON_SWORD = "iron_sword",
        IRON_PICKAXE = "iron_pickaxe",
        IRON_HELMET = "iron_helmet",
        BOW = "bow",
        TRIDENT = "trident",
        SHIELD = "shield",
        ELYTRA = "elytra",
        FISHING_ROD = "fishing_rod",
        LEATHER_HELMET = "leather_helmet",
        LEATHER_CHESTPLATE = "leather_chestplate",
        LEATHER_LEGGINGS = "leather_leggings",
        LEATHER_BOOTS = "leather_boots",
        LEATHER_HORSE_ARMOR = "leather_horse_armor",
        POTION = "potion",
        SPLASH_POTION = "splash_potion",
        LINGERING_POTION = "lingering_potion",
        TIPPED_ARROW = "tipped_arrow",
        PLAYER_HEAD = "player_head",
        TROPICAL_FISH_BUCKET = "tropical_fish_bucket",
    }
);

const DAMAGEABLE_SUFFIXES: &[&str] = &[
    "_sword",
    "_pickaxe",
    "_axe",
    "_shovel",
    "_hoe",
    "_helmet",
    "_chestplate",
    "_leggings",
    "_boots",
];

const DAMAGEABLE_ITEMS: &[&str] = &[
    "bow",
    "crossbow",
    "trident",
    "shield",
    "elytra",
    "fishing_rod",
    "shears",
    "flint_and_steel",
    "carrot_on_a_stick",
    "warped_fungus_on_a_stick",
    "turtle_helmet",
];

impl ItemType {
    /// The metadata category items of this type carry.
    ///
    /// Types outside the `minecraft` namespace have no category.
    pub fn meta_kind(&self) -> MetaKind {
        if !self.0.is_minecraft() {
            return MetaKind::None;
        }
        let key = self.0.key();
        match key {
            "potion" | "splash_potion" | "lingering_potion" | "tipped_arrow" => MetaKind::Potion,
            "leather_helmet" | "leather_chestplate" | "leather_leggings" | "leather_boots"
            | "leather_horse_armor" => MetaKind::Colorable,
            "player_head" => MetaKind::Skull,
            "tropical_fish_bucket" => MetaKind::FishBucket,
            _ if DAMAGEABLE_ITEMS.contains(&key)
                || DAMAGEABLE_SUFFIXES.iter().any(|s| key.ends_with(s)) =>
            {
                MetaKind::Damageable
            }
            _ => MetaKind::None,
        }
    }
}

/// A stack of items.
#[derive(Clone, PartialEq, Debug)]
pub struct ItemStack {
    item_type: ItemType,
    amount: u8,
    meta: ItemMeta,
}

impl ItemStack {
    /// A single item of `item_type` with default metadata.
    #[inline]
    pub fn new(item_type: ItemType) -> Self {
        Self::with_amount(item_type, 1)
    }

    pub fn with_amount(item_type: ItemType, amount: u8) -> Self {
        let meta = ItemMeta::for_kind(item_type.meta_kind());
        Self {
            item_type,
            amount,
            meta,
        }
    }

    #[inline]
    pub fn item_type(&self) -> &ItemType {
        &self.item_type
    }

    /// Changes the type. When the metadata category changes, the category
    /// fields reset to the new kind's defaults; common fields are kept.
    pub fn set_type(&mut self, item_type: ItemType) {
        self.meta.convert(item_type.meta_kind());
        self.item_type = item_type;
    }

    #[inline]
    pub fn amount(&self) -> u8 {
        self.amount
    }

    #[inline]
    pub fn set_amount(&mut self, amount: u8) {
        self.amount = amount;
    }

    #[inline]
    pub fn meta(&self) -> &ItemMeta {
        &self.meta
    }

    #[inline]
    pub fn meta_mut(&mut self) -> &mut ItemMeta {
        &mut self.meta
    }

    /// Replaces the metadata, converting it to this type's category if needed.
    pub fn set_meta(&mut self, mut meta: ItemMeta) {
        meta.convert(self.item_type.meta_kind());
        self.meta = meta;
    }

    #[inline]
    pub fn into_meta(self) -> ItemMeta {
        self.meta
    }
}

impl From<ItemType> for ItemStack {
    #[inline]
    fn from(item_type: ItemType) -> Self {
        Self::new(item_type)
    }
}
