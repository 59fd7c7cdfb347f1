use std::collections::BTreeMap;

use crate::{
    AttributeModifiers, Color, DyeColor, Enchantment, FishPattern, ItemFlags, MetaKind,
    OfflinePlayer, OwnCompound, PersistentDataContainer, PotionMeta,
};

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DamageableMeta {
    damage: i32,
}

impl DamageableMeta {
    #[inline]
    pub fn damage(&self) -> i32 {
        self.damage
    }

    #[inline]
    pub fn has_damage(&self) -> bool {
        self.damage != 0
    }

    #[inline]
    pub fn set_damage(&mut self, damage: i32) {
        self.damage = damage;
    }
}

/// Metadata of dyeable leather items.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ColorableMeta {
    color: Option<Color>,
}

impl ColorableMeta {
    /// The applied color, or [`Color::DEFAULT_LEATHER`] when none was applied.
    #[inline]
    pub fn color(&self) -> Color {
        self.color.unwrap_or(Color::DEFAULT_LEATHER)
    }

    #[inline]
    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    #[inline]
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SkullMeta {
    owner: Option<OfflinePlayer>,
}

impl SkullMeta {
    #[inline]
    pub fn owning_player(&self) -> Option<&OfflinePlayer> {
        self.owner.as_ref()
    }

    #[inline]
    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    #[inline]
    pub fn set_owning_player(&mut self, owner: Option<OfflinePlayer>) {
        self.owner = owner;
    }
}

/// Metadata of a bucket holding a tropical fish.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FishBucketMeta {
    body_color: DyeColor,
    pattern: FishPattern,
    pattern_color: DyeColor,
}

impl Default for FishBucketMeta {
    fn default() -> Self {
        Self {
            body_color: DyeColor::White,
            pattern: FishPattern::Kob,
            pattern_color: DyeColor::White,
        }
    }
}

impl FishBucketMeta {
    pub const fn new(body_color: DyeColor, pattern: FishPattern, pattern_color: DyeColor) -> Self {
        Self {
            body_color,
            pattern,
            pattern_color,
        }
    }

    #[inline]
    pub fn body_color(&self) -> DyeColor {
        self.body_color
    }

    #[inline]
    pub fn set_body_color(&mut self, color: DyeColor) {
        self.body_color = color;
    }

    #[inline]
    pub fn pattern(&self) -> FishPattern {
        self.pattern
    }

    #[inline]
    pub fn set_pattern(&mut self, pattern: FishPattern) {
        self.pattern = pattern;
    }

    #[inline]
    pub fn pattern_color(&self) -> DyeColor {
        self.pattern_color
    }

    #[inline]
    pub fn set_pattern_color(&mut self, color: DyeColor) {
        self.pattern_color = color;
    }

    /// Packs the variant as `size | index << 8 | body << 16 | pattern_color << 24`.
    pub const fn variant(&self) -> i32 {
        (self.pattern.size() as i32)
            | ((self.pattern.index() as i32) << 8)
            | ((self.body_color.id() as i32) << 16)
            | ((self.pattern_color.id() as i32) << 24)
    }

    pub const fn from_variant(variant: i32) -> Option<Self> {
        let bytes = variant.to_le_bytes();
        let Some(pattern) = FishPattern::from_size_index(bytes[0], bytes[1]) else {
            return None;
        };
        let Some(body_color) = DyeColor::from_id(bytes[2]) else {
            return None;
        };
        let Some(pattern_color) = DyeColor::from_id(bytes[3]) else {
            return None;
        };
        Some(Self::new(body_color, pattern, pattern_color))
    }
}

/// The category-specific part of an item's metadata.
///
/// Exactly one variant applies to an item, chosen by its
/// [`ItemType::meta_kind`](crate::ItemType::meta_kind).
#[derive(Clone, PartialEq, Debug, Default)]
pub enum CategoryMeta {
    #[default]
    None,
    Damageable(DamageableMeta),
    Colorable(ColorableMeta),
    Potion(PotionMeta),
    Skull(SkullMeta),
    FishBucket(FishBucketMeta),
}

impl CategoryMeta {
    pub fn default_for(kind: MetaKind) -> Self {
        match kind {
            MetaKind::None => CategoryMeta::None,
            MetaKind::Damageable => CategoryMeta::Damageable(DamageableMeta::default()),
            MetaKind::Colorable => CategoryMeta::Colorable(ColorableMeta::default()),
            MetaKind::Potion => CategoryMeta::Potion(PotionMeta::default()),
            MetaKind::Skull => CategoryMeta::Skull(SkullMeta::default()),
            MetaKind::FishBucket => CategoryMeta::FishBucket(FishBucketMeta::default()),
        }
    }

    pub const fn kind(&self) -> MetaKind {
        match self {
            CategoryMeta::None => MetaKind::None,
            CategoryMeta::Damageable(_) => MetaKind::Damageable,
            CategoryMeta::Colorable(_) => MetaKind::Colorable,
            CategoryMeta::Potion(_) => MetaKind::Potion,
            CategoryMeta::Skull(_) => MetaKind::Skull,
            CategoryMeta::FishBucket(_) => MetaKind::FishBucket,
        }
    }
}

/// Item metadata: the common display/behavior fields plus one category.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ItemMeta {
    display_name: Option<String>,
    lore: Option<Vec<String>>,
    unbreakable: bool,
    flags: ItemFlags,
    enchants: BTreeMap<Enchantment, u16>,
    attributes: Option<AttributeModifiers>,
    custom_model_data: Option<i32>,
    persistent: PersistentDataContainer,
    category: CategoryMeta,
    unhandled: OwnCompound,
}

macro_rules! category_accessors {
    ($($get:ident, $get_mut:ident => $variant:ident($ty:ty);)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> Option<&$ty> {
                match &self.category {
                    CategoryMeta::$variant(meta) => Some(meta),
                    _ => None,
                }
            }

            #[inline]
            pub fn $get_mut(&mut self) -> Option<&mut $ty> {
                match &mut self.category {
                    CategoryMeta::$variant(meta) => Some(meta),
                    _ => None,
                }
            }
        )*
    };
}

impl ItemMeta {
    pub fn for_kind(kind: MetaKind) -> Self {
        Self {
            category: CategoryMeta::default_for(kind),
            ..Self::default()
        }
    }

    #[inline]
    pub fn kind(&self) -> MetaKind {
        self.category.kind()
    }

    /// Switches the category to `kind`, keeping every common field.
    ///
    /// Category fields are reset to the new kind's defaults. Nothing happens
    /// when the kind already matches.
    pub fn convert(&mut self, kind: MetaKind) {
        if self.kind() != kind {
            self.category = CategoryMeta::default_for(kind);
        }
    }

    #[inline]
    pub fn category(&self) -> &CategoryMeta {
        &self.category
    }

    #[inline]
    pub fn category_mut(&mut self) -> &mut CategoryMeta {
        &mut self.category
    }

    category_accessors! {
        as_damageable, as_damageable_mut => Damageable(DamageableMeta);
        as_colorable, as_colorable_mut => Colorable(ColorableMeta);
        as_potion, as_potion_mut => Potion(PotionMeta);
        as_skull, as_skull_mut => Skull(SkullMeta);
        as_fish_bucket, as_fish_bucket_mut => FishBucket(FishBucketMeta);
    }

    #[inline]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[inline]
    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    #[inline]
    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    #[inline]
    pub fn lore(&self) -> Option<&[String]> {
        self.lore.as_deref()
    }

    #[inline]
    pub fn has_lore(&self) -> bool {
        self.lore.is_some()
    }

    /// Replaces the lore. An empty list clears it.
    pub fn set_lore(&mut self, lore: Option<Vec<String>>) {
        self.lore = lore.filter(|lines| !lines.is_empty());
    }

    #[inline]
    pub fn is_unbreakable(&self) -> bool {
        self.unbreakable
    }

    #[inline]
    pub fn set_unbreakable(&mut self, unbreakable: bool) {
        self.unbreakable = unbreakable;
    }

    #[inline]
    pub fn item_flags(&self) -> ItemFlags {
        self.flags
    }

    #[inline]
    pub fn add_item_flags(&mut self, flags: ItemFlags) {
        self.flags |= flags;
    }

    #[inline]
    pub fn remove_item_flags(&mut self, flags: ItemFlags) {
        self.flags &= !flags;
    }

    #[inline]
    pub fn enchants(&self) -> &BTreeMap<Enchantment, u16> {
        &self.enchants
    }

    #[inline]
    pub fn has_enchants(&self) -> bool {
        !self.enchants.is_empty()
    }

    #[inline]
    pub fn enchant_level(&self, enchantment: &Enchantment) -> Option<u16> {
        self.enchants.get(enchantment).copied()
    }

    /// Sets `enchantment` to `level`, replacing any previous level.
    ///
    /// Levels above [`Enchantment::max_level`] are refused unless
    /// `ignore_level_restriction` is set. Forced levels are clamped to
    /// [`Enchantment::MAX_STORED_LEVEL`]. Returns whether the meta changed.
    pub fn add_enchant(
        &mut self,
        enchantment: Enchantment,
        level: u16,
        ignore_level_restriction: bool,
    ) -> bool {
        if !ignore_level_restriction && level > enchantment.max_level() {
            return false;
        }
        let level = level.min(Enchantment::MAX_STORED_LEVEL);
        self.enchants.insert(enchantment, level) != Some(level)
    }

    pub fn remove_enchant(&mut self, enchantment: &Enchantment) -> bool {
        self.enchants.remove(enchantment).is_some()
    }

    #[inline]
    pub fn attribute_modifiers(&self) -> Option<&AttributeModifiers> {
        self.attributes.as_ref()
    }

    #[inline]
    pub fn has_attribute_modifiers(&self) -> bool {
        self.attributes.is_some()
    }

    /// Replaces all attribute modifiers. `None` or an empty set clears them.
    pub fn set_attribute_modifiers(&mut self, modifiers: Option<AttributeModifiers>) {
        self.attributes = modifiers.filter(|m| !m.is_empty());
    }

    #[inline]
    pub fn custom_model_data(&self) -> Option<i32> {
        self.custom_model_data
    }

    #[inline]
    pub fn has_custom_model_data(&self) -> bool {
        self.custom_model_data.is_some()
    }

    #[inline]
    pub fn set_custom_model_data(&mut self, data: Option<i32>) {
        self.custom_model_data = data;
    }

    #[inline]
    pub fn persistent_data(&self) -> &PersistentDataContainer {
        &self.persistent
    }

    #[inline]
    pub fn persistent_data_mut(&mut self) -> &mut PersistentDataContainer {
        &mut self.persistent
    }

    /// Tag entries this type does not model, kept so that converting an item
    /// to a tag tree and back loses nothing.
    #[inline]
    pub fn unhandled(&self) -> &OwnCompound {
        &self.unhandled
    }

    #[inline]
    pub(crate) fn set_unhandled(&mut self, unhandled: OwnCompound) {
        self.unhandled = unhandled;
    }
}
