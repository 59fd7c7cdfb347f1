//! Staging overrides on top of a base item.
//!
//! An [`ItemBuilder`] snapshots a base [`ItemStack`], lets callers stage
//! changes through chained setters and reconciles them into a final item on
//! [`regen`](ItemBuilder::regen). The final item is cached: [`build`](ItemBuilder::build)
//! only regenerates when nothing has been cached yet, so setters called after
//! a build are not reflected until `regen` runs again.
//!
//! Category setters that do not apply to the item's category (a potion color
//! on a sword, say) are accepted and silently ignored at regen time.

mod raw;
pub mod reconcile;

pub use raw::*;
pub use reconcile::{CategoryFields, CategoryMutation};

use std::{collections::BTreeMap, sync::Arc};

use tracing::debug;

use crate::{
    Attribute, AttributeModifier, AttributeModifiers, Color, DyeColor, Enchantment, Error,
    FishPattern, ItemFlags, ItemStack, ItemType, NamespacedKey, NbtBridge, OfflinePlayer,
    OwnValue, PackInfo, PersistentDataType, PotionData, PotionEffect, Result, TagBridge,
    TypedTagStore,
};

/// A builder that reconciles staged overrides into an item.
///
/// # Example
///
/// ```
/// use na_item::{ItemBuilder, ItemStack, ItemType};
///
/// let mut sword = ItemStack::new(ItemType::DIAMOND_SWORD);
/// sword.meta_mut().as_damageable_mut().unwrap().set_damage(10);
///
/// let mut builder = ItemBuilder::new(sword);
/// builder.set_durability(5).set_display_name("Relic");
///
/// let item = builder.build().unwrap();
/// assert_eq!(item.meta().as_damageable().unwrap().damage(), 5);
/// assert_eq!(item.meta().display_name(), Some("Relic"));
/// assert_eq!(item.amount(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ItemBuilder<B: TagBridge = NbtBridge> {
    base: ItemStack,
    bridge: B,

    item_type: ItemType,
    amount: u8,
    display_name: Option<String>,
    lore: Option<Vec<String>>,
    unbreakable: bool,
    flags: Option<ItemFlags>,
    enchants: BTreeMap<Enchantment, u16>,
    attributes: Option<AttributeModifiers>,
    custom_model_data: Option<i32>,
    category: CategoryFields,

    custom_tags: TypedTagStore,
    raw_tags: RawTagOverrides,
    pack_info: Option<PackInfo>,

    finished: Option<Arc<ItemStack>>,
}

impl ItemBuilder {
    /// Starts from `base` using the standard tag layout.
    #[inline]
    pub fn new(base: ItemStack) -> Self {
        Self::with_tag_bridge(base, NbtBridge)
    }

    /// Starts from a single default item of `item_type`.
    #[inline]
    pub fn from_type(item_type: ItemType) -> Self {
        Self::new(ItemStack::new(item_type))
    }
}

impl<B: TagBridge> ItemBuilder<B> {
    /// Starts from `base`, applying raw overrides through `bridge`.
    pub fn with_tag_bridge(base: ItemStack, bridge: B) -> Self {
        let meta = base.meta();
        let flags = meta.item_flags();
        Self {
            item_type: base.item_type().clone(),
            amount: base.amount(),
            display_name: meta.display_name().map(str::to_owned),
            lore: meta.lore().map(<[String]>::to_vec),
            unbreakable: meta.is_unbreakable(),
            flags: (!flags.is_empty()).then_some(flags),
            enchants: BTreeMap::new(),
            attributes: meta.attribute_modifiers().cloned(),
            custom_model_data: meta.custom_model_data(),
            category: CategoryFields::capture(meta.category()),
            custom_tags: TypedTagStore::new(),
            raw_tags: RawTagOverrides::new(),
            pack_info: None,
            finished: None,
            bridge,
            base,
        }
    }

    /// Moves the staged state onto another bridge. The cached item is dropped.
    pub fn with_bridge<C: TagBridge>(self, bridge: C) -> ItemBuilder<C> {
        ItemBuilder {
            base: self.base,
            bridge,
            item_type: self.item_type,
            amount: self.amount,
            display_name: self.display_name,
            lore: self.lore,
            unbreakable: self.unbreakable,
            flags: self.flags,
            enchants: self.enchants,
            attributes: self.attributes,
            custom_model_data: self.custom_model_data,
            category: self.category,
            custom_tags: self.custom_tags,
            raw_tags: self.raw_tags,
            pack_info: self.pack_info,
            finished: None,
        }
    }

    /// The item the builder was created from. Regenerating never changes it.
    #[inline]
    pub fn base(&self) -> &ItemStack {
        &self.base
    }

    #[inline]
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    #[inline]
    pub fn item_type(&self) -> &ItemType {
        &self.item_type
    }

    #[inline]
    pub fn amount(&self) -> u8 {
        self.amount
    }

    #[inline]
    pub fn category_fields(&self) -> &CategoryFields {
        &self.category
    }

    #[inline]
    pub fn custom_tags(&self) -> &TypedTagStore {
        &self.custom_tags
    }

    #[inline]
    pub fn raw_tags(&self) -> &RawTagOverrides {
        &self.raw_tags
    }

    /// Whether a final item is currently cached.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.finished.is_some()
    }

    pub fn set_type(&mut self, item_type: ItemType) -> &mut Self {
        self.item_type = item_type;
        self
    }

    pub fn set_amount(&mut self, amount: u8) -> &mut Self {
        self.amount = amount;
        self
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.display_name = Some(name.into());
        self
    }

    /// Stages the lore. Lore is always written on regen, so an empty list
    /// removes any lore the base item had.
    pub fn set_lore<I, S>(&mut self, lore: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = Some(lore.into_iter().map(Into::into).collect());
        self
    }

    pub fn clear_lore(&mut self) -> &mut Self {
        self.lore = None;
        self
    }

    pub fn set_unbreakable(&mut self, unbreakable: bool) -> &mut Self {
        self.unbreakable = unbreakable;
        self
    }

    /// Stages the damage of a damageable item.
    pub fn set_durability(&mut self, damage: i32) -> &mut Self {
        self.category.damage = Some(damage);
        self
    }

    /// Stages the color of a leather or potion item.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.category.color = Some(color);
        self
    }

    pub fn set_base_potion_data(&mut self, data: PotionData) -> &mut Self {
        self.category.base_potion = Some(data);
        self
    }

    pub fn add_potion_effect(&mut self, effect: PotionEffect) -> &mut Self {
        self.category
            .potion_effects
            .get_or_insert_with(Vec::new)
            .push(effect);
        self
    }

    pub fn set_owning_player(&mut self, owner: OfflinePlayer) -> &mut Self {
        self.category.owner = Some(owner);
        self
    }

    pub fn set_fish_body_color(&mut self, color: DyeColor) -> &mut Self {
        self.category.body_color = Some(color);
        self
    }

    pub fn set_fish_pattern(&mut self, pattern: FishPattern) -> &mut Self {
        self.category.pattern = Some(pattern);
        self
    }

    pub fn set_fish_pattern_color(&mut self, color: DyeColor) -> &mut Self {
        self.category.pattern_color = Some(color);
        self
    }

    /// Stages a typed tag in the `(key, T)` slot.
    pub fn set_custom_tag<T: PersistentDataType>(
        &mut self,
        key: NamespacedKey,
        value: T::Complex,
    ) -> &mut Self {
        self.custom_tags.set_typed::<T>(key, value);
        self
    }

    /// Reads a staged typed tag back. Only the `(key, T)` slot is consulted.
    pub fn get_custom_tag<T: PersistentDataType>(&self, key: &NamespacedKey) -> Option<T::Complex> {
        self.custom_tags.get_typed::<T>(key)
    }

    /// Whether the base item already carried typed tags. Staged tags are not
    /// taken into account.
    pub fn has_custom_tag(&self) -> bool {
        !self.base.meta().persistent_data().is_empty()
    }

    /// Stages a raw override written at `path` after everything else.
    pub fn set_raw_tag(&mut self, path: impl Into<String>, value: impl Into<OwnValue>) -> &mut Self {
        self.raw_tags.set(path, value);
        self
    }

    pub fn add_raw_tags<I, K, V>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OwnValue>,
    {
        self.raw_tags.extend(tags);
        self
    }

    pub fn add_item_flags(&mut self, flags: ItemFlags) -> &mut Self {
        *self.flags.get_or_insert(ItemFlags::empty()) |= flags;
        self
    }

    /// Stages a modifier. Once any modifier is staged the item's modifiers
    /// are replaced by the staged set on regen.
    pub fn add_attribute_modifier(
        &mut self,
        attribute: Attribute,
        modifier: AttributeModifier,
    ) -> &mut Self {
        self.attributes
            .get_or_insert_with(AttributeModifiers::new)
            .put(attribute, modifier);
        self
    }

    pub fn add_attribute_modifiers(&mut self, modifiers: &AttributeModifiers) -> &mut Self {
        self.attributes
            .get_or_insert_with(AttributeModifiers::new)
            .put_all(modifiers);
        self
    }

    /// Stages an enchantment level. The level is applied even when it exceeds
    /// the enchantment's maximum, up to [`Enchantment::MAX_STORED_LEVEL`];
    /// staging the same enchantment again replaces the level.
    pub fn add_enchant(&mut self, enchantment: Enchantment, level: u16) -> &mut Self {
        self.enchants.insert(enchantment, level);
        self
    }

    pub fn add_enchants(
        &mut self,
        enchants: impl IntoIterator<Item = (Enchantment, u16)>,
    ) -> &mut Self {
        for (enchantment, level) in enchants {
            self.add_enchant(enchantment, level);
        }
        self
    }

    pub fn set_custom_model_data(&mut self, data: i32) -> &mut Self {
        self.custom_model_data = Some(data);
        self
    }

    pub fn set_pack_info(&mut self, pack_info: PackInfo) -> &mut Self {
        self.pack_info = Some(pack_info);
        self
    }

    #[inline]
    pub fn has_pack_info(&self) -> bool {
        self.pack_info.is_some()
    }

    #[inline]
    pub fn pack_info(&self) -> Option<&PackInfo> {
        self.pack_info.as_ref()
    }

    #[inline]
    pub fn take_pack_info(&mut self) -> Option<PackInfo> {
        self.pack_info.take()
    }

    /// Recomputes the final item from the base item and everything staged,
    /// replacing the cached one.
    ///
    /// On error nothing stays cached, so the next [`build`](Self::build)
    /// tries again.
    pub fn regen(&mut self) -> Result<&mut Self> {
        self.finished = None;
        let item = self.reconcile()?;
        self.finished = Some(Arc::new(item));
        Ok(self)
    }

    /// Returns the cached final item, regenerating only if none is cached.
    ///
    /// Two calls without a `regen` in between return the same [`Arc`].
    pub fn build(&mut self) -> Result<Arc<ItemStack>> {
        if let Some(item) = &self.finished {
            return Ok(Arc::clone(item));
        }
        let item = Arc::new(self.reconcile()?);
        self.finished = Some(Arc::clone(&item));
        Ok(item)
    }

    fn reconcile(&self) -> Result<ItemStack> {
        debug!(
            item_type = %self.item_type,
            amount = self.amount,
            raw_tags = self.raw_tags.len(),
            "item_builder.regen"
        );
        let mut item = self.base.clone();
        if *item.item_type() != self.item_type {
            item.set_type(self.item_type.clone());
        }
        if item.amount() != self.amount {
            item.set_amount(self.amount);
        }

        let meta = item.meta_mut();
        let mutations = reconcile::plan(meta.category(), &self.category)?;
        reconcile::apply(meta.category_mut(), mutations);

        if let Some(name) = &self.display_name {
            meta.set_display_name(Some(name.clone()));
        }
        meta.set_unbreakable(self.unbreakable);
        if let Some(flags) = self.flags {
            meta.add_item_flags(flags);
        }
        for (enchantment, level) in &self.enchants {
            meta.add_enchant(enchantment.clone(), *level, true);
        }
        if let Some(attributes) = &self.attributes {
            meta.set_attribute_modifiers(Some(attributes.clone()));
        }
        if let Some(data) = self.custom_model_data {
            meta.set_custom_model_data(Some(data));
        }
        self.custom_tags.apply_to(meta.persistent_data_mut());
        meta.set_lore(self.lore.clone());

        let item = if self.raw_tags.is_empty() {
            item
        } else {
            self.apply_raw_tags(&item).map_err(|error| {
                debug!(%error, "item_builder.raw_tags_failed");
                Error::Bridge(Box::new(error))
            })?
        };
        debug!(kind = ?item.meta().kind(), "item_builder.regenerated");
        Ok(item)
    }

    fn apply_raw_tags(&self, item: &ItemStack) -> Result<ItemStack> {
        let mut tree = self.bridge.to_tag(item)?;
        for (path, value) in self.raw_tags.iter() {
            debug!(path, "item_builder.raw_tag");
            self.bridge.set_path(&mut tree, path, value.clone())?;
        }
        self.bridge.from_tag(tree, item)
    }
}

impl From<ItemStack> for ItemBuilder {
    #[inline]
    fn from(base: ItemStack) -> Self {
        Self::new(base)
    }
}

impl From<ItemType> for ItemBuilder {
    #[inline]
    fn from(item_type: ItemType) -> Self {
        Self::from_type(item_type)
    }
}
