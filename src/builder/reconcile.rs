//! Planning the category-specific writes a regen has to perform.
//!
//! [`plan`] compares staged [`CategoryFields`] with the category the item
//! actually carries and returns only the writes that change something;
//! [`apply`] performs them. Staged fields that do not belong to the carried
//! category are ignored.

use tracing::trace;

use crate::{
    CategoryMeta, Color, DyeColor, Error, FishPattern, OfflinePlayer, PotionData, PotionEffect,
    Result,
};

/// Category fields staged on a builder. `None` means the field was never set.
///
/// `color` is shared by the colorable and potion categories.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CategoryFields {
    pub damage: Option<i32>,
    pub color: Option<Color>,
    pub base_potion: Option<PotionData>,
    pub potion_effects: Option<Vec<PotionEffect>>,
    pub owner: Option<OfflinePlayer>,
    pub body_color: Option<DyeColor>,
    pub pattern: Option<FishPattern>,
    pub pattern_color: Option<DyeColor>,
}

impl CategoryFields {
    /// Copies the fields of whichever category `meta` carries.
    pub fn capture(meta: &CategoryMeta) -> Self {
        let mut fields = Self::default();
        match meta {
            CategoryMeta::None => {}
            CategoryMeta::Damageable(damageable) => fields.damage = Some(damageable.damage()),
            CategoryMeta::Colorable(colorable) => fields.color = Some(colorable.color()),
            CategoryMeta::Potion(potion) => {
                fields.color = potion.color();
                fields.base_potion = Some(potion.base_potion_data().clone());
                fields.potion_effects = Some(potion.custom_effects().to_vec());
            }
            CategoryMeta::Skull(skull) => fields.owner = skull.owning_player().cloned(),
            CategoryMeta::FishBucket(bucket) => {
                fields.body_color = Some(bucket.body_color());
                fields.pattern = Some(bucket.pattern());
                fields.pattern_color = Some(bucket.pattern_color());
            }
        }
        fields
    }
}

/// A single write onto a category.
#[derive(Clone, PartialEq, Debug)]
pub enum CategoryMutation {
    SetDamage(i32),
    SetLeatherColor(Color),
    SetPotionColor(Color),
    SetBasePotion(PotionData),
    /// Adds the effect, replacing one of the same type.
    AddPotionEffect(PotionEffect),
    SetOwner(OfflinePlayer),
    SetBodyColor(DyeColor),
    SetPattern(FishPattern),
    SetPatternColor(DyeColor),
}

fn require<'a, T>(value: &'a Option<T>, what: &'static str) -> Result<&'a T> {
    value.as_ref().ok_or(Error::InvalidBuilderState(what))
}

/// Computes the writes needed to bring `meta` in line with `fields`.
///
/// Unset damage, color and owner fields are skipped. The potion base data
/// and effect list and all three fish bucket fields must be set when the
/// item carries that category, otherwise [`Error::InvalidBuilderState`] is
/// returned.
///
/// # Example
///
/// ```
/// use na_item::reconcile::{CategoryFields, CategoryMutation, plan};
/// use na_item::{CategoryMeta, DamageableMeta};
///
/// let mut damageable = DamageableMeta::default();
/// damageable.set_damage(10);
/// let meta = CategoryMeta::Damageable(damageable);
///
/// let unchanged = CategoryFields { damage: Some(10), ..Default::default() };
/// assert!(plan(&meta, &unchanged).unwrap().is_empty());
///
/// let repaired = CategoryFields { damage: Some(0), ..Default::default() };
/// assert_eq!(plan(&meta, &repaired).unwrap(), [CategoryMutation::SetDamage(0)]);
/// ```
pub fn plan(meta: &CategoryMeta, fields: &CategoryFields) -> Result<Vec<CategoryMutation>> {
    let mut mutations = Vec::new();
    match meta {
        CategoryMeta::None => {}
        CategoryMeta::Damageable(damageable) => {
            if let Some(damage) = fields.damage
                && damage != damageable.damage()
            {
                mutations.push(CategoryMutation::SetDamage(damage));
            }
        }
        CategoryMeta::Colorable(colorable) => {
            if let Some(color) = fields.color
                && color != colorable.color()
            {
                mutations.push(CategoryMutation::SetLeatherColor(color));
            }
        }
        CategoryMeta::Potion(potion) => {
            let base = require(&fields.base_potion, "potion base data is unset")?;
            let effects = require(&fields.potion_effects, "potion effects are unset")?;
            if let Some(color) = fields.color
                && Some(color) != potion.color()
            {
                mutations.push(CategoryMutation::SetPotionColor(color));
            }
            if base != potion.base_potion_data() {
                mutations.push(CategoryMutation::SetBasePotion(base.clone()));
            }
            if effects.as_slice() != potion.custom_effects() {
                mutations.extend(effects.iter().cloned().map(CategoryMutation::AddPotionEffect));
            }
        }
        CategoryMeta::Skull(skull) => {
            if let Some(owner) = &fields.owner
                && Some(owner) != skull.owning_player()
            {
                mutations.push(CategoryMutation::SetOwner(owner.clone()));
            }
        }
        CategoryMeta::FishBucket(bucket) => {
            let body = *require(&fields.body_color, "fish body color is unset")?;
            let pattern = *require(&fields.pattern, "fish pattern is unset")?;
            let pattern_color = *require(&fields.pattern_color, "fish pattern color is unset")?;
            if body != bucket.body_color() {
                mutations.push(CategoryMutation::SetBodyColor(body));
            }
            if pattern != bucket.pattern() {
                mutations.push(CategoryMutation::SetPattern(pattern));
            }
            if pattern_color != bucket.pattern_color() {
                mutations.push(CategoryMutation::SetPatternColor(pattern_color));
            }
        }
    }
    Ok(mutations)
}

/// Performs `mutations` on `meta`. Mutations for another category are ignored.
pub fn apply(meta: &mut CategoryMeta, mutations: impl IntoIterator<Item = CategoryMutation>) {
    for mutation in mutations {
        trace!(?mutation, "item_builder.category_mutation");
        match (&mut *meta, mutation) {
            (CategoryMeta::Damageable(damageable), CategoryMutation::SetDamage(damage)) => {
                damageable.set_damage(damage);
            }
            (CategoryMeta::Colorable(colorable), CategoryMutation::SetLeatherColor(color)) => {
                colorable.set_color(Some(color));
            }
            (CategoryMeta::Potion(potion), CategoryMutation::SetPotionColor(color)) => {
                potion.set_color(Some(color));
            }
            (CategoryMeta::Potion(potion), CategoryMutation::SetBasePotion(data)) => {
                potion.set_base_potion_data(data);
            }
            (CategoryMeta::Potion(potion), CategoryMutation::AddPotionEffect(effect)) => {
                potion.add_custom_effect(effect, true);
            }
            (CategoryMeta::Skull(skull), CategoryMutation::SetOwner(owner)) => {
                skull.set_owning_player(Some(owner));
            }
            (CategoryMeta::FishBucket(bucket), CategoryMutation::SetBodyColor(color)) => {
                bucket.set_body_color(color);
            }
            (CategoryMeta::FishBucket(bucket), CategoryMutation::SetPattern(pattern)) => {
                bucket.set_pattern(pattern);
            }
            (CategoryMeta::FishBucket(bucket), CategoryMutation::SetPatternColor(color)) => {
                bucket.set_pattern_color(color);
            }
            _ => {}
        }
    }
}
