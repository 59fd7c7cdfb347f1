use uuid::Uuid;

use super::keys;
use crate::{
    CategoryMeta, Error, ItemMeta, OwnCompound, OwnList, OwnValue, PotionEffect, Result, TagID,
};

pub(crate) fn uuid_to_ints(uuid: Uuid) -> Vec<i32> {
    let value = uuid.as_u128();
    vec![
        (value >> 96) as u32 as i32,
        (value >> 64) as u32 as i32,
        (value >> 32) as u32 as i32,
        value as u32 as i32,
    ]
}

fn display(tag: &mut OwnCompound) -> Result<&mut OwnCompound> {
    let found = tag.get(keys::DISPLAY).map(OwnValue::tag_id);
    tag.entry_compound(keys::DISPLAY)
        .ok_or_else(|| Error::UnexpectedTag {
            key: keys::DISPLAY.to_owned(),
            expected: TagID::Compound,
            found: found.unwrap_or(TagID::End),
        })
}

fn encode_effect(effect: &PotionEffect) -> OwnCompound {
    let mut compound = OwnCompound::new();
    compound.insert(keys::EFFECT_ID, effect.kind().to_string());
    compound.insert(keys::AMPLIFIER, effect.amplifier());
    compound.insert(keys::DURATION, effect.duration());
    compound.insert(keys::AMBIENT, effect.is_ambient());
    compound.insert(keys::SHOW_PARTICLES, effect.has_particles());
    compound.insert(keys::SHOW_ICON, effect.has_icon());
    compound
}

/// Lays `meta` out as an item `tag` compound on top of its unhandled entries.
pub(crate) fn encode_meta(meta: &ItemMeta) -> Result<OwnCompound> {
    let mut tag = meta.unhandled().clone();

    match meta.category() {
        CategoryMeta::None => {}
        CategoryMeta::Damageable(damageable) => {
            tag.insert(keys::DAMAGE, damageable.damage());
        }
        CategoryMeta::Colorable(colorable) => {
            if colorable.has_color() {
                display(&mut tag)?.insert(keys::COLOR, colorable.color().packed() as i32);
            }
        }
        CategoryMeta::Potion(potion) => {
            if let Some(color) = potion.color() {
                tag.insert(keys::CUSTOM_POTION_COLOR, color.packed() as i32);
            }
            tag.insert(keys::POTION, potion.base_potion_data().to_potion_id());
            if potion.has_custom_effects() {
                let effects = OwnList::from_values(potion.custom_effects().iter().map(encode_effect))?;
                tag.insert(keys::CUSTOM_POTION_EFFECTS, effects);
            }
        }
        CategoryMeta::Skull(skull) => {
            if let Some(owner) = skull.owning_player() {
                let mut compound = OwnCompound::new();
                compound.insert(keys::OWNER_ID, uuid_to_ints(owner.uuid()));
                if let Some(name) = owner.name() {
                    compound.insert(keys::NAME, name);
                }
                tag.insert(keys::SKULL_OWNER, compound);
            }
        }
        CategoryMeta::FishBucket(bucket) => {
            tag.insert(keys::BUCKET_VARIANT, bucket.variant());
        }
    }

    if let Some(name) = meta.display_name() {
        display(&mut tag)?.insert(keys::NAME, name);
    }
    if let Some(lore) = meta.lore() {
        let lines = OwnList::from_values(lore.iter().map(String::as_str))?;
        display(&mut tag)?.insert(keys::LORE, lines);
    }

    if meta.is_unbreakable() {
        tag.insert(keys::UNBREAKABLE, true);
    }
    if !meta.item_flags().is_empty() {
        tag.insert(keys::HIDE_FLAGS, meta.item_flags().bits() as i32);
    }

    if meta.has_enchants() {
        let enchants = OwnList::from_values(meta.enchants().iter().map(|(enchantment, level)| {
            let mut compound = OwnCompound::new();
            compound.insert(keys::ID, enchantment.to_string());
            compound.insert(keys::LEVEL, i16::try_from(*level).unwrap_or(i16::MAX));
            compound
        }))?;
        tag.insert(keys::ENCHANTMENTS, enchants);
    }

    if let Some(modifiers) = meta.attribute_modifiers() {
        let modifiers = OwnList::from_values(modifiers.iter().map(|(attribute, modifier)| {
            let mut compound = OwnCompound::new();
            compound.insert(keys::ATTRIBUTE_NAME, attribute.id());
            compound.insert(keys::NAME, modifier.name());
            compound.insert(keys::AMOUNT, modifier.amount());
            compound.insert(keys::OPERATION, modifier.operation() as i32);
            compound.insert(keys::UUID, uuid_to_ints(modifier.uuid()));
            if let Some(slot) = modifier.slot() {
                compound.insert(keys::SLOT, slot.id());
            }
            compound
        }))?;
        tag.insert(keys::ATTRIBUTE_MODIFIERS, modifiers);
    }

    if let Some(data) = meta.custom_model_data() {
        tag.insert(keys::CUSTOM_MODEL_DATA, data);
    }

    if !meta.persistent_data().is_empty() {
        tag.insert(
            keys::PUBLIC_BUKKIT_VALUES,
            meta.persistent_data().as_compound().clone(),
        );
    }

    Ok(tag)
}
