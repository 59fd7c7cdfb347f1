use uuid::Uuid;

use super::keys;
use crate::{
    Attribute, AttributeModifier, AttributeModifiers, CategoryMeta, Color, Enchantment,
    EquipmentSlot, Error, FishBucketMeta, ItemFlags, ItemMeta, MetaKind, NamespacedKey,
    OfflinePlayer, Operation, OwnCompound, OwnList, OwnValue, PersistentDataContainer,
    PotionData, PotionEffect, PotionEffectType, Result, TagID, util::cold_path,
};

pub(crate) fn uuid_from_ints(ints: &[i32]) -> Option<Uuid> {
    let &[a, b, c, d] = ints else {
        return None;
    };
    Some(Uuid::from_u128(
        (a as u32 as u128) << 96
            | (b as u32 as u128) << 64
            | (c as u32 as u128) << 32
            | d as u32 as u128,
    ))
}

fn unexpected(key: &str, expected: TagID, found: &OwnValue) -> Error {
    cold_path();
    Error::UnexpectedTag {
        key: key.to_owned(),
        expected,
        found: found.tag_id(),
    }
}

macro_rules! take_fn {
    ($($name:ident => $variant:ident($ty:ty);)*) => {
        $(
            fn $name(compound: &mut OwnCompound, key: &str) -> Result<Option<$ty>> {
                match compound.remove(key) {
                    None => Ok(None),
                    Some(OwnValue::$variant(value)) => Ok(Some(value)),
                    Some(other) => Err(unexpected(key, TagID::$variant, &other)),
                }
            }
        )*
    };
}

take_fn! {
    take_byte => Byte(i8);
    take_short => Short(i16);
    take_int => Int(i32);
    take_double => Double(f64);
    take_string => String(String);
    take_list => List(OwnList);
    take_compound => Compound(OwnCompound);
    take_int_array => IntArray(Vec<i32>);
}

fn required<T>(value: Option<T>, key: &str) -> Result<T> {
    value.ok_or_else(|| Error::invalid_value(key, "missing required entry"))
}

/// Iterates the compounds of a list stored under `key`.
fn compounds(list: OwnList, key: &str) -> Result<Vec<OwnCompound>> {
    if list.is_empty() {
        return Ok(Vec::new());
    }
    if list.element_tag_id() != TagID::Compound {
        return Err(Error::UnexpectedTag {
            key: key.to_owned(),
            expected: TagID::Compound,
            found: list.element_tag_id(),
        });
    }
    Ok(list
        .into_iter()
        .filter_map(|value| match value {
            OwnValue::Compound(compound) => Some(compound),
            _ => None,
        })
        .collect())
}

fn decode_color(packed: i32, key: &str) -> Result<Color> {
    Color::from_packed(packed as u32).map_err(|_| Error::invalid_value(key, "not an RGB color"))
}

fn decode_display(meta: &mut ItemMeta, mut display: OwnCompound) -> Result<Option<OwnCompound>> {
    meta.set_display_name(take_string(&mut display, keys::NAME)?);

    if let Some(lore) = take_list(&mut display, keys::LORE)? {
        let mut lines = Vec::with_capacity(lore.len());
        for line in lore {
            match line {
                OwnValue::String(line) => lines.push(line),
                other => return Err(unexpected(keys::LORE, TagID::String, &other)),
            }
        }
        meta.set_lore(Some(lines));
    }

    if let CategoryMeta::Colorable(colorable) = meta.category_mut()
        && let Some(packed) = take_int(&mut display, keys::COLOR)?
    {
        colorable.set_color(Some(decode_color(packed, keys::COLOR)?));
    }

    Ok((!display.is_empty()).then_some(display))
}

fn decode_enchants(meta: &mut ItemMeta, list: OwnList) -> Result<()> {
    for mut entry in compounds(list, keys::ENCHANTMENTS)? {
        let id = required(take_string(&mut entry, keys::ID)?, keys::ID)?;
        let level = required(take_short(&mut entry, keys::LEVEL)?, keys::LEVEL)?;
        let enchantment = Enchantment::from(id.parse::<NamespacedKey>()?);
        meta.add_enchant(enchantment, level.max(0) as u16, true);
    }
    Ok(())
}

fn decode_modifiers(list: OwnList) -> Result<AttributeModifiers> {
    let mut modifiers = AttributeModifiers::new();
    for mut entry in compounds(list, keys::ATTRIBUTE_MODIFIERS)? {
        let attribute_id = required(take_string(&mut entry, keys::ATTRIBUTE_NAME)?, keys::ATTRIBUTE_NAME)?;
        let attribute = Attribute::from_id(&attribute_id)
            .ok_or_else(|| Error::invalid_value(keys::ATTRIBUTE_NAME, format!("unknown attribute `{attribute_id}`")))?;
        let name = take_string(&mut entry, keys::NAME)?.unwrap_or_default();
        let amount = required(take_double(&mut entry, keys::AMOUNT)?, keys::AMOUNT)?;
        let operation = required(take_int(&mut entry, keys::OPERATION)?, keys::OPERATION)?;
        let operation = Operation::from_id(operation)
            .ok_or_else(|| Error::invalid_value(keys::OPERATION, format!("unknown operation {operation}")))?;
        let uuid = required(take_int_array(&mut entry, keys::UUID)?, keys::UUID)?;
        let uuid = uuid_from_ints(&uuid)
            .ok_or_else(|| Error::invalid_value(keys::UUID, "expected four ints"))?;

        let mut modifier = AttributeModifier::with_uuid(uuid, name, amount, operation);
        if let Some(slot) = take_string(&mut entry, keys::SLOT)? {
            let slot = EquipmentSlot::from_id(&slot)
                .ok_or_else(|| Error::invalid_value(keys::SLOT, format!("unknown slot `{slot}`")))?;
            modifier = modifier.in_slot(slot);
        }
        modifiers.put(attribute, modifier);
    }
    Ok(modifiers)
}

fn decode_effect(mut entry: OwnCompound) -> Result<PotionEffect> {
    let id = required(take_string(&mut entry, keys::EFFECT_ID)?, keys::EFFECT_ID)?;
    let kind = PotionEffectType::from(id.parse::<NamespacedKey>()?);
    let duration = take_int(&mut entry, keys::DURATION)?.unwrap_or(0);
    let amplifier = take_int(&mut entry, keys::AMPLIFIER)?.unwrap_or(0);
    let flag = |entry: &mut OwnCompound, key, default| {
        take_byte(entry, key).map(|value| value.map_or(default, |value| value != 0))
    };
    let ambient = flag(&mut entry, keys::AMBIENT, false)?;
    let particles = flag(&mut entry, keys::SHOW_PARTICLES, true)?;
    let icon = flag(&mut entry, keys::SHOW_ICON, true)?;
    Ok(PotionEffect::new(kind, duration, amplifier)
        .with_ambient(ambient)
        .with_particles(particles)
        .with_icon(icon))
}

fn decode_category(meta: &mut ItemMeta, tag: &mut OwnCompound) -> Result<()> {
    match meta.category_mut() {
        CategoryMeta::None | CategoryMeta::Colorable(_) => {}
        CategoryMeta::Damageable(damageable) => {
            damageable.set_damage(take_int(tag, keys::DAMAGE)?.unwrap_or(0));
        }
        CategoryMeta::Potion(potion) => {
            if let Some(packed) = take_int(tag, keys::CUSTOM_POTION_COLOR)? {
                potion.set_color(Some(decode_color(packed, keys::CUSTOM_POTION_COLOR)?));
            }
            if let Some(id) = take_string(tag, keys::POTION)? {
                potion.set_base_potion_data(PotionData::from_potion_id(&id)?);
            }
            if let Some(effects) = take_list(tag, keys::CUSTOM_POTION_EFFECTS)? {
                for entry in compounds(effects, keys::CUSTOM_POTION_EFFECTS)? {
                    potion.add_custom_effect(decode_effect(entry)?, true);
                }
            }
        }
        CategoryMeta::Skull(skull) => {
            if let Some(mut owner) = take_compound(tag, keys::SKULL_OWNER)? {
                let ints = required(take_int_array(&mut owner, keys::OWNER_ID)?, keys::OWNER_ID)?;
                let uuid = uuid_from_ints(&ints)
                    .ok_or_else(|| Error::invalid_value(keys::SKULL_OWNER, "expected four ints"))?;
                let player = match take_string(&mut owner, keys::NAME)? {
                    Some(name) => OfflinePlayer::with_name(uuid, name),
                    None => OfflinePlayer::new(uuid),
                };
                skull.set_owning_player(Some(player));
            }
        }
        CategoryMeta::FishBucket(bucket) => {
            if let Some(variant) = take_int(tag, keys::BUCKET_VARIANT)? {
                *bucket = FishBucketMeta::from_variant(variant).ok_or_else(|| {
                    Error::invalid_value(keys::BUCKET_VARIANT, format!("unknown variant {variant:#x}"))
                })?;
            }
        }
    }
    Ok(())
}

/// Reads an item `tag` compound into metadata of category `kind`.
///
/// Known entries are interpreted and removed; whatever remains is kept as the
/// meta's unhandled entries. Category entries are only interpreted when they
/// belong to `kind`.
pub(crate) fn decode_meta(mut tag: OwnCompound, kind: MetaKind) -> Result<ItemMeta> {
    let mut meta = ItemMeta::for_kind(kind);

    decode_category(&mut meta, &mut tag)?;

    if let Some(display) = take_compound(&mut tag, keys::DISPLAY)?
        && let Some(rest) = decode_display(&mut meta, display)?
    {
        tag.insert(keys::DISPLAY, rest);
    }

    if let Some(unbreakable) = take_byte(&mut tag, keys::UNBREAKABLE)? {
        meta.set_unbreakable(unbreakable != 0);
    }
    if let Some(flags) = take_int(&mut tag, keys::HIDE_FLAGS)? {
        meta.add_item_flags(ItemFlags::from_bits_retain(flags as u32));
    }
    if let Some(enchants) = take_list(&mut tag, keys::ENCHANTMENTS)? {
        decode_enchants(&mut meta, enchants)?;
    }
    if let Some(modifiers) = take_list(&mut tag, keys::ATTRIBUTE_MODIFIERS)? {
        meta.set_attribute_modifiers(Some(decode_modifiers(modifiers)?));
    }
    meta.set_custom_model_data(take_int(&mut tag, keys::CUSTOM_MODEL_DATA)?);
    if let Some(values) = take_compound(&mut tag, keys::PUBLIC_BUKKIT_VALUES)? {
        *meta.persistent_data_mut() = PersistentDataContainer::from_compound(values);
    }

    meta.set_unhandled(tag);
    Ok(meta)
}
