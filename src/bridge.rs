//! Conversion between items and their low-level tag tree.
//!
//! The tree handed out by [`TagBridge::to_tag`] is the item's `tag` compound:
//! the metadata only, without the type and amount. Raw overrides are written
//! into that tree and the result is decoded back into an item with
//! [`TagBridge::from_tag`].

mod decode;
mod encode;

use crate::{
    ByteOrder, Error, ItemStack, ItemType, NamespacedKey, OwnCompound, OwnValue, Result, TagID,
    read_value, write_value,
};

pub(crate) mod keys {
    pub const ID: &str = "id";
    pub const COUNT: &str = "Count";
    pub const TAG: &str = "tag";

    pub const DAMAGE: &str = "Damage";
    pub const DISPLAY: &str = "display";
    pub const NAME: &str = "Name";
    pub const LORE: &str = "Lore";
    pub const COLOR: &str = "color";
    pub const UNBREAKABLE: &str = "Unbreakable";
    pub const HIDE_FLAGS: &str = "HideFlags";
    pub const ENCHANTMENTS: &str = "Enchantments";
    pub const LEVEL: &str = "lvl";
    pub const ATTRIBUTE_MODIFIERS: &str = "AttributeModifiers";
    pub const ATTRIBUTE_NAME: &str = "AttributeName";
    pub const AMOUNT: &str = "Amount";
    pub const OPERATION: &str = "Operation";
    pub const UUID: &str = "UUID";
    pub const SLOT: &str = "Slot";
    pub const CUSTOM_MODEL_DATA: &str = "CustomModelData";
    pub const CUSTOM_POTION_COLOR: &str = "CustomPotionColor";
    pub const POTION: &str = "Potion";
    pub const CUSTOM_POTION_EFFECTS: &str = "CustomPotionEffects";
    pub const EFFECT_ID: &str = "Id";
    pub const AMPLIFIER: &str = "Amplifier";
    pub const DURATION: &str = "Duration";
    pub const AMBIENT: &str = "Ambient";
    pub const SHOW_PARTICLES: &str = "ShowParticles";
    pub const SHOW_ICON: &str = "ShowIcon";
    pub const SKULL_OWNER: &str = "SkullOwner";
    pub const OWNER_ID: &str = "Id";
    pub const BUCKET_VARIANT: &str = "BucketVariantTag";
    pub const PUBLIC_BUKKIT_VALUES: &str = "PublicBukkitValues";
}

/// Access to an item's low-level tag tree.
///
/// Implementations must round-trip: decoding the unchanged tree produced by
/// `to_tag` yields an item equal to the original.
pub trait TagBridge {
    /// Produces a mutable copy of `item`'s tag tree.
    fn to_tag(&self, item: &ItemStack) -> Result<OwnCompound>;

    /// Writes `value` at the dotted `path`, creating intermediate compounds.
    fn set_path(&self, tree: &mut OwnCompound, path: &str, value: OwnValue) -> Result<()> {
        tree.set_path(path, value).map(|_| ())
    }

    /// Builds a new item with `item`'s type and amount and the metadata
    /// described by `tree`.
    fn from_tag(&self, tree: OwnCompound, item: &ItemStack) -> Result<ItemStack>;
}

/// The standard item tag layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct NbtBridge;

impl TagBridge for NbtBridge {
    fn to_tag(&self, item: &ItemStack) -> Result<OwnCompound> {
        encode::encode_meta(item.meta())
    }

    fn from_tag(&self, tree: OwnCompound, item: &ItemStack) -> Result<ItemStack> {
        let meta = decode::decode_meta(tree, item.item_type().meta_kind())?;
        let mut decoded = ItemStack::with_amount(item.item_type().clone(), item.amount());
        decoded.set_meta(meta);
        Ok(decoded)
    }
}

impl ItemStack {
    /// The full item compound: `id`, `Count` and, when non-empty, `tag`.
    pub fn to_nbt(&self) -> Result<OwnCompound> {
        let mut compound = OwnCompound::new();
        compound.insert(keys::ID, self.item_type().to_string());
        compound.insert(keys::COUNT, self.amount() as i8);
        let tag = NbtBridge.to_tag(self)?;
        if !tag.is_empty() {
            compound.insert(keys::TAG, tag);
        }
        Ok(compound)
    }

    /// Decodes a full item compound. `Count` defaults to 1; keys other than
    /// `id`, `Count` and `tag` are ignored.
    pub fn from_nbt(mut compound: OwnCompound) -> Result<ItemStack> {
        let id = match compound.remove(keys::ID) {
            Some(OwnValue::String(id)) => id,
            Some(other) => {
                return Err(Error::UnexpectedTag {
                    key: keys::ID.to_owned(),
                    expected: TagID::String,
                    found: other.tag_id(),
                });
            }
            None => return Err(Error::invalid_value(keys::ID, "missing item id")),
        };
        let item_type = ItemType::from(id.parse::<NamespacedKey>()?);
        let amount = match compound.remove(keys::COUNT) {
            Some(OwnValue::Byte(count)) => count as u8,
            Some(other) => {
                return Err(Error::UnexpectedTag {
                    key: keys::COUNT.to_owned(),
                    expected: TagID::Byte,
                    found: other.tag_id(),
                });
            }
            None => 1,
        };
        let tag = match compound.remove(keys::TAG) {
            Some(OwnValue::Compound(tag)) => tag,
            Some(other) => {
                return Err(Error::UnexpectedTag {
                    key: keys::TAG.to_owned(),
                    expected: TagID::Compound,
                    found: other.tag_id(),
                });
            }
            None => OwnCompound::new(),
        };
        let item = ItemStack::with_amount(item_type, amount);
        NbtBridge.from_tag(tag, &item)
    }
}

/// Serializes `item` as a binary root compound.
///
/// # Example
///
/// ```
/// use na_item::{BigEndian, ItemStack, ItemType, read_item, write_item};
///
/// let mut item = ItemStack::with_amount(ItemType::DIAMOND, 3);
/// item.meta_mut().set_display_name(Some("Shiny".to_owned()));
///
/// let bytes = write_item::<BigEndian>(&item).unwrap();
/// assert_eq!(read_item::<BigEndian>(&bytes).unwrap(), item);
/// ```
pub fn write_item<O: ByteOrder>(item: &ItemStack) -> Result<Vec<u8>> {
    write_value::<O>(&OwnValue::Compound(item.to_nbt()?))
}

pub fn read_item<O: ByteOrder>(data: &[u8]) -> Result<ItemStack> {
    match read_value::<O>(data)? {
        OwnValue::Compound(compound) => ItemStack::from_nbt(compound),
        other => Err(Error::UnexpectedTag {
            key: String::new(),
            expected: TagID::Compound,
            found: other.tag_id(),
        }),
    }
}
