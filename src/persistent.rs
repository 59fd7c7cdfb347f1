//! Typed key/value tags stored alongside an item's metadata.
//!
//! A tag slot is addressed by a [`NamespacedKey`](crate::NamespacedKey) *and*
//! a [`PersistentDataType`] descriptor. The descriptor fixes the Rust type a
//! value is read and written as, and which NBT tag it is stored under.

mod container;
pub mod data_type;
mod store;

pub use container::*;
pub use store::*;

use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{OwnValue, TagID};

/// Describes how a Rust value is stored as an NBT primitive.
///
/// Implement this on a unit struct to add a custom stored type:
///
/// ```
/// use na_item::{OwnValue, PersistentDataType, TagID};
///
/// struct Percent;
///
/// impl PersistentDataType for Percent {
///     type Complex = f32;
///     const PRIMITIVE: TagID = TagID::Byte;
///
///     fn to_primitive(value: f32) -> OwnValue {
///         OwnValue::Byte((value * 100.0).round() as i8)
///     }
///
///     fn from_primitive(value: &OwnValue) -> Option<f32> {
///         value.as_byte().map(|b| b as f32 / 100.0)
///     }
/// }
/// ```
pub trait PersistentDataType: 'static {
    type Complex;
    const PRIMITIVE: TagID;

    fn to_primitive(value: Self::Complex) -> OwnValue;

    fn from_primitive(value: &OwnValue) -> Option<Self::Complex>;
}

/// Runtime identity of a [`PersistentDataType`].
///
/// Two descriptors are equal only when they name the same descriptor type,
/// even if both store the same primitive tag.
#[derive(Clone, Copy)]
pub struct DataTypeDescriptor {
    type_id: TypeId,
    name: &'static str,
    primitive: TagID,
}

impl DataTypeDescriptor {
    pub fn of<T: PersistentDataType>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            primitive: T::PRIMITIVE,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn primitive(&self) -> TagID {
        self.primitive
    }
}

impl PartialEq for DataTypeDescriptor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for DataTypeDescriptor {}

impl Hash for DataTypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for DataTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTypeDescriptor")
            .field("name", &self.name)
            .field("primitive", &self.primitive)
            .finish()
    }
}
