//! Built-in [`PersistentDataType`] descriptors.

use crate::{OwnValue, PersistentDataContainer, PersistentDataType, TagID};

macro_rules! primitive_type {
    ($($name:ident: $complex:ty => $variant:ident),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Debug)]
            pub struct $name;

            impl PersistentDataType for $name {
                type Complex = $complex;
                const PRIMITIVE: TagID = TagID::$variant;

                #[inline]
                fn to_primitive(value: $complex) -> OwnValue {
                    OwnValue::$variant(value)
                }

                #[inline]
                fn from_primitive(value: &OwnValue) -> Option<$complex> {
                    match value {
                        OwnValue::$variant(value) => Some(Clone::clone(value)),
                        _ => None,
                    }
                }
            }
        )*
    };
}

primitive_type!(
    Byte: i8 => Byte,
    Short: i16 => Short,
    Integer: i32 => Int,
    Long: i64 => Long,
    Float: f32 => Float,
    Double: f64 => Double,
    String: std::string::String => String,
    ByteArray: Vec<i8> => ByteArray,
    IntegerArray: Vec<i32> => IntArray,
    LongArray: Vec<i64> => LongArray,
);

/// A `bool` stored as a Byte of 0 or 1.
#[derive(Clone, Copy, Debug)]
pub struct Boolean;

impl PersistentDataType for Boolean {
    type Complex = bool;
    const PRIMITIVE: TagID = TagID::Byte;

    #[inline]
    fn to_primitive(value: bool) -> OwnValue {
        OwnValue::Byte(value as i8)
    }

    #[inline]
    fn from_primitive(value: &OwnValue) -> Option<bool> {
        value.as_byte().map(|b| b != 0)
    }
}

/// A nested container stored as a Compound.
#[derive(Clone, Copy, Debug)]
pub struct TagContainer;

impl PersistentDataType for TagContainer {
    type Complex = PersistentDataContainer;
    const PRIMITIVE: TagID = TagID::Compound;

    #[inline]
    fn to_primitive(value: PersistentDataContainer) -> OwnValue {
        OwnValue::Compound(value.into_compound())
    }

    #[inline]
    fn from_primitive(value: &OwnValue) -> Option<PersistentDataContainer> {
        value
            .as_compound()
            .map(|compound| PersistentDataContainer::from_compound(compound.clone()))
    }
}
