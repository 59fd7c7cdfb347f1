use crate::{OwnCompound, OwnList, TagID};

/// An owned NBT value.
///
/// Numbers are held in native byte order; byte order only matters when the
/// value is written with [`write_value`](crate::write_value) or read back
/// with [`read_value`](crate::read_value).
#[derive(Clone, Debug, PartialEq, Default)]
pub enum OwnValue {
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(OwnList),
    Compound(OwnCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl OwnValue {
    #[inline]
    pub const fn tag_id(&self) -> TagID {
        match self {
            OwnValue::End => TagID::End,
            OwnValue::Byte(_) => TagID::Byte,
            OwnValue::Short(_) => TagID::Short,
            OwnValue::Int(_) => TagID::Int,
            OwnValue::Long(_) => TagID::Long,
            OwnValue::Float(_) => TagID::Float,
            OwnValue::Double(_) => TagID::Double,
            OwnValue::ByteArray(_) => TagID::ByteArray,
            OwnValue::String(_) => TagID::String,
            OwnValue::List(_) => TagID::List,
            OwnValue::Compound(_) => TagID::Compound,
            OwnValue::IntArray(_) => TagID::IntArray,
            OwnValue::LongArray(_) => TagID::LongArray,
        }
    }

    #[inline]
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            OwnValue::Byte(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_short(&self) -> Option<i16> {
        match self {
            OwnValue::Short(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            OwnValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            OwnValue::Long(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            OwnValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            OwnValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            OwnValue::ByteArray(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            OwnValue::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&OwnList> {
        match self {
            OwnValue::List(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list_mut(&mut self) -> Option<&mut OwnList> {
        match self {
            OwnValue::List(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&OwnCompound> {
        match self {
            OwnValue::Compound(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound_mut(&mut self) -> Option<&mut OwnCompound> {
        match self {
            OwnValue::Compound(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            OwnValue::IntArray(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            OwnValue::LongArray(value) => Some(value),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for OwnValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    OwnValue::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    OwnList => List,
    OwnCompound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
);

impl From<()> for OwnValue {
    #[inline]
    fn from(_: ()) -> Self {
        OwnValue::End
    }
}

impl From<bool> for OwnValue {
    #[inline]
    fn from(value: bool) -> Self {
        OwnValue::Byte(value as i8)
    }
}

impl From<&str> for OwnValue {
    #[inline]
    fn from(value: &str) -> Self {
        OwnValue::String(value.to_owned())
    }
}
