use crate::{Error, Result};

/// A 24-bit RGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const PURPLE: Color = Color::rgb(0x80, 0x00, 0x80);

    /// The color leather armor shows when no color was applied.
    pub const DEFAULT_LEATHER: Color = Color::rgb(0xA0, 0x65, 0x40);

    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    pub fn from_packed(rgb: u32) -> Result<Self> {
        if rgb > 0xFF_FFFF {
            return Err(Error::invalid_value("color", format!("{rgb:#x} exceeds 24 bits")));
        }
        Ok(Self(rgb))
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

macro_rules! indexed_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $id:literal),* $(,)? }) => {
        $(#[$meta])*
        #[repr(u8)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant = $id),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            #[inline]
            pub const fn id(self) -> u8 {
                self as u8
            }

            pub const fn from_id(id: u8) -> Option<Self> {
                match id {
                    $($id => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

indexed_enum!(
    /// The sixteen dye colors.
    DyeColor {
        White = 0,
        Orange = 1,
        Magenta = 2,
        LightBlue = 3,
        Yellow = 4,
        Lime = 5,
        Pink = 6,
        Gray = 7,
        LightGray = 8,
        Cyan = 9,
        Purple = 10,
        Blue = 11,
        Brown = 12,
        Green = 13,
        Red = 14,
        Black = 15,
    }
);

indexed_enum!(
    /// Tropical fish patterns. The first six use the small body shape, the
    /// last six the large one.
    FishPattern {
        Kob = 0,
        Sunstreak = 1,
        Snooper = 2,
        Dasher = 3,
        Brinely = 4,
        Spotty = 5,
        Flopper = 6,
        Stripey = 7,
        Glitter = 8,
        Blockfish = 9,
        Betty = 10,
        Clayfish = 11,
    }
);

impl FishPattern {
    /// Body shape: 0 for small, 1 for large.
    #[inline]
    pub const fn size(self) -> u8 {
        self.id() / 6
    }

    /// Index of the pattern within its body shape.
    #[inline]
    pub const fn index(self) -> u8 {
        self.id() % 6
    }

    pub const fn from_size_index(size: u8, index: u8) -> Option<Self> {
        if size > 1 || index > 5 {
            return None;
        }
        Self::from_id(size * 6 + index)
    }
}
