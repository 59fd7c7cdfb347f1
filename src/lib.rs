pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

mod bridge;
mod builder;
mod error;
mod item;
mod key;
pub mod nbt;
mod pack;
pub mod persistent;
mod util;

pub use bridge::*;
pub use builder::*;
pub use error::*;
pub use item::*;
pub use key::*;
pub use nbt::*;
pub use pack::*;
pub use persistent::*;
pub use util::*;
