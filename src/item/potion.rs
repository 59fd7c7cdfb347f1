use crate::{Color, Error, NamespacedKey, Result};

key_type!(
    /// The base brew of a potion.
    PotionType {
        WATER = "water",
        MUNDANE = "mundane",
        THICK = "thick",
        AWKWARD = "awkward",
        NIGHT_VISION = "night_vision",
        INVISIBILITY = "invisibility",
        LEAPING = "leaping",
        FIRE_RESISTANCE = "fire_resistance",
        SWIFTNESS = "swiftness",
        SLOWNESS = "slowness",
        WATER_BREATHING = "water_breathing",
        HEALING = "healing",
        HARMING = "harming",
        POISON = "poison",
        REGENERATION = "regeneration",
        STRENGTH = "strength",
        WEAKNESS = "weakness",
        LUCK = "luck",
        TURTLE_MASTER = "turtle_master",
        SLOW_FALLING = "slow_falling",
    }
);

key_type!(
    /// A status effect a potion can apply.
    PotionEffectType {
        SPEED = "speed",
        SLOWNESS = "slowness",
        HASTE = "haste",
        MINING_FATIGUE = "mining_fatigue",
        STRENGTH = "strength",
        INSTANT_HEALTH = "instant_health",
        INSTANT_DAMAGE = "instant_damage",
        JUMP_BOOST = "jump_boost",
        NAUSEA = "nausea",
        REGENERATION = "regeneration",
        RESISTANCE = "resistance",
        FIRE_RESISTANCE = "fire_resistance",
        WATER_BREATHING = "water_breathing",
        INVISIBILITY = "invisibility",
        BLINDNESS = "blindness",
        NIGHT_VISION = "night_vision",
        HUNGER = "hunger",
        WEAKNESS = "weakness",
        POISON = "poison",
        WITHER = "wither",
        HEALTH_BOOST = "health_boost",
        ABSORPTION = "absorption",
        SATURATION = "saturation",
        GLOWING = "glowing",
        LEVITATION = "levitation",
        LUCK = "luck",
        UNLUCK = "unluck",
        SLOW_FALLING = "slow_falling",
    }
);

const LONG_PREFIX: &str = "long_";
const STRONG_PREFIX: &str = "strong_";

/// The base potion of a potion-like item: its type plus the
/// extended-duration and upgraded-strength variants, which are exclusive.
///
/// The type's key may not start with a variant prefix (`long_`, `strong_`),
/// so every potion id maps back to exactly one `PotionData`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPotionData")
)]
pub struct PotionData {
    kind: PotionType,
    extended: bool,
    upgraded: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPotionData {
    kind: PotionType,
    extended: bool,
    upgraded: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPotionData> for PotionData {
    type Error = Error;

    fn try_from(raw: RawPotionData) -> Result<Self> {
        Self::with_variant(raw.kind, raw.extended, raw.upgraded)
    }
}

impl Default for PotionData {
    fn default() -> Self {
        Self {
            kind: PotionType::WATER,
            extended: false,
            upgraded: false,
        }
    }
}

impl PotionData {
    #[inline]
    pub fn new(kind: PotionType) -> Result<Self> {
        Self::with_variant(kind, false, false)
    }

    pub fn with_variant(kind: PotionType, extended: bool, upgraded: bool) -> Result<Self> {
        if extended && upgraded {
            return Err(Error::invalid_value(
                "Potion",
                "potion cannot be both extended and upgraded",
            ));
        }
        let name = kind.key().key();
        if name.starts_with(LONG_PREFIX) || name.starts_with(STRONG_PREFIX) {
            return Err(Error::invalid_value(
                "Potion",
                format!("potion type `{}` starts with a variant prefix", kind.key()),
            ));
        }
        Ok(Self {
            kind,
            extended,
            upgraded,
        })
    }

    #[inline]
    pub fn kind(&self) -> &PotionType {
        &self.kind
    }

    #[inline]
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    #[inline]
    pub fn is_upgraded(&self) -> bool {
        self.upgraded
    }

    /// The potion id as stored in item tags, e.g. `minecraft:long_swiftness`.
    pub fn to_potion_id(&self) -> String {
        let prefix = if self.extended {
            LONG_PREFIX
        } else if self.upgraded {
            STRONG_PREFIX
        } else {
            ""
        };
        let key = self.kind.key();
        format!("{}:{prefix}{}", key.namespace(), key.key())
    }

    pub fn from_potion_id(id: &str) -> Result<Self> {
        let key: NamespacedKey = id.parse()?;
        let (extended, upgraded, name) = if let Some(name) = key.key().strip_prefix(LONG_PREFIX) {
            (true, false, name)
        } else if let Some(name) = key.key().strip_prefix(STRONG_PREFIX) {
            (false, true, name)
        } else {
            (false, false, key.key())
        };
        let kind = PotionType::from(NamespacedKey::new(key.namespace(), name)?);
        Self::with_variant(kind, extended, upgraded)
    }
}

/// A custom effect carried by a potion-like item.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionEffect {
    kind: PotionEffectType,
    duration: i32,
    amplifier: i32,
    ambient: bool,
    particles: bool,
    icon: bool,
}

impl PotionEffect {
    /// A visible, non-ambient effect. `duration` is in ticks.
    pub const fn new(kind: PotionEffectType, duration: i32, amplifier: i32) -> Self {
        Self {
            kind,
            duration,
            amplifier,
            ambient: false,
            particles: true,
            icon: true,
        }
    }

    pub fn with_ambient(mut self, ambient: bool) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_particles(mut self, particles: bool) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_icon(mut self, icon: bool) -> Self {
        self.icon = icon;
        self
    }

    #[inline]
    pub fn kind(&self) -> &PotionEffectType {
        &self.kind
    }

    #[inline]
    pub fn duration(&self) -> i32 {
        self.duration
    }

    #[inline]
    pub fn amplifier(&self) -> i32 {
        self.amplifier
    }

    #[inline]
    pub fn is_ambient(&self) -> bool {
        self.ambient
    }

    #[inline]
    pub fn has_particles(&self) -> bool {
        self.particles
    }

    #[inline]
    pub fn has_icon(&self) -> bool {
        self.icon
    }
}

/// Metadata of potions, splash/lingering potions and tipped arrows.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PotionMeta {
    color: Option<Color>,
    base: PotionData,
    effects: Vec<PotionEffect>,
}

impl PotionMeta {
    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    #[inline]
    pub fn base_potion_data(&self) -> &PotionData {
        &self.base
    }

    #[inline]
    pub fn set_base_potion_data(&mut self, data: PotionData) {
        self.base = data;
    }

    #[inline]
    pub fn custom_effects(&self) -> &[PotionEffect] {
        &self.effects
    }

    #[inline]
    pub fn has_custom_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Adds `effect`. An effect of the same type is replaced only when
    /// `overwrite` is set; returns whether the meta changed.
    pub fn add_custom_effect(&mut self, effect: PotionEffect, overwrite: bool) -> bool {
        match self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            Some(existing) if overwrite => {
                if *existing == effect {
                    return false;
                }
                *existing = effect;
                true
            }
            Some(_) => false,
            None => {
                self.effects.push(effect);
                true
            }
        }
    }

    pub fn remove_custom_effect(&mut self, kind: &PotionEffectType) -> bool {
        let len = self.effects.len();
        self.effects.retain(|e| &e.kind != kind);
        len != self.effects.len()
    }

    #[inline]
    pub fn clear_custom_effects(&mut self) {
        self.effects.clear();
    }
}
