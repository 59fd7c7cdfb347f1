use crate::NamespacedKey;

key_type!(
    /// An enchantment identifier.
    Enchantment {
        PROTECTION = "protection",
        FIRE_PROTECTION = "fire_protection",
        FEATHER_FALLING = "feather_falling",
        BLAST_PROTECTION = "blast_protection",
        PROJECTILE_PROTECTION = "projectile_protection",
        RESPIRATION = "respiration",
        AQUA_AFFINITY = "aqua_affinity",
        THORNS = "thorns",
        DEPTH_STRIDER = "depth_strider",
        FROST_WALKER = "frost_walker",
        BINDING_CURSE = "binding_curse",
        SHARPNESS = "sharpness",
        SMITE = "smite",
        BANE_OF_ARTHROPODS = "bane_of_arthropods",
        KNOCKBACK = "knockback",
        FIRE_ASPECT = "fire_aspect",
        LOOTING = "looting",
        SWEEPING = "sweeping",
        EFFICIENCY = "efficiency",
        SILK_TOUCH = "silk_touch",
        UNBREAKING = "unbreaking",
        FORTUNE = "fortune",
        POWER = "power",
        PUNCH = "punch",
        FLAME = "flame",
        INFINITY = "infinity",
        LUCK_OF_THE_SEA = "luck_of_the_sea",
        LURE = "lure",
        LOYALTY = "loyalty",
        IMPALING = "impaling",
        RIPTIDE = "riptide",
        CHANNELING = "channeling",
        MULTISHOT = "multishot",
        QUICK_CHARGE = "quick_charge",
        PIERCING = "piercing",
        MENDING = "mending",
        VANISHING_CURSE = "vanishing_curse",
        SOUL_SPEED = "soul_speed",
    }
);

impl Enchantment {
    /// Highest level an item can store; the tag layout keeps levels as shorts.
    pub const MAX_STORED_LEVEL: u16 = i16::MAX as u16;

    /// Highest level obtainable without forcing.
    ///
    /// Enchantments outside the `minecraft` namespace, or unknown ones, cap at 1.
    pub fn max_level(&self) -> u16 {
        if !self.key().is_minecraft() {
            return 1;
        }
        match self.key().key() {
            "sharpness" | "smite" | "bane_of_arthropods" | "efficiency" | "power" | "impaling" => 5,
            "protection"
            | "fire_protection"
            | "feather_falling"
            | "blast_protection"
            | "projectile_protection"
            | "piercing" => 4,
            "respiration" | "thorns" | "depth_strider" | "looting" | "sweeping" | "unbreaking"
            | "fortune" | "luck_of_the_sea" | "lure" | "loyalty" | "riptide" | "quick_charge"
            | "soul_speed" => 3,
            "frost_walker" | "knockback" | "fire_aspect" | "punch" => 2,
            _ => 1,
        }
    }
}
