use std::collections::BTreeMap;

use uuid::Uuid;

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $id:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const fn id(self) -> &'static str {
                match self {
                    $($name::$variant => $id,)*
                }
            }

            pub fn from_id(id: &str) -> Option<Self> {
                match id {
                    $($id => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

string_enum!(
    /// An entity attribute an item can modify.
    Attribute {
        MaxHealth = "generic.max_health",
        FollowRange = "generic.follow_range",
        KnockbackResistance = "generic.knockback_resistance",
        MovementSpeed = "generic.movement_speed",
        FlyingSpeed = "generic.flying_speed",
        AttackDamage = "generic.attack_damage",
        AttackKnockback = "generic.attack_knockback",
        AttackSpeed = "generic.attack_speed",
        Armor = "generic.armor",
        ArmorToughness = "generic.armor_toughness",
        Luck = "generic.luck",
        HorseJumpStrength = "horse.jump_strength",
        ZombieSpawnReinforcements = "zombie.spawn_reinforcements",
    }
);

string_enum!(
    /// The equipment slot an attribute modifier is active in.
    EquipmentSlot {
        MainHand = "mainhand",
        OffHand = "offhand",
        Head = "head",
        Chest = "chest",
        Legs = "legs",
        Feet = "feet",
    }
);

#[repr(i32)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    AddNumber = 0,
    AddScalar = 1,
    MultiplyScalar1 = 2,
}

impl Operation {
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Operation::AddNumber),
            1 => Some(Operation::AddScalar),
            2 => Some(Operation::MultiplyScalar1),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeModifier {
    uuid: Uuid,
    name: String,
    amount: f64,
    operation: Operation,
    slot: Option<EquipmentSlot>,
}

impl AttributeModifier {
    /// A modifier with a freshly generated id, active in every slot.
    pub fn new(name: impl Into<String>, amount: f64, operation: Operation) -> Self {
        Self::with_uuid(Uuid::new_v4(), name, amount, operation)
    }

    pub fn with_uuid(uuid: Uuid, name: impl Into<String>, amount: f64, operation: Operation) -> Self {
        Self {
            uuid,
            name: name.into(),
            amount,
            operation,
            slot: None,
        }
    }

    pub fn in_slot(mut self, slot: EquipmentSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    #[inline]
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[inline]
    pub fn slot(&self) -> Option<EquipmentSlot> {
        self.slot
    }
}

/// Attribute modifiers grouped by attribute. An attribute may carry several
/// modifiers; a modifier is identified by its uuid within one attribute.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AttributeModifiers {
    entries: BTreeMap<Attribute, Vec<AttributeModifier>>,
}

impl AttributeModifiers {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `modifier` under `attribute`; returns `false` if a modifier with
    /// the same uuid is already there.
    pub fn put(&mut self, attribute: Attribute, modifier: AttributeModifier) -> bool {
        let modifiers = self.entries.entry(attribute).or_default();
        if modifiers.iter().any(|m| m.uuid == modifier.uuid) {
            return false;
        }
        modifiers.push(modifier);
        true
    }

    pub fn put_all(&mut self, other: &AttributeModifiers) {
        for (attribute, modifier) in other.iter() {
            self.put(attribute, modifier.clone());
        }
    }

    pub fn get(&self, attribute: Attribute) -> &[AttributeModifier] {
        self.entries
            .get(&attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn remove_all(&mut self, attribute: Attribute) -> Vec<AttributeModifier> {
        self.entries.remove(&attribute).unwrap_or_default()
    }

    /// Total number of modifiers across all attributes.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeModifier)> {
        self.entries
            .iter()
            .flat_map(|(attribute, modifiers)| modifiers.iter().map(move |m| (*attribute, m)))
    }
}

impl FromIterator<(Attribute, AttributeModifier)> for AttributeModifiers {
    fn from_iter<T: IntoIterator<Item = (Attribute, AttributeModifier)>>(iter: T) -> Self {
        let mut modifiers = AttributeModifiers::new();
        for (attribute, modifier) in iter {
            modifiers.put(attribute, modifier);
        }
        modifiers
    }
}
