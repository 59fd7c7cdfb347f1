use crate::{
    DataTypeDescriptor, NamespacedKey, OwnValue, PersistentDataContainer, PersistentDataType,
};

/// A tag slot: a key paired with the descriptor its value is stored as.
///
/// Slots with the same key but different descriptors are distinct.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypedTagKey {
    key: NamespacedKey,
    data_type: DataTypeDescriptor,
}

impl TypedTagKey {
    #[inline]
    pub fn new(key: NamespacedKey, data_type: DataTypeDescriptor) -> Self {
        Self { key, data_type }
    }

    #[inline]
    pub fn of<T: PersistentDataType>(key: NamespacedKey) -> Self {
        Self::new(key, DataTypeDescriptor::of::<T>())
    }

    #[inline]
    pub fn key(&self) -> &NamespacedKey {
        &self.key
    }

    #[inline]
    pub fn data_type(&self) -> &DataTypeDescriptor {
        &self.data_type
    }

    #[inline]
    fn matches(&self, key: &NamespacedKey, data_type: &DataTypeDescriptor) -> bool {
        &self.key == key && &self.data_type == data_type
    }
}

/// Staged typed tags, kept in insertion order.
///
/// # Example
///
/// ```
/// use na_item::{NamespacedKey, TypedTagStore, data_type};
///
/// let key = NamespacedKey::new("demo", "flag").unwrap();
/// let mut store = TypedTagStore::new();
/// store.set_typed::<data_type::Byte>(key.clone(), 3);
/// store.set_typed::<data_type::Boolean>(key.clone(), true);
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.get_typed::<data_type::Byte>(&key), Some(3));
/// assert_eq!(store.get_typed::<data_type::Boolean>(&key), Some(true));
/// assert_eq!(store.get_typed::<data_type::Integer>(&key), None);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TypedTagStore {
    entries: Vec<(TypedTagKey, OwnValue)>,
}

impl TypedTagStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes `value` into `slot`, replacing the slot's previous value in place.
    pub fn set(&mut self, slot: TypedTagKey, value: OwnValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == slot) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((slot, value)),
        }
    }

    pub fn set_typed<T: PersistentDataType>(&mut self, key: NamespacedKey, value: T::Complex) {
        self.set(TypedTagKey::of::<T>(key), T::to_primitive(value));
    }

    /// Scans for the slot matching both `key` and `data_type`.
    pub fn get(&self, key: &NamespacedKey, data_type: &DataTypeDescriptor) -> Option<&OwnValue> {
        self.entries
            .iter()
            .find(|(slot, _)| slot.matches(key, data_type))
            .map(|(_, value)| value)
    }

    pub fn get_typed<T: PersistentDataType>(&self, key: &NamespacedKey) -> Option<T::Complex> {
        T::from_primitive(self.get(key, &DataTypeDescriptor::of::<T>())?)
    }

    #[inline]
    pub fn has(&self, slot: &TypedTagKey) -> bool {
        self.get(&slot.key, &slot.data_type).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypedTagKey, &OwnValue)> {
        self.entries.iter().map(|(slot, value)| (slot, value))
    }

    /// Writes every slot into `container` in insertion order. Slots sharing
    /// a key overwrite each other there, so the latest one wins.
    pub fn apply_to(&self, container: &mut PersistentDataContainer) {
        for (slot, value) in &self.entries {
            container.set_raw(&slot.key, value.clone());
        }
    }
}
