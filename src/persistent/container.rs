use crate::{NamespacedKey, OwnCompound, OwnValue, PersistentDataType};

/// The typed tags stored on an item, keyed by [`NamespacedKey`] alone.
///
/// Reading with a descriptor whose primitive tag differs from the stored one
/// yields nothing.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PersistentDataContainer {
    values: OwnCompound,
}

impl PersistentDataContainer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_compound(values: OwnCompound) -> Self {
        Self { values }
    }

    #[inline]
    pub fn as_compound(&self) -> &OwnCompound {
        &self.values
    }

    #[inline]
    pub fn into_compound(self) -> OwnCompound {
        self.values
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn set<T: PersistentDataType>(&mut self, key: &NamespacedKey, value: T::Complex) {
        self.set_raw(key, T::to_primitive(value));
    }

    pub fn get<T: PersistentDataType>(&self, key: &NamespacedKey) -> Option<T::Complex> {
        let value = self.get_raw(key)?;
        if value.tag_id() != T::PRIMITIVE {
            return None;
        }
        T::from_primitive(value)
    }

    pub fn has<T: PersistentDataType>(&self, key: &NamespacedKey) -> bool {
        self.get_raw(key)
            .is_some_and(|value| value.tag_id() == T::PRIMITIVE)
    }

    #[inline]
    pub fn has_key(&self, key: &NamespacedKey) -> bool {
        self.values.contains_key(&key.to_string())
    }

    #[inline]
    pub fn set_raw(&mut self, key: &NamespacedKey, value: OwnValue) {
        self.values.insert(key.to_string(), value);
    }

    #[inline]
    pub fn get_raw(&self, key: &NamespacedKey) -> Option<&OwnValue> {
        self.values.get(&key.to_string())
    }

    #[inline]
    pub fn remove(&mut self, key: &NamespacedKey) -> Option<OwnValue> {
        self.values.remove(&key.to_string())
    }

    /// Keys in insertion order. Stored names that are not valid namespaced
    /// keys are skipped.
    pub fn keys(&self) -> impl Iterator<Item = NamespacedKey> + '_ {
        self.values.keys().filter_map(|key| key.parse().ok())
    }
}
