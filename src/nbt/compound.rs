use crate::{OwnList, OwnValue};

/// An owned NBT compound.
///
/// Entries keep their insertion order, which is also the order they are
/// written in. Replacing an existing key keeps its position.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct OwnCompound {
    entries: Vec<(String, OwnValue)>,
}

impl OwnCompound {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&OwnValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut OwnValue> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OwnValue>) -> Option<OwnValue> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<OwnValue> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the compound stored under `key`, inserting an empty one when
    /// the key is missing. Returns `None` if the key holds another tag.
    pub fn entry_compound(&mut self, key: &str) -> Option<&mut OwnCompound> {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.entries
                    .push((key.to_owned(), OwnValue::Compound(OwnCompound::new())));
                self.entries.len() - 1
            }
        };
        self.entries[index].1.as_compound_mut()
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OwnValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[inline]
    pub fn get_byte(&self, key: &str) -> Option<i8> {
        self.get(key)?.as_byte()
    }

    #[inline]
    pub fn get_short(&self, key: &str) -> Option<i16> {
        self.get(key)?.as_short()
    }

    #[inline]
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key)?.as_int()
    }

    #[inline]
    pub fn get_long(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_long()
    }

    #[inline]
    pub fn get_double(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_double()
    }

    #[inline]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_string()
    }

    #[inline]
    pub fn get_list(&self, key: &str) -> Option<&OwnList> {
        self.get(key)?.as_list()
    }

    #[inline]
    pub fn get_compound(&self, key: &str) -> Option<&OwnCompound> {
        self.get(key)?.as_compound()
    }
}

impl<K: Into<String>, V: Into<OwnValue>> FromIterator<(K, V)> for OwnCompound {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut compound = OwnCompound::new();
        for (key, value) in iter {
            compound.insert(key, value);
        }
        compound
    }
}

impl IntoIterator for OwnCompound {
    type Item = (String, OwnValue);
    type IntoIter = std::vec::IntoIter<(String, OwnValue)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
