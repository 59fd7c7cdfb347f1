use crate::OwnValue;

/// Raw tag overrides keyed by dotted path, kept in insertion order.
///
/// Paths are not validated until they are applied.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RawTagOverrides {
    entries: Vec<(String, OwnValue)>,
}

impl RawTagOverrides {
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

    /// Stages `value` at `path`. A path staged before keeps its position and
    /// gets the new value.
    pub fn set(&mut self, path: impl Into<String>, value: impl Into<OwnValue>) -> Option<OwnValue> {
        let path = path.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(staged, _)| *staged == path) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((path, value));
                None
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&OwnValue> {
        self.entries
            .iter()
            .find(|(staged, _)| staged == path)
            .map(|(_, value)| value)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OwnValue)> {
        self.entries.iter().map(|(path, value)| (path.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<OwnValue>> Extend<(K, V)> for RawTagOverrides {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.set(path, value);
        }
    }
}

impl<K: Into<String>, V: Into<OwnValue>> FromIterator<(K, V)> for RawTagOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        overrides.extend(iter);
        overrides
    }
}
