use std::{borrow::Cow, fmt, str::FromStr};

use crate::{Error, Result};

/// A `namespace:key` identifier.
///
/// Namespaces may contain `[a-z0-9._-]`, keys may additionally contain `/`.
/// Built-in identifiers use [`NamespacedKey::minecraft`], which is `const` and
/// skips validation.
///
/// # Example
///
/// ```
/// use na_item::NamespacedKey;
///
/// let key = NamespacedKey::new("myplugin", "level").unwrap();
/// assert_eq!(key.to_string(), "myplugin:level");
///
/// let parsed: NamespacedKey = "stone".parse().unwrap();
/// assert_eq!(parsed, NamespacedKey::minecraft("stone"));
///
/// assert!(NamespacedKey::new("My Plugin", "level").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedKey {
    namespace: Cow<'static, str>,
    key: Cow<'static, str>,
}

pub const MINECRAFT: &str = "minecraft";

fn valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-'))
}

fn valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-' | b'/'))
}

impl NamespacedKey {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let key = key.into();
        if !valid_namespace(&namespace) || !valid_key(&key) {
            return Err(Error::InvalidKey(format!("{namespace}:{key}")));
        }
        Ok(Self {
            namespace: Cow::Owned(namespace),
            key: Cow::Owned(key),
        })
    }

    /// A key in the `minecraft` namespace.
    ///
    /// `key` is not validated; this is meant for compile-time constants.
    #[inline]
    pub const fn minecraft(key: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(MINECRAFT),
            key: Cow::Borrowed(key),
        }
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn is_minecraft(&self) -> bool {
        self.namespace == MINECRAFT
    }
}

impl FromStr for NamespacedKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((namespace, key)) => Self::new(namespace, key),
            None => Self::new(MINECRAFT, s),
        }
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl fmt::Debug for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamespacedKey({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NamespacedKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NamespacedKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
