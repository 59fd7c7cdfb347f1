use crate::{Error, OwnValue, Result, TagID};

/// A homogeneous NBT list.
///
/// An empty list has element tag [`TagID::End`] and adopts the tag of the
/// first value pushed into it.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnList {
    element: TagID,
    items: Vec<OwnValue>,
}

impl Default for OwnList {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl OwnList {
    #[inline]
    pub const fn new() -> Self {
        Self {
            element: TagID::End,
            items: Vec::new(),
        }
    }

    /// Creates an empty list that only accepts `element` values.
    #[inline]
    pub const fn with_element(element: TagID) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    #[inline]
    pub const fn element_tag_id(&self) -> TagID {
        self.element
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&OwnValue> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut OwnValue> {
        self.items.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, OwnValue> {
        self.items.iter()
    }

    fn accept(&mut self, tag_id: TagID) -> Result<()> {
        if self.items.is_empty() && self.element == TagID::End {
            self.element = tag_id;
            return Ok(());
        }
        if self.element != tag_id {
            return Err(Error::TagMismatch(self.element as u8, tag_id as u8));
        }
        Ok(())
    }

    /// Appends a value, failing with [`Error::TagMismatch`] when its tag
    /// differs from the list's element tag.
    pub fn push(&mut self, value: impl Into<OwnValue>) -> Result<()> {
        let value = value.into();
        self.accept(value.tag_id())?;
        self.items.push(value);
        Ok(())
    }

    /// Replaces the value at `index`, returning the previous one.
    ///
    /// Returns `Ok(None)` when `index` is out of range.
    pub fn set(&mut self, index: usize, value: impl Into<OwnValue>) -> Result<Option<OwnValue>> {
        let value = value.into();
        if index >= self.items.len() {
            return Ok(None);
        }
        if self.element != value.tag_id() {
            return Err(Error::TagMismatch(self.element as u8, value.tag_id() as u8));
        }
        Ok(Some(std::mem::replace(&mut self.items[index], value)))
    }

    pub fn pop(&mut self) -> Option<OwnValue> {
        let value = self.items.pop();
        if self.items.is_empty() {
            self.element = TagID::End;
        }
        value
    }

    /// Builds a list from values that all share one tag.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OwnValue>,
    {
        let mut list = Self::new();
        for value in values {
            list.push(value)?;
        }
        Ok(list)
    }

    pub(crate) fn from_raw(element: TagID, items: Vec<OwnValue>) -> Self {
        debug_assert!(items.iter().all(|item| item.tag_id() == element));
        Self { element, items }
    }
}

impl<'a> IntoIterator for &'a OwnList {
    type Item = &'a OwnValue;
    type IntoIter = std::slice::Iter<'a, OwnValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for OwnList {
    type Item = OwnValue;
    type IntoIter = std::vec::IntoIter<OwnValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
