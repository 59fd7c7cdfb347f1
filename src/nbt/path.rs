use std::{fmt, str::FromStr};

use crate::{Error, OwnCompound, OwnValue, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// A dotted address into a compound, such as `display.Lore[0]` or
/// `custom.level`.
///
/// Every segment starts with a compound key, optionally followed by one or
/// more `[index]` list subscripts.
///
/// # Example
///
/// ```
/// use na_item::{OwnCompound, TagPath};
///
/// let mut root = OwnCompound::new();
/// root.set_path("custom.level", 7i32).unwrap();
/// assert_eq!(root.get_path("custom.level").and_then(|v| v.as_int()), Some(7));
///
/// let path: TagPath = "a.b[2]".parse().unwrap();
/// assert_eq!(path.segments().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl TagPath {
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidPath {
            path: path.to_owned(),
            reason,
        };

        if path.is_empty() {
            return Err(invalid("empty path"));
        }

        let mut segments = Vec::new();
        for part in path.split('.') {
            if part.is_empty() {
                return Err(invalid("empty segment"));
            }
            let (name, mut rest) = match part.find('[') {
                Some(at) => part.split_at(at),
                None => (part, ""),
            };
            if name.is_empty() {
                return Err(invalid("segment has no key"));
            }
            if name.contains(']') {
                return Err(invalid("unbalanced bracket"));
            }
            segments.push(PathSegment::Key(name.to_owned()));

            while !rest.is_empty() {
                let Some(inner) = rest.strip_prefix('[') else {
                    return Err(invalid("unexpected text after subscript"));
                };
                let Some(close) = inner.find(']') else {
                    return Err(invalid("unbalanced bracket"));
                };
                let index = inner[..close]
                    .parse::<usize>()
                    .map_err(|_| invalid("list index is not a number"))?;
                segments.push(PathSegment::Index(index));
                rest = &inner[close + 1..];
            }
        }

        Ok(Self {
            raw: path.to_owned(),
            segments,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Writes `value` at this path inside `root`, returning the value it
    /// replaced.
    ///
    /// Missing compounds along the way are created. Lists are never created
    /// and list subscripts must address an existing element.
    pub fn set(&self, root: &mut OwnCompound, value: OwnValue) -> Result<Option<OwnValue>> {
        let mut node = OwnValue::Compound(std::mem::take(root));
        let result = self.descend(&mut node, 0, value);
        if let OwnValue::Compound(compound) = node {
            *root = compound;
        }
        result
    }

    fn descend(&self, node: &mut OwnValue, pos: usize, value: OwnValue) -> Result<Option<OwnValue>> {
        let last = pos + 1 == self.segments.len();
        match (&self.segments[pos], node) {
            (PathSegment::Key(name), OwnValue::Compound(compound)) => {
                if last {
                    return Ok(compound.insert(name.as_str(), value));
                }
                if let Some(child) = compound.get_mut(name) {
                    return self.descend(child, pos + 1, value);
                }
                if let PathSegment::Index(_) = self.segments[pos + 1] {
                    return Err(Error::InvalidPath {
                        path: self.raw.clone(),
                        reason: "list subscript on a missing list",
                    });
                }
                let mut child = OwnValue::Compound(OwnCompound::new());
                let old = self.descend(&mut child, pos + 1, value)?;
                compound.insert(name.as_str(), child);
                Ok(old)
            }
            (PathSegment::Index(index), OwnValue::List(list)) => {
                if *index >= list.len() {
                    return Err(Error::InvalidPath {
                        path: self.raw.clone(),
                        reason: "list index out of range",
                    });
                }
                if last {
                    return list.set(*index, value);
                }
                match list.get_mut(*index) {
                    Some(child) => self.descend(child, pos + 1, value),
                    None => Ok(None),
                }
            }
            (segment, node) => Err(Error::PathConflict {
                path: self.raw.clone(),
                segment: segment.to_string(),
                found: node.tag_id(),
            }),
        }
    }

    /// Reads the value at this path, if every segment resolves.
    pub fn get<'a>(&self, root: &'a OwnCompound) -> Option<&'a OwnValue> {
        let mut segments = self.segments.iter();
        let mut node = match segments.next()? {
            PathSegment::Key(name) => root.get(name)?,
            PathSegment::Index(_) => return None,
        };
        for segment in segments {
            node = match (segment, node) {
                (PathSegment::Key(name), OwnValue::Compound(compound)) => compound.get(name)?,
                (PathSegment::Index(index), OwnValue::List(list)) => list.get(*index)?,
                _ => return None,
            };
        }
        Some(node)
    }
}

impl FromStr for TagPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl OwnCompound {
    /// Parses `path` and writes `value` there. See [`TagPath::set`].
    pub fn set_path(&mut self, path: &str, value: impl Into<OwnValue>) -> Result<Option<OwnValue>> {
        TagPath::parse(path)?.set(self, value.into())
    }

    /// Parses `path` and reads the value there. Malformed paths read as absent.
    pub fn get_path(&self, path: &str) -> Option<&OwnValue> {
        TagPath::parse(path).ok()?.get(self)
    }
}
