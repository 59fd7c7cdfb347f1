use uuid::Uuid;

/// A player identity that need not be online, as used by skull owners.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfflinePlayer {
    uuid: Uuid,
    name: Option<String>,
}

impl OfflinePlayer {
    #[inline]
    pub const fn new(uuid: Uuid) -> Self {
        Self { uuid, name: None }
    }

    pub fn with_name(uuid: Uuid, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: Some(name.into()),
        }
    }

    #[inline]
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
