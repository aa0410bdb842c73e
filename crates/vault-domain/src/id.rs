use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier shared by folders and content items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

/// Issues ids derived from the wall clock in milliseconds.
///
/// Ids are strictly increasing: two calls within the same millisecond, or a
/// clock that steps backwards, still yield a value above the last one issued.
pub struct IdGenerator {
    last: u64,
    clock: Clock,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis().max(0) as u64)
    }

    pub fn with_clock(clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self {
            last: 0,
            clock: Box::new(clock),
        }
    }

    pub fn next_id(&mut self) -> EntityId {
        let now = (self.clock)();
        let value = now.max(self.last + 1);
        self.last = value;
        EntityId(value.to_string())
    }

    /// Records an id minted elsewhere so it is never issued again.
    pub fn observe(&mut self, id: &EntityId) {
        if let Ok(value) = id.as_str().parse::<u64>() {
            self.last = self.last.max(value);
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
