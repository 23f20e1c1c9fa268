//! Injectable id generation for sections and nodes.

/// Source of opaque, unique identifiers. Owned by one forest store.
pub trait IIdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs. The production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IIdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix><n>` ids (`wy1`, `wy2`, ...), for tests and replays.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("wy")
    }
}

impl IIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}{}", self.prefix, self.counter)
    }
}
