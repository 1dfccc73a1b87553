//! Observable events.
//!
//! Events are explicit and typed; the event name is the stable log
//! vocabulary, independent of message wording.

/// Observable events in the directory engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Seeding
    /// Seed gate entered, version marker is stale or absent
    SeedStart,
    /// Version marker current, seeding skipped
    SeedSkip,
    /// Fixture data written, marker updated
    SeedComplete,
    /// Fixture load or decode failed, store left untouched
    SeedFailed,

    // Collection store
    /// A collection snapshot was persisted
    CollectionWrite,
    /// A persisted snapshot failed to decode and degraded to empty
    CollectionCorrupt,

    // Admin gate
    /// Passcode accepted, session unlocked
    AdminUnlock,
    /// Passcode rejected
    AdminUnlockRejected,
    /// Session locked again
    AdminLock,
}

impl Event {
    /// Returns the stable event name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SeedStart => "SEED_START",
            Event::SeedSkip => "SEED_SKIP",
            Event::SeedComplete => "SEED_COMPLETE",
            Event::SeedFailed => "SEED_FAILED",
            Event::CollectionWrite => "COLLECTION_WRITE",
            Event::CollectionCorrupt => "COLLECTION_CORRUPT",
            Event::AdminUnlock => "ADMIN_UNLOCK",
            Event::AdminUnlockRejected => "ADMIN_UNLOCK_REJECTED",
            Event::AdminLock => "ADMIN_LOCK",
        }
    }

    /// Whether this event records a failure.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::SeedFailed | Event::CollectionCorrupt | Event::AdminUnlockRejected
        )
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
