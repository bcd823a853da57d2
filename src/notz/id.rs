use uuid::Uuid;

/// Source of fresh note identifiers.
///
/// Implementations must hand out strings that never repeat within a
/// session; the store treats them as opaque and never derives meaning
/// from them.
pub trait IdGenerator {
    fn new_id(&mut self) -> String;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn new_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::IdGenerator;

    /// Deterministic generator for tests: "n-1", "n-2", ...
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: u64,
    }

    impl SequentialIds {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl IdGenerator for SequentialIds {
        fn new_id(&mut self) -> String {
            self.next += 1;
            format!("n-{}", self.next)
        }
    }
}
