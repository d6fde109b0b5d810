//! Deterministic hash generators for tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::hash_generator::RotationHashGenerator;

/// Yields `<prefix>-0001`, `<prefix>-0002`, ...
pub struct SequentialHashGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialHashGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// How many hashes have been handed out
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Default for SequentialHashGenerator {
    fn default() -> Self {
        Self::new("hash")
    }
}

impl RotationHashGenerator for SequentialHashGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{:04}", self.prefix, n)
    }
}

/// Yields the scripted values in order, then falls back to a sequence
pub struct ScriptedHashGenerator {
    script: Mutex<VecDeque<String>>,
    fallback: SequentialHashGenerator,
}

impl ScriptedHashGenerator {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(values.into_iter().map(Into::into).collect()),
            fallback: SequentialHashGenerator::new("scripted"),
        }
    }
}

impl RotationHashGenerator for ScriptedHashGenerator {
    fn generate(&self) -> String {
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.generate())
    }
}
