use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    collections::HashMap,
    hash::Hash,
};

use crate::{
    constraint::size_constraint::SizeConstraint,
    environment::values::{Environment, EnvironmentSnapshot},
    foundation::core::Size,
    foundation::math::fingerprint,
};

/// Identity of a measurement for caching purposes.
///
/// `kind` names what is being measured (usually the element type) and `input`
/// is a token for every input the measurement depends on. The cache trusts the
/// key completely: two keys with the same kind and input are assumed to measure
/// identically.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MeasurementCachingKey {
    kind: Cow<'static, str>,
    input: u64,
}

impl MeasurementCachingKey {
    /// Key for `kind` measured with `input`.
    pub fn new(kind: impl Into<Cow<'static, str>>, input: impl Hash) -> Self {
        Self {
            kind: kind.into(),
            input: fingerprint(&input),
        }
    }

    /// The kind identifier.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The reduced input token.
    pub fn input_token(&self) -> u64 {
        self.input
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Hit/miss counters of one [`MeasurementCache`].
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the measurement.
    pub misses: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct EntryKey {
    key: MeasurementCachingKey,
    constraint: SizeConstraint,
    environment: EnvironmentSnapshot,
}

/// Memoized measurements keyed by (kind, input token, constraint, environment).
///
/// Reached through [`Environment::measurement_cache`]; entries never expire and
/// live as long as the last environment sharing the cache.
/// Uses interior mutability and is not `Sync`.
#[derive(Debug, Default)]
pub struct MeasurementCache {
    entries: RefCell<HashMap<EntryKey, Size>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl MeasurementCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored size for `(key, constraint, environment)`, running
    /// `compute` and storing its result on the first request.
    pub fn cached_measure(
        &self,
        key: &MeasurementCachingKey,
        constraint: SizeConstraint,
        environment: &Environment,
        compute: impl FnOnce() -> Size,
    ) -> Size {
        let entry = EntryKey {
            key: key.clone(),
            constraint,
            environment: environment.snapshot(),
        };
        self.lookup(entry, compute)
    }

    fn lookup(&self, entry: EntryKey, compute: impl FnOnce() -> Size) -> Size {
        let constraint = entry.constraint;
        if let Some(size) = self.entries.borrow().get(&entry).copied() {
            self.hits.set(self.hits.get() + 1);
            tracing::trace!(kind = entry.key.kind(), ?constraint, "measurement cache hit");
            return size;
        }

        self.misses.set(self.misses.get() + 1);
        tracing::trace!(kind = entry.key.kind(), ?constraint, "measurement cache miss");
        // `compute` may recurse into other content; no borrow is held across it.
        let size = compute();
        self.entries.borrow_mut().insert(entry, size);
        size
    }

    /// Number of stored measurements.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop all stored measurements. Counters are kept.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Hit/miss counters since creation.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/cache.rs"]
mod tests;
