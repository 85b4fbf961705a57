use std::{
    collections::BTreeMap,
    hash::{Hash, Hasher},
    rc::Rc,
    sync::Arc,
};

use crate::{
    content::cache::MeasurementCache,
    foundation::error::{TrellisError, TrellisResult},
    foundation::math::Fnv1a64,
};

/// Typed handle to one value stored in an [`Environment`].
///
/// The key's `NAME` is the storage slot; two keys sharing a name alias the same value.
pub trait EnvironmentKey: 'static {
    /// Storage slot name.
    const NAME: &'static str;
    /// Stored value type.
    type Value: serde::Serialize + serde::de::DeserializeOwned;

    /// Value returned when the slot is empty.
    fn default_value() -> Self::Value;
}

#[derive(Clone, Debug)]
/// Read-only contextual values threaded through measurement.
///
/// Cloning is cheap; mutation copies the underlying map only when it is shared.
/// Values are kept as JSON so that two environments compare structurally and
/// produce a stable [`fingerprint`](Environment::fingerprint) for measurement caching.
///
/// Every environment also carries a handle to a [`MeasurementCache`]. Clones and
/// environments derived with [`set`](Environment::set) or [`with`](Environment::with)
/// share it, so cached leaves hit across content values built by the same
/// traversal. Entries stay separated by the environment values they were measured in.
pub struct Environment {
    values: Arc<BTreeMap<String, serde_json::Value>>,
    fingerprint: u64,
    measurement_cache: Rc<MeasurementCache>,
}

impl Environment {
    /// Environment with no values set and a fresh measurement cache.
    pub fn empty() -> Self {
        Self::from_values(BTreeMap::new())
    }

    /// Environment holding raw JSON values, e.g. from a document.
    pub fn from_values(values: BTreeMap<String, serde_json::Value>) -> Self {
        let mut env = Self {
            values: Arc::new(values),
            fingerprint: 0,
            measurement_cache: Rc::new(MeasurementCache::new()),
        };
        env.refresh_fingerprint();
        env
    }

    /// Cache used by leaves built with a caching key.
    pub fn measurement_cache(&self) -> &MeasurementCache {
        &self.measurement_cache
    }

    /// Copy of this environment with an empty measurement cache of its own.
    pub fn with_fresh_measurement_cache(&self) -> Self {
        Self {
            measurement_cache: Rc::new(MeasurementCache::new()),
            ..self.clone()
        }
    }

    pub(crate) fn snapshot(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            values: Arc::clone(&self.values),
            fingerprint: self.fingerprint,
        }
    }

    /// Number of values set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no values are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stable 64-bit digest of all stored values; equal environments share it.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Read `K`, falling back to its default when unset or malformed.
    pub fn get<K: EnvironmentKey>(&self) -> K::Value {
        match self.try_get::<K>() {
            Ok(Some(v)) => v,
            Ok(None) => K::default_value(),
            Err(err) => {
                tracing::warn!(key = K::NAME, %err, "environment value ignored");
                K::default_value()
            }
        }
    }

    /// Read `K` if it is set; fails when the stored value has the wrong shape.
    pub fn try_get<K: EnvironmentKey>(&self) -> TrellisResult<Option<K::Value>> {
        let Some(raw) = self.values.get(K::NAME) else {
            return Ok(None);
        };
        serde_json::from_value(raw.clone())
            .map(Some)
            .map_err(|e| TrellisError::environment(format!("key '{}': {e}", K::NAME)))
    }

    /// Store `value` under `K`.
    pub fn set<K: EnvironmentKey>(&mut self, value: K::Value) -> TrellisResult<()> {
        let raw = serde_json::to_value(value)
            .map_err(|e| TrellisError::environment(format!("key '{}': {e}", K::NAME)))?;
        Arc::make_mut(&mut self.values).insert(K::NAME.to_string(), raw);
        self.refresh_fingerprint();
        Ok(())
    }

    /// Copy of this environment with `K` set to `value`.
    pub fn with<K: EnvironmentKey>(&self, value: K::Value) -> TrellisResult<Self> {
        let mut out = self.clone();
        out.set::<K>(value)?;
        Ok(out)
    }

    /// Clear `K`, returning whether it was set.
    pub fn remove<K: EnvironmentKey>(&mut self) -> bool {
        if !self.values.contains_key(K::NAME) {
            return false;
        }
        Arc::make_mut(&mut self.values).remove(K::NAME);
        self.refresh_fingerprint();
        true
    }

    fn refresh_fingerprint(&mut self) {
        let mut h = Fnv1a64::new_default();
        h.write_u64(self.values.len() as u64);
        for (name, value) in self.values.iter() {
            write_str(&mut h, name);
            write_json(&mut h, value);
        }
        self.fingerprint = h.finish();
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.values, &other.values) || self.values == other.values
    }
}

/// Values of an environment as stored in measurement cache keys.
///
/// Hashes by fingerprint and compares the values themselves.
#[derive(Clone, Debug)]
pub(crate) struct EnvironmentSnapshot {
    pub(crate) values: Arc<BTreeMap<String, serde_json::Value>>,
    pub(crate) fingerprint: u64,
}

impl PartialEq for EnvironmentSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
            && (Arc::ptr_eq(&self.values, &other.values) || self.values == other.values)
    }
}

impl Eq for EnvironmentSnapshot {}

impl Hash for EnvironmentSnapshot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state);
    }
}

fn write_str(h: &mut Fnv1a64, s: &str) {
    h.write_u64(s.len() as u64);
    h.write_bytes(s.as_bytes());
}

fn write_json(h: &mut Fnv1a64, value: &serde_json::Value) {
    use serde_json::Value;

    match value {
        Value::Null => h.write_u8(0),
        Value::Bool(b) => {
            h.write_u8(1);
            h.write_u8(u8::from(*b));
        }
        Value::Number(n) => {
            h.write_u8(2);
            write_str(h, &n.to_string());
        }
        Value::String(s) => {
            h.write_u8(3);
            write_str(h, s);
        }
        Value::Array(items) => {
            h.write_u8(4);
            h.write_u64(items.len() as u64);
            for item in items {
                write_json(h, item);
            }
        }
        Value::Object(map) => {
            h.write_u8(5);
            h.write_u64(map.len() as u64);
            for (k, v) in map {
                write_str(h, k);
                write_json(h, v);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/environment/values.rs"]
mod tests;
