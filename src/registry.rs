//! Registry of record shapes by sentence type, for dynamic decoding.

use std::{
    any::Any,
    collections::HashMap,
    fmt::Debug,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use thiserror::Error;

use crate::{
    decode::{Error, Sentence, decode_fields, verify},
    envelope::Envelope,
    schema::{Schema, SchemaError},
};

/// A decoded record of any registered shape.
///
/// Implemented for every [`Sentence`] that is `Debug`, `Send` and `Sync`.
pub trait Record: Sentence + Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Sentence + Any + Debug + Send + Sync> Record for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn Record {
    /// Borrow the record as a concrete shape, if it is one.
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Mutably borrow the record as a concrete shape, if it is one.
    pub fn downcast_mut<T: Record>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

/// A sentence rejected by [`Registry::parse`].
///
/// Once a record shape has been found, the record is returned alongside the
/// error holding every field decoded before the failure. After a checksum
/// mismatch, that is every field.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Rejection {
    pub error: Error,
    pub record: Option<Box<dyn Record>>,
}

impl From<Error> for Rejection {
    fn from(error: Error) -> Self {
        Self {
            error,
            record: None,
        }
    }
}

#[derive(Clone, Copy)]
struct Entry {
    schema: &'static Schema,
    make: fn() -> Box<dyn Record>,
}

fn make<T: Record + Default>() -> Box<dyn Record> {
    Box::<T>::default()
}

/// A table of record shapes, keyed by literal sentence type.
///
/// The registry may be shared between threads: decoding takes a read lock,
/// and changes to a single entry are atomic.
///
/// # Example
///
/// ```
/// let registry = Registry::default();
/// let record = registry.parse("$GPHDT,1,T*2A")?;
/// let hdt = record.downcast_ref::<Hdt>().unwrap();
/// ```
pub struct Registry {
    entries: RwLock<HashMap<String, Entry>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry holding the built-in sentences.
    ///
    /// _Requires Cargo feature `derive`._
    #[cfg(feature = "derive")]
    pub fn builtin() -> Self {
        let registry = Self::new();
        crate::sentences::register_builtin(&registry)
            .expect("built-in sentence schemas are well formed");
        registry
    }

    /// Register a record shape for a sentence type, replacing any existing
    /// registration.
    ///
    /// The registry key is matched exactly against the type token of a
    /// sentence; the shape's own type matcher is checked afterward.
    pub fn register<T: Record + Default>(&self, kind: impl Into<String>) -> Result<(), SchemaError> {
        let schema = T::default().schema()?;
        let kind = kind.into();

        tracing::debug!(kind = %kind, shape = std::any::type_name::<T>(), "register");

        self.write().insert(
            kind,
            Entry {
                schema,
                make: make::<T>,
            },
        );

        Ok(())
    }

    /// Remove the registration for a sentence type, returning whether one
    /// existed.
    pub fn deregister(&self, kind: &str) -> bool {
        tracing::debug!(kind, "deregister");
        self.write().remove(kind).is_some()
    }

    /// The schema registered for a sentence type.
    pub fn lookup(&self, kind: &str) -> Result<&'static Schema, Error> {
        self.entry(kind).map(|e| e.schema)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.read().contains_key(kind)
    }

    /// Every registered sentence type, in lexical order.
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<_> = self.read().keys().cloned().collect();
        kinds.sort();
        kinds
    }

    /// Decode a sentence into a new record of the shape registered for its
    /// type.
    pub fn parse(&self, sentence: &str) -> Result<Box<dyn Record>, Rejection> {
        let envelope = Envelope::parse(sentence).map_err(Error::from)?;
        let entry = self.entry(envelope.kind())?;

        tracing::trace!(kind = envelope.kind(), "parse");

        let mut record = (entry.make)();
        let decoded = decode_fields(&mut *record, entry.schema, &envelope);

        match verify(&envelope).and(decoded) {
            Ok(()) => Ok(record),
            Err(error) => Err(Rejection {
                error,
                record: Some(record),
            }),
        }
    }

    fn entry(&self, kind: &str) -> Result<Entry, Error> {
        self.read()
            .get(kind)
            .copied()
            .ok_or_else(|| Error::NotRegistered(kind.to_string()))
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(feature = "derive")]
impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(not(feature = "derive"))]
impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
