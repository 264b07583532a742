//! The record contract and the nested-record resolution map.
//!
//! A [`Record`] exposes its static field table plus by-name get/set access.
//! Records that contain nested records also implement
//! [`Record::attach_nested`], which the decoder calls once per decode to hand
//! over the nested instances it populated.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::error::{ConfigError, Result};
use crate::types::{ConfigValue, FieldDescriptor, RecordType, Value};

/// Read access to one field, as returned by [`Record::get`].
pub enum FieldRef<'a> {
    Value(Value),
    Nested(&'a dyn Record),
}

impl FieldRef<'_> {
    /// Shorthand for `get` implementations of plain fields.
    pub fn of<T: ConfigValue>(field: &T) -> Self {
        FieldRef::Value(field.to_value())
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldRef::Nested(record) => f.debug_tuple("Nested").field(&record.record_name()).finish(),
        }
    }
}

/// A statically-described configuration record.
///
/// ```
/// use cfactor_toml::{FieldDescriptor, FieldRef, Record, Result, ScalarType, Value};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: i64,
/// }
///
/// static SERVER_FIELDS: &[FieldDescriptor] = &[
///     FieldDescriptor::scalar("host", "host", ScalarType::String),
///     FieldDescriptor::scalar("port", "port", ScalarType::Int),
/// ];
///
/// impl Record for Server {
///     fn fields(&self) -> &'static [FieldDescriptor] {
///         SERVER_FIELDS
///     }
///
///     fn get(&self, name: &str) -> Option<FieldRef<'_>> {
///         match name {
///             "host" => Some(FieldRef::of(&self.host)),
///             "port" => Some(FieldRef::of(&self.port)),
///             _ => None,
///         }
///     }
///
///     fn set(&mut self, name: &str, value: Value) -> Result<()> {
///         match name {
///             "host" => cfactor_toml::set_field(&mut self.host, name, value),
///             "port" => cfactor_toml::set_field(&mut self.port, name, value),
///             _ => Err(cfactor_toml::unknown_field(self, name)),
///         }
///     }
/// }
///
/// let server: Server = cfactor_toml::from_str("host = \"localhost\"\nport = 8080\n").unwrap();
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 8080);
/// ```
pub trait Record: Any {
    /// Field table in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Current value of the field called `name` (the Rust identifier, not the key).
    fn get(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Overwrite the field called `name`.
    fn set(&mut self, name: &str, value: Value) -> Result<()>;

    /// Lifecycle hook: move the nested records populated during a decode into
    /// their fields.
    ///
    /// Implementations should only claim their direct children, using
    /// [`NestedRecords::resolve`], which attaches grandchildren first. The
    /// default implementation declares that the record has no hook.
    fn attach_nested(&mut self, nested: &mut NestedRecords) -> Result<()> {
        Err(ConfigError::MissingHook {
            record: type_name::<Self>(),
            pending: nested.pending().collect(),
        })
    }

    fn record_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Assign `value` to a typed field slot, reporting a shape mismatch against `field`.
pub fn set_field<T: ConfigValue>(slot: &mut T, field: &str, value: Value) -> Result<()> {
    *slot = T::from_value(value).ok_or_else(|| ConfigError::TypeMismatch {
        field: field.to_string(),
        expected: T::FIELD_TYPE,
    })?;
    Ok(())
}

/// Error for a `get`/`set` call naming a field the record does not declare.
pub fn unknown_field<R: Record + ?Sized>(record: &R, field: &str) -> ConfigError {
    ConfigError::UnknownField {
        record: record.record_name(),
        field: field.to_string(),
    }
}

struct Entry {
    ty: RecordType,
    record: Box<dyn Record>,
}

/// Call-scoped map from nested record type to the provisional instance being
/// populated. Entries keep insertion order.
#[derive(Default)]
pub struct NestedRecords {
    entries: Vec<Entry>,
}

impl NestedRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains<T: Record>(&self) -> bool {
        self.position(TypeId::of::<T>()).is_some()
    }

    pub fn contains_type(&self, ty: &RecordType) -> bool {
        self.position(ty.id()).is_some()
    }

    /// Type names of the records still waiting to be attached.
    pub fn pending(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.ty.name())
    }

    pub(crate) fn get_or_create(&mut self, ty: RecordType) -> &mut dyn Record {
        let idx = match self.position(ty.id()) {
            Some(idx) => idx,
            None => {
                self.entries.push(Entry {
                    ty,
                    record: ty.create(),
                });
                self.entries.len() - 1
            }
        };
        self.entries[idx].record.as_mut()
    }

    /// Remove the `T` entry without running its own hook.
    pub fn take<T: Record>(&mut self) -> Option<T> {
        let idx = self.position(TypeId::of::<T>())?;
        let any: Box<dyn Any> = self.entries.remove(idx).record;
        any.downcast::<T>().ok().map(|record| *record)
    }

    /// Remove the `T` entry and attach its own pending children to it.
    pub fn resolve<T: Record>(&mut self) -> Result<Option<T>> {
        let Some(mut record) = self.take::<T>() else {
            return Ok(None);
        };
        let has_pending_children = record
            .fields()
            .iter()
            .filter_map(FieldDescriptor::nested_type)
            .any(|child| self.contains_type(&child));
        if has_pending_children {
            record.attach_nested(self)?;
        }
        Ok(Some(record))
    }

    fn position(&self, id: TypeId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.ty.id() == id)
    }
}

impl fmt::Debug for NestedRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pending()).finish()
    }
}
