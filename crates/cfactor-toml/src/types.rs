//! Field metadata model shared by the decoder and encoder.
//!
//! Every record type declares a static table of [`FieldDescriptor`]s, one per
//! field in declaration order. A descriptor binds the Rust field name to its
//! configuration key and records the field's [`FieldType`]. Values travel
//! between text and record fields as a dynamically-typed [`Value`].

use std::any::{type_name, TypeId};
use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::record::Record;

/// Timestamp representation used for `timestamp` fields.
pub type Timestamp = DateTime<FixedOffset>;

/// The closed set of scalar types a field (or array element) can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Int,
    Float32,
    Float64,
    Bool,
    Timestamp,
}

impl ScalarType {
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int => "int64",
            ScalarType::Float32 => "float32",
            ScalarType::Float64 => "float64",
            ScalarType::Bool => "bool",
            ScalarType::Timestamp => "timestamp",
        }
    }

    /// Strings and timestamps are written between double quotes.
    pub fn is_quoted(self) -> bool {
        matches!(self, ScalarType::String | ScalarType::Timestamp)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle on a nested record type: identity, field table and a constructor for
/// provisional instances.
#[derive(Clone, Copy)]
pub struct RecordType {
    name: fn() -> &'static str,
    id: fn() -> TypeId,
    fields: fn() -> &'static [FieldDescriptor],
    create: fn() -> Box<dyn Record>,
}

fn fields_of<R: Record + Default>() -> &'static [FieldDescriptor] {
    R::default().fields()
}

fn create<R: Record + Default>() -> Box<dyn Record> {
    Box::new(R::default())
}

impl RecordType {
    pub const fn of<R: Record + Default>() -> Self {
        RecordType {
            name: type_name::<R>,
            id: TypeId::of::<R>,
            fields: fields_of::<R>,
            create: create::<R>,
        }
    }

    /// Fully-qualified Rust type name.
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        (self.fields)()
    }

    /// A fresh, default-initialised instance of the record type.
    pub fn create(&self) -> Box<dyn Record> {
        (self.create)()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordType").field(&self.name()).finish()
    }
}

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    Scalar(ScalarType),
    /// A single-level array literal of the given element type.
    Array(ScalarType),
    /// A nested record populated through the attach hook.
    Nested(RecordType),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(ty) => write!(f, "{ty}"),
            FieldType::Array(ty) => write!(f, "[]{ty}"),
            FieldType::Nested(ty) => write!(f, "record {}", ty.name()),
        }
    }
}

/// Static metadata for one record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Rust field identifier, passed to [`Record::get`] / [`Record::set`].
    pub name: &'static str,
    /// Configuration key (the "tag"), e.g. `author.firstName`.
    pub key: &'static str,
    pub ty: FieldType,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, key: &'static str, ty: FieldType) -> Self {
        FieldDescriptor { name, key, ty }
    }

    pub const fn scalar(name: &'static str, key: &'static str, ty: ScalarType) -> Self {
        Self::new(name, key, FieldType::Scalar(ty))
    }

    pub const fn array(name: &'static str, key: &'static str, element: ScalarType) -> Self {
        Self::new(name, key, FieldType::Array(element))
    }

    pub const fn nested(name: &'static str, key: &'static str, ty: RecordType) -> Self {
        Self::new(name, key, FieldType::Nested(ty))
    }

    pub fn is_nested(&self) -> bool {
        matches!(self.ty, FieldType::Nested(_))
    }

    pub fn nested_type(&self) -> Option<RecordType> {
        match self.ty {
            FieldType::Nested(ty) => Some(ty),
            _ => None,
        }
    }
}

/// A typed field value, as read from or written to a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Timestamp(Timestamp),
    Array(Vec<Value>),
}

impl Value {
    /// Scalar type of this value; `None` for arrays.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            Value::String(_) => Some(ScalarType::String),
            Value::Int(_) => Some(ScalarType::Int),
            Value::Float32(_) => Some(ScalarType::Float32),
            Value::Float64(_) => Some(ScalarType::Float64),
            Value::Bool(_) => Some(ScalarType::Bool),
            Value::Timestamp(_) => Some(ScalarType::Timestamp),
            Value::Array(_) => None,
        }
    }
}

/// Conversion between Rust field types and [`Value`].
///
/// Implemented for every Rust type a record field may use, so hand-written
/// [`Record`] impls can stay one line per field.
pub trait ConfigValue: Sized {
    const FIELD_TYPE: FieldType;

    fn to_value(&self) -> Value;

    /// `None` when the value has the wrong shape (or is out of range).
    fn from_value(value: Value) -> Option<Self>;
}

/// A [`ConfigValue`] that may also appear as an array element.
pub trait ScalarValue: ConfigValue {
    const SCALAR_TYPE: ScalarType;
}

macro_rules! scalar_value {
    ($ty:ty, $scalar:ident, $variant:ident) => {
        impl ConfigValue for $ty {
            const FIELD_TYPE: FieldType = FieldType::Scalar(ScalarType::$scalar);

            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl ScalarValue for $ty {
            const SCALAR_TYPE: ScalarType = ScalarType::$scalar;
        }
    };
}

scalar_value!(String, String, String);
scalar_value!(i64, Int, Int);
scalar_value!(f32, Float32, Float32);
scalar_value!(f64, Float64, Float64);
scalar_value!(bool, Bool, Bool);
scalar_value!(Timestamp, Timestamp, Timestamp);

impl ConfigValue for i32 {
    const FIELD_TYPE: FieldType = FieldType::Scalar(ScalarType::Int);

    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(v) => i32::try_from(v).ok(),
            _ => None,
        }
    }
}

impl ScalarValue for i32 {
    const SCALAR_TYPE: ScalarType = ScalarType::Int;
}

impl<T: ScalarValue> ConfigValue for Vec<T> {
    const FIELD_TYPE: FieldType = FieldType::Array(T::SCALAR_TYPE);

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ConfigValue::to_value).collect())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}
