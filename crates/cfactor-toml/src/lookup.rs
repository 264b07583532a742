//! Read fields of a populated record by configuration key.
//!
//! Top-level fields are checked first, then nested records depth-first, so
//! `author.firstName` finds the first name inside an `author` record.

use crate::record::{FieldRef, Record};
use crate::types::{ConfigValue, Value};

pub fn value_by_key(record: &dyn Record, key: &str) -> Option<Value> {
    let fields = record.fields();
    if let Some(field) = fields.iter().find(|f| !f.is_nested() && f.key == key) {
        return match record.get(field.name)? {
            FieldRef::Value(value) => Some(value),
            FieldRef::Nested(_) => None,
        };
    }
    fields
        .iter()
        .filter(|f| f.is_nested())
        .filter_map(|f| match record.get(f.name)? {
            FieldRef::Nested(inner) => Some(inner),
            FieldRef::Value(_) => None,
        })
        .find_map(|inner| value_by_key(inner, key))
}

/// Like [`value_by_key`], converted to `T`. `None` if missing or of another type.
pub fn typed_by_key<T: ConfigValue>(record: &dyn Record, key: &str) -> Option<T> {
    value_by_key(record, key).and_then(T::from_value)
}

pub fn is_string_value_matched(record: &dyn Record, key: &str, expected: &str) -> bool {
    typed_by_key::<String>(record, key).is_some_and(|value| value == expected)
}
