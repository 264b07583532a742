//! Encoder: populated record → config lines.
//!
//! Fields are walked in declaration order and written as `key = value`, one
//! line per key. Nested records are flattened in place: their lines appear at
//! the position of the parent field, under the nested fields' own (dotted)
//! keys. Empty strings, empty arrays and epoch timestamps are left out;
//! numbers and bools are always written.
//!
//! # Example
//! ```
//! use cfactor_toml::{FieldDescriptor, FieldRef, Record, Result, ScalarType, Value};
//!
//! #[derive(Default)]
//! struct Limits {
//!     retries: i64,
//!     tags: Vec<String>,
//! }
//!
//! static LIMITS_FIELDS: &[FieldDescriptor] = &[
//!     FieldDescriptor::scalar("retries", "retries", ScalarType::Int),
//!     FieldDescriptor::array("tags", "tags", ScalarType::String),
//! ];
//!
//! impl Record for Limits {
//!     fn fields(&self) -> &'static [FieldDescriptor] {
//!         LIMITS_FIELDS
//!     }
//!     fn get(&self, name: &str) -> Option<FieldRef<'_>> {
//!         match name {
//!             "retries" => Some(FieldRef::of(&self.retries)),
//!             "tags" => Some(FieldRef::of(&self.tags)),
//!             _ => None,
//!         }
//!     }
//!     fn set(&mut self, name: &str, value: Value) -> Result<()> {
//!         match name {
//!             "retries" => cfactor_toml::set_field(&mut self.retries, name, value),
//!             "tags" => cfactor_toml::set_field(&mut self.tags, name, value),
//!             _ => Err(cfactor_toml::unknown_field(self, name)),
//!         }
//!     }
//! }
//!
//! let limits = Limits { retries: 0, tags: vec!["a".into(), "b".into()] };
//! let text = cfactor_toml::to_string(&limits).unwrap();
//! assert_eq!(text, "retries = 0\ntags = [\"a\",\"b\"]\n");
//! ```

use tracing::{debug, trace};

use crate::convert::{format_field, is_empty_or_default};
use crate::error::{ConfigError, Result};
use crate::options::EncodeOptions;
use crate::record::{FieldRef, Record};

/// Encode a record into config lines with default options.
pub fn encode(record: &dyn Record) -> Result<Vec<String>> {
    encode_with(record, &EncodeOptions::default())
}

/// Encode a record into config lines.
///
/// Any field that cannot be rendered fails the whole call; no partial output
/// is returned.
pub fn encode_with(record: &dyn Record, options: &EncodeOptions) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    encode_fields(record, options, &mut lines)?;
    debug!(lines = lines.len(), record = record.record_name(), "encoded config");
    Ok(lines)
}

/// Encode a record into config text, one `\n`-terminated line per key.
pub fn to_string(record: &dyn Record) -> Result<String> {
    to_string_with(record, &EncodeOptions::default())
}

pub fn to_string_with(record: &dyn Record, options: &EncodeOptions) -> Result<String> {
    let lines = encode_with(record, options)?;
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

fn encode_fields(record: &dyn Record, options: &EncodeOptions, out: &mut Vec<String>) -> Result<()> {
    for field in record.fields() {
        let value = record.get(field.name).ok_or_else(|| {
            ConfigError::encode(
                field.key,
                format!("{} does not expose field `{}`", record.record_name(), field.name),
            )
        })?;

        match (value, field.is_nested()) {
            (FieldRef::Nested(inner), true) => encode_fields(inner, options, out)?,
            (FieldRef::Nested(inner), false) => {
                return Err(ConfigError::encode(
                    field.key,
                    format!("got nested record {} for a {} field", inner.record_name(), field.ty),
                ));
            }
            (FieldRef::Value(_), true) => {
                return Err(ConfigError::encode(
                    field.key,
                    format!("unsupported value shape for {}", field.ty),
                ));
            }
            (FieldRef::Value(value), false) => {
                if is_empty_or_default(&value) {
                    trace!(key = field.key, "skipping empty field");
                    continue;
                }
                let token = format_field(&value, &field.ty, &options.time_format)
                    .map_err(|e| ConfigError::encode(field.key, e.to_string()))?;
                trace!(key = field.key, "emitting config line");
                out.push(format!("{} = {}", field.key, token));
            }
        }
    }
    Ok(())
}
