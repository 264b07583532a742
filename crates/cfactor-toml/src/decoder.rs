//! Decoder: config text → populated record.
//!
//! Each `key = value` line is matched against the target's field table. A
//! matching top-level field is written straight onto the target. Otherwise the
//! nested record fields are searched depth-first, and a match there is written
//! onto a provisional instance of the owning record type held in a
//! [`NestedRecords`] map. Once every line is consumed the target's
//! [`Record::attach_nested`] hook moves those instances into place.
//!
//! # Key design decisions
//!
//! - **Tolerant read**: blank lines, `#` comments and unknown keys are skipped.
//!   Lines without exactly one `=` are skipped too unless
//!   [`DecodeOptions::strict_lines`] is set.
//! - **Fail fast on bad values**: the first token that cannot be converted for
//!   its field aborts the decode with [`ConfigError::Conversion`].
//! - **Ancestors are materialised**: a key owned by a record two levels down
//!   also creates its parent's entry, so the hook chain can reach it.

use tracing::{debug, trace};

use crate::convert::{parse_field, strip_quotes};
use crate::error::{ConfigError, Result};
use crate::lines::{classify, split_lines, Line};
use crate::options::DecodeOptions;
use crate::record::{NestedRecords, Record};
use crate::types::{FieldDescriptor, RecordType};

/// Decode config text into `target` with default options.
pub fn decode(text: &str, target: &mut dyn Record) -> Result<()> {
    decode_with(text, target, &DecodeOptions::default())
}

pub fn decode_with(text: &str, target: &mut dyn Record, options: &DecodeOptions) -> Result<()> {
    decode_lines(&split_lines(text), target, options)
}

/// Decode config text into a fresh `R::default()`.
pub fn from_str<R: Record + Default>(text: &str) -> Result<R> {
    let mut record = R::default();
    decode(text, &mut record)?;
    Ok(record)
}

/// Decode pre-split lines into `target`.
///
/// On error the target may hold some of the values assigned before the
/// failing line; nested records are only attached on success.
pub fn decode_lines<S: AsRef<str>>(
    lines: &[S],
    target: &mut dyn Record,
    options: &DecodeOptions,
) -> Result<()> {
    let mut nested = NestedRecords::new();
    let mut assigned = 0usize;

    for (idx, raw) in lines.iter().enumerate() {
        let (key, value) = match classify(raw.as_ref()) {
            Line::Assignment { key, value } => (key, value),
            Line::Malformed(text) => {
                if options.strict_lines {
                    return Err(ConfigError::MalformedLine {
                        line: idx + 1,
                        text: text.to_string(),
                    });
                }
                debug!(line = idx + 1, text, "skipping malformed config line");
                continue;
            }
            Line::Blank | Line::Comment(_) => continue,
        };

        let mut path = Vec::new();
        let Some(field) = locate(target.fields(), key, &mut path) else {
            debug!(key, "ignoring unknown config key");
            continue;
        };

        let parsed = parse_field(value, &field.ty, &options.time_patterns)
            .map_err(|e| conversion_error(key, value, e))?;

        let owner: &mut dyn Record = match path.split_last() {
            None => &mut *target,
            Some((owner_ty, ancestors)) => {
                for ancestor in ancestors {
                    nested.get_or_create(*ancestor);
                }
                nested.get_or_create(*owner_ty)
            }
        };
        owner
            .set(field.name, parsed)
            .map_err(|e| conversion_error(key, value, e))?;
        trace!(key, record = owner.record_name(), "assigned config value");
        assigned += 1;
    }

    let resolved = nested.len();
    if !nested.is_empty() {
        target.attach_nested(&mut nested)?;
        if let Some(record) = nested.pending().next() {
            return Err(ConfigError::UnresolvedNested { record });
        }
    }
    debug!(assigned, nested = resolved, "decoded config");
    Ok(())
}

fn conversion_error(key: &str, value: &str, source: ConfigError) -> ConfigError {
    ConfigError::Conversion {
        key: key.to_string(),
        value: strip_quotes(value).to_string(),
        source: Box::new(source),
    }
}

/// Find the non-nested field whose key is `key`.
///
/// Top-level fields win; then nested records are searched in declaration order,
/// depth-first. On a nested match `path` holds the record types from the
/// outermost nested record down to the owner of the field. A record type
/// already on the path is not entered again.
fn locate(
    fields: &'static [FieldDescriptor],
    key: &str,
    path: &mut Vec<RecordType>,
) -> Option<&'static FieldDescriptor> {
    if let Some(field) = fields.iter().find(|f| !f.is_nested() && f.key == key) {
        return Some(field);
    }
    for child in fields.iter().filter_map(FieldDescriptor::nested_type) {
        if path.contains(&child) {
            continue;
        }
        path.push(child);
        if let Some(field) = locate(child.fields(), key, path) {
            return Some(field);
        }
        path.pop();
    }
    None
}
