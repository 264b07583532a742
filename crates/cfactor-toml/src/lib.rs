//! # cfactor-toml
//!
//! Tag-driven loading and saving of flat `key = value` config files into
//! statically-typed records.
//!
//! The format is a small TOML subset: one assignment per line, `#` comment
//! lines, quoted strings and timestamps, bare numbers and bools, and
//! single-level array literals such as `hobbies = ["a","b"]`. Hierarchy is
//! simulated with dotted keys (`author.firstName`) bound to the fields of a
//! nested record.
//!
//! Each record type describes itself with a static [`FieldDescriptor`] table and
//! by-name get/set access (the [`Record`] trait). The decoder matches lines
//! against that table; the encoder walks it to write lines back.
//!
//! ## Modules
//!
//! - [`decoder`]: config text → record
//! - [`encoder`]: record → config lines
//! - [`record`]: `Record` trait, attach hook, nested-record resolution map
//! - [`types`]: field descriptors and the dynamic `Value`
//! - [`convert`]: token ↔ value conversion and emptiness rules
//! - [`time`]: timestamp pattern list, parsing and formatting
//! - [`lines`]: line splitting and classification
//! - [`lookup`]: read fields by configuration key
//! - [`io`]: file collaborator and the `TomlConfig` load/save façade
//! - [`options`]: decode/encode settings
//! - [`error`]: error types

pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod io;
pub mod lines;
pub mod lookup;
pub mod options;
pub mod record;
pub mod time;
pub mod types;

pub use decoder::{decode, decode_lines, decode_with, from_str};
pub use encoder::{encode, encode_with, to_string, to_string_with};
pub use error::{ConfigError, Result};
pub use io::TomlConfig;
pub use options::{DecodeOptions, EncodeOptions};
pub use record::{set_field, unknown_field, FieldRef, NestedRecords, Record};
pub use time::{TimeFormat, TimePattern};
pub use types::{ConfigValue, FieldDescriptor, FieldType, RecordType, ScalarType, Timestamp, Value};
