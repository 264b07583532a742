//! File access and the load/save façade.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::decoder::decode_lines;
use crate::encoder::encode_with;
use crate::error::Result;
use crate::lines::split_lines;
use crate::options::{DecodeOptions, EncodeOptions};
use crate::record::Record;

pub fn read_resource(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Interpret raw bytes as UTF-8 text. Invalid input maps to an
/// [`io::ErrorKind::InvalidData`] I/O error.
pub fn decode_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Create (or truncate) `path` and write each line followed by `\n`.
pub fn write_resource<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// A config file bound to a path, with the options used to read and write it.
#[derive(Debug, Clone)]
pub struct TomlConfig {
    path: PathBuf,
    decode: DecodeOptions,
    encode: EncodeOptions,
}

impl TomlConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TomlConfig {
            path: path.into(),
            decode: DecodeOptions::default(),
            encode: EncodeOptions::default(),
        }
    }

    pub fn with_decode_options(mut self, options: DecodeOptions) -> Self {
        self.decode = options;
        self
    }

    pub fn with_encode_options(mut self, options: EncodeOptions) -> Self {
        self.encode = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and populate `target` from it.
    pub fn load(&self, target: &mut dyn Record) -> Result<()> {
        let text = decode_utf8(read_resource(&self.path)?)?;
        debug!(path = %self.path.display(), bytes = text.len(), "loading config");
        decode_lines(&split_lines(&text), target, &self.decode)
    }

    pub fn load_new<R: Record + Default>(&self) -> Result<R> {
        let mut record = R::default();
        self.load(&mut record)?;
        Ok(record)
    }

    /// Write `record` back to this config's path.
    pub fn save(&self, record: &dyn Record) -> Result<()> {
        self.save_to(&self.path, record)
    }

    /// Write `record` to `path`. The record is fully encoded before the file
    /// is touched, so an encode failure leaves any existing file intact.
    pub fn save_to(&self, path: impl AsRef<Path>, record: &dyn Record) -> Result<()> {
        let lines = encode_with(record, &self.encode)?;
        debug!(path = %path.as_ref().display(), lines = lines.len(), "saving config");
        write_resource(path, &lines)
    }
}
