//! JSON emission for result sets.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::schema::ResultSet;

/// Layout of the emitted JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Two-space indentation.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Minified,
}

impl JsonFormat {
    pub fn from_minify(minify: bool) -> Self {
        if minify {
            JsonFormat::Minified
        } else {
            JsonFormat::Pretty
        }
    }
}

/// Serialize a result set to a writer.
///
/// Non-ASCII text is written as UTF-8, not as `\u` escapes.
pub fn write_json(result: &ResultSet, writer: impl Write, format: JsonFormat) -> Result<()> {
    match format {
        JsonFormat::Pretty => serde_json::to_writer_pretty(writer, result)?,
        JsonFormat::Minified => serde_json::to_writer(writer, result)?,
    }
    Ok(())
}

/// Serialize a result set to a string.
pub fn to_json_string(result: &ResultSet, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(result)?,
        JsonFormat::Minified => serde_json::to_string(result)?,
    };
    Ok(json)
}

/// Write a result set to `path`, creating parent directories as needed.
pub fn write_json_file(result: &ResultSet, path: impl AsRef<Path>, format: JsonFormat) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_json(result, &mut writer, format)?;
    writer.flush().map_err(|e| ConvertError::io(path, e))?;

    Ok(())
}
