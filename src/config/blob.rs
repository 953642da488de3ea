// ABOUTME: JSON configuration blobs pushed to workers via /sendSet.
// ABOUTME: Loads blobs verbatim and rewrites only the advert section for the message command.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// A configuration document read from disk.
///
/// Key order is preserved so that a rewritten blob differs from its source
/// only in the fields that were deliberately changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBlob {
    value: Value,
}

impl ConfigBlob {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigFileNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;
        let value = serde_json::from_str(&content).map_err(|source| Error::MalformedBlob {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { value })
    }

    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Compact JSON text as sent in the `set` form field.
    pub fn to_wire(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.value)?)
    }

    /// Return a copy with the advert overlay text and switch replaced.
    ///
    /// `adverts` is only written when the key already exists; `is_open` is
    /// always written when an `advert` object exists. Documents without an
    /// `advert` object come back unchanged.
    pub fn with_advert(&self, text: &str, enabled: bool) -> Self {
        let mut value = self.value.clone();
        if let Some(advert) = value.get_mut("advert").and_then(Value::as_object_mut) {
            if let Some(adverts) = advert.get_mut("adverts") {
                *adverts = Value::String(text.to_string());
            }
            advert.insert("is_open".to_string(), Value::Bool(enabled));
        }
        Self { value }
    }

    /// Four-space indented JSON, the layout workers receive for advert variants.
    pub fn to_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.value.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|e| Error::InvalidConfig(format!("blob is not valid UTF-8: {e}")))
    }
}

/// Split an operator message into advert fragments on `+`.
///
/// Empty fragments are kept, so `"A++B"` yields three fragments.
pub fn split_message(message: &str) -> Vec<String> {
    if message.contains('+') {
        message.split('+').map(str::to_string).collect()
    } else {
        vec![message.to_string()]
    }
}
