/*!
 * Markdown documents with YAML front matter.
 */

use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

use crate::errors::DocumentError;

use super::codec;

/// One markdown file, decoded.
///
/// `metadata` keeps every front matter key in file order. Only the fields
/// in [`Header`] survive re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Location of the file, also its identity within a batch
    pub path: PathBuf,

    /// Front matter mapping, in file order
    pub metadata: Mapping,

    /// Text following the front matter block
    pub body: String,
}

/// The front matter fields written back to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub slug: String,
    /// `l10n.sourceCommit`, empty when absent
    pub source_commit: String,
}

impl Document {
    /// Decode raw file content.
    pub fn decode(path: impl Into<PathBuf>, raw: &str) -> Result<Self, DocumentError> {
        let (yaml, body) = codec::split_front_matter(raw)?;

        let metadata = if yaml.trim().is_empty() {
            Mapping::new()
        } else {
            match serde_yaml::from_str::<Value>(yaml) {
                Ok(Value::Mapping(mapping)) => mapping,
                Ok(Value::Null) => Mapping::new(),
                Ok(_) => {
                    return Err(DocumentError::malformed("front matter is not a key-value mapping"));
                }
                Err(e) => return Err(DocumentError::malformed(e.to_string())),
            }
        };

        Ok(Self {
            path: path.into(),
            metadata,
            body: body.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract the header fields from the metadata.
    ///
    /// `title` and `slug` are required. A missing or null
    /// `l10n.sourceCommit` yields an empty string.
    pub fn header(&self) -> Result<Header, DocumentError> {
        let title = self
            .scalar("title")
            .ok_or(DocumentError::MissingField("title"))?;
        let slug = self
            .scalar("slug")
            .ok_or(DocumentError::MissingField("slug"))?;
        let source_commit = self
            .metadata
            .get("l10n")
            .and_then(|l10n| l10n.get("sourceCommit"))
            .and_then(scalar_to_string)
            .unwrap_or_default();

        Ok(Header { title, slug, source_commit })
    }

    /// Re-encode with the fixed layout, dropping every other metadata key
    pub fn encode(&self) -> Result<String, DocumentError> {
        Ok(codec::encode(&self.header()?, &self.body))
    }

    fn scalar(&self, key: &str) -> Option<String> {
        self.metadata.get(key).and_then(scalar_to_string)
    }
}

// Plain scalars may be typed by YAML (`slug: 404`); render them back as text.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
