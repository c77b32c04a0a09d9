// src/model/post.rs
use crate::constants::{DRAFT_STATUS, FEATURE_IMAGE_FIELD};
use crate::types::ImageReference;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a metadata document cannot become post fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetadataError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("metadata must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("'{field}' must be a string path or URL, found {found}")]
    InvalidFeatureImage { field: &'static str, found: String },
}

/// CMS post fields read from the article's metadata file.
///
/// Fields are kept verbatim and forwarded as-is; only `feature_image`
/// is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PostMetadata(Map<String, Value>);

impl PostMetadata {
    /// Parses metadata JSON; the document must be an object.
    pub fn parse(raw: &str) -> Result<Self, MetadataError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| MetadataError::InvalidJson(e.to_string()))?;
        Self::try_from(value)
    }

    /// The feature image reference, if one is set.
    ///
    /// Absent, `null` and empty-string values all mean "no feature image".
    pub fn feature_image(&self) -> Option<ImageReference> {
        match self.0.get(FEATURE_IMAGE_FIELD) {
            Some(Value::String(s)) if !s.is_empty() => Some(ImageReference::new(s.as_str())),
            _ => None,
        }
    }

    /// Returns a copy with `feature_image` replaced by `url`.
    pub fn with_feature_image(&self, url: impl Into<String>) -> Self {
        let mut fields = self.0.clone();
        fields.insert(FEATURE_IMAGE_FIELD.to_string(), Value::String(url.into()));
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for PostMetadata {
    type Error = MetadataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let fields = match value {
            Value::Object(fields) => fields,
            Value::Array(_) => return Err(MetadataError::NotAnObject { found: "an array" }),
            Value::String(_) => return Err(MetadataError::NotAnObject { found: "a string" }),
            Value::Number(_) => return Err(MetadataError::NotAnObject { found: "a number" }),
            Value::Bool(_) => return Err(MetadataError::NotAnObject { found: "a boolean" }),
            Value::Null => return Err(MetadataError::NotAnObject { found: "null" }),
        };

        match fields.get(FEATURE_IMAGE_FIELD) {
            None | Some(Value::Null) | Some(Value::String(_)) => Ok(Self(fields)),
            Some(other) => Err(MetadataError::InvalidFeatureImage {
                field: FEATURE_IMAGE_FIELD,
                found: other.to_string(),
            }),
        }
    }
}

/// Everything sent to the CMS to create the post.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPost {
    pub metadata: PostMetadata,
    pub html: String,
    pub status: String,
}

impl DraftPost {
    /// A post left in draft, pending human review.
    pub fn new(metadata: PostMetadata, html: String) -> Self {
        Self {
            metadata,
            html,
            status: DRAFT_STATUS.to_string(),
        }
    }

    /// Metadata fields plus `html` and `status`; the latter two win over metadata.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = self.metadata.fields().clone();
        fields.insert("html".to_string(), Value::String(self.html.clone()));
        fields.insert("status".to_string(), Value::String(self.status.clone()));
        fields
    }
}

impl Serialize for DraftPost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_fields().serialize(serializer)
    }
}

/// The post as created by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublishedPost {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
}
