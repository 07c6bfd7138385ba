use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix of every thumbnail URI. Payloads are served as JPEG.
const THUMBNAIL_PREFIX: &str = "data:image/jpeg;base64,";

/// One dictionary record as returned by the lookup API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub simplified: String,
    pub traditional: String,
    pub pinyin: String,
    pub definitions: String,
    pub explanation: String,
    #[serde(default, deserialize_with = "nullable_images")]
    pub images: Vec<ImagePayload>,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Derived locally, never read from the API
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

impl Entry {
    /// Derive the thumbnail from the first image, clearing it when there is none
    pub fn with_thumbnail(mut self) -> Self {
        self.thumbnail = self.images.first().map(Thumbnail::from_image);
        self
    }
}

fn nullable_images<'de, D>(deserializer: D) -> Result<Vec<ImagePayload>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ImagePayload>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raw `[id, base64]` pair. The id is opaque and kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload(pub serde_json::Value, pub String);

impl ImagePayload {
    pub fn data(&self) -> &str {
        &self.1
    }
}

/// Displayable image URI for an entry.
///
/// Trusted for direct rendering: the payload is server-provided image data,
/// and the only way to build one is from an [`ImagePayload`]. Arbitrary
/// strings can never become a `Thumbnail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail(String);

impl Thumbnail {
    pub fn from_image(image: &ImagePayload) -> Self {
        Self(format!("{THUMBNAIL_PREFIX}{}", image.data()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base64 payload without the URI prefix
    pub fn payload(&self) -> &str {
        &self.0[THUMBNAIL_PREFIX.len()..]
    }

    /// Decode the image bytes
    pub fn decode(&self) -> Result<Vec<u8>, ThumbnailError> {
        Ok(STANDARD.decode(self.payload())?)
    }
}

impl Serialize for Thumbnail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    #[error("Invalid base64 image payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

/// Current result set plus an optional user-facing error.
///
/// An error always comes with an empty result set, and entries always come
/// with the error cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    entries: Vec<Entry>,
    error: Option<String>,
}

impl SearchState {
    pub fn success(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
