//! Request shapes accepted by the services.
//!
//! Write bodies stay raw [`serde_json::Value`]s because the sanitizer
//! owns their interpretation; the types here cover everything else the
//! handlers pass down.

/// Options for a collection listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Admin request to include hidden items. Ignored for non-admin
    /// callers and for kinds without a status gate.
    pub include_hidden: bool,
    /// Lift the kind's default list cap, where one exists.
    pub all: bool,
}

/// How a single-item fetch identifies its target.
#[derive(Debug, Clone)]
pub enum ItemSelector {
    /// Look up by slug. The raw value is normalized before matching.
    Slug(String),
    /// Look up by item id.
    Id(String),
}

impl ItemSelector {
    /// The caller-supplied value, as received.
    pub fn raw_value(&self) -> String {
        match self {
            Self::Slug(raw) | Self::Id(raw) => raw.clone(),
        }
    }
}

/// One file received from a multipart upload, ready to forward to the
/// media host.
#[derive(Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    /// Target folder on the media host. Falls back to the configured
    /// default when absent.
    pub folder: Option<String>,
}

impl std::fmt::Debug for MediaUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &format!("{} bytes", self.bytes.len()))
            .field("folder", &self.folder)
            .finish()
    }
}
