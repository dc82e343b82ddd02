//! Content kind - the discriminator binding an item to its collection

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    KindSchema, BLOG_SCHEMA, EVENT_SCHEMA, GALLERY_SCHEMA, POSITION_SCHEMA, REVIEW_SCHEMA,
    SETTINGS_SCHEMA, TEAM_SCHEMA, WORK_SCHEMA,
};

/// The collections served by the backend, plus the settings singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Blog,
    Team,
    Position,
    Event,
    Gallery,
    Review,
    Work,
    Settings,
}

impl ContentKind {
    /// The seven routable collection kinds. `Settings` is a singleton served
    /// by its own endpoint and is deliberately not in this list.
    pub const RESOURCES: [ContentKind; 7] = [
        Self::Blog,
        Self::Team,
        Self::Position,
        Self::Event,
        Self::Gallery,
        Self::Review,
        Self::Work,
    ];

    /// Stable discriminator stored in the `kind` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Team => "team",
            Self::Position => "position",
            Self::Event => "event",
            Self::Gallery => "gallery",
            Self::Review => "review",
            Self::Work => "work",
            Self::Settings => "settings",
        }
    }

    /// The static schema descriptor for this kind.
    pub fn schema(self) -> &'static KindSchema {
        match self {
            Self::Blog => &BLOG_SCHEMA,
            Self::Team => &TEAM_SCHEMA,
            Self::Position => &POSITION_SCHEMA,
            Self::Event => &EVENT_SCHEMA,
            Self::Gallery => &GALLERY_SCHEMA,
            Self::Review => &REVIEW_SCHEMA,
            Self::Work => &WORK_SCHEMA,
            Self::Settings => &SETTINGS_SCHEMA,
        }
    }

    /// Parse the stored discriminator back into a kind.
    pub fn parse(s: &str) -> Result<Self, ContentKindParseError> {
        match s {
            "blog" => Ok(Self::Blog),
            "team" => Ok(Self::Team),
            "position" => Ok(Self::Position),
            "event" => Ok(Self::Event),
            "gallery" => Ok(Self::Gallery),
            "review" => Ok(Self::Review),
            "work" => Ok(Self::Work),
            "settings" => Ok(Self::Settings),
            _ => Err(ContentKindParseError::UnknownKind),
        }
    }
}

/// Error when parsing a content kind from its stored discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContentKindParseError {
    #[error("unknown content kind")]
    UnknownKind,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = ContentKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::parse(s)
    }
}
