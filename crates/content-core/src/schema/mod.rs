//! Kind schemas - the static descriptors driving every content collection
//!
//! Each resource kind is described by a [`KindSchema`]: its field allow-list,
//! required fields, status vocabulary, list ordering, and list cap. The
//! sanitizer, the collection service, and the HTTP layer are all generic over
//! these descriptors; adding a kind means adding a table entry, not a module.

mod kind;

pub use kind::{ContentKind, ContentKindParseError};

/// Value shape of a single content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, trimmed on the way in.
    Text,
    /// A list of text values.
    TextList,
    /// An integer with a fallback default and an optional inclusive range.
    Int {
        default: i64,
        min: Option<i64>,
        max: Option<i64>,
    },
}

/// One entry in a kind's field allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn list(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::TextList,
        }
    }

    pub const fn int(name: &'static str, default: i64) -> Self {
        Self {
            name,
            kind: FieldKind::Int {
                default,
                min: None,
                max: None,
            },
        }
    }

    pub const fn int_clamped(name: &'static str, default: i64, min: i64, max: i64) -> Self {
        Self {
            name,
            kind: FieldKind::Int {
                default,
                min: Some(min),
                max: Some(max),
            },
        }
    }
}

/// Status vocabulary of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusModel {
    /// `draft` (hidden) / `published` (visible).
    DraftPublished,
    /// `active` (visible) / `inactive` (hidden).
    ActiveInactive,
    /// No caller-visible status; every item is always visible.
    AlwaysVisible,
}

impl StatusModel {
    /// The status value stored for items visible to everyone.
    pub const fn visible_value(self) -> &'static str {
        match self {
            Self::DraftPublished | Self::AlwaysVisible => "published",
            Self::ActiveInactive => "active",
        }
    }

    /// The status value hiding an item from non-admin callers, if the kind has one.
    pub const fn hidden_value(self) -> Option<&'static str> {
        match self {
            Self::DraftPublished => Some("draft"),
            Self::ActiveInactive => Some("inactive"),
            Self::AlwaysVisible => None,
        }
    }

    /// Whether visibility filtering applies to this kind at all.
    pub const fn is_gated(self) -> bool {
        !matches!(self, Self::AlwaysVisible)
    }

    /// Normalize a raw status value: the hidden value is recognized
    /// case-insensitively, everything else becomes the visible value.
    pub fn normalize(self, raw: &str) -> &'static str {
        match self.hidden_value() {
            Some(hidden) if raw.trim().eq_ignore_ascii_case(hidden) => hidden,
            _ => self.visible_value(),
        }
    }
}

/// How a kind's list endpoint orders its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrdering {
    /// Newest first by creation time, insertion order breaking ties.
    Newest,
    /// Manual `sortOrder` ascending, then newest first.
    SortOrderThenNewest,
}

/// Static descriptor for one content kind.
#[derive(Debug, Clone, Copy)]
pub struct KindSchema {
    /// Envelope key for a single item (`"blog"`).
    pub key_one: &'static str,
    /// Envelope key for a list of items (`"blogs"`).
    pub key_many: &'static str,
    /// Human-readable name used in response messages (`"blog post"`).
    pub display_name: &'static str,
    /// Allow-listed content fields; everything else is dropped.
    pub fields: &'static [FieldSpec],
    /// Fields that must be non-empty after sanitization on create.
    pub required: &'static [&'static str],
    pub status: StatusModel,
    pub ordering: ListOrdering,
    /// Default maximum list length, lifted by an explicit `all` request.
    pub list_cap: Option<usize>,
    /// Whether items of this kind carry a unique slug.
    pub slugged: bool,
}

impl KindSchema {
    /// Look up the allow-list entry for a field name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(&name)
    }
}

pub(crate) static BLOG_SCHEMA: KindSchema = KindSchema {
    key_one: "blog",
    key_many: "blogs",
    display_name: "blog post",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("excerpt"),
        FieldSpec::text("readTime"),
        FieldSpec::text("heroImage"),
        FieldSpec::list("content"),
    ],
    required: &["title"],
    status: StatusModel::DraftPublished,
    ordering: ListOrdering::Newest,
    list_cap: None,
    slugged: true,
};

pub(crate) static TEAM_SCHEMA: KindSchema = KindSchema {
    key_one: "teamMember",
    key_many: "teamMembers",
    display_name: "team member",
    fields: &[
        FieldSpec::text("name"),
        FieldSpec::text("role"),
        FieldSpec::text("bio"),
        FieldSpec::text("linkedinUrl"),
        FieldSpec::text("imageUrl"),
    ],
    required: &["name"],
    status: StatusModel::DraftPublished,
    ordering: ListOrdering::Newest,
    list_cap: None,
    slugged: false,
};

pub(crate) static POSITION_SCHEMA: KindSchema = KindSchema {
    key_one: "position",
    key_many: "positions",
    display_name: "open position",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("location"),
        FieldSpec::text("description"),
        FieldSpec::text("applyUrl"),
    ],
    required: &["title"],
    status: StatusModel::DraftPublished,
    ordering: ListOrdering::Newest,
    list_cap: None,
    slugged: false,
};

pub(crate) static EVENT_SCHEMA: KindSchema = KindSchema {
    key_one: "event",
    key_many: "events",
    display_name: "event",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("description"),
        FieldSpec::text("date"),
        FieldSpec::text("location"),
        FieldSpec::text("imageUrl"),
    ],
    required: &["title"],
    status: StatusModel::AlwaysVisible,
    ordering: ListOrdering::Newest,
    list_cap: None,
    slugged: false,
};

pub(crate) static GALLERY_SCHEMA: KindSchema = KindSchema {
    key_one: "galleryImage",
    key_many: "galleryImages",
    display_name: "gallery image",
    fields: &[
        FieldSpec::text("imageUrl"),
        FieldSpec::text("caption"),
        FieldSpec::text("category"),
    ],
    required: &["imageUrl"],
    status: StatusModel::AlwaysVisible,
    ordering: ListOrdering::Newest,
    list_cap: Some(8),
    slugged: false,
};

pub(crate) static REVIEW_SCHEMA: KindSchema = KindSchema {
    key_one: "review",
    key_many: "reviews",
    display_name: "review",
    fields: &[
        FieldSpec::text("name"),
        FieldSpec::text("role"),
        FieldSpec::text("feedback"),
        FieldSpec::text("avatarUrl"),
        FieldSpec::int_clamped("rating", 5, 0, 5),
        FieldSpec::int("sortOrder", 0),
    ],
    required: &["name", "feedback"],
    status: StatusModel::ActiveInactive,
    ordering: ListOrdering::SortOrderThenNewest,
    list_cap: None,
    slugged: false,
};

pub(crate) static WORK_SCHEMA: KindSchema = KindSchema {
    key_one: "workPost",
    key_many: "workPosts",
    display_name: "work post",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("client"),
        FieldSpec::text("summary"),
        FieldSpec::text("coverImage"),
        FieldSpec::list("categories"),
        FieldSpec::text("projectUrl"),
    ],
    required: &["title"],
    status: StatusModel::DraftPublished,
    ordering: ListOrdering::Newest,
    list_cap: None,
    slugged: false,
};

pub(crate) static SETTINGS_SCHEMA: KindSchema = KindSchema {
    key_one: "settings",
    key_many: "settings",
    display_name: "site settings",
    fields: &[
        FieldSpec::text("siteTitle"),
        FieldSpec::text("tagline"),
        FieldSpec::text("description"),
        FieldSpec::text("contactEmail"),
        FieldSpec::text("instagramUrl"),
        FieldSpec::text("linkedinUrl"),
        FieldSpec::text("footerText"),
    ],
    required: &[],
    status: StatusModel::AlwaysVisible,
    ordering: ListOrdering::Newest,
    list_cap: None,
    slugged: false,
};
