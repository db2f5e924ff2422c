//! Record shapes for the three portfolio sections.
//!
//! Credential and project records are `'static` tables authored in
//! [`crate::data`]. Only [`ContactField::value`] ever changes, and it is owned
//! by the contact form state.

use std::fmt;

/// Input kind of a contact form field (maps onto the HTML `type`)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    /// Rendered as a textarea
    Multiline,
}

impl FieldKind {
    /// HTML input type; `None` for textareas
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Multiline => None,
        }
    }
}

/// Identifies one of the three contact form fields
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One contact form field with its current value
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContactField {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub placeholder: &'static str,
}

/// Icons used across the sections.
///
/// Rendered as plain glyphs so no icon font is needed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    GraduationCap,
    Award,
    Book,
    Mail,
    Phone,
    MapPin,
    Github,
    ExternalLink,
}

impl IconKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::GraduationCap => "\u{1F393}",
            IconKind::Award => "\u{1F3C5}",
            IconKind::Book => "\u{1F4D6}",
            IconKind::Mail => "\u{2709}",
            IconKind::Phone => "\u{260E}",
            IconKind::MapPin => "\u{1F4CD}",
            IconKind::Github => "\u{2325}",
            IconKind::ExternalLink => "\u{2197}",
        }
    }

    /// Accessible label for screen readers
    pub fn label(&self) -> &'static str {
        match self {
            IconKind::GraduationCap => "Degree",
            IconKind::Award => "Award",
            IconKind::Book => "School",
            IconKind::Mail => "Email",
            IconKind::Phone => "Phone",
            IconKind::MapPin => "Location",
            IconKind::Github => "Source code",
            IconKind::ExternalLink => "Live demo",
        }
    }
}

/// One education or certification entry
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CredentialRecord {
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

/// Handle to an image resolved at build time
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AssetHandle {
    /// Stable name, also the key used by the UI to find the embedded bytes
    pub name: &'static str,
    pub media_type: &'static str,
}

impl AssetHandle {
    pub const fn svg(name: &'static str) -> Self {
        Self {
            name,
            media_type: "image/svg+xml",
        }
    }
}

/// One portfolio project entry
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub image: AssetHandle,
    pub tech: &'static [&'static str],
    pub repo_url: &'static str,
    /// Rendered as-is, placeholder `"#"` included
    pub live_url: &'static str,
}

/// One line of static contact information
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContactInfoRow {
    pub icon: IconKind,
    pub text: &'static str,
}
