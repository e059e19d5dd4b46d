//! Template catalog - read-only presentation presets.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode, TemplateId, ValidationError};

/// A block of the rendered CV that a template may include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Name and contact lines. Carries the summary unless the template
    /// also lists `Summary`.
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    /// Projects.
    Portfolio,
    Interests,
    Certifications,
}

impl SectionId {
    /// Default order for sections a template does not place itself.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Personal,
            SectionId::Summary,
            SectionId::Experience,
            SectionId::Education,
            SectionId::Portfolio,
            SectionId::Skills,
            SectionId::Languages,
            SectionId::Certifications,
            SectionId::Interests,
        ]
    }

    /// Heading used when the section is rendered.
    pub fn heading(&self) -> &'static str {
        match self {
            SectionId::Personal => "Personal Information",
            SectionId::Summary => "Professional Summary",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Languages => "Languages",
            SectionId::Portfolio => "Portfolio",
            SectionId::Interests => "Interests",
            SectionId::Certifications => "Certifications",
        }
    }
}

/// A `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor([u8; 3]);

impl AccentColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for AccentColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::invalid_format("color", format!("'{}' is not #rrggbb", s));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for AccentColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccentColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    /// Preview image asset name.
    pub preview: String,
    pub sections: Vec<SectionId>,
    pub accent: AccentColor,
}

impl Template {
    pub fn includes(&self, section: SectionId) -> bool {
        self.sections.contains(&section)
    }
}

/// The set of templates a session may choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

static SEEDED: Lazy<TemplateCatalog> = Lazy::new(|| TemplateCatalog {
    templates: vec![
        Template {
            id: TemplateId::from_static("1"),
            name: "Professional Modern".to_string(),
            description: "Clean and modern design perfect for any professional field".to_string(),
            preview: "modern-template.png".to_string(),
            sections: vec![
                SectionId::Personal,
                SectionId::Experience,
                SectionId::Education,
                SectionId::Skills,
                SectionId::Languages,
            ],
            accent: AccentColor::rgb(0x25, 0x63, 0xeb),
        },
        Template {
            id: TemplateId::from_static("2"),
            name: "Creative Design".to_string(),
            description: "Stand out with this creative template design".to_string(),
            preview: "creative-template.png".to_string(),
            sections: vec![
                SectionId::Personal,
                SectionId::Portfolio,
                SectionId::Experience,
                SectionId::Skills,
                SectionId::Interests,
            ],
            accent: AccentColor::rgb(0x4f, 0x46, 0xe5),
        },
        Template {
            id: TemplateId::from_static("3"),
            name: "Classic Professional".to_string(),
            description: "Traditional and elegant design for corporate environments".to_string(),
            preview: "classic-template.png".to_string(),
            sections: vec![
                SectionId::Personal,
                SectionId::Summary,
                SectionId::Experience,
                SectionId::Education,
                SectionId::Skills,
            ],
            accent: AccentColor::rgb(0x1e, 0x29, 0x3b),
        },
    ],
});

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The built-in catalog.
    pub fn seeded() -> &'static TemplateCatalog {
        &SEEDED
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    pub fn find(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| &t.id == id)
    }

    /// Like [`find`](Self::find), as a `TemplateNotFound` error.
    pub fn get(&self, id: &TemplateId) -> Result<&Template, DomainError> {
        self.find(id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::TemplateNotFound,
                format!("No template with id '{}'", id),
            )
            .with_detail("template_id", id.as_str())
        })
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::seeded().clone()
    }
}
