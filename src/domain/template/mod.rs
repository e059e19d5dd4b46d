//! Template module - The seeded catalog and the single selection.

mod catalog;
mod selection;

pub use catalog::{AccentColor, SectionId, Template, TemplateCatalog};
pub use selection::TemplateSelection;
