//! The session's chosen template.

use crate::domain::foundation::DomainError;

use super::Template;

/// At most one selected template, held outside the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSelection {
    selected: Option<Template>,
}

impl TemplateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous selection.
    pub fn select(&mut self, template: Template) {
        self.selected = Some(template);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Template> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    /// The selected template, or `TemplateNotSelected`.
    pub fn require(&self) -> Result<&Template, DomainError> {
        self.selected
            .as_ref()
            .ok_or_else(DomainError::template_not_selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::template::TemplateCatalog;

    #[test]
    fn require_fails_without_selection() {
        let selection = TemplateSelection::new();
        let err = selection.require().unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateNotSelected);
    }

    #[test]
    fn select_replaces_and_clear_removes() {
        let catalog = TemplateCatalog::seeded();
        let mut selection = TemplateSelection::new();

        selection.select(catalog.all()[0].clone());
        selection.select(catalog.all()[2].clone());
        assert_eq!(selection.require().unwrap().name, "Classic Professional");

        selection.clear();
        assert!(!selection.is_selected());
    }
}
