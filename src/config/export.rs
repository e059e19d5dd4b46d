//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::export::ExportFormat;

use super::error::ValidationError;

/// Export pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Format used when a request does not name one
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,

    /// Pandoc binary; falls back to `pandoc` on `PATH`
    pub pandoc_path: Option<String>,

    /// Upper bound for a single PDF conversion
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,

    /// Embed the built-in stylesheet in HTML output
    #[serde(default = "default_include_css")]
    pub include_default_css: bool,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if matches!(&self.pandoc_path, Some(path) if path.trim().is_empty()) {
            return Err(ValidationError::BlankPandocPath);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: default_format(),
            pandoc_path: None,
            pdf_timeout_secs: default_pdf_timeout(),
            include_default_css: default_include_css(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./exports")
}

fn default_format() -> ExportFormat {
    ExportFormat::Pdf
}

fn default_pdf_timeout() -> u64 {
    30
}

fn default_include_css() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./exports"));
        assert_eq!(config.default_format, ExportFormat::Pdf);
        assert!(config.pandoc_path.is_none());
        assert_eq!(config.pdf_timeout_secs, 30);
        assert!(config.include_default_css);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = ExportConfig {
            pdf_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        let config = ExportConfig {
            pdf_timeout_secs: 301,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        let config = ExportConfig {
            pdf_timeout_secs: 300,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_blank_pandoc_path() {
        let config = ExportConfig {
            pandoc_path: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::BlankPandocPath));
    }

    #[test]
    fn test_validation_empty_output_dir() {
        let config = ExportConfig {
            output_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_export_config_deserialization() {
        let json = r#"{
            "output_dir": "/tmp/cv",
            "default_format": "html",
            "pdf_timeout_secs": 45
        }"#;
        let config: ExportConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/cv"));
        assert_eq!(config.default_format, ExportFormat::Html);
        assert_eq!(config.pdf_timeout_secs, 45);
        assert!(config.include_default_css);
    }
}
