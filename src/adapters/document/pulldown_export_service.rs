//! Pulldown-cmark based export service adapter.
//!
//! - HTML conversion using pulldown-cmark, styled with the template accent
//! - PDF conversion using Pandoc (requires an external Pandoc installation)

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pulldown_cmark::{html, Event, Options, Parser};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::ExportConfig;
use crate::ports::{DocumentExportService, ExportError, ExportStyle};

/// Export service using pulldown-cmark for HTML and Pandoc for PDF.
///
/// If Pandoc is not available, PDF conversion returns `ServiceUnavailable`;
/// HTML conversion always works.
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,
    pdf_timeout_secs: u64,
    include_default_css: bool,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownExportService {
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: 30,
            include_default_css: true,
        }
    }

    /// Builds the service from the export section of the app config.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            pandoc_path: config.pandoc_path.clone(),
            pdf_timeout_secs: config.pdf_timeout_secs,
            include_default_css: config.include_default_css,
        }
    }

    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Wrap an HTML body in a complete document. The stylesheet's primary
    /// color is the style's accent.
    fn wrap_html(&self, body: String, title: &str, style: &ExportStyle) -> String {
        let css = if self.include_default_css {
            format!(
                ":root {{\n    --primary-color: {};\n}}\n{}",
                style.accent, BASE_CSS
            )
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="cv">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            body = body
        )
    }

    async fn check_pandoc(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }
}

#[async_trait]
impl DocumentExportService for PulldownExportService {
    async fn to_pdf(&self, markdown: &str, style: &ExportStyle) -> Result<Vec<u8>, ExportError> {
        if !self.check_pandoc().await {
            warn!(pandoc = %self.pandoc_command(), "Pandoc not found, PDF export unavailable");
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed. PDF export requires Pandoc. \
                 Install from https://pandoc.org/installing.html",
            ));
        }

        let title = resolve_title(markdown, style);
        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                "--pdf-engine=xelatex",
                "-V",
                "geometry:margin=0.8in",
                "-V",
                "fontsize=11pt",
                "-V",
                "colorlinks=true",
            ])
            .arg("--metadata")
            .arg(format!("pagetitle={}", title))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::pdf_failed(format!("Failed to start Pandoc: {}", e)))?;

        // Writing stdin is part of the timed conversion.
        let stdin = child.stdin.take();
        let conversion = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(markdown.as_bytes()).await.map_err(|e| {
                    ExportError::pdf_failed(format!("Failed to write to Pandoc: {}", e))
                })?;
            }
            child
                .wait_with_output()
                .await
                .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))
        };

        let output = tokio::time::timeout(Duration::from_secs(self.pdf_timeout_secs), conversion)
            .await
            .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        debug!(bytes = output.stdout.len(), "Pandoc produced PDF");
        Ok(output.stdout)
    }

    async fn to_html(&self, markdown: &str, style: &ExportStyle) -> Result<String, ExportError> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_SMART_PUNCTUATION;
        // Raw HTML in the source is shown as text, never emitted as markup.
        let parser = Parser::new_ext(markdown, options).map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            other => other,
        });

        let mut html_body = String::new();
        html::push_html(&mut html_body, parser);

        let title = resolve_title(markdown, style);
        Ok(self.wrap_html(html_body, &title, style))
    }

    async fn is_available(&self) -> bool {
        self.check_pandoc().await
    }
}

/// The style's title, else the first h1, else a generic one.
fn resolve_title(markdown: &str, style: &ExportStyle) -> String {
    style
        .title
        .clone()
        .or_else(|| extract_title(markdown))
        .unwrap_or_else(|| "Curriculum Vitae".to_string())
}

fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|line| line.trim().strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Stylesheet appended after the `:root` block carrying the accent.
const BASE_CSS: &str = r#"
article.cv {
    --ink: #1f2937;
    --faint: #6b7280;
    --rule: #e5e7eb;
    max-width: 820px;
    margin: 0 auto;
    padding: 2.5rem 2rem;
    font: 15px/1.55 "Inter", "Segoe UI", Helvetica, Arial, sans-serif;
    color: var(--ink);
}

.cv h1 {
    margin: 0;
    font-size: 2.1rem;
    letter-spacing: 0.01em;
    color: var(--primary-color);
}

/* contact line directly under the name */
.cv h1 + p {
    margin: 0.2rem 0 1rem;
    color: var(--faint);
    font-size: 0.95rem;
}

.cv h2 {
    margin: 1.6rem 0 0.6rem;
    font-size: 0.95rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: var(--primary-color);
    border-bottom: 2px solid var(--primary-color);
}

.cv h3 {
    margin: 0.9rem 0 0;
    font-size: 1.05rem;
}

.cv h3 + p em {
    color: var(--faint);
    font-style: normal;
    font-size: 0.9rem;
}

.cv ul {
    margin: 0.3rem 0;
    padding-left: 1.2rem;
}

.cv a {
    color: var(--primary-color);
}

.cv hr {
    border: 0;
    border-top: 1px solid var(--rule);
}

@media print {
    article.cv {
        padding: 0;
        font-size: 10.5pt;
    }

    .cv h2, .cv h3 {
        break-after: avoid;
    }
}
"#;

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
