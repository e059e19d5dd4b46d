//! Markdown renderer adapter.
//!
//! Lays a `CvDocument` out as markdown following a template's section list.
//! This is the primary implementation of the DocumentRenderer port.

use crate::domain::cv::{Certification, CvDocument, Education, Experience, Project};
use crate::domain::template::{SectionId, Template};
use crate::domain::validation::is_present;
use crate::ports::{DocumentRenderer, RenderError};

/// Template-driven implementation of DocumentRenderer.
///
/// Sections are emitted in the template's order. Sections the template does
/// not list are still rendered when they hold data: personal info first,
/// everything else after the template's own sections, in `SectionId::all()`
/// order. The summary only gets a section of its own when the template
/// lists one.
#[derive(Debug, Clone, Default)]
pub struct MarkdownCvRenderer;

impl MarkdownCvRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Final section order for `template`.
    fn layout(template: &Template) -> Vec<SectionId> {
        let mut order = Vec::with_capacity(SectionId::all().len());
        if !template.includes(SectionId::Personal) {
            order.push(SectionId::Personal);
        }
        for section in &template.sections {
            if !order.contains(section) {
                order.push(*section);
            }
        }
        for section in SectionId::all() {
            // Without its own slot the summary is printed under personal info.
            if *section == SectionId::Summary && !template.includes(SectionId::Summary) {
                continue;
            }
            if !order.contains(section) {
                order.push(*section);
            }
        }
        order
    }

    /// Renders one section, or `None` when it has no data.
    fn render_section(
        &self,
        section: SectionId,
        doc: &CvDocument,
        template: &Template,
    ) -> Option<String> {
        match section {
            SectionId::Personal => self.personal(doc, !template.includes(SectionId::Summary)),
            SectionId::Summary => {
                let summary = doc.personal_info().summary.trim();
                (!summary.is_empty()).then(|| titled(section, format!("{}\n", summary)))
            }
            SectionId::Experience => entries(section, doc.experience(), experience_entry),
            SectionId::Education => entries(section, doc.education(), education_entry),
            SectionId::Portfolio => entries(section, doc.projects(), project_entry),
            SectionId::Certifications => {
                entries(section, doc.certifications(), certification_entry)
            }
            SectionId::Skills => bullets(section, doc.skills().iter().map(String::as_str)),
            SectionId::Languages => bullets(
                section,
                doc.languages()
                    .iter()
                    .map(|l| format!("{} ({})", l.language, l.proficiency)),
            ),
            SectionId::Interests => bullets(section, doc.interests().iter().map(String::as_str)),
        }
    }

    fn personal(&self, doc: &CvDocument, with_summary: bool) -> Option<String> {
        let info = doc.personal_info();
        let name = info.full_name.trim();
        let contact: Vec<&str> = [&info.email, &info.phone, &info.address]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        let summary = if with_summary { info.summary.trim() } else { "" };

        if name.is_empty() && contact.is_empty() && summary.is_empty() {
            return None;
        }

        let mut out = format!(
            "# {}\n\n",
            if name.is_empty() { "Curriculum Vitae" } else { name }
        );
        if !contact.is_empty() {
            out.push_str(&contact.join(" · "));
            out.push_str("\n\n");
        }
        if !summary.is_empty() {
            out.push_str(summary);
            out.push_str("\n\n");
        }
        Some(out)
    }
}

impl DocumentRenderer for MarkdownCvRenderer {
    fn render(&self, document: &CvDocument, template: &Template) -> Result<String, RenderError> {
        if document.is_empty() {
            return Err(RenderError::EmptyDocument);
        }

        let body: String = Self::layout(template)
            .into_iter()
            .filter_map(|section| self.render_section(section, document, template))
            .collect();

        if body.trim().is_empty() {
            return Err(RenderError::EmptyDocument);
        }
        Ok(format!("{}\n", body.trim_end()))
    }
}

// ───────────────────────────────────────────────────────────────
// Section helpers
// ───────────────────────────────────────────────────────────────

fn titled(section: SectionId, body: String) -> String {
    format!("## {}\n\n{}\n", section.heading(), body)
}

fn entries<T>(section: SectionId, items: &[T], entry: fn(&T) -> String) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let body: Vec<String> = items.iter().map(entry).collect();
    Some(titled(section, body.join("\n")))
}

fn bullets<I, S>(section: SectionId, items: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let body: String = items
        .into_iter()
        .map(|item| format!("- {}\n", item.as_ref()))
        .collect();
    (!body.is_empty()).then(|| titled(section, body))
}

/// "start - end", with a missing end shown as "Present".
pub fn date_range(start: &str, end: Option<&str>) -> String {
    let end = match end.map(str::trim) {
        None | Some("") => "Present",
        Some(e) if is_present(e) => "Present",
        Some(e) => e,
    };
    format!("{} - {}", start.trim(), end)
}

fn push_optional(out: &mut String, value: Option<&str>) {
    if let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) {
        out.push_str(text);
        out.push_str("\n\n");
    }
}

fn experience_entry(job: &Experience) -> String {
    let mut out = format!("### {}, {}\n\n", job.position.trim(), job.company.trim());
    let mut meta = format!("*{}*", date_range(&job.start_date, job.end_date.as_deref()));
    if let Some(location) = job.location.as_deref().filter(|l| !l.trim().is_empty()) {
        meta.push_str(&format!(" · {}", location.trim()));
    }
    out.push_str(&meta);
    out.push_str("\n\n");
    push_optional(&mut out, job.description.as_deref());
    out
}

fn education_entry(edu: &Education) -> String {
    let mut out = format!(
        "### {} in {}, {}\n\n",
        edu.degree.trim(),
        edu.field_of_study.trim(),
        edu.institution.trim()
    );
    let mut meta = format!("*{}*", date_range(&edu.start_date, edu.end_date.as_deref()));
    if let Some(grade) = edu.grade.as_deref().filter(|g| !g.trim().is_empty()) {
        meta.push_str(&format!(" · Grade: {}", grade.trim()));
    }
    out.push_str(&meta);
    out.push_str("\n\n");
    push_optional(&mut out, edu.description.as_deref());
    out
}

fn project_entry(project: &Project) -> String {
    let mut out = format!("### {}\n\n", project.name.trim());
    push_optional(&mut out, project.description.as_deref());
    if !project.technologies.is_empty() {
        out.push_str(&format!(
            "**Technologies:** {}\n\n",
            project.technologies.join(", ")
        ));
    }
    if let Some(link) = project.link.as_deref().filter(|l| !l.trim().is_empty()) {
        out.push_str(&format!("<{}>\n\n", link.trim()));
    }
    out
}

fn certification_entry(cert: &Certification) -> String {
    let mut out = format!("### {}, {}\n\n", cert.name.trim(), cert.issuer.trim());
    let mut meta = format!("*Issued {}", cert.date.trim());
    if let Some(expiry) = cert.expiry.as_deref().filter(|e| !e.trim().is_empty()) {
        meta.push_str(&format!(" · Expires {}", expiry.trim()));
    }
    meta.push('*');
    out.push_str(&meta);
    out.push_str("\n\n");
    push_optional(&mut out, cert.description.as_deref());
    out
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
