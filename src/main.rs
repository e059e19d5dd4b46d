//! cv-wizard - Runs a scripted CV session and exports the result.
//!
//! Usage: `cv-wizard <script.json> [markdown|html|pdf]`
//!
//! The script names a template and carries the CV content. Every record is
//! replayed through the wizard, so the same validation applies as in an
//! interactive session.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use cv_wizard::adapters::{LocalArtifactStorage, MarkdownCvRenderer, PulldownExportService};
use cv_wizard::application::{CvSession, ExportCvHandler, SessionError};
use cv_wizard::config::{AppConfig, LoggingConfig};
use cv_wizard::domain::cv::{CvCommand, CvDocument, PersonalInfoPatch, ScalarCollection};
use cv_wizard::domain::export::ExportFormat;
use cv_wizard::domain::foundation::TemplateId;
use cv_wizard::domain::wizard::{AdvanceOutcome, LanguagesForm, SkillsForm};
use cv_wizard::ports::DocumentExportService;

/// Input file layout.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Script {
    template_id: TemplateId,
    #[serde(default)]
    format: Option<ExportFormat>,
    document: CvDocument,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .map(PathBuf::from)
        .ok_or("usage: cv-wizard <script.json> [markdown|html|pdf]")?;
    let format_arg = args.next().map(|raw| raw.parse::<ExportFormat>()).transpose()?;

    let raw = tokio::fs::read_to_string(&script_path).await?;
    let script: Script = serde_json::from_str(&raw)?;
    let format = format_arg
        .or(script.format)
        .unwrap_or(config.export.default_format);

    // Fail before replaying when PDF output cannot be produced at all.
    let export_service = Arc::new(PulldownExportService::from_config(&config.export));
    if format == ExportFormat::Pdf && !export_service.is_available().await {
        tracing::error!("Pandoc is not available; choose markdown or html output");
        return Err("PDF export requires Pandoc".into());
    }

    let mut session = CvSession::new();
    session.select_template(&script.template_id)?;

    if let Err(err) = replay(&mut session, &script.document) {
        if let Some(errors) = err.field_errors() {
            for error in errors.iter() {
                tracing::error!(field = error.field(), "{}", error.message());
            }
        }
        return Err(err.into());
    }

    let handler = ExportCvHandler::new(
        Arc::new(MarkdownCvRenderer::new()),
        export_service,
        Arc::new(LocalArtifactStorage::new(&config.export.output_dir)),
    );
    let artifact = session.export(&handler, format).await?;

    println!("{}", artifact.path.display());
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}

/// Feeds `draft` through the wizard step by step.
fn replay(session: &mut CvSession, draft: &CvDocument) -> Result<(), SessionError> {
    // Personal Info
    let patch = PersonalInfoPatch::from(draft.personal_info().clone());
    session.submit_personal_info(patch)?;

    // Education, Experience
    for record in draft.education() {
        session.submit_record(record.clone().into())?;
    }
    session.advance()?;
    for record in draft.experience() {
        session.submit_record(record.clone().into())?;
    }
    session.advance()?;

    // Skills, Languages
    session.submit_skills(SkillsForm::from_skills(draft.skills()))?;
    session.submit_languages(LanguagesForm::from_languages(draft.languages()))?;

    // Certifications, plus the collections without a step of their own
    for record in draft.certifications() {
        session.submit_record(record.clone().into())?;
    }
    for record in draft.projects() {
        session.submit_record(record.clone().into())?;
    }
    if !draft.interests().is_empty() {
        session.apply(CvCommand::SetScalarCollection {
            items: ScalarCollection::Interests(draft.interests().to_vec()),
        })?;
    }

    match session.advance()? {
        AdvanceOutcome::PreviewRequested => {
            session.take_preview_request();
        }
        other => tracing::warn!(outcome = ?other, "Wizard did not reach the preview"),
    }
    Ok(())
}
