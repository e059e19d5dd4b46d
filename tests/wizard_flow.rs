//! Integration tests for the wizard flow.
//!
//! Drives a `CvSession` through the same sequences a user would: template
//! selection, gated steps, record submission and start-over.

use cv_wizard::application::CvSession;
use cv_wizard::domain::cv::{
    CvCommand, Education, Experience, LanguageEntry, PersonalInfoPatch, Proficiency,
    RecordCollection, RecordItem,
};
use cv_wizard::domain::foundation::{ErrorCode, TemplateId};
use cv_wizard::domain::wizard::{AdvanceOutcome, LanguagesForm, SkillsForm, WizardStep};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn started_session() -> CvSession {
    let mut session = CvSession::new();
    session
        .select_template(&TemplateId::new("1").unwrap())
        .unwrap();
    session
}

fn complete_patch() -> PersonalInfoPatch {
    PersonalInfoPatch::default()
        .full_name("Katherine Johnson")
        .email("katherine@example.com")
        .phone("7575551234")
        .address("Hampton, Virginia")
        .summary("Mathematician whose orbital mechanics calculations made crewed spaceflight possible.")
}

fn mit_education() -> Education {
    Education {
        institution: "MIT".into(),
        degree: "BSc".into(),
        field_of_study: "CS".into(),
        start_date: "09/2018".into(),
        ..Default::default()
    }
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn advance_is_blocked_until_personal_info_is_valid() {
    let mut session = started_session();
    session
        .apply(CvCommand::SetPersonalInfo {
            patch: complete_patch().email(""),
        })
        .unwrap();

    let outcome = session.advance().unwrap();
    assert!(outcome.is_blocked());
    assert_eq!(session.current_step().order_index(), 0);

    session
        .apply(CvCommand::SetPersonalInfo {
            patch: PersonalInfoPatch::default().email("katherine@example.com"),
        })
        .unwrap();

    assert_eq!(
        session.advance().unwrap(),
        AdvanceOutcome::Moved(WizardStep::Education)
    );
    assert_eq!(session.current_step().order_index(), 1);
}

#[test]
fn retreat_from_first_step_stays_put() {
    let mut session = started_session();
    assert_eq!(session.retreat().unwrap(), WizardStep::PersonalInfo);
    assert_eq!(session.current_step(), WizardStep::PersonalInfo);
}

#[test]
fn advancing_past_last_step_requests_preview_once() {
    let mut session = started_session();
    session.submit_personal_info(complete_patch()).unwrap();
    while session.current_step() != WizardStep::Certifications {
        session.advance().unwrap();
    }

    assert_eq!(session.advance().unwrap(), AdvanceOutcome::PreviewRequested);
    assert_eq!(session.current_step(), WizardStep::Certifications);
    assert_eq!(session.progress().header(), "Step 6 of 6");

    assert!(session.take_preview_request());
    assert!(!session.take_preview_request());
}

#[test]
fn go_to_only_reaches_visited_steps() {
    let mut session = started_session();
    session.submit_personal_info(complete_patch()).unwrap();
    session.advance().unwrap();
    assert_eq!(session.current_step(), WizardStep::Experience);

    assert!(session.go_to(WizardStep::PersonalInfo).unwrap());
    assert_eq!(session.current_step(), WizardStep::PersonalInfo);
    assert!(!session.go_to(WizardStep::Languages).unwrap());
    assert!(session.go_to(WizardStep::Experience).unwrap());
}

// =============================================================================
// Submissions
// =============================================================================

#[test]
fn invalid_phone_leaves_stored_phone_unchanged() {
    let mut session = started_session();
    session.submit_personal_info(complete_patch()).unwrap();
    session.go_to(WizardStep::PersonalInfo).unwrap();

    let err = session
        .submit_personal_info(PersonalInfoPatch::default().phone("12345"))
        .unwrap_err();

    let errors = err.field_errors().unwrap();
    assert_eq!(errors.fields(), vec!["phone"]);
    assert_eq!(session.document().personal_info().phone, "7575551234");
    assert_eq!(session.current_step(), WizardStep::PersonalInfo);
}

#[test]
fn education_edit_merges_end_date() {
    let mut session = started_session();
    session.submit_personal_info(complete_patch()).unwrap();

    let len = session.submit_record(mit_education().into()).unwrap();
    assert_eq!(len, 1);

    let edited = Education {
        end_date: Some("06/2022".into()),
        ..session.document().education()[0].clone()
    };
    session.submit_record_edit(0, edited.into()).unwrap();

    let education = session.document().education();
    assert_eq!(education.len(), 1);
    assert_eq!(education[0].institution, "MIT");
    assert_eq!(education[0].start_date, "09/2018");
    assert_eq!(education[0].end_date.as_deref(), Some("06/2022"));
}

#[test]
fn edit_out_of_range_is_a_domain_error() {
    let mut session = started_session();

    let err = session
        .submit_record_edit(3, mit_education().into())
        .unwrap_err();

    assert_eq!(
        err.domain_error().map(|e| e.code),
        Some(ErrorCode::IndexOutOfRange)
    );
    assert!(session.document().education().is_empty());
}

#[test]
fn invalid_record_is_not_appended() {
    let mut session = started_session();

    let err = session
        .submit_record(RecordItem::Experience(Experience {
            company: "NACA".into(),
            ..Default::default()
        }))
        .unwrap_err();

    assert_eq!(
        err.field_errors().unwrap().fields(),
        vec!["position", "startDate"]
    );
    assert!(session.document().experience().is_empty());
}

#[test]
fn remove_from_empty_collection_fails_and_changes_nothing() {
    let mut session = started_session();
    let before = session.document().revision();

    let err = session
        .remove_record(RecordCollection::Certifications, 0)
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::IndexOutOfRange);
    assert_eq!(session.document().revision(), before);
}

#[test]
fn skills_and_languages_forms_commit_on_submit() {
    let mut session = started_session();
    session.submit_personal_info(complete_patch()).unwrap();
    session.advance().unwrap();
    session.advance().unwrap();
    assert_eq!(session.current_step(), WizardStep::Skills);

    let mut skills = SkillsForm::new();
    skills.set_pending("Orbital mechanics");
    skills.add_pending().unwrap();
    skills.set_pending("FORTRAN");
    skills.add_pending().unwrap();
    skills.set_pending("FORTRAN");
    assert!(skills.add_pending().is_err());

    assert_eq!(
        session.submit_skills(skills).unwrap(),
        AdvanceOutcome::Moved(WizardStep::Languages)
    );

    let mut languages = LanguagesForm::new();
    languages.set_pending_language("English");
    languages.set_pending_proficiency(Proficiency::NativeFluent);
    languages.add_pending().unwrap();
    session.submit_languages(languages).unwrap();

    assert_eq!(session.document().skills(), ["Orbital mechanics", "FORTRAN"]);
    assert_eq!(
        session.document().languages(),
        [LanguageEntry {
            language: "English".into(),
            proficiency: Proficiency::NativeFluent,
        }]
    );
    assert_eq!(session.current_step(), WizardStep::Certifications);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn document_reset_does_not_move_the_wizard() {
    let mut session = started_session();
    session.submit_personal_info(complete_patch()).unwrap();
    session.submit_record(mit_education().into()).unwrap();

    session.apply(CvCommand::Reset).unwrap();

    assert!(session.document().is_empty());
    assert_eq!(session.current_step(), WizardStep::Education);
}

#[test]
fn start_over_returns_to_first_step_with_template_kept() {
    let mut session = started_session();
    session.submit_personal_info(complete_patch()).unwrap();

    session.start_over();

    assert!(session.document().is_empty());
    assert_eq!(session.current_step(), WizardStep::PersonalInfo);
    assert!(session.preview().is_ok());
}
