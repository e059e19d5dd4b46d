//! Rule tables for every record the forms submit.

use crate::domain::cv::{
    Certification, Education, Experience, LanguageEntry, PersonalInfo, Project, RecordItem,
};
use crate::domain::foundation::ValidationError;

use super::rules::{self, FieldRule, FieldSpec};
use super::FieldErrors;

use FieldRule::*;

pub const PERSONAL_INFO_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        field: "fullName",
        rules: &[
            Required("Full name is required"),
            MinChars(2, "Name is too short"),
        ],
    },
    FieldSpec {
        field: "email",
        rules: &[Required("Email is required"), Email("Invalid email")],
    },
    FieldSpec {
        field: "phone",
        rules: &[
            Required("Phone number is required"),
            Digits(10, "Phone number must be 10 digits"),
        ],
    },
    FieldSpec {
        field: "address",
        rules: &[Required("Address is required")],
    },
    FieldSpec {
        field: "summary",
        rules: &[
            Required("Professional summary is required"),
            MinChars(50, "Summary should be at least 50 characters"),
            MaxChars(500, "Summary should not exceed 500 characters"),
        ],
    },
];

pub const EDUCATION_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        field: "institution",
        rules: &[Required("Institution name is required")],
    },
    FieldSpec {
        field: "degree",
        rules: &[Required("Degree is required")],
    },
    FieldSpec {
        field: "fieldOfStudy",
        rules: &[Required("Field of study is required")],
    },
    FieldSpec {
        field: "startDate",
        rules: &[
            Required("Start date is required"),
            MonthYear("Start date must be MM/YYYY"),
        ],
    },
    FieldSpec {
        field: "endDate",
        rules: &[MonthYearOrPresent("End date must be MM/YYYY or Present")],
    },
];

pub const EXPERIENCE_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        field: "company",
        rules: &[Required("Company name is required")],
    },
    FieldSpec {
        field: "position",
        rules: &[Required("Position is required")],
    },
    FieldSpec {
        field: "startDate",
        rules: &[
            Required("Start date is required"),
            MonthYear("Start date must be MM/YYYY"),
        ],
    },
    FieldSpec {
        field: "endDate",
        rules: &[MonthYearOrPresent("End date must be MM/YYYY or Present")],
    },
];

pub const PROJECT_SCHEMA: &[FieldSpec] = &[FieldSpec {
    field: "name",
    rules: &[Required("Project name is required")],
}];

pub const CERTIFICATION_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        field: "name",
        rules: &[Required("Certification name is required")],
    },
    FieldSpec {
        field: "issuer",
        rules: &[Required("Issuer is required")],
    },
    FieldSpec {
        field: "date",
        rules: &[Required("Date is required"), MonthYear("Date must be MM/YYYY")],
    },
    FieldSpec {
        field: "expiry",
        rules: &[MonthYear("Expiry must be MM/YYYY")],
    },
];

pub const LANGUAGE_SCHEMA: &[FieldSpec] = &[FieldSpec {
    field: "language",
    rules: &[Required("Language name is required")],
}];

/// Runs a schema table over `(field, value)` pairs.
///
/// Fields missing from `values` are checked as blank.
pub fn check_fields(schema: &[FieldSpec], values: &[(&str, &str)]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for spec in schema {
        let value = values
            .iter()
            .find(|(name, _)| *name == spec.field)
            .map(|(_, v)| *v)
            .unwrap_or("");
        if let Some(err) = spec.rules.iter().find_map(|r| r.check(spec.field, value).err()) {
            errors.push(err);
        }
    }
    errors
}

/// Field-level validation of a record submitted by a form.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

impl Validate for PersonalInfo {
    fn validate(&self) -> Result<(), FieldErrors> {
        check_fields(
            PERSONAL_INFO_SCHEMA,
            &[
                ("fullName", self.full_name.as_str()),
                ("email", self.email.as_str()),
                ("phone", self.phone.as_str()),
                ("address", self.address.as_str()),
                ("summary", self.summary.as_str()),
            ],
        )
        .into_result()
    }
}

impl Validate for Education {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = check_fields(
            EDUCATION_SCHEMA,
            &[
                ("institution", self.institution.as_str()),
                ("degree", self.degree.as_str()),
                ("fieldOfStudy", self.field_of_study.as_str()),
                ("startDate", self.start_date.as_str()),
                ("endDate", self.end_date.as_deref().unwrap_or("")),
            ],
        );
        check_chronology(&mut errors, &self.start_date, self.end_date.as_deref());
        errors.into_result()
    }
}

impl Validate for Experience {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = check_fields(
            EXPERIENCE_SCHEMA,
            &[
                ("company", self.company.as_str()),
                ("position", self.position.as_str()),
                ("startDate", self.start_date.as_str()),
                ("endDate", self.end_date.as_deref().unwrap_or("")),
            ],
        );
        check_chronology(&mut errors, &self.start_date, self.end_date.as_deref());
        errors.into_result()
    }
}

impl Validate for Project {
    fn validate(&self) -> Result<(), FieldErrors> {
        check_fields(PROJECT_SCHEMA, &[("name", self.name.as_str())]).into_result()
    }
}

impl Validate for Certification {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = check_fields(
            CERTIFICATION_SCHEMA,
            &[
                ("name", self.name.as_str()),
                ("issuer", self.issuer.as_str()),
                ("date", self.date.as_str()),
                ("expiry", self.expiry.as_deref().unwrap_or("")),
            ],
        );
        if let (Ok(issued), Some(Ok(expiry))) = (
            self.date.parse::<rules::MonthYear>(),
            self.expiry.as_deref().map(str::parse::<rules::MonthYear>),
        ) {
            if expiry < issued {
                errors.push(ValidationError::invalid_format(
                    "expiry",
                    "Expiry cannot be before the issue date",
                ));
            }
        }
        errors.into_result()
    }
}

impl Validate for LanguageEntry {
    fn validate(&self) -> Result<(), FieldErrors> {
        check_fields(LANGUAGE_SCHEMA, &[("language", self.language.as_str())]).into_result()
    }
}

impl Validate for RecordItem {
    fn validate(&self) -> Result<(), FieldErrors> {
        match self {
            RecordItem::Education(r) => r.validate(),
            RecordItem::Experience(r) => r.validate(),
            RecordItem::Projects(r) => r.validate(),
            RecordItem::Certifications(r) => r.validate(),
        }
    }
}

/// Flags an end date that precedes the start date. Only runs when both
/// dates already passed their format rules.
fn check_chronology(errors: &mut FieldErrors, start: &str, end: Option<&str>) {
    let (Ok(start), Some(Ok(end))) = (start.parse::<rules::MonthYear>(), end.map(str::parse::<rules::MonthYear>))
    else {
        return;
    };
    if end < start {
        errors.push(ValidationError::invalid_format(
            "endDate",
            "End date cannot be before start date",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    fn valid_personal_info() -> PersonalInfo {
        PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0123456789".to_string(),
            address: "12 St James's Square, London".to_string(),
            summary: "Mathematician and writer, known for work on the Analytical Engine."
                .to_string(),
        }
    }

    #[test]
    fn valid_personal_info_passes() {
        assert!(valid_personal_info().validate().is_ok());
    }

    #[test]
    fn empty_personal_info_fails_every_field() {
        let errors = PersonalInfo::default().validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec!["fullName", "email", "phone", "address", "summary"]
        );
        assert_eq!(errors.get("email").unwrap().message(), "Email is required");
    }

    #[test]
    fn short_phone_reports_digit_message() {
        let info = PersonalInfo {
            phone: "12345".to_string(),
            ..valid_personal_info()
        };
        let errors = info.validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["phone"]);
        assert_eq!(
            errors.get("phone").unwrap().message(),
            "Phone number must be 10 digits"
        );
    }

    #[test]
    fn summary_bounds_are_inclusive() {
        let at_min = PersonalInfo {
            summary: "a".repeat(50),
            ..valid_personal_info()
        };
        let at_max = PersonalInfo {
            summary: "a".repeat(500),
            ..valid_personal_info()
        };
        let over = PersonalInfo {
            summary: "a".repeat(501),
            ..valid_personal_info()
        };
        assert!(at_min.validate().is_ok());
        assert!(at_max.validate().is_ok());
        assert!(matches!(
            over.validate().unwrap_err().get("summary"),
            Some(ValidationError::TooLong { max: 500, .. })
        ));
    }

    #[test]
    fn education_requires_core_fields() {
        let errors = Education::default().validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec!["institution", "degree", "fieldOfStudy", "startDate"]
        );
    }

    #[test]
    fn education_end_date_may_be_present() {
        let edu = Education {
            institution: "MIT".into(),
            degree: "BSc".into(),
            field_of_study: "CS".into(),
            start_date: "09/2018".into(),
            end_date: Some("Present".into()),
            ..Default::default()
        };
        assert!(edu.validate().is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let job = Experience {
            company: "Acme".into(),
            position: "Engineer".into(),
            start_date: "05/2021".into(),
            end_date: Some("04/2021".into()),
            ..Default::default()
        };
        let errors = job.validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["endDate"]);
    }

    #[test]
    fn certification_checks_dates() {
        let cert = Certification {
            name: "CKA".into(),
            issuer: "CNCF".into(),
            date: "2023".into(),
            ..Default::default()
        };
        let errors = cert.validate().unwrap_err();
        assert_eq!(errors.get("date").unwrap().message(), "Date must be MM/YYYY");

        let expired_first = Certification {
            date: "01/2023".into(),
            expiry: Some("01/2022".into()),
            ..cert
        };
        assert!(expired_first.validate().unwrap_err().contains("expiry"));
    }

    #[test]
    fn record_item_delegates_to_record_schema() {
        let item = RecordItem::Projects(Project::default());
        assert!(item.validate().unwrap_err().contains("name"));
    }

    #[test]
    fn check_fields_treats_missing_values_as_blank() {
        let errors = check_fields(LANGUAGE_SCHEMA, &[]);
        assert!(errors.contains("language"));
    }
}
