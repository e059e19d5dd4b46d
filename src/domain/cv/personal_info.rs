//! Personal info record and its merge patch.

use serde::{Deserialize, Serialize};

/// Contact block and professional summary at the top of a CV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub summary: String,
}

impl PersonalInfo {
    /// Returns a copy with `patch` merged over it.
    pub fn merged(&self, patch: &PersonalInfoPatch) -> PersonalInfo {
        let mut next = self.clone();
        next.merge(patch.clone());
        next
    }

    /// Overwrites the fields present in `patch`; absent fields are kept.
    ///
    /// Returns true if any field actually changed.
    pub fn merge(&mut self, patch: PersonalInfoPatch) -> bool {
        let mut changed = false;
        let mut apply = |slot: &mut String, value: Option<String>| {
            if let Some(value) = value {
                if *slot != value {
                    *slot = value;
                    changed = true;
                }
            }
        };
        apply(&mut self.full_name, patch.full_name);
        apply(&mut self.email, patch.email);
        apply(&mut self.phone, patch.phone);
        apply(&mut self.address, patch.address);
        apply(&mut self.summary, patch.summary);
        changed
    }
}

/// Partial update for [`PersonalInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl PersonalInfoPatch {
    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn summary(mut self, value: impl Into<String>) -> Self {
        self.summary = Some(value.into());
        self
    }

    /// True when the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.summary.is_none()
    }
}

impl From<PersonalInfo> for PersonalInfoPatch {
    fn from(info: PersonalInfo) -> Self {
        Self {
            full_name: Some(info.full_name),
            email: Some(info.email),
            phone: Some(info.phone),
            address: Some(info.address),
            summary: Some(info.summary),
        }
    }
}
