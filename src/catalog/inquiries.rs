//! Inquiries

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{catalog::lenient, uuids::TypedUuid};

/// Inquiry UUID
pub type InquiryUuid = TypedUuid<Inquiry>;

/// Which contact form an inquiry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquirySection {
    Photography,
    Live2d,
}

impl InquirySection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photography => "photography",
            Self::Live2d => "live2d",
        }
    }
}

impl Display for InquirySection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A stored contact-form inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryUuid,
    pub name: String,
    pub email: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,

    pub section: InquirySection,
    pub created_at: Timestamp,

    #[serde(default)]
    pub is_read: bool,
}

/// A contact-form submission. This is also the notification payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    pub section: InquirySection,
}

impl NewInquiry {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Photography contact form: the extra fields are folded into the message body.
    pub fn photography(
        name: String,
        email: String,
        details: &PhotographyDetails,
        message: &str,
    ) -> Self {
        Self {
            name,
            email,
            message: format!(
                "Phone: {}\nProject Type: {}\nPreferred Date: {}\n\n{message}",
                details.phone, details.project_type, details.preferred_date
            ),
            section: InquirySection::Photography,
        }
    }

    /// Live2D commission form: the extra fields are folded into the message body.
    pub fn live2d(name: String, email: String, details: &Live2dDetails, message: &str) -> Self {
        Self {
            name,
            email,
            message: format!(
                "Discord: {}\nRig Type: {}\nDeadline: {}\nCan Stream: {}\nReference: {}\n\n{message}",
                details.discord,
                details.rig_type,
                details.deadline,
                details.can_stream,
                details.reference
            ),
            section: InquirySection::Live2d,
        }
    }
}

/// Extra fields on the photography contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotographyDetails {
    pub phone: String,
    pub project_type: String,
    pub preferred_date: String,
}

/// Extra fields on the Live2D commission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Live2dDetails {
    pub discord: String,
    pub rig_type: String,
    pub deadline: String,
    pub can_stream: String,
    pub reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photography_inquiry_folds_extra_fields_into_message() {
        let inquiry = NewInquiry::photography(
            "Aiko".to_string(),
            "aiko@example.com".to_string(),
            &PhotographyDetails {
                phone: "555-0100".to_string(),
                project_type: "Portrait".to_string(),
                preferred_date: "2025-06-01".to_string(),
            },
            "Golden hour please",
        );

        assert_eq!(
            inquiry.message,
            "Phone: 555-0100\nProject Type: Portrait\nPreferred Date: 2025-06-01\n\nGolden hour please"
        );
        assert_eq!(inquiry.section, InquirySection::Photography);
        assert!(inquiry.missing_fields().is_empty());
    }

    #[test]
    fn live2d_inquiry_folds_commission_fields_into_message() {
        let inquiry = NewInquiry::live2d(
            "Ren".to_string(),
            "ren@example.com".to_string(),
            &Live2dDetails {
                discord: "ren#0042".to_string(),
                rig_type: "Full body".to_string(),
                deadline: "2025-09-01".to_string(),
                can_stream: "yes".to_string(),
                reference: "https://ref.example/ren".to_string(),
            },
            "Need blinking and hair physics",
        );

        assert_eq!(
            inquiry.message,
            "Discord: ren#0042\nRig Type: Full body\nDeadline: 2025-09-01\nCan Stream: yes\nReference: https://ref.example/ren\n\nNeed blinking and hair physics"
        );
        assert_eq!(inquiry.section, InquirySection::Live2d);
    }

    #[test]
    fn blank_fields_are_reported() {
        let inquiry = NewInquiry {
            name: " ".to_string(),
            email: "a@b.c".to_string(),
            message: String::new(),
            section: InquirySection::Live2d,
        };

        assert_eq!(inquiry.missing_fields(), ["name", "message"]);
    }
}
