use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnquiryType {
    WalkIn,
    ByPhone,
}

impl EnquiryType {
    pub const ALL: [EnquiryType; 2] = [EnquiryType::WalkIn, EnquiryType::ByPhone];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryType::WalkIn => "walk-in",
            EnquiryType::ByPhone => "by-phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnquiryType::WalkIn => "Walk-in",
            EnquiryType::ByPhone => "By phone",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// One customer contact. Not tied to any room.
#[derive(Debug, Clone, PartialEq)]
pub struct Enquiry {
    pub id: i64,
    pub user_id: Option<String>,
    pub enquiry_type: EnquiryType,
    pub booking_date: NaiveDate,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

/// Fields staff can set when logging or editing an enquiry.
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryDraft {
    pub enquiry_type: EnquiryType,
    pub booking_date: NaiveDate,
    pub notes: String,
}
