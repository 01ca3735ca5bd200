//! Partner application domain: profile entity and the approval state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// Partner application status with explicit transitions:
/// pending -> approved | rejected, approved <-> suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl PartnerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerStatus::Pending => "pending",
            PartnerStatus::Approved => "approved",
            PartnerStatus::Rejected => "rejected",
            PartnerStatus::Suspended => "suspended",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PartnerStatus::Pending),
            "approved" => Some(PartnerStatus::Approved),
            "rejected" => Some(PartnerStatus::Rejected),
            "suspended" => Some(PartnerStatus::Suspended),
            _ => None,
        }
    }

    /// Validate a transition to `next`, returning the target status.
    ///
    /// Suspend requires the current status to be approved, so a repeated
    /// suspend fails instead of silently rewriting the same status.
    pub fn transition(self, next: PartnerStatus) -> AppResult<PartnerStatus> {
        let allowed = match (self, next) {
            (PartnerStatus::Pending, PartnerStatus::Approved)
            | (PartnerStatus::Pending, PartnerStatus::Rejected)
            | (PartnerStatus::Approved, PartnerStatus::Suspended)
            | (PartnerStatus::Suspended, PartnerStatus::Approved) => true,
            _ => false,
        };

        if allowed {
            Ok(next)
        } else {
            Err(AppError::validation(format!(
                "Status kemitraan tidak dapat diubah dari '{}' ke '{}'",
                self, next
            )))
        }
    }
}

impl std::fmt::Display for PartnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Partner profile linking a user to an outlet, with approval audit fields.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PartnerProfile {
    pub id: i64,
    pub user_id: i64,
    pub outlet_id: i64,
    pub status: PartnerStatus,
    pub business_name: String,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_decided() {
        assert!(PartnerStatus::Pending
            .transition(PartnerStatus::Approved)
            .is_ok());
        assert!(PartnerStatus::Pending
            .transition(PartnerStatus::Rejected)
            .is_ok());
    }

    #[test]
    fn approved_and_suspended_toggle() {
        assert!(PartnerStatus::Approved
            .transition(PartnerStatus::Suspended)
            .is_ok());
        assert!(PartnerStatus::Suspended
            .transition(PartnerStatus::Approved)
            .is_ok());
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        assert!(PartnerStatus::Suspended
            .transition(PartnerStatus::Suspended)
            .is_err());
        assert!(PartnerStatus::Rejected
            .transition(PartnerStatus::Approved)
            .is_err());
        assert!(PartnerStatus::Approved
            .transition(PartnerStatus::Approved)
            .is_err());
    }
}
