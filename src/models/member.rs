//! Member model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{AccessLevel, MemberRole};

/// Member model from database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub deleted: bool,
    pub role: MemberRole,
    pub access_level: AccessLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// A member may borrow only while active and not soft-deleted.
    pub fn is_eligible(&self) -> bool {
        self.active && !self.deleted
    }
}

/// New member to insert; starts active and not deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub role: MemberRole,
    pub access_level: AccessLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(active: bool, deleted: bool) -> Member {
        Member {
            id: 1,
            name: "Ada".to_string(),
            active,
            deleted,
            role: MemberRole::Regular,
            access_level: AccessLevel::ReadOnly,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn eligible_only_when_active_and_not_deleted() {
        assert!(member(true, false).is_eligible());
        assert!(!member(false, false).is_eligible());
        assert!(!member(true, true).is_eligible());
        assert!(!member(false, true).is_eligible());
    }
}
