//! Shared domain enums (stored as SMALLINT codes)

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MemberRole
// ---------------------------------------------------------------------------

/// Membership tier. Cosmetic for the lending workflow; both tiers borrow
/// under the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum MemberRole {
    Regular = 0,
    Premium = 1,
}

impl From<i16> for MemberRole {
    fn from(v: i16) -> Self {
        match v {
            1 => MemberRole::Premium,
            _ => MemberRole::Regular,
        }
    }
}

impl From<MemberRole> for i16 {
    fn from(r: MemberRole) -> Self {
        r as i16
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MemberRole::Regular => "Regular",
            MemberRole::Premium => "Premium",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Staff account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    User = 0,
    Admin = 1,
}

impl From<i16> for UserRole {
    fn from(v: i16) -> Self {
        match v {
            1 => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<UserRole> for i16 {
    fn from(r: UserRole) -> Self {
        r as i16
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UserRole::User => "User",
            UserRole::Admin => "Administrator",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AccessLevel
// ---------------------------------------------------------------------------

/// Access level codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum AccessLevel {
    ReadOnly = 0,
    ReadWrite = 1,
    Manage = 2,
}

impl From<i16> for AccessLevel {
    fn from(v: i16) -> Self {
        match v {
            1 => AccessLevel::ReadWrite,
            2 => AccessLevel::Manage,
            _ => AccessLevel::ReadOnly,
        }
    }
}

impl From<AccessLevel> for i16 {
    fn from(a: AccessLevel) -> Self {
        a as i16
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AccessLevel::ReadOnly => "Read only",
            AccessLevel::ReadWrite => "Read/write",
            AccessLevel::Manage => "Manage",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for role in [MemberRole::Regular, MemberRole::Premium] {
            assert_eq!(MemberRole::from(i16::from(role)), role);
        }
        for role in [UserRole::User, UserRole::Admin] {
            assert_eq!(UserRole::from(i16::from(role)), role);
        }
        for level in [AccessLevel::ReadOnly, AccessLevel::ReadWrite, AccessLevel::Manage] {
            assert_eq!(AccessLevel::from(i16::from(level)), level);
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(MemberRole::from(42), MemberRole::Regular);
        assert_eq!(UserRole::from(-1), UserRole::User);
        assert_eq!(AccessLevel::from(99), AccessLevel::ReadOnly);
    }
}
