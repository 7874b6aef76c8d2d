//! Member account types.

use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Account state of a member.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account is in good standing
    #[default]
    Active,
    /// Account was closed by the member
    Inactive,
    /// Account was locked by an operator
    Suspended,
}

impl UserStatus {
    /// Check if the account can sign in
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A registered member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct User {
    /// Stable serial number assigned at registration.
    pub member_serial_number: i64,

    /// External identity provider subject.
    pub google_id: String,

    /// Display name chosen by the member.
    pub name: String,

    /// Birth date used for age-adjusted recommendations.
    pub birth_date: Date,

    /// Free-form occupation label.
    pub occupation: String,

    /// Timestamp when the account was created.
    pub created_at: Timestamp,

    /// Timestamp when the account was last modified.
    pub updated_at: Timestamp,

    /// Timestamp of the most recent sign-in, if any.
    pub last_login_at: Option<Timestamp>,
}

impl User {
    /// Creates a new member record.
    pub fn new(
        member_serial_number: i64,
        google_id: impl Into<String>,
        name: impl Into<String>,
        birth_date: Date,
        occupation: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            member_serial_number,
            google_id: google_id.into(),
            name: name.into(),
            birth_date,
            occupation: occupation.into(),
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Records a sign-in at the given timestamp.
    pub fn with_last_login(mut self, at: Timestamp) -> Self {
        self.last_login_at = Some(at);
        self
    }

    /// Age in completed years on the given day.
    #[must_use]
    pub fn age_on(&self, today: Date) -> i16 {
        let mut age = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age.max(0)
    }
}

/// Occupation lookup entry used for occupation-aware recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Occupation {
    /// Stable occupation code.
    pub occupation_code: String,
    /// Human readable occupation name.
    pub occupation_name: String,
    /// Broad occupation category.
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(birth_date: Date) -> User {
        User::new(1001, "google-sub-1", "Jamie", birth_date, "developer")
    }

    #[test]
    fn test_user_status_predicates() {
        assert!(UserStatus::Active.is_active());
        assert!(!UserStatus::Inactive.is_active());
        assert!(!UserStatus::Suspended.is_active());
    }

    #[test]
    fn test_user_status_serialization() {
        let serialized = serde_json::to_string(&UserStatus::Suspended).unwrap();
        assert_eq!(serialized, "\"suspended\"");
    }

    #[test]
    fn test_age_after_birthday() {
        let user = test_user(Date::constant(1990, 3, 10));
        assert_eq!(user.age_on(Date::constant(2025, 6, 1)), 35);
    }

    #[test]
    fn test_age_before_birthday() {
        let user = test_user(Date::constant(1990, 9, 20));
        assert_eq!(user.age_on(Date::constant(2025, 6, 1)), 34);
    }

    #[test]
    fn test_age_on_birthday() {
        let user = test_user(Date::constant(1990, 6, 1));
        assert_eq!(user.age_on(Date::constant(2025, 6, 1)), 35);
    }

    #[test]
    fn test_age_never_negative() {
        let user = test_user(Date::constant(2030, 1, 1));
        assert_eq!(user.age_on(Date::constant(2025, 6, 1)), 0);
    }

    #[test]
    fn test_last_login_round_trip() {
        let at = Timestamp::now();
        let user = test_user(Date::constant(1990, 1, 1)).with_last_login(at);

        assert_eq!(user.last_login_at, Some(at));
    }
}
