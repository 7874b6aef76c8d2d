//! User account response types.

use jiff::Timestamp;
use jiff::civil::Date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vitalsync_core::types::{User, UserStatus};

/// Confirmation returned after registering a new member.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserRegistrationResponse {
    /// Identifier assigned to the new member.
    pub user_id: i64,
    /// Human-readable confirmation message.
    pub message: String,
    /// Account status the member starts in.
    pub status: UserStatus,
}

/// Profile view of a registered member.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserProfileResponse {
    /// Member identifier.
    pub user_id: i64,
    /// Display name.
    pub name: String,
    /// Age in completed years as of the profile request.
    pub age: i16,
    /// Occupation name used for personalized guidance.
    pub occupation: String,
    /// Moment the account was created.
    pub registered_at: Timestamp,
    /// Moment of the most recent login, if any.
    pub last_login_at: Option<Timestamp>,
}

impl UserProfileResponse {
    /// Builds a profile view from a member record.
    pub fn from_user(user: &User, today: Date) -> Self {
        Self {
            user_id: user.member_serial_number,
            name: user.name.clone(),
            age: user.age_on(today),
            occupation: user.occupation.clone(),
            registered_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Token pair issued after a successful login.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LoginResponse {
    /// Short-lived bearer token.
    pub access_token: String,
    /// Token used to obtain a fresh access token.
    pub refresh_token: String,
    /// Whether this login created the account.
    pub is_new_user: bool,
    /// Member identifier.
    pub user_id: i64,
    /// Access token lifetime in seconds.
    pub expires_in: u32,
}
