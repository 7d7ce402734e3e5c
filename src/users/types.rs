//! Types for user management

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A StyleSync user account.
///
/// Used to scope wardrobe and recommendation requests; the preference bags
/// are opaque to the client and only some endpoints include them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque, unique user identifier
    pub user_id: String,

    pub email: String,

    #[serde(default)]
    pub full_name: Option<String>,

    /// ISO-8601 creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_preferences: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_preferences: Option<Value>,
}

/// Response to a test-user creation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestUserResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub user_id: String,

    pub email: String,

    /// Absent when the user already existed
    #[serde(default)]
    pub name: Option<String>,
}

/// Envelope of the user listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserListResponse {
    pub success: bool,

    pub users: Vec<User>,

    pub total: u64,
}
