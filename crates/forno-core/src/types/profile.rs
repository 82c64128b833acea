//! Customer profile and saved addresses. Keyed by phone number: there is
//! no login; the phone is the customer identity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub phone: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAddress {
    pub id: String,
    pub user_profile_id: String,
    pub title: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub is_default: bool,
}
