/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, login, logout, and me
 * handlers. Each request is the typed form of one operation, deserialized
 * and validated once at the boundary.
 */

use serde::{Deserialize, Serialize};

use crate::auth::sessions::SessionToken;
use crate::auth::users::Account;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// Email address (any casing; normalized before storage)
    pub email: String,
    /// Password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Password (verified against the stored hash)
    pub password: String,
    /// Selects the long-lived session window when true
    #[serde(default)]
    pub remember: bool,
}

/// Auth response
///
/// Returned by signup and login. Carries the signed session token and the
/// account it names, without sensitive data.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// Session token for subsequent requests
    pub token: SessionToken,
    /// Account information (never includes the password hash)
    pub account: AccountResponse,
}

/// Account response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccountResponse {
    /// Account ID (UUID)
    pub id: String,
    /// Email address
    pub email: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.clone(),
        }
    }
}
