/**
 * Session Management and Signed Tokens
 *
 * This module issues and resolves the signed session tokens that prove a
 * prior successful authentication. A token is a JWT (HS256) carrying the
 * subject account ID, an issued-at, and an expiry.
 *
 * # Lifecycle
 *
 * - Issued on successful signup or login; the `remember` flag selects the
 *   long or short expiry window
 * - Resolved on every subsequent request; resolution is read-only and a
 *   token with a bad signature, bad shape, or past expiry resolves to
 *   "no session", never to a stale identity
 * - Revoked by handing the transport layer a cleared token (empty value,
 *   epoch expiry) to overwrite whatever the client holds
 *
 * The signing secret is injected at construction and lives for the process;
 * there is no rotation and no env lookup on the request path.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default expiry for sessions without the remember flag
pub const DEFAULT_SHORT_TTL_SECS: i64 = 60 * 60 * 24;
/// Default expiry for remembered sessions (30 days)
pub const DEFAULT_LONG_TTL_SECS: i64 = 60 * 60 * 24 * 30;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject account ID
    sub: String,
    /// Issued at time (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

/// An issued session credential, ready for cookie or header transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Opaque signed value; empty for a cleared token
    pub value: String,
    /// When the session stops resolving
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// The revocation instruction: empty payload, expiry in the past.
    ///
    /// Transports map this to an immediate cookie/session clear.
    pub fn cleared() -> Self {
        Self {
            value: String::new(),
            expires_at: DateTime::UNIX_EPOCH,
        }
    }

    /// Whether this token is the revocation instruction
    pub fn is_cleared(&self) -> bool {
        self.value.is_empty()
    }
}

/// Issues, signs, and resolves session tokens.
///
/// Holds the process-wide signing secret and the two TTL windows. Built
/// once at startup and shared read-only across requests.
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    short_ttl: Duration,
    long_ttl: Duration,
}

impl SessionManager {
    /// Create a manager with the default TTL windows
    pub fn new(secret: &str) -> Self {
        Self::with_ttls(
            secret,
            Duration::seconds(DEFAULT_SHORT_TTL_SECS),
            Duration::seconds(DEFAULT_LONG_TTL_SECS),
        )
    }

    /// Create a manager with explicit TTL windows
    pub fn with_ttls(secret: &str, short_ttl: Duration, long_ttl: Duration) -> Self {
        let mut validation = Validation::default();
        // Expiry is exact; no grace window for stale tokens
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            validation,
            short_ttl,
            long_ttl,
        }
    }

    /// Issue a signed token for a subject
    ///
    /// # Arguments
    /// * `subject` - Account ID the session names (the session does not own
    ///   the account, it only references it)
    /// * `remember` - Selects the long TTL when true, the short TTL otherwise
    pub fn issue(
        &self,
        subject: Uuid,
        remember: bool,
    ) -> Result<SessionToken, jsonwebtoken::errors::Error> {
        self.issue_at(subject, remember, Utc::now())
    }

    fn issue_at(
        &self,
        subject: Uuid,
        remember: bool,
        now: DateTime<Utc>,
    ) -> Result<SessionToken, jsonwebtoken::errors::Error> {
        let ttl = if remember { self.long_ttl } else { self.short_ttl };
        let expires_at = now + ttl;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let value = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(SessionToken { value, expires_at })
    }

    /// Resolve a token to its subject
    ///
    /// Verifies the signature and expiry; both must pass for the embedded
    /// subject to come back. Malformed, forged, or expired input resolves
    /// to `None` - resolution never raises.
    pub fn resolve(&self, token: &str) -> Option<Uuid> {
        let data = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!("Session token rejected: {:?}", e);
                return None;
            }
        };

        match Uuid::parse_str(&data.claims.sub) {
            Ok(subject) => Some(subject),
            Err(e) => {
                tracing::warn!("Session token carried a malformed subject: {:?}", e);
                None
            }
        }
    }

    /// Produce the cleared token that revokes the current session
    pub fn revoke(&self) -> SessionToken {
        SessionToken::cleared()
    }
}
