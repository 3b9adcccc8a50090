/**
 * Password Hashing Service
 *
 * One-way hashing and verification of account secrets using bcrypt.
 *
 * # Security
 *
 * - Hashing salts randomly, so the same input produces a different digest
 *   on every call; all of them verify against the original secret
 * - Verification is timing-safe inside bcrypt
 * - A malformed stored hash fails closed: verify returns false and logs,
 *   it never panics or surfaces parser detail to the caller
 * - `verify_dummy` gives the login path a constant-shaped cost when no
 *   account matches, so response timing does not reveal whether an email
 *   exists
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};
use std::sync::LazyLock;

/// Digest verified on the missing-account login path. Computed once per
/// process from a throwaway input; only its cost matters, never its content.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| {
    hash("inkpost-timing-equalizer", DEFAULT_COST).unwrap_or_else(|e| {
        tracing::warn!("Failed to precompute dummy hash: {:?}", e);
        String::new()
    })
});

/// Hash a secret with a random salt.
pub fn hash_password(secret: &str) -> Result<String, BcryptError> {
    hash(secret, DEFAULT_COST)
}

/// Verify a secret against a stored digest.
///
/// Fails closed: a corrupted or malformed digest is reported as a
/// non-match, with the parse failure going to the log only.
pub fn verify_password(secret: &str, hashed: &str) -> bool {
    match verify(secret, hashed) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Password hash verification failed: {:?}", e);
            false
        }
    }
}

/// Burn one verify cycle against the dummy digest.
///
/// Called when a login names an unknown email, so that path costs the same
/// as a real verification.
pub fn verify_dummy(secret: &str) {
    let _ = verify_password(secret, &DUMMY_HASH);
}
