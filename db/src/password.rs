use crate::error::DbError;

/// Hashes `plain` with bcrypt (`$2b$`) and a fresh random salt.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, DbError> {
    Ok(bcrypt::hash(plain, cost)?)
}

/// Checks `plain` against a stored bcrypt hash. A malformed hash is an error.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, DbError> {
    Ok(bcrypt::verify(plain, hash)?)
}
