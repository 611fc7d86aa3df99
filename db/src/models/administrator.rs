use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DbError;
use crate::password::hash_password;

pub const DEFAULT_ID: &str = "admin-user-id";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_EMAIL: &str = "admin@islam-education.com";
pub const DEFAULT_PASSWORD: &str = "admin123";
pub const DEFAULT_FULL_NAME: &str = "Администратор";

/// Represents the privileged account stored in the `users` collection.
///
/// The server-assigned `_id` is not part of the model and is ignored on read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Administrator {
    /// Application-level identifier. Not backed by a unique index.
    pub id: String,
    pub username: String,
    pub email: String,
    /// Salted bcrypt hash, never the plaintext.
    pub password: String,
    /// Whether the user has admin privileges.
    pub is_admin: bool,
    pub full_name: String,
    /// Timestamp when the record was inserted.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Timestamp when the record was last updated.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Administrator {
    /// Builds the default administrator, hashing the default password at
    /// `cost`. Both timestamps are read after hashing, right before the
    /// record is handed to the store.
    pub fn seeded(cost: u32) -> Result<Self, DbError> {
        let password = hash_password(DEFAULT_PASSWORD, cost)?;
        let now = insertion_time();

        Ok(Self {
            id: DEFAULT_ID.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password,
            is_admin: true,
            full_name: DEFAULT_FULL_NAME.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Current time truncated to millisecond precision, the resolution BSON
/// datetimes are stored at.
pub fn insertion_time() -> DateTime<Utc> {
    bson::DateTime::now().to_chrono()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::verify_password;
    use bson::Bson;

    #[test]
    fn seeded_record_carries_default_fields() {
        let before = insertion_time();
        let admin = Administrator::seeded(4).unwrap();

        assert_eq!(admin.id, "admin-user-id");
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.email, "admin@islam-education.com");
        assert_eq!(admin.full_name, "Администратор");
        assert!(admin.is_admin);
        assert!(admin.created_at >= before);
        assert_eq!(admin.created_at, admin.updated_at);
    }

    #[test]
    fn seeded_password_is_hashed() {
        let admin = Administrator::seeded(4).unwrap();

        assert_ne!(admin.password, DEFAULT_PASSWORD);
        assert!(verify_password(DEFAULT_PASSWORD, &admin.password).unwrap());
    }

    #[test]
    fn timestamps_encode_as_bson_datetimes() {
        let admin = Administrator::seeded(4).unwrap();
        let doc = bson::to_document(&admin).unwrap();

        assert!(matches!(doc.get("created_at"), Some(Bson::DateTime(_))));
        assert!(matches!(doc.get("updated_at"), Some(Bson::DateTime(_))));
        assert!(doc.get_bool("is_admin").unwrap());
    }

    #[test]
    fn decoding_ignores_server_object_id() {
        let admin = Administrator::seeded(4).unwrap();
        let mut doc = bson::to_document(&admin).unwrap();
        doc.insert("_id", bson::oid::ObjectId::new());

        let decoded: Administrator = bson::from_document(doc).unwrap();
        assert_eq!(decoded, admin);
    }

    #[test]
    fn timestamps_are_taken_after_hashing() {
        let before = insertion_time();
        let admin = Administrator::seeded(bcrypt::DEFAULT_COST).unwrap();
        let after = insertion_time();

        assert!(admin.created_at >= before);
        assert!((after - admin.created_at).num_milliseconds() < 200);
    }

    #[test]
    fn insertion_time_has_millisecond_precision() {
        let now = insertion_time();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
