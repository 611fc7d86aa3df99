use crate::error::DbError;
use crate::store::SeedStore;

pub const USERS: &str = "users";

/// Collections the application expects, in creation order.
pub const COLLECTIONS: [&str; 6] = [
    USERS,
    "courses",
    "lessons",
    "tests",
    "qa_questions",
    "team_members",
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub created: Vec<String>,
    pub existing: Vec<String>,
}

/// Creates every collection in [`COLLECTIONS`] that is not already present.
/// Running it again against a seeded database creates nothing.
pub async fn ensure_collections<S>(store: &S) -> Result<CollectionReport, DbError>
where
    S: SeedStore + ?Sized,
{
    let present = store.collection_names().await?;
    let mut report = CollectionReport::default();

    for name in COLLECTIONS {
        if present.iter().any(|p| p == name) {
            log::debug!("Collection '{}' already exists", name);
            report.existing.push(name.to_string());
            continue;
        }

        store.create_collection(name).await?;
        log::info!("Created collection '{}'", name);
        report.created.push(name.to_string());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryStore;

    #[tokio::test]
    async fn creates_all_collections_on_empty_database() {
        let store = MemoryStore::new("islam_education");

        let report = ensure_collections(&store).await.unwrap();

        assert_eq!(report.created, COLLECTIONS.map(String::from).to_vec());
        assert!(report.existing.is_empty());
        assert_eq!(store.collection_names_sorted(), sorted(&COLLECTIONS));
    }

    #[tokio::test]
    async fn second_run_creates_nothing() {
        let store = MemoryStore::new("islam_education");
        ensure_collections(&store).await.unwrap();

        let report = ensure_collections(&store).await.unwrap();

        assert!(report.created.is_empty());
        assert_eq!(report.existing.len(), 6);
        assert_eq!(store.collection_names_sorted().len(), 6);
    }

    #[tokio::test]
    async fn only_missing_collections_are_created() {
        let store = MemoryStore::with_collections("islam_education", &["users", "lessons"]);

        let report = ensure_collections(&store).await.unwrap();

        assert_eq!(report.existing, vec!["users", "lessons"]);
        assert_eq!(
            report.created,
            vec!["courses", "tests", "qa_questions", "team_members"]
        );
    }

    #[tokio::test]
    async fn unrelated_collections_are_left_alone() {
        let store = MemoryStore::with_collections("islam_education", &["audit_log"]);

        ensure_collections(&store).await.unwrap();

        let names = store.collection_names_sorted();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"audit_log".to_string()));
    }

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        v.sort();
        v
    }
}
