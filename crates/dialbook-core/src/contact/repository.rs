//! Contact storage repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use tracing::debug;

use super::model::{Contact, ContactDraft, ContactId};
use crate::Result;

/// Repository for contact storage and retrieval.
///
/// The repository performs no uniqueness checks on `name`; callers verify
/// name availability with [`ContactRepository::get_by_name`] before writing.
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    /// Create a new repository with the given database path.
    ///
    /// Creates the database and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create an in-memory repository for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Initialize database schema.
    ///
    /// AUTOINCREMENT keeps deleted IDs from being reassigned.
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                phone TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Create index for faster name lookups and searches
        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_contacts_name ON contacts(name COLLATE NOCASE)
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get all contacts in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<Contact>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, phone
            FROM contacts
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_contact).collect())
    }

    /// Get a contact by ID.
    ///
    /// Returns `None` when no contact has the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, id: ContactId) -> Result<Option<Contact>> {
        let row = sqlx::query(
            r"
            SELECT id, name, phone
            FROM contacts
            WHERE id = ?
            ",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_contact))
    }

    /// Get a contact by exact name, compared case-insensitively.
    ///
    /// Used for uniqueness checks before create and update.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Contact>> {
        let row = sqlx::query(
            r"
            SELECT id, name, phone
            FROM contacts
            WHERE LOWER(name) = LOWER(?)
            LIMIT 1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_contact))
    }

    /// Persist a new contact and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn create(&self, draft: &ContactDraft) -> Result<Contact> {
        let result = sqlx::query(
            r"
            INSERT INTO contacts (name, phone)
            VALUES (?, ?)
            ",
        )
        .bind(&draft.name)
        .bind(&draft.phone)
        .execute(&self.pool)
        .await?;

        let id = ContactId::new(result.last_insert_rowid());
        debug!("Created contact {id}: {}", draft.name);

        Ok(Contact {
            id,
            name: draft.name.clone(),
            phone: draft.phone.clone(),
        })
    }

    /// Overwrite name and phone of an existing contact.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(&self, contact: &Contact) -> Result<()> {
        sqlx::query(
            r"
            UPDATE contacts
            SET name = ?, phone = ?
            WHERE id = ?
            ",
        )
        .bind(&contact.name)
        .bind(&contact.phone)
        .bind(contact.id.0)
        .execute(&self.pool)
        .await?;

        debug!("Updated contact {}", contact.id);
        Ok(())
    }

    /// Delete a contact. Deleting an absent ID is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(&self, id: ContactId) -> Result<()> {
        sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        debug!("Deleted contact {id}");
        Ok(())
    }

    /// Search contacts whose name contains a fragment (case-insensitive).
    ///
    /// The fragment is matched literally: `%` and `_` in it are ordinary
    /// characters, not LIKE wildcards. Blank fragments are a caller-side
    /// precondition; the repository treats them literally (an empty
    /// pattern matches every row).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn search(&self, fragment: &str) -> Result<Vec<Contact>> {
        let pattern = format!("%{}%", escape_like(&fragment.to_lowercase()));

        let rows = sqlx::query(
            r"
            SELECT id, name, phone
            FROM contacts
            WHERE LOWER(name) LIKE ? ESCAPE '\'
            ORDER BY id ASC
            ",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_contact).collect())
    }
}

/// Escape LIKE metacharacters so a fragment matches as a literal substring.
fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Convert a database row into a contact.
fn row_to_contact(row: &SqliteRow) -> Contact {
    Contact {
        id: ContactId::new(row.get("id")),
        name: row.get("name"),
        phone: row.get("phone"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn seed(repo: &ContactRepository, name: &str, phone: &str) -> Contact {
        repo.create(&ContactDraft::new(name, phone)).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = ContactRepository::in_memory().await.unwrap();

        let created = seed(&repo, "Alice", "111").await;
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_absent_id() {
        let repo = ContactRepository::in_memory().await.unwrap();

        assert_eq!(repo.get(ContactId::new(42)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_by_name_case_insensitive() {
        let repo = ContactRepository::in_memory().await.unwrap();

        let created = seed(&repo, "Alice", "111").await;

        let found = repo.get_by_name("ALICE").await.unwrap();
        assert_eq!(found, Some(created));

        assert_eq!(repo.get_by_name("Bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_in_storage_order() {
        let repo = ContactRepository::in_memory().await.unwrap();

        seed(&repo, "Charlie", "333").await;
        seed(&repo, "Alice", "111").await;

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Charlie");
        assert_eq!(all[1].name, "Alice");
    }

    #[tokio::test]
    async fn test_update_persists() {
        let repo = ContactRepository::in_memory().await.unwrap();

        let mut contact = seed(&repo, "Alice", "111").await;
        contact.name = "Alicia".to_string();
        contact.phone = "333".to_string();
        repo.update(&contact).await.unwrap();

        let fetched = repo.get(contact.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Alicia");
        assert_eq!(fetched.phone, "333");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = ContactRepository::in_memory().await.unwrap();

        let contact = seed(&repo, "Alice", "111").await;
        repo.delete(contact.id).await.unwrap();
        assert_eq!(repo.get(contact.id).await.unwrap(), None);

        // Deleting again must not fail or change anything
        repo.delete(contact.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = ContactRepository::in_memory().await.unwrap();

        let first = seed(&repo, "Alice", "111").await;
        repo.delete(first.id).await.unwrap();

        let second = seed(&repo, "Bob", "222").await;
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_search_substring_case_insensitive() {
        let repo = ContactRepository::in_memory().await.unwrap();

        seed(&repo, "Ana", "1").await;
        seed(&repo, "Anderson", "2").await;
        seed(&repo, "Banana", "3").await;
        seed(&repo, "Carol", "4").await;

        let hits = repo.search("an").await.unwrap();
        assert!(hits.iter().all(|c| c.matches("an")));
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Anderson", "Banana"]);

        let hits = repo.search("And").await.unwrap();
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Anderson"]);

        assert!(repo.search("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_like_wildcards_as_literals() {
        let repo = ContactRepository::in_memory().await.unwrap();

        seed(&repo, "Ana", "1").await;
        seed(&repo, "100% Taxi", "2").await;
        seed(&repo, "Dial_Tone", "3").await;

        let hits = repo.search("%").await.unwrap();
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["100% Taxi"]);

        let hits = repo.search("0% T").await.unwrap();
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["100% Taxi"]);

        let hits = repo.search("_").await.unwrap();
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Dial_Tone"]);

        assert!(repo.search("\\").await.unwrap().is_empty());
    }
}
