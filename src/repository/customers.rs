//! Customers repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, UpdateCustomer},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Sqlite>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Create the customers table if it does not exist yet.
    ///
    /// AUTOINCREMENT means ids of deleted rows are never handed out again.
    pub async fn init_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id    INTEGER PRIMARY KEY AUTOINCREMENT,
                name  TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a new customer and return the stored row with its assigned id
    pub async fn create(&self, data: &CreateCustomer) -> AppResult<Customer> {
        let row = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (name, email, phone) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all customers, optionally filtered by a case-insensitive
    /// substring over name, email and phone. Order is storage order.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Customer>> {
        let rows = match search {
            Some(term) if !term.is_empty() => {
                let pattern = format!("%{}%", term.to_lowercase());
                sqlx::query_as::<_, Customer>(
                    r#"
                    SELECT * FROM customers
                    WHERE LOWER(name) LIKE ? OR LOWER(email) LIKE ? OR LOWER(phone) LIKE ?
                    "#,
                )
                .bind(&pattern)
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Customer>("SELECT * FROM customers")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Get a customer by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("record not found".to_string()))
    }

    /// Apply a partial update to an existing customer.
    ///
    /// Patch fields that are absent, or present but empty, leave the stored
    /// value unchanged. The existence check and the write share one
    /// transaction; the transaction rolls back on drop if anything fails.
    pub async fn update(&self, id: i64, data: &UpdateCustomer) -> AppResult<Customer> {
        let mut tx = self.pool.begin().await?;

        let mut customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("record not found".to_string()))?;

        if let Some(ref name) = data.name {
            if !name.is_empty() {
                customer.name = name.clone();
            }
        }
        if let Some(ref email) = data.email {
            if !email.is_empty() {
                customer.email = email.clone();
            }
        }
        if let Some(ref phone) = data.phone {
            if !phone.is_empty() {
                customer.phone = Some(phone.clone());
            }
        }

        sqlx::query("UPDATE customers SET name = ?, email = ?, phone = ? WHERE id = ?")
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(customer)
    }

    /// Delete a customer permanently
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound("record not found".to_string()));
        }

        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_repo() -> CustomersRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        let repo = CustomersRepository::new(pool);
        repo.init_schema().await.expect("schema init");
        repo
    }

    fn customer(name: &str, email: &str, phone: Option<&str>) -> CreateCustomer {
        CreateCustomer {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(str::to_string),
        }
    }

    fn assert_not_found(err: AppError) {
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "record not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_roundtrips() {
        let repo = test_repo().await;

        let created = repo
            .create(&customer("Carla", "carla@x.com", Some("555-0100")))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Carla");
        assert_eq!(created.email, "carla@x.com");
        assert_eq!(created.phone.as_deref(), Some("555-0100"));

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.email, created.email);
        assert_eq!(fetched.phone, created.phone);
    }

    #[tokio::test]
    async fn test_duplicate_names_and_emails_are_allowed() {
        let repo = test_repo().await;

        let first = repo.create(&customer("Ana", "ana@x.com", None)).await.unwrap();
        let second = repo.create(&customer("Ana", "ana@x.com", None)).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_delete() {
        let repo = test_repo().await;

        let first = repo.create(&customer("Ana", "ana@x.com", None)).await.unwrap();
        let second = repo.create(&customer("Bruno", "bruno@x.com", None)).await.unwrap();
        repo.delete(second.id).await.unwrap();

        let third = repo.create(&customer("Carla", "carla@x.com", None)).await.unwrap();
        assert!(third.id > second.id);
        assert_ne!(third.id, first.id);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let repo = test_repo().await;
        assert_not_found(repo.get_by_id(42).await.unwrap_err());
    }

    #[tokio::test]
    async fn test_list_without_term_returns_everything() {
        let repo = test_repo().await;

        assert!(repo.list(None).await.unwrap().is_empty());

        repo.create(&customer("Ana Silva", "ana@x.com", None)).await.unwrap();
        repo.create(&customer("Bruno", "bruno@x.com", None)).await.unwrap();

        let all = repo.list(None).await.unwrap();
        assert_eq!(all.len(), 2);
        let mut names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        assert_eq!(names, ["Ana Silva", "Bruno"]);

        // An empty term behaves like no term at all
        assert_eq!(repo.list(Some("")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_matches_substrings_case_insensitively() {
        let repo = test_repo().await;

        let ana = repo
            .create(&customer("Ana Silva", "ana@x.com", None))
            .await
            .unwrap();
        let bruno = repo
            .create(&customer("Bruno", "bruno@x.com", Some("555-0101")))
            .await
            .unwrap();

        let hits = repo.list(Some("ana")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ana.id);

        // Case-insensitive on both sides
        let hits = repo.list(Some("ANA")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ana.id);

        // Email and phone columns are searched too
        let hits = repo.list(Some("bruno@")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, bruno.id);

        let hits = repo.list(Some("0101")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, bruno.id);

        assert!(repo.list(Some("nobody")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_only_given_fields() {
        let repo = test_repo().await;

        let created = repo
            .create(&customer("Carla", "carla@x.com", Some("555-0100")))
            .await
            .unwrap();

        let patch = UpdateCustomer {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id, &patch).await.unwrap();
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.email, "carla@x.com");
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "New Name");
        assert_eq!(fetched.email, "carla@x.com");
    }

    #[tokio::test]
    async fn test_update_ignores_empty_values() {
        let repo = test_repo().await;

        let created = repo
            .create(&customer("Carla", "carla@x.com", Some("555-0100")))
            .await
            .unwrap();

        let patch = UpdateCustomer {
            name: Some(String::new()),
            email: None,
            phone: Some(String::new()),
        };
        let updated = repo.update(created.id, &patch).await.unwrap();
        assert_eq!(updated.name, "Carla");
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = test_repo().await;
        let patch = UpdateCustomer {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };
        assert_not_found(repo.update(7, &patch).await.unwrap_err());
    }

    #[tokio::test]
    async fn test_delete_removes_row_and_second_delete_is_not_found() {
        let repo = test_repo().await;

        let created = repo.create(&customer("Carla", "carla@x.com", None)).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert_not_found(repo.get_by_id(created.id).await.unwrap_err());
        assert_not_found(repo.delete(created.id).await.unwrap_err());
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let repo = test_repo().await;

        let created = repo.create(&customer("Carla", "carla@x.com", None)).await.unwrap();
        repo.init_schema().await.unwrap();

        // Re-running the DDL must not clobber existing rows
        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "Carla");
    }
}
