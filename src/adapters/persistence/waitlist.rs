use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::WaitlistEntry,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM waitlist_entries WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)
    }

    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO waitlist_entries (id, name, email, research_interests, status, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.name)
        .bind(&entry.email)
        .bind(&entry.research_interests)
        .bind(entry.status.as_ref())
        .bind(entry.created_at)
        .execute(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waitlist_entries")
            .fetch_one(self.pool())
            .await
            .map_err(AppError::from)
    }
}
