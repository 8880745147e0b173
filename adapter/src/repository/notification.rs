use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::NotificationId,
    notification::{event::CreateNotification, Notification},
};
use kernel::repository::notification::NotificationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::notification::NotificationRow, ConnectionPool};

#[derive(new)]
pub struct NotificationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn create(&self, event: CreateNotification) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                INSERT INTO notifications (notification_id, date, text, seller_email)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(NotificationId::new())
        .bind(&event.date)
        .bind(&event.text)
        .bind(&event.seller_email)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No notification record has been created".into(),
            ));
        }

        Ok(())
    }

    async fn find_by_seller(&self, seller_email: &str) -> AppResult<Vec<Notification>> {
        let rows: Vec<NotificationRow> = sqlx::query_as(
            r#"
                SELECT notification_id, date, text, seller_email
                FROM notifications
                WHERE seller_email = $1
            "#,
        )
        .bind(seller_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn notifications_are_scoped_to_their_seller(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = NotificationRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateNotification::new(
            "2026-08-30T12:00:00Z".into(),
            "Loft was rented from 2026-09-06 to 2026-09-09".into(),
            "s@x.com".into(),
        ))
        .await?;
        repo.create(CreateNotification::new(
            "2026-08-30T12:01:00Z".into(),
            "Cabin was rented from 2026-09-10 to 2026-09-12".into(),
            "other@x.com".into(),
        ))
        .await?;

        let mine = repo.find_by_seller("s@x.com").await?;
        assert_eq!(mine.len(), 1);
        assert!(mine[0].text.contains("Loft"));
        assert_eq!(mine[0].seller_email, "s@x.com");

        assert!(repo.find_by_seller("nobody@x.com").await?.is_empty());

        Ok(())
    }
}
