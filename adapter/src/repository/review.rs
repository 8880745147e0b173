use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{PropertyId, ReviewId},
    review::{event::CreateReview, Review},
};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::review::ReviewRow, ConnectionPool};

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        // Eligibility gate: the reviewer must have at least one rental of
        // this property. Existence-only — the rental period need not have
        // elapsed, and nothing prevents a second review for the same rental.
        {
            let rented: Option<i32> = sqlx::query_scalar(
                r#"
                    SELECT 1 FROM rentals
                    WHERE renter_email = $1 AND property_id = $2
                    LIMIT 1
                "#,
            )
            .bind(&event.renter_email)
            .bind(event.property_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if rented.is_none() {
                return Err(AppError::UnprocessableEntity(
                    "You must rent before reviewing".into(),
                ));
            }
        }

        let review_id = ReviewId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reviews (review_id, property_id, renter_email, rating, text, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review_id)
        .bind(event.property_id)
        .bind(&event.renter_email)
        .bind(event.rating)
        .bind(&event.text)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No review record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(review_id)
    }

    async fn find_by_property(&self, property_id: PropertyId) -> AppResult<Vec<Review>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT review_id, property_id, renter_email, rating, text, created_at
                FROM reviews
                WHERE property_id = $1
                ORDER BY created_at DESC
            "#,
        )
        .bind(property_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Review>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT review_id, property_id, renter_email, rating, text, created_at
                FROM reviews
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }
}

impl ReviewRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::rental::RentalRepositoryImpl;
    use chrono::{Duration, Utc};
    use kernel::model::rental::event::CreateRental;
    use kernel::repository::rental::RentalRepository;

    async fn rent(pool: sqlx::PgPool, property_id: PropertyId, renter: &str) -> anyhow::Result<()> {
        let rentals = RentalRepositoryImpl::new(ConnectionPool::new(pool));
        let start = Utc::now() + Duration::days(1);
        rentals
            .create(CreateRental::new(
                property_id,
                renter.into(),
                "s@x.com".into(),
                start,
                start + Duration::days(2),
                2,
                200.0,
            ))
            .await?;
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn review_without_rental_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReviewRepositoryImpl::new(ConnectionPool::new(pool));

        let err = repo
            .create(CreateReview::new(
                PropertyId::new(),
                "other@x.com".into(),
                4,
                "Never stayed here".into(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        assert!(repo.find_all().await?.is_empty());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn review_after_rental_is_accepted(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let property_id = PropertyId::new();
        rent(pool.clone(), property_id, "r@x.com").await?;

        let repo = ReviewRepositoryImpl::new(ConnectionPool::new(pool));
        let review_id = repo
            .create(CreateReview::new(
                property_id,
                "r@x.com".into(),
                5,
                "Great stay".into(),
            ))
            .await?;

        let reviews = repo.find_by_property(property_id).await?;
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].review_id, review_id);
        assert_eq!(reviews[0].rating, 5);
        // created_at is assigned by the store at insert time
        assert!(reviews[0].created_at <= Utc::now());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn multiple_reviews_per_rental_are_allowed(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let property_id = PropertyId::new();
        rent(pool.clone(), property_id, "r@x.com").await?;

        let repo = ReviewRepositoryImpl::new(ConnectionPool::new(pool));
        repo.create(CreateReview::new(
            property_id,
            "r@x.com".into(),
            4,
            "First visit".into(),
        ))
        .await?;
        repo.create(CreateReview::new(
            property_id,
            "r@x.com".into(),
            2,
            "Second visit".into(),
        ))
        .await?;

        assert_eq!(repo.find_by_property(property_id).await?.len(), 2);

        Ok(())
    }
}
