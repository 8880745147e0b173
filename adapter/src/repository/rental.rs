use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RentalId,
    rental::{event::CreateRental, Rental},
};
use kernel::repository::rental::RentalRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::rental::RentalRow, ConnectionPool};

#[derive(new)]
pub struct RentalRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RentalRepository for RentalRepositoryImpl {
    async fn create(&self, event: CreateRental) -> AppResult<RentalId> {
        // No overlap check against existing rentals of the same property:
        // double-booking is currently allowed.
        let rental_id = RentalId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO rentals
                (rental_id, property_id, renter_email, seller_email,
                 start_time, end_time, number_of_people, total_price)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(rental_id)
        .bind(event.property_id)
        .bind(&event.renter_email)
        .bind(&event.seller_email)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.number_of_people)
        .bind(event.total_price)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No rental record has been created".into(),
            ));
        }

        Ok(rental_id)
    }

    async fn find_by_renter(&self, renter_email: &str) -> AppResult<Vec<Rental>> {
        let rows: Vec<RentalRow> = sqlx::query_as(
            r#"
                SELECT rental_id, property_id, renter_email, seller_email,
                       start_time, end_time, number_of_people, total_price, created_at
                FROM rentals
                WHERE renter_email = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(renter_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Rental>> {
        let rows: Vec<RentalRow> = sqlx::query_as(
            r#"
                SELECT rental_id, property_id, renter_email, seller_email,
                       start_time, end_time, number_of_people, total_price, created_at
                FROM rentals
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use kernel::model::id::PropertyId;

    fn booking(property_id: PropertyId, renter: &str, seller: &str) -> CreateRental {
        let start = Utc::now() + Duration::days(7);
        CreateRental::new(
            property_id,
            renter.into(),
            seller.into(),
            start,
            start + Duration::days(3),
            2,
            300.0,
        )
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn create_then_list_by_renter(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RentalRepositoryImpl::new(ConnectionPool::new(pool));

        let property_id = PropertyId::new();
        let rental_id = repo.create(booking(property_id, "r@x.com", "s@x.com")).await?;
        repo.create(booking(PropertyId::new(), "other@x.com", "s@x.com"))
            .await?;

        let mine = repo.find_by_renter("r@x.com").await?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].rental_id, rental_id);
        assert_eq!(mine[0].property_id, property_id);
        assert_eq!(mine[0].seller_email, "s@x.com");

        assert_eq!(repo.find_all().await?.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn overlapping_bookings_are_not_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RentalRepositoryImpl::new(ConnectionPool::new(pool));

        let property_id = PropertyId::new();
        repo.create(booking(property_id, "r@x.com", "s@x.com")).await?;
        repo.create(booking(property_id, "other@x.com", "s@x.com"))
            .await?;

        assert_eq!(repo.find_all().await?.len(), 2);

        Ok(())
    }
}
