use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::PropertyId,
    property::{
        event::{CreateProperty, UpdateProperty},
        Property, RentalStatus,
    },
};
use kernel::repository::property::PropertyRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::property::PropertyRow, ConnectionPool};

#[derive(new)]
pub struct PropertyRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryImpl {
    async fn create(&self, event: CreateProperty) -> AppResult<Property> {
        let row: PropertyRow = sqlx::query_as(
            r#"
                INSERT INTO properties
                (property_id, description, property_type, max_person, price_per_night,
                 seller_email, rental_status)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING property_id, description, property_type, max_person,
                          price_per_night, seller_email, rental_status
            "#,
        )
        .bind(PropertyId::new())
        .bind(&event.description)
        .bind(&event.property_type)
        .bind(event.max_person)
        .bind(event.price_per_night)
        .bind(&event.seller_email)
        .bind(RentalStatus::Available.to_string())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_all(&self) -> AppResult<Vec<Property>> {
        let rows: Vec<PropertyRow> = sqlx::query_as(
            r#"
                SELECT property_id, description, property_type, max_person,
                       price_per_night, seller_email, rental_status
                FROM properties
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Property::try_from).collect()
    }

    async fn find_by_id(&self, property_id: PropertyId) -> AppResult<Option<Property>> {
        let row: Option<PropertyRow> = sqlx::query_as(
            r#"
                SELECT property_id, description, property_type, max_person,
                       price_per_night, seller_email, rental_status
                FROM properties
                WHERE property_id = $1
            "#,
        )
        .bind(property_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Property::try_from).transpose()
    }

    async fn find_by_seller(&self, seller_email: &str) -> AppResult<Vec<Property>> {
        let rows: Vec<PropertyRow> = sqlx::query_as(
            r#"
                SELECT property_id, description, property_type, max_person,
                       price_per_night, seller_email, rental_status
                FROM properties
                WHERE seller_email = $1
            "#,
        )
        .bind(seller_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Property::try_from).collect()
    }

    async fn update(&self, event: UpdateProperty) -> AppResult<()> {
        // Full replace; concurrent edits to the same record race and the
        // last write wins.
        let res = sqlx::query(
            r#"
                UPDATE properties
                SET description = $2,
                    property_type = $3,
                    max_person = $4,
                    price_per_night = $5,
                    seller_email = $6,
                    rental_status = $7
                WHERE property_id = $1
            "#,
        )
        .bind(event.property_id)
        .bind(&event.description)
        .bind(&event.property_type)
        .bind(event.max_person)
        .bind(event.price_per_night)
        .bind(&event.seller_email)
        .bind(event.rental_status.to_string())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Property not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, property_id: PropertyId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM properties WHERE property_id = $1")
            .bind(property_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Property not found".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loft(seller: &str) -> CreateProperty {
        CreateProperty::new("Loft".into(), "Apartment".into(), 4, 100.0, seller.into())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn create_then_filter_by_seller(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PropertyRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo.create(loft("s@x.com")).await?;
        assert_eq!(created.rental_status, RentalStatus::Available);
        repo.create(loft("other@x.com")).await?;

        let mine = repo.find_by_seller("s@x.com").await?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].property_id, created.property_id);
        assert_eq!(mine[0].description, "Loft");

        assert_eq!(repo.find_all().await?.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn update_replaces_the_whole_record(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PropertyRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo.create(loft("s@x.com")).await?;
        repo.update(UpdateProperty::new(
            created.property_id,
            "Penthouse".into(),
            "Apartment".into(),
            6,
            250.0,
            "s@x.com".into(),
            RentalStatus::Rented,
        ))
        .await?;

        let updated = repo.find_by_id(created.property_id).await?.unwrap();
        assert_eq!(updated.description, "Penthouse");
        assert_eq!(updated.max_person, 6);
        assert_eq!(updated.rental_status, RentalStatus::Rented);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn update_and_delete_missing_property_fail(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PropertyRepositoryImpl::new(ConnectionPool::new(pool));

        let missing = PropertyId::new();
        let err = repo
            .update(UpdateProperty::new(
                missing,
                "x".into(),
                "x".into(),
                1,
                1.0,
                "s@x.com".into(),
                RentalStatus::Available,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));

        let err = repo.delete(missing).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));

        Ok(())
    }
}
