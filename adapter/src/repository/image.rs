use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{PropertyId, PropertyImageId},
    image::{event::UploadPropertyImage, PropertyImage},
};
use kernel::repository::image::PropertyImageRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::image::PropertyImageRow, ConnectionPool};

#[derive(new)]
pub struct PropertyImageRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PropertyImageRepository for PropertyImageRepositoryImpl {
    async fn upload(&self, event: UploadPropertyImage) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                INSERT INTO property_images (image_id, property_id, image_base64)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(PropertyImageId::new())
        .bind(event.property_id)
        .bind(&event.image_base64)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No image record has been created".into(),
            ));
        }

        Ok(())
    }

    async fn find_by_property(&self, property_id: PropertyId) -> AppResult<Vec<PropertyImage>> {
        let rows: Vec<PropertyImageRow> = sqlx::query_as(
            r#"
                SELECT image_id, property_id, image_base64, created_at
                FROM property_images
                WHERE property_id = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(property_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(PropertyImage::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn uploaded_images_are_listed_per_property(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PropertyImageRepositoryImpl::new(ConnectionPool::new(pool));

        let property_id = PropertyId::new();
        repo.upload(UploadPropertyImage::new(property_id, "aGVsbG8=".into()))
            .await?;
        repo.upload(UploadPropertyImage::new(property_id, "d29ybGQ=".into()))
            .await?;
        repo.upload(UploadPropertyImage::new(PropertyId::new(), "b3RoZXI=".into()))
            .await?;

        let images = repo.find_by_property(property_id).await?;
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].image_base64, "aGVsbG8=");

        Ok(())
    }
}
