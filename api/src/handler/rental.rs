use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::notification::event::CreateNotification;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    rental::{CreateRentalRequest, RentalResponse, RentalsResponse},
    MessageResponse,
};

/// Books a property and, as a side effect, records a notification for the
/// seller. The booking itself succeeds even when the notification write
/// fails; the failure is only logged.
pub async fn rent_property(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRentalRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;
    if req.renter_email == req.seller_email {
        return Err(AppError::UnprocessableEntity(
            "Renter and seller cannot be the same user".into(),
        ));
    }

    let property_id = req.property_id;
    let seller_email = req.seller_email.clone();
    let start_time = req.start_time;
    let end_time = req.end_time;

    registry.rental_repository().create(req.into()).await?;

    // From here on only the notification can degrade, never the booking.
    let description = match registry.property_repository().find_by_id(property_id).await {
        Ok(Some(property)) => property.description,
        Ok(None) => "Your property".into(),
        Err(e) => {
            tracing::warn!(
                error.cause_chain = ?e,
                "failed to load the property for a booking notification"
            );
            "Your property".into()
        }
    };

    let text = notification_text(&description, start_time, end_time);
    let notification = CreateNotification::new(Utc::now().to_rfc3339(), text, seller_email);
    if let Err(e) = registry.notification_repository().create(notification).await {
        tracing::warn!(
            error.cause_chain = ?e,
            "failed to record seller notification for a booking"
        );
    }

    Ok(Json(MessageResponse::new(
        "Property rented successfully".into(),
    )))
}

pub async fn rentals_by_renter(
    State(registry): State<AppRegistry>,
    Path(renter_email): Path<String>,
) -> AppResult<Json<RentalsResponse>> {
    let items = registry
        .rental_repository()
        .find_by_renter(&renter_email)
        .await?
        .into_iter()
        .map(RentalResponse::from)
        .collect();
    Ok(Json(RentalsResponse { items }))
}

fn notification_text(description: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "{} was rented from {} to {}",
        description,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::{database::ConnectionPool, redis::RedisClient};
    use chrono::{Duration, TimeZone};
    use kernel::model::{id::PropertyId, property::event::CreateProperty};
    use shared::config::AppConfig;
    use std::sync::Arc;

    fn registry(pool: sqlx::PgPool) -> AppRegistry {
        // The redis client connects lazily; nothing below touches it.
        let config = AppConfig::new().unwrap();
        let kv = Arc::new(RedisClient::new(&config.redis).unwrap());
        AppRegistry::new(ConnectionPool::new(pool), kv, &config)
    }

    fn booking(property_id: PropertyId, renter: &str, seller: &str) -> CreateRentalRequest {
        let start = Utc::now() + Duration::days(7);
        CreateRentalRequest {
            property_id,
            renter_email: renter.into(),
            seller_email: seller.into(),
            start_time: start,
            end_time: start + Duration::days(3),
            number_of_people: 2,
            total_price: 300.0,
        }
    }

    #[test]
    fn notification_text_shows_the_stay_dates() {
        let start = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 7, 8, 10, 0, 0).unwrap();
        assert_eq!(
            notification_text("Seaside cabin", start, end),
            "Seaside cabin was rented from 2025-07-01 to 2025-07-08"
        );
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn self_rental_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let registry = registry(pool);

        let err = rent_property(
            State(registry.clone()),
            Json(booking(PropertyId::new(), "same@x.com", "same@x.com")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));

        assert!(registry.rental_repository().find_all().await?.is_empty());
        assert!(registry
            .notification_repository()
            .find_by_seller("same@x.com")
            .await?
            .is_empty());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_records_one_notification_for_the_seller(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let registry = registry(pool);
        let property = registry
            .property_repository()
            .create(CreateProperty::new(
                "Loft".into(),
                "Apartment".into(),
                4,
                100.0,
                "s@x.com".into(),
            ))
            .await?;

        let Json(res) = rent_property(
            State(registry.clone()),
            Json(booking(property.property_id, "r@x.com", "s@x.com")),
        )
        .await?;
        assert_eq!(res.message, "Property rented successfully");

        let rentals = registry.rental_repository().find_by_renter("r@x.com").await?;
        assert_eq!(rentals.len(), 1);
        assert_eq!(rentals[0].property_id, property.property_id);

        let notifications = registry
            .notification_repository()
            .find_by_seller("s@x.com")
            .await?;
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].text.contains("Loft"));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_an_unknown_property_still_notifies(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let registry = registry(pool);

        rent_property(
            State(registry.clone()),
            Json(booking(PropertyId::new(), "r@x.com", "s@x.com")),
        )
        .await?;

        assert_eq!(registry.rental_repository().find_all().await?.len(), 1);
        let notifications = registry
            .notification_repository()
            .find_by_seller("s@x.com")
            .await?;
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].text.contains("Your property"));

        Ok(())
    }
}
