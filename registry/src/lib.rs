use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::image::PropertyImageRepositoryImpl;
use adapter::repository::notification::NotificationRepositoryImpl;
use adapter::repository::property::PropertyRepositoryImpl;
use adapter::repository::rental::RentalRepositoryImpl;
use adapter::repository::review::ReviewRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::image::PropertyImageRepository;
use kernel::repository::notification::NotificationRepository;
use kernel::repository::property::PropertyRepository;
use kernel::repository::rental::RentalRepository;
use kernel::repository::review::ReviewRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

/// Constructor-injected bundle of every repository. Handlers reach the
/// persistence layer only through this registry; there are no ambient
/// singletons.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    property_repository: Arc<dyn PropertyRepository>,
    rental_repository: Arc<dyn RentalRepository>,
    review_repository: Arc<dyn ReviewRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    image_repository: Arc<dyn PropertyImageRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: &AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let property_repository = Arc::new(PropertyRepositoryImpl::new(pool.clone()));
        let rental_repository = Arc::new(RentalRepositoryImpl::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryImpl::new(pool.clone()));
        let notification_repository = Arc::new(NotificationRepositoryImpl::new(pool.clone()));
        let image_repository = Arc::new(PropertyImageRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            property_repository,
            rental_repository,
            review_repository,
            notification_repository,
            image_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn property_repository(&self) -> Arc<dyn PropertyRepository> {
        self.property_repository.clone()
    }

    pub fn rental_repository(&self) -> Arc<dyn RentalRepository> {
        self.rental_repository.clone()
    }

    pub fn review_repository(&self) -> Arc<dyn ReviewRepository> {
        self.review_repository.clone()
    }

    pub fn notification_repository(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repository.clone()
    }

    pub fn image_repository(&self) -> Arc<dyn PropertyImageRepository> {
        self.image_repository.clone()
    }
}
