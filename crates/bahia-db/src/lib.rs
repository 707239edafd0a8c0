//! Data layer for the Bahia city guide (`PostgreSQL`).
//!
//! All directory content, business dashboard data and tracking logs live
//! in a single `PostgreSQL` database. Each table family gets a store
//! struct borrowing the shared connection pool; handlers construct
//! stores per request, so the stores themselves hold no state beyond the
//! pool reference.
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`geo`] -- Haversine distance math for "near me" filtering
//! - [`restaurant_store`] -- Restaurant directory queries and view counting
//! - [`event_store`] -- City event directory queries
//! - [`experience_store`] -- Curated experience routes with ordered stops
//! - [`amenity_store`] -- Trails, parks and other local amenities
//! - [`notification_store`] -- City notifications and resident subscriptions
//! - [`promotion_store`] -- Business dashboard promotions
//! - [`menu_store`] -- Business dashboard menu uploads
//! - [`tracking_store`] -- Interaction log, analytics and geo impressions
//! - [`subscription_store`] -- Plan catalog and subscription purchases
//! - [`search`] -- Cross-directory search
//! - [`error`] -- Shared error types

pub mod amenity_store;
pub mod error;
pub mod event_store;
pub mod experience_store;
pub mod geo;
pub mod menu_store;
pub mod notification_store;
pub mod postgres;
pub mod promotion_store;
pub mod restaurant_store;
pub mod search;
pub mod subscription_store;
pub mod tracking_store;

// Re-export primary types for convenience.
pub use amenity_store::{AmenityRow, AmenityStore, NewAmenity};
pub use error::DbError;
pub use event_store::{EventRow, EventStore, NewEvent};
pub use experience_store::{
    ExperienceRow, ExperienceStore, ExperienceWithStops, NewExperience, NewStop, ResolvedStop,
    StopRow,
};
pub use geo::{haversine_km, within_radius, Coordinates};
pub use menu_store::{MenuRow, MenuStore, NewMenu};
pub use notification_store::{
    NewNotification, NewNotificationSubscription, NotificationRow, NotificationStore,
    NotificationSubscriptionRow,
};
pub use postgres::{PostgresConfig, PostgresPool};
pub use promotion_store::{NewPromotion, PromotionRow, PromotionStore};
pub use restaurant_store::{NewRestaurant, RestaurantRow, RestaurantStore};
pub use search::{GlobalSearchResults, SearchStore};
pub use subscription_store::{NewSubscription, PlanRow, SubscriptionRow, SubscriptionStore};
pub use tracking_store::{NewGeoImpression, NewTrackingEvent, TrackingStore};
