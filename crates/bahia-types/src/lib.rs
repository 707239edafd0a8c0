//! Shared type definitions for the Bahia city guide.
//!
//! This crate is the single source of truth for the domain enumerations and
//! the filter/analytics value types used across the workspace. Types defined
//! here flow downstream to `TypeScript` via `ts-rs` for the web frontend.
//!
//! # Modules
//!
//! - [`enums`] -- Domain enumerations mirroring the `PostgreSQL` enum types
//! - [`filters`] -- Conjunctive filter parameters for the listing endpoints
//! - [`analytics`] -- Business dashboard aggregate types

pub mod analytics;
pub mod enums;
pub mod filters;

// Re-export all public types at crate root for convenience.
pub use analytics::{DailyViewCount, RestaurantAnalytics};
pub use enums::{
    AmenityCategory, AnalyticsPeriod, Cuisine, EntityType, EventCategory, FileType,
    InteractionType, InvalidEnumValue, Neighborhood, NotificationType, PlanType, PriceRange,
    SubscriptionLevel, TargetNeighborhood,
};
pub use filters::{AmenityFilter, EventFilter, RestaurantFilter};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // Enums
        let _ = crate::enums::Cuisine::export_all();
        let _ = crate::enums::Neighborhood::export_all();
        let _ = crate::enums::PriceRange::export_all();
        let _ = crate::enums::SubscriptionLevel::export_all();
        let _ = crate::enums::EventCategory::export_all();
        let _ = crate::enums::AmenityCategory::export_all();
        let _ = crate::enums::NotificationType::export_all();
        let _ = crate::enums::TargetNeighborhood::export_all();
        let _ = crate::enums::FileType::export_all();
        let _ = crate::enums::EntityType::export_all();
        let _ = crate::enums::InteractionType::export_all();
        let _ = crate::enums::PlanType::export_all();
        let _ = crate::enums::AnalyticsPeriod::export_all();

        // Filters
        let _ = crate::filters::RestaurantFilter::export_all();
        let _ = crate::filters::EventFilter::export_all();
        let _ = crate::filters::AmenityFilter::export_all();

        // Analytics
        let _ = crate::analytics::DailyViewCount::export_all();
        let _ = crate::analytics::RestaurantAnalytics::export_all();
    }
}
