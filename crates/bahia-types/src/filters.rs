//! Filter parameter types for the listing endpoints.
//!
//! Each filter is a conjunctive predicate: every present field narrows the
//! result set, an absent field is simply omitted. The structs double as
//! Axum `Query` extractors, so an unknown enum label in a query string is
//! rejected before any SQL is built.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AmenityCategory, Cuisine, EventCategory, Neighborhood};

/// Filter parameters for the restaurant directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RestaurantFilter {
    /// Restrict to one cuisine category.
    pub cuisine: Option<Cuisine>,
    /// Restrict to one neighborhood.
    pub neighborhood: Option<Neighborhood>,
    /// When `true`, restrict to family-friendly restaurants. `false` is a
    /// no-op, matching the directory UI where the toggle only ever narrows.
    pub family_friendly: Option<bool>,
    /// Case-insensitive substring match over both-language name and
    /// description columns.
    pub search: Option<String>,
}

/// Filter parameters for the event listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventFilter {
    /// Restrict to one event category.
    pub category: Option<EventCategory>,
    /// When `true`, restrict to events starting now or later. `false` is
    /// a no-op.
    pub upcoming: Option<bool>,
    /// Case-insensitive substring match over both-language title and
    /// description columns.
    pub search: Option<String>,
}

/// Filter parameters for the amenity listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AmenityFilter {
    /// Restrict to one amenity category.
    pub category: Option<AmenityCategory>,
}
