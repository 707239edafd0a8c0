//! Enumeration types for the Bahia city guide.
//!
//! Every enum here mirrors a `PostgreSQL` enum type declared in the
//! `bahia-db` migrations. The wire format (serde) and the database label
//! (`as_str`) are identical, so a value round-trips unchanged between the
//! API, the store, and the generated `TypeScript` bindings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error returned when a string does not name a known enum label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct InvalidEnumValue {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

impl InvalidEnumValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Restaurant enums
// ---------------------------------------------------------------------------

/// Cuisine category of a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    /// Mexican cuisine.
    Mexican,
    /// Asian cuisine (pan-Asian bucket).
    Asian,
    /// Italian cuisine.
    Italian,
    /// American cuisine.
    American,
    /// Seafood.
    Seafood,
    /// Brewery / taproom.
    Brewery,
    /// Fine dining.
    FineDining,
    /// Anything not covered above.
    Other,
}

impl Cuisine {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mexican => "mexican",
            Self::Asian => "asian",
            Self::Italian => "italian",
            Self::American => "american",
            Self::Seafood => "seafood",
            Self::Brewery => "brewery",
            Self::FineDining => "fine_dining",
            Self::Other => "other",
        }
    }
}

impl FromStr for Cuisine {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mexican" => Ok(Self::Mexican),
            "asian" => Ok(Self::Asian),
            "italian" => Ok(Self::Italian),
            "american" => Ok(Self::American),
            "seafood" => Ok(Self::Seafood),
            "brewery" => Ok(Self::Brewery),
            "fine_dining" => Ok(Self::FineDining),
            "other" => Ok(Self::Other),
            _ => Err(InvalidEnumValue::new("cuisine", s)),
        }
    }
}

/// Neighborhood a restaurant or notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// Downtown core.
    Downtown,
    /// Otay Ranch.
    OtayRanch,
    /// Eastlake.
    Eastlake,
    /// Third Avenue historic district.
    ThirdAvenue,
    /// Bayfront.
    Bayfront,
    /// Anywhere else in the city.
    Other,
}

impl Neighborhood {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Downtown => "downtown",
            Self::OtayRanch => "otay_ranch",
            Self::Eastlake => "eastlake",
            Self::ThirdAvenue => "third_avenue",
            Self::Bayfront => "bayfront",
            Self::Other => "other",
        }
    }
}

impl FromStr for Neighborhood {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "downtown" => Ok(Self::Downtown),
            "otay_ranch" => Ok(Self::OtayRanch),
            "eastlake" => Ok(Self::Eastlake),
            "third_avenue" => Ok(Self::ThirdAvenue),
            "bayfront" => Ok(Self::Bayfront),
            "other" => Ok(Self::Other),
            _ => Err(InvalidEnumValue::new("neighborhood", s)),
        }
    }
}

/// Price tier of a restaurant, displayed as dollar signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PriceRange {
    /// Budget ($).
    #[serde(rename = "$")]
    Budget,
    /// Moderate ($$). The default tier.
    #[serde(rename = "$$")]
    Moderate,
    /// Expensive ($$$).
    #[serde(rename = "$$$")]
    Expensive,
    /// Luxury ($$$$).
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Expensive => "$$$",
            Self::Luxury => "$$$$",
        }
    }
}

impl FromStr for PriceRange {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$" => Ok(Self::Budget),
            "$$" => Ok(Self::Moderate),
            "$$$" => Ok(Self::Expensive),
            "$$$$" => Ok(Self::Luxury),
            _ => Err(InvalidEnumValue::new("price_range", s)),
        }
    }
}

/// Subscription tier stored (denormalized) on a restaurant row.
///
/// `Free` is the default; the paid tiers correspond to [`PlanType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionLevel {
    /// No paid subscription.
    Free,
    /// Basic enhanced listing.
    Basic,
    /// Pro video spotlight.
    Pro,
    /// Partner complete experience.
    Partner,
}

impl SubscriptionLevel {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Partner => "partner",
        }
    }
}

impl FromStr for SubscriptionLevel {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "basic" => Ok(Self::Basic),
            "pro" => Ok(Self::Pro),
            "partner" => Ok(Self::Partner),
            _ => Err(InvalidEnumValue::new("subscription_level", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Event and amenity enums
// ---------------------------------------------------------------------------

/// Category of a community event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Arts and culture.
    Arts,
    /// Family-oriented.
    Family,
    /// Community gatherings.
    Community,
    /// Live music.
    Music,
    /// Sports.
    Sports,
    /// Educational.
    Education,
    /// Anything else.
    Other,
}

impl EventCategory {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arts => "arts",
            Self::Family => "family",
            Self::Community => "community",
            Self::Music => "music",
            Self::Sports => "sports",
            Self::Education => "education",
            Self::Other => "other",
        }
    }
}

impl FromStr for EventCategory {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arts" => Ok(Self::Arts),
            "family" => Ok(Self::Family),
            "community" => Ok(Self::Community),
            "music" => Ok(Self::Music),
            "sports" => Ok(Self::Sports),
            "education" => Ok(Self::Education),
            "other" => Ok(Self::Other),
            _ => Err(InvalidEnumValue::new("category", s)),
        }
    }
}

/// Category of a local amenity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    /// Hiking and biking trails.
    Trails,
    /// Public parks.
    Parks,
    /// Water sports.
    WaterSports,
    /// Nature centers.
    NatureCenter,
    /// Anything else.
    Other,
}

impl AmenityCategory {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trails => "trails",
            Self::Parks => "parks",
            Self::WaterSports => "water_sports",
            Self::NatureCenter => "nature_center",
            Self::Other => "other",
        }
    }
}

impl FromStr for AmenityCategory {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trails" => Ok(Self::Trails),
            "parks" => Ok(Self::Parks),
            "water_sports" => Ok(Self::WaterSports),
            "nature_center" => Ok(Self::NatureCenter),
            "other" => Ok(Self::Other),
            _ => Err(InvalidEnumValue::new("amenity_category", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Notification enums
// ---------------------------------------------------------------------------

/// Kind of city notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// General alert.
    Alert,
    /// Event announcement.
    Event,
    /// Traffic advisory.
    Traffic,
    /// Emergency broadcast.
    Emergency,
    /// Business promotion.
    Promotion,
}

impl NotificationType {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Event => "event",
            Self::Traffic => "traffic",
            Self::Emergency => "emergency",
            Self::Promotion => "promotion",
        }
    }
}

impl FromStr for NotificationType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alert" => Ok(Self::Alert),
            "event" => Ok(Self::Event),
            "traffic" => Ok(Self::Traffic),
            "emergency" => Ok(Self::Emergency),
            "promotion" => Ok(Self::Promotion),
            _ => Err(InvalidEnumValue::new("notification_type", s)),
        }
    }
}

/// Neighborhood scope a notification targets. `All` means city-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum TargetNeighborhood {
    /// City-wide.
    All,
    /// Downtown core.
    Downtown,
    /// Otay Ranch.
    OtayRanch,
    /// Eastlake.
    Eastlake,
    /// Third Avenue historic district.
    ThirdAvenue,
    /// Bayfront.
    Bayfront,
}

impl TargetNeighborhood {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Downtown => "downtown",
            Self::OtayRanch => "otay_ranch",
            Self::Eastlake => "eastlake",
            Self::ThirdAvenue => "third_avenue",
            Self::Bayfront => "bayfront",
        }
    }
}

impl FromStr for TargetNeighborhood {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "downtown" => Ok(Self::Downtown),
            "otay_ranch" => Ok(Self::OtayRanch),
            "eastlake" => Ok(Self::Eastlake),
            "third_avenue" => Ok(Self::ThirdAvenue),
            "bayfront" => Ok(Self::Bayfront),
            _ => Err(InvalidEnumValue::new("target_neighborhood", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Business / analytics enums
// ---------------------------------------------------------------------------

/// File type of an uploaded menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// A PDF document.
    Pdf,
    /// An image (JPEG/PNG).
    Image,
}

impl FileType {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
        }
    }
}

impl FromStr for FileType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(Self::Pdf),
            "image" => Ok(Self::Image),
            _ => Err(InvalidEnumValue::new("file_type", s)),
        }
    }
}

/// Which kind of listed entity a tracking record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// A restaurant listing.
    Restaurant,
    /// A community event.
    Event,
    /// A curated experience route.
    Experience,
    /// A local amenity.
    Amenity,
}

impl EntityType {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Event => "event",
            Self::Experience => "experience",
            Self::Amenity => "amenity",
        }
    }
}

impl FromStr for EntityType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(Self::Restaurant),
            "event" => Ok(Self::Event),
            "experience" => Ok(Self::Experience),
            "amenity" => Ok(Self::Amenity),
            _ => Err(InvalidEnumValue::new("entity_type", s)),
        }
    }
}

/// One user interaction recorded in the tracking log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// A detail view.
    View,
    /// Tapped "directions".
    ClickDirections,
    /// Tapped the phone number.
    ClickCall,
    /// Tapped the website link.
    ClickWebsite,
    /// Shared the listing.
    Share,
    /// Favorited the listing.
    Favorite,
}

impl InteractionType {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::ClickDirections => "click_directions",
            Self::ClickCall => "click_call",
            Self::ClickWebsite => "click_website",
            Self::Share => "share",
            Self::Favorite => "favorite",
        }
    }
}

impl FromStr for InteractionType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "click_directions" => Ok(Self::ClickDirections),
            "click_call" => Ok(Self::ClickCall),
            "click_website" => Ok(Self::ClickWebsite),
            "share" => Ok(Self::Share),
            "favorite" => Ok(Self::Favorite),
            _ => Err(InvalidEnumValue::new("event_type", s)),
        }
    }
}

/// Paid subscription plan in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Basic enhanced listing.
    Basic,
    /// Pro video spotlight.
    Pro,
    /// Partner complete experience.
    Partner,
}

impl PlanType {
    /// The database enum label for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Partner => "partner",
        }
    }

    /// The [`SubscriptionLevel`] a restaurant is denormalized to when a
    /// subscription on this plan is created.
    pub const fn as_subscription_level(self) -> SubscriptionLevel {
        match self {
            Self::Basic => SubscriptionLevel::Basic,
            Self::Pro => SubscriptionLevel::Pro,
            Self::Partner => SubscriptionLevel::Partner,
        }
    }
}

impl FromStr for PlanType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "pro" => Ok(Self::Pro),
            "partner" => Ok(Self::Partner),
            _ => Err(InvalidEnumValue::new("plan_type", s)),
        }
    }
}

/// Reporting window for the business analytics dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AnalyticsPeriod {
    /// The last 7 days.
    #[serde(rename = "7d")]
    SevenDays,
    /// The last 30 days. The default window.
    #[serde(rename = "30d")]
    ThirtyDays,
    /// The last 90 days.
    #[serde(rename = "90d")]
    NinetyDays,
}

impl AnalyticsPeriod {
    /// Length of the window in days.
    pub const fn days(self) -> i64 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
        }
    }
}

impl Default for AnalyticsPeriod {
    fn default() -> Self {
        Self::ThirtyDays
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn cuisine_labels_round_trip() {
        for c in [
            Cuisine::Mexican,
            Cuisine::Asian,
            Cuisine::Italian,
            Cuisine::American,
            Cuisine::Seafood,
            Cuisine::Brewery,
            Cuisine::FineDining,
            Cuisine::Other,
        ] {
            assert_eq!(c.as_str().parse::<Cuisine>().unwrap(), c);
        }
    }

    #[test]
    fn price_range_serde_uses_dollar_signs() {
        let json = serde_json::to_string(&PriceRange::Expensive).unwrap();
        assert_eq!(json, "\"$$$\"");
        let parsed: PriceRange = serde_json::from_str("\"$\"").unwrap();
        assert_eq!(parsed, PriceRange::Budget);
    }

    #[test]
    fn analytics_period_wire_names() {
        let json = serde_json::to_string(&AnalyticsPeriod::SevenDays).unwrap();
        assert_eq!(json, "\"7d\"");
        let parsed: AnalyticsPeriod = serde_json::from_str("\"90d\"").unwrap();
        assert_eq!(parsed.days(), 90);
    }

    #[test]
    fn interaction_type_serde_matches_db_label() {
        let json = serde_json::to_string(&InteractionType::ClickDirections).unwrap();
        assert_eq!(json, "\"click_directions\"");
        assert_eq!(InteractionType::ClickDirections.as_str(), "click_directions");
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "sushi".parse::<Cuisine>().unwrap_err();
        assert_eq!(err.kind, "cuisine");
        assert_eq!(err.value, "sushi");
    }

    #[test]
    fn plan_type_maps_to_subscription_level() {
        assert_eq!(
            PlanType::Pro.as_subscription_level(),
            SubscriptionLevel::Pro
        );
        assert_eq!(
            PlanType::Pro.as_subscription_level().as_str(),
            PlanType::Pro.as_str()
        );
    }
}
