use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Type of a household member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    Mother,
    Father,
    Teen,
    Child,
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Teen => "teen",
            Self::Child => "child",
        };
        f.write_str(s)
    }
}

impl FromStr for MemberType {
    type Err = MemberTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mother" => Ok(Self::Mother),
            "father" => Ok(Self::Father),
            "teen" => Ok(Self::Teen),
            "child" => Ok(Self::Child),
            other => Err(MemberTypeParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`MemberType`] string.
#[derive(Debug, Clone)]
pub struct MemberTypeParseError(pub String);

impl fmt::Display for MemberTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid member type: {:?}", self.0)
    }
}

impl std::error::Error for MemberTypeParseError {}

// ---------------------------------------------------------------------------

/// Day label for a weekly menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "PascalCase")]
#[serde(rename_all = "PascalCase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// The seven labels in menu order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        };
        f.write_str(s)
    }
}

impl FromStr for Weekday {
    type Err = WeekdayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mon" => Ok(Self::Mon),
            "Tue" => Ok(Self::Tue),
            "Wed" => Ok(Self::Wed),
            "Thu" => Ok(Self::Thu),
            "Fri" => Ok(Self::Fri),
            "Sat" => Ok(Self::Sat),
            "Sun" => Ok(Self::Sun),
            other => Err(WeekdayParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Weekday`] string.
#[derive(Debug, Clone)]
pub struct WeekdayParseError(pub String);

impl fmt::Display for WeekdayParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid weekday label: {:?}", self.0)
    }
}

impl std::error::Error for WeekdayParseError {}

// ---------------------------------------------------------------------------
// Row structs
// ---------------------------------------------------------------------------

/// A household member row: how many people of a given type share the table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FamilyMember {
    pub id: Uuid,
    pub member_type: MemberType,
    pub count: i32,
    pub created_at: DateTime<Utc>,
}

/// A dietary restriction (e.g. gluten-free) with an active flag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DietaryRestriction {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A dish the household refuses to eat.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProhibitedDish {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A purchased product extracted from a receipt or entered by hand.
///
/// Quantity and price fields are all optional and mutually non-exclusive:
/// a receipt line may carry any subset of them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub quantity_portions: Option<f64>,
    pub quantity_units: Option<f64>,
    pub quantity_kg: Option<f64>,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A logged food leftover from a specific meal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Leftover {
    pub id: Uuid,
    pub meal: String,
    pub product: String,
    pub quantity: String,
    pub created_at: DateTime<Utc>,
}

/// One day of the current weekly menu.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuEntry {
    pub id: Uuid,
    pub day: Weekday,
    pub recipe: String,
    pub protein: String,
    pub side: String,
    pub created_at: DateTime<Utc>,
}

impl MenuEntry {
    /// Optimistically parse the `recipe` field as a structured recipe.
    ///
    /// The generation gateway sometimes emits a serialized recipe object
    /// instead of a plain name. Returns `None` for plain-text recipes.
    pub fn recipe_details(&self) -> Option<RecipeDetails> {
        serde_json::from_str(&self.recipe).ok()
    }
}

/// Structured recipe occasionally embedded in [`MenuEntry::recipe`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cooking_time: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// A weekly waste/savings metric row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Metric {
    pub id: Uuid,
    pub waste_percentage: f64,
    pub estimated_savings: f64,
    pub week_number: i32,
    pub created_at: DateTime<Utc>,
}

/// A generated recommendation for the household.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recommendation {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Insert parameter structs
// ---------------------------------------------------------------------------

/// Parameters for inserting a family member row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFamilyMember {
    #[serde(alias = "type")]
    pub member_type: MemberType,
    pub count: i32,
}

/// Parameters for inserting a dietary restriction row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDietaryRestriction {
    pub name: String,
    #[serde(alias = "checked")]
    pub is_active: bool,
}

/// Parameters for inserting a product row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub quantity_portions: Option<f64>,
    #[serde(default)]
    pub quantity_units: Option<f64>,
    #[serde(default)]
    pub quantity_kg: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Parameters for inserting a leftover row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLeftover {
    pub meal: String,
    pub product: String,
    pub quantity: String,
}

/// Parameters for inserting a weekly menu entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuEntry {
    pub day: Weekday,
    pub recipe: String,
    pub protein: String,
    pub side: String,
}

/// Parameters for inserting a metric row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMetric {
    pub waste_percentage: f64,
    pub estimated_savings: f64,
    pub week_number: i32,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
