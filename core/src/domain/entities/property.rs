//! Property entity: a hotel or real-estate listing owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four recognized property types. Hotels carry staffing and branding
/// fields; every other type is a sale listing and carries a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Hotel,
    Casa,
    Apartamento,
    Terreno,
}

impl PropertyType {
    /// Parse a raw type value. Returns `None` for anything outside the
    /// four recognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hotel" => Some(Self::Hotel),
            "casa" => Some(Self::Casa),
            "apartamento" => Some(Self::Apartamento),
            "terreno" => Some(Self::Terreno),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Casa => "casa",
            Self::Apartamento => "apartamento",
            Self::Terreno => "terreno",
        }
    }
}

/// GeoJSON-like point: a type tag and a `[longitude, latitude]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    /// Build a `Point` at the given coordinates.
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// A property record. Owned by exactly one user; created and deleted but
/// never updated through the API.
///
/// Invariant: `property_type == Hotel` implies `employees` and `logo_url`
/// are present; any other type implies `price` is present. The invariant
/// is enforced at creation by the property service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Database-generated identifier.
    pub id: i64,

    #[serde(rename = "type")]
    pub property_type: PropertyType,

    pub name: String,

    pub location: GeoPoint,

    pub address: String,

    pub city: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Staff count. Hotels only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<i32>,

    /// Brand logo URL. Hotels only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_email: Option<String>,

    /// Sale price. Non-hotel types only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Free-text service labels, in submission order.
    pub services: Vec<String>,

    /// Stored image paths, in upload order.
    pub images: Vec<String>,

    /// Owning user.
    pub owner_id: i64,

    pub created_at: DateTime<Utc>,
}

/// Data required to persist a new property. The id and creation timestamp
/// are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub owner_id: i64,
    pub property_type: PropertyType,
    pub name: String,
    pub location: GeoPoint,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub employees: Option<i32>,
    pub logo_url: Option<String>,
    pub manager_name: Option<String>,
    pub manager_email: Option<String>,
    pub price: Option<f64>,
    pub services: Vec<String>,
    pub images: Vec<String>,
}
