//! MySQL implementation of the PropertyRepository trait.
//!
//! `location`, `services`, and `images` are stored as JSON text columns
//! and round-tripped through serde; the rest map to plain columns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use hotelier_core::domain::entities::{GeoPoint, NewProperty, Property, PropertyType};
use hotelier_core::errors::DomainError;
use hotelier_core::repositories::PropertyRepository;

pub struct MySqlPropertyRepository {
    pool: MySqlPool,
}

impl MySqlPropertyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_property(row: &sqlx::mysql::MySqlRow) -> Result<Property, DomainError> {
        let type_raw: String = row.try_get("property_type").map_err(db_err("property_type"))?;
        let property_type = PropertyType::parse(&type_raw).ok_or_else(|| DomainError::Database {
            message: format!("unrecognized property type in row: {type_raw}"),
        })?;

        let location_raw: String = row.try_get("location").map_err(db_err("location"))?;
        let location: GeoPoint = serde_json::from_str(&location_raw).map_err(|e| {
            DomainError::Database {
                message: format!("invalid location JSON in row: {e}"),
            }
        })?;

        Ok(Property {
            id: row.try_get("id").map_err(db_err("id"))?,
            property_type,
            name: row.try_get("name").map_err(db_err("name"))?,
            location,
            address: row.try_get("address").map_err(db_err("address"))?,
            city: row.try_get("city").map_err(db_err("city"))?,
            phone: row.try_get("phone").map_err(db_err("phone"))?,
            employees: row.try_get("employees").map_err(db_err("employees"))?,
            logo_url: row.try_get("logo_url").map_err(db_err("logo_url"))?,
            manager_name: row.try_get("manager_name").map_err(db_err("manager_name"))?,
            manager_email: row
                .try_get("manager_email")
                .map_err(db_err("manager_email"))?,
            price: row.try_get("price").map_err(db_err("price"))?,
            services: read_json_list(row, "services")?,
            images: read_json_list(row, "images")?,
            owner_id: row.try_get("owner_id").map_err(db_err("owner_id"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err("created_at"))?,
        })
    }
}

fn db_err(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Database {
        message: format!("failed to read column {column}: {e}"),
    }
}

fn read_json_list(row: &sqlx::mysql::MySqlRow, column: &'static str) -> Result<Vec<String>, DomainError> {
    let raw: String = row.try_get(column).map_err(db_err(column))?;
    serde_json::from_str(&raw).map_err(|e| DomainError::Database {
        message: format!("invalid {column} JSON in row: {e}"),
    })
}

fn to_json(value: &impl serde::Serialize, what: &str) -> Result<String, DomainError> {
    serde_json::to_string(value).map_err(|e| DomainError::Internal {
        message: format!("failed to encode {what}: {e}"),
    })
}

const PROPERTY_COLUMNS: &str = "id, owner_id, property_type, name, location, address, city, \
     phone, employees, logo_url, manager_name, manager_email, price, services, images, created_at";

#[async_trait]
impl PropertyRepository for MySqlPropertyRepository {
    async fn create(&self, property: NewProperty) -> Result<Property, DomainError> {
        let now = Utc::now();
        let location_json = to_json(&property.location, "location")?;
        let services_json = to_json(&property.services, "services")?;
        let images_json = to_json(&property.images, "images")?;

        let query = r#"
            INSERT INTO properties (
                owner_id, property_type, name, location, address, city,
                phone, employees, logo_url, manager_name, manager_email,
                price, services, images, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(property.owner_id)
            .bind(property.property_type.as_str())
            .bind(&property.name)
            .bind(&location_json)
            .bind(&property.address)
            .bind(&property.city)
            .bind(&property.phone)
            .bind(property.employees)
            .bind(&property.logo_url)
            .bind(&property.manager_name)
            .bind(&property.manager_email)
            .bind(property.price)
            .bind(&services_json)
            .bind(&images_json)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to create property: {e}"),
            })?;

        Ok(Property {
            id: result.last_insert_id() as i64,
            property_type: property.property_type,
            name: property.name,
            location: property.location,
            address: property.address,
            city: property.city,
            phone: property.phone,
            employees: property.employees,
            logo_url: property.logo_url,
            manager_name: property.manager_name,
            manager_email: property.manager_email,
            price: property.price,
            services: property.services,
            images: property.images,
            owner_id: property.owner_id,
            created_at: now,
        })
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Property>, DomainError> {
        let query = format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE owner_id = ?");
        let rows = sqlx::query(&query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to list properties: {e}"),
            })?;

        rows.iter().map(Self::row_to_property).collect()
    }

    async fn delete_by_owner(&self, id: i64, owner_id: i64) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to delete property: {e}"),
            })?;

        Ok(result.rows_affected())
    }
}
