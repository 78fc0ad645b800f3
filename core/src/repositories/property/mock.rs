//! Mock implementation of PropertyRepository for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{NewProperty, Property};
use crate::errors::DomainError;

use super::trait_::PropertyRepository;

/// In-memory property repository for testing.
pub struct MockPropertyRepository {
    properties: Arc<RwLock<HashMap<i64, Property>>>,
    next_id: AtomicI64,
}

impl MockPropertyRepository {
    pub fn new() -> Self {
        Self {
            properties: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for MockPropertyRepository {
    async fn create(&self, property: NewProperty) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;

        let stored = Property {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
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
            created_at: Utc::now(),
        };
        properties.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete_by_owner(&self, id: i64, owner_id: i64) -> Result<u64, DomainError> {
        let mut properties = self.properties.write().await;
        match properties.get(&id) {
            Some(p) if p.owner_id == owner_id => {
                properties.remove(&id);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}
