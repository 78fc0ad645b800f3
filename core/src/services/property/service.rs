//! Owner-scoped property creation, listing, and deletion.

use std::sync::Arc;

use crate::domain::entities::{GeoPoint, NewProperty, Property, PropertyType};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::{PropertyRepository, UserRepository};

/// Unvalidated creation input as assembled by the API layer. The `type`
/// field arrives raw so that unrecognized values surface as a domain
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone)]
pub struct CreatePropertyInput {
    pub property_type: String,
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
    pub services: Option<Vec<String>>,
    pub images: Vec<String>,
}

/// Property access layer. All operations are scoped to the requesting
/// owner; there is no cross-user read or delete path.
pub struct PropertyService<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    property_repository: Arc<P>,
    user_repository: Arc<U>,
}

impl<P, U> PropertyService<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    pub fn new(property_repository: Arc<P>, user_repository: Arc<U>) -> Self {
        Self {
            property_repository,
            user_repository,
        }
    }

    /// Validate and persist a new property for `owner_id`.
    ///
    /// Hotels must carry an employee count and a logo URL; every other
    /// type must carry a price. The owner must have set a chain name
    /// beforehand — clients compose every display name as
    /// `"{chain_name} - {name}"`, so an unset chain is rejected up front.
    pub async fn create(
        &self,
        input: CreatePropertyInput,
        owner_id: i64,
    ) -> DomainResult<Property> {
        let property_type = PropertyType::parse(&input.property_type).ok_or_else(|| {
            ValidationError::UnknownType {
                value: input.property_type.clone(),
            }
        })?;

        match property_type {
            PropertyType::Hotel => {
                if input.employees.is_none() {
                    return Err(ValidationError::MissingEmployees.into());
                }
                if input.logo_url.as_deref().map_or(true, |url| url.trim().is_empty()) {
                    return Err(ValidationError::MissingLogoUrl.into());
                }
            }
            _ => {
                if input.price.is_none() {
                    return Err(ValidationError::MissingPrice.into());
                }
            }
        }

        let owner = self
            .user_repository
            .find_by_id(owner_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        if !owner.has_chain_name() {
            return Err(ValidationError::NoChainName.into());
        }

        let property = self
            .property_repository
            .create(NewProperty {
                owner_id,
                property_type,
                name: input.name,
                location: input.location,
                address: input.address,
                city: input.city,
                phone: input.phone,
                employees: input.employees,
                logo_url: input.logo_url,
                manager_name: input.manager_name,
                manager_email: input.manager_email,
                price: input.price,
                services: input.services.unwrap_or_default(),
                images: input.images,
            })
            .await?;
        tracing::info!(
            property_id = property.id,
            owner_id,
            property_type = property.property_type.as_str(),
            "property created"
        );

        Ok(property)
    }

    /// All properties owned by `owner_id`. Order is whatever the store
    /// yields.
    pub async fn list(&self, owner_id: i64) -> DomainResult<Vec<Property>> {
        self.property_repository.find_by_owner(owner_id).await
    }

    /// Delete the property matching both `id` and `owner_id`.
    ///
    /// A non-matching owner is a silent no-op success: the filter
    /// predicate matches nothing, and callers cannot distinguish "did not
    /// exist" from "not yours".
    pub async fn delete(&self, id: i64, owner_id: i64) -> DomainResult<()> {
        let deleted = self.property_repository.delete_by_owner(id, owner_id).await?;
        if deleted == 0 {
            tracing::debug!(property_id = id, owner_id, "delete matched no rows");
        } else {
            tracing::info!(property_id = id, owner_id, "property deleted");
        }
        Ok(())
    }
}
