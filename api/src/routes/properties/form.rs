//! Multipart form parsing for property creation.
//!
//! The clients post `multipart/form-data`: plain text fields for the
//! property attributes (with `location` as a GeoJSON string and services
//! as repeated `services`/`services[i]` fields) and up to five image
//! files under `images`. Files are streamed through the image store as
//! they arrive; semantic validation of the assembled input happens in
//! the property service.

use std::collections::HashMap;

use actix_multipart::{Field, Multipart};
use actix_web::HttpResponse;
use futures_util::TryStreamExt;

use hotelier_core::domain::entities::GeoPoint;
use hotelier_core::errors::DomainError;
use hotelier_core::services::storage::ImageStore;
use hotelier_core::services::CreatePropertyInput;
use hotelier_shared::config::StorageConfig;
use hotelier_shared::types::ErrorResponse;

use crate::handlers::error::domain_error_response;

/// Form-shape errors: the request body itself is unusable. Semantic
/// rules (type-dependent required fields, chain name) are the property
/// service's concern.
#[derive(Debug)]
pub enum FormError {
    MissingField(&'static str),
    InvalidField {
        field: &'static str,
        reason: String,
    },
    TooManyImages {
        max: usize,
    },
    ImageTooLarge {
        max_bytes: usize,
    },
    UnsupportedImageType,
    Malformed(String),
    Storage(DomainError),
}

impl FormError {
    pub fn to_response(&self) -> HttpResponse {
        match self {
            FormError::MissingField(field) => HttpResponse::BadRequest().json(
                ErrorResponse::new("missing_field", format!("Missing required field: {field}")),
            ),
            FormError::InvalidField { field, reason } => HttpResponse::BadRequest().json(
                ErrorResponse::new("invalid_field", format!("Invalid field {field}: {reason}")),
            ),
            FormError::TooManyImages { max } => HttpResponse::BadRequest().json(
                ErrorResponse::new("too_many_images", format!("At most {max} images are allowed")),
            ),
            FormError::ImageTooLarge { max_bytes } => {
                HttpResponse::BadRequest().json(ErrorResponse::new(
                    "image_too_large",
                    format!("Images may not exceed {max_bytes} bytes"),
                ))
            }
            FormError::UnsupportedImageType => HttpResponse::BadRequest().json(
                ErrorResponse::new("unsupported_image_type", "Only image uploads are allowed"),
            ),
            FormError::Malformed(reason) => HttpResponse::BadRequest().json(ErrorResponse::new(
                "malformed_form",
                format!("Could not parse multipart form: {reason}"),
            )),
            FormError::Storage(error) => domain_error_response(error),
        }
    }
}

/// Drain the multipart payload into a [`CreatePropertyInput`], storing
/// image files through `store` as they stream in.
pub async fn parse_property_form<S: ImageStore>(
    mut payload: Multipart,
    store: &S,
    config: &StorageConfig,
) -> Result<CreatePropertyInput, FormError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut services: Vec<String> = Vec::new();
    let mut images: Vec<String> = Vec::new();

    while let Some(field) = payload
        .try_next()
        .await
        .map_err(|e| FormError::Malformed(e.to_string()))?
    {
        let name = field
            .content_disposition()
            .get_name()
            .unwrap_or_default()
            .to_string();

        if name == "images" {
            if images.len() >= config.max_images_per_property {
                return Err(FormError::TooManyImages {
                    max: config.max_images_per_property,
                });
            }
            check_image_type(&field)?;

            let filename = field
                .content_disposition()
                .get_filename()
                .unwrap_or("image.jpg")
                .to_string();
            let bytes = read_field_bytes(field, config.max_image_bytes).await?;
            let path = store
                .store(&filename, bytes)
                .await
                .map_err(FormError::Storage)?;
            images.push(path);
        } else if name == "services" || name.starts_with("services[") {
            // The web client posts indexed `services[0]`, `services[1]`,
            // ... fields; order of arrival is submission order.
            services.push(read_field_string(field).await?);
        } else {
            let value = read_field_string(field).await?;
            fields.insert(name, value);
        }
    }

    let location_raw = fields
        .remove("location")
        .ok_or(FormError::MissingField("location"))?;
    let location: GeoPoint =
        serde_json::from_str(&location_raw).map_err(|e| FormError::InvalidField {
            field: "location",
            reason: e.to_string(),
        })?;

    let employees = parse_numeric(fields.remove("employees"), "employees")?;
    let price = parse_numeric(fields.remove("price"), "price")?;

    Ok(CreatePropertyInput {
        property_type: fields.remove("type").ok_or(FormError::MissingField("type"))?,
        name: fields.remove("name").ok_or(FormError::MissingField("name"))?,
        location,
        address: fields
            .remove("address")
            .ok_or(FormError::MissingField("address"))?,
        city: fields.remove("city").ok_or(FormError::MissingField("city"))?,
        phone: fields.remove("phone"),
        employees,
        logo_url: fields.remove("logoUrl"),
        manager_name: fields.remove("managerName"),
        manager_email: fields.remove("managerEmail"),
        price,
        services: if services.is_empty() {
            None
        } else {
            Some(services)
        },
        images,
    })
}

fn check_image_type(field: &Field) -> Result<(), FormError> {
    // Lenient when the client sends no content type; strict when it does.
    if let Some(content_type) = field.content_type() {
        let allowed = content_type.type_() == mime::IMAGE
            && matches!(
                content_type.subtype().as_str(),
                "jpeg" | "png" | "webp" | "gif"
            );
        if !allowed {
            return Err(FormError::UnsupportedImageType);
        }
    }
    Ok(())
}

async fn read_field_bytes(mut field: Field, max_bytes: usize) -> Result<Vec<u8>, FormError> {
    let mut data = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| FormError::Malformed(e.to_string()))?
    {
        if data.len() + chunk.len() > max_bytes {
            return Err(FormError::ImageTooLarge { max_bytes });
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

async fn read_field_string(field: Field) -> Result<String, FormError> {
    let bytes = read_field_bytes(field, TEXT_FIELD_LIMIT)
        .await
        .map_err(|e| match e {
            FormError::ImageTooLarge { .. } => {
                FormError::Malformed("text field exceeds size limit".to_string())
            }
            other => other,
        })?;
    String::from_utf8(bytes).map_err(|e| FormError::Malformed(e.to_string()))
}

fn parse_numeric<T: std::str::FromStr>(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<T>, FormError>
where
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| FormError::InvalidField {
                field,
                reason: e.to_string(),
            }),
    }
}

// Text fields are small; anything beyond this is a broken client.
const TEXT_FIELD_LIMIT: usize = 64 * 1024;
