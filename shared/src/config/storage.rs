//! Image storage configuration.

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// Local file storage configuration for uploaded property images.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory uploaded images are written to.
    pub upload_dir: String,

    /// Maximum size of a single uploaded image, in bytes.
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Maximum number of images accepted per property.
    #[serde(default = "default_max_images")]
    pub max_images_per_property: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: String::from("uploads"),
            max_image_bytes: default_max_image_bytes(),
            max_images_per_property: default_max_images(),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upload_dir: env_or_string("UPLOAD_DIR", &defaults.upload_dir),
            max_image_bytes: env_or("MAX_IMAGE_BYTES", defaults.max_image_bytes),
            max_images_per_property: env_or("MAX_IMAGES_PER_PROPERTY", defaults.max_images_per_property),
        }
    }
}

fn default_max_image_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_max_images() -> usize {
    5
}
