pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::FeaturedConfig;
pub use error::{FeaturedError, Result};
pub use models::{AssetType, Candidate, PhotoMetadata, SpecificMetadata};
pub use services::{
    count_unique_candidates, select_featured_photos, FeaturedSelection, FeaturedSelectionOptions,
    FeaturedSelector,
};
