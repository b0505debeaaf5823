pub mod buckets;
pub mod diversity;
pub mod metadata;
pub mod sampling;
pub mod scoring;
pub mod selection;

pub use diversity::{DiversityCaps, DiversityLayer};
pub use selection::{
    count_unique_candidates, select_featured_photos, FeaturedSelection, FeaturedSelectionOptions,
    FeaturedSelector, SELECTION_STRATEGY,
};
