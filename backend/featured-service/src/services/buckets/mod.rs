use crate::models::{Candidate, PhotoMetadata};
use crate::services::metadata::resolve_taken_time;

const LANDSCAPE_MIN_RATIO: f64 = 1.2;
const PORTRAIT_MAX_RATIO: f64 = 0.85;

/// Coarse aspect-ratio class used as a diversity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectClass {
    Landscape,
    Portrait,
    Squareish,
}

impl AspectClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectClass::Landscape => "landscape",
            AspectClass::Portrait => "portrait",
            AspectClass::Squareish => "squareish",
        }
    }
}

/// Diversity buckets of one candidate. `None` means the cap does not apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub day: Option<String>,
    pub camera: Option<String>,
    pub aspect: Option<AspectClass>,
}

impl Buckets {
    pub fn classify(candidate: &Candidate, meta: &PhotoMetadata) -> Self {
        Self {
            day: day_bucket(candidate, meta),
            camera: camera_bucket(meta),
            aspect: aspect_bucket(candidate),
        }
    }
}

/// UTC calendar day (YYYY-MM-DD) the photo was taken.
pub fn day_bucket(candidate: &Candidate, meta: &PhotoMetadata) -> Option<String> {
    resolve_taken_time(candidate, meta).map(|taken| taken.format("%Y-%m-%d").to_string())
}

/// Trimmed, lowercased camera model.
pub fn camera_bucket(meta: &PhotoMetadata) -> Option<String> {
    let camera = meta.camera_model.trim();
    if camera.is_empty() {
        return None;
    }
    Some(camera.to_lowercase())
}

pub fn aspect_bucket(candidate: &Candidate) -> Option<AspectClass> {
    let (width, height) = match (candidate.width, candidate.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => (width, height),
        _ => return None,
    };

    let ratio = f64::from(width) / f64::from(height);
    let class = if ratio >= LANDSCAPE_MIN_RATIO {
        AspectClass::Landscape
    } else if ratio <= PORTRAIT_MAX_RATIO {
        AspectClass::Portrait
    } else {
        AspectClass::Squareish
    };
    Some(class)
}
