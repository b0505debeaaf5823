// ============================================
// Feature Weight Scorer
// ============================================
//
// Converts one candidate into a positive sampling weight.
//
// Features used:
// - Recency (half-life decay over days since the photo was taken)
// - Quality (user rating, liked flag, resolution)
// - Metadata richness (capture time, camera, lens, GPS, exposure)
//
// The weight is floored at MIN_WEIGHT so every candidate stays samplable.

use crate::models::{Candidate, PhotoMetadata};
use crate::services::metadata::{has_valid_gps, resolve_taken_time};
use crate::utils::{clamp01, half_life_decay};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Lower bound of every weight.
pub const MIN_WEIGHT: f64 = 0.05;

const RECENCY_HALF_LIFE_DAYS: f64 = 120.0;
const REFERENCE_MEGAPIXELS: f64 = 24.0;
const MAX_RATING: f64 = 5.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

// Score = recency + quality + richness
const RECENCY_WEIGHT: f64 = 0.45;
const QUALITY_WEIGHT: f64 = 0.35;
const RICHNESS_WEIGHT: f64 = 0.20;

// Quality = rating + liked + resolution
const RATING_WEIGHT: f64 = 0.45;
const LIKED_WEIGHT: f64 = 0.20;
const RESOLUTION_WEIGHT: f64 = 0.35;

// Metadata richness bonuses
const TAKEN_TIME_BONUS: f64 = 0.20;
const CAMERA_BONUS: f64 = 0.20;
const LENS_BONUS: f64 = 0.15;
const GPS_BONUS: f64 = 0.20;
const EXPOSURE_BONUS: f64 = 0.10;
const F_NUMBER_BONUS: f64 = 0.15;

/// Per-component view of a computed weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBreakdown {
    pub recency: f64,
    pub resolution: f64,
    pub rating: f64,
    pub liked: f64,
    pub richness: f64,
    pub quality: f64,
    pub score: f64,
    pub weight: f64,
}

/// Compute the sampling weight of a candidate, always in [MIN_WEIGHT, 1].
pub fn compute_feature_weight(
    candidate: &Candidate,
    meta: &PhotoMetadata,
    now: DateTime<Utc>,
) -> f64 {
    score_candidate(candidate, meta, now).weight
}

/// Compute the weight together with its components.
pub fn score_candidate(
    candidate: &Candidate,
    meta: &PhotoMetadata,
    now: DateTime<Utc>,
) -> WeightBreakdown {
    // Assets without any timestamp count as taken just now.
    let taken = resolve_taken_time(candidate, meta).unwrap_or(now);
    let recency = compute_recency_score(taken, now);
    let resolution = compute_resolution_score(candidate);
    let rating = compute_rating_score(candidate);
    let liked = if candidate.liked.unwrap_or(false) {
        1.0
    } else {
        0.0
    };
    let richness = metadata_richness(meta);

    let quality = RATING_WEIGHT * rating + LIKED_WEIGHT * liked + RESOLUTION_WEIGHT * resolution;
    let score = RECENCY_WEIGHT * recency + QUALITY_WEIGHT * quality + RICHNESS_WEIGHT * richness;

    let mut weight = MIN_WEIGHT + (1.0 - MIN_WEIGHT) * clamp01(score);
    if !weight.is_finite() {
        weight = MIN_WEIGHT;
    }
    let weight = weight.max(MIN_WEIGHT);

    debug!(
        asset_id = ?candidate.asset_id,
        recency = recency,
        quality = quality,
        richness = richness,
        weight = weight,
        "Feature weight computed"
    );

    WeightBreakdown {
        recency,
        resolution,
        rating,
        liked,
        richness,
        quality,
        score,
        weight,
    }
}

/// Additive bonus for each metadata field present, clamped to [0, 1].
pub fn metadata_richness(meta: &PhotoMetadata) -> f64 {
    let mut richness = 0.0;
    if meta.taken_time.is_some() {
        richness += TAKEN_TIME_BONUS;
    }
    if !meta.camera_model.trim().is_empty() {
        richness += CAMERA_BONUS;
    }
    if !meta.lens_model.trim().is_empty() {
        richness += LENS_BONUS;
    }
    if has_valid_gps(meta) {
        richness += GPS_BONUS;
    }
    if !meta.exposure_time.trim().is_empty() {
        richness += EXPOSURE_BONUS;
    }
    if meta.f_number > 0.0 {
        richness += F_NUMBER_BONUS;
    }
    clamp01(richness)
}

/// Half-life recency. Timestamps in the future count as age zero.
fn compute_recency_score(taken: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_millis = now.signed_duration_since(taken).num_milliseconds();
    let days_old = (age_millis as f64 / MILLIS_PER_DAY).max(0.0);
    half_life_decay(days_old, RECENCY_HALF_LIFE_DAYS)
}

/// Megapixels relative to a 24MP reference.
fn compute_resolution_score(candidate: &Candidate) -> f64 {
    match (candidate.width, candidate.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            let megapixels = f64::from(width) * f64::from(height) / 1_000_000.0;
            clamp01(megapixels / REFERENCE_MEGAPIXELS)
        }
        _ => 0.0,
    }
}

fn compute_rating_score(candidate: &Candidate) -> f64 {
    match candidate.rating {
        Some(rating) if rating > 0 => clamp01(f64::from(rating) / MAX_RATING),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetType;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap()
    }

    fn create_test_candidate(days_old: i64, rating: i32, liked: bool) -> Candidate {
        Candidate {
            asset_type: AssetType::Photo,
            width: Some(4000),
            height: Some(3000),
            rating: Some(rating),
            liked: Some(liked),
            taken_time: Some(now() - Duration::days(days_old)),
            ..Default::default()
        }
    }

    #[test]
    fn test_bare_candidate_is_fresh() {
        let breakdown = score_candidate(&Candidate::default(), &PhotoMetadata::default(), now());

        assert!((breakdown.recency - 1.0).abs() < 1e-12);
        assert_eq!(breakdown.quality, 0.0);
        assert_eq!(breakdown.richness, 0.0);
        // 0.05 + 0.95 * 0.45
        assert!((breakdown.weight - 0.4775).abs() < 1e-12);
    }

    #[test]
    fn test_weight_components() {
        let candidate = Candidate {
            width: Some(6000),
            height: Some(4000),
            rating: Some(4),
            liked: Some(true),
            taken_time: Some(now() - Duration::days(120)),
            ..Default::default()
        };
        let breakdown = score_candidate(&candidate, &PhotoMetadata::default(), now());

        assert!((breakdown.recency - 0.5).abs() < 1e-12);
        assert!((breakdown.resolution - 1.0).abs() < 1e-12);
        assert!((breakdown.rating - 0.8).abs() < 1e-12);
        assert_eq!(breakdown.liked, 1.0);

        let quality = 0.45 * 0.8 + 0.20 + 0.35;
        assert!((breakdown.quality - quality).abs() < 1e-12);
        let score = 0.45 * 0.5 + 0.35 * quality;
        assert!((breakdown.weight - (0.05 + 0.95 * score)).abs() < 1e-12);
    }

    #[test]
    fn test_weight_monotonic_in_rating() {
        let meta = PhotoMetadata::default();
        let low = compute_feature_weight(&create_test_candidate(30, 2, false), &meta, now());
        let high = compute_feature_weight(&create_test_candidate(30, 4, false), &meta, now());
        assert!(high > low);
    }

    #[test]
    fn test_weight_monotonic_in_liked() {
        let meta = PhotoMetadata::default();
        let not_liked = compute_feature_weight(&create_test_candidate(30, 3, false), &meta, now());
        let liked = compute_feature_weight(&create_test_candidate(30, 3, true), &meta, now());
        assert!(liked > not_liked);
    }

    #[test]
    fn test_weight_monotonic_in_recency() {
        let meta = PhotoMetadata::default();
        let old = compute_feature_weight(&create_test_candidate(200, 3, false), &meta, now());
        let recent = compute_feature_weight(&create_test_candidate(10, 3, false), &meta, now());
        assert!(recent > old);
    }

    #[test]
    fn test_future_taken_time_counts_as_fresh() {
        let future = create_test_candidate(-5, 3, false);
        let today = create_test_candidate(0, 3, false);
        let meta = PhotoMetadata::default();
        assert_eq!(
            compute_feature_weight(&future, &meta, now()),
            compute_feature_weight(&today, &meta, now())
        );
    }

    #[test]
    fn test_rating_and_dimensions_edge_cases() {
        let candidate = Candidate {
            width: Some(0),
            height: Some(3000),
            rating: Some(-1),
            ..Default::default()
        };
        let breakdown = score_candidate(&candidate, &PhotoMetadata::default(), now());
        assert_eq!(breakdown.resolution, 0.0);
        assert_eq!(breakdown.rating, 0.0);

        let overrated = Candidate {
            rating: Some(9),
            ..Default::default()
        };
        let breakdown = score_candidate(&overrated, &PhotoMetadata::default(), now());
        assert_eq!(breakdown.rating, 1.0);
    }

    #[test]
    fn test_weight_floor_for_stale_candidate() {
        let ancient = Candidate {
            taken_time: Some(now() - Duration::days(365 * 80)),
            ..Default::default()
        };
        let weight = compute_feature_weight(&ancient, &PhotoMetadata::default(), now());
        assert!(weight >= MIN_WEIGHT);
        assert!(weight < MIN_WEIGHT + 1e-6);
    }

    #[test]
    fn test_metadata_richness() {
        let full = PhotoMetadata {
            taken_time: Some(now()),
            camera_model: "Canon EOS R5".to_string(),
            lens_model: "RF 24-70mm".to_string(),
            exposure_time: "1/250".to_string(),
            f_number: 2.8,
            gps_latitude: 37.7749,
            gps_longitude: -122.4194,
            ..Default::default()
        };
        assert!((metadata_richness(&full) - 1.0).abs() < 1e-9);

        let blank_strings = PhotoMetadata {
            camera_model: "   ".to_string(),
            lens_model: "\t".to_string(),
            ..Default::default()
        };
        assert_eq!(metadata_richness(&blank_strings), 0.0);
    }

    #[test]
    fn test_gps_origin_gets_no_richness_bonus() {
        let origin = PhotoMetadata {
            gps_latitude: 0.0,
            gps_longitude: 0.0,
            ..Default::default()
        };
        let near_origin = PhotoMetadata {
            gps_latitude: 0.0001,
            gps_longitude: 0.0,
            ..Default::default()
        };

        assert_eq!(metadata_richness(&origin), 0.0);
        assert!((metadata_richness(&near_origin) - 0.20).abs() < 1e-12);
    }
}
