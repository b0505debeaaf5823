// ============================================
// Featured Photo Selection
// ============================================
//
// Picks a small, diverse, reproducible subset of photos:
// 1. Deduplicate candidates by asset id (first seen wins)
// 2. Weight each candidate by quality and recency
// 3. Rank by deterministic A-ES key (seed + asset id)
// 4. Greedy selection under day/camera/aspect caps, then fallback fill
//
// Pure function of (candidates, options): no I/O, no shared state.

use crate::config::FeaturedConfig;
use crate::models::Candidate;
use crate::services::buckets::Buckets;
use crate::services::diversity::{
    rank_candidates, DiversityCaps, DiversityLayer, ScoredCandidate,
};
use crate::services::metadata::decode_photo_metadata;
use crate::services::sampling::{deterministic_unit, sampling_key};
use crate::services::scoring::compute_feature_weight;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Identifies the selection algorithm in reports.
pub const SELECTION_STRATEGY: &str = "weighted_aes_v1";

/// Caller-supplied selection options. Zero, empty or unset fields fall back
/// to the selector's configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedSelectionOptions {
    pub count: usize,
    pub seed: String,
    pub now: Option<DateTime<Utc>>,
    pub max_per_day: usize,
    pub max_per_camera: usize,
    pub max_per_aspect: usize,
}

#[derive(Debug, Clone)]
struct EffectiveOptions {
    count: usize,
    seed: String,
    now: DateTime<Utc>,
    caps: DiversityCaps,
}

impl FeaturedSelectionOptions {
    fn resolve(&self, config: &FeaturedConfig) -> EffectiveOptions {
        let count = non_zero_or(self.count, config.default_count);
        let now = self.now.unwrap_or_else(Utc::now);

        let seed = match self.seed.trim() {
            "" => now.format("%Y-%m-%d").to_string(),
            seed => seed.to_string(),
        };

        EffectiveOptions {
            count,
            seed,
            now,
            caps: DiversityCaps {
                max_per_day: non_zero_or(self.max_per_day, config.max_per_day),
                max_per_camera: non_zero_or(self.max_per_camera, config.max_per_camera),
                max_per_aspect: non_zero_or(self.max_per_aspect, config.max_per_aspect),
            },
        }
    }
}

fn non_zero_or(value: usize, default: usize) -> usize {
    if value == 0 {
        default.max(1)
    } else {
        value
    }
}

/// Selected photos plus the parameters that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedSelection {
    pub assets: Vec<Candidate>,
    pub count: usize,
    pub candidate_count: usize,
    pub seed: String,
    pub strategy: String,
    pub generated_at: DateTime<Utc>,
}

/// Featured photo selector.
#[derive(Debug, Clone, Default)]
pub struct FeaturedSelector {
    config: FeaturedConfig,
}

impl FeaturedSelector {
    pub fn new(config: FeaturedConfig) -> Self {
        Self { config }
    }

    /// Select featured photos in selection order.
    pub fn select(
        &self,
        candidates: Vec<Candidate>,
        options: &FeaturedSelectionOptions,
    ) -> Vec<Candidate> {
        self.select_report(candidates, options).assets
    }

    /// Select featured photos and describe how they were chosen.
    pub fn select_report(
        &self,
        candidates: Vec<Candidate>,
        options: &FeaturedSelectionOptions,
    ) -> FeaturedSelection {
        let effective = options.resolve(&self.config);
        let input_count = candidates.len();
        let unique = dedupe_candidates(candidates);

        if unique.is_empty() {
            info!(input_count = input_count, "No identifiable featured candidates");
            return FeaturedSelection {
                assets: Vec::new(),
                count: 0,
                candidate_count: 0,
                seed: effective.seed,
                strategy: SELECTION_STRATEGY.to_string(),
                generated_at: effective.now,
            };
        }

        let count = effective.count.min(unique.len());

        let mut ranked: Vec<ScoredCandidate> = unique
            .iter()
            .enumerate()
            .map(|(index, (asset_id, candidate))| {
                let meta = decode_photo_metadata(candidate).unwrap_or_default();
                let weight = compute_feature_weight(candidate, &meta, effective.now);
                let unit = deterministic_unit(&effective.seed, asset_id);
                let key = sampling_key(unit, weight);
                let buckets = Buckets::classify(candidate, &meta);

                debug!(
                    asset_id = %asset_id,
                    weight = weight,
                    unit = unit,
                    sampling_key = key,
                    day = ?buckets.day,
                    camera = ?buckets.camera,
                    aspect = buckets.aspect.map(|a| a.as_str()).unwrap_or("none"),
                    "Featured candidate scored"
                );

                ScoredCandidate {
                    index,
                    asset_id: asset_id.clone(),
                    sampling_key: key,
                    buckets,
                }
            })
            .collect();

        rank_candidates(&mut ranked);

        let outcome = DiversityLayer::new(effective.caps).select(&ranked, count);

        let candidate_count = unique.len();
        let mut pool: Vec<Option<Candidate>> =
            unique.into_iter().map(|(_, candidate)| Some(candidate)).collect();
        let assets: Vec<Candidate> = outcome
            .selected
            .iter()
            .filter_map(|&pos| pool[ranked[pos].index].take())
            .collect();

        info!(
            input_count = input_count,
            candidate_count = candidate_count,
            selected_count = assets.len(),
            fallback_used = outcome.fallback_used(),
            seed = %effective.seed,
            "Featured selection completed"
        );

        FeaturedSelection {
            count: assets.len(),
            assets,
            candidate_count,
            seed: effective.seed,
            strategy: SELECTION_STRATEGY.to_string(),
            generated_at: effective.now,
        }
    }
}

/// Select featured photos with the built-in defaults.
pub fn select_featured_photos(
    candidates: Vec<Candidate>,
    options: &FeaturedSelectionOptions,
) -> Vec<Candidate> {
    FeaturedSelector::default().select(candidates, options)
}

/// Number of distinct identifiable candidates.
pub fn count_unique_candidates(candidates: &[Candidate]) -> usize {
    candidates
        .iter()
        .filter_map(Candidate::identifier)
        .collect::<HashSet<_>>()
        .len()
}

/// Keep the first candidate per identifier; drop candidates without one.
fn dedupe_candidates(candidates: Vec<Candidate>) -> Vec<(String, Candidate)> {
    let mut seen = HashSet::with_capacity(candidates.len());
    let mut unique = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let Some(asset_id) = candidate.identifier() else {
            continue;
        };
        if seen.insert(asset_id.clone()) {
            unique.push((asset_id, candidate));
        }
    }

    unique
}
