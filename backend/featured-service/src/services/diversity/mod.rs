use crate::services::buckets::{AspectClass, Buckets};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Per-bucket selection caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiversityCaps {
    pub max_per_day: usize,
    pub max_per_camera: usize,
    pub max_per_aspect: usize,
}

/// A candidate after scoring, ready for ranking.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    /// Position of the original candidate in the deduplicated pool
    pub index: usize,
    pub asset_id: String,
    pub sampling_key: f64,
    pub buckets: Buckets,
}

/// Sort ascending by sampling key, ties broken by identifier.
pub fn rank_candidates(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(compare_ranked);
}

fn compare_ranked(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    a.sampling_key
        .total_cmp(&b.sampling_key)
        .then_with(|| a.asset_id.cmp(&b.asset_id))
}

/// Outcome of a diversity-constrained selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiversityOutcome {
    /// Positions in the ranked list, in selection order
    pub selected: Vec<usize>,
    /// How many of `selected` came from the constrained pass
    pub constrained_count: usize,
}

impl DiversityOutcome {
    pub fn fallback_used(&self) -> bool {
        self.selected.len() > self.constrained_count
    }
}

#[derive(Debug, Default)]
struct BucketCounters {
    day: HashMap<String, usize>,
    camera: HashMap<String, usize>,
    aspect: HashMap<AspectClass, usize>,
}

impl BucketCounters {
    fn allows(&self, buckets: &Buckets, caps: &DiversityCaps) -> bool {
        if let Some(day) = &buckets.day {
            if self.day.get(day).copied().unwrap_or(0) >= caps.max_per_day {
                return false;
            }
        }
        if let Some(camera) = &buckets.camera {
            if self.camera.get(camera).copied().unwrap_or(0) >= caps.max_per_camera {
                return false;
            }
        }
        if let Some(aspect) = buckets.aspect {
            if self.aspect.get(&aspect).copied().unwrap_or(0) >= caps.max_per_aspect {
                return false;
            }
        }
        true
    }

    fn record(&mut self, buckets: &Buckets) {
        if let Some(day) = &buckets.day {
            *self.day.entry(day.clone()).or_insert(0) += 1;
        }
        if let Some(camera) = &buckets.camera {
            *self.camera.entry(camera.clone()).or_insert(0) += 1;
        }
        if let Some(aspect) = buckets.aspect {
            *self.aspect.entry(aspect).or_insert(0) += 1;
        }
    }
}

/// Diversity Layer - greedy selection with per-bucket caps
///
/// Walks the ranked list once honoring the caps, then fills any remaining
/// slots in rank order with the caps lifted.
pub struct DiversityLayer {
    caps: DiversityCaps,
}

impl DiversityLayer {
    pub fn new(caps: DiversityCaps) -> Self {
        Self { caps }
    }

    /// Select up to `count` positions from an already ranked list.
    pub fn select(&self, ranked: &[ScoredCandidate], count: usize) -> DiversityOutcome {
        let target = count.min(ranked.len());
        let mut selected = Vec::with_capacity(target);
        let mut taken = vec![false; ranked.len()];
        let mut counters = BucketCounters::default();

        for (pos, candidate) in ranked.iter().enumerate() {
            if selected.len() >= target {
                break;
            }
            if !counters.allows(&candidate.buckets, &self.caps) {
                continue;
            }
            counters.record(&candidate.buckets);
            taken[pos] = true;
            selected.push(pos);
        }

        let constrained_count = selected.len();

        // Fallback pass: caps too tight for this pool, fill by rank.
        if selected.len() < target {
            for (pos, is_taken) in taken.iter_mut().enumerate() {
                if selected.len() >= target {
                    break;
                }
                if *is_taken {
                    continue;
                }
                *is_taken = true;
                selected.push(pos);
            }
        }

        DiversityOutcome {
            selected,
            constrained_count,
        }
    }
}
