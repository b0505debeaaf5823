// ============================================
// Deterministic Weighted Sampling (A-ES)
// ============================================
//
// Efraimidis-Spirakis weighted sampling without replacement:
//   key(i) = -ln(u_i) / w_i
// Taking the N smallest keys samples N items proportionally to weight.
//
// u_i is not drawn from a PRNG. It is derived from SHA-256(seed ":" id), so
// the same seed and pool always produce the same selection.

use sha2::{Digest, Sha256};

/// Bound that keeps the variate strictly inside (0, 1).
pub const VARIATE_EPSILON: f64 = 1e-12;

/// Reproducible pseudo-uniform value in (0, 1) for a seed and asset identifier.
pub fn deterministic_unit(seed: &str, asset_id: &str) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(b":");
    hasher.update(asset_id.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let value = u64::from_be_bytes(prefix);

    let unit = value as f64 / u64::MAX as f64;
    if unit <= 0.0 {
        VARIATE_EPSILON
    } else if unit >= 1.0 {
        1.0 - VARIATE_EPSILON
    } else {
        unit
    }
}

/// Exponential-clock sampling key; smaller keys rank first.
pub fn sampling_key(unit: f64, weight: f64) -> f64 {
    -unit.ln() / weight
}
