use crate::models::{AssetType, Candidate, PhotoMetadata};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Best-effort decode of a candidate's photo metadata.
///
/// Only photos with a non-empty payload are decoded. Any failure yields `None`,
/// which callers treat the same as a payload with every field absent.
pub fn decode_photo_metadata(candidate: &Candidate) -> Option<PhotoMetadata> {
    if candidate.asset_type != AssetType::Photo || candidate.specific_metadata.is_empty() {
        return None;
    }

    match candidate.specific_metadata.decode_photo() {
        Ok(meta) => Some(meta),
        Err(e) => {
            debug!(
                asset_id = ?candidate.asset_id,
                error = %e,
                "Photo metadata decode failed, scoring without it"
            );
            None
        }
    }
}

/// When the photo was taken: metadata capture time, then the asset's capture
/// time, then its upload time.
pub fn resolve_taken_time(candidate: &Candidate, meta: &PhotoMetadata) -> Option<DateTime<Utc>> {
    meta.taken_time
        .or(candidate.taken_time)
        .or(candidate.upload_time)
}

/// GPS counts only when both coordinates are finite and not the (0,0) "unset" value.
pub fn has_valid_gps(meta: &PhotoMetadata) -> bool {
    if !meta.gps_latitude.is_finite() || !meta.gps_longitude.is_finite() {
        return false;
    }
    !(meta.gps_latitude == 0.0 && meta.gps_longitude == 0.0)
}
