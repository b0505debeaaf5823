use crate::error::{FeaturedError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Media type of an asset as stored by the library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    Photo,
    Video,
    Audio,
    #[default]
    Other,
}

impl AssetType {
    /// Parse a stored type name; matching is case-insensitive.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "PHOTO" => AssetType::Photo,
            "VIDEO" => AssetType::Video,
            "AUDIO" => AssetType::Audio,
            _ => AssetType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Photo => "PHOTO",
            AssetType::Video => "VIDEO",
            AssetType::Audio => "AUDIO",
            AssetType::Other => "OTHER",
        }
    }
}

impl From<String> for AssetType {
    fn from(raw: String) -> Self {
        AssetType::parse(&raw)
    }
}

impl From<AssetType> for String {
    fn from(asset_type: AssetType) -> Self {
        asset_type.as_str().to_string()
    }
}

/// Opaque type-specific metadata payload (JSON bytes owned by the storage layer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecificMetadata(Vec<u8>);

impl SpecificMetadata {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Encode photo metadata into a payload.
    pub fn from_photo(meta: &PhotoMetadata) -> Result<Self> {
        Ok(Self(serde_json::to_vec(meta)?))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the payload as photo metadata.
    pub fn decode_photo(&self) -> Result<PhotoMetadata> {
        if self.0.is_empty() {
            return Err(FeaturedError::Metadata("empty payload".to_string()));
        }
        serde_json::from_slice(&self.0).map_err(|e| FeaturedError::Metadata(e.to_string()))
    }
}

/// Photo-specific attributes carried in the metadata payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub camera_model: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub lens_model: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub exposure_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub f_number: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub focal_length: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub iso_speed: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub gps_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub gps_longitude: f64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_raw: bool,
}

/// A JSON `null` leaves the field at its zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One asset eligible for featuring, as loaded by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub asset_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub rating: Option<i32>,
    pub liked: Option<bool>,
    pub taken_time: Option<DateTime<Utc>>,
    pub upload_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "SpecificMetadata::is_empty")]
    pub specific_metadata: SpecificMetadata,
}

impl Candidate {
    /// Stable identifier string (lowercase hyphenated UUID), if the asset has one.
    pub fn identifier(&self) -> Option<String> {
        self.asset_id.map(|id| id.to_string())
    }
}
