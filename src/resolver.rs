// Coordinate resolution with strict-priority fallback.
//
// Providers are tried one after another, never raced. The first usable answer
// wins; every failure is logged and swallowed so that the caller always gets a
// well-formed (possibly empty) resolution.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{is_configured, AssistantGeocoderConfig, StructuredGeocoderConfig};
use crate::datum::{GeoCoordinate, LegacyCoordinate};
use crate::error::ClientError;
use crate::geocoder::{AssistantGeocoder, Geocoder, StructuredGeocoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provenance {
    #[serde(rename = "google_geocoding")]
    StructuredGeocoder,
    #[serde(rename = "openai")]
    Assistant,
    #[serde(rename = "none")]
    None,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::StructuredGeocoder => "google_geocoding",
            Provenance::Assistant => "openai",
            Provenance::None => "none",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateResolution {
    pub coordinate: Option<LegacyCoordinate>,
    pub provenance: Provenance,
    pub formatted_place_name: Option<String>,
    // Only set by providers that answer in WGS84
    pub wgs84: Option<GeoCoordinate>,
}

impl CoordinateResolution {
    pub fn empty() -> Self {
        Self {
            coordinate: None,
            provenance: Provenance::None,
            formatted_place_name: None,
            wgs84: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinate.is_none()
    }
}

#[derive(Clone, Default)]
pub struct CoordinateResolver {
    primary: Option<Arc<dyn Geocoder>>,
    fallback: Option<Arc<dyn Geocoder>>,
}

impl CoordinateResolver {
    pub fn new(primary: Option<Arc<dyn Geocoder>>, fallback: Option<Arc<dyn Geocoder>>) -> Self {
        Self { primary, fallback }
    }

    /// Builds the resolver from provider configs. A provider whose config is
    /// absent or whose key is blank is left out.
    pub fn from_config(
        structured: Option<StructuredGeocoderConfig>,
        assistant: Option<AssistantGeocoderConfig>,
    ) -> Result<Self, ClientError> {
        let primary = match structured.filter(|c| is_configured(&c.api_key)) {
            Some(config) => Some(Arc::new(StructuredGeocoder::new(config)?) as Arc<dyn Geocoder>),
            None => None,
        };
        let fallback = match assistant.filter(|c| is_configured(&c.api_key)) {
            Some(config) => Some(Arc::new(AssistantGeocoder::new(config)?) as Arc<dyn Geocoder>),
            None => None,
        };
        Ok(Self::new(primary, fallback))
    }

    pub fn has_providers(&self) -> bool {
        self.primary.is_some() || self.fallback.is_some()
    }

    pub async fn resolve(&self, location: &str) -> CoordinateResolution {
        for (tier, provider) in [("primary", &self.primary), ("fallback", &self.fallback)] {
            let Some(provider) = provider else {
                continue;
            };

            match provider.geocode(location).await {
                Ok(Some(resolution)) if !resolution.is_empty() => {
                    tracing::info!(
                        location,
                        tier,
                        provenance = %resolution.provenance,
                        "resolved location"
                    );
                    return resolution;
                }
                Ok(_) => {
                    tracing::info!(location, tier, provenance = %provider.provenance(), "provider had no match");
                }
                Err(e) => {
                    tracing::warn!(
                        location,
                        tier,
                        provenance = %provider.provenance(),
                        error = %e,
                        "provider failed, falling through"
                    );
                }
            }
        }

        tracing::info!(location, "location could not be resolved");
        CoordinateResolution::empty()
    }
}
