// Geocoding providers used by the coordinate resolver.
//
// Provider A is a structured geocoding service answering in WGS84 degrees; its
// output goes through the datum conversion. Provider B is a chat assistant
// asked to answer directly in legacy-datum seconds, so only rounding applies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{is_configured, AssistantGeocoderConfig, StructuredGeocoderConfig};
use crate::datum::{to_legacy_datum_seconds, GeoCoordinate, LegacyCoordinate};
use crate::error::{ApiError, ClientError};
use crate::reply_parser::{JsonObjectReplyParser, StructuredReplyParser};
use crate::resolver::{CoordinateResolution, Provenance};
use crate::transport::{build_http_client, send_json};

#[async_trait]
pub trait Geocoder: Send + Sync {
    fn provenance(&self) -> Provenance;

    /// `Ok(None)` means the provider answered but had nothing usable.
    async fn geocode(&self, location: &str) -> Result<Option<CoordinateResolution>, ApiError>;
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    formatted_address: Option<String>,
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLatLng,
}

#[derive(Debug, Deserialize)]
struct GeocodeLatLng {
    lat: f64,
    lng: f64,
}

pub struct StructuredGeocoder {
    client: reqwest::Client,
    config: StructuredGeocoderConfig,
}

impl StructuredGeocoder {
    pub fn new(config: StructuredGeocoderConfig) -> Result<Self, ClientError> {
        if !is_configured(&config.api_key) {
            return Err(ClientError::ConfigError(
                "structured geocoder API key is empty".to_string(),
            ));
        }
        let client = build_http_client(&config.http)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Geocoder for StructuredGeocoder {
    fn provenance(&self) -> Provenance {
        Provenance::StructuredGeocoder
    }

    async fn geocode(&self, location: &str) -> Result<Option<CoordinateResolution>, ApiError> {
        let address = format!("{}{}", location, self.config.address_suffix);
        let config = &self.config;

        let response: GeocodeResponse = send_json(&config.http, "structured_geocoder", || {
            self.client.get(&config.endpoint).query(&[
                ("address", address.as_str()),
                ("key", config.api_key.as_str()),
                ("language", config.language.as_str()),
                ("region", config.region.as_str()),
            ])
        })
        .await?;

        if response.status != "OK" {
            tracing::debug!(status = %response.status, location, "geocoder returned no match");
            return Ok(None);
        }

        let Some(first) = response.results.into_iter().next() else {
            return Ok(None);
        };

        let wgs84 = GeoCoordinate::new(first.geometry.location.lat, first.geometry.location.lng);
        Ok(Some(CoordinateResolution {
            coordinate: Some(to_legacy_datum_seconds(wgs84)),
            provenance: Provenance::StructuredGeocoder,
            formatted_place_name: first.formatted_address,
            wgs84: Some(wgs84),
        }))
    }
}

const ASSISTANT_SYSTEM_PROMPT: &str = r#"You are an assistant that looks up the latitude and longitude of a place name.

Return the latitude and longitude of the place the user names.

Requirements:
- Use the Tokyo Datum (the legacy Japanese geodetic system), not WGS84.
- Express both values in arc-seconds, not degrees.
- Use at most two digits after the decimal point.
- Latitude is north (positive) and longitude is east (positive).

Always answer in JSON:
{"latitude": <latitude in seconds>, "longitude": <longitude in seconds>, "location_name": "<official place name>"}

Examples (Tokyo Datum, seconds):
- Tokyo Station: {"latitude": 128440.51, "longitude": 503172.21, "location_name": "Tokyo Station"}
- Ginza: {"latitude": 128400.84, "longitude": 503154.89, "location_name": "Ginza, Chuo-ku, Tokyo"}

Note: 1 degree = 3600 seconds."#;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

pub struct AssistantGeocoder {
    client: reqwest::Client,
    config: AssistantGeocoderConfig,
    parser: Box<dyn StructuredReplyParser>,
}

impl AssistantGeocoder {
    pub fn new(config: AssistantGeocoderConfig) -> Result<Self, ClientError> {
        Self::with_parser(config, Box::new(JsonObjectReplyParser::new()))
    }

    pub fn with_parser(
        config: AssistantGeocoderConfig,
        parser: Box<dyn StructuredReplyParser>,
    ) -> Result<Self, ClientError> {
        if !is_configured(&config.api_key) {
            return Err(ClientError::ConfigError(
                "assistant API key is empty".to_string(),
            ));
        }
        let client = build_http_client(&config.http)?;
        Ok(Self {
            client,
            config,
            parser,
        })
    }
}

#[async_trait]
impl Geocoder for AssistantGeocoder {
    fn provenance(&self) -> Provenance {
        Provenance::Assistant
    }

    async fn geocode(&self, location: &str) -> Result<Option<CoordinateResolution>, ApiError> {
        let user_prompt = format!(
            "Give the latitude and longitude of the following place in Tokyo Datum seconds: {location}"
        );
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ASSISTANT_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        let config = &self.config;

        let response: ChatResponse = send_json(&config.http, "assistant_geocoder", || {
            self.client
                .post(&config.endpoint)
                .bearer_auth(&config.api_key)
                .json(&request)
        })
        .await?;

        let Some(reply) = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
        else {
            return Ok(None);
        };

        let Some(parsed) = self.parser.parse(&reply) else {
            tracing::debug!(location, reply = %reply, "assistant reply had no usable coordinate");
            return Ok(None);
        };

        Ok(Some(CoordinateResolution {
            coordinate: Some(LegacyCoordinate::from_seconds(
                parsed.latitude,
                parsed.longitude,
            )),
            provenance: Provenance::Assistant,
            formatted_place_name: parsed.location_name,
            wgs84: None,
        }))
    }
}
