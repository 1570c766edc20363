// Location resolution and search response normalization for hotel search

pub mod config;
pub mod datum;
pub mod error;
pub mod geocoder;
pub mod normalizer;
pub mod orchestrator;
pub mod params;
pub mod reply_parser;
pub mod resolver;
pub mod retry;
pub mod search;
mod transport;

// Re-export key types for convenience
pub use config::{
    AssistantGeocoderConfig, HttpConfig, OrchestratorConfig, RetryConfig,
    StructuredGeocoderConfig, TravelSearchConfig,
};
pub use datum::{to_legacy_datum_seconds, GeoCoordinate, LegacyCoordinate};
pub use error::{ApiError, ClientError};
pub use geocoder::{AssistantGeocoder, Geocoder, StructuredGeocoder};
pub use normalizer::{
    HotelRecord, NormalizedResultSet, PayloadShape, ResultNormalizer, ReviewAverage, MAX_HOTELS,
};
pub use orchestrator::{SearchOrchestrator, SearchOutcome};
pub use params::SearchParams;
pub use reply_parser::{JsonObjectReplyParser, StructuredReplyParser};
pub use resolver::{CoordinateResolution, CoordinateResolver, Provenance};
pub use search::{SearchService, TravelSearchClient};
