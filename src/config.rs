// Configuration values for the outbound clients and the orchestrator.
// Everything is passed in explicitly; nothing here reads the environment.

pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_ASSISTANT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TRAVEL_SEARCH_ENDPOINT: &str =
    "https://app.rakuten.co.jp/services/api/Travel/VacantHotelSearch/20170426";

// Retry configuration for a single outbound call
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff_ms: 200,
            max_backoff_ms: 5000,
            backoff_multiplier: 2.0,
            jitter_factor: 0.1,
        }
    }
}

impl RetryConfig {
    /// A policy that gives up after the first failure.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

// Transport settings shared by every client
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub retry: RetryConfig,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
            retry: RetryConfig::default(),
        }
    }
}

// Provider A: structured geocoding service
#[derive(Debug, Clone)]
pub struct StructuredGeocoderConfig {
    pub api_key: String,
    pub endpoint: String,
    pub region: String,
    pub language: String,
    // Appended to the free text to keep lookups inside the country
    pub address_suffix: String,
    pub http: HttpConfig,
}

impl StructuredGeocoderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_GEOCODE_ENDPOINT.to_string(),
            region: "jp".to_string(),
            language: "ja".to_string(),
            address_suffix: ", Japan".to_string(),
            http: HttpConfig::default(),
        }
    }
}

// Provider B: chat-completion assistant
#[derive(Debug, Clone)]
pub struct AssistantGeocoderConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub http: HttpConfig,
}

impl AssistantGeocoderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ASSISTANT_ENDPOINT.to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.1,
            max_tokens: 200,
            http: HttpConfig::default(),
        }
    }
}

// Travel search service
#[derive(Debug, Clone)]
pub struct TravelSearchConfig {
    pub application_id: String,
    pub endpoint: String,
    pub http: HttpConfig,
}

impl TravelSearchConfig {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            endpoint: DEFAULT_TRAVEL_SEARCH_ENDPOINT.to_string(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    // Radius (km) applied when a coordinate was resolved and the caller gave none
    pub default_search_radius: u32,
    // Widens log output only; never changes resolution or normalization
    pub debug: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            default_search_radius: 2,
            debug: false,
        }
    }
}

// A credential counts as configured only when it is non-blank
pub(crate) fn is_configured(credential: &str) -> bool {
    !credential.trim().is_empty()
}
