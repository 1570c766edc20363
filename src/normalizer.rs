// Search response normalization.
//
// The travel search service is not consistent about how it nests hotels: the
// `hotels` node may be a list or a map, and each hotel may be wrapped in a
// `hotel` sibling array, carry its sections directly, or be a bare record.
// Every hotel node is classified into exactly one `PayloadShape` by a single
// ordered matcher, then mapped to a `HotelRecord`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Hard cap on returned records, regardless of how many the payload holds.
pub const MAX_HOTELS: usize = 100;

const UNKNOWN_NAME: &str = "unknown";
const NO_ACCESS_INFO: &str = "no info";
const SAMPLE_KEY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PayloadShape {
    /// `{"hotel": [{"hotelBasicInfo": ..}, {"roomInfo": ..}]}`
    NestedHotelArray,
    /// `{"hotelBasicInfo": .., "roomInfo": ..}`
    DirectFields,
    /// The node is the basic-info record itself.
    BareRecord,
    /// `{"1": <hotel>, "2": <hotel>}`
    NumericKeyedMap,
    /// `{"someName": <hotel>, ..}`
    NamedKeyedMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContainerKind {
    Missing,
    List,
    NumericKeyedMap,
    NamedKeyedMap,
    Unsupported(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReviewAverage {
    Score(f64),
    NotAvailable,
}

impl ReviewAverage {
    pub fn score(&self) -> Option<f64> {
        match self {
            ReviewAverage::Score(score) => Some(*score),
            ReviewAverage::NotAvailable => None,
        }
    }
}

impl fmt::Display for ReviewAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewAverage::Score(score) => write!(f, "{score}"),
            ReviewAverage::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for ReviewAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReviewAverage::Score(score) => serializer.serialize_f64(*score),
            ReviewAverage::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelRecord {
    pub name: String,
    pub minimum_charge: Option<i64>,
    pub access: String,
    pub address: String,
    pub review_average: ReviewAverage,
    pub review_count: u64,
    pub image_url: Option<String>,
    pub info_url: Option<String>,
    pub plan_list_url: Option<String>,
    pub special_offers: Option<String>,
    pub nightly_total_charge: Option<i64>,
}

impl HotelRecord {
    /// Whole stars (0-5) for the review average; zero when unreviewed.
    pub fn star_count(&self) -> u8 {
        match self.review_average {
            ReviewAverage::Score(score) if self.review_count > 0 => {
                score.floor().clamp(0.0, 5.0) as u8
            }
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadDiagnostics {
    pub container: ContainerKind,
    // Hotel nodes examined (each key of a keyed map counts once)
    pub node_count: usize,
    pub skipped_nodes: usize,
    pub truncated: bool,
    pub shape_counts: BTreeMap<PayloadShape, usize>,
    pub sample_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResultSet {
    pub hotels: Vec<HotelRecord>,
    // `pagingInfo.recordCount`; may exceed `hotels.len()`
    pub record_count: Option<u64>,
    pub recognized: bool,
    pub diagnostics: PayloadDiagnostics,
}

impl NormalizedResultSet {
    /// The payload was understood and simply held no hotels.
    pub fn is_empty_success(&self) -> bool {
        self.recognized && self.hotels.is_empty()
    }

    /// Hotels were present but none matched a known shape.
    pub fn is_unrecognized(&self) -> bool {
        !self.recognized
    }
}

// A classified hotel node, borrowing from the payload
struct HotelNode<'a> {
    basic: &'a Map<String, Value>,
    rooms: Option<&'a Value>,
    shape: PayloadShape,
}

/// Classifies a single hotel node. Checks run in a fixed order and the first
/// match wins; `None` means the node is not a hotel.
fn classify_node(node: &Value) -> Option<HotelNode<'_>> {
    let object = node.as_object()?;

    if let Some(wrapper) = object.get("hotel") {
        let siblings: &[Value] = match wrapper {
            Value::Array(items) => items,
            Value::Object(_) => std::slice::from_ref(wrapper),
            _ => &[],
        };

        let mut basic = None;
        let mut rooms = None;
        // Later siblings override earlier ones
        for sibling in siblings.iter().filter_map(Value::as_object) {
            if let Some(info) = sibling.get("hotelBasicInfo").and_then(Value::as_object) {
                basic = Some(info);
            }
            if let Some(info) = sibling.get("roomInfo") {
                rooms = Some(info);
            }
        }

        if let Some(basic) = basic {
            return Some(HotelNode {
                basic,
                rooms,
                shape: PayloadShape::NestedHotelArray,
            });
        }
    }

    if let Some(basic) = object.get("hotelBasicInfo").and_then(Value::as_object) {
        return Some(HotelNode {
            basic,
            rooms: object.get("roomInfo"),
            shape: PayloadShape::DirectFields,
        });
    }

    if object.contains_key("hotelName") {
        return Some(HotelNode {
            basic: object,
            rooms: object.get("roomInfo"),
            shape: PayloadShape::BareRecord,
        });
    }

    None
}

fn is_numeric_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

// Numeric order without parsing, so arbitrarily long keys cannot overflow
fn numeric_sort_key(key: &str) -> (usize, &str) {
    let digits = key.trim_start_matches('0');
    (digits.len(), digits)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn text<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

fn non_empty_text(record: &Map<String, Value>, key: &str) -> Option<String> {
    text(record, key)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

fn integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    number(value).map(|f| f.round() as i64)
}

// First room entry exposing `dailyCharge.total` decides; later rooms are not consulted
fn first_daily_total(rooms: &Value) -> Option<i64> {
    rooms
        .as_array()?
        .iter()
        .find_map(|room| room.get("dailyCharge")?.get("total"))
        .and_then(integer)
}

fn build_record(node: &HotelNode<'_>) -> HotelRecord {
    let basic = node.basic;

    let address = format!(
        "{}{}",
        text(basic, "address1").unwrap_or_default(),
        text(basic, "address2").unwrap_or_default()
    )
    .trim()
    .to_string();

    let review_count = basic
        .get("reviewCount")
        .and_then(integer)
        .map_or(0, |count| count.max(0) as u64);

    HotelRecord {
        name: text(basic, "hotelName").unwrap_or(UNKNOWN_NAME).to_string(),
        minimum_charge: basic.get("hotelMinCharge").and_then(integer),
        access: text(basic, "access").unwrap_or(NO_ACCESS_INFO).to_string(),
        address,
        review_average: basic
            .get("reviewAverage")
            .and_then(number)
            .map_or(ReviewAverage::NotAvailable, ReviewAverage::Score),
        review_count,
        image_url: non_empty_text(basic, "hotelImageUrl"),
        info_url: non_empty_text(basic, "hotelInformationUrl"),
        plan_list_url: non_empty_text(basic, "planListUrl"),
        special_offers: non_empty_text(basic, "hotelSpecial"),
        nightly_total_charge: node.rooms.and_then(first_daily_total),
    }
}

// Accumulates records in discovery order up to the cap
struct Collector {
    hotels: Vec<HotelRecord>,
    limit: usize,
    node_count: usize,
    skipped_nodes: usize,
    truncated: bool,
    shape_counts: BTreeMap<PayloadShape, usize>,
}

impl Collector {
    fn new(limit: usize) -> Self {
        Self {
            hotels: Vec::new(),
            limit,
            node_count: 0,
            skipped_nodes: 0,
            truncated: false,
            shape_counts: BTreeMap::new(),
        }
    }

    fn matched(&self) -> usize {
        self.shape_counts.values().sum()
    }

    /// Records one hotel node. `shape` overrides the node's own shape when the
    /// node sits inside a keyed map. Returns `false` once the cap is exceeded.
    fn push(&mut self, node: Option<HotelNode<'_>>, shape: Option<PayloadShape>) -> bool {
        self.node_count += 1;
        let Some(node) = node else {
            self.skipped_nodes += 1;
            return true;
        };

        if self.hotels.len() >= self.limit {
            self.truncated = true;
            return false;
        }

        *self
            .shape_counts
            .entry(shape.unwrap_or(node.shape))
            .or_insert(0) += 1;
        self.hotels.push(build_record(&node));
        true
    }
}

// Search response normalizer
pub struct ResultNormalizer {}

impl ResultNormalizer {
    pub fn new() -> Self {
        Self {}
    }

    pub fn normalize(&self, raw: &Value) -> NormalizedResultSet {
        let record_count = raw
            .pointer("/pagingInfo/recordCount")
            .and_then(integer)
            .map(|count| count.max(0) as u64);

        let mut collector = Collector::new(MAX_HOTELS);
        let mut sample_keys = Vec::new();

        let (container, recognized) = match raw.get("hotels") {
            None | Some(Value::Null) => (ContainerKind::Missing, true),
            Some(Value::Array(items)) => {
                if let Some(first) = items.first().and_then(Value::as_object) {
                    sample_keys = first.keys().take(SAMPLE_KEY_LIMIT).cloned().collect();
                }
                for item in items {
                    if !collector.push(classify_node(item), None) {
                        break;
                    }
                }
                (ContainerKind::List, items.is_empty() || collector.matched() > 0)
            }
            Some(Value::Object(map)) => {
                sample_keys = map.keys().take(SAMPLE_KEY_LIMIT).cloned().collect();
                let container = self.collect_keyed(map, &mut collector);
                (container, map.is_empty() || collector.matched() > 0)
            }
            Some(other) => (ContainerKind::Unsupported(type_name(other)), false),
        };

        if !recognized {
            tracing::warn!(
                container = ?container,
                nodes = collector.node_count,
                sample_keys = ?sample_keys,
                "search response has hotels but no recognizable hotel shape"
            );
        }

        NormalizedResultSet {
            hotels: collector.hotels,
            record_count,
            recognized,
            diagnostics: PayloadDiagnostics {
                container,
                node_count: collector.node_count,
                skipped_nodes: collector.skipped_nodes,
                truncated: collector.truncated,
                shape_counts: collector.shape_counts,
                sample_keys,
            },
        }
    }

    fn collect_keyed(&self, map: &Map<String, Value>, collector: &mut Collector) -> ContainerKind {
        let mut numeric_keys: Vec<&String> = map.keys().filter(|k| is_numeric_key(k)).collect();

        if numeric_keys.is_empty() {
            for value in map.values() {
                if !collector.push(classify_node(value), Some(PayloadShape::NamedKeyedMap)) {
                    break;
                }
            }
            return ContainerKind::NamedKeyedMap;
        }

        // Non-numeric keys are ignored once any numeric key exists
        numeric_keys.sort_by(|a, b| numeric_sort_key(a).cmp(&numeric_sort_key(b)));
        for key in numeric_keys {
            let node = match &map[key.as_str()] {
                // Only the first hotel per key
                Value::Array(items) => items.iter().find_map(classify_node),
                value => classify_node(value),
            };
            if !collector.push(node, Some(PayloadShape::NumericKeyedMap)) {
                break;
            }
        }
        ContainerKind::NumericKeyedMap
    }
}

impl Default for ResultNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// Sample payload in the service's `formatVersion=1` layout
pub const SAMPLE_RESPONSE_PATH: &str = "samples/vacant_hotel_search.json";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn basic_info(name: &str) -> Value {
        json!({
            "hotelNo": 1217,
            "hotelName": name,
            "hotelMinCharge": 8500,
            "access": "3 min walk from the station",
            "address1": "Tokyo",
            "address2": " Chiyoda-ku Marunouchi 1-9-1",
            "reviewAverage": 4.36,
            "reviewCount": 2145,
            "hotelImageUrl": "https://img.example.com/1217.jpg",
            "hotelInformationUrl": "https://travel.example.com/1217",
            "planListUrl": "https://travel.example.com/1217/plans",
            "hotelSpecial": "Breakfast included"
        })
    }

    fn room_info() -> Value {
        json!([
            {"roomBasicInfo": {"roomName": "Twin", "planName": "Standard"}},
            {"dailyCharge": {"stayDate": "2025-12-01", "rakutenCharge": 9000, "total": 18000}},
            {"dailyCharge": {"stayDate": "2025-12-01", "total": 25000}}
        ])
    }

    fn nested(name: &str) -> Value {
        json!({"hotel": [{"hotelBasicInfo": basic_info(name)}, {"hotelRatingInfo": {}}, {"roomInfo": room_info()}]})
    }

    fn direct(name: &str) -> Value {
        json!({"hotelBasicInfo": basic_info(name), "roomInfo": room_info()})
    }

    fn bare(name: &str) -> Value {
        let mut record = basic_info(name);
        record["roomInfo"] = room_info();
        record
    }

    fn expected_record(name: &str) -> HotelRecord {
        HotelRecord {
            name: name.to_string(),
            minimum_charge: Some(8500),
            access: "3 min walk from the station".to_string(),
            address: "Tokyo Chiyoda-ku Marunouchi 1-9-1".to_string(),
            review_average: ReviewAverage::Score(4.36),
            review_count: 2145,
            image_url: Some("https://img.example.com/1217.jpg".to_string()),
            info_url: Some("https://travel.example.com/1217".to_string()),
            plan_list_url: Some("https://travel.example.com/1217/plans".to_string()),
            special_offers: Some("Breakfast included".to_string()),
            nightly_total_charge: Some(18000),
        }
    }

    #[test_case(json!({"hotels": [nested("Tokyo Inn")]}), PayloadShape::NestedHotelArray; "nested hotel array")]
    #[test_case(json!({"hotels": [direct("Tokyo Inn")]}), PayloadShape::DirectFields; "direct fields")]
    #[test_case(json!({"hotels": [bare("Tokyo Inn")]}), PayloadShape::BareRecord; "bare record")]
    #[test_case(json!({"hotels": {"0": [nested("Tokyo Inn")]}}), PayloadShape::NumericKeyedMap; "numeric keyed map")]
    #[test_case(json!({"hotels": {"tokyoInn": direct("Tokyo Inn")}}), PayloadShape::NamedKeyedMap; "named keyed map")]
    fn test_every_shape_yields_the_same_record(payload: Value, shape: PayloadShape) {
        let result = ResultNormalizer::new().normalize(&payload);

        assert!(result.recognized);
        assert_eq!(result.hotels, vec![expected_record("Tokyo Inn")]);
        assert_eq!(result.diagnostics.shape_counts.get(&shape), Some(&1));
    }

    #[test]
    fn test_caps_at_one_hundred_in_discovery_order() {
        let nodes: Vec<Value> = (0..150).map(|i| nested(&format!("Hotel {i}"))).collect();
        let payload = json!({"pagingInfo": {"recordCount": 150}, "hotels": nodes});

        let result = ResultNormalizer::new().normalize(&payload);

        assert_eq!(result.hotels.len(), MAX_HOTELS);
        for (i, hotel) in result.hotels.iter().enumerate() {
            assert_eq!(hotel.name, format!("Hotel {i}"));
        }
        assert!(result.diagnostics.truncated);
        assert_eq!(result.record_count, Some(150));
    }

    #[test]
    fn test_caps_numeric_keyed_map() {
        let map: Map<String, Value> = (0..150)
            .map(|i| (i.to_string(), json!([direct(&format!("Hotel {i}"))])))
            .collect();
        let result = ResultNormalizer::new().normalize(&json!({"hotels": map}));

        assert_eq!(result.hotels.len(), MAX_HOTELS);
        assert_eq!(result.hotels[99].name, "Hotel 99");
        assert!(result.diagnostics.truncated);
    }

    #[test]
    fn test_exactly_one_hundred_is_not_truncated() {
        let nodes: Vec<Value> = (0..100).map(|i| bare(&format!("Hotel {i}"))).collect();
        let result = ResultNormalizer::new().normalize(&json!({"hotels": nodes}));

        assert_eq!(result.hotels.len(), 100);
        assert!(!result.diagnostics.truncated);
    }

    #[test]
    fn test_missing_review_fields_use_defaults() {
        let payload = json!({"hotels": [{"hotel": [{"hotelBasicInfo": {"hotelName": "Quiet Ryokan"}}]}]});
        let hotel = &ResultNormalizer::new().normalize(&payload).hotels[0];

        assert_eq!(hotel.review_count, 0);
        assert_eq!(hotel.review_average, ReviewAverage::NotAvailable);
        assert_eq!(hotel.review_average.to_string(), "N/A");
        assert_eq!(hotel.star_count(), 0);
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let payload = json!({"hotels": [{"hotelBasicInfo": {
            "hotelName": null,
            "access": null,
            "reviewCount": null,
            "reviewAverage": null,
            "hotelMinCharge": null,
            "hotelImageUrl": ""
        }}]});
        let hotel = &ResultNormalizer::new().normalize(&payload).hotels[0];

        assert_eq!(hotel.name, "unknown");
        assert_eq!(hotel.access, "no info");
        assert_eq!(hotel.address, "");
        assert_eq!(hotel.review_count, 0);
        assert_eq!(hotel.review_average, ReviewAverage::NotAvailable);
        assert_eq!(hotel.minimum_charge, None);
        assert_eq!(hotel.image_url, None);
        assert_eq!(hotel.nightly_total_charge, None);
    }

    #[test]
    fn test_empty_list_is_recognized_zero_results() {
        let result = ResultNormalizer::new().normalize(&json!({"hotels": []}));
        assert!(result.is_empty_success());
        assert!(!result.is_unrecognized());
    }

    #[test]
    fn test_unmatched_nodes_are_not_recognized() {
        let payload = json!({"hotels": [{"facility": "pool"}, {"hotel": "oops"}, 42]});
        let result = ResultNormalizer::new().normalize(&payload);

        assert!(result.is_unrecognized());
        assert!(!result.is_empty_success());
        assert_eq!(result.diagnostics.skipped_nodes, 3);
        assert_eq!(result.diagnostics.sample_keys, vec!["facility".to_string()]);
    }

    #[test_case(json!({}), true; "missing hotels")]
    #[test_case(json!({"hotels": null}), true; "null hotels")]
    #[test_case(json!({"hotels": {}}), true; "empty map")]
    #[test_case(json!({"hotels": "none"}), false; "string hotels")]
    #[test_case(json!({"hotels": {"1": {"note": "x"}}}), false; "numeric map without hotels")]
    #[test_case(json!({"hotels": {"a": [1, 2]}}), false; "named map without hotels")]
    fn test_recognition(payload: Value, recognized: bool) {
        let result = ResultNormalizer::new().normalize(&payload);
        assert_eq!(result.recognized, recognized);
        assert!(result.hotels.is_empty());
    }

    #[test]
    fn test_unmatched_nodes_are_skipped_not_fatal() {
        let payload = json!({"hotels": [{"facility": "pool"}, direct("A"), 7, bare("B")]});
        let result = ResultNormalizer::new().normalize(&payload);

        let names: Vec<&str> = result.hotels.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(result.diagnostics.skipped_nodes, 2);
        assert_eq!(result.diagnostics.node_count, 4);
    }

    #[test]
    fn test_numeric_keys_visit_in_numeric_order() {
        let payload = json!({"hotels": {
            "10": direct("Ten"),
            "2": direct("Two"),
            "note": direct("Ignored"),
            "1": [bare("One"), bare("One again")]
        }});
        let result = ResultNormalizer::new().normalize(&payload);

        let names: Vec<&str> = result.hotels.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Ten"]);
        assert_eq!(result.diagnostics.container, ContainerKind::NumericKeyedMap);
    }

    #[test]
    fn test_numeric_key_list_skips_leading_non_hotels() {
        let payload = json!({"hotels": {"0": [{"pagingInfo": {}}, nested("First"), nested("Second")]}});
        let result = ResultNormalizer::new().normalize(&payload);

        assert_eq!(result.hotels.len(), 1);
        assert_eq!(result.hotels[0].name, "First");
    }

    #[test]
    fn test_named_keys_keep_payload_order() {
        let payload = json!({"hotels": {"zeta": direct("Zeta"), "alpha": bare("Alpha"), "mid": nested("Mid")}});
        let result = ResultNormalizer::new().normalize(&payload);

        let names: Vec<&str> = result.hotels.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(result.diagnostics.container, ContainerKind::NamedKeyedMap);
    }

    #[test]
    fn test_nested_wrapper_takes_later_sibling() {
        let payload = json!({"hotels": [{"hotel": [
            {"hotelBasicInfo": {"hotelName": "Old"}},
            {"roomInfo": [{"dailyCharge": {"total": 100}}]},
            {"hotelBasicInfo": {"hotelName": "New"}},
            {"roomInfo": [{"dailyCharge": {"total": 200}}]}
        ]}]});
        let hotel = &ResultNormalizer::new().normalize(&payload).hotels[0];

        assert_eq!(hotel.name, "New");
        assert_eq!(hotel.nightly_total_charge, Some(200));
    }

    #[test]
    fn test_nested_wrapper_as_single_map() {
        let payload = json!({"hotels": [{"hotel": {"hotelBasicInfo": {"hotelName": "Solo"}}}]});
        let result = ResultNormalizer::new().normalize(&payload);

        assert_eq!(result.hotels[0].name, "Solo");
        assert_eq!(
            result.diagnostics.shape_counts.get(&PayloadShape::NestedHotelArray),
            Some(&1)
        );
    }

    #[test]
    fn test_wrapper_without_basic_info_falls_through_to_direct() {
        let payload = json!({"hotels": [{"hotel": [{"roomInfo": []}], "hotelBasicInfo": {"hotelName": "Direct"}}]});
        let result = ResultNormalizer::new().normalize(&payload);

        assert_eq!(result.hotels[0].name, "Direct");
        assert_eq!(
            result.diagnostics.shape_counts.get(&PayloadShape::DirectFields),
            Some(&1)
        );
    }

    #[test]
    fn test_nightly_charge_stops_at_first_total() {
        let rooms = json!([
            {"roomBasicInfo": {}},
            {"dailyCharge": {"stayDate": "2025-12-01"}},
            {"dailyCharge": {"total": "12000"}},
            {"dailyCharge": {"total": 99999}}
        ]);
        assert_eq!(first_daily_total(&rooms), Some(12000));
        assert_eq!(first_daily_total(&json!({"dailyCharge": {"total": 1}})), None);
        assert_eq!(first_daily_total(&json!([])), None);
    }

    #[test]
    fn test_record_count_is_independent_of_hotels() {
        let payload = json!({"pagingInfo": {"recordCount": 2381, "pageCount": 80}, "hotels": [bare("A")]});
        let result = ResultNormalizer::new().normalize(&payload);

        assert_eq!(result.record_count, Some(2381));
        assert_eq!(result.hotels.len(), 1);
    }

    #[test_case(4.36, 10, 4; "regular")]
    #[test_case(5.0, 1, 5; "perfect")]
    #[test_case(7.2, 1, 5; "clamped")]
    #[test_case(4.9, 0, 0; "no reviews")]
    fn test_star_count(average: f64, count: u64, stars: u8) {
        let mut record = expected_record("x");
        record.review_average = ReviewAverage::Score(average);
        record.review_count = count;
        assert_eq!(record.star_count(), stars);
    }

    #[test]
    fn test_review_average_serializes_sentinel() {
        assert_eq!(serde_json::to_value(ReviewAverage::NotAvailable).unwrap(), json!("N/A"));
        assert_eq!(serde_json::to_value(ReviewAverage::Score(3.5)).unwrap(), json!(3.5));
    }

    #[test]
    fn test_sample_response() {
        let body = std::fs::read_to_string(SAMPLE_RESPONSE_PATH);
        assert!(body.is_ok(), "Failed to load sample response: {:?}", body.err());
        let payload: Value = serde_json::from_str(&body.unwrap()).unwrap();

        let result = ResultNormalizer::new().normalize(&payload);

        assert!(result.recognized);
        assert_eq!(result.record_count, Some(27));
        assert_eq!(result.hotels.len(), 3);
        assert_eq!(result.hotels[0].name, "Hotel Marunouchi Station");
        assert_eq!(result.hotels[0].nightly_total_charge, Some(32400));
        assert_eq!(result.hotels[1].review_average, ReviewAverage::NotAvailable);
        assert_eq!(result.hotels[2].nightly_total_charge, None);
    }
}
