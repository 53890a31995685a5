//! # Trade Query DTOs
//!
//! Raw `GET /trades` query parameters and their validation into a
//! [`TradeQuery`].
//!
//! Every parameter arrives as text so that a malformed value produces a
//! [`ApplicationError::Validation`] naming the parameter, rather than a
//! framework-level rejection. Validation runs before any filtering.
//!
//! # Accepted timestamp formats
//!
//! | Form | Example | Interpretation |
//! |------|---------|----------------|
//! | RFC 3339 | `2024-01-02T03:04:05Z`, `2024-01-02T03:04:05.5-05:00` | as given |
//! | Naive date-time | `2024-01-02T03:04:05`, `2024-01-02 03:04` | UTC |
//! | Date | `2024-01-02` | midnight UTC |
//! | Unix seconds | `1704164645` | UTC |
//!
//! A literal `+` in a query string decodes to a space, so positive offsets
//! must be sent percent-encoded (`%2B02:00`).

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::trade_query::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, Pagination, TradeQuery,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Query parameters of `GET /trades`, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeQueryParams {
    /// Filter by asset class.
    pub asset_class: Option<String>,
    /// Trades executed at or after this instant.
    pub start: Option<String>,
    /// Trades executed at or before this instant.
    pub end: Option<String>,
    /// Trades priced at or below this value.
    pub max_price: Option<String>,
    /// Trades priced at or above this value.
    pub min_price: Option<String>,
    /// Filter by `BUY` / `SELL`.
    pub trade_type: Option<String>,
    /// 1-based page number.
    pub page: Option<String>,
    /// Records per page.
    pub per_page: Option<String>,
    /// Field to sort by.
    pub sort: Option<String>,
}

impl TradeQueryParams {
    /// Validates the parameters into a [`TradeQuery`].
    ///
    /// Empty `assetClass`, `tradeType` and `sort` values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for the first parameter that
    /// cannot be parsed or is out of range.
    pub fn validate(&self) -> ApplicationResult<TradeQuery> {
        let start = parse_optional(&self.start, "start", parse_timestamp)?;
        let end = parse_optional(&self.end, "end", parse_timestamp)?;
        let max_price = parse_optional(&self.max_price, "maxPrice", parse_price)?;
        let min_price = parse_optional(&self.min_price, "minPrice", parse_price)?;
        let page = parse_optional(&self.page, "page", parse_page)?.unwrap_or(DEFAULT_PAGE);
        let per_page =
            parse_optional(&self.per_page, "perPage", parse_count)?.unwrap_or(DEFAULT_PER_PAGE);
        let pagination = Pagination::new(page, per_page)?;

        let mut query = TradeQuery::new()
            .with_time_range(start, end)
            .with_price_range(min_price, max_price)
            .with_pagination(pagination);

        if let Some(asset_class) = non_empty(&self.asset_class) {
            query = query.with_asset_class(asset_class);
        }
        if let Some(trade_type) = non_empty(&self.trade_type) {
            query = query.with_trade_type(trade_type);
        }
        if let Some(sort) = non_empty(&self.sort) {
            query = query.with_sort_name(sort);
        }

        Ok(query)
    }
}

impl TryFrom<TradeQueryParams> for TradeQuery {
    type Error = ApplicationError;

    fn try_from(params: TradeQueryParams) -> Result<Self, Self::Error> {
        params.validate()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_optional<T>(
    value: &Option<String>,
    parameter: &str,
    parse: fn(&str) -> Result<T, String>,
) -> ApplicationResult<Option<T>> {
    value
        .as_deref()
        .map(|raw| parse(raw.trim()).map_err(|msg| ApplicationError::validation(parameter, msg)))
        .transpose()
}

/// Parses a timestamp in any of the accepted forms.
///
/// # Errors
///
/// Returns a message describing the expected formats.
///
/// # Examples
///
/// ```
/// use trade_query::application::dto::trade_query_dto::parse_timestamp;
///
/// let a = parse_timestamp("2024-01-02").unwrap();
/// let b = parse_timestamp("2024-01-02T00:00:00Z").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_timestamp("yesterday").is_err());
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }
    if let Ok(secs) = raw.parse::<i64>()
        && let Some(ts) = DateTime::from_timestamp(secs, 0)
    {
        return Ok(ts);
    }
    Err(format!(
        "'{raw}' is not a valid datetime (expected ISO-8601, e.g. 2024-01-02T03:04:05Z)"
    ))
}

fn parse_price(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid number"))?;
    if !value.is_finite() {
        return Err(format!("'{raw}' is not a finite number"));
    }
    Ok(value)
}

fn parse_count(raw: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("'{raw}' is not a valid non-negative integer"))
}

/// Page numbers beyond `u32::MAX` saturate; such a page is always past the end.
fn parse_page(raw: &str) -> Result<u32, String> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{raw}' is not a valid non-negative integer"));
    }
    Ok(digits.parse().unwrap_or(u32::MAX))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::sort::SortField;
    use crate::application::services::trade_query::query as query_store;
    use crate::infrastructure::fixtures::generate_records;
    use chrono::TimeZone;

    fn params() -> TradeQueryParams {
        TradeQueryParams::default()
    }

    #[test]
    fn empty_params_use_defaults() {
        let query = params().validate().unwrap();
        assert_eq!(query, TradeQuery::new());
        assert_eq!(query.pagination.page(), 1);
        assert_eq!(query.pagination.per_page(), 10);
    }

    #[test]
    fn deserializes_camel_case_names() {
        let params: TradeQueryParams = serde_json::from_value(serde_json::json!({
            "assetClass": "FX",
            "maxPrice": "9.5",
            "minPrice": "1",
            "tradeType": "BUY",
            "perPage": "5"
        }))
        .unwrap();
        let query = params.validate().unwrap();
        assert_eq!(query.asset_class.as_deref(), Some("fx"));
        assert_eq!(query.trade_type.as_deref(), Some("buy"));
        assert_eq!(query.min_price, Some(1.0));
        assert_eq!(query.max_price, Some(9.5));
        assert_eq!(query.pagination.per_page(), 5);
    }

    #[test]
    fn empty_strings_are_absent_for_text_filters() {
        let query = TradeQueryParams {
            asset_class: Some(String::new()),
            trade_type: Some(String::new()),
            sort: Some(String::new()),
            ..params()
        }
        .validate()
        .unwrap();
        assert_eq!(query, TradeQuery::new());
    }

    #[test]
    fn sort_names_resolve() {
        let query = TradeQueryParams {
            sort: Some("instrumentid".to_string()),
            ..params()
        }
        .validate()
        .unwrap();
        assert_eq!(query.sort, Some(SortField::InstrumentId));

        let unknown = TradeQueryParams {
            sort: Some("nonsense".to_string()),
            ..params()
        }
        .validate()
        .unwrap();
        assert_eq!(unknown.sort, None);
    }

    #[test]
    fn rejects_bad_numbers() {
        for (raw, expected) in [("abc", "maxPrice"), ("NaN", "maxPrice"), ("inf", "maxPrice")] {
            let err = TradeQueryParams {
                max_price: Some(raw.to_string()),
                ..params()
            }
            .validate()
            .unwrap_err();
            assert_eq!(err.parameter(), Some(expected), "value {raw}");
        }

        let err = TradeQueryParams {
            min_price: Some(String::new()),
            ..params()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.parameter(), Some("minPrice"));
    }

    #[test]
    fn rejects_out_of_range_pages() {
        let cases = [
            (Some("0"), None, "page"),
            (Some("-1"), None, "page"),
            (Some("two"), None, "page"),
            (None, Some("0"), "perPage"),
            (None, Some("101"), "perPage"),
            (None, Some("1.5"), "perPage"),
        ];
        for (page, per_page, expected) in cases {
            let err = TradeQueryParams {
                page: page.map(str::to_string),
                per_page: per_page.map(str::to_string),
                ..params()
            }
            .validate()
            .unwrap_err();
            assert_eq!(err.parameter(), Some(expected));
        }
    }

    #[test]
    fn huge_page_numbers_saturate_past_the_end() {
        let anchor = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let store = generate_records(7, 42, anchor).unwrap();

        for raw in ["4294967296", "99999999999999999999999"] {
            let query = TradeQueryParams {
                page: Some(raw.to_string()),
                ..params()
            }
            .validate()
            .unwrap();
            assert_eq!(query.pagination.page(), u32::MAX, "page {raw}");

            let page = query_store(&store, &query);
            assert!(page.is_empty());
            assert_eq!(page.total_count, store.len());
        }

        let err = TradeQueryParams {
            per_page: Some("4294967296".to_string()),
            ..params()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.parameter(), Some("perPage"));
    }

    #[test]
    fn rejects_bad_timestamps() {
        let err = TradeQueryParams {
            start: Some("2024-13-01".to_string()),
            ..params()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.parameter(), Some("start"));

        let err = TradeQueryParams {
            end: Some("soon".to_string()),
            ..params()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.parameter(), Some("end"));
    }

    #[test]
    fn parses_timestamp_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        for raw in [
            "2024-01-02T03:04:05Z",
            "2024-01-02T05:04:05+02:00",
            "2024-01-02T03:04:05",
            "2024-01-02 03:04:05",
            "2024-01-02T03:04:05.000",
            "1704164645",
        ] {
            assert_eq!(parse_timestamp(raw).unwrap(), expected, "input {raw}");
        }

        let minute = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-02T03:04").unwrap(), minute);

        let midnight = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-02").unwrap(), midnight);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let query = TradeQueryParams {
            min_price: Some(" 20 ".to_string()),
            page: Some(" 2".to_string()),
            ..params()
        }
        .validate()
        .unwrap();
        assert_eq!(query.min_price, Some(20.0));
        assert_eq!(query.pagination.page(), 2);
    }
}
