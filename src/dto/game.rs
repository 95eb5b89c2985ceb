use chrono::{DateTime, NaiveDateTime};
use sea_orm::FromQueryResult;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Deserializer, Serialize, de};

/// Number of rows returned by the recent-games listing when no limit is given.
pub const DEFAULT_RECENT_LIMIT: i64 = 5;

// ============ Request DTOs ============

/// Record game request.
///
/// `game_type` stays a raw token here so unknown values surface as a
/// not-found error from the recorder instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RecordGameRequest {
    pub winner_id: i32,
    pub loser_id: i32,
    pub game_type: String,
    #[serde(default, deserialize_with = "deserialize_played_at")]
    pub played_at: Option<DateTimeWithTimeZone>,
}

/// Naive timestamps accepted for `played_at`, read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a `played_at` value: RFC 3339 with an offset, or a naive
/// date-time which is taken to be UTC.
#[must_use]
pub fn parse_played_at(raw: &str) -> Option<DateTimeWithTimeZone> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

fn deserialize_played_at<'de, D>(deserializer: D) -> Result<Option<DateTimeWithTimeZone>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_played_at(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid played_at timestamp '{raw}'")))
        })
        .transpose()
}

/// Query string for `GET /games/recent`
#[derive(Debug, Deserialize)]
pub struct RecentGamesQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

const fn default_limit() -> i64 {
    DEFAULT_RECENT_LIMIT
}

// ============ Response DTOs ============

/// A recorded game joined with its players' and game type's names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct RecentGame {
    pub game_id: i32,
    pub played_at: DateTimeWithTimeZone,
    pub game_type: String,
    pub winner_name: String,
    pub loser_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_played_at_keeps_offset() {
        let parsed = parse_played_at("2025-01-01T10:00:00+02:00");

        assert_eq!(
            parsed.map(|dt| dt.to_rfc3339()),
            Some("2025-01-01T10:00:00+02:00".to_string())
        );
    }

    #[test]
    fn test_parse_played_at_naive_is_utc() {
        let expected = Some("2025-01-01T10:00:00+00:00".to_string());

        assert_eq!(
            parse_played_at("2025-01-01T10:00:00").map(|dt| dt.to_rfc3339()),
            expected
        );
        assert_eq!(
            parse_played_at("2025-01-01 10:00:00").map(|dt| dt.to_rfc3339()),
            expected
        );
        assert_eq!(
            parse_played_at("2025-01-01T10:00:00.250").map(|dt| dt.timestamp_subsec_millis()),
            Some(250)
        );
    }

    #[test]
    fn test_parse_played_at_rejects_garbage() {
        assert_eq!(parse_played_at("yesterday"), None);
        assert_eq!(parse_played_at("2025-01-01"), None);
        assert_eq!(parse_played_at(""), None);
    }

    #[test]
    fn test_record_game_request_played_at_is_optional() {
        let req: Result<RecordGameRequest, _> = serde_json::from_value(serde_json::json!({
            "winner_id": 1,
            "loser_id": 2,
            "game_type": "smash_bros",
        }));

        assert!(req.is_ok_and(|r| r.played_at.is_none()));

        let req: Result<RecordGameRequest, _> = serde_json::from_value(serde_json::json!({
            "winner_id": 1,
            "loser_id": 2,
            "game_type": "smash_bros",
            "played_at": null,
        }));

        assert!(req.is_ok_and(|r| r.played_at.is_none()));
    }

    #[test]
    fn test_record_game_request_rejects_bad_played_at() {
        let req: Result<RecordGameRequest, _> = serde_json::from_value(serde_json::json!({
            "winner_id": 1,
            "loser_id": 2,
            "game_type": "smash_bros",
            "played_at": "not a time",
        }));

        let err = req.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(err.contains("invalid played_at timestamp"), "{err}");
    }
}
