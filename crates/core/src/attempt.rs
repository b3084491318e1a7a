//! Simulation attempt projections.
//!
//! Attempts are stored with free-form `analytics` and `playback` JSON
//! objects. The helpers here pull the fields the playback screen needs,
//! substituting defaults for anything absent.

use serde::Serialize;
use serde_json::Value;

use crate::types::{DbId, Timestamp};

/// Attempt type reported when an attempt has none recorded.
pub const DEFAULT_ATTEMPT_TYPE: &str = "N/A";

/// One row of the attempt history list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptSummary {
    pub attempt_id: String,
    pub training_plan: String,
    pub module_name: String,
    pub sim_id: DbId,
    pub sim_name: String,
    pub sim_type: String,
    pub sim_level: String,
    pub score: f64,
    pub time_taken: f64,
    pub due_date: Option<Timestamp>,
    pub attempt_type: String,
    pub est_time: f64,
    /// Every listed row stands for a single attempt.
    pub attempt_count: u32,
}

/// Playback and analytics details for a single attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptDetail {
    pub sentencewise_analytics: Value,
    pub audio_url: String,
    pub transcript: String,
    pub transcript_object: Value,
    pub time_taken_seconds: f64,
    pub click_score: f64,
    pub text_field_keyword_score: f64,
    pub keyword_score: f64,
    pub sim_accuracy_score: f64,
    pub confidence: f64,
    pub energy: f64,
    pub concentration: f64,
    pub min_passing_score: f64,
}

/// Highest score among a user's attempts, or 0 when there are none.
pub fn highest_attempt_score<I>(scores: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    scores.into_iter().fold(0.0, f64::max)
}

fn number_field(obj: &Value, key: &str) -> f64 {
    obj.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn string_field(obj: &Value, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn array_field(obj: &Value, key: &str) -> Value {
    match obj.get(key) {
        Some(v) if !v.is_null() => v.clone(),
        _ => Value::Array(Vec::new()),
    }
}

/// Build an [`AttemptDetail`] from the stored JSON columns.
///
/// `analytics` and `playback` may be `null` or missing keys; every field
/// falls back to 0, an empty string, or an empty array.
pub fn build_attempt_detail(
    analytics: &Value,
    playback: &Value,
    time_taken_seconds: Option<f64>,
    min_passing_score: Option<f64>,
) -> AttemptDetail {
    AttemptDetail {
        sentencewise_analytics: array_field(playback, "sentencewiseAnalytics"),
        audio_url: string_field(playback, "audioUrl"),
        transcript: string_field(playback, "transcript"),
        transcript_object: array_field(playback, "transcriptObject"),
        time_taken_seconds: time_taken_seconds.unwrap_or(0.0),
        click_score: number_field(analytics, "clickScore"),
        text_field_keyword_score: number_field(analytics, "textFieldKeywordScore"),
        keyword_score: number_field(analytics, "keywordScore"),
        sim_accuracy_score: number_field(analytics, "simAccuracyScore"),
        confidence: number_field(analytics, "confidence"),
        energy: number_field(analytics, "energy"),
        concentration: number_field(analytics, "concentration"),
        min_passing_score: min_passing_score.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn highest_of_no_attempts_is_zero() {
        assert_eq!(highest_attempt_score(Vec::new()), 0.0);
    }

    #[test]
    fn highest_picks_maximum() {
        assert_eq!(highest_attempt_score([42.0, 87.5, 63.0]), 87.5);
    }

    #[test]
    fn detail_extracts_all_fields() {
        let analytics = json!({
            "clickScore": 80,
            "textFieldKeywordScore": 70.5,
            "keywordScore": 60,
            "simAccuracyScore": 90,
            "confidence": 3,
            "energy": 4,
            "concentration": 5
        });
        let playback = json!({
            "sentencewiseAnalytics": [{"sentence": "Hello", "score": 1}],
            "audioUrl": "https://cdn.example.com/a.mp3",
            "transcript": "Hello there",
            "transcriptObject": [{"role": "trainee", "text": "Hello there"}]
        });

        let detail = build_attempt_detail(&analytics, &playback, Some(312.0), Some(75.0));

        assert_eq!(detail.click_score, 80.0);
        assert_eq!(detail.text_field_keyword_score, 70.5);
        assert_eq!(detail.sim_accuracy_score, 90.0);
        assert_eq!(detail.concentration, 5.0);
        assert_eq!(detail.audio_url, "https://cdn.example.com/a.mp3");
        assert_eq!(detail.transcript, "Hello there");
        assert_eq!(detail.sentencewise_analytics.as_array().unwrap().len(), 1);
        assert_eq!(detail.transcript_object[0]["role"], "trainee");
        assert_eq!(detail.time_taken_seconds, 312.0);
        assert_eq!(detail.min_passing_score, 75.0);
    }

    #[test]
    fn detail_defaults_when_columns_are_null() {
        let detail = build_attempt_detail(&Value::Null, &Value::Null, None, None);

        assert_eq!(detail.click_score, 0.0);
        assert_eq!(detail.energy, 0.0);
        assert_eq!(detail.audio_url, "");
        assert_eq!(detail.transcript, "");
        assert_eq!(detail.sentencewise_analytics, json!([]));
        assert_eq!(detail.transcript_object, json!([]));
        assert_eq!(detail.time_taken_seconds, 0.0);
        assert_eq!(detail.min_passing_score, 0.0);
    }

    #[test]
    fn detail_serializes_camel_case() {
        let detail = build_attempt_detail(&json!({}), &json!({}), None, None);
        let value = serde_json::to_value(&detail).unwrap();

        assert!(value.get("sentencewiseAnalytics").is_some());
        assert!(value.get("textFieldKeywordScore").is_some());
        assert!(value.get("minPassingScore").is_some());
        assert!(value.get("min_passing_score").is_none());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = AttemptSummary {
            attempt_id: "9".to_string(),
            training_plan: "Onboarding".to_string(),
            module_name: String::new(),
            sim_id: 4,
            sim_name: "Angry customer".to_string(),
            sim_type: "audio".to_string(),
            sim_level: "advanced".to_string(),
            score: 88.0,
            time_taken: 12.0,
            due_date: None,
            attempt_type: DEFAULT_ATTEMPT_TYPE.to_string(),
            est_time: 15.0,
            attempt_count: 1,
        };
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["attemptId"], "9");
        assert_eq!(value["simId"], 4);
        assert_eq!(value["attemptType"], "N/A");
        assert_eq!(value["attemptCount"], 1);
        assert!(value["dueDate"].is_null());
    }
}
