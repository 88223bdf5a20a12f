//! Test-run records as delivered by the dashboard backend

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;

/// One completed test run.
///
/// Decoding is lenient: absent or `null` text fields become empty strings,
/// scalars sent where text is expected keep their textual form, and an
/// unusable `addedToDashboardTime` becomes `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(deserialize_with = "lenient_i64")]
    pub added_to_dashboard_time: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub selenium_session_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub test_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub browser: String,
    #[serde(deserialize_with = "lenient_string")]
    pub browser_version: String,
    #[serde(deserialize_with = "lenient_string")]
    pub platform: String,
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub test_status: String,
    #[serde(deserialize_with = "lenient_string")]
    pub time_zone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub build: String,
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: String,
    #[serde(deserialize_with = "lenient_string")]
    pub screen_dimension: String,
    #[serde(deserialize_with = "lenient_string")]
    pub video_folder_path: String,
    #[serde(deserialize_with = "lenient_string")]
    pub file_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub selenium_log_file_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub browser_driver_log_file_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub retention_date: String,
}

/// Identity used to recognise a record delivered twice
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub added_to_dashboard_time: i64,
    pub selenium_session_id: String,
    pub file_name: String,
}

impl Record {
    /// `None` when the record carries no session id and so cannot be told
    /// apart from another malformed record.
    pub fn key(&self) -> Option<RecordKey> {
        if self.selenium_session_id.is_empty() {
            return None;
        }
        Some(RecordKey {
            added_to_dashboard_time: self.added_to_dashboard_time,
            selenium_session_id: self.selenium_session_id.clone(),
            file_name: self.file_name.clone(),
        })
    }
}

/// Result of decoding one response body
#[derive(Debug, Default)]
pub struct DecodedBatch {
    /// Records in the order the backend sent them
    pub records: Vec<Record>,
    /// Elements that could not be turned into a record
    pub rejected: usize,
}

/// Decode a JSON array of records, element by element.
///
/// A body that is not a JSON array is an error; an element that is not a
/// record is logged and skipped.
pub fn decode_batch(body: &[u8]) -> Result<DecodedBatch> {
    let elements: Vec<Value> = serde_json::from_slice(body)?;
    let mut batch = DecodedBatch::default();

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<Record>(element) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                warn!("Skipping malformed record at index {}: {}", index, e);
                batch.rejected += 1;
            }
        }
    }

    Ok(batch)
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let body = br#"[{
            "seleniumSessionId": "abc-123",
            "testName": "loginTest",
            "timestamp": "Jan 5, 2024 10:00:00 AM",
            "addedToDashboardTime": 1704448800000,
            "proxyName": "Zalenium",
            "browser": "chrome",
            "browserVersion": "120.0",
            "platform": "LINUX",
            "fileName": "zalenium_loginTest.mp4",
            "videoFolderPath": "/home/seluser/videos",
            "screenDimension": "1920x1080",
            "timeZone": "Europe/Berlin",
            "build": "nightly",
            "seleniumLogFileName": "logs/selenium.log",
            "browserDriverLogFileName": "logs/driver.log",
            "retentionDate": "Feb 5, 2024",
            "testStatus": "SUCCESS"
        }]"#;

        let batch = decode_batch(body).unwrap();
        assert_eq!(batch.rejected, 0);
        let record = &batch.records[0];
        assert_eq!(record.added_to_dashboard_time, 1704448800000);
        assert_eq!(record.selenium_session_id, "abc-123");
        assert_eq!(record.browser_driver_log_file_name, "logs/driver.log");
        assert_eq!(record.test_status, "SUCCESS");
    }

    #[test]
    fn test_missing_fields_default() {
        let batch = decode_batch(br#"[{"testName": "bare"}]"#).unwrap();
        let record = &batch.records[0];
        assert_eq!(record.test_name, "bare");
        assert_eq!(record.added_to_dashboard_time, 0);
        assert_eq!(record.time_zone, "");
    }

    #[test]
    fn test_scalars_become_text() {
        let body = br#"[{"build": 42, "timeZone": null, "addedToDashboardTime": "300", "browser": true}]"#;
        let record = &decode_batch(body).unwrap().records[0];
        assert_eq!(record.build, "42");
        assert_eq!(record.time_zone, "");
        assert_eq!(record.added_to_dashboard_time, 300);
        assert_eq!(record.browser, "true");
    }

    #[test]
    fn test_non_numeric_watermark_is_zero() {
        let body = br#"[{"addedToDashboardTime": "yesterday"}, {"addedToDashboardTime": [1]}]"#;
        let batch = decode_batch(body).unwrap();
        assert!(batch.records.iter().all(|r| r.added_to_dashboard_time == 0));
    }

    #[test]
    fn test_malformed_element_is_skipped() {
        let body = br#"[{"addedToDashboardTime": 1}, "garbage", 7, {"addedToDashboardTime": 2}]"#;
        let batch = decode_batch(body).unwrap();
        assert_eq!(batch.rejected, 2);
        let times: Vec<i64> = batch.records.iter().map(|r| r.added_to_dashboard_time).collect();
        assert_eq!(times, vec![1, 2]);
    }

    #[test]
    fn test_non_array_body_is_error() {
        assert!(decode_batch(br#"{"error": "nope"}"#).is_err());
        assert!(decode_batch(b"<html>").is_err());
    }

    #[test]
    fn test_key_distinguishes_sessions() {
        let a = Record {
            added_to_dashboard_time: 5,
            selenium_session_id: "a".into(),
            ..Default::default()
        };
        let b = Record {
            selenium_session_id: "b".into(),
            ..a.clone()
        };
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), a.clone().key());
    }

    #[test]
    fn test_record_without_session_has_no_key() {
        let batch = decode_batch(br#"[{"addedToDashboardTime": 5}, {"addedToDashboardTime": 5}]"#).unwrap();
        assert!(batch.records.iter().all(|r| r.key().is_none()));
    }
}
