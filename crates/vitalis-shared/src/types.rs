//! Domain model structs shared by the store and service layers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Principal
// ---------------------------------------------------------------------------

/// Opaque caller identity supplied by the hosting execution context.
///
/// The string is stable and comparable; nothing else about it is assumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user.  The primary key is the caller's principal string and
/// is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Principal string of the account owner.
    pub id: String,
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Health record
// ---------------------------------------------------------------------------

/// Self-reported vital signs.  All fields are free-form text; no units or
/// ranges are enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    pub heart_rate: String,
    pub blood_pressure: String,
    pub temperature: String,
    pub oxygen_level: String,
    pub respiratory_rate: String,
    pub glucose: String,
}

/// Self-reported activity metrics, free-form text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMetrics {
    pub steps: String,
    pub sleep_hours: String,
    pub active_minutes: String,
}

/// Clinical data supplied by a professional.  Fields may be empty strings
/// when no clinical data accompanies a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub ecg_readings: String,
    pub blood_work: String,
    pub urinalysis: String,
    pub imaging: String,
}

/// One submitted health record.
///
/// `id`, `user_id` and `timestamp` are always server-generated at creation
/// time; client-supplied values for them are discarded.  Records are
/// append-only: there is no update or delete operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    /// Server-generated UUID v4.
    pub id: String,
    /// Principal of the creator.  Never taken from client input.
    pub user_id: String,
    /// Epoch-milliseconds at creation time, as a string.
    pub timestamp: String,
    pub vitals: VitalSigns,
    pub activity: ActivityMetrics,
    pub professional: Professional,
    pub symptoms: Vec<String>,
    pub medications: Vec<String>,
    pub notes: String,
}

// ---------------------------------------------------------------------------
// AI prediction
// ---------------------------------------------------------------------------

/// An externally-computed model prediction linked to a health record.
///
/// The content is opaque to this service: `prediction` may be prose or
/// JSON-encoded text, `confidence` is not a validated numeric.  The id is
/// client-supplied and a second save with the same id replaces the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiPrediction {
    pub id: String,
    /// References a health record id; not validated against existence.
    pub health_data_id: String,
    pub prediction: String,
    pub confidence: String,
    pub model_id: String,
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Aggregate cardinalities of the three mappings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_records: u64,
    pub total_predictions: u64,
    pub total_users: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_record_serializes_camel_case() {
        let record = HealthRecord {
            id: "r1".to_string(),
            user_id: "p1".to_string(),
            timestamp: "0".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "p1");
        assert!(json["vitals"].get("heartRate").is_some());
        assert!(json["activity"].get("sleepHours").is_some());
    }

    #[test]
    fn principal_round_trips_as_plain_string() {
        let p = Principal::from("p1");
        assert_eq!(p.as_str(), "p1");
        assert_eq!(p.to_string(), "p1");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"p1\"");
    }
}
