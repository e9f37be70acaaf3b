use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::BoardError;

/// Occupancy state reported by the server for one slot.
///
/// Unrecognized values are kept verbatim so that structural comparison still
/// sees a change when the server starts reporting something new.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlotStatus {
    Available,
    Occupied,
    Reserved,
    Unavailable,
    Other(String),
}

impl SlotStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SlotStatus::Available => "AVAILABLE",
            SlotStatus::Occupied => "OCCUPIED",
            SlotStatus::Reserved => "RESERVED",
            SlotStatus::Unavailable => "UNAVAILABLE",
            SlotStatus::Other(raw) => raw,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SlotStatus::Available)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, SlotStatus::Occupied)
    }
}

impl From<String> for SlotStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "AVAILABLE" => SlotStatus::Available,
            "OCCUPIED" => SlotStatus::Occupied,
            "RESERVED" => SlotStatus::Reserved,
            "UNAVAILABLE" => SlotStatus::Unavailable,
            _ => SlotStatus::Other(raw),
        }
    }
}

impl From<&str> for SlotStatus {
    fn from(raw: &str) -> Self {
        SlotStatus::from(raw.to_string())
    }
}

impl From<SlotStatus> for String {
    fn from(status: SlotStatus) -> Self {
        match status {
            SlotStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parking slot as listed by `/full_status`.
///
/// On the wire a record is a positional tuple `[id, status, plate, model]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlotRecord {
    pub id: String,
    pub status: SlotStatus,
    #[serde(default)]
    pub plate: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl SlotRecord {
    pub fn new(id: impl Into<String>, status: SlotStatus) -> Self {
        Self {
            id: id.into(),
            status,
            plate: None,
            model: None,
        }
    }

    pub fn occupied(
        id: impl Into<String>,
        plate: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            status: SlotStatus::Occupied,
            plate: Some(plate.into()),
            model: Some(model.into()),
        }
    }
}

impl Serialize for SlotRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.id, &self.status, &self.plate, &self.model).serialize(serializer)
    }
}

/// Ordered list of slot records from a single poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<SlotRecord>);

impl Snapshot {
    pub fn new(slots: Vec<SlotRecord>) -> Self {
        Self(slots)
    }

    /// Decode a `/full_status` response body.
    pub fn decode(bytes: &[u8]) -> Result<Self, BoardError> {
        serde_json::from_slice(bytes).map_err(|err| BoardError::Decode(err.to_string()))
    }

    pub fn slots(&self) -> &[SlotRecord] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn available_ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|slot| slot.status.is_available())
            .map(|slot| slot.id.as_str())
    }
}

impl From<Vec<SlotRecord>> for Snapshot {
    fn from(slots: Vec<SlotRecord>) -> Self {
        Self(slots)
    }
}

impl FromIterator<SlotRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = SlotRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a SlotRecord;
    type IntoIter = std::slice::Iter<'a, SlotRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
