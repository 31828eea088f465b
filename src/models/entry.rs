use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// A work status. Open-ended on purpose: the set of statuses ("working",
/// "vacation", "sick", ...) is data, not schema. Stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ShiftStatus(String);

impl ShiftStatus {
    pub const WORKING: &'static str = "working";

    pub fn new(raw: &str) -> Self {
        ShiftStatus(raw.trim().to_lowercase())
    }

    pub fn working() -> Self {
        ShiftStatus(Self::WORKING.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ShiftStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ShiftStatus::new(&raw))
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One employee's status on one calendar date.
///
/// Absence from the calendar map means `Working`. A `Pending` entry is an
/// uncommitted supervisor request awaiting an admin decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayEntry {
    Working,
    Direct(ShiftStatus),
    Pending {
        requested: ShiftStatus,
        requested_by: String,
    },
}

impl DayEntry {
    /// The one projection shared by the calendar and the export paths.
    pub fn label(&self) -> String {
        match self {
            DayEntry::Working => "WORKING".to_string(),
            DayEntry::Direct(status) => status.as_str().to_uppercase(),
            DayEntry::Pending { requested, .. } => {
                format!("PENDING ({})", requested.as_str().to_uppercase())
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DayEntry::Pending { .. })
    }
}

// Wire format matches the store documents of the original system: a direct
// status is a bare string, a pending request is a small object tagged with
// status = "pending". Exhaustive matching here replaces the duck typing the
// data shape invites.

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PendingWire {
    status: String,
    requested_status: ShiftStatus,
    requested_by: String,
}

impl Serialize for DayEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DayEntry::Working => serializer.serialize_str(ShiftStatus::WORKING),
            DayEntry::Direct(status) => status.serialize(serializer),
            DayEntry::Pending {
                requested,
                requested_by,
            } => PendingWire {
                status: "pending".to_string(),
                requested_status: requested.clone(),
                requested_by: requested_by.clone(),
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DayEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Pending(PendingWire),
            Plain(ShiftStatus),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Pending(p) if p.status == "pending" => Ok(DayEntry::Pending {
                requested: p.requested_status,
                requested_by: p.requested_by,
            }),
            Wire::Pending(p) => Err(serde::de::Error::custom(format!(
                "unknown entry tag '{}'",
                p.status
            ))),
            Wire::Plain(status) => Ok(DayEntry::Direct(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_normalized() {
        assert_eq!(ShiftStatus::new("  Vacation ").as_str(), "vacation");
    }

    #[test]
    fn labels_match_both_rendering_and_export() {
        assert_eq!(DayEntry::Working.label(), "WORKING");
        assert_eq!(
            DayEntry::Direct(ShiftStatus::new("vacation")).label(),
            "VACATION"
        );
        assert_eq!(
            DayEntry::Pending {
                requested: ShiftStatus::new("sick"),
                requested_by: "Supervisor Alpha".to_string(),
            }
            .label(),
            "PENDING (SICK)"
        );
    }

    #[test]
    fn direct_entry_round_trips_as_bare_string() {
        let entry = DayEntry::Direct(ShiftStatus::new("vacation"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#""vacation""#);
        assert_eq!(serde_json::from_str::<DayEntry>(&json).unwrap(), entry);
    }

    #[test]
    fn pending_entry_uses_tagged_object() {
        let entry = DayEntry::Pending {
            requested: ShiftStatus::new("sick"),
            requested_by: "Supervisor Alpha".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["requestedStatus"], "sick");
        assert_eq!(json["requestedBy"], "Supervisor Alpha");
        assert_eq!(serde_json::from_value::<DayEntry>(json).unwrap(), entry);
    }

    #[test]
    fn unknown_object_tag_is_rejected() {
        let raw = r#"{"status":"approved","requestedStatus":"sick","requestedBy":"x"}"#;
        assert!(serde_json::from_str::<DayEntry>(raw).is_err());
    }

    #[test]
    fn explicit_working_string_deserializes_as_direct() {
        // A rejected request is written back as the literal 'working' status.
        let entry: DayEntry = serde_json::from_str(r#""working""#).unwrap();
        assert_eq!(entry, DayEntry::Direct(ShiftStatus::working()));
        assert_eq!(entry.label(), "WORKING");
    }
}
