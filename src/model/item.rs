use super::types::{ItemCategory, ItemId, ItemStatus};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub status: ItemStatus,
    pub category: ItemCategory,

    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub notes: String,
}

impl Item {
    pub fn new(id: ItemId, name: String) -> Self {
        Self {
            id,
            name,
            status: ItemStatus::default(),
            category: ItemCategory::default(),
            created_at: now_millis(),
            notes: String::new(),
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at.trunc_subsecs(3);
        self
    }
}

/// Body of a create request.
///
/// Present fields are trimmed; non-string JSON values collapse to `""`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: Option<String>,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Body of a partial update. `None` means the field was not sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.category.is_none() && self.notes.is_none()
    }
}

/// Current time at millisecond precision, the resolution items are serialized with.
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Some(match value {
        serde_json::Value::String(s) => crate::validation::normalize(&s),
        _ => String::new(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_item_serializes_camel_case_with_millis() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let item = Item::new(7, "Docs Refresh".to_string())
            .with_category(ItemCategory::Work)
            .with_created_at(created);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["createdAt"], "2024-05-01T10:00:00.000Z");
        assert_eq!(json["status"], "active");
        assert_eq!(json["category"], "work");
        assert_eq!(json["notes"], "");
    }

    #[test]
    fn test_item_reads_back_identically() {
        let item = Item::new(1, "Audit Log".to_string()).with_notes("Needs review".to_string());
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null() {
        let patch: ItemPatch = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some(""));
        assert!(patch.notes.is_none());
        assert!(!patch.is_empty());

        let patch: ItemPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_new_item_trims_and_flattens_non_strings() {
        let input: NewItem =
            serde_json::from_str(r#"{"name": "  Task X  ", "status": 3, "notes": true}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Task X"));
        assert_eq!(input.status.as_deref(), Some(""));
        assert_eq!(input.notes.as_deref(), Some(""));
        assert!(input.category.is_none());
    }
}
