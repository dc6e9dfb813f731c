use crate::model::Item;

/// Free-text filter over item names and notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring match on `name` or `notes`.
    pub fn matches(&self, item: &Item) -> bool {
        if self.is_empty() {
            return true;
        }
        item.name.to_lowercase().contains(&self.needle)
            || item.notes.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, notes: &str) -> Item {
        Item::new(1, name.to_string()).with_notes(notes.to_string())
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = TextQuery::new("   ");
        assert!(query.is_empty());
        assert!(query.matches(&item("Bug Triage #6", "")));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let query = TextQuery::new("INVOICE");
        assert!(query.matches(&item("Invoice Sync #1", "Needs review")));
        assert!(!query.matches(&item("Audit Log #9", "Needs review")));
    }

    #[test]
    fn test_matches_notes() {
        let query = TextQuery::new("waiting on");
        assert!(query.matches(&item("Lead Tracker #12", "Waiting on API")));
    }

    #[test]
    fn test_empty_notes_never_match_non_empty_query() {
        let query = TextQuery::new("review");
        assert!(!query.matches(&item("Docs Refresh #14", "")));
    }
}
