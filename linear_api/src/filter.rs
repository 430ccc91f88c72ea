//! Conjunctive filter construction for list operations.

use serde::Serialize;

/// Equality comparator, the only comparison the gateway ever issues.
#[derive(Debug, Clone, Serialize)]
pub struct StringComparator {
    pub eq: String,
}

/// Filter on a related entity's ID.
#[derive(Debug, Clone, Serialize)]
pub struct IdFilter {
    pub id: StringComparator,
}

/// Filter on a related entity's name.
#[derive(Debug, Clone, Serialize)]
pub struct NameFilter {
    pub name: StringComparator,
}

/// Conjunctive issue filter built from whichever identifying fields the
/// caller supplied.
///
/// Absent fields are omitted from the serialized object entirely, so a filter
/// with nothing set serializes as `{}` — never as wildcard keys with null
/// values that could broaden scope.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<IdFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<IdFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<NameFilter>,
}

impl IssueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to issues belonging to the given team.
    pub fn team(mut self, team_id: impl Into<String>) -> Self {
        self.team = Some(IdFilter {
            id: StringComparator {
                eq: team_id.into(),
            },
        });
        self
    }

    /// Restrict to issues assigned to the given user.
    pub fn assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee = Some(IdFilter {
            id: StringComparator {
                eq: assignee_id.into(),
            },
        });
        self
    }

    /// Restrict to issues whose workflow state has the given name.
    pub fn state_name(mut self, status: impl Into<String>) -> Self {
        self.state = Some(NameFilter {
            name: StringComparator { eq: status.into() },
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_serializes_to_empty_object() {
        let filter = IssueFilter::new();
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, json!({}));
        assert_eq!(value.as_object().unwrap().len(), 0);
    }

    #[test]
    fn test_team_only() {
        let filter = IssueFilter::new().team("team-1");
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, json!({ "team": { "id": { "eq": "team-1" } } }));
    }

    #[test]
    fn test_all_fields_conjunctive() {
        let filter = IssueFilter::new()
            .team("team-1")
            .assignee("user-2")
            .state_name("In Progress");
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({
                "team": { "id": { "eq": "team-1" } },
                "assignee": { "id": { "eq": "user-2" } },
                "state": { "name": { "eq": "In Progress" } },
            })
        );
    }

    #[test]
    fn test_absent_fields_are_omitted_not_null() {
        let filter = IssueFilter::new().state_name("Done");
        let value = serde_json::to_value(&filter).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(!object.contains_key("team"));
        assert!(!object.contains_key("assignee"));
    }
}
