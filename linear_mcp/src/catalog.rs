//! The tool catalog: the static, ordered list of every tool this server
//! exposes. Each tool module owns its descriptor; this module fixes the
//! order and is the single discovery surface.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;

use crate::tools;

/// All tool descriptors, in catalog order. Stable across calls; no side
/// effects.
pub fn all() -> Vec<Tool> {
    vec![
        tools::create_issue::descriptor(),
        tools::list_issues::descriptor(),
        tools::update_issue::descriptor(),
        tools::list_teams::descriptor(),
        tools::list_projects::descriptor(),
        tools::search_issues::descriptor(),
        tools::get_issue::descriptor(),
        tools::update_comment::descriptor(),
        tools::create_comment::descriptor(),
        tools::list_labels::descriptor(),
        tools::create_label::descriptor(),
        tools::update_label::descriptor(),
        tools::delete_label::descriptor(),
        tools::list_users::descriptor(),
        tools::get_user::descriptor(),
        tools::get_current_user::descriptor(),
        tools::create_team::descriptor(),
        tools::update_team::descriptor(),
        tools::delete_team::descriptor(),
        tools::create_project::descriptor(),
        tools::update_project::descriptor(),
        tools::get_project::descriptor(),
        tools::list_project_milestones::descriptor(),
        tools::create_project_milestone::descriptor(),
        tools::update_project_milestone::descriptor(),
        tools::delete_project_milestone::descriptor(),
    ]
}

/// Convert a literal schema document into the map form `Tool` expects.
pub(crate) fn object_schema(value: Value) -> Arc<JsonObject> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}
