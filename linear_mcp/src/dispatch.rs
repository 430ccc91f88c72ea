//! Tool dispatch: name lookup, argument validation, adapter invocation, and
//! uniform result envelopes.
//!
//! Every call moves through the same states: look the name up, deserialize
//! the argument bag into the tool's typed params, run the adapter, and fold
//! any failure into an `isError` text result. Nothing escapes this boundary
//! as a protocol-level error.

use std::future::Future;

use log::debug;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use serde_json::Value;

use linear_api::{ApiError, LinearClient};

use crate::tools;

/// Dispatch a tool call by name.
pub async fn dispatch(
    client: &LinearClient,
    name: &str,
    arguments: Option<JsonObject>,
) -> CallToolResult {
    debug!("Tool call: {name}");
    match name {
        "create_issue" => {
            invoke(name, arguments, |p| tools::create_issue::execute(client, p)).await
        }
        "list_issues" => invoke(name, arguments, |p| tools::list_issues::execute(client, p)).await,
        "update_issue" => {
            invoke(name, arguments, |p| tools::update_issue::execute(client, p)).await
        }
        "list_teams" => invoke(name, arguments, |p| tools::list_teams::execute(client, p)).await,
        "list_projects" => {
            invoke(name, arguments, |p| tools::list_projects::execute(client, p)).await
        }
        "search_issues" => {
            invoke(name, arguments, |p| tools::search_issues::execute(client, p)).await
        }
        "get_issue" => invoke(name, arguments, |p| tools::get_issue::execute(client, p)).await,
        "update_comment" => {
            invoke(name, arguments, |p| {
                tools::update_comment::execute(client, p)
            })
            .await
        }
        "create_comment" => {
            invoke(name, arguments, |p| {
                tools::create_comment::execute(client, p)
            })
            .await
        }
        "list_labels" => invoke(name, arguments, |p| tools::list_labels::execute(client, p)).await,
        "create_label" => {
            invoke(name, arguments, |p| tools::create_label::execute(client, p)).await
        }
        "update_label" => {
            invoke(name, arguments, |p| tools::update_label::execute(client, p)).await
        }
        "delete_label" => {
            invoke(name, arguments, |p| tools::delete_label::execute(client, p)).await
        }
        "list_users" => invoke(name, arguments, |p| tools::list_users::execute(client, p)).await,
        "get_user" => invoke(name, arguments, |p| tools::get_user::execute(client, p)).await,
        "get_current_user" => {
            invoke(name, arguments, |p| {
                tools::get_current_user::execute(client, p)
            })
            .await
        }
        "create_team" => invoke(name, arguments, |p| tools::create_team::execute(client, p)).await,
        "update_team" => invoke(name, arguments, |p| tools::update_team::execute(client, p)).await,
        "delete_team" => invoke(name, arguments, |p| tools::delete_team::execute(client, p)).await,
        "create_project" => {
            invoke(name, arguments, |p| {
                tools::create_project::execute(client, p)
            })
            .await
        }
        "update_project" => {
            invoke(name, arguments, |p| {
                tools::update_project::execute(client, p)
            })
            .await
        }
        "get_project" => invoke(name, arguments, |p| tools::get_project::execute(client, p)).await,
        "list_project_milestones" => {
            invoke(name, arguments, |p| {
                tools::list_project_milestones::execute(client, p)
            })
            .await
        }
        "create_project_milestone" => {
            invoke(name, arguments, |p| {
                tools::create_project_milestone::execute(client, p)
            })
            .await
        }
        "update_project_milestone" => {
            invoke(name, arguments, |p| {
                tools::update_project_milestone::execute(client, p)
            })
            .await
        }
        "delete_project_milestone" => {
            invoke(name, arguments, |p| {
                tools::delete_project_milestone::execute(client, p)
            })
            .await
        }
        _ => CallToolResult::error(vec![Content::text(format!("Unknown tool: {name}"))]),
    }
}

/// Deserialize the argument bag and run one adapter, folding both validation
/// and remote failures into the uniform error envelope.
async fn invoke<P, F, Fut>(tool: &str, arguments: Option<JsonObject>, run: F) -> CallToolResult
where
    P: DeserializeOwned,
    F: FnOnce(P) -> Fut,
    Fut: Future<Output = Result<CallToolResult, ApiError>>,
{
    let bag = Value::Object(arguments.unwrap_or_default());
    let params: P = match serde_json::from_value(bag) {
        Ok(params) => params,
        Err(e) => {
            return CallToolResult::error(vec![Content::text(format!(
                "Invalid arguments for {tool}: {e}"
            ))]);
        }
    };

    match run(params).await {
        Ok(result) => result,
        Err(e) => CallToolResult::error(vec![Content::text(format!("Linear API error: {e}"))]),
    }
}
