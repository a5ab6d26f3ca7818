use crate::model::action::{Action, ActionResult};

use super::table::table::ApplyErrors;

/// Database commands are how we interact with the database, they are how we ask the database to run an action,
/// shutdown, etc
///
/// The majority of interactions happen via actions (e.g. add, update, remove, etc), but there are also commands that
/// are used to control the database (e.g. shutdown, stats).
#[derive(Debug)]
pub enum DatabaseCommand {
    /// Sends a single action to the database and returns its result
    Action(Action),

    /// Commands that control the database
    Control(Control),
}

impl DatabaseCommand {
    /// Prints complex logs in a more readable format
    pub fn log_format(&self) -> String {
        match self {
            DatabaseCommand::Action(action) if action.is_mutation() => format!("{:#?}", action),
            DatabaseCommand::Action(action) => format!("{:?}", action),
            DatabaseCommand::Control(control) => format!("{:?}", control),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DatabaseCommandControlResponse {
    /// Successfully performed the control
    Success(String),
    /// Key / value information about the database
    Info(Vec<(String, String)>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DatabaseCommandResponse {
    DatabaseCommandActionResponse(Result<ActionResult, ApplyErrors>),
    DatabaseCommandControlResponse(DatabaseCommandControlResponse),
}

impl DatabaseCommandResponse {
    pub fn control_success(message: &str) -> Self {
        DatabaseCommandResponse::DatabaseCommandControlResponse(
            DatabaseCommandControlResponse::Success(message.to_string()),
        )
    }

    pub fn control_info(info: Vec<(String, String)>) -> Self {
        DatabaseCommandResponse::DatabaseCommandControlResponse(
            DatabaseCommandControlResponse::Info(info),
        )
    }

    pub fn action(result: Result<ActionResult, ApplyErrors>) -> Self {
        DatabaseCommandResponse::DatabaseCommandActionResponse(result)
    }
}

#[derive(Debug, PartialEq)]
pub enum Control {
    /// Stops the database, requests queued before the shutdown are processed, requests after it are rejected
    Shutdown,
    /// Returns row / request counts
    DatabaseStats,
}

pub struct DatabaseCommandRequest {
    pub resolver: oneshot::Sender<DatabaseCommandResponse>,
    pub command: DatabaseCommand,
}
