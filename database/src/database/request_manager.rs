use flume::Sender;
use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::{
        action::{Action, ActionResult},
        person::{Person, PersonInput},
    },
};

use super::{
    commands::{
        Control, DatabaseCommand, DatabaseCommandControlResponse, DatabaseCommandRequest,
        DatabaseCommandResponse,
    },
    table::table::ApplyErrors,
};

#[derive(Clone)]
pub struct RequestManager {
    database_sender: Sender<DatabaseCommandRequest>,
}

#[derive(Error, Debug, PartialEq)]
pub enum RequestManagerError {
    #[error("Database is not running")]
    DatabaseStopped,
    #[error(transparent)]
    Apply(#[from] ApplyErrors),
    #[error("Unexpected database response: {0}")]
    UnexpectedResponse(String),
}

/// Goal of the request manager is to provide a simple interface for interacting with the database
///
/// The request manager providers the following APIs. These are sorted by the easiest to use to the most complex
/// 1. CRUD operations on a single person -- these are completely type safe
/// 2. Generic Action based API -- not type safe because you need to know what Action maps ActionResult (e.g. Action::Add maps -> ActionResult::Single)
///
/// Every call blocks until the database thread has processed the request, the database processes one request at a time
impl RequestManager {
    pub fn new(database_sender: Sender<DatabaseCommandRequest>) -> Self {
        Self { database_sender }
    }

    pub fn send_add(&self, input: PersonInput) -> Result<Person, RequestManagerError> {
        let action_result = self.send_single_action(Action::Add(input))?;
        extract_result(action_result, ActionResult::single)
    }

    pub fn send_update(
        &self,
        id: EntityId,
        input: PersonInput,
    ) -> Result<Person, RequestManagerError> {
        let action_result = self.send_single_action(Action::Update(id, input))?;
        extract_result(action_result, ActionResult::single)
    }

    pub fn send_remove(&self, id: EntityId) -> Result<(), RequestManagerError> {
        let action_result = self.send_single_action(Action::Remove(id))?;
        extract_result(action_result, ActionResult::deleted)
    }

    pub fn send_get(&self, id: EntityId) -> Result<Option<Person>, RequestManagerError> {
        let action_result = self.send_single_action(Action::Get(id))?;
        extract_result(action_result, ActionResult::get_single)
    }

    pub fn send_list(&self) -> Result<Vec<Person>, RequestManagerError> {
        let action_result = self.send_single_action(Action::List)?;
        extract_result(action_result, ActionResult::list)
    }

    /// Sends a shutdown request to the database and returns the database's response
    pub fn send_shutdown_request(&self) -> Result<String, RequestManagerError> {
        match self.send_control(Control::Shutdown)? {
            DatabaseCommandControlResponse::Success(message) => Ok(message),
            other => Err(RequestManagerError::UnexpectedResponse(format!("{:?}", other))),
        }
    }

    pub fn send_database_stats(&self) -> Result<Vec<(String, String)>, RequestManagerError> {
        match self.send_control(Control::DatabaseStats)? {
            DatabaseCommandControlResponse::Info(info) => Ok(info),
            other => Err(RequestManagerError::UnexpectedResponse(format!("{:?}", other))),
        }
    }

    /// Sends a single action to the database and returns a single action result
    pub fn send_single_action(&self, action: Action) -> Result<ActionResult, RequestManagerError> {
        match self.send_command(DatabaseCommand::Action(action))? {
            DatabaseCommandResponse::DatabaseCommandActionResponse(result) => Ok(result?),
            DatabaseCommandResponse::DatabaseCommandControlResponse(response) => Err(
                RequestManagerError::UnexpectedResponse(format!("{:?}", response)),
            ),
        }
    }

    fn send_control(
        &self,
        control: Control,
    ) -> Result<DatabaseCommandControlResponse, RequestManagerError> {
        match self.send_command(DatabaseCommand::Control(control))? {
            DatabaseCommandResponse::DatabaseCommandControlResponse(response) => Ok(response),
            DatabaseCommandResponse::DatabaseCommandActionResponse(result) => Err(
                RequestManagerError::UnexpectedResponse(format!("{:?}", result)),
            ),
        }
    }

    pub fn send_command(
        &self,
        command: DatabaseCommand,
    ) -> Result<DatabaseCommandResponse, RequestManagerError> {
        let (resolver, response_receiver) = oneshot::channel::<DatabaseCommandResponse>();

        let request = DatabaseCommandRequest { resolver, command };

        // Sends the request to the database worker, database will response
        //  on the response_receiver once it's finished processing it's request
        self.database_sender
            .send(request)
            .map_err(|_| RequestManagerError::DatabaseStopped)?;

        response_receiver
            .recv()
            .map_err(|_| RequestManagerError::DatabaseStopped)
    }
}

fn extract_result<T>(
    action_result: ActionResult,
    extract: fn(ActionResult) -> Option<T>,
) -> Result<T, RequestManagerError> {
    let kind = action_result.kind();

    extract(action_result).ok_or_else(|| RequestManagerError::UnexpectedResponse(kind.to_string()))
}
