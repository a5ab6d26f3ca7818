use std::thread;

use flume::Receiver;

use crate::model::action::{Action, ActionResult};

use super::{
    commands::{Control, DatabaseCommand, DatabaseCommandRequest, DatabaseCommandResponse},
    options::DatabaseOptions,
    request_manager::RequestManager,
    table::table::{ApplyErrors, PersonTable},
};

pub enum DatabaseControlAction {
    Continue,
    Exit,
}

pub struct Database {
    pub(crate) person_table: PersonTable,
    pub(crate) database_options: DatabaseOptions,
    processed_actions: usize,
}

impl Database {
    pub fn new(options: DatabaseOptions) -> Self {
        let person_table = match options.seed {
            true => PersonTable::new_seeded(),
            false => PersonTable::new(),
        };

        Self {
            person_table,
            database_options: options,
            processed_actions: 0,
        }
    }

    /// Starts the database on its own thread, the returned request manager is the only way to reach it.
    /// All actions are processed one at a time in the order they are received.
    pub fn run(self) -> RequestManager {
        let (database_sender, database_receiver) = flume::unbounded::<DatabaseCommandRequest>();

        thread::spawn(move || self.start_thread(database_receiver));

        RequestManager::new(database_sender)
    }

    fn start_thread(mut self, database_receiver: Receiver<DatabaseCommandRequest>) {
        log::info!(
            "📀 Database started [Rows: {}, Seeded: {}]",
            self.person_table.len(),
            self.database_options.seed
        );

        let mut stopped = false;

        // Exits once every request manager has been dropped
        while let Ok(DatabaseCommandRequest { command, resolver }) = database_receiver.recv() {
            // After shutdown the resolver is dropped unanswered, the requester sees the database as stopped
            if stopped {
                log::warn!("Rejected request, database is stopped: {}", command.log_format());
                continue;
            }

            log::info!("Received request: {}", command.log_format());

            let (response, control_action) = match command {
                DatabaseCommand::Action(action) => (
                    DatabaseCommandResponse::action(self.process_action(action)),
                    DatabaseControlAction::Continue,
                ),
                DatabaseCommand::Control(control) => self.process_control(control),
            };

            // Requester may have gone away, e.g. the http request was dropped
            if resolver.send(response).is_err() {
                log::warn!("Requester dropped before the response was sent");
            }

            if let DatabaseControlAction::Exit = control_action {
                stopped = true;
                self.person_table = PersonTable::new();

                log::info!("Database stopped");
            }
        }
    }

    pub fn process_action(&mut self, action: Action) -> Result<ActionResult, ApplyErrors> {
        let is_mutation = action.is_mutation();

        let result = self.person_table.apply(action);

        self.processed_actions += 1;

        match (&result, is_mutation) {
            (Ok(_), true) => log::info!("✅ Applied [Rows: {}]", self.person_table.len()),
            (Err(err), _) => log::info!("⚠️  Rejected: {}", err),
            _ => {}
        }

        result
    }

    fn process_control(
        &mut self,
        control: Control,
    ) -> (DatabaseCommandResponse, DatabaseControlAction) {
        match control {
            Control::Shutdown => (
                DatabaseCommandResponse::control_success("Successfully shutdown database"),
                DatabaseControlAction::Exit,
            ),
            Control::DatabaseStats => {
                let info = vec![
                    (
                        "RowCount".to_string(),
                        self.person_table.len().to_string(),
                    ),
                    (
                        "ProcessedActions".to_string(),
                        self.processed_actions.to_string(),
                    ),
                ];

                (
                    DatabaseCommandResponse::control_info(info),
                    DatabaseControlAction::Continue,
                )
            }
        }
    }
}
