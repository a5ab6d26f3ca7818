use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::{
        action::{Action, ActionResult},
        person::{InvalidInput, Person},
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyErrors {
    // CRUD - CREATE / UPDATE
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    // CRUD - CREATE
    #[error("Cannot create, record already exists: {0}")]
    CannotCreateWhenAlreadyExists(EntityId),

    // CRUD - UPDATE
    #[error("Cannot update, record does not exist: {0}")]
    CannotUpdateDoesNotExist(EntityId),

    // CRUD - DELETE
    #[error("Cannot delete, record does not exist: {0}")]
    CannotDeleteDoesNotExist(EntityId),
}

impl ApplyErrors {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApplyErrors::CannotUpdateDoesNotExist(_) | ApplyErrors::CannotDeleteDoesNotExist(_)
        )
    }
}

/// Rows are kept in insertion order, lookups are a linear scan
#[derive(Debug, Default)]
pub struct PersonTable {
    pub person_rows: Vec<Person>,
}

impl PersonTable {
    pub fn new() -> Self {
        Self {
            person_rows: Vec::new(),
        }
    }

    pub fn new_seeded() -> Self {
        Self {
            person_rows: vec![Person::seed()],
        }
    }

    // Each mutation action can be broken up into 2 steps, a failed step leaves the table untouched
    //  - Verifying validity (input format, existence)
    //  - Applying action
    pub fn apply(&mut self, action: Action) -> Result<ActionResult, ApplyErrors> {
        let action_result = match action {
            Action::Add(input) => {
                let data = input.validate()?;

                let person = Person::new(data);

                if self.position(&person.id).is_some() {
                    return Err(ApplyErrors::CannotCreateWhenAlreadyExists(person.id));
                }

                self.person_rows.push(person.clone());

                ActionResult::Single(person)
            }
            Action::Update(id, input) => {
                let data = input.validate()?;

                let person = self
                    .person_rows
                    .iter_mut()
                    .find(|person| person.id == id)
                    .ok_or(ApplyErrors::CannotUpdateDoesNotExist(id))?;

                person.replace(data);

                ActionResult::Single(person.clone())
            }
            Action::Remove(id) => {
                let index = self
                    .position(&id)
                    .ok_or(ApplyErrors::CannotDeleteDoesNotExist(id))?;

                self.person_rows.remove(index);

                ActionResult::Deleted
            }
            Action::Get(id) => ActionResult::GetSingle(self.get(&id).cloned()),
            Action::List => ActionResult::List(self.person_rows.clone()),
        };

        Ok(action_result)
    }

    pub fn get(&self, id: &EntityId) -> Option<&Person> {
        self.person_rows.iter().find(|person| &person.id == id)
    }

    pub fn len(&self) -> usize {
        self.person_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.person_rows.is_empty()
    }

    fn position(&self, id: &EntityId) -> Option<usize> {
        self.person_rows.iter().position(|person| &person.id == id)
    }
}
