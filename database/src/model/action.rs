use crate::consts::consts::EntityId;

use super::person::{Person, PersonInput};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Validated by the table before it is applied
    Add(PersonInput),
    Update(EntityId, PersonInput),
    Remove(EntityId),
    Get(EntityId),
    /// Returns every Person in insertion order
    List,
}

impl Action {
    pub fn is_mutation(&self) -> bool {
        match self {
            Action::Add(_) | Action::Remove(_) | Action::Update(_, _) => true,
            Action::List | Action::Get(_) => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActionResult {
    Single(Person),
    GetSingle(Option<Person>),
    List(Vec<Person>),
    /// The record was removed, nothing is returned
    Deleted,
}

impl ActionResult {
    pub fn single(self) -> Option<Person> {
        if let ActionResult::Single(p) = self {
            Some(p)
        } else {
            None
        }
    }

    pub fn get_single(self) -> Option<Option<Person>> {
        if let ActionResult::GetSingle(p) = self {
            Some(p)
        } else {
            None
        }
    }

    pub fn list(self) -> Option<Vec<Person>> {
        if let ActionResult::List(l) = self {
            Some(l)
        } else {
            None
        }
    }

    pub fn deleted(self) -> Option<()> {
        if let ActionResult::Deleted = self {
            Some(())
        } else {
            None
        }
    }

    /// Short name used when logging an unexpected result
    pub fn kind(&self) -> &'static str {
        match self {
            ActionResult::Single(_) => "Single",
            ActionResult::GetSingle(_) => "GetSingle",
            ActionResult::List(_) => "List",
            ActionResult::Deleted => "Deleted",
        }
    }
}
