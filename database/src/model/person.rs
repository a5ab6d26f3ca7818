use serde::Serialize;
use serde_json::{Number, Value};
use thiserror::Error;

use crate::consts::consts::{EntityId, SEED_PERSON_AGE, SEED_PERSON_ID, SEED_PERSON_NAME};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: EntityId,
    /// Any truthy json value, names are not required to be strings
    pub name: Value,
    pub age: Number,
    pub hobbies: Vec<Value>,
}

impl Person {
    pub fn new(data: PersonData) -> Self {
        Person::from_data(EntityId::new(), data)
    }

    pub fn from_data(id: EntityId, data: PersonData) -> Self {
        Person {
            id,
            name: data.name,
            age: data.age,
            hobbies: data.hobbies,
        }
    }

    /// Overwrites every field except the id
    pub fn replace(&mut self, data: PersonData) {
        self.name = data.name;
        self.age = data.age;
        self.hobbies = data.hobbies;
    }

    /// Record the store is initialized with on startup
    pub fn seed() -> Self {
        Person {
            id: EntityId::from(SEED_PERSON_ID),
            name: Value::from(SEED_PERSON_NAME),
            age: Number::from(SEED_PERSON_AGE),
            hobbies: vec![],
        }
    }
}

/// Validated fields of a person, everything but the id
#[derive(Clone, Debug, PartialEq)]
pub struct PersonData {
    pub name: Value,
    pub age: Number,
    pub hobbies: Vec<Value>,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid data format")]
pub struct InvalidInput;

/// Raw, untyped fields of a create / update body. Nothing is checked until [`PersonInput::validate`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonInput {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub hobbies: Option<Value>,
}

impl PersonInput {
    /// Reads the `name`, `age` and `hobbies` members of a json object. Any other value (array, string, etc.)
    /// produces an input with no fields, which is rejected on validation.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => PersonInput {
                name: fields.remove("name"),
                age: fields.remove("age"),
                hobbies: fields.remove("hobbies"),
            },
            _ => PersonInput::default(),
        }
    }

    /// All three checks form a single precondition, no per field feedback is given
    ///  - `name` must be truthy (not absent, null, false, 0 or "")
    ///  - `age` must be a json number
    ///  - `hobbies` must be a json array, the elements are not checked
    pub fn validate(self) -> Result<PersonData, InvalidInput> {
        match (self.name, self.age, self.hobbies) {
            (Some(name), Some(Value::Number(age)), Some(Value::Array(hobbies)))
                if is_truthy(&name) =>
            {
                Ok(PersonData { name, age, hobbies })
            }
            _ => Err(InvalidInput),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
impl PersonData {
    pub fn new_test(name: &str, age: u64, hobbies: &[&str]) -> Self {
        PersonData {
            name: Value::from(name),
            age: Number::from(age),
            hobbies: hobbies.iter().map(|h| Value::from(*h)).collect(),
        }
    }
}

#[cfg(test)]
impl PersonInput {
    pub fn new_test(name: &str, age: u64, hobbies: &[&str]) -> Self {
        PersonInput {
            name: Some(Value::from(name)),
            age: Some(Value::from(age)),
            hobbies: Some(Value::from(hobbies.to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    mod validate {
        use super::*;

        #[test]
        fn accepts_well_formed_input() {
            let input =
                PersonInput::from_json(json!({"name": "Ana", "age": 30, "hobbies": ["chess"]}));

            assert_eq!(
                input.validate(),
                Ok(PersonData::new_test("Ana", 30, &["chess"]))
            );
        }

        #[test]
        fn does_not_check_hobby_element_types() {
            let input =
                PersonInput::from_json(json!({"name": "Ana", "age": 1, "hobbies": [1, null, {}]}));

            let data = input.validate().expect("any array should be accepted");

            assert_eq!(data.hobbies, vec![json!(1), json!(null), json!({})]);
        }

        #[test]
        fn keeps_fractional_and_negative_ages() {
            let input =
                PersonInput::from_json(json!({"name": "Ana", "age": -30.5, "hobbies": []}));

            let data = input.validate().expect("no range constraint on age");

            assert_eq!(data.age.as_f64(), Some(-30.5));
        }

        #[rstest]
        #[case::number(json!(5))]
        #[case::boolean(json!(true))]
        #[case::object(json!({"first": "Ana"}))]
        #[case::empty_array(json!([]))]
        #[case::zero_string(json!("0"))]
        fn accepts_truthy_non_string_names(#[case] name: Value) {
            let input = PersonInput::from_json(json!({"name": name.clone(), "age": 30, "hobbies": []}));

            let data = input.validate().expect("truthy names should be accepted");

            assert_eq!(data.name, name);
        }

        #[rstest]
        #[case::age_is_a_string(json!({"name": "Ana", "age": "30", "hobbies": []}))]
        #[case::empty_name(json!({"name": "", "age": 30, "hobbies": []}))]
        #[case::missing_name(json!({"age": 30, "hobbies": []}))]
        #[case::null_name(json!({"name": null, "age": 30, "hobbies": []}))]
        #[case::zero_name(json!({"name": 0, "age": 30, "hobbies": []}))]
        #[case::fractional_zero_name(json!({"name": 0.0, "age": 30, "hobbies": []}))]
        #[case::false_name(json!({"name": false, "age": 30, "hobbies": []}))]
        #[case::missing_age(json!({"name": "Ana", "hobbies": []}))]
        #[case::null_age(json!({"name": "Ana", "age": null, "hobbies": []}))]
        #[case::missing_hobbies(json!({"name": "Ana", "age": 30}))]
        #[case::hobbies_is_a_string(json!({"name": "Ana", "age": 30, "hobbies": "chess"}))]
        #[case::hobbies_is_an_object(json!({"name": "Ana", "age": 30, "hobbies": {}}))]
        #[case::not_an_object(json!(["Ana", 30, []]))]
        fn rejects_invalid_input(#[case] body: Value) {
            let input = PersonInput::from_json(body);

            assert_eq!(input.validate(), Err(InvalidInput));
        }

        #[test]
        fn non_object_bodies_have_no_fields() {
            assert_eq!(PersonInput::from_json(json!("Ana")), PersonInput::default());
            assert_eq!(PersonInput::from_json(json!([1, 2])), PersonInput::default());
        }
    }

    #[test]
    fn serializes_with_public_field_names() {
        let person = Person::seed();

        assert_eq!(
            serde_json::to_value(&person).unwrap(),
            json!({"id": "1", "name": "Sam", "age": 26, "hobbies": []})
        );
    }

    #[test]
    fn replace_keeps_the_id() {
        let mut person = Person::seed();

        person.replace(PersonData::new_test("Sam2", 27, &["run"]));

        assert_eq!(person.id, EntityId::from("1"));
        assert_eq!(person.name, "Sam2");
        assert_eq!(person.hobbies, vec![json!("run")]);
    }
}
