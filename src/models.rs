use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

// --- Core Value Types ---

/// Person
///
/// An immutable value carried inside the body of `/test/{path-param}` requests.
/// Constructed from two named fields and discarded at the end of the request;
/// it has no identity, no relationships, and no lifecycle beyond that.
///
/// *Note*: the fields are private on purpose. The only way to build a `Person`
/// is [`Person::new`] or [`Person::from_json`], and the only way to observe it
/// is through the accessors and the `Display` rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
}

/// PersonDecodeError
///
/// Structured failure modes of the hand-written JSON decode. Each variant names
/// the field (or shape) that did not hold, so the resulting 400 response tells
/// the caller exactly what to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonDecodeError {
    /// The document parsed as JSON but is not an object at the top level.
    #[error("person document must be a JSON object")]
    NotAnObject,
    /// A required field is absent.
    #[error("person document is missing field `{0}`")]
    MissingField(&'static str),
    /// A field is present but carries the wrong type of value.
    #[error("person field `{0}` must be {1}")]
    WrongType(&'static str, &'static str),
}

impl Person {
    /// new
    ///
    /// Constructs a person from its two named fields.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// from_json
    ///
    /// Explicit decode from a generic JSON value. Reads exactly the two named
    /// fields and ignores any extra keys:
    ///
    /// - `name`: must be a JSON string.
    /// - `age`: must be a non-negative JSON integer that fits in a `u32`.
    ///
    /// Fails with a [`PersonDecodeError`] naming the first field that is
    /// missing or mismatched.
    pub fn from_json(value: &Value) -> Result<Self, PersonDecodeError> {
        let object = value.as_object().ok_or(PersonDecodeError::NotAnObject)?;

        let name = object
            .get("name")
            .ok_or(PersonDecodeError::MissingField("name"))?
            .as_str()
            .ok_or(PersonDecodeError::WrongType("name", "a string"))?;

        let age = object
            .get("age")
            .ok_or(PersonDecodeError::MissingField("age"))?
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .ok_or(PersonDecodeError::WrongType("age", "a non-negative integer"))?;

        Ok(Self::new(name, age))
    }

    /// The person's name, exactly as supplied at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's age, exactly as supplied at construction.
    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Person {
    /// Textual rendering combining both fields, e.g. "Name: Ada, Age: 30".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}

// --- Response Schemas (Output) ---

/// EchoResponse
///
/// Output schema for `/test/{path-param}`. Echoes back every piece of request
/// input the handler extracted, so a caller can see how the server read its
/// request. The `person` field carries the decoded body's textual rendering.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct EchoResponse {
    /// The `{path-param}` segment of the request path.
    pub path_param: String,
    /// The optional `query-param` query value, null when absent.
    pub query_param: Option<String>,
    /// The optional urlencoded `form-param` body field, null unless the
    /// request body was form-encoded and carried it.
    pub form_param: Option<String>,
    /// The validated integer `index` query parameter.
    pub index: i32,
    /// Rendering of the decoded person, e.g. "Name: Ada, Age: 30".
    pub person: String,
}

/// TimeIntervalResponse
///
/// Output schema for `/time-interval`. Returned only after the ordering check
/// passed, so `to` is always strictly after `from`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeIntervalResponse {
    /// Start of the interval, as supplied in the `from` query parameter.
    pub from: DateTime<Utc>,
    /// End of the interval, as supplied in the `to` query parameter.
    pub to: DateTime<Utc>,
    /// Whole seconds between the two instants. Strictly positive.
    pub duration_seconds: i64,
}
