use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::{Map, Value};

use crate::domain::{ContactPatch, NewContact};
use crate::errors::AppError;

/// Request body as handed to the contact handlers.
pub type JsonBody = Result<Json<Value>, JsonRejection>;

/// Top-level fields of a request body.
///
/// Each contact field is read on its own: a string is taken as given, any
/// other value (including `null`) counts as absent without affecting the
/// other fields.
#[derive(Debug, Default)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// A request without a JSON content type, or whose JSON is not an object,
    /// carries no fields. JSON that does not parse is rejected.
    pub fn from_body(body: JsonBody) -> Result<Self, AppError> {
        match body {
            Ok(Json(Value::Object(fields))) => Ok(Fields(fields)),
            Ok(Json(_)) | Err(JsonRejection::MissingJsonContentType(_)) => Ok(Fields::default()),
            Err(rejection) => Err(AppError::MalformedBody(rejection.body_text())),
        }
    }

    fn string(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(Value::as_str).map(str::to_owned)
    }
}

impl From<Fields> for NewContact {
    fn from(fields: Fields) -> Self {
        NewContact {
            name: fields.string("name"),
            email: fields.string("email"),
            phone: fields.string("phone"),
        }
    }
}

impl From<Fields> for ContactPatch {
    fn from(fields: Fields) -> Self {
        ContactPatch {
            name: fields.string("name"),
            email: fields.string("email"),
            phone: fields.string("phone"),
        }
    }
}
