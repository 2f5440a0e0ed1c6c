// FollowCheck - core/document.rs
//
// Document validation: turns parsed JSON into typed followers/following
// documents, failing on the first structural violation.
// Core layer: pure logic, no I/O.

use crate::core::model::{
    Document, DocumentRole, EntryWrapper, FollowersDocument, FollowingDocument, RawEntry,
};
use crate::util::constants::{
    FOLLOWING_FIELD, HREF_FIELD, STRING_LIST_FIELD, TIMESTAMP_FIELD, VALUE_FIELD,
};
use crate::util::error::{FollowCheckError, ParseError, SchemaError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Parse raw document text as JSON.
///
/// Runs before any shape validation so malformed text is always reported
/// as a `ParseError`, never a `SchemaError`.
pub fn parse_json(role: DocumentRole, text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(|source| ParseError { role, source })
}

/// Parse and validate document text for the given role.
pub fn load_document(role: DocumentRole, text: &str) -> Result<Document, FollowCheckError> {
    let value = parse_json(role, text)?;
    let document = validate(role, &value)?;
    tracing::debug!(role = %role, bytes = text.len(), "Document validated");
    Ok(document)
}

/// Validate a parsed value against the shape expected for `role`.
pub fn validate(role: DocumentRole, value: &Value) -> Result<Document, SchemaError> {
    match role {
        DocumentRole::Followers => validate_followers(value).map(Document::Followers),
        DocumentRole::Following => validate_following(value).map(Document::Following),
    }
}

/// Validate a followers document: a top-level array of wrappers.
pub fn validate_followers(value: &Value) -> Result<FollowersDocument, SchemaError> {
    let ctx = Ctx {
        role: DocumentRole::Followers,
    };
    let wrappers = value
        .as_array()
        .ok_or_else(|| ctx.fail("$", "expected a top-level array"))?;
    Ok(FollowersDocument {
        wrappers: ctx.wrappers(wrappers, "$")?,
    })
}

/// Validate a following document: an object with a `relationships_following` array.
pub fn validate_following(value: &Value) -> Result<FollowingDocument, SchemaError> {
    let ctx = Ctx {
        role: DocumentRole::Following,
    };
    let object = value
        .as_object()
        .ok_or_else(|| ctx.fail("$", "expected a top-level object"))?;

    let path = format!("$.{FOLLOWING_FIELD}");
    let wrappers = match object.get(FOLLOWING_FIELD) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ctx.fail(&path, "expected an array")),
        None => return Err(ctx.fail(&path, "missing required field")),
    };
    Ok(FollowingDocument {
        relationships_following: ctx.wrappers(wrappers, &path)?,
    })
}

/// Carries the role through the traversal so every failure is tagged with it.
struct Ctx {
    role: DocumentRole,
}

impl Ctx {
    fn fail(&self, path: &str, reason: &'static str) -> SchemaError {
        SchemaError {
            role: self.role,
            path: path.to_string(),
            reason,
        }
    }

    fn wrappers(&self, items: &[Value], base: &str) -> Result<Vec<EntryWrapper>, SchemaError> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.wrapper(item, &format!("{base}[{i}]")))
            .collect()
    }

    fn wrapper(&self, value: &Value, path: &str) -> Result<EntryWrapper, SchemaError> {
        let object = value
            .as_object()
            .ok_or_else(|| self.fail(path, "expected a wrapper object"))?;

        let list_path = format!("{path}.{STRING_LIST_FIELD}");
        let entries = match object.get(STRING_LIST_FIELD) {
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(self.fail(&list_path, "expected an array")),
            None => return Err(self.fail(&list_path, "missing required field")),
        };

        let string_list_data = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| self.entry(entry, &format!("{list_path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EntryWrapper { string_list_data })
    }

    fn entry(&self, value: &Value, path: &str) -> Result<RawEntry, SchemaError> {
        let object = value
            .as_object()
            .ok_or_else(|| self.fail(path, "expected an entry object"))?;

        let value = match object.get(VALUE_FIELD) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(self.fail(&format!("{path}.{VALUE_FIELD}"), "expected a string"))
            }
            None => {
                return Err(self.fail(
                    &format!("{path}.{VALUE_FIELD}"),
                    "missing required field",
                ))
            }
        };

        Ok(RawEntry {
            value,
            href: self.href(object, path)?,
            timestamp: self.timestamp(object, path)?,
        })
    }

    fn href(&self, object: &Map<String, Value>, path: &str) -> Result<String, SchemaError> {
        match object.get(HREF_FIELD) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(self.fail(&format!("{path}.{HREF_FIELD}"), "expected a string")),
        }
    }

    fn timestamp(
        &self,
        object: &Map<String, Value>,
        path: &str,
    ) -> Result<Option<i64>, SchemaError> {
        let raw = match object.get(TIMESTAMP_FIELD) {
            None | Some(Value::Null) => return Ok(None),
            Some(raw) => raw,
        };
        let ts_path = format!("{path}.{TIMESTAMP_FIELD}");
        let secs = raw
            .as_i64()
            .ok_or_else(|| self.fail(&ts_path, "expected an integer number of seconds"))?;
        if DateTime::<Utc>::from_timestamp(secs, 0).is_none() {
            return Err(self.fail(&ts_path, "timestamp out of range"));
        }
        Ok(Some(secs))
    }
}
