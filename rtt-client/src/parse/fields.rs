//! Field access shared by every parser.
//!
//! [`Fields`] wraps a JSON object together with the name of the entity
//! being built, so every error it returns says where it happened. The
//! "assign if set" rule for optional fields lives here and nowhere else.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::ParseError;

/// Which field of which entity a value came from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldRef {
    pub entity: &'static str,
    pub key: &'static str,
}

impl FieldRef {
    fn wrong_type(self, expected: &'static str) -> ParseError {
        ParseError::WrongType {
            entity: self.entity,
            field: self.key,
            expected,
        }
    }
}

/// Conversion from a non-null JSON value.
pub(crate) trait FromJson: Sized {
    fn from_json(value: &Value, at: FieldRef) -> Result<Self, ParseError>;
}

impl FromJson for String {
    fn from_json(value: &Value, at: FieldRef) -> Result<Self, ParseError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| at.wrong_type("a string"))
    }
}

impl FromJson for bool {
    fn from_json(value: &Value, at: FieldRef) -> Result<Self, ParseError> {
        value.as_bool().ok_or_else(|| at.wrong_type("a boolean"))
    }
}

impl FromJson for i32 {
    fn from_json(value: &Value, at: FieldRef) -> Result<Self, ParseError> {
        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| at.wrong_type("a 32-bit integer"))
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value, at: FieldRef) -> Result<Self, ParseError> {
        let items = value.as_array().ok_or_else(|| at.wrong_type("an array"))?;
        items.iter().map(|item| T::from_json(item, at)).collect()
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &Value, at: FieldRef) -> Result<Self, ParseError> {
        T::from_json(value, at).map(Some)
    }
}

/// A JSON object viewed as the source of one entity.
pub(crate) struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// View `json` as the object for `entity`.
    pub fn of(json: &'a Value, entity: &'static str) -> Result<Self, ParseError> {
        json.as_object()
            .map(|map| Self { entity, map })
            .ok_or(ParseError::NotAnObject { entity })
    }

    /// The raw value under `key`, null included.
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Fail on the first of `keys` that is absent. Null values count as present.
    pub fn require_keys(&self, keys: &[&'static str]) -> Result<(), ParseError> {
        match keys.iter().copied().find(|key| !self.map.contains_key(*key)) {
            Some(field) => Err(self.missing(field)),
            None => Ok(()),
        }
    }

    /// A mandatory, non-null value.
    pub fn required<T: FromJson>(&self, key: &'static str) -> Result<T, ParseError> {
        match self.map.get(key) {
            None => Err(self.missing(key)),
            Some(Value::Null) => Err(self.invalid(key, "must not be null")),
            Some(value) => T::from_json(value, self.at(key)),
        }
    }

    /// A mandatory, non-empty string.
    pub fn non_empty(&self, key: &'static str) -> Result<String, ParseError> {
        let s: String = self.required(key)?;
        if s.is_empty() {
            return Err(self.invalid(key, "must not be empty"));
        }
        Ok(s)
    }

    /// Overwrite `slot` with the value under `key` if the key is present and
    /// not null; otherwise leave `slot` holding its default.
    pub fn assign_if_set<T: FromJson>(
        &self,
        slot: &mut T,
        key: &'static str,
    ) -> Result<(), ParseError> {
        if let Some(value) = self.map.get(key).filter(|v| !v.is_null()) {
            *slot = T::from_json(value, self.at(key))?;
        }
        Ok(())
    }

    /// A mandatory `YYYY-MM-DD` date.
    pub fn date(&self, key: &'static str) -> Result<NaiveDate, ParseError> {
        let value = self.map.get(key).ok_or_else(|| self.missing(key))?;
        value
            .as_str()
            .and_then(parse_iso_date)
            .ok_or_else(|| ParseError::InvalidDate {
                entity: self.entity,
                value: value.to_string(),
            })
    }

    fn at(&self, key: &'static str) -> FieldRef {
        FieldRef {
            entity: self.entity,
            key,
        }
    }

    fn missing(&self, field: &'static str) -> ParseError {
        ParseError::MissingField {
            entity: self.entity,
            field,
        }
    }

    fn invalid(&self, field: &'static str, reason: &'static str) -> ParseError {
        ParseError::InvalidField {
            entity: self.entity,
            field,
            reason,
        }
    }
}

/// Parse a fixed-width `YYYY-MM-DD` date.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    // chrono tolerates unpadded fields, leading spaces and signed years
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
