//! Wire types for admin backend records.
//!
//! DESIGN
//! ======
//! The backend owns the schema for users and counsellors. These structs name
//! the columns the dashboard displays and keep every other field in `extra`
//! so a record read and written back loses nothing. Scalar columns are
//! decoded leniently because the backend mixes numbers, strings and booleans.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::error::ApiError;

/// A record that can be shown in a table row and edited field by field.
pub trait EditableRecord: Clone + PartialEq + Send + Sync + 'static {
    /// Backend identifier (`_id`).
    fn id(&self) -> &str;
    /// Display text for a column, `None` when the value is absent.
    fn field(&self, name: &str) -> Option<String>;
    /// Replace a column from form input.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the input does not fit the column.
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), String>;
}

/// How a user signs in, derived from the presence of a stored password.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthType {
    Google,
    EmailPassword,
}

impl AuthType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::EmailPassword => "Email/Password",
        }
    }
}

/// A platform user as returned by `/api/admin/get-all-users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub fullname: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub status: Option<String>,
    /// Password hash; only its presence matters to the dashboard.
    #[serde(rename = "Password", default, skip_serializing)]
    pub password: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn auth_type(&self) -> AuthType {
        match &self.password {
            Some(Value::String(hash)) if !hash.is_empty() => AuthType::EmailPassword,
            Some(Value::Null) | None => AuthType::Google,
            Some(Value::String(_)) => AuthType::Google,
            Some(_) => AuthType::EmailPassword,
        }
    }
}

impl EditableRecord for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "fullname" => self.fullname.clone(),
            "email" => self.email.clone(),
            "role" => self.role.clone(),
            "gender" => self.gender.clone(),
            "phone_number" => self.phone_number.clone(),
            "status" => self.status.clone(),
            "authType" => Some(self.auth_type().label().to_owned()),
            other => self.extra.get(other).and_then(scalar_text),
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), String> {
        let value = non_empty(value);
        match name {
            "fullname" => self.fullname = value,
            "email" => self.email = value,
            "role" => self.role = value,
            "gender" => self.gender = value,
            "phone_number" => self.phone_number = value,
            "status" => self.status = value,
            other => return Err(format!("{} cannot be edited", field_label(other))),
        }
        Ok(())
    }
}

/// A counsellor as returned by `/api/counsellor/getcounsellor`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Counsellor {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub fullname: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_number", skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_number", skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EditableRecord for Counsellor {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "fullname" => self.fullname.clone(),
            "email" => self.email.clone(),
            "gender" => self.gender.clone(),
            "years_experience" => self.years_experience.map(format_number),
            "hourly_rate" => self.hourly_rate.map(format_number),
            "status" => self.status.clone(),
            other => self.extra.get(other).and_then(scalar_text),
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name {
            "years_experience" => self.years_experience = parse_number_field(name, value)?,
            "hourly_rate" => self.hourly_rate = parse_number_field(name, value)?,
            "fullname" => self.fullname = non_empty(value),
            "email" => self.email = non_empty(value),
            "gender" => self.gender = non_empty(value),
            "status" => self.status = non_empty(value),
            other => return Err(format!("{} cannot be edited", field_label(other))),
        }
        Ok(())
    }
}

/// Form label for a field key: first `_` becomes a space, then uppercase.
pub fn field_label(name: &str) -> String {
    name.replacen('_', " ", 1).to_uppercase()
}

/// Whether a field holds a number and should use a numeric input.
pub fn is_numeric_field(name: &str) -> bool {
    name.contains("rate") || name.contains("experience")
}

/// Decode the `data` array of a list response. A missing list is empty.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when `data` is not an array of records.
pub fn parse_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    let data = match body {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    };
    match data {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string())),
        other => Err(ApiError::Decode(format!("expected a list, got {other}"))),
    }
}

fn parse_number_field(name: &str, value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| format!("{} must be a number", field_label(name)))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Array(_) | Value::Object(_) => Err(D::Error::custom("expected a scalar value")),
        scalar => Ok(scalar_text(&scalar)),
    }
}

fn deserialize_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number.as_f64().map(Some).ok_or_else(|| D::Error::custom("number out of range")),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, got {text:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
