use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a filter value is compared against a job field server-side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Match {
    Exact,
    StartsWith,
    Contains,
    GreaterThan,
    LessThan,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
    /// Value is a list; the field must equal one of its entries
    AnyOf,
    /// Field (usually an annotation) is present; the value is ignored
    Exists,
}

impl Match {
    /// Wire name, as sent in the request body
    pub fn as_str(&self) -> &'static str {
        match self {
            Match::Exact => "exact",
            Match::StartsWith => "startsWith",
            Match::Contains => "contains",
            Match::GreaterThan => "greaterThan",
            Match::LessThan => "lessThan",
            Match::GreaterThanOrEqualTo => "greaterThanOrEqualTo",
            Match::LessThanOrEqualTo => "lessThanOrEqualTo",
            Match::AnyOf => "anyOf",
            Match::Exists => "exists",
        }
    }

    const ALL: [Match; 9] = [
        Match::Exact,
        Match::StartsWith,
        Match::Contains,
        Match::GreaterThan,
        Match::LessThan,
        Match::GreaterThanOrEqualTo,
        Match::LessThanOrEqualTo,
        Match::AnyOf,
        Match::Exists,
    ];
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Match {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Match::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFilterError::UnknownMatch(s.to_string()))
    }
}

/// Error parsing a filter or order from its command-line form
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseFilterError {
    #[error("Invalid filter '{0}': expected field:match:value")]
    Format(String),

    #[error("Unknown match '{0}'")]
    UnknownMatch(String),

    #[error("Unknown sort direction '{0}': expected asc or desc")]
    UnknownDirection(String),

    #[error("Missing field name in '{0}'")]
    MissingField(String),
}

/// A criterion the server uses to select a subset of jobs.
///
/// Sent to the server exactly as constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub field: String,
    pub value: serde_json::Value,
    #[serde(rename = "match")]
    pub match_kind: Match,
    /// Whether `field` names a user annotation rather than a job column
    #[serde(default)]
    pub is_annotation: bool,
}

impl JobFilter {
    pub fn new(
        field: impl Into<String>,
        match_kind: Match,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            match_kind,
            is_annotation: false,
        }
    }

    /// Filter on a job annotation key
    pub fn annotation(
        key: impl Into<String>,
        match_kind: Match,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            is_annotation: true,
            ..Self::new(key, match_kind, value)
        }
    }
}

/// Parses `field:match:value`.
///
/// The value may itself contain `:`. `anyOf` values are split on commas,
/// `exists` accepts `field:exists` with no value, and values of ordering
/// matches are sent as numbers when they parse as one.
impl FromStr for JobFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let field = parts.next().unwrap_or("").trim();
        if field.is_empty() {
            return Err(ParseFilterError::MissingField(s.to_string()));
        }
        let match_kind: Match = parts
            .next()
            .ok_or_else(|| ParseFilterError::Format(s.to_string()))?
            .parse()?;
        let raw_value = parts.next();

        let value = match (match_kind, raw_value) {
            (Match::Exists, _) => serde_json::Value::String(String::new()),
            (_, None) => return Err(ParseFilterError::Format(s.to_string())),
            (Match::AnyOf, Some(raw)) => serde_json::Value::Array(
                raw.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| serde_json::Value::String(v.to_string()))
                    .collect(),
            ),
            (
                Match::GreaterThan
                | Match::LessThan
                | Match::GreaterThanOrEqualTo
                | Match::LessThanOrEqualTo,
                Some(raw),
            ) => raw
                .trim()
                .parse::<serde_json::Number>()
                .map(serde_json::Value::Number)
                .unwrap_or_else(|_| serde_json::Value::String(raw.to_string())),
            (_, Some(raw)) => serde_json::Value::String(raw.to_string()),
        };

        Ok(JobFilter::new(field, match_kind, value))
    }
}
