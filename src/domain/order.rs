use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::filter::ParseFilterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl FromStr for Direction {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(ParseFilterError::UnknownDirection(s.to_string())),
        }
    }
}

/// Sort specification applied server-side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOrder {
    pub field: String,
    pub direction: Direction,
}

impl JobOrder {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }
}

/// Newest jobs first
impl Default for JobOrder {
    fn default() -> Self {
        Self::desc("jobId")
    }
}

/// Parses `field` or `field:asc|desc`
impl FromStr for JobOrder {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(':') {
            Some((field, direction)) => (field.trim(), direction.parse()?),
            None => (s.trim(), Direction::default()),
        };
        if field.is_empty() {
            return Err(ParseFilterError::MissingField(s.to_string()));
        }
        Ok(JobOrder::new(field, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_uppercase_direction() {
        let json = serde_json::to_string(&JobOrder::asc("submitted")).unwrap();
        assert_eq!(json, r#"{"field":"submitted","direction":"ASC"}"#);
    }

    #[test]
    fn parses_order_with_direction() {
        let order: JobOrder = "lastTransitionTime:ASC".parse().unwrap();
        assert_eq!(order, JobOrder::asc("lastTransitionTime"));
    }

    #[test]
    fn parses_order_defaulting_to_desc() {
        let order: JobOrder = "submitted".parse().unwrap();
        assert_eq!(order, JobOrder::desc("submitted"));
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = "jobId:interleaved".parse::<JobOrder>().unwrap_err();
        assert_eq!(err, ParseFilterError::UnknownDirection("interleaved".to_string()));
    }

    #[test]
    fn rejects_empty_field() {
        assert!(":asc".parse::<JobOrder>().is_err());
    }
}
