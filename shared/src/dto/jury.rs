use crate::error::Result;
use crate::models::jury::JuryAssignment;
use crate::models::team::Venue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `jury_details.json`: venue name to panel details. Only the keys and their
/// order are used; the panel details are opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JuryDetailsDto {
    pub jury_details: Map<String, Value>,
}

impl JuryDetailsDto {
    pub fn assignments(&self) -> Vec<JuryAssignment> {
        self.jury_details
            .keys()
            .enumerate()
            .map(|(ordinal, venue)| JuryAssignment::new(Venue::parse(venue), ordinal))
            .collect()
    }
}

pub fn parse_jury_details(json: &str) -> Result<Vec<JuryAssignment>> {
    let dto: JuryDetailsDto = serde_json::from_str(json)?;
    Ok(dto.assignments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assignments_follow_document_order() {
        let json = r#"{
            "jury_details": {
                "STARTUP STUDIO": {"members": ["A"]},
                "IOT LAB": [],
                "SEMINAR HALL": null
            }
        }"#;
        let jury = parse_jury_details(json).unwrap();
        assert_eq!(
            jury,
            vec![
                JuryAssignment::new(Venue::StartupStudio, 0),
                JuryAssignment::new(Venue::IotLab, 1),
                JuryAssignment::new(Venue::SeminarHall, 2),
            ]
        );
    }

    #[test]
    fn test_missing_jury_details_is_an_error() {
        assert!(parse_jury_details(r#"{"panels": {}}"#).is_err());
    }
}
