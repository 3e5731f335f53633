use crate::error::{Result, SharedError};
use crate::models::problem::{Category, ProblemStatement};
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Problem statement exactly as it appears in `PS.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct ProblemStatementDto {
    #[validate(length(min = 1, message = "Statement id is required"))]
    #[serde(rename = "Statement_id", default, deserialize_with = "string_or_null")]
    pub statement_id: String,
    #[serde(rename = "Title", default, deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(rename = "Category", default, deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(rename = "Theme", default, deserialize_with = "string_or_null")]
    pub theme: String,
    #[serde(rename = "Description", default, deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(rename = "Department", default, deserialize_with = "string_or_null")]
    pub department: String,
    #[serde(rename = "Organisation", default, deserialize_with = "string_or_null")]
    pub organisation: String,
    #[serde(rename = "Datasetfile", default, skip_serializing_if = "Option::is_none")]
    pub dataset_file: Option<String>,
}

fn string_or_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TryFrom<ProblemStatementDto> for ProblemStatement {
    type Error = SharedError;

    fn try_from(dto: ProblemStatementDto) -> Result<Self> {
        if let Err(errors) = dto.validate() {
            if errors.field_errors().contains_key("statement_id") {
                return Err(SharedError::MissingField("Statement_id".to_string()));
            }
            return Err(errors.into());
        }
        Ok(Self {
            id: dto.statement_id,
            title: dto.title,
            category: Category::parse(&dto.category),
            theme: dto.theme,
            description: dto.description,
            department: dto.department,
            organisation: dto.organisation,
            dataset_file: ProblemStatement::dataset_from_raw(dto.dataset_file),
        })
    }
}

impl From<&ProblemStatement> for ProblemStatementDto {
    fn from(ps: &ProblemStatement) -> Self {
        Self {
            statement_id: ps.id.clone(),
            title: ps.title.clone(),
            category: ps.category.as_str().to_string(),
            theme: ps.theme.clone(),
            description: ps.description.clone(),
            department: ps.department.clone(),
            organisation: ps.organisation.clone(),
            dataset_file: ps.dataset_file.clone(),
        }
    }
}

/// Parses the problem-statements resource. The document must be a JSON array;
/// entries that fail validation are skipped with a warning.
pub fn parse_problem_statements(json: &str) -> Result<Vec<ProblemStatement>> {
    let dtos: Vec<ProblemStatementDto> = serde_json::from_str(json)?;
    let total = dtos.len();
    let problems: Vec<ProblemStatement> = dtos
        .into_iter()
        .enumerate()
        .filter_map(|(index, dto)| match ProblemStatement::try_from(dto) {
            Ok(ps) => Some(ps),
            Err(e) => {
                warn!("Skipping problem statement #{}: {}", index, e);
                None
            }
        })
        .collect();
    debug!("Parsed {} of {} problem statements", problems.len(), total);
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    const CATALOGUE: &str = r#"[
        {
            "Statement_id": "SIH25001",
            "Title": "Kolam Pattern Generator",
            "Category": "Software",
            "Theme": "Heritage & Culture",
            "Description": "Generate kolam designs.",
            "Department": "Ministry of Culture",
            "Organisation": "Ministry of Culture",
            "Datasetfile": "NULL"
        },
        {
            "Statement_id": "SIH25002",
            "Title": "Soil Moisture Sensor",
            "Category": "Hardware",
            "Theme": "Agriculture",
            "Description": null,
            "Department": "ICAR",
            "Organisation": "ICAR",
            "Datasetfile": "soil.csv"
        }
    ]"#;

    #[test]
    fn test_parse_catalogue() {
        let problems = parse_problem_statements(CATALOGUE).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].id, "SIH25001");
        assert_eq!(problems[0].category, Category::Software);
        assert_eq!(problems[0].dataset_file, None);
        assert_eq!(problems[1].description, "");
        assert_eq!(problems[1].dataset_file.as_deref(), Some("soil.csv"));
    }

    #[test]
    fn test_entries_without_id_are_skipped() {
        let json = r#"[{"Title": "Orphan"}, {"Statement_id": "SIH1", "Title": "Kept"}]"#;
        let problems = parse_problem_statements(json).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].title, "Kept");
    }

    #[test]
    fn test_dto_without_id_reports_missing_field() {
        let dto = ProblemStatementDto {
            title: "Orphan".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ProblemStatement::try_from(dto).unwrap_err(),
            SharedError::MissingField("Statement_id".to_string())
        );
    }

    #[test]
    fn test_non_array_document_is_a_conversion_error() {
        let err = parse_problem_statements(r#"{"Statement_id": "SIH1"}"#).unwrap_err();
        assert!(matches!(err, SharedError::Conversion(_)));
        assert!(parse_problem_statements("<html>404</html>").is_err());
    }

    #[test]
    fn test_dto_round_trip_keeps_source_field_names() {
        let ps = &ProblemStatement::fallback()[0];
        let json = serde_json::to_value(ProblemStatementDto::from(ps)).unwrap();
        assert_eq!(json["Statement_id"], "SIH1524");
        assert_eq!(json["Category"], "Hardware");
        assert!(json.get("Datasetfile").is_none());
    }
}
