use crate::csv::{parse_csv, CsvRecord};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names consumed from the selected-teams roster
pub mod columns {
    pub const TEAM_NAME: &str = "TEAM NAME";
    pub const TEAM_LEAD_NAME: &str = "TEAM LEAD NAME";
    pub const PS_ID: &str = "PS ID";
    pub const VENUE: &str = "Venue";
    pub const TOTAL: &str = "TOTAL";
}

/// Evaluation venue. Anything outside the known rooms is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Venue {
    SeminarHall,
    IotLab,
    StartupStudio,
    Other(String),
}

impl Venue {
    pub const KNOWN: [Venue; 3] = [Venue::SeminarHall, Venue::IotLab, Venue::StartupStudio];

    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "SEMINAR HALL" => Venue::SeminarHall,
            "IOT LAB" => Venue::IotLab,
            "STARTUP STUDIO" => Venue::StartupStudio,
            other => Venue::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Venue::SeminarHall => "SEMINAR HALL",
            Venue::IotLab => "IOT LAB",
            Venue::StartupStudio => "STARTUP STUDIO",
            Venue::Other(label) => label,
        }
    }
}

impl From<String> for Venue {
    fn from(label: String) -> Self {
        Venue::parse(&label)
    }
}

impl From<Venue> for String {
    fn from(venue: Venue) -> Self {
        venue.label().to_string()
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selected team from the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub venue: Venue,
    pub lead_name: String,
    pub problem_statement_id: String,
    /// Evaluation total; 0 when the roster value is missing or not a number
    pub total_score: i64,
}

impl Team {
    pub fn from_record(record: &CsvRecord) -> Self {
        Self {
            name: record.get_or_empty(columns::TEAM_NAME).to_string(),
            venue: Venue::parse(record.get_or_empty(columns::VENUE)),
            lead_name: record.get_or_empty(columns::TEAM_LEAD_NAME).to_string(),
            problem_statement_id: record.get_or_empty(columns::PS_ID).to_string(),
            total_score: parse_score(record.get_or_empty(columns::TOTAL)),
        }
    }
}

/// Reads the leading integer of `text`: optional whitespace, an optional sign,
/// then digits. Trailing junk is ignored ("12.7" is 12); no digits at all, or
/// a value that does not fit, gives 0.
pub fn parse_score(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// Parses the roster CSV into teams, in file order.
pub fn parse_teams(csv_text: &str) -> Vec<Team> {
    let teams: Vec<Team> = parse_csv(csv_text).iter().map(Team::from_record).collect();
    debug!("Parsed {} teams from roster", teams.len());
    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("42", 42)]
    #[case("  7", 7)]
    #[case("-5", -5)]
    #[case("+8", 8)]
    #[case("12.7", 12)]
    #[case("30abc", 30)]
    #[case("N/A", 0)]
    #[case("", 0)]
    #[case("-", 0)]
    #[case("99999999999999999999999", 0)]
    fn test_parse_score(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_score(raw), expected);
    }

    #[rstest]
    #[case("SEMINAR HALL", Venue::SeminarHall)]
    #[case("IOT LAB", Venue::IotLab)]
    #[case(" STARTUP STUDIO ", Venue::StartupStudio)]
    #[case("AUDITORIUM", Venue::Other("AUDITORIUM".to_string()))]
    fn test_venue_parse(#[case] raw: &str, #[case] expected: Venue) {
        assert_eq!(Venue::parse(raw), expected);
    }

    #[test]
    fn test_parse_teams_coerces_fields() {
        let csv = "TEAM NAME,TEAM LEAD NAME,PS ID,Venue,TOTAL\n\
            GenNext,Asha,SIH1524,SEMINAR HALL,42\n\
            Obsidian,Meera,SIH1600,IOT LAB,N/A\n";
        let teams = parse_teams(csv);
        assert_eq!(teams.len(), 2);
        assert_eq!(
            teams[0],
            Team {
                name: "GenNext".to_string(),
                venue: Venue::SeminarHall,
                lead_name: "Asha".to_string(),
                problem_statement_id: "SIH1524".to_string(),
                total_score: 42,
            }
        );
        assert_eq!(teams[1].venue, Venue::IotLab);
        assert_eq!(teams[1].total_score, 0);
    }

    #[test]
    fn test_parse_teams_without_total_column() {
        let teams = parse_teams("TEAM NAME,Venue\nScratch,IOT LAB");
        assert_eq!(teams[0].total_score, 0);
        assert_eq!(teams[0].lead_name, "");
    }
}
