//! Plain-text reports over the problem-statements file, and the venue
//! details sorter.
//!
//! Records are kept as raw JSON objects so that a malformed entry still shows
//! up in a report (missing fields print as `N/A`) instead of being dropped.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::{self, Write};

pub type Record = Map<String, Value>;

pub const DEFAULT_KEYWORDS: [&str; 9] = [
    "kolam", "blockchain", "quantum", "space", "ocean", "marine", "art", "culture", "heritage",
];

pub const SUMMARY_DESCRIPTION_CHARS: usize = 200;
pub const THEME_DESCRIPTION_CHARS: usize = 150;
pub const SEARCH_DESCRIPTION_CHARS: usize = 300;

pub const SUMMARY_FILE: &str = "ps_summary.txt";
pub const DETAILED_FILE: &str = "ps_detailed.txt";
pub const THEMES_FILE: &str = "ps_themes.txt";
pub const SEARCH_FILE: &str = "ps_unique_search.txt";

/// Format of the "Generated on" header line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MISSING: &str = "N/A";
const UNKNOWN: &str = "Unknown";
const TITLE: &str = "SIH 2025 Problem Statements";

pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json).context("Problem statements are not valid JSON")?;
    let Value::Array(items) = value else {
        bail!("Expected a JSON array of problem statements");
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => bail!("Entry {} is not an object: {}", index, other),
        })
        .collect()
}

fn field<'a>(record: &'a Record, key: &str) -> Cow<'a, str> {
    match record.get(key) {
        None | Some(Value::Null) => Cow::Borrowed(MISSING),
        Some(Value::String(text)) => Cow::Borrowed(text),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

fn lowercase_field(record: &Record, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(text)) => text.to_lowercase(),
        _ => String::new(),
    }
}

fn group_key(record: &Record, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        _ => field(record, key).into_owned(),
    }
}

/// First `max` characters of `text`.
fn prefix(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// `text` cut to `max` characters with `...` appended, or unchanged when it fits.
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    let cut = prefix(text, max);
    if cut.len() == text.len() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{}...", cut))
    }
}

fn header(
    out: &mut impl Write,
    title: &str,
    rule: usize,
    generated_on: &str,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(rule))?;
    writeln!(out, "Generated on: {}", generated_on)
}

pub fn write_summary(out: &mut impl Write, records: &[Record], generated_on: &str) -> io::Result<()> {
    header(out, &format!("{} Summary", TITLE), 50, generated_on)?;
    writeln!(out, "Total Problems: {}\n", records.len())?;

    for (i, ps) in records.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, field(ps, "Statement_id"))?;
        writeln!(out, "   Title: {}", field(ps, "Title"))?;
        writeln!(out, "   Theme: {}", field(ps, "Theme"))?;
        writeln!(out, "   Category: {}", field(ps, "Category"))?;
        writeln!(out, "   Organization: {}", field(ps, "Organisation"))?;
        writeln!(
            out,
            "   Description: {}",
            truncate(&field(ps, "Description"), SUMMARY_DESCRIPTION_CHARS)
        )?;
        writeln!(out, "{}\n", "-".repeat(80))?;
    }
    Ok(())
}

pub fn write_detailed(out: &mut impl Write, records: &[Record], generated_on: &str) -> io::Result<()> {
    header(out, &format!("{} - Detailed View", TITLE), 60, generated_on)?;
    writeln!(out, "Total Problems: {}\n", records.len())?;

    let rule = "=".repeat(80);
    for (i, ps) in records.iter().enumerate() {
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "PROBLEM {}: {}", i + 1, field(ps, "Statement_id"))?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "TITLE: {}\n", field(ps, "Title"))?;
        writeln!(out, "THEME: {}", field(ps, "Theme"))?;
        writeln!(out, "CATEGORY: {}", field(ps, "Category"))?;
        writeln!(out, "DEPARTMENT: {}", field(ps, "Department"))?;
        writeln!(out, "ORGANIZATION: {}", field(ps, "Organisation"))?;
        writeln!(out, "DATASET: {}\n", field(ps, "Datasetfile"))?;
        writeln!(out, "DESCRIPTION:\n{}\n", field(ps, "Description"))?;
    }
    Ok(())
}

/// Records grouped by theme, largest group first. Groups of equal size keep
/// the order their theme was first seen in.
pub fn group_by_theme(records: &[Record]) -> Vec<(String, Vec<&Record>)> {
    let mut groups: Vec<(String, Vec<&Record>)> = Vec::new();
    for ps in records {
        let theme = group_key(ps, "Theme");
        match groups.iter_mut().find(|(name, _)| *name == theme) {
            Some((_, members)) => members.push(ps),
            None => groups.push((theme, vec![ps])),
        }
    }
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    groups
}

pub fn write_themes(out: &mut impl Write, records: &[Record], generated_on: &str) -> io::Result<()> {
    let groups = group_by_theme(records);

    header(out, &format!("{} - Theme Analysis", TITLE), 50, generated_on)?;
    writeln!(out, "Total Themes: {}\n", groups.len())?;

    writeln!(out, "THEME SUMMARY:")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for (theme, members) in &groups {
        writeln!(out, "{}: {} problems", theme, members.len())?;
    }

    writeln!(out, "\n\nDETAILED BY THEME:")?;
    writeln!(out, "{}", "=".repeat(50))?;
    for (theme, members) in &groups {
        writeln!(out, "\n🎯 THEME: {} ({} problems)", theme, members.len())?;
        writeln!(out, "{}", "-".repeat(60))?;
        for ps in members {
            writeln!(out, "  • {}: {}", field(ps, "Statement_id"), field(ps, "Title"))?;
            writeln!(out, "    Org: {}", field(ps, "Organisation"))?;
            writeln!(
                out,
                "    Desc: {}\n",
                truncate(&field(ps, "Description"), THEME_DESCRIPTION_CHARS)
            )?;
        }
    }
    Ok(())
}

/// Records whose title or description contains any keyword, ignoring case.
pub fn search_keywords<'a, S: AsRef<str>>(records: &'a [Record], keywords: &[S]) -> Vec<&'a Record> {
    let needles: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
    records
        .iter()
        .filter(|ps| {
            let title = lowercase_field(ps, "Title");
            let description = lowercase_field(ps, "Description");
            needles
                .iter()
                .any(|needle| title.contains(needle.as_str()) || description.contains(needle.as_str()))
        })
        .collect()
}

pub fn write_search<S: AsRef<str>>(
    out: &mut impl Write,
    matches: &[&Record],
    keywords: &[S],
    generated_on: &str,
) -> io::Result<()> {
    let searched: Vec<&str> = keywords.iter().map(AsRef::as_ref).collect();

    header(out, &format!("{} - Keyword Search Results", TITLE), 60, generated_on)?;
    writeln!(out, "Keywords searched: {}", searched.join(", "))?;
    writeln!(out, "Results found: {}\n", matches.len())?;

    for (i, ps) in matches.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, field(ps, "Statement_id"))?;
        writeln!(out, "   Title: {}", field(ps, "Title"))?;
        writeln!(out, "   Theme: {}", field(ps, "Theme"))?;
        writeln!(
            out,
            "   Description: {}...",
            prefix(&field(ps, "Description"), SEARCH_DESCRIPTION_CHARS)
        )?;
        writeln!(out, "{}\n", "-".repeat(80))?;
    }
    Ok(())
}

/// Problem count per category, ordered by category name.
pub fn category_counts(records: &[Record]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for ps in records {
        *counts.entry(group_key(ps, "Category")).or_insert(0) += 1;
    }
    counts
}

/// Sorts the teams of every venue by name. Venue order is preserved; the
/// result is indented with four spaces and leaves non-ASCII text unescaped.
pub fn sort_venue_details(json: &str) -> Result<String> {
    let venues: Map<String, Value> =
        serde_json::from_str(json).context("Venue details are not a JSON object")?;

    let mut sorted = Map::new();
    for (venue, teams) in venues {
        let Value::Object(teams) = teams else {
            bail!("Venue {} does not map team names to details", venue);
        };
        let mut entries: Vec<(String, Value)> = teams.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        sorted.insert(venue, Value::Object(entries.into_iter().collect()));
    }

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    Value::Object(sorted)
        .serialize(&mut serializer)
        .context("Failed to serialize venue details")?;
    String::from_utf8(buf).context("Serialized venue details are not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GENERATED_ON: &str = "2025-09-01 10:00:00";

    fn records() -> Vec<Record> {
        parse_records(
            r#"[
                {"Statement_id":"SIH25001","Title":"Kolam Pattern Generator","Category":"Software","Theme":"Heritage","Description":"Generate traditional designs","Organisation":"MoC"},
                {"Statement_id":"SIH25002","Title":"Flood Sensor","Category":"Hardware","Theme":"Disaster Management","Description":"Detects rising water","Organisation":"NDMA"},
                {"Statement_id":"SIH25003","Title":"Ledger","Category":"Software","Theme":"Disaster Management","Description":"A BLOCKCHAIN for relief funds"},
                {"Statement_id":"SIH25004","Title":"Untitled","Category":null}
            ]"#,
        )
        .unwrap()
    }

    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_records_rejects_non_arrays() {
        assert!(parse_records(r#"{"Title":"x"}"#).is_err());
        assert!(parse_records("[1]").is_err());
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_summary_prints_missing_fields_as_na() {
        let report = render(|out| write_summary(out, &records(), GENERATED_ON));
        assert!(report.starts_with("SIH 2025 Problem Statements Summary\n"));
        assert!(report.contains("Generated on: 2025-09-01 10:00:00\n"));
        assert!(report.contains("Total Problems: 4\n"));
        assert!(report.contains("4. SIH25004\n   Title: Untitled\n   Theme: N/A\n   Category: N/A\n"));
        assert!(report.contains("   Organization: N/A\n"));
    }

    #[test]
    fn test_summary_truncates_long_descriptions() {
        let long = "x".repeat(250);
        let records =
            parse_records(&format!(r#"[{{"Statement_id":"SIH1","Description":"{}"}}]"#, long)).unwrap();
        let report = render(|out| write_summary(out, &records, GENERATED_ON));
        assert!(report.contains(&format!("   Description: {}...\n", "x".repeat(200))));
    }

    #[test]
    fn test_detailed_includes_every_field() {
        let report = render(|out| write_detailed(out, &records()[..1], GENERATED_ON));
        assert!(report.contains("PROBLEM 1: SIH25001\n"));
        assert!(report.contains("DEPARTMENT: N/A\n"));
        assert!(report.contains("DATASET: N/A\n"));
        assert!(report.contains("DESCRIPTION:\nGenerate traditional designs\n"));
    }

    #[test]
    fn test_theme_groups_sorted_by_size_then_first_seen() {
        let records = records();
        let groups: Vec<(String, usize)> = group_by_theme(&records)
            .into_iter()
            .map(|(theme, members)| (theme, members.len()))
            .collect();
        assert_eq!(
            groups,
            vec![
                ("Disaster Management".to_string(), 2),
                ("Heritage".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]
        );

        let report = render(|out| write_themes(out, &records, GENERATED_ON));
        assert!(report.contains("Total Themes: 3\n"));
        assert!(report.contains("Disaster Management: 2 problems\n"));
        assert!(report.contains("  • SIH25002: Flood Sensor\n    Org: NDMA\n"));
    }

    #[test]
    fn test_keyword_search_is_case_insensitive() {
        let records = records();
        let matches = search_keywords(&records, &DEFAULT_KEYWORDS);
        let ids: Vec<&str> = matches
            .iter()
            .filter_map(|ps| ps["Statement_id"].as_str())
            .collect();
        assert_eq!(ids, vec!["SIH25001", "SIH25003"]);

        let report = render(|out| write_search(out, &matches, &["kolam", "blockchain"], GENERATED_ON));
        assert!(report.contains("Keywords searched: kolam, blockchain\n"));
        assert!(report.contains("Results found: 2\n"));
        assert!(report.contains("   Description: Generate traditional designs...\n"));
    }

    #[test]
    fn test_category_counts_sorted_by_name() {
        let counts: Vec<(String, usize)> = category_counts(&records()).into_iter().collect();
        assert_eq!(
            counts,
            vec![
                ("Hardware".to_string(), 1),
                ("Software".to_string(), 2),
                ("Unknown".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_sort_venue_details_orders_teams_and_keeps_venues() {
        let input = r#"{"SEMINAR HALL":{"Zeta":{"lead":"Ananya"},"Alpha":{"lead":"Rāhul"}},"IOT LAB":{"Obsidian":{},"GenNext":{}}}"#;
        let sorted = sort_venue_details(input).unwrap();
        let expected = "{\n    \"SEMINAR HALL\": {\n        \"Alpha\": {\n            \"lead\": \"Rāhul\"\n        },\n        \"Zeta\": {\n            \"lead\": \"Ananya\"\n        }\n    },\n    \"IOT LAB\": {\n        \"GenNext\": {},\n        \"Obsidian\": {}\n    }\n}";
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_sort_venue_details_rejects_non_object_venues() {
        assert!(sort_venue_details(r#"{"IOT LAB":["Obsidian"]}"#).is_err());
        assert!(sort_venue_details("[]").is_err());
    }
}
