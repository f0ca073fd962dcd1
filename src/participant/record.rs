//! Participant records as they appear in the race data file

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder shown for missing optional fields
pub const PLACEHOLDER: &str = "N/A";

/// One race participant. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    #[serde(alias = "race_no", deserialize_with = "deserialize_bib")]
    pub bib_number: u32,
    pub full_name: String,
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub club: Option<String>,
}

impl Participant {
    pub fn new(bib_number: u32, full_name: &str) -> Self {
        Self {
            bib_number,
            full_name: full_name.to_string(),
            age: None,
            category: None,
            club: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_club(mut self, club: &str) -> Self {
        self.club = Some(club.to_string());
        self
    }

    /// Bib number as the text that search terms are matched against
    pub fn bib_text(&self) -> String {
        self.bib_number.to_string()
    }

    pub fn age_display(&self) -> String {
        self.age
            .filter(|&age| age > 0)
            .map(|age| age.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn category_display(&self) -> &str {
        non_empty_or_placeholder(self.category.as_deref())
    }

    pub fn club_display(&self) -> &str {
        non_empty_or_placeholder(self.club.as_deref())
    }
}

fn non_empty_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => PLACEHOLDER,
    }
}

/// Integer view of a JSON value, accepting numbers written as strings
fn value_as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

/// Integer prefix of `s`, the way `parseInt` reads "42 years" as 42
fn leading_integer(s: &str) -> Option<u32> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn deserialize_bib<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match value_as_u32(&raw) {
        Some(bib) if bib > 0 => Ok(bib),
        _ => Err(serde::de::Error::custom(format!(
            "bib number must be a positive integer, got {}",
            raw
        ))),
    }
}

fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_u32))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{"race_no": 101, "full_name": "Alice Smith", "age": 34, "category": "F30", "club": "Harriers"}"#;
        let runner: Participant = serde_json::from_str(json).unwrap();

        assert_eq!(runner.bib_number, 101);
        assert_eq!(runner.full_name, "Alice Smith");
        assert_eq!(runner.age, Some(34));
        assert_eq!(runner.category.as_deref(), Some("F30"));
        assert_eq!(runner.club.as_deref(), Some("Harriers"));
    }

    #[test]
    fn test_bib_number_alias_accepted() {
        let json = r#"{"bib_number": 7, "full_name": "Bo"}"#;
        let runner: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(runner.bib_number, 7);
    }

    #[test]
    fn test_string_numbers_accepted() {
        let json = r#"{"race_no": "205", "full_name": "Cara Lee", "age": "41"}"#;
        let runner: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(runner.bib_number, 205);
        assert_eq!(runner.age, Some(41));
    }

    #[test]
    fn test_unparseable_age_is_missing() {
        let json = r#"{"race_no": 3, "full_name": "Dee", "age": "unknown"}"#;
        let runner: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(runner.age, None);
    }

    #[test]
    fn test_null_optional_fields() {
        let json = r#"{"race_no": 3, "full_name": "Dee", "age": null, "club": null}"#;
        let runner: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(runner.age, None);
        assert_eq!(runner.club, None);
    }

    #[test]
    fn test_malformed_optional_fields_are_missing() {
        let json = r#"{"race_no": 3, "full_name": "Dee", "age": true, "category": ["x"], "club": 12}"#;
        let runner: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(runner.age, None);
        assert_eq!(runner.category, None);
        assert_eq!(runner.club.as_deref(), Some("12"));
    }

    #[test]
    fn test_zero_bib_rejected() {
        let json = r#"{"race_no": 0, "full_name": "Nobody"}"#;
        assert!(serde_json::from_str::<Participant>(json).is_err());
    }

    #[test]
    fn test_missing_name_rejected() {
        let json = r#"{"race_no": 12}"#;
        assert!(serde_json::from_str::<Participant>(json).is_err());
    }

    #[test]
    fn test_placeholders_for_missing_fields() {
        let runner = Participant::new(9, "Eve");
        assert_eq!(runner.age_display(), "N/A");
        assert_eq!(runner.category_display(), "N/A");
        assert_eq!(runner.club_display(), "N/A");
    }

    #[test]
    fn test_zero_age_shown_as_placeholder() {
        let json = r#"{"race_no": 4, "full_name": "Tot", "age": 0}"#;
        let runner: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(runner.age, Some(0));
        assert_eq!(runner.age_display(), "N/A");
        assert_eq!(Participant::new(5, "Ann").with_age(7).age_display(), "7");
    }

    #[test]
    fn test_empty_club_uses_placeholder() {
        let runner = Participant::new(9, "Eve").with_club("");
        assert_eq!(runner.club_display(), "N/A");
    }

    #[test]
    fn test_bib_text() {
        assert_eq!(Participant::new(1042, "Fay").bib_text(), "1042");
    }
}
