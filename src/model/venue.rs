use crate::utils::distance::calculate_distance;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Text keyed by language code, e.g. `{"en": "Casual", "he": "לא פורמלי"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Exact lookup, no fallback.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    /// Lookup for display: requested language, then English, then whatever is there.
    pub fn resolve(&self, lang: &str) -> &str {
        self.get(lang)
            .or_else(|| self.get("en"))
            .or_else(|| self.0.values().next().map(String::as_str))
            .unwrap_or_default()
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|text| text.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LocalizedText(
            iter.into_iter()
                .map(|(lang, text)| (lang.into(), text.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid happy hour window {0:?}, expected HH:MM-HH:MM")]
pub struct InvalidWindow(String);

/// Daily happy hour window. Bounds are zero-padded 24-hour `HH:MM` strings and
/// are compared as strings, so a window that crosses midnight never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HappyHourWindow {
    start: String,
    end: String,
}

impl HappyHourWindow {
    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, now_hh_mm: &str) -> bool {
        self.start.as_str() <= now_hh_mm && now_hh_mm <= self.end.as_str()
    }
}

fn is_hh_mm(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours < 24 && minutes < 60
}

impl TryFrom<String> for HappyHourWindow {
    type Error = InvalidWindow;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.split_once('-') {
            Some((start, end)) if is_hh_mm(start) && is_hh_mm(end) => Ok(HappyHourWindow {
                start: start.to_owned(),
                end: end.to_owned(),
            }),
            _ => Err(InvalidWindow(value)),
        }
    }
}

impl From<HappyHourWindow> for String {
    fn from(window: HappyHourWindow) -> Self {
        window.to_string()
    }
}

impl fmt::Display for HappyHourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub name: LocalizedText,
    pub area: Option<String>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub happy_hour: Option<HappyHourWindow>,
    #[serde(default)]
    pub deal: LocalizedText,
    #[serde(default)]
    pub vibe: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    pub price_range: Option<String>,
    pub hours: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub popular: bool,
}

impl Venue {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// `None` when the venue has no coordinates.
    pub fn distance_to(&self, latitude: f64, longitude: f64) -> Option<f64> {
        self.coordinates()
            .map(|(lat, lon)| calculate_distance(latitude, longitude, lat, lon))
    }

    /// Parses a JSON array of venues. A record with an unparsable happy hour
    /// window is kept without the window, so it never shows as currently open.
    pub fn list_from_json(raw: &str) -> serde_json::Result<Vec<Venue>> {
        let records: Vec<Value> = serde_json::from_str(raw)?;
        records.into_iter().map(Venue::from_record).collect()
    }

    fn from_record(mut record: Value) -> serde_json::Result<Venue> {
        let invalid = match record.get("happy_hour") {
            Some(Value::String(window)) => HappyHourWindow::try_from(window.clone()).err(),
            _ => None,
        };
        if let Some(err) = invalid {
            log::warn!("Venue {} ignores its {}", record["name"], err);
            record["happy_hour"] = Value::Null;
        }
        serde_json::from_value(record)
    }
}

#[cfg(test)]
pub(crate) fn sample_venues() -> Vec<Venue> {
    serde_json::from_str(include_str!("../../data/venues.json")).unwrap()
}
