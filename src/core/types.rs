use crate::core::models::TimeInterval;
use crate::errors::{Error, Result};
use crate::extensions::chrono::HoursExt;
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDashSeparators;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GlobalCommand {
    #[strum(serialize = "busy", to_string = "busy")]
    Busy,
    #[strum(serialize = "task", to_string = "task")]
    Task,
    #[strum(serialize = "free", to_string = "free")]
    Free,
    #[strum(serialize = "schedule", to_string = "schedule")]
    Schedule,
    #[strum(serialize = "clear", to_string = "clear")]
    Clear,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "help", to_string = "help")]
    Help,
}

impl GlobalCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::unknown(format!(
                "'{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<GlobalCommand>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d", to_string = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y", to_string = "%m-%d-%Y")]
    MdYDash,
    #[strum(serialize = "%m-%d", to_string = "%m-%d")]
    MdDash,
}

impl DateFormat {
    /// `MM-DD` has no year; borrow the current one and parse as `YYYY-MM-DD`.
    fn normalize(self, input: &str) -> (String, DateFormat) {
        match self {
            DateFormat::MdDash => {
                let year = Local::now().date_naive().year();
                (format!("{year}-{input}"), DateFormat::YmdDash)
            }
            other => (input.to_owned(), other),
        }
    }
}

impl Date {
    pub fn usage() -> String {
        let today = Local::now().date_naive();
        let formats = DateFormat::iter()
            .map(|df| today.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {} (slashes work too)", formats)
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();

        for f in DateFormat::iter() {
            let (normalized, format) = f.normalize(&input);
            if let Ok(date) = NaiveDate::parse_from_str(&normalized, format.as_ref()) {
                return Ok(Date(date));
            }
        }

        Err(Error::Parse(format!(
            "Invalid date format: '{}'. {}",
            input,
            Self::usage()
        )))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A time-of-day span, `start <= end`, not yet tied to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum TimeFormat {
    #[strum(serialize = "%-I:%M%p")]
    HmMeridian,
    #[strum(serialize = "%H:%M")]
    Hm24,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start > end {
            return Err(Error::validation(format!(
                "Start time '{}' must not be later than end time '{}'.",
                start.format(TimeFormat::HmMeridian.as_ref()),
                end.format(TimeFormat::HmMeridian.as_ref())
            )));
        }
        Ok(TimeRange { start, end })
    }

    /// Parses `<start>-<end>`, e.g. `9AM-10:30AM`, `9-5`, `13:00-14:00`.
    /// A token without a meridian is read as AM for the start and PM for the end,
    /// unless it is written in 24-hour form (hour above 12 or a leading zero).
    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = s.split_once('-').ok_or_else(|| {
            Error::Parse(format!(
                "Invalid time range format: '{}'. Expected format: '<start>-<end>'.",
                s
            ))
        })?;

        let start = Self::parse_token(start, true)?;
        let end = Self::parse_token(end, false)?;
        Self::new(start, end)
    }

    fn parse_token(raw: &str, is_start: bool) -> Result<NaiveTime> {
        let mut token = raw.trim().to_ascii_uppercase();
        if token.is_empty() {
            return Err(Error::Parse(Self::error_message(raw)));
        }

        let has_meridian = token.ends_with("AM") || token.ends_with("PM");
        if !has_meridian {
            if Self::looks_24h(&token) {
                if !token.contains(':') {
                    token.push_str(":00");
                }
                return NaiveTime::parse_from_str(&token, TimeFormat::Hm24.as_ref())
                    .map_err(|_| Error::Parse(Self::error_message(raw)));
            }
            token.push_str(if is_start { "AM" } else { "PM" });
        }

        if !token.contains(':') {
            let idx = token.len() - 2;
            token.insert_str(idx, ":00");
        }

        NaiveTime::parse_from_str(&token, TimeFormat::HmMeridian.as_ref())
            .map_err(|_| Error::Parse(Self::error_message(raw)))
    }

    fn looks_24h(token: &str) -> bool {
        let hour = token.split(':').next().unwrap_or("");
        hour.starts_with('0') || hour.parse::<u32>().map(|h| h > 12).unwrap_or(false)
    }

    /// Anchor this range to `date`.
    pub fn on(&self, date: NaiveDate) -> TimeInterval {
        TimeInterval::from_ordered(
            NaiveDateTime::new(date, self.start),
            NaiveDateTime::new(date, self.end),
        )
    }

    pub fn usage() -> String {
        let now = Local::now().time();
        let time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now);
        let formats = TimeFormat::iter()
            .map(|fmt| time.format(fmt.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}, 9AM, 9", formats)
    }

    fn error_message(input: &str) -> String {
        format!("Invalid time format: '{}'. {}", input.trim(), Self::usage())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format(TimeFormat::HmMeridian.as_ref()),
            self.end.format(TimeFormat::HmMeridian.as_ref())
        )
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<TimeRange, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        TimeRange::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// A positive, finite number of hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hours(pub f32);

impl Hours {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let value: f32 = s.trim().parse().map_err(|_| {
            Error::Parse(format!(
                "Invalid duration: '{}'. Expected a number of hours, e.g. 1.5",
                s.trim()
            ))
        })?;
        Self::try_new(value)
    }

    pub fn try_new(value: f32) -> Result<Self> {
        if !value.is_finite() || value.hours_to_duration() <= Duration::zero() {
            return Err(Error::validation(format!(
                "Task duration must be a positive number of hours, got {value}."
            )));
        }
        Ok(Hours(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "yes", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "no", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// How the placer walks the free intervals when looking for room.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum SlotScanOrder {
    #[strum(serialize = "positional", to_string = "positional")]
    Positional,
    #[strum(serialize = "earliest-start", to_string = "earliest-start")]
    EarliestStart,
}

impl SlotScanOrder {
    pub fn help(&self) -> &'static str {
        match self {
            SlotScanOrder::Positional => {
                "First interval in original order with enough room, even if an earlier one was shrunk."
            }
            SlotScanOrder::EarliestStart => {
                "Fitting interval with the earliest current start time."
            }
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid slot scan order: '{}'. Allowed orders: {}",
                s.trim(),
                valid_csv::<SlotScanOrder>()
            ))
        })
    }
}
