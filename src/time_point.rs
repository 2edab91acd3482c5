//! Start and end points of an event

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::{json, Value};

use crate::codec::{CodecError, FieldPath, FromTree, ObjectReader, ToTree};

/// Either a date-time (`date_time` is set), or a whole day (`date_time` is empty, and `date` usually holds a bare `YYYY-MM-DD` date).
///
/// Strings are stored as they were received, and are only parsed on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimePoint {
    /// RFC3339 timestamp, or empty for all-day time points
    pub date_time: String,
    /// IANA time zone name, may be empty
    pub time_zone: String,
    /// Bare date, for all-day time points
    pub date: String,
}

impl TimePoint {
    pub fn from_date_time(date_time: String, time_zone: String) -> Self {
        Self { date_time, time_zone, date: String::new() }
    }

    pub fn from_date(date: String) -> Self {
        Self { date, ..Self::default() }
    }

    /// Whether this carries no time-of-day component
    pub fn is_all_day(&self) -> bool {
        self.date_time.is_empty()
    }

    /// The parsed `date_time`, if it is a valid RFC3339 timestamp
    pub fn date_time_with_offset(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.date_time).ok()
    }

    /// The parsed `date`, if it is a valid `YYYY-MM-DD` date
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl FromTree for TimePoint {
    fn from_tree(value: &Value, path: &FieldPath) -> Result<Self, CodecError> {
        let reader = ObjectReader::new(value, path, &["dateTime", "timeZone", "date"])?;
        Ok(Self {
            date_time: reader.string("dateTime")?,
            time_zone: reader.string("timeZone")?,
            date: reader.string("date")?,
        })
    }
}

impl ToTree for TimePoint {
    fn to_tree(&self) -> Value {
        json!({
            "dateTime": self.date_time,
            "timeZone": self.time_zone,
            "date": self.date,
        })
    }
}
