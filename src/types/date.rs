//! Date and date-time scalars.
//!
//! | Scalar       | Accepted input                         | Output format                 |
//! |--------------|----------------------------------------|-------------------------------|
//! | `Date`       | `yyyy-MM-dd`                           | `%Y-%m-%d`                    |
//! | `DateTime`   | `yyyy-MM-dd HH:mm:ss`                  | `%Y-%m-%d %H:%M:%S`           |
//! | `DateTimeTz` | `yyyy-MM-ddTHH:mm:ss[.S+](Z\|±HH:mm)`   | `%Y-%m-%dT%H:%M:%S%.6f%:z`    |
//!
//! Dates and date-times without an offset are taken as UTC.

use std::{ops::Range, sync::LazyLock};

use arcstr::ArcStr;
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset as _, TimeZone as _, Utc,
};

use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, CoercionError, ErrorKind, ServerError, TraceRejection as _},
    span::Spanning,
    types::{
        base::{ParseLiteral, ParseValue, ScalarMeta, ScalarType, SerializeScalar},
        utilities::{extract_string_from_literal, print_safe, print_safe_str},
    },
    value::Value,
};

const DATE_PATTERN: &str =
    r"^(?P<date>[0-9]{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01]))$";

const DATE_TIME_PATTERN: &str = concat!(
    r"^(?P<date>[0-9]{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01]))",
    r" ([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9]|60)$",
);

const DATE_TIME_TZ_PATTERN: &str = concat!(
    r"^(?P<date>[0-9]{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01]))",
    r"T([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])(\.[0-9]+)?",
    r"(Z|[+-]([01][0-9]|2[0-3]):[0-5][0-9])$",
);

static DATE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(DATE_PATTERN).expect("date regex should compile"));

static DATE_TIME_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(DATE_TIME_PATTERN).expect("date-time regex should compile")
});

static DATE_TIME_TZ_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(DATE_TIME_TZ_PATTERN).expect("date-time with offset regex should compile")
});

/// Format handled by a [`DateScalar`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DateFormat {
    /// Calendar date, e.g. `2011-05-23`.
    Date,

    /// Date and wall-clock time, e.g. `2018-05-23 13:43:32`.
    ///
    /// The seconds may be `60`, for leap seconds.
    DateTime,

    /// Date and time with fractional seconds and an UTC offset, e.g.
    /// `2020-04-20T16:20:04.000000+04:00`.
    DateTimeTz,
}

impl DateFormat {
    /// Default scalar name for this format.
    pub fn scalar_name(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::DateTimeTz => "DateTimeTz",
        }
    }

    fn default_description(self) -> &'static str {
        match self {
            Self::Date => "A date string with format `yyyy-MM-dd`, e.g. `2011-05-23`.",
            Self::DateTime => {
                "A datetime string with format `yyyy-MM-dd HH:mm:ss`, e.g. `2018-05-23 13:43:32`."
            }
            Self::DateTimeTz => {
                "A datetime string with format `yyyy-MM-ddTHH:mm:ss.SSSSSSZ`, \
                 e.g. `2020-04-20T16:20:04.000000+04:00`."
            }
        }
    }

    /// [`chrono` format string](chrono::format::strftime) of serialized
    /// values.
    pub fn output_format(self) -> &'static str {
        match self {
            Self::Date => "%Y-%m-%d",
            Self::DateTime => "%Y-%m-%d %H:%M:%S",
            Self::DateTimeTz => "%Y-%m-%dT%H:%M:%S%.6f%:z",
        }
    }

    /// Regular expression an input string has to match, capturing the
    /// calendar date as `date`.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Date => DATE_PATTERN,
            Self::DateTime => DATE_TIME_PATTERN,
            Self::DateTimeTz => DATE_TIME_TZ_PATTERN,
        }
    }

    fn regex(self) -> &'static regex::Regex {
        match self {
            Self::Date => &DATE_REGEX,
            Self::DateTime => &DATE_TIME_REGEX,
            Self::DateTimeTz => &DATE_TIME_TZ_REGEX,
        }
    }

    fn parse(self, s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        match self {
            Self::Date => NaiveDate::parse_from_str(s, self.output_format())
                .map(|d| Utc.fix().from_utc_datetime(&d.and_time(NaiveTime::MIN))),
            Self::DateTime => NaiveDateTime::parse_from_str(s, self.output_format())
                .map(|dt| Utc.fix().from_utc_datetime(&dt)),
            Self::DateTimeTz => DateTime::parse_from_rfc3339(s),
        }
    }
}

/// Checks the day of the month against the length of the month.
///
/// `date` is a `yyyy-MM-dd` string whose month and day are already known to
/// be within `01-12` and `01-31`.
fn is_valid_calendar_date(date: &str) -> bool {
    let field = |range: Range<usize>| date.get(range).and_then(|s| s.parse::<u32>().ok());
    let (Some(year), Some(month), Some(day)) = (field(0..4), field(5..7), field(8..10)) else {
        return false;
    };
    match month {
        2 if is_leap_year(year) => day <= 29,
        2 => day <= 28,
        4 | 6 | 9 | 11 => day <= 30,
        _ => true,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Scalar for dates and date-times in one of the [`DateFormat`]s.
///
/// Input strings go through a fixed pipeline: they have to match the
/// format's regular expression, name an existing day of the calendar, and
/// finally parse into a [`DateTime`]. Already parsed [`Value::DateTime`]s are
/// accepted as-is.
#[derive(Clone, Debug)]
pub struct DateScalar {
    meta: ScalarMeta,
    format: DateFormat,
}

impl DateScalar {
    /// Builds a new [`DateScalar`] for the given `format`, with its default
    /// name and description.
    pub fn new(format: DateFormat) -> Self {
        Self {
            meta: ScalarMeta::new(format.scalar_name()).description(format.default_description()),
            format,
        }
    }

    /// `Date` scalar.
    pub fn date() -> Self {
        Self::new(DateFormat::Date)
    }

    /// `DateTime` scalar.
    pub fn date_time() -> Self {
        Self::new(DateFormat::DateTime)
    }

    /// `DateTimeTz` scalar.
    pub fn date_time_tz() -> Self {
        Self::new(DateFormat::DateTimeTz)
    }

    /// Renames this [`DateScalar`].
    #[must_use]
    pub fn rename(mut self, name: impl Into<ArcStr>) -> Self {
        self.meta.name = name.into();
        self
    }

    /// Sets the `description` of this [`DateScalar`].
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.meta = self.meta.description(description);
        self
    }

    /// Format handled by this [`DateScalar`].
    pub fn format(&self) -> DateFormat {
        self.format
    }

    fn parse_str(&self, s: &str, kind: ErrorKind) -> Result<DateTime<FixedOffset>, CoercionError> {
        let fail = |message| CoercionError::new(kind, message);

        let captures = self.format.regex().captures(s).ok_or_else(|| {
            fail(format!(
                "Value {} does not match \"{}\". Make sure it's ISO 8601 compliant.",
                print_safe_str(s),
                self.format.pattern(),
            ))
        })?;
        let date = captures.name("date").map_or("", |m| m.as_str());
        if !is_valid_calendar_date(date) {
            return Err(fail(format!(
                "Given input value is not ISO 8601 compliant: {}.",
                print_safe_str(s),
            )));
        }
        self.format.parse(s).map_err(|e| fail(e.to_string()))
    }

    fn parse_any(&self, value: &Value, kind: ErrorKind) -> Result<DateTime<FixedOffset>, CoercionError> {
        match value {
            Value::DateTime(dt) => Ok(*dt),
            v => match v.as_string_value() {
                Some(s) => self.parse_str(s, kind),
                None => Err(CoercionError::new(
                    kind,
                    format!("Cannot parse non-string into date: {}", print_safe(v)),
                )),
            },
        }
    }
}

impl ScalarType for DateScalar {
    fn meta(&self) -> &ScalarMeta {
        &self.meta
    }
}

impl SerializeScalar for DateScalar {
    fn serialize(&self, value: &Value) -> Result<Value, ServerError> {
        self.parse_any(value, ErrorKind::Server)
            .map(|dt| Value::from(dt.format(self.format.output_format()).to_string()))
            .map_err(CoercionError::into_server)
            .traced(self.name())
    }
}

impl ParseValue for DateScalar {
    type Parsed = DateTime<FixedOffset>;

    fn parse_value(&self, value: &Value) -> Result<Self::Parsed, ClientError> {
        self.parse_any(value, ErrorKind::Client)
            .map_err(CoercionError::into_client)
            .traced(self.name())
    }
}

impl ParseLiteral for DateScalar {
    fn parse_literal(
        &self,
        literal: &Spanning<InputValue>,
        _: &Variables,
    ) -> Result<Self::Parsed, ClientError> {
        extract_string_from_literal(literal)
            .and_then(|s| {
                self.parse_str(s, ErrorKind::Client)
                    .map_err(|e| e.into_client().at(literal.start()))
            })
            .traced(self.name())
    }
}
