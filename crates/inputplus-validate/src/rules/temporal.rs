//! Dates and times parsed with chrono format strings.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::constraints::{Constraints, Prevalidated};
use crate::error::{ParamError, Rejection};
use crate::validator::Validator;

/// Formats tried by [`DateRule::default`], in order.
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d", "%y/%m/%d", "%x"];

/// Formats tried by [`TimeRule::default`], in order.
pub const DEFAULT_TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%X"];

/// Formats tried by [`DateTimeRule::default`], in order.
pub const DEFAULT_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%y/%m/%d %H:%M:%S",
    "%x %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%y %H:%M",
    "%Y/%m/%d %H:%M",
    "%y/%m/%d %H:%M",
    "%x %H:%M",
];

/// Year carried by a parsed value, if it has one.
trait ParsedYear {
    fn parsed_year(&self) -> Option<i32>;
}

impl ParsedYear for NaiveDate {
    fn parsed_year(&self) -> Option<i32> {
        Some(self.year())
    }
}

impl ParsedYear for NaiveDateTime {
    fn parsed_year(&self) -> Option<i32> {
        Some(self.year())
    }
}

impl ParsedYear for NaiveTime {
    fn parsed_year(&self) -> Option<i32> {
        None
    }
}

/// chrono's `%Y` also matches one to three digits. A `%Y` match only counts
/// when the year was typed with four digits, so `10/17/26` falls through to
/// the `%y` formats instead of becoming year 26.
fn year_in_full(candidate: &str, format: &str, year: Option<i32>) -> bool {
    match year {
        Some(year) if format.contains("%Y") => candidate.contains(&format!("{year:04}")),
        _ => true,
    }
}

/// Defines a rule that accepts text matching any of a list of formats.
///
/// Expands to the struct, its constructors, `parse`, `validate_params` and
/// the [`Validator`] impl.
macro_rules! temporal_rule {
    ($(#[$meta:meta])* $name:ident, $output:ty, $defaults:expr, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            formats: Vec<String>,
        }

        impl $name {
            /// Create a rule that tries `formats` in order.
            pub fn new<I, S>(formats: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                Self {
                    formats: formats.into_iter().map(Into::into).collect(),
                }
            }

            /// Formats tried by [`parse`](Self::parse), in order.
            pub fn formats(&self) -> &[String] {
                &self.formats
            }

            /// Parse with the first format that fits.
            pub fn parse(&self, candidate: &str) -> Option<$output> {
                self.formats.iter().find_map(|format| {
                    let value = <$output>::parse_from_str(candidate, format).ok()?;
                    year_in_full(candidate, format, value.parsed_year()).then_some(value)
                })
            }

            /// At least one format is required.
            pub fn validate_params(&self) -> Result<(), ParamError> {
                if self.formats.is_empty() {
                    return Err(ParamError::invalid("formats must not be empty"));
                }
                Ok(())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new($defaults.iter().copied())
            }
        }

        impl Validator for $name {
            fn validate(
                &self,
                candidate: &str,
                constraints: &Constraints,
            ) -> Result<(), Rejection> {
                if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
                    return Ok(());
                }
                match self.parse(candidate) {
                    Some(_) => Ok(()),
                    None => Err(Rejection::new(format!(
                        concat!("'{}' is not a valid ", $what, "."),
                        candidate
                    ))),
                }
            }
        }
    };
}

temporal_rule!(
    /// Accepts calendar dates.
    DateRule,
    NaiveDate,
    DEFAULT_DATE_FORMATS,
    "date"
);

temporal_rule!(
    /// Accepts times of day.
    TimeRule,
    NaiveTime,
    DEFAULT_TIME_FORMATS,
    "time"
);

temporal_rule!(
    /// Accepts a date together with a time of day.
    DateTimeRule,
    NaiveDateTime,
    DEFAULT_DATETIME_FORMATS,
    "date and time"
);

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints() -> Constraints {
        Constraints::new(false)
    }

    #[test]
    fn date_default_formats() {
        let rule = DateRule::default();
        let expected = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(rule.parse("10/17/2026"), Some(expected));
        assert_eq!(rule.parse("2026/10/17"), Some(expected));
    }

    #[test]
    fn date_two_digit_years() {
        let rule = DateRule::default();
        let expected = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(rule.parse("10/17/26"), Some(expected));
        assert_eq!(rule.parse("26/10/17"), Some(expected));
    }

    #[test]
    fn padded_four_digit_year_still_uses_full_year() {
        let rule = DateRule::new(["%Y-%m-%d"]);
        assert_eq!(
            rule.parse("0026-10-17"),
            NaiveDate::from_ymd_opt(26, 10, 17)
        );
        assert_eq!(rule.parse("26-10-17"), None);
    }

    #[test]
    fn locale_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(DateRule::new(["%x"]).parse("10/17/26"), Some(expected));
        assert_eq!(
            TimeRule::new(["%X"]).parse("09:05:30"),
            NaiveTime::from_hms_opt(9, 5, 30)
        );
        assert_eq!(
            DateTimeRule::new(["%x %H:%M"]).parse("10/17/26 09:05"),
            Some(expected.and_hms_opt(9, 5, 0).unwrap())
        );
    }

    #[test]
    fn date_rejects_garbage() {
        let err = DateRule::default()
            .validate("someday", &constraints())
            .unwrap_err();
        assert_eq!(err.reason(), "'someday' is not a valid date.");
    }

    #[test]
    fn date_rejects_impossible_day() {
        assert!(DateRule::default()
            .validate("02/30/2026", &constraints())
            .is_err());
    }

    #[test]
    fn custom_formats() {
        let rule = DateRule::new(["%Y-%m-%d"]);
        assert!(rule.validate("2026-10-17", &constraints()).is_ok());
        assert!(rule.validate("10/17/2026", &constraints()).is_err());
    }

    #[test]
    fn time_default_formats() {
        let rule = TimeRule::default();
        assert_eq!(
            rule.parse("14:30"),
            Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        );
        assert_eq!(
            rule.parse("14:30:15"),
            Some(NaiveTime::from_hms_opt(14, 30, 15).unwrap())
        );
        let err = rule.validate("25:00", &constraints()).unwrap_err();
        assert_eq!(err.reason(), "'25:00' is not a valid time.");
    }

    #[test]
    fn datetime_default_formats() {
        let rule = DateTimeRule::default();
        let expected = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(rule.parse("10/17/2026 09:05"), Some(expected));
        assert_eq!(rule.parse("10/17/26 09:05"), Some(expected));
        assert_eq!(rule.parse("26/10/17 09:05:00"), Some(expected));
        let err = rule.validate("10/17/2026", &constraints()).unwrap_err();
        assert_eq!(err.reason(), "'10/17/2026' is not a valid date and time.");
    }

    #[test]
    fn params_require_a_format() {
        assert!(DateRule::new(Vec::<String>::new()).validate_params().is_err());
        assert_eq!(DateRule::default().formats().len(), DEFAULT_DATE_FORMATS.len());
        assert!(DateRule::default().validate_params().is_ok());
    }
}
