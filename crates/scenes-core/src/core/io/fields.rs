use super::error::FormatErrorKind;
use std::str::FromStr;

/// A fixed column range of a WHAT IF list record (0-based, end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

impl Field {
    pub const fn new(name: &'static str, start: usize, end: usize) -> Self {
        Self { name, start, end }
    }

    pub fn raw<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.start..self.end).unwrap_or("")
    }

    pub fn trimmed<'a>(&self, line: &'a str) -> &'a str {
        self.raw(line).trim()
    }

    /// 1-based inclusive column range, as used in error messages.
    pub fn columns(&self) -> String {
        if self.end - self.start == 1 {
            format!("{}", self.end)
        } else {
            format!("{}-{}", self.start + 1, self.end)
        }
    }

    pub fn parse_int<T: FromStr>(&self, line: &str) -> Result<T, FormatErrorKind> {
        let value = self.trimmed(line);
        value.parse().map_err(|_| FormatErrorKind::InvalidInt {
            field: self.name,
            columns: self.columns(),
            value: value.to_string(),
        })
    }

    /// Parses a decimal printed with exactly three fraction digits.
    pub fn parse_decimal3(&self, line: &str) -> Result<f64, FormatErrorKind> {
        let value = self.trimmed(line);
        let invalid = || FormatErrorKind::InvalidDecimal {
            field: self.name,
            columns: self.columns(),
            value: value.to_string(),
        };
        let (whole, fraction) = value.split_once('.').ok_or_else(invalid)?;
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !digits(whole) || !digits(fraction) || fraction.len() != 3 {
            return Err(invalid());
        }
        value.parse().map_err(|_| invalid())
    }

    /// A single-character field; blank yields `None`.
    pub fn optional_char(&self, line: &str) -> Option<char> {
        self.trimmed(line).chars().next()
    }
}

/// Checks the preconditions for byte-offset extraction.
pub(crate) fn check_extent(
    line: &str,
    record: &'static str,
    min: usize,
) -> Result<(), FormatErrorKind> {
    if !line.is_ascii() {
        return Err(FormatErrorKind::NonAscii);
    }
    if line.len() < min {
        return Err(FormatErrorKind::LineTooShort {
            record,
            min,
            found: line.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBER: Field = Field::new("Residue number", 2, 6);
    const DISTANCE: Field = Field::new("Distance", 0, 5);
    const CODE: Field = Field::new("Insertion code", 1, 2);

    #[test]
    fn columns_are_reported_one_based_inclusive() {
        assert_eq!(NUMBER.columns(), "3-6");
        assert_eq!(CODE.columns(), "2");
    }

    #[test]
    fn parse_int_accepts_padded_and_negative_values() {
        assert_eq!(NUMBER.parse_int::<i32>("xx  -1yy"), Ok(-1));
        assert_eq!(NUMBER.parse_int::<i32>("xx1419yy"), Ok(1419));
    }

    #[test]
    fn parse_int_rejects_non_numeric_values_naming_the_field() {
        let err = NUMBER.parse_int::<i32>("xx  4Ayy").unwrap_err();
        assert_eq!(
            err,
            FormatErrorKind::InvalidInt {
                field: "Residue number",
                columns: "3-6".to_string(),
                value: "4A".to_string(),
            }
        );
        assert!(err.to_string().contains("Residue number"));
    }

    #[test]
    fn parse_int_rejects_blank_fields() {
        assert!(NUMBER.parse_int::<u32>("xx    yy").is_err());
    }

    #[test]
    fn parse_decimal3_requires_exactly_three_fraction_digits() {
        assert_eq!(DISTANCE.parse_decimal3("2.191"), Ok(2.191));
        assert!(DISTANCE.parse_decimal3(" 2.19").is_err());
        assert!(DISTANCE.parse_decimal3("2191 ").is_err());
        assert!(DISTANCE.parse_decimal3("2.1a1").is_err());
        assert!(DISTANCE.parse_decimal3("-.191").is_err());
    }

    #[test]
    fn optional_char_treats_blank_as_none() {
        assert_eq!(CODE.optional_char("1 3"), None);
        assert_eq!(CODE.optional_char("1A3"), Some('A'));
    }

    #[test]
    fn check_extent_rejects_short_and_non_ascii_lines() {
        assert_eq!(
            check_extent("abc", "test", 5),
            Err(FormatErrorKind::LineTooShort {
                record: "test",
                min: 5,
                found: 3,
            })
        );
        assert_eq!(check_extent("abcdé", "test", 5), Err(FormatErrorKind::NonAscii));
        assert_eq!(check_extent("abcde", "test", 5), Ok(()));
    }
}
