use chrono::{Local, NaiveDate};

use crate::error::DateRangeError;

/// Format shared by the date inputs, the request body and the booking link.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_form_date(date: NaiveDate) -> String {
    date.format(FORM_DATE_FORMAT).to_string()
}

pub fn parse_form_date(value: &str) -> Result<NaiveDate, DateRangeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateRangeError::Missing);
    }
    NaiveDate::parse_from_str(value, FORM_DATE_FORMAT)
        .map_err(|_| DateRangeError::Unparseable(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_picker_format() {
        let date = parse_form_date("2024-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(format_form_date(date), "2024-06-01");
    }

    #[test]
    fn rejects_other_formats() {
        assert_eq!(parse_form_date("  "), Err(DateRangeError::Missing));
        assert_eq!(
            parse_form_date("01/06/2024"),
            Err(DateRangeError::Unparseable("01/06/2024".into()))
        );
    }
}
