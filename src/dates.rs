use chrono::NaiveDate;
use log::warn;

/// Date format used throughout the configuration file.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an optional `YYYY-MM-DD` string from the config.
///
/// Missing and empty values mean "no date". Unparseable values are skipped
/// with a warning so one bad record does not abort the whole run.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?;
    if value.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("Invalid date format: {value}");
            None
        }
    }
}
