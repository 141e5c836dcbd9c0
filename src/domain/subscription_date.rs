use super::RecordError;
use time::{macros::format_description, Date};

/// Raw `end_date` value meaning the subscription has not ended.
pub const NO_END_DATE: &str = "-";

pub(super) fn parse_start_date(raw: Option<&str>) -> Result<Date, RecordError> {
    match raw {
        Some(raw) => parse_iso_date("start_date", raw),
        None => Err(RecordError::MalformedDate {
            field: "start_date",
            value: String::new(),
        }),
    }
}

pub(super) fn parse_end_date(raw: Option<&str>) -> Result<Option<Date>, RecordError> {
    match raw.map(str::trim) {
        None | Some(NO_END_DATE) => Ok(None),
        Some(raw) => parse_iso_date("end_date", raw).map(Some),
    }
}

fn parse_iso_date(field: &'static str, raw: &str) -> Result<Date, RecordError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        RecordError::MalformedDate {
            field,
            value: raw.to_string(),
        }
    })
}
