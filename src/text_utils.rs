use std::ops::Index;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

pub fn parse_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    lazy_static! {
        static ref DATE_TIME_REGEX: Regex = Regex::new(
            r#"^(\d{4})-(\d{1,2})-(\d{1,2})[ T](\d{1,2}):(\d{1,2}):(\d{1,2})(\.\d{0,3})?$"#
        ).unwrap();
    }

    let Some(caps) = DATE_TIME_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = to_u32(caps.index(4))?;
    let mn: u32 = to_u32(caps.index(5))?;
    let s: u32 = to_u32(caps.index(6))?;

    let date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| format!("Invalid date in {}", buf))?;
    let time = NaiveTime::from_hms_opt(h, mn, s)
        .ok_or_else(|| format!("Invalid time in {}", buf))?;

    Ok(NaiveDateTime::new(date, time))
}

/// Best effort reading of a `publishedOn` value.
///
/// Accepts `2023-01-31`, RFC 3339 timestamps, `2023-01-31 10:42:32[.123]`
/// and long form dates like `January 31, 2023`.
pub fn parse_date(buf: &str) -> Option<NaiveDate> {
    let buf = buf.trim();

    if let Ok(date) = NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf) {
        return Some(date_time.date_naive());
    }
    if let Ok(date_time) = parse_date_time(buf) {
        return Some(date_time.date());
    }
    NaiveDate::parse_from_str(buf, "%B %d, %Y").ok()
}
