use chrono::{DateTime, Days, NaiveDate, TimeDelta, Utc};

use tradebook_core::DomainError;
use tradebook_finance::DateWindow;
use tradebook_records::parse_timestamp;

use crate::error::SnapshotError;

/// Build a reporting window from user-supplied bounds.
///
/// A bare date as the end bound covers that whole day.
pub fn parse_window(from: Option<&str>, to: Option<&str>) -> Result<DateWindow, SnapshotError> {
    let start = from.map(|raw| parse_bound(raw, false)).transpose()?;
    let end = to.map(|raw| parse_bound(raw, true)).transpose()?;
    Ok(DateWindow::new(start, end)?)
}

fn parse_bound(raw: &str, end_of_day: bool) -> Result<DateTime<Utc>, DomainError> {
    if end_of_day {
        if let Ok(day) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            let last_instant = day
                .checked_add_days(Days::new(1))
                .and_then(|next| next.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc() - TimeDelta::nanoseconds(1));
            return last_instant.ok_or_else(|| DomainError::validation(format!("date out of range: {raw}")));
        }
    }

    parse_timestamp(raw).ok_or_else(|| DomainError::validation(format!("unrecognized date: {raw}")))
}
