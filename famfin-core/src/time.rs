//! Time utilities: resolve "today" for transaction dates in a user's timezone.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Parse an IANA tz like "Asia/Ho_Chi_Minh".
pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// Calendar date of `now` as seen in `tz`.
pub fn local_date(now: DateTime<Utc>, tz: &str) -> Result<NaiveDate> {
    let tz = parse_timezone(tz)?;
    Ok(now.with_timezone(&tz).date_naive())
}
