//! Time-window resolution for relative presets and custom ranges.
//!
//! Relative presets are anchored to a `now` instant supplied by the caller;
//! the public adapters pass the wall clock through their `_at` variants so
//! tests can fix time deterministically. All day boundaries are computed in
//! the requested timezone, then converted back to UTC instants.

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone,
    Utc,
};
use chrono_tz::Tz;

use super::TimeRangePreset;

/// The time predicates contributed to a backend query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRangeFilter {
    pub updated_at_gteq: Option<String>,
    pub updated_at_lteq: Option<String>,
}

/// Resolve a time preset into absolute UTC bounds.
///
/// `today`/`last7days`/`last30days` yield a single `>=` bound: `now` in the
/// given timezone, minus 0/7/30 days, truncated to the local start of day.
/// `custom` requires both `time_from` and `time_to`; a half-specified range
/// means the preset is not actually active yet and contributes nothing.
/// When both are present, `time_from` is floored to local start of day and
/// `time_to` ceilinged to local end of day. Timezone defaults to UTC.
#[must_use]
pub fn sdk_filter_time(
    preset: Option<TimeRangePreset>,
    time_from: Option<DateTime<Utc>>,
    time_to: Option<DateTime<Utc>>,
    timezone: Option<Tz>,
    now: DateTime<Utc>,
) -> TimeRangeFilter {
    let tz = timezone.unwrap_or(Tz::UTC);

    match preset {
        Some(TimeRangePreset::Today) => gteq_only(iso_at_days_before(now, 0, tz)),
        Some(TimeRangePreset::Last7Days) => gteq_only(iso_at_days_before(now, 7, tz)),
        Some(TimeRangePreset::Last30Days) => gteq_only(iso_at_days_before(now, 30, tz)),
        Some(TimeRangePreset::Custom) => match (time_from, time_to) {
            (Some(from), Some(to)) => TimeRangeFilter {
                updated_at_gteq: Some(iso_at_day_start(from, tz)),
                updated_at_lteq: Some(iso_at_day_end(to, tz)),
            },
            _ => TimeRangeFilter::default(),
        },
        None => TimeRangeFilter::default(),
    }
}

/// Compact label for a custom range, e.g. `"3-7 Mar"` when both bounds
/// share a month, otherwise `"Mar 3 - Apr 7"`. Dates are read in the given
/// timezone (default UTC).
#[must_use]
pub fn time_range_custom_label(
    time_from: DateTime<Utc>,
    time_to: DateTime<Utc>,
    timezone: Option<Tz>,
) -> String {
    let tz = timezone.unwrap_or(Tz::UTC);
    let from = time_from.with_timezone(&tz);
    let to = time_to.with_timezone(&tz);

    if from.year() == to.year() && from.month() == to.month() {
        format!("{}-{} {}", from.day(), to.day(), from.format("%b"))
    } else {
        format!(
            "{} {} - {} {}",
            from.format("%b"),
            from.day(),
            to.format("%b"),
            to.day()
        )
    }
}

fn gteq_only(bound: String) -> TimeRangeFilter {
    TimeRangeFilter {
        updated_at_gteq: Some(bound),
        updated_at_lteq: None,
    }
}

fn to_utc_iso(instant: DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resolve a naive local time against a timezone. A time falling into a DST
/// gap resolves to the earliest valid local time after the gap.
fn resolve_local(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(&naive).earliest().map_or_else(
        || {
            tz.from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
                .unwrap_or_else(|| tz.from_utc_datetime(&naive))
        },
        |dt| dt,
    )
}

fn start_of_local_day(tz: Tz, day: NaiveDate) -> DateTime<Tz> {
    resolve_local(tz, day.and_time(NaiveTime::MIN))
}

fn iso_at_days_before(now: DateTime<Utc>, days: i64, tz: Tz) -> String {
    let local_day = now.with_timezone(&tz).date_naive() - Duration::days(days);
    to_utc_iso(start_of_local_day(tz, local_day))
}

fn iso_at_day_start(instant: DateTime<Utc>, tz: Tz) -> String {
    to_utc_iso(start_of_local_day(tz, instant.with_timezone(&tz).date_naive()))
}

fn iso_at_day_end(instant: DateTime<Utc>, tz: Tz) -> String {
    let day = instant.with_timezone(&tz).date_naive();
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    to_utc_iso(resolve_local(tz, day.and_time(end)))
}
