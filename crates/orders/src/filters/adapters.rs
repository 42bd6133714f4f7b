//! Conversions between the three filter representations.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use regex::Regex;
use tracing::debug;
use url::form_urlencoded;

use super::time::sdk_filter_time;
use super::{
    ArchivedFilter, FILTRABLE_FULFILLMENT_STATUS, FILTRABLE_PAYMENT_STATUS, FILTRABLE_STATUS,
    FilterFormValues, MetricsFilter, MetricsInSet, SdkFilter, TimeRangePreset, default_status_in,
};

/// Strict ISO-8601 UTC pattern accepted in query strings. Anything else is
/// dropped rather than parsed loosely.
static ISO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,3})?Z$").expect("Invalid regex")
});

fn iso_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert form values into a URL query string.
///
/// Keys come out in alphabetical order with multi-valued fields repeated per
/// key and empty/absent fields omitted, so identical selections always yield
/// byte-identical strings. Other parts of the app rely on this for
/// bookmarkable and shareable links.
#[must_use]
pub fn from_form_values_to_url_query(form: &FilterFormValues) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());

    // Alphabetical key order.
    if let Some(archived) = form.archived {
        qs.append_pair("archived", archived.as_str());
    }
    for value in &form.fulfillment_status {
        qs.append_pair("fulfillmentStatus", value.as_str());
    }
    for market in &form.market {
        if !market.is_empty() {
            qs.append_pair("market", market);
        }
    }
    for value in &form.payment_status {
        qs.append_pair("paymentStatus", value.as_str());
    }
    for value in &form.status {
        qs.append_pair("status", value.as_str());
    }
    if let Some(text) = form.text.as_deref()
        && !text.is_empty()
    {
        qs.append_pair("text", text);
    }
    if let Some(time_from) = form.time_from {
        qs.append_pair("timeFrom", &iso_millis(time_from));
    }
    if let Some(preset) = form.time_preset {
        qs.append_pair("timePreset", preset.as_str());
    }
    if let Some(time_to) = form.time_to {
        qs.append_pair("timeTo", &iso_millis(time_to));
    }

    qs.finish()
}

/// Parse a raw query-string value into one of the accepted enum values.
/// Unknown or invalid values are dropped, not defaulted: a bad value does
/// not invalidate the rest of the query.
fn push_accepted<T>(target: &mut Vec<T>, raw: &str, accepted: &[T], field: &'static str)
where
    T: FromStr + PartialEq + Copy,
{
    if raw.is_empty() {
        return;
    }
    match raw.parse::<T>() {
        Ok(value) if accepted.contains(&value) => target.push(value),
        _ => debug!(field, value = raw, "dropping unrecognized filter value"),
    }
}

fn parse_strict_iso(raw: &str) -> Option<DateTime<Utc>> {
    if !ISO_DATE_RE.is_match(raw) {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a URL query string into form values.
///
/// The result is always a complete record: array fields are present
/// (possibly empty) and optional fields are `None` when absent. Malformed
/// values never fail the parse; they are dropped.
#[must_use]
pub fn from_url_query_to_form_values(qs: &str) -> FilterFormValues {
    let qs = qs.strip_prefix('?').unwrap_or(qs);
    let mut form = FilterFormValues::default();

    for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
        match key.as_ref() {
            "market" => {
                if !value.is_empty() {
                    form.market.push(value.into_owned());
                }
            }
            "status" => push_accepted(&mut form.status, &value, &FILTRABLE_STATUS, "status"),
            "paymentStatus" => push_accepted(
                &mut form.payment_status,
                &value,
                &FILTRABLE_PAYMENT_STATUS,
                "paymentStatus",
            ),
            "fulfillmentStatus" => push_accepted(
                &mut form.fulfillment_status,
                &value,
                &FILTRABLE_FULFILLMENT_STATUS,
                "fulfillmentStatus",
            ),
            "archived" => {
                if form.archived.is_none() {
                    match value.parse::<ArchivedFilter>() {
                        Ok(archived) => form.archived = Some(archived),
                        Err(_) => {
                            debug!(value = %value, "dropping unrecognized archived filter");
                        }
                    }
                }
            }
            "timePreset" => {
                if form.time_preset.is_none() {
                    match value.parse::<TimeRangePreset>() {
                        Ok(preset) => form.time_preset = Some(preset),
                        Err(_) => debug!(value = %value, "dropping unrecognized time preset"),
                    }
                }
            }
            "timeFrom" => {
                if form.time_from.is_none() {
                    form.time_from = parse_strict_iso(&value);
                }
            }
            "timeTo" => {
                if form.time_to.is_none() {
                    form.time_to = parse_strict_iso(&value);
                }
            }
            "text" => {
                if form.text.is_none() && !value.is_empty() {
                    form.text = Some(value.into_owned());
                }
            }
            other => debug!(key = other, "ignoring unknown filter key"),
        }
    }

    form
}

fn join_nonempty<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let kept: Vec<&str> = values.into_iter().filter(|v| !v.is_empty()).collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(","))
    }
}

/// Convert form values into the backend query object, anchoring relative
/// time presets to an explicit `now`.
///
/// The output always carries a non-empty `status_in`: when the selection has
/// no explicit status filter, the default active set is substituted. This is
/// a business rule (never accidentally list draft or pending orders), not
/// error recovery.
#[must_use]
pub fn from_form_values_to_sdk_at(
    form: &FilterFormValues,
    timezone: Option<Tz>,
    now: DateTime<Utc>,
) -> SdkFilter {
    let time = sdk_filter_time(form.time_preset, form.time_from, form.time_to, timezone, now);

    SdkFilter {
        market_id_in: join_nonempty(form.market.iter().map(String::as_str)),
        status_in: join_nonempty(form.status.iter().map(|s| s.as_str()))
            .unwrap_or_else(default_status_in),
        payment_status_in: join_nonempty(form.payment_status.iter().map(|s| s.as_str())),
        fulfillment_status_in: join_nonempty(form.fulfillment_status.iter().map(|s| s.as_str())),
        archived_at_null: match form.archived {
            // "show" means: don't filter by archive state at all
            Some(ArchivedFilter::Show) => None,
            Some(ArchivedFilter::Only) => Some(false),
            Some(ArchivedFilter::Hide) | None => Some(true),
        },
        updated_at_gteq: time.updated_at_gteq,
        updated_at_lteq: time.updated_at_lteq,
        text_cont: form
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToOwned::to_owned),
    }
}

/// Convert form values into the backend query object, anchored to the
/// current wall clock.
#[must_use]
pub fn from_form_values_to_sdk(form: &FilterFormValues, timezone: Option<Tz>) -> SdkFilter {
    from_form_values_to_sdk_at(form, timezone, Utc::now())
}

/// Convert a URL query string into the backend query object, anchoring
/// relative time presets to an explicit `now`.
#[must_use]
pub fn from_url_query_to_sdk_at(qs: &str, timezone: Option<Tz>, now: DateTime<Utc>) -> SdkFilter {
    from_form_values_to_sdk_at(&from_url_query_to_form_values(qs), timezone, now)
}

/// Convert a URL query string into the backend query object.
#[must_use]
pub fn from_url_query_to_sdk(qs: &str, timezone: Option<Tz>) -> SdkFilter {
    from_form_values_to_sdk(&from_url_query_to_form_values(qs), timezone)
}

/// Re-serialize a query string keeping only valid form values.
///
/// The output is canonical (sorted, pruned) and a fixed point: applying this
/// to its own output returns it unchanged.
#[must_use]
pub fn from_url_query_to_url_query(qs: &str) -> String {
    from_form_values_to_url_query(&from_url_query_to_form_values(qs))
}

/// Convert form values into the metrics API filter object.
///
/// Partial adapter: the metrics backend only understands the three status
/// dimensions; everything else in the selection is ignored.
#[must_use]
pub fn from_form_values_to_metrics_api(form: &FilterFormValues) -> MetricsFilter {
    fn in_set<T: Copy>(values: &[T], as_str: fn(T) -> &'static str) -> Option<MetricsInSet> {
        if values.is_empty() {
            None
        } else {
            Some(MetricsInSet {
                r#in: values.iter().map(|v| as_str(*v).to_owned()).collect(),
            })
        }
    }

    MetricsFilter {
        statuses: in_set(&form.status, order_desk_core::OrderStatus::as_str),
        payment_statuses: in_set(&form.payment_status, order_desk_core::PaymentStatus::as_str),
        fulfillment_statuses: in_set(
            &form.fulfillment_status,
            order_desk_core::FulfillmentStatus::as_str,
        ),
    }
}

/// Count the number of active filter groups in a selection.
///
/// Groups, not values: a market multi-select with 3 values counts as 1.
/// `time_from`/`time_to` are never counted on their own (the preset is the
/// group); `text` counts only when `include_text` is set. Used for the
/// filter badge in the UI.
#[must_use]
pub fn active_filter_group_count(form: &FilterFormValues, include_text: bool) -> usize {
    let mut count = 0;
    count += usize::from(!form.market.is_empty());
    count += usize::from(!form.status.is_empty());
    count += usize::from(!form.payment_status.is_empty());
    count += usize::from(!form.fulfillment_status.is_empty());
    count += usize::from(form.archived.is_some());
    count += usize::from(form.time_preset.is_some());
    if include_text {
        count += usize::from(form.text.as_deref().is_some_and(|t| !t.is_empty()));
    }
    count
}

/// Build the label for a filter field button.
///
/// Shows the selected count when something is selected, otherwise just the
/// total of available options.
///
/// # Examples
///
/// `"Markets · 2 of 4"`, `"Markets · 4"`
#[must_use]
pub fn compute_filter_label(label: &str, total_count: usize, selected_count: usize) -> String {
    if selected_count > 0 {
        format!("{label} · {selected_count} of {total_count}")
    } else {
        format!("{label} · {total_count}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use order_desk_core::{FulfillmentStatus, OrderStatus, PaymentStatus};
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 5, 15, 20, 0).unwrap()
    }

    #[test]
    fn test_form_values_to_url_query_sorted() {
        let form = FilterFormValues {
            status: vec![OrderStatus::Cancelled],
            market: vec!["dFDdasdgAN".to_owned(), "KToVGDooQp".to_owned()],
            ..FilterFormValues::default()
        };
        assert_eq!(
            from_form_values_to_url_query(&form),
            "market=dFDdasdgAN&market=KToVGDooQp&status=cancelled"
        );
    }

    #[test]
    fn test_form_values_to_url_query_empty() {
        assert_eq!(
            from_form_values_to_url_query(&FilterFormValues::default()),
            ""
        );
    }

    #[test]
    fn test_form_values_to_url_query_is_deterministic() {
        let form = FilterFormValues {
            market: vec!["abc123".to_owned()],
            payment_status: vec![PaymentStatus::Authorized, PaymentStatus::Paid],
            archived: Some(ArchivedFilter::Only),
            time_preset: Some(TimeRangePreset::Last30Days),
            text: Some("jane".to_owned()),
            ..FilterFormValues::default()
        };
        let first = from_form_values_to_url_query(&form);
        assert_eq!(
            first,
            "archived=only&market=abc123&paymentStatus=authorized&paymentStatus=paid&text=jane&timePreset=last30days"
        );
        assert_eq!(from_form_values_to_url_query(&form), first);
    }

    #[test]
    fn test_url_query_to_form_values() {
        let form =
            from_url_query_to_form_values("market=dFDdasdgAN&market=KToVGDooQp&status=cancelled");
        assert_eq!(
            form,
            FilterFormValues {
                market: vec!["dFDdasdgAN".to_owned(), "KToVGDooQp".to_owned()],
                status: vec![OrderStatus::Cancelled],
                ..FilterFormValues::default()
            }
        );
    }

    #[test]
    fn test_url_query_to_form_values_empty() {
        let form = from_url_query_to_form_values("");
        assert_eq!(form, FilterFormValues::default());
        assert!(form.market.is_empty());
        assert!(form.time_preset.is_none());
        assert!(form.text.is_none());
    }

    #[test]
    fn test_url_query_to_form_values_drops_invalid_values() {
        let form =
            from_url_query_to_form_values("paymentStatus=invalid-value&status=draft&status=placed");
        assert_eq!(
            form,
            FilterFormValues {
                status: vec![OrderStatus::Placed],
                ..FilterFormValues::default()
            }
        );
    }

    #[test]
    fn test_url_query_to_form_values_skips_empty_values() {
        let form = from_url_query_to_form_values("market=&status=approved");
        assert_eq!(
            form,
            FilterFormValues {
                status: vec![OrderStatus::Approved],
                ..FilterFormValues::default()
            }
        );
    }

    #[test]
    fn test_url_query_to_form_values_accepts_leading_question_mark() {
        let form = from_url_query_to_form_values("?status=approved");
        assert_eq!(form.status, vec![OrderStatus::Approved]);
    }

    #[test]
    fn test_url_query_to_form_values_strict_dates() {
        let form = from_url_query_to_form_values(
            "timeFrom=2023-02-01T10%3A31%3A12.000Z&timePreset=custom&timeTo=not-a-date",
        );
        assert_eq!(
            form.time_from,
            Some(Utc.with_ymd_and_hms(2023, 2, 1, 10, 31, 12).unwrap())
        );
        assert_eq!(form.time_to, None);
        assert_eq!(form.time_preset, Some(TimeRangePreset::Custom));

        // date without the trailing Z is rejected
        let form = from_url_query_to_form_values("timeFrom=2023-02-01T10%3A31%3A12");
        assert_eq!(form.time_from, None);
    }

    #[test]
    fn test_form_values_to_sdk() {
        let form = FilterFormValues {
            market: vec!["dFDdasdgAN".to_owned(), "KToVGDooQp".to_owned()],
            status: vec![OrderStatus::Cancelled],
            payment_status: vec![PaymentStatus::Paid, PaymentStatus::Refunded],
            fulfillment_status: vec![FulfillmentStatus::Fulfilled],
            ..FilterFormValues::default()
        };
        let sdk = from_form_values_to_sdk_at(&form, None, fixed_now());
        assert_eq!(sdk.market_id_in.as_deref(), Some("dFDdasdgAN,KToVGDooQp"));
        assert_eq!(sdk.status_in, "cancelled");
        assert_eq!(sdk.payment_status_in.as_deref(), Some("paid,refunded"));
        assert_eq!(sdk.fulfillment_status_in.as_deref(), Some("fulfilled"));
        assert_eq!(sdk.archived_at_null, Some(true));
        assert_eq!(sdk.updated_at_gteq, None);
        assert_eq!(sdk.updated_at_lteq, None);
    }

    #[test]
    fn test_form_values_to_sdk_enforces_default_status() {
        let sdk = from_form_values_to_sdk_at(&FilterFormValues::default(), None, fixed_now());
        assert_eq!(sdk.status_in, "placed,approved,cancelled");
    }

    #[test]
    fn test_form_values_to_sdk_archived_mapping() {
        let only = FilterFormValues {
            archived: Some(ArchivedFilter::Only),
            ..FilterFormValues::default()
        };
        assert_eq!(
            from_form_values_to_sdk_at(&only, None, fixed_now()).archived_at_null,
            Some(false)
        );

        let show = FilterFormValues {
            archived: Some(ArchivedFilter::Show),
            ..FilterFormValues::default()
        };
        assert_eq!(
            from_form_values_to_sdk_at(&show, None, fixed_now()).archived_at_null,
            None
        );
    }

    #[test]
    fn test_form_values_to_sdk_whitespace_text_is_absent() {
        let form = FilterFormValues {
            text: Some("   ".to_owned()),
            ..FilterFormValues::default()
        };
        let sdk = from_form_values_to_sdk_at(&form, None, fixed_now());
        assert_eq!(sdk.text_cont, None);

        let form = FilterFormValues {
            text: Some("  jane@example.com ".to_owned()),
            ..FilterFormValues::default()
        };
        let sdk = from_form_values_to_sdk_at(&form, None, fixed_now());
        assert_eq!(sdk.text_cont.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_url_query_to_sdk_default_status_preset() {
        let sdk = from_url_query_to_sdk_at("paymentStatus=authorized", None, fixed_now());
        assert_eq!(
            serde_json::to_value(&sdk).unwrap(),
            json!({
                "status_in": "placed,approved,cancelled",
                "payment_status_in": "authorized",
                "archived_at_null": true,
            })
        );
    }

    #[test]
    fn test_url_query_to_sdk_ignores_invalid_values() {
        let sdk = from_url_query_to_sdk_at(
            "status=approved&paymentStatus=not-existing&status=draft",
            None,
            fixed_now(),
        );
        assert_eq!(sdk.status_in, "approved");
        assert_eq!(sdk.payment_status_in, None);
    }

    #[test]
    fn test_url_query_to_url_query_is_canonical() {
        assert_eq!(
            from_url_query_to_url_query("market=abc123&status=approved&status=cancelled"),
            "market=abc123&status=approved&status=cancelled"
        );

        // re-sorts keys alphabetically
        assert_eq!(
            from_url_query_to_url_query("status=approved&market=abc123&status=cancelled"),
            "market=abc123&status=approved&status=cancelled"
        );

        // cleans up empty and invalid values
        assert_eq!(
            from_url_query_to_url_query("market=&status=approved&status=cancelled"),
            "status=approved&status=cancelled"
        );
        assert_eq!(
            from_url_query_to_url_query("status=approved&paymentStatus=not-existing&status=draft"),
            "status=approved"
        );
    }

    #[test]
    fn test_url_query_to_url_query_is_idempotent() {
        let once = from_url_query_to_url_query(
            "timePreset=last7days&status=cancelled&market=abc&archived=only&text=hi",
        );
        assert_eq!(from_url_query_to_url_query(&once), once);
    }

    #[test]
    fn test_form_values_to_metrics_api() {
        let form = FilterFormValues {
            status: vec![OrderStatus::Placed, OrderStatus::Approved],
            fulfillment_status: vec![FulfillmentStatus::InProgress],
            ..FilterFormValues::default()
        };
        assert_eq!(
            serde_json::to_value(from_form_values_to_metrics_api(&form)).unwrap(),
            json!({
                "statuses": { "in": ["placed", "approved"] },
                "fulfillment_statuses": { "in": ["in_progress"] },
            })
        );
    }

    #[test]
    fn test_active_filter_group_count_counts_groups_not_values() {
        let form = FilterFormValues {
            market: vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            ..FilterFormValues::default()
        };
        assert_eq!(active_filter_group_count(&form, false), 1);

        let form = FilterFormValues {
            market: vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            status: vec![OrderStatus::Placed],
            ..FilterFormValues::default()
        };
        assert_eq!(active_filter_group_count(&form, false), 2);
    }

    #[test]
    fn test_active_filter_group_count_text_only_when_included() {
        let form = FilterFormValues {
            text: Some("jane".to_owned()),
            time_preset: Some(TimeRangePreset::Today),
            ..FilterFormValues::default()
        };
        assert_eq!(active_filter_group_count(&form, false), 1);
        assert_eq!(active_filter_group_count(&form, true), 2);
    }

    #[test]
    fn test_compute_filter_label() {
        assert_eq!(compute_filter_label("Markets", 4, 0), "Markets · 4");
        assert_eq!(
            compute_filter_label("Payment status", 6, 2),
            "Payment status · 2 of 6"
        );
    }
}
