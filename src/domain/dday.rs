//! D-Day countdown labels for list views.

use chrono::NaiveDate;

/// Formats the countdown label for an event's target date.
///
/// A future date `n` days out renders as `D-n`, today renders as `D-Day`,
/// and a date `n` days in the past renders as `D+n`.
#[must_use]
pub fn d_day_label(target: NaiveDate, today: NaiveDate) -> String {
    let days = (target - today).num_days();
    match days {
        0 => "D-Day".to_string(),
        d if d > 0 => format!("D-{d}"),
        d => format!("D+{}", -d),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap_or_default()
    }

    #[test]
    fn today_is_d_day() {
        assert_eq!(d_day_label(day(27), day(27)), "D-Day");
    }

    #[test]
    fn three_days_out_is_d_minus_3() {
        assert_eq!(d_day_label(day(30), day(27)), "D-3");
    }

    #[test]
    fn two_days_past_is_d_plus_2() {
        assert_eq!(d_day_label(day(25), day(27)), "D+2");
    }

    #[test]
    fn crosses_month_boundaries() {
        let target = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap_or_default();
        assert_eq!(d_day_label(target, day(27)), "D-5");
    }
}
