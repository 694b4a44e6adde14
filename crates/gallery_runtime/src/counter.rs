//! "Together since" counter shown in the hero section.

use chrono::{DateTime, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CounterUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReading {
    pub value: u64,
    pub unit: CounterUnit,
}

impl CounterReading {
    /// Elapsed time since midnight UTC of `start`, in the largest non-zero unit.
    pub fn since(start: NaiveDate, now_unix_ms: u64) -> Self {
        let start_ms = start
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis())
            .unwrap_or_default();
        let now_ms = i64::try_from(now_unix_ms).unwrap_or(i64::MAX);
        let elapsed_ms = u64::try_from(now_ms.saturating_sub(start_ms)).unwrap_or(0);

        let seconds = elapsed_ms / 1_000;
        let minutes = seconds / 60;
        let hours = minutes / 60;
        let days = hours / 24;
        if days > 0 {
            Self { value: days, unit: CounterUnit::Days }
        } else if hours > 0 {
            Self { value: hours, unit: CounterUnit::Hours }
        } else if minutes > 0 {
            Self { value: minutes, unit: CounterUnit::Minutes }
        } else {
            Self { value: seconds, unit: CounterUnit::Seconds }
        }
    }

    pub fn display_value(self) -> String {
        group_thousands(self.value)
    }
}

/// UTC calendar date containing `now_unix_ms`.
pub fn utc_date(now_unix_ms: u64) -> NaiveDate {
    let millis = i64::try_from(now_unix_ms).unwrap_or(i64::MAX);
    DateTime::from_timestamp_millis(millis)
        .map(|instant| instant.date_naive())
        .unwrap_or_default()
}

/// Formats with `,` every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const START_MS: u64 = 1_672_531_200_000; // 2023-01-01T00:00:00Z

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).expect("date")
    }

    #[test]
    fn picks_largest_non_zero_unit() {
        assert_eq!(
            CounterReading::since(start(), START_MS + 42_000),
            CounterReading { value: 42, unit: CounterUnit::Seconds }
        );
        assert_eq!(
            CounterReading::since(start(), START_MS + 3 * 60_000 + 5_000),
            CounterReading { value: 3, unit: CounterUnit::Minutes }
        );
        assert_eq!(
            CounterReading::since(start(), START_MS + 5 * 3_600_000),
            CounterReading { value: 5, unit: CounterUnit::Hours }
        );
        assert_eq!(
            CounterReading::since(start(), START_MS + 400 * 86_400_000),
            CounterReading { value: 400, unit: CounterUnit::Days }
        );
    }

    #[test]
    fn clock_before_start_reads_zero_seconds() {
        assert_eq!(
            CounterReading::since(start(), START_MS - 10_000),
            CounterReading { value: 0, unit: CounterUnit::Seconds }
        );
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn utc_date_rolls_over_at_midnight() {
        assert_eq!(utc_date(START_MS), start());
        assert_eq!(utc_date(START_MS - 1), NaiveDate::from_ymd_opt(2022, 12, 31).expect("date"));
    }
}
