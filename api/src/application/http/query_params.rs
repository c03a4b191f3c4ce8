/// Fallback recency window when the query omits `days` or sends a
/// non-positive value.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Fallback look-back window for listing consumption logs.
pub const DEFAULT_LOG_WINDOW_DAYS: u32 = 30;

/// Fallback recommendation count when the query omits `limit` or sends a
/// non-positive value.
pub const DEFAULT_LIMIT: usize = 10;

pub fn window_days(raw: Option<i64>) -> u32 {
    window_days_or(raw, DEFAULT_WINDOW_DAYS)
}

pub fn window_days_or(raw: Option<i64>, default: u32) -> u32 {
    match raw {
        Some(days) if days > 0 => u32::try_from(days).unwrap_or(default),
        _ => default,
    }
}

pub fn result_limit(raw: Option<i64>) -> usize {
    match raw {
        Some(limit) if limit > 0 => usize::try_from(limit).unwrap_or(DEFAULT_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_days_defaults_when_missing() {
        assert_eq!(window_days(None), DEFAULT_WINDOW_DAYS);
    }

    #[test]
    fn window_days_defaults_when_non_positive() {
        assert_eq!(window_days(Some(0)), DEFAULT_WINDOW_DAYS);
        assert_eq!(window_days(Some(-3)), DEFAULT_WINDOW_DAYS);
    }

    #[test]
    fn window_days_passes_positive_values() {
        assert_eq!(window_days(Some(14)), 14);
    }

    #[test]
    fn window_days_defaults_when_out_of_range() {
        assert_eq!(
            window_days(Some(i64::from(u32::MAX) + 1)),
            DEFAULT_WINDOW_DAYS
        );
        assert_eq!(window_days(Some(i64::MAX)), DEFAULT_WINDOW_DAYS);
    }

    #[test]
    fn window_days_or_uses_the_given_default() {
        assert_eq!(window_days_or(None, DEFAULT_LOG_WINDOW_DAYS), 30);
        assert_eq!(window_days_or(Some(-1), DEFAULT_LOG_WINDOW_DAYS), 30);
        assert_eq!(window_days_or(Some(14), DEFAULT_LOG_WINDOW_DAYS), 14);
    }

    #[test]
    fn result_limit_defaults_when_missing_or_non_positive() {
        assert_eq!(result_limit(None), DEFAULT_LIMIT);
        assert_eq!(result_limit(Some(0)), DEFAULT_LIMIT);
        assert_eq!(result_limit(Some(-1)), DEFAULT_LIMIT);
    }

    #[test]
    fn result_limit_passes_positive_values() {
        assert_eq!(result_limit(Some(3)), 3);
    }
}
