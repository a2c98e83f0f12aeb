// SPDX-License-Identifier: MPL-2.0
//! Time label formatting.

/// Formats seconds as `MM:SS`. Minutes are not wrapped into hours, so an
/// hour and two minutes reads `62:00`.
///
/// Fractions are truncated and negative values read as zero.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Formats time left until the live edge as `-MM:SS`.
#[must_use]
pub fn format_remaining(seconds: f64) -> String {
    format!("-{}", format_time(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn format_time_truncates_fractions() {
        assert_eq!(format_time(0.5), "00:00");
        assert_eq!(format_time(59.99), "00:59");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "02:05");
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time(3725.0), "62:05");
        assert_eq!(format_time(6000.0), "100:00");
    }

    #[test]
    fn format_time_handles_negative() {
        assert_eq!(format_time(-5.0), "00:00");
    }

    #[test]
    fn remaining_is_prefixed_with_minus() {
        assert_eq!(format_remaining(20.0), "-00:20");
        assert_eq!(format_remaining(0.5), "-00:00");
        assert_eq!(format_remaining(3725.0), "-62:05");
    }
}
