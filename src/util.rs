/// Number of decimal digits needed to print `n` (at least 1).
pub fn decimal_width(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Format a 1-based step against its total, zero-padding the step to the
/// width of the total (e.g., "007/100").
pub fn format_progress(step: u64, count: u64) -> String {
    let width = decimal_width(count);
    format!("{step:0width$}/{count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_width_boundaries() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(99), 2);
        assert_eq!(decimal_width(100), 3);
        assert_eq!(decimal_width(u64::MAX), 20);
    }

    #[test]
    fn pads_to_count_width() {
        assert_eq!(format_progress(1, 100), "001/100");
        assert_eq!(format_progress(42, 100), "042/100");
        assert_eq!(format_progress(100, 100), "100/100");
    }

    #[test]
    fn single_digit_count_is_unpadded() {
        assert_eq!(format_progress(1, 5), "1/5");
        assert_eq!(format_progress(5, 5), "5/5");
    }

    #[test]
    fn ten_pads_to_two() {
        assert_eq!(format_progress(3, 10), "03/10");
    }
}
