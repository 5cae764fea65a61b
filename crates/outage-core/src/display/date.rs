//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a civil [`Date`] that adds the weekday to the ISO
/// form (`Mon 2025-03-10`), the format used across step listings where
/// the day of week matters for planning.
pub struct DayDate(pub Date);

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_day_date_format() {
        assert_eq!(format!("{}", DayDate(date(2025, 3, 10))), "Mon 2025-03-10");
        assert_eq!(format!("{}", DayDate(date(2025, 3, 15))), "Sat 2025-03-15");
    }
}
