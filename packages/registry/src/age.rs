use chrono::{Datelike, NaiveDate};

/// Whole years elapsed between `birth` and `on`.
///
/// Year difference, minus one when `on`'s month/day falls before `birth`'s
/// month/day, so the year only counts once the anniversary has passed. The
/// current date is an explicit parameter; callers decide what "today" means.
///
/// A `birth` after `on` yields a negative number. That is left to the caller:
/// the registration form accepts future birth dates and displays the result
/// as-is.
pub fn age_in_years(birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_before_anniversary() {
        assert_eq!(age_in_years(date(2000, 6, 15), date(2024, 6, 14)), 23);
    }

    #[test]
    fn test_on_anniversary() {
        assert_eq!(age_in_years(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_after_anniversary() {
        assert_eq!(age_in_years(date(2000, 6, 15), date(2024, 11, 2)), 24);
    }

    #[test]
    fn test_earlier_month_decrements() {
        assert_eq!(age_in_years(date(2000, 6, 15), date(2024, 5, 20)), 23);
    }

    #[test]
    fn test_same_day_is_zero() {
        let today = date(2024, 3, 1);
        assert_eq!(age_in_years(today, today), 0);
    }

    #[test]
    fn test_future_birth_date_is_negative() {
        assert_eq!(age_in_years(date(2030, 1, 1), date(2024, 6, 15)), -6);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2004, 2, 29);
        // In a non-leap year the anniversary has not passed on Feb 28.
        assert_eq!(age_in_years(birth, date(2023, 2, 28)), 18);
        assert_eq!(age_in_years(birth, date(2023, 3, 1)), 19);
        // In a leap year it lands exactly on Feb 29.
        assert_eq!(age_in_years(birth, date(2024, 2, 29)), 20);
    }
}
