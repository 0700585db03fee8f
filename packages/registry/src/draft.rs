use chrono::NaiveDate;

use crate::age::age_in_years;
use crate::models::{parse_input_date, Person};

/// The four free-text fields of the registration form.
///
/// The birth date is not a `Field`: editing it goes through
/// [`Draft::set_birth_date`] so the derived age is recomputed in the same
/// step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    GivenName,
    FamilyName,
    Phone,
    Email,
}

/// In-progress form state: the editable fields plus the display-only age
/// derived from the birth date.
///
/// Values are kept exactly as typed. Nothing is validated; empty strings and
/// malformed emails or phone numbers pass through [`Draft::submit`] silently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub given_name: String,
    pub family_name: String,
    pub phone: String,
    pub email: String,
    /// Raw date-input value, `%Y-%m-%d` or empty.
    pub birth_date: String,
    derived_age: Option<i32>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a single text field, leaving every other field untouched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::GivenName => self.given_name = value,
            Field::FamilyName => self.family_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
        }
    }

    /// Store a new birth-date input value and recompute the derived age.
    ///
    /// `today` is whatever date the caller considers current. Empty or
    /// unparseable input reverts the derived age to unset rather than zero.
    pub fn set_birth_date(&mut self, value: impl Into<String>, today: NaiveDate) {
        self.birth_date = value.into();
        self.derived_age = parse_input_date(&self.birth_date).map(|birth| age_in_years(birth, today));
    }

    /// The age shown next to the form before submission, if a valid birth
    /// date has been entered.
    pub fn derived_age(&self) -> Option<i32> {
        self.derived_age
    }

    /// Finalize the draft into a [`Person`] and reset every field.
    ///
    /// The record takes the last derived age, defaulting to 0 when no valid
    /// birth date was entered. Appending the record to a roster is the
    /// caller's concern.
    pub fn submit(&mut self) -> Person {
        let birth_date = parse_input_date(&self.birth_date);
        self.birth_date.clear();
        Person {
            given_name: std::mem::take(&mut self.given_name),
            family_name: std::mem::take(&mut self.family_name),
            phone: std::mem::take(&mut self.phone),
            email: std::mem::take(&mut self.email),
            birth_date,
            age: self.derived_age.take().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_set_field_touches_only_one_field() {
        let mut draft = Draft::new();
        draft.set_field(Field::GivenName, "Ada");
        draft.set_field(Field::Email, "ada@example.com");

        assert_eq!(draft.given_name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.family_name, "");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.birth_date, "");
        assert_eq!(draft.derived_age(), None);
    }

    #[test]
    fn test_birth_date_change_recomputes_age() {
        let mut draft = Draft::new();
        let today = date(2024, 6, 15);

        draft.set_birth_date("2000-06-15", today);
        assert_eq!(draft.derived_age(), Some(24));

        draft.set_birth_date("2000-06-16", today);
        assert_eq!(draft.derived_age(), Some(23));
    }

    #[test]
    fn test_empty_birth_date_reverts_to_unset() {
        let mut draft = Draft::new();
        let today = date(2024, 6, 15);

        draft.set_birth_date("2000-06-15", today);
        assert_eq!(draft.derived_age(), Some(24));

        draft.set_birth_date("", today);
        assert_eq!(draft.derived_age(), None);
        assert_eq!(draft.birth_date, "");
    }

    #[test]
    fn test_malformed_birth_date_reverts_to_unset() {
        let mut draft = Draft::new();
        let today = date(2024, 6, 15);

        draft.set_birth_date("2000-06-15", today);
        draft.set_birth_date("yesterday", today);

        assert_eq!(draft.derived_age(), None);
        assert_eq!(draft.birth_date, "yesterday");
    }

    #[test]
    fn test_future_birth_date_derives_negative_age() {
        let mut draft = Draft::new();
        draft.set_birth_date("2030-01-01", date(2024, 6, 15));
        assert_eq!(draft.derived_age(), Some(-6));
    }

    #[test]
    fn test_submit_builds_person_and_resets() {
        let mut draft = Draft::new();
        draft.set_field(Field::GivenName, "Ada");
        draft.set_field(Field::FamilyName, "Lovelace");
        draft.set_field(Field::Phone, "555-0100");
        draft.set_field(Field::Email, "ada@example.com");
        draft.set_birth_date("2000-06-15", date(2024, 6, 15));

        let person = draft.submit();

        assert_eq!(person.given_name, "Ada");
        assert_eq!(person.family_name, "Lovelace");
        assert_eq!(person.phone, "555-0100");
        assert_eq!(person.email, "ada@example.com");
        assert_eq!(person.birth_date, NaiveDate::from_ymd_opt(2000, 6, 15));
        assert_eq!(person.age, 24);

        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn test_submit_without_birth_date_defaults_age_zero() {
        let mut draft = Draft::new();
        draft.set_field(Field::GivenName, "Ada");

        let person = draft.submit();

        assert_eq!(person.birth_date, None);
        assert_eq!(person.age, 0);
    }

    #[test]
    fn test_submit_accepts_empty_fields() {
        let mut draft = Draft::new();
        let person = draft.submit();

        assert_eq!(person.given_name, "");
        assert_eq!(person.email, "");
        assert_eq!(person.age, 0);
    }
}
