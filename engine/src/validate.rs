//! Submit-time validation of the employee form.
//!
//! Every field is checked on its own; the result holds one message for each
//! failing field and nothing for passing ones. An empty result means the
//! draft can be written.

use crate::{
    config::RosterConfig,
    draft::{Field, FormDraft},
    record::{Department, Gender, Salary, Status},
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Coarse `local@domain.tld` check. Deliberately permissive.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Per-field error messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// Field rules with their configurable thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    min_name_len: usize,
    min_salary: u64,
}

impl Default for Validator {
    fn default() -> Self {
        Self::from_config(&RosterConfig::default())
    }
}

impl Validator {
    pub fn new(min_name_len: usize, min_salary: u64) -> Self {
        Self {
            min_name_len,
            min_salary,
        }
    }

    pub fn from_config(config: &RosterConfig) -> Self {
        Self::new(config.min_name_len, config.min_salary)
    }

    /// Check every field of the draft.
    pub fn validate(&self, draft: &FormDraft) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for (field, label) in [(Field::FirstName, "First name"), (Field::LastName, "Last name")] {
            let value = draft.get(field).trim();
            if value.is_empty() {
                errors.insert(field, format!("{} is required", label));
            } else if value.chars().count() < self.min_name_len {
                errors.insert(
                    field,
                    format!(
                        "{} must be at least {} characters",
                        label, self.min_name_len
                    ),
                );
            }
        }

        if draft.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !EMAIL_REGEX.is_match(&draft.email) {
            errors.insert(Field::Email, "Invalid email format");
        }

        if draft.phone.trim().is_empty() {
            errors.insert(Field::Phone, "Phone number required");
        } else if !PHONE_REGEX.is_match(&draft.phone) {
            errors.insert(Field::Phone, "Phone must be 10 digits");
        }

        if Gender::parse(&draft.gender).is_none() {
            errors.insert(Field::Gender, "Please select gender");
        }

        if Department::parse(&draft.department).is_none() {
            errors.insert(Field::Department, "Select department");
        }

        if draft.designation.trim().is_empty() {
            errors.insert(Field::Designation, "Designation required");
        }

        if let Some(message) = self.check_salary(&draft.salary) {
            errors.insert(Field::Salary, message);
        }

        if draft.joining_date.is_empty() {
            errors.insert(Field::JoiningDate, "Joining date required");
        }

        if draft.image.trim().is_empty() {
            errors.insert(Field::Image, "Image URL required");
        }

        if Status::parse(&draft.status).is_none() {
            errors.insert(Field::Status, "Select status");
        }

        errors
    }

    fn check_salary(&self, salary: &str) -> Option<String> {
        if salary.is_empty() {
            return Some("Salary required".to_string());
        }
        match Salary::parse(salary) {
            None => Some("Salary must be a number".to_string()),
            Some(amount) if !amount.at_least(self.min_salary) => {
                Some(format!("Salary must be at least {}", self.min_salary))
            }
            Some(_) => None,
        }
    }
}

/// Validate with the default thresholds.
pub fn validate(draft: &FormDraft) -> ValidationErrors {
    Validator::default().validate(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> FormDraft {
        FormDraft {
            first_name: "Alice".into(),
            last_name: "Lee".into(),
            email: "a@b.com".into(),
            phone: "1234567890".into(),
            gender: "Female".into(),
            department: "IT".into(),
            designation: "Engineer".into(),
            salary: "5000".into(),
            joining_date: "2024-01-01".into(),
            image: "http://x/y.png".into(),
            status: "Active".into(),
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_fails_every_field() {
        let errors = validate(&FormDraft::new());
        assert_eq!(errors.len(), Field::ALL.len());
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert_eq!(errors.get(Field::Phone), Some("Phone number required"));
        assert_eq!(errors.get(Field::Gender), Some("Please select gender"));
        assert_eq!(errors.get(Field::Salary), Some("Salary required"));
        assert_eq!(errors.get(Field::Status), Some("Select status"));
    }

    #[test]
    fn short_names() {
        let mut draft = valid_draft();
        draft.first_name = "Al".into();
        draft.last_name = "  Li  ".into();

        let errors = validate(&draft);
        assert_eq!(
            errors.get(Field::FirstName),
            Some("First name must be at least 3 characters")
        );
        assert_eq!(
            errors.get(Field::LastName),
            Some("Last name must be at least 3 characters")
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn whitespace_only_is_missing() {
        let mut draft = valid_draft();
        draft.first_name = "   ".into();
        draft.designation = "\t".into();
        draft.image = " ".into();

        let errors = validate(&draft);
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert_eq!(errors.get(Field::Designation), Some("Designation required"));
        assert_eq!(errors.get(Field::Image), Some("Image URL required"));
    }

    #[test]
    fn email_format() {
        for ok in ["a@b.co", "first.last@example.org", "x@y.z.w"] {
            let mut draft = valid_draft();
            draft.email = ok.into();
            assert!(!validate(&draft).contains(Field::Email), "{}", ok);
        }
        for bad in ["plain", "a@b", "@b.com", "a b@c d"] {
            let mut draft = valid_draft();
            draft.email = bad.into();
            assert_eq!(
                validate(&draft).get(Field::Email),
                Some("Invalid email format"),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn phone_must_be_ten_ascii_digits() {
        for bad in ["123456789", "12345678901", "123-456-7890", "+911234567890", "١٢٣٤٥٦٧٨٩٠"] {
            let mut draft = valid_draft();
            draft.phone = bad.into();
            assert_eq!(
                validate(&draft).get(Field::Phone),
                Some("Phone must be 10 digits"),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn salary_rules() {
        let cases = [
            ("abc", "Salary must be a number"),
            ("12.5", "Salary must be a number"),
            ("-2000", "Salary must be a number"),
            ("999", "Salary must be at least 1000"),
            ("500", "Salary must be at least 1000"),
            ("0000999", "Salary must be at least 1000"),
        ];
        for (salary, message) in cases {
            let mut draft = valid_draft();
            draft.salary = salary.into();
            assert_eq!(validate(&draft).get(Field::Salary), Some(message), "{}", salary);
        }

        for ok in ["1000", "0001000", "18446744073709551616", "99999999999999999999999"] {
            let mut draft = valid_draft();
            draft.salary = ok.into();
            assert!(validate(&draft).is_empty(), "{}", ok);
        }
    }

    #[test]
    fn joining_date_is_a_presence_check() {
        let mut draft = valid_draft();
        draft.joining_date = String::new();
        assert_eq!(
            validate(&draft).get(Field::JoiningDate),
            Some("Joining date required")
        );

        draft.joining_date = " ".into();
        assert!(!validate(&draft).contains(Field::JoiningDate));
    }

    #[test]
    fn enum_fields_reject_unknown_options() {
        let mut draft = valid_draft();
        draft.gender = "Other".into();
        draft.department = "Sales".into();
        draft.status = "active".into();

        let errors = validate(&draft);
        assert_eq!(errors.get(Field::Gender), Some("Please select gender"));
        assert_eq!(errors.get(Field::Department), Some("Select department"));
        assert_eq!(errors.get(Field::Status), Some("Select status"));
    }

    #[test]
    fn thresholds_follow_config() {
        let validator = Validator::new(2, 200);
        let mut draft = valid_draft();
        draft.first_name = "Al".into();
        draft.salary = "150".into();

        let errors = validator.validate(&draft);
        assert!(!errors.contains(Field::FirstName));
        assert_eq!(errors.get(Field::Salary), Some("Salary must be at least 200"));
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let mut draft = valid_draft();
        draft.first_name = "Al".into();
        let json = serde_json::to_value(validate(&draft)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"firstName": "First name must be at least 3 characters"})
        );
    }
}
