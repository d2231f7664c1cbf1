//! Field validation for contact input
//!
//! A single pure function [`validate`] maps a raw JSON body to either the
//! normalized [`ContactFields`] or a field → messages error map. Rules are
//! enumerated in one table and evaluated independently per field, so a body
//! failing on several fields reports all of them at once.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::core::contact::{BIRTHDAY_FORMAT, ContactFields};

/// Field name → human-readable error messages, in field order.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

type Rule = fn(&str, &Value) -> Result<(), String>;

/// The whole rule set, one row per accepted field.
static RULES: &[(&str, &[Rule])] = &[
    ("name", &[required]),
    ("email", &[required, email]),
    ("birthday", &[required, birthday]),
    ("company", &[required]),
];

/// Validate a raw request body against the contact rule set.
///
/// All four fields are required on create and update alike; there is no
/// partial acceptance. Any failing field voids the whole operation.
pub fn validate(input: &Value) -> Result<ContactFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    for &(field, rules) in RULES {
        let value = input.get(field).unwrap_or(&Value::Null);
        for rule in rules {
            if let Err(message) = rule(field, value) {
                errors.entry(field.to_string()).or_default().push(message);
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Every rule passed, so the extractions below cannot miss.
    Ok(ContactFields {
        name: str_field(input, "name").to_string(),
        email: str_field(input, "email").to_string(),
        birthday: NaiveDate::parse_from_str(str_field(input, "birthday"), BIRTHDAY_FORMAT)
            .unwrap_or_default(),
        company: str_field(input, "company").to_string(),
    })
}

fn str_field<'a>(input: &'a Value, field: &str) -> &'a str {
    input.get(field).and_then(Value::as_str).unwrap_or_default()
}

/// Rule: field must be a non-empty string.
fn required(field: &str, value: &Value) -> Result<(), String> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(format!("The {} field is required.", field)),
        None if value.is_null() => Err(format!("The {} field is required.", field)),
        None => Err(format!("The {} must be a string.", field)),
    }
}

/// Rule: non-empty strings must match the email grammar.
fn email(field: &str, value: &Value) -> Result<(), String> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() && !is_valid_email(s) => {
            Err(format!("The {} must be a valid email address.", field))
        }
        _ => Ok(()),
    }
}

/// Rule: non-empty strings must parse as an `MM/DD/YYYY` calendar date.
fn birthday(field: &str, value: &Value) -> Result<(), String> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => {
            match NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT) {
                Ok(_) => Ok(()),
                Err(_) => Err(format!(
                    "The {} does not match the format MM/DD/YYYY.",
                    field
                )),
            }
        }
        _ => Ok(()),
    }
}

fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    });
    regex.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "Test Name",
            "email": "test@mail.com",
            "birthday": "02/14/1995",
            "company": "ABC string"
        })
    }

    #[test]
    fn test_valid_body_normalizes() {
        let fields = validate(&valid_body()).expect("body should validate");
        assert_eq!(fields.name, "Test Name");
        assert_eq!(fields.email, "test@mail.com");
        assert_eq!(
            fields.birthday,
            NaiveDate::from_ymd_opt(1995, 2, 14).unwrap()
        );
        assert_eq!(fields.company, "ABC string");
    }

    #[test]
    fn test_each_field_is_required() {
        for field in ["name", "email", "birthday", "company"] {
            let mut body = valid_body();
            body[field] = json!("");

            let errors = validate(&body).expect_err("empty field should fail");
            assert_eq!(errors.len(), 1, "only {} should fail", field);
            assert_eq!(
                errors[field],
                vec![format!("The {} field is required.", field)]
            );
        }
    }

    #[test]
    fn test_missing_field_reports_required() {
        let errors = validate(&json!({ "name": "Test Name" })).expect_err("should fail");
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("birthday"));
        assert!(errors.contains_key("company"));
        assert!(!errors.contains_key("name"));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut body = valid_body();
        body["name"] = json!("   ");
        let errors = validate(&body).expect_err("should fail");
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut body = valid_body();
        body["email"] = json!("Not an email");
        let errors = validate(&body).expect_err("should fail");
        assert_eq!(errors["email"], vec!["The email must be a valid email address."]);
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("test@mail.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_unparsable_birthday_is_rejected() {
        let mut body = valid_body();
        body["birthday"] = json!("1995-02-14");
        let errors = validate(&body).expect_err("should fail");
        assert_eq!(
            errors["birthday"],
            vec!["The birthday does not match the format MM/DD/YYYY."]
        );
    }

    #[test]
    fn test_failures_are_collected_not_short_circuited() {
        let body = json!({
            "name": "",
            "email": "nope",
            "birthday": "02/14/1995",
            "company": ""
        });
        let errors = validate(&body).expect_err("should fail");
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("company"));
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let mut body = valid_body();
        body["name"] = json!(42);
        let errors = validate(&body).expect_err("should fail");
        assert_eq!(errors["name"], vec!["The name must be a string."]);
    }

    #[test]
    fn test_non_object_body_fails_every_field() {
        let errors = validate(&json!("not an object")).expect_err("should fail");
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut body = valid_body();
        body["email"] = json!("broken");
        let first = validate(&body).expect_err("should fail");
        let second = validate(&body).expect_err("should fail");
        assert_eq!(first, second);
    }
}
