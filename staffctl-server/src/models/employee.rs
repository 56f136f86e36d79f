//! Employee record
//!
//! JSON uses camelCase (`firstName`, `lastName`) to match the REST contract.
//! An `id` sent in a request body is ignored; ids are assigned by the store.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Column width for every text field (`VARCHAR(255)`)
pub const MAX_FIELD_LEN: usize = 255;

/// A stored employee row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Overwrite the mutable fields from `patch`. The id is kept.
    pub fn apply(&mut self, patch: NewEmployee) {
        self.first_name = patch.first_name;
        self.last_name = patch.last_name;
        self.email = patch.email;
    }
}

/// Employee fields without an id: a create candidate or an update patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Check required fields.
    ///
    /// # Rules
    /// - No field may be empty or whitespace-only
    /// - No field may exceed 255 characters
    ///
    /// # Example
    /// ```
    /// use staffctl_server::models::NewEmployee;
    ///
    /// assert!(NewEmployee::new("Avishkar", "Singh", "avishkar@gmail.com").validate().is_ok());
    /// assert!(NewEmployee::new("", "Singh", "avishkar@gmail.com").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_field("firstName", &self.first_name)?;
        check_field("lastName", &self.last_name)?;
        check_field("email", &self.email)?;
        Ok(())
    }

    /// Attach an id, producing the row shape the store writes.
    pub fn with_id(self, id: i64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

fn check_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let employee = NewEmployee::new("Avishkar", "Singh", "avishkar@gmail.com").with_id(7);
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "firstName": "Avishkar",
                "lastName": "Singh",
                "email": "avishkar@gmail.com"
            })
        );
    }

    #[test]
    fn request_body_id_is_ignored() {
        let body = r#"{"id": 99, "firstName": "Ram", "lastName": "Jadhav", "email": "ram@gmail.com"}"#;
        let patch: NewEmployee = serde_json::from_str(body).unwrap();
        assert_eq!(patch, NewEmployee::new("Ram", "Jadhav", "ram@gmail.com"));
    }

    #[test]
    fn missing_field_fails_to_parse() {
        let body = r#"{"firstName": "Ram", "lastName": "Jadhav"}"#;
        assert!(serde_json::from_str::<NewEmployee>(body).is_err());
    }

    #[test]
    fn rejects_blank_fields() {
        let err = NewEmployee::new("Ram", "   ", "ram@gmail.com")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "lastName" });

        let err = NewEmployee::new("Ram", "Jadhav", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "email" });
    }

    #[test]
    fn max_length() {
        let at_limit = "a".repeat(MAX_FIELD_LEN);
        assert!(NewEmployee::new(&at_limit, "Jadhav", "ram@gmail.com")
            .validate()
            .is_ok());

        let over = "a".repeat(MAX_FIELD_LEN + 1);
        let err = NewEmployee::new(&over, "Jadhav", "ram@gmail.com")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }

    #[test]
    fn apply_keeps_id() {
        let mut employee = NewEmployee::new("Avishkar", "Singh", "avishkar@gmail.com").with_id(1);
        employee.apply(NewEmployee::new("Ram", "Jadhav", "ram@gmail.com"));
        assert_eq!(employee.id, 1);
        assert_eq!(employee.first_name, "Ram");
        assert_eq!(employee.last_name, "Jadhav");
        assert_eq!(employee.email, "ram@gmail.com");
    }
}
