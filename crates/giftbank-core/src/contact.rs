//! Examiner contact card.
//!
//! The form is a fixed list of steps. Each submitted value is validated; a
//! rejected value leaves the form on the same step.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::patterns::regex;

/// The fields of the contact form, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    LastName,
    FirstName,
    Email,
    WorkPhone,
    PersonalPhone,
    Address,
    Workplace,
    Office,
}

impl ContactField {
    pub const STEPS: [ContactField; 8] = [
        ContactField::LastName,
        ContactField::FirstName,
        ContactField::Email,
        ContactField::WorkPhone,
        ContactField::PersonalPhone,
        ContactField::Address,
        ContactField::Workplace,
        ContactField::Office,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactField::LastName => "last name",
            ContactField::FirstName => "first name",
            ContactField::Email => "email",
            ContactField::WorkPhone => "work phone",
            ContactField::PersonalPhone => "personal phone",
            ContactField::Address => "address",
            ContactField::Workplace => "workplace",
            ContactField::Office => "office number",
        }
    }

    /// Prompt shown when asking for this field.
    pub fn prompt(self) -> &'static str {
        match self {
            ContactField::LastName => "Last name: ",
            ContactField::FirstName => "First name: ",
            ContactField::Email => "Email: ",
            ContactField::WorkPhone => "Work phone (+33 followed by 9 digits): ",
            ContactField::PersonalPhone => "Personal phone (+33XXXXXXXXX or 0XXXXXXXXX): ",
            ContactField::Address => "Home address (street;postcode;city;country): ",
            ContactField::Workplace => "Workplace: ",
            ContactField::Office => "Office number: ",
        }
    }

    /// Check a value for this field.
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        let value = value.trim();
        let rule = match self {
            ContactField::LastName
            | ContactField::FirstName
            | ContactField::Workplace
            | ContactField::Office => None,
            ContactField::Email => Some((
                regex!(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$"),
                "expected something like name@example.org",
            )),
            ContactField::WorkPhone => Some((
                regex!(r"^\+33[0-9]{9}$"),
                "must start with +33 followed by 9 digits",
            )),
            ContactField::PersonalPhone => Some((
                regex!(r"^(?:\+33[0-9]{9}|0[1-9][0-9]{8})$"),
                "must be +33 followed by 9 digits or a 10-digit local number",
            )),
            ContactField::Address => Some((
                regex!(r"^[^;]+;[^;]+;[^;]+;[^;]+$"),
                "expected street;postcode;city;country",
            )),
        };

        if value.is_empty() {
            return Err(FieldError::Empty(self.name()));
        }
        match rule {
            Some((re, hint)) if !re.is_match(value) => Err(FieldError::Invalid {
                field: self.name(),
                hint,
            }),
            _ => Ok(()),
        }
    }
}

/// A completed contact card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub work_phone: String,
    pub personal_phone: String,
    pub address: String,
    pub workplace: String,
    pub office: String,
}

impl Contact {
    /// Render the contact as a vCard 4.0 document.
    pub fn to_vcard(&self) -> String {
        let mut parts = self.address.split(';').map(str::trim);
        let street = parts.next().unwrap_or_default();
        let postcode = parts.next().unwrap_or_default();
        let city = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();

        [
            "BEGIN:VCARD".to_string(),
            "VERSION:4.0".to_string(),
            format!("N:{};{};;;", self.last_name, self.first_name),
            format!("FN:{} {}", self.first_name, self.last_name),
            format!("EMAIL:{}", self.email),
            format!("TEL;TYPE=work:{}", self.work_phone),
            format!("TEL;TYPE=home:{}", self.personal_phone),
            format!("ADR;TYPE=home:;;{street};{city};;{postcode};{country}"),
            format!("ORG:{}", self.workplace),
            format!("NOTE:office {}", self.office),
            "END:VCARD".to_string(),
        ]
        .join("\r\n")
    }
}

/// Where the form stands after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The next field to ask for.
    Next(ContactField),
    /// Every field is filled.
    Done,
}

/// Step-by-step contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: Vec<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field waiting for a value, if any.
    pub fn current(&self) -> Option<ContactField> {
        ContactField::STEPS.get(self.values.len()).copied()
    }

    /// Validate a value for the current field and advance on success.
    pub fn submit(&mut self, value: &str) -> Result<Step, FieldError> {
        let Some(field) = self.current() else {
            return Ok(Step::Done);
        };
        field.validate(value)?;
        self.values.push(value.trim().to_string());

        Ok(self.current().map_or(Step::Done, Step::Next))
    }

    /// The finished contact, once every step has been filled.
    pub fn finish(&self) -> Option<Contact> {
        let [last_name, first_name, email, work_phone, personal_phone, address, workplace, office] =
            <&[String; 8]>::try_from(self.values.as_slice()).ok()?;
        Some(Contact {
            last_name: last_name.clone(),
            first_name: first_name.clone(),
            email: email.clone(),
            work_phone: work_phone.clone(),
            personal_phone: personal_phone.clone(),
            address: address.clone(),
            workplace: workplace.clone(),
            office: office.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [&str; 8] = [
        "Curie",
        "Marie",
        "marie.curie@example.org",
        "+33123456789",
        "0612345678",
        "1 rue Pierre;75005;Paris;France",
        "Sorbonne",
        "B204",
    ];

    #[test]
    fn walks_every_step() {
        let mut form = ContactForm::new();
        assert_eq!(form.current(), Some(ContactField::LastName));
        for (i, value) in VALID.iter().enumerate() {
            let step = form.submit(value).unwrap();
            if i + 1 < VALID.len() {
                assert_eq!(step, Step::Next(ContactField::STEPS[i + 1]));
            } else {
                assert_eq!(step, Step::Done);
            }
        }
        let contact = form.finish().unwrap();
        assert_eq!(contact.email, "marie.curie@example.org");
        assert_eq!(contact.office, "B204");
    }

    #[test]
    fn invalid_value_stays_on_step() {
        let mut form = ContactForm::new();
        form.submit("Curie").unwrap();
        form.submit("Marie").unwrap();
        assert!(matches!(
            form.submit("not-an-email"),
            Err(FieldError::Invalid { field: "email", .. })
        ));
        assert_eq!(form.current(), Some(ContactField::Email));
        assert!(form.finish().is_none());
    }

    #[test]
    fn empty_values_rejected() {
        assert_eq!(
            ContactField::LastName.validate("  "),
            Err(FieldError::Empty("last name"))
        );
    }

    #[test]
    fn phone_rules() {
        assert!(ContactField::WorkPhone.validate("+33123456789").is_ok());
        assert!(ContactField::WorkPhone.validate("0612345678").is_err());
        assert!(ContactField::PersonalPhone.validate("0612345678").is_ok());
        assert!(ContactField::PersonalPhone.validate("0012345678").is_err());
        assert!(ContactField::Address.validate("street;city").is_err());
    }

    #[test]
    fn vcard_layout() {
        let mut form = ContactForm::new();
        for value in VALID {
            form.submit(value).unwrap();
        }
        let card = form.finish().unwrap().to_vcard();
        let lines: Vec<_> = card.split("\r\n").collect();
        assert_eq!(lines.first(), Some(&"BEGIN:VCARD"));
        assert_eq!(lines.last(), Some(&"END:VCARD"));
        assert!(lines.contains(&"FN:Marie Curie"));
        assert!(lines.contains(&"ADR;TYPE=home:;;1 rue Pierre;Paris;;75005;France"));
        assert!(lines.contains(&"TEL;TYPE=work:+33123456789"));
    }
}
