//! Local checks run before a form is submitted. A form that fails never reaches the network and
//! the returned message is shown inline.

use lazy_regex::regex_is_match;

use crate::{Credentials, NewProduct, Registration};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const INVALID_EMAIL: &str = "Please enter a valid email";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const INVALID_PRICE: &str = "Price must be a number";

/// Minimum number of characters accepted for a new password
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validator for a form collected by one of the screens. A form that passes is turned into the
/// body of the request it feeds.
pub trait FormValidator {
    /// Type of the error message returned when the form is rejected. Must be convertible to a
    /// [String] so it can be displayed.
    type ErrorMessage: Into<String>;
    /// Raw form state as entered by the user
    type Form;
    /// Request body built from a valid form
    type Body;
    /// Perform the checks against the `form`, in the order the user should see them, returning
    /// the request body when all of them pass.
    /// # Errors
    /// This function will return an error with the first failed check's message
    fn validate(form: &Self::Form) -> Result<Self::Body, Self::ErrorMessage>;
}

/// Loose email check. Anything with non-blank text around an `@` and a later `.` passes.
pub fn is_valid_email(email: &str) -> bool {
    regex_is_match!(r"\S+@\S+\.\S+", email)
}

/// Login screen inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub struct LoginValidator;

impl FormValidator for LoginValidator {
    type ErrorMessage = &'static str;
    type Form = LoginForm;
    type Body = Credentials;

    fn validate(form: &Self::Form) -> Result<Self::Body, Self::ErrorMessage> {
        if form.email.is_empty() || form.password.is_empty() {
            return Err(FILL_ALL_FIELDS);
        }
        if !is_valid_email(&form.email) {
            return Err(INVALID_EMAIL);
        }
        Ok(Credentials {
            email: form.email.clone(),
            password: form.password.clone(),
        })
    }
}

/// Registration screen inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct RegistrationValidator;

impl FormValidator for RegistrationValidator {
    type ErrorMessage = &'static str;
    type Form = RegistrationForm;
    type Body = Registration;

    fn validate(form: &Self::Form) -> Result<Self::Body, Self::ErrorMessage> {
        if form.name.is_empty()
            || form.email.is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(FILL_ALL_FIELDS);
        }
        if !is_valid_email(&form.email) {
            return Err(INVALID_EMAIL);
        }
        if form.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PASSWORD_TOO_SHORT);
        }
        if form.password != form.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(Registration {
            name: form.name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        })
    }
}

/// Inputs of the product creation modal. The price is kept as the raw text of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
}

pub struct ProductDraftValidator;

impl FormValidator for ProductDraftValidator {
    type ErrorMessage = &'static str;
    type Form = ProductDraft;
    type Body = NewProduct;

    fn validate(form: &Self::Form) -> Result<Self::Body, Self::ErrorMessage> {
        let price = form.price.trim();
        if form.name.trim().is_empty() || price.is_empty() {
            return Err(FILL_ALL_FIELDS);
        }
        let price = match price.parse::<f64>() {
            Ok(inner) if inner.is_finite() => inner,
            _ => return Err(INVALID_PRICE),
        };
        Ok(NewProduct {
            name: form.name.clone(),
            price,
        })
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    fn login_form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    fn registration_form(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> RegistrationForm {
        RegistrationForm {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
        }
    }

    #[rstest]
    #[case::valid("a@b.co", true)]
    #[case::no_at("bad-email", false)]
    #[case::no_dot("a@bco", false)]
    #[case::nothing_before_at("@b.co", false)]
    #[case::embedded("contact: a@b.co please", true)]
    fn email_check(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[rstest]
    #[case::empty_email("", "secret", FILL_ALL_FIELDS)]
    #[case::empty_password("a@b.co", "", FILL_ALL_FIELDS)]
    #[case::both_empty("", "", FILL_ALL_FIELDS)]
    #[case::bad_email("bad-email", "secret", INVALID_EMAIL)]
    fn login_should_fail_when(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: &str,
    ) {
        let result = LoginValidator::validate(&login_form(email, password));

        assert_eq!(result, Err(expected));
    }

    #[test]
    fn login_should_produce_credentials_when_valid() {
        let credentials = LoginValidator::validate(&login_form("a@b.co", "x"));

        assert_eq!(
            credentials,
            Ok(Credentials {
                email: "a@b.co".to_owned(),
                password: "x".to_owned(),
            })
        );
    }

    #[rstest]
    #[case::missing_name("", "a@b.co", "secret", "secret", FILL_ALL_FIELDS)]
    #[case::missing_confirmation("Ann", "a@b.co", "secret", "", FILL_ALL_FIELDS)]
    #[case::bad_email("Ann", "bad-email", "secret", "secret", INVALID_EMAIL)]
    #[case::short_password("Ann", "a@b.co", "12345", "12345", PASSWORD_TOO_SHORT)]
    #[case::mismatch("Ann", "a@b.co", "secret", "secrets", PASSWORD_MISMATCH)]
    #[case::short_and_mismatched("Ann", "a@b.co", "123", "456", PASSWORD_TOO_SHORT)]
    fn registration_should_fail_when(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] confirm_password: &str,
        #[case] expected: &str,
    ) {
        let form = registration_form(name, email, password, confirm_password);

        assert_eq!(RegistrationValidator::validate(&form), Err(expected));
    }

    #[test]
    fn registration_should_accept_six_character_password() {
        let form = registration_form("Ann", "a@b.co", "123456", "123456");

        let registration = RegistrationValidator::validate(&form);

        assert_eq!(
            registration,
            Ok(Registration {
                name: "Ann".to_owned(),
                email: "a@b.co".to_owned(),
                password: "123456".to_owned(),
            })
        );
    }

    #[rstest]
    #[case::missing_name("", "10", Err(FILL_ALL_FIELDS))]
    #[case::missing_price("Lamp", " ", Err(FILL_ALL_FIELDS))]
    #[case::not_a_number("Lamp", "ten", Err(INVALID_PRICE))]
    #[case::infinite("Lamp", "inf", Err(INVALID_PRICE))]
    #[case::integer("Lamp", "98000", Ok(98000.0))]
    #[case::decimal("Lamp", " 12.5 ", Ok(12.5))]
    fn product_draft_validation(
        #[case] name: &str,
        #[case] price: &str,
        #[case] expected: Result<f64, &'static str>,
    ) {
        let draft = ProductDraft {
            name: name.to_owned(),
            price: price.to_owned(),
        };

        let result = ProductDraftValidator::validate(&draft).map(|product| product.price);

        assert_eq!(result, expected);
    }
}
