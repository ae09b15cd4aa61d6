use product_portal_common::validate::{FormValidator, RegistrationForm, RegistrationValidator};

use super::{FlowError, FlowResult};
use crate::{
    api::{HttpClient, UnauthorizedApi},
    pages::Page,
};

/// Validate the `form` and create the account. Returns the page to show next; the user still has
/// to log in afterwards.
/// # Errors
/// This function will return an error if the form is invalid or the service rejects the request
pub async fn submit<C>(api: &UnauthorizedApi<C>, form: &RegistrationForm) -> FlowResult<Page>
where
    C: HttpClient,
{
    let registration = RegistrationValidator::validate(form).map_err(FlowError::Validation)?;
    if let Err(error) = api.register(&registration).await {
        log::error!("Unable to register {}: {error}", registration.email);
        return Err(error.into());
    }
    log::info!("Registered {}", registration.email);
    Ok(Page::Login)
}

#[cfg(test)]
mod test {
    use product_portal_common::validate::{
        RegistrationForm, PASSWORD_MISMATCH, PASSWORD_TOO_SHORT,
    };
    use rstest::rstest;

    use super::submit;
    use crate::{
        api::{
            test::{reply, BASE_URL},
            MockHttpClient, UnauthorizedApi,
        },
        flows::FlowError,
        pages::Page,
    };

    fn form(password: &str, confirm_password: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Ann".to_owned(),
            email: "a@b.co".to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
        }
    }

    #[rstest]
    #[case::mismatch("secret", "secreT", PASSWORD_MISMATCH)]
    #[case::five_characters("12345", "12345", PASSWORD_TOO_SHORT)]
    #[tokio::test]
    async fn invalid_form_should_never_reach_network(
        #[case] password: &str,
        #[case] confirm_password: &str,
        #[case] expected: &str,
    ) {
        let mut client = MockHttpClient::new();
        client.expect_send().never();
        let api = UnauthorizedApi::new(client, BASE_URL);

        let result = submit(&api, &form(password, confirm_password)).await;

        let Err(FlowError::Validation(message)) = result else {
            panic!("Expected a validation failure");
        };
        assert_eq!(message, expected);
    }

    #[tokio::test]
    async fn six_character_password_should_register_and_return_to_login() -> Result<(), FlowError>
    {
        let mut client = MockHttpClient::new();
        client
            .expect_send()
            .times(1)
            .returning(|_| Ok(reply(201, r#"{"message":"User registered"}"#)));
        let api = UnauthorizedApi::new(client, BASE_URL);

        let next = submit(&api, &form("123456", "123456")).await?;

        assert_eq!(next, Page::Login);
        Ok(())
    }

    #[rstest]
    #[case::server_message(409, r#"{"message":"User already exists"}"#, "User already exists")]
    #[case::no_message(500, "", "Registration failed")]
    #[tokio::test]
    async fn rejected_registration_should_show_message(
        #[case] status: u16,
        #[case] body: &'static str,
        #[case] expected: &str,
    ) {
        let mut client = MockHttpClient::new();
        client
            .expect_send()
            .times(1)
            .returning(move |_| Ok(reply(status, body)));
        let api = UnauthorizedApi::new(client, BASE_URL);

        let result = submit(&api, &form("secret", "secret")).await;

        let Err(error) = result else {
            panic!("Registration should have been rejected");
        };
        assert_eq!(error.to_string(), expected);
    }
}
