use product_portal_common::validate::{FormValidator, LoginForm, LoginValidator};

use super::{FlowError, FlowResult};
use crate::{
    api::{HttpClient, UnauthorizedApi},
    pages::Page,
    session::TokenStore,
};

/// Validate the `form`, exchange the credentials for a session token and persist it. Returns the
/// page to show next.
/// # Errors
/// This function will return an error if the form is invalid, the service rejects the credentials
/// or the token cannot be stored. No token is stored in any of those cases.
pub async fn submit<C, S>(
    api: &UnauthorizedApi<C>,
    tokens: &S,
    form: &LoginForm,
) -> FlowResult<Page>
where
    C: HttpClient,
    S: TokenStore,
{
    let credentials = LoginValidator::validate(form).map_err(FlowError::Validation)?;
    let session = match api.login(&credentials).await {
        Ok(inner) => inner,
        Err(error) => {
            log::error!("Unable to login with {}: {error}", credentials.email);
            return Err(error.into());
        }
    };
    tokens.store_token(session.token())?;
    log::info!("Logged in as {}", credentials.email);
    Ok(Page::Products)
}

#[cfg(test)]
mod test {
    use mockall::Sequence;
    use product_portal_common::validate::{LoginForm, FILL_ALL_FIELDS, INVALID_EMAIL};
    use rstest::rstest;

    use super::submit;
    use crate::{
        api::{
            test::{reply, BASE_URL},
            Method, MockHttpClient, UnauthorizedApi,
        },
        flows::{products, FlowError},
        pages::Page,
        session::{test::MemoryTokenStore, TokenStore},
    };

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[rstest]
    #[case::empty_email("", "secret", FILL_ALL_FIELDS)]
    #[case::empty_password("a@b.co", "", FILL_ALL_FIELDS)]
    #[case::bad_email("bad-email", "secret", INVALID_EMAIL)]
    #[tokio::test]
    async fn invalid_form_should_never_reach_network(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: &str,
    ) {
        let mut client = MockHttpClient::new();
        client.expect_send().never();
        let api = UnauthorizedApi::new(client, BASE_URL);
        let tokens = MemoryTokenStore::default();

        let result = submit(&api, &tokens, &form(email, password)).await;

        let Err(FlowError::Validation(message)) = result else {
            panic!("Expected a validation failure");
        };
        assert_eq!(message, expected);
        assert_eq!(tokens.token(), None);
    }

    #[rstest]
    #[case(401)]
    #[case(400)]
    #[tokio::test]
    async fn rejected_credentials_should_show_server_message(#[case] status: u16) {
        let mut client = MockHttpClient::new();
        client
            .expect_send()
            .times(1)
            .returning(move |_| Ok(reply(status, r#"{"message":"Invalid credentials"}"#)));
        let api = UnauthorizedApi::new(client, BASE_URL);
        let tokens = MemoryTokenStore::default();

        let result = submit(&api, &tokens, &form("a@b.co", "wrong-password")).await;

        let Err(error) = result else {
            panic!("Login should have been rejected");
        };
        assert_eq!(error.to_string(), "Invalid credentials");
        assert_eq!(tokens.token(), None);
    }

    #[tokio::test]
    async fn token_from_login_should_authorize_product_list() -> Result<(), FlowError> {
        let mut sequence = Sequence::new();
        let mut client = MockHttpClient::new();
        client
            .expect_send()
            .withf(|request| request.method == Method::Post)
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(reply(200, r#"{"token":"abc123"}"#)));
        client
            .expect_send()
            .withf(|request| {
                request.method == Method::Get
                    && request.authorization.as_deref() == Some("Bearer abc123")
            })
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(reply(200, "[]")));
        let api = UnauthorizedApi::new(client, BASE_URL);
        let tokens = MemoryTokenStore::default();

        let next = submit(&api, &tokens, &form("a@b.co", "secret")).await?;
        let listing = products::load(&api, &tokens).await;

        assert_eq!(next, Page::Products);
        assert_eq!(tokens.token().as_deref(), Some("abc123"));
        assert!(listing.products.is_empty());
        assert_eq!(listing.notice, None);
        Ok(())
    }
}
