use async_trait::async_trait;
use gloo_net::http::Request;
use product_portal_common::{Credentials, ErrorBody, NewProduct, Product, Registration, Session};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

const LOGIN_PATH: &str = "/api/auth/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/api/auth/register";
const PRODUCTS_PATH: &str = "/api/products/api/products";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Everything needed to issue one call against the remote API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Full value of the `Authorization` header, if any
    pub authorization: Option<String>,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            authorization: None,
            body: None,
        }
    }

    pub fn get(url: String) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: String) -> Self {
        Self::new(Method::Post, url)
    }

    fn bearer(mut self, token: &str) -> Self {
        self.authorization = Some(format!("Bearer {token}"));
        self
    }

    fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Status and raw body of a completed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by the API wrappers. The browser implementation is [BrowserClient].
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply>;
}

/// [HttpClient] backed by the browser's `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClient;

#[async_trait(?Send)]
impl HttpClient for BrowserClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body)?;
        }
        let response = builder.send().await?;
        Ok(ApiReply {
            status: response.status(),
            body: response.text().await?,
        })
    }
}

#[derive(Clone, Copy)]
pub struct UnauthorizedApi<C> {
    client: C,
    url: &'static str,
}

impl<C: HttpClient> UnauthorizedApi<C> {
    pub fn new(client: C, url: &'static str) -> Self {
        Self { client, url }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthorizedApi<'_, C>> {
        let url = format!("{}{LOGIN_PATH}", self.url);
        let reply = self.send(ApiRequest::post(url).json(credentials)?).await?;
        let session = parse_json::<Session>(reply, "Login failed")?;
        Ok(self.authorize(session.token))
    }

    /// Create a new account. The success body is not inspected.
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        let url = format!("{}{REGISTER_PATH}", self.url);
        let reply = self.send(ApiRequest::post(url).json(registration)?).await?;
        check_status(reply, "Registration failed")?;
        Ok(())
    }

    /// Wrap a previously issued session token
    pub fn authorize(&self, token: String) -> AuthorizedApi<'_, C> {
        AuthorizedApi { api: self, token }
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiReply> {
        log::debug!("{:?} {}", request.method, request.url);
        self.client.send(request).await
    }
}

pub struct AuthorizedApi<'a, C> {
    api: &'a UnauthorizedApi<C>,
    token: String,
}

impl<C: HttpClient> AuthorizedApi<'_, C> {
    pub async fn products(&self) -> Result<Vec<Product>> {
        let url = format!("{}{PRODUCTS_PATH}", self.api.url);
        let reply = self.send(ApiRequest::get(url)).await?;
        parse_json(reply, "Failed to fetch products")
    }

    /// Create a product. The created resource in the response is ignored.
    pub async fn create_product(&self, product: &NewProduct) -> Result<()> {
        let url = format!("{}{PRODUCTS_PATH}", self.api.url);
        let reply = self.send(ApiRequest::post(url).json(product)?).await?;
        check_status(reply, "Failed to create product")?;
        Ok(())
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiReply> {
        self.api.send(request.bearer(&self.token)).await
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response from the server. {0}")]
    Body(#[from] serde_json::Error),
    #[error("No token found. Please login again.")]
    MissingToken,
    #[error("Could not access the session storage. {0}")]
    Storage(String),
}

impl From<gloo_net::Error> for Error {
    /// A failed `fetch` surfaces as a JS `TypeError`. Only its message is kept so the user sees
    /// `Failed to fetch` rather than the error's debug rendering.
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::JsError(error) => Self::Network(error.message),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Reject a reply without a 2xx status, using the server's `message` when it sent one and the
/// `fallback` otherwise.
fn check_status(reply: ApiReply, fallback: &str) -> Result<ApiReply> {
    if reply.ok() {
        return Ok(reply);
    }
    let message = ErrorBody::message_from(&reply.body).unwrap_or_else(|| fallback.to_owned());
    Err(Error::Status {
        status: reply.status,
        message,
    })
}

fn parse_json<T>(reply: ApiReply, fallback: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let reply = check_status(reply, fallback)?;
    Ok(serde_json::from_str(&reply.body)?)
}
