pub mod status;

pub use status::map_status;

use crate::config::UserServiceConfig;
use crate::error::user_proxy::UserProxyError;
use crate::{USER_SERVICE_TOKENS_ENDPOINT, USER_SERVICE_USERS_ENDPOINT};

use common::HttpStatusCode;
use models::{AuthToken, TokenResponse, User};

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// The two operations business logic needs from the user service.
///
/// [`UserServiceClient`] is the HTTP implementation; tests of calling code
/// can supply their own.
pub trait UserProxy {
    /// Register `user` with the user service.
    fn create_user(
        &self,
        user: &User,
    ) -> impl Future<Output = Result<(), UserProxyError>> + Send;

    /// Exchange `user`'s credentials for an authentication token.
    fn create_token(
        &self,
        user: &User,
    ) -> impl Future<Output = Result<AuthToken, UserProxyError>> + Send;
}

/// HTTP client for the user service's `POST /users` and `POST /tokens`.
///
/// Holds only immutable state, so one instance can be cloned and shared
/// between tasks. Every request uses the timeout from [`UserServiceConfig`].
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    base_url: Url,
    client: Client,
}

impl UserServiceClient {
    /// Build a client for the service described by `config`.
    ///
    /// No request is made here.
    ///
    /// # Errors
    /// Returns [`UserProxyError::Config`] if `config` fails validation,
    /// [`UserProxyError::UrlParse`] if the hostname doesn't form a valid URL,
    /// or [`UserProxyError::Http`] if the HTTP client can't be built.
    pub fn new(config: &UserServiceConfig) -> Result<Self, UserProxyError> {
        config.validate()?;

        let base_url_str = config.base_url();
        let base_url = Url::parse(&base_url_str)?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        debug!("proxy setup to {base_url_str}");

        Ok(Self { base_url, client })
    }

    /// Build a client from hostname and port with the default timeout.
    pub fn from_parts(hostname: &str, port: u16) -> Result<Self, UserProxyError> {
        Self::new(&UserServiceConfig::new(hostname, port))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /users` with `user` as the JSON body.
    ///
    /// # Errors
    /// - [`UserProxyError::Serialization`] before any request if `user` can't be encoded
    /// - [`UserProxyError::Http`] on transport failure or timeout
    /// - [`UserProxyError::Forbidden`], [`UserProxyError::UserExists`] or
    ///   [`UserProxyError::UnexpectedStatus`] for any answer other than 201
    pub async fn create_user<U>(&self, user: &U) -> Result<(), UserProxyError>
    where
        U: Serialize + ?Sized,
    {
        debug!("proxying request to create user");

        let response = self.post_json(USER_SERVICE_USERS_ENDPOINT, user).await?;

        map_status(status_of(&response))
    }

    /// `POST /tokens` with `user`'s credentials, returning the issued token.
    ///
    /// # Errors
    /// Same as [`Self::create_user`], plus [`UserProxyError::Decode`] when a 201
    /// body isn't a `{"token": "..."}` object.
    pub async fn create_token<U>(&self, user: &U) -> Result<AuthToken, UserProxyError>
    where
        U: Serialize + ?Sized,
    {
        debug!("proxying request to create token");

        let response = self.post_json(USER_SERVICE_TOKENS_ENDPOINT, user).await?;

        map_status(status_of(&response))?;

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| UserProxyError::decode(&e))?;

        Ok(AuthToken::from(body))
    }

    /// Serialize `body` and POST it. Serialization runs before the request is built.
    async fn post_json<B>(&self, endpoint: &str, body: &B) -> Result<Response, UserProxyError>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(|e| UserProxyError::serialization(&e))?;
        let url = self.base_url.join(endpoint)?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await?;

        Ok(response)
    }
}

impl UserProxy for UserServiceClient {
    async fn create_user(&self, user: &User) -> Result<(), UserProxyError> {
        UserServiceClient::create_user(self, user).await
    }

    async fn create_token(&self, user: &User) -> Result<AuthToken, UserProxyError> {
        UserServiceClient::create_token(self, user).await
    }
}

fn status_of(response: &Response) -> HttpStatusCode {
    HttpStatusCode(response.status().as_u16())
}
