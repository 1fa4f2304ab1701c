//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    ApiError, Login, Message, Password, SendOptions, SendOutcome, SendResult, ValidationError,
};
use crate::transport::TransportError;

/// Endpoint used when [`Config::url`] is not set.
pub const DEFAULT_ENDPOINT: &str = "https://smsc.ru/sys/send.php";

/// Boxed future returned by [`HttpTransport`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
/// Status and fully read body of an HTTP response.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP seam used by [`SmscClient`].
///
/// Implementations must read the whole body before resolving, so the connection is
/// released on every path. Timeouts, TLS, and pooling are the implementation's business.
pub trait HttpTransport: Send + Sync {
    /// POST `params` as `application/x-www-form-urlencoded` to `url`.
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone, Default)]
/// [`HttpTransport`] backed by a `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone, Default)]
/// Everything needed to construct a [`SmscClient`].
///
/// `login` and `password` are required; the rest falls back to defaults.
pub struct Config {
    /// Endpoint URL; [`DEFAULT_ENDPOINT`] when `None` or blank.
    pub url: Option<String>,
    /// Sent exactly as given; only an empty value is rejected.
    pub login: String,
    /// Sent exactly as given; only an empty value is rejected.
    pub password: String,
    /// HTTP transport; a default `reqwest::Client` when `None`.
    pub transport: Option<Arc<dyn HttpTransport>>,
    /// Options applied to every message before the per-call options.
    pub defaults: SendOptions,
}

impl Config {
    /// Config with credentials and every other field defaulted.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("login", &self.login)
            .field("password", &"***")
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .field("defaults", &self.defaults)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmscClient`].
///
/// Every variant except [`SmscError::Api`] renders with an `smsc: ` prefix.
/// Provider-reported errors keep the provider's own `ERROR = …` rendering.
pub enum SmscError {
    /// Login or password is empty; no client was created.
    #[error("smsc: empty login or password")]
    MissingCredentials,

    /// The configured endpoint is not a valid URL.
    #[error("smsc: invalid endpoint {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },

    /// HTTP client / transport failure (DNS, TLS, timeouts, unreadable body).
    #[error("smsc: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status with a body that is not a provider response.
    #[error("smsc: unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded as a result or an error.
    #[error("smsc: {0}")]
    Decode(#[source] TransportError),

    /// SMSC.RU answered with an error object.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The message was rejected before anything was sent.
    #[error("smsc: {0}")]
    Validation(#[from] ValidationError),
}

impl SmscError {
    /// The provider-reported error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`SmscClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or defaults.
pub struct SmscClientBuilder {
    config: Config,
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmscClientBuilder {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            config: Config::new(login, password),
            http_client: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the `send.php` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.url = Some(endpoint.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom client or transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom client or transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use an existing `reqwest::Client` (shares its connection pool and settings).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a custom [`HttpTransport`]. Takes precedence over [`Self::http_client`].
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.config.transport = Some(transport);
        self
    }

    /// Options applied to every message; per-call options override them field by field.
    pub fn defaults(mut self, defaults: SendOptions) -> Self {
        self.config.defaults = defaults;
        self
    }

    /// Build a [`SmscClient`].
    pub fn build(self) -> Result<SmscClient, SmscError> {
        let mut config = self.config;
        credentials(&config.login, &config.password)?;

        if config.transport.is_none() {
            let client = match self.http_client {
                Some(client) => client,
                None => {
                    let mut builder = reqwest::Client::builder();
                    if let Some(timeout) = self.timeout {
                        builder = builder.timeout(timeout);
                    }
                    if let Some(user_agent) = self.user_agent {
                        builder = builder.user_agent(user_agent);
                    }
                    builder
                        .build()
                        .map_err(|err| SmscError::Transport(Box::new(err)))?
                }
            };
            config.transport = Some(Arc::new(ReqwestTransport::new(client)));
        }

        SmscClient::new(config)
    }
}

#[derive(Clone)]
/// High-level SMSC.RU client.
///
/// Cheap to clone and safe to share across tasks: each [`SmscClient::send`] builds its own
/// message and issues exactly one request. There are no retries.
pub struct SmscClient {
    endpoint: String,
    login: Login,
    password: Password,
    defaults: SendOptions,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for SmscClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmscClient")
            .field("endpoint", &self.endpoint)
            .field("login", &self.login)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl SmscClient {
    /// Create a client from a [`Config`].
    ///
    /// Fails with [`SmscError::MissingCredentials`] if login or password is empty, and with
    /// [`SmscError::InvalidEndpoint`] if the URL does not parse.
    pub fn new(config: Config) -> Result<Self, SmscError> {
        let (login, password) = credentials(&config.login, &config.password)?;

        let endpoint = config
            .url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        url::Url::parse(&endpoint).map_err(|source| SmscError::InvalidEndpoint {
            url: endpoint.clone(),
            source,
        })?;

        let http: Arc<dyn HttpTransport> = match config.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::default()),
        };

        Ok(Self {
            endpoint,
            login,
            password,
            defaults: config.defaults,
            http,
        })
    }

    /// Start building a client with custom settings.
    pub fn builder(login: impl Into<String>, password: impl Into<String>) -> SmscClientBuilder {
        SmscClientBuilder::new(login, password)
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `text` to every number in `phones`.
    ///
    /// Client defaults are applied first, then `options`. The response is always requested
    /// as JSON.
    ///
    /// Errors:
    /// - [`SmscError::Validation`] when the message fails validation (nothing is rejected yet),
    /// - [`SmscError::Transport`] when the request fails or the body cannot be read,
    /// - [`SmscError::Decode`] for a body that is neither a result nor an error,
    /// - [`SmscError::HttpStatus`] for a non-2xx status without a decodable body,
    /// - [`SmscError::Api`] when SMSC.RU returns an error object.
    pub async fn send<I>(
        &self,
        text: impl Into<String>,
        phones: I,
        options: SendOptions,
    ) -> Result<SendResult, SmscError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut message = Message::new(
            self.login.clone(),
            self.password.clone(),
            text,
            phones.into_iter().map(Into::into).collect(),
        );
        message.apply(&self.defaults.overridden_by(&options));
        message.validate()?;

        let params = crate::transport::encode_send_form(&message);
        debug!(
            endpoint = %self.endpoint,
            recipients = message.phones().len(),
            format = ?message.format(),
            cost = ?message.cost(),
            "sending SMS"
        );

        let response = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(SmscError::Transport)?;

        let outcome = match crate::transport::decode_send_json_response(&response.body) {
            Ok(outcome) => outcome,
            Err(_) if !(200..=299).contains(&response.status) => {
                warn!(status = response.status, "SMSC.RU returned an HTTP error");
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                return Err(SmscError::HttpStatus {
                    status: response.status,
                    body,
                });
            }
            Err(err) => return Err(SmscError::Decode(err)),
        };

        match outcome {
            SendOutcome::Sent(result) => {
                debug!(id = ?result.id, count = result.count, "SMS accepted");
                Ok(result)
            }
            SendOutcome::Rejected(err) => {
                warn!(
                    code = err.code.as_i32(),
                    description = %err.description,
                    id = ?err.id,
                    "SMSC.RU rejected the message"
                );
                Err(SmscError::Api(err))
            }
        }
    }
}

fn credentials(login: &str, password: &str) -> Result<(Login, Password), SmscError> {
    match (Login::new(login), Password::new(password)) {
        (Ok(login), Ok(password)) => Ok((login, password)),
        _ => Err(SmscError::MissingCredentials),
    }
}
