//! PronounDB lookup client.
//!
//! Lookups go through the v2 bulk endpoint:
//!
//! ```text
//! GET {base}/api/v2/lookup?platform={platform}&ids={id,id,...}
//! ```
//!
//! which answers with `{ "<id>": { "sets": { "<locale>": ["<code>", ...] } } }`.
//! Accounts PronounDB doesn't know are simply absent from the response. The
//! server caps a request at [`BULK_LOOKUP_ID_LIMIT`] IDs; longer lists are
//! split into batches and fetched one after another.

use std::collections::BTreeMap;

use bon::Builder;
use http::header::{ACCEPT, RETRY_AFTER, USER_AGENT};
use http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use pronoundb_grammar::Pronoun;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BulkLookupError, HttpError, LookupError, TransportError};
use crate::http_client::HttpClient;
use crate::platform::Platform;

/// Where PronounDB lives.
pub const DEFAULT_BASE: &str = "https://pronoundb.org";

/// Most IDs the server accepts in one request.
pub const BULK_LOOKUP_ID_LIMIT: usize = 50;

/// The only locale read from pronoun sets.
pub const LOCALE: &str = "en";

/// Sent when [`ClientOptions::user_agent`] is unset.
pub const DEFAULT_USER_AGENT: &str = concat!("pronoundb-rs/", env!("CARGO_PKG_VERSION"));

const LOOKUP_PATH: &str = "/api/v2/lookup";

/// One account as returned by the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    /// Locale → pronoun codes, most preferred first
    #[serde(default)]
    pub sets: BTreeMap<String, Vec<String>>,
}

impl RawUser {
    /// Codes in the [`LOCALE`] set, possibly empty.
    pub fn codes(&self) -> &[String] {
        self.sets.get(LOCALE).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The account's pronoun: first code of the [`LOCALE`] set, normalized.
    ///
    /// `None` when the account has no entry for that locale.
    pub fn pronoun(&self) -> Option<Pronoun> {
        self.codes().first().map(|code| Pronoun::normalize(code))
    }
}

/// Raw bulk response, keyed by account ID.
///
/// Values are optional because the server may send `null` for an ID.
pub type RawBulk = BTreeMap<String, Option<RawUser>>;

/// Account ID → pronoun, for every account that had one.
pub type PronounMap = BTreeMap<String, Pronoun>;

/// Resolve a raw bulk response to one pronoun per account.
///
/// Accounts without a [`LOCALE`] set are left out.
pub fn resolve_bulk(raw: RawBulk) -> PronounMap {
    raw.into_iter()
        .filter_map(|(id, user)| Some((id, user?.pronoun()?)))
        .collect()
}

/// Client configuration.
///
/// ```
/// use pronoundb::client::ClientOptions;
/// use url::Url;
///
/// let opts = ClientOptions::new()
///     .base(Url::parse("http://localhost:8080").unwrap())
///     .user_agent("my-bot/1.0".to_owned())
///     .build();
/// assert_eq!(opts.user_agent_or_default(), "my-bot/1.0");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(start_fn = new)]
pub struct ClientOptions {
    /// Directory base URL. Any path is kept as a prefix.
    pub base: Url,
    /// `User-Agent` header; [`DEFAULT_USER_AGENT`] when unset
    pub user_agent: Option<String>,
    /// Extra headers sent with every request
    #[builder(default)]
    pub headers: Vec<(HeaderName, HeaderValue)>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::new()
            .base(Url::parse(DEFAULT_BASE).expect("valid url"))
            .build()
    }
}

impl ClientOptions {
    /// The user agent that will actually be sent.
    pub fn user_agent_or_default(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

#[derive(Serialize)]
struct LookupQuery {
    platform: Platform,
    ids: String,
}

/// Build the GET request for one batch of IDs.
///
/// Exposed so alternative transports can reuse the exact request shape.
pub fn build_lookup_request<S: AsRef<str>>(
    opts: &ClientOptions,
    platform: Platform,
    ids: &[S],
) -> Result<Request<Vec<u8>>, TransportError> {
    let mut url = opts.base.clone();
    let mut path = url.path().trim_end_matches('/').to_owned();
    path.push_str(LOOKUP_PATH);
    url.set_path(&path);

    let query = LookupQuery {
        platform,
        ids: ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(","),
    };
    let qs = serde_html_form::to_string(&query)
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
    url.set_query(Some(&qs));

    let mut builder = Request::builder()
        .method(Method::GET)
        .uri(url.as_str())
        .header(ACCEPT, "application/json")
        .header(USER_AGENT, opts.user_agent_or_default());
    for (name, value) in &opts.headers {
        builder = builder.header(name, value);
    }

    builder
        .body(vec![])
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))
}

/// Turn a lookup response into accounts, or the matching error.
///
/// 200 decodes the body, 429 becomes [`LookupError::RateLimited`] with the
/// `Retry-After` seconds, anything else is an [`HttpError`].
pub fn process_response(response: http::Response<Vec<u8>>) -> Result<RawBulk, LookupError> {
    match response.status() {
        StatusCode::OK => Ok(serde_json::from_slice(response.body())?),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(std::time::Duration::from_secs);
            Err(LookupError::RateLimited { retry_after })
        }
        status => {
            let body = response.into_body();
            Err(HttpError {
                status,
                body: (!body.is_empty()).then(|| body.into()),
            }
            .into())
        }
    }
}

/// PronounDB client over any [`HttpClient`].
#[derive(Debug, Clone)]
pub struct PronounDbClient<C> {
    http: C,
    opts: ClientOptions,
}

/// The client most callers want: `reqwest` transport.
#[cfg(feature = "reqwest-client")]
pub type DefaultClient = PronounDbClient<reqwest::Client>;

#[cfg(feature = "reqwest-client")]
impl Default for PronounDbClient<reqwest::Client> {
    fn default() -> Self {
        Self::new(reqwest::Client::new(), ClientOptions::default())
    }
}

impl<C> PronounDbClient<C> {
    /// Create a client with the given transport and options.
    pub fn new(http: C, opts: ClientOptions) -> Self {
        #[cfg(feature = "tracing")]
        tracing::info!(
            base = %opts.base,
            user_agent = opts.user_agent_or_default(),
            extra_headers = opts.headers.len(),
            "pronoundb client created"
        );

        Self { http, opts }
    }

    /// Current options.
    pub fn options(&self) -> &ClientOptions {
        &self.opts
    }

    /// Underlying transport.
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Point at a different directory instance.
    pub fn with_base(mut self, base: Url) -> Self {
        self.opts.base = base;
        self
    }

    /// Replace the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header to every request.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.opts.headers.push((name, value));
        self
    }
}

impl<C: HttpClient + Sync> PronounDbClient<C> {
    /// Fetch raw pronoun sets for any number of accounts.
    ///
    /// IDs are sent in batches of [`BULK_LOOKUP_ID_LIMIT`]. If a batch fails
    /// no further batches are requested, and the error carries whatever the
    /// earlier batches returned. An empty ID list makes no request.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(platform = %platform, ids = ids.len())))]
    pub async fn lookup_raw<S: AsRef<str> + Sync>(
        &self,
        platform: Platform,
        ids: &[S],
    ) -> Result<RawBulk, BulkLookupError<RawBulk>> {
        let mut out = RawBulk::new();

        for batch in ids.chunks(BULK_LOOKUP_ID_LIMIT) {
            #[cfg(feature = "tracing")]
            tracing::debug!(size = batch.len(), fetched = out.len(), "fetching lookup batch");

            match self.fetch_batch(platform, batch).await {
                Ok(users) => out.extend(users),
                Err(source) => {
                    #[cfg(feature = "tracing")]
                    {
                        if let LookupError::RateLimited { retry_after } = &source {
                            tracing::warn!(?retry_after, "rate limited by pronoundb");
                        }
                    }
                    return Err(BulkLookupError {
                        partial: out,
                        source,
                    });
                }
            }
        }

        Ok(out)
    }

    /// Look up the pronoun of each account.
    ///
    /// Accounts PronounDB doesn't know, or that have no English set, are not
    /// in the map. Codes are normalized, so every value is usable as is.
    pub async fn lookup<S: AsRef<str> + Sync>(
        &self,
        platform: Platform,
        ids: &[S],
    ) -> Result<PronounMap, BulkLookupError<PronounMap>> {
        self.lookup_raw(platform, ids)
            .await
            .map(resolve_bulk)
            .map_err(|e| e.map_partial(resolve_bulk))
    }

    /// Look up a single account.
    ///
    /// An account without pronouns resolves to [`Pronoun::Unspecified`].
    pub async fn lookup_one(&self, platform: Platform, id: &str) -> Result<Pronoun, LookupError> {
        let mut found = self
            .lookup(platform, &[id])
            .await
            .map_err(|e| e.source)?;
        Ok(found.remove(id).unwrap_or_default())
    }

    async fn fetch_batch<S: AsRef<str>>(
        &self,
        platform: Platform,
        batch: &[S],
    ) -> Result<RawBulk, LookupError> {
        let request = build_lookup_request(&self.opts, platform, batch)?;
        let response = self
            .http
            .send_http(request)
            .await
            .map_err(C::transport_error)?;
        process_response(response)
    }
}
