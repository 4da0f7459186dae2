//! Static API credentials.

use std::fmt;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api-key";
/// Header carrying the public key.
pub const PUBLIC_KEY_HEADER: &str = "public-key";
/// Header carrying the secret key.
pub const SECRET_KEY_HEADER: &str = "secret-key";

/// The three keys VTpass issues to a merchant account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    public_key: String,
    secret_key: String,
}

impl Credentials {
    /// Create a credential set.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The public key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The secret key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Build the header set attached to every request.
    #[must_use]
    pub fn auth_headers(&self) -> AuthHeaders {
        AuthHeaders(vec![
            (API_KEY_HEADER, self.api_key.clone()),
            (PUBLIC_KEY_HEADER, self.public_key.clone()),
            (SECRET_KEY_HEADER, self.secret_key.clone()),
        ])
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("public_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Credential headers as name/value pairs, in a fixed order.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders(Vec<(&'static str, String)>);

impl AuthHeaders {
    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Look up a header value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|(name, _)| name))
            .finish()
    }
}
