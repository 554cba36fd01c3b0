//! Raw credentials presented with a request.

/// The two places a session token may arrive: the session cookie and the
/// `Authorization` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Credentials<'a> {
    /// Value of the session cookie, if present.
    pub cookie: Option<&'a str>,
    /// Raw `Authorization` header value, if present.
    pub authorization: Option<&'a str>,
}

impl<'a> Credentials<'a> {
    /// Bundle raw credential sources.
    pub fn new(cookie: Option<&'a str>, authorization: Option<&'a str>) -> Self {
        Self {
            cookie,
            authorization,
        }
    }

    /// Select the token to verify.
    ///
    /// A non-empty cookie wins. Otherwise the header is split on single
    /// spaces and its second segment is taken. The scheme word is not
    /// inspected, so `Token abc` yields `abc` just like `Bearer abc`.
    pub fn token(&self) -> Option<&'a str> {
        if let Some(cookie) = self.cookie.filter(|c| !c.is_empty()) {
            return Some(cookie);
        }

        self.authorization
            .and_then(|header| header.split(' ').nth(1))
            .filter(|token| !token.is_empty())
    }
}
