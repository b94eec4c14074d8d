/// Browser user agent sent by default. The API has been seen to treat
/// non-browser agents differently, so this stays the default but can be
/// replaced through [`ClientConfig::with_user_agent`](crate::ClientConfig::with_user_agent).
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";
