//! Trivial surface (§4.6): the URI scheme enum.

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

/// Case-insensitive over `http`/`https`; anything else fails.
pub fn scheme_from_string(text: &str) -> Result<Scheme, Error> {
    match text.to_ascii_lowercase().as_str() {
        "http" => Ok(Scheme::Http),
        "https" => Ok(Scheme::Https),
        _ => Err(Error::UnknownScheme),
    }
}

pub fn scheme_to_string(scheme: Scheme) -> &'static str {
    match scheme {
        Scheme::Http => "http",
        Scheme::Https => "https",
    }
}
