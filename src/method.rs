//! Trivial surface (§4.6): the nine standard HTTP verbs, plus an `Other`
//! variant retained for forward compatibility (see DESIGN.md for why
//! `parse_method` never produces it, per source fidelity).

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
    Other(String),
}

/// Case-insensitive over the nine standard verbs; anything else fails.
pub fn parse_method(text: &str) -> Result<Method, Error> {
    match text.to_ascii_lowercase().as_str() {
        "connect" => Ok(Method::Connect),
        "delete" => Ok(Method::Delete),
        "get" => Ok(Method::Get),
        "head" => Ok(Method::Head),
        "options" => Ok(Method::Options),
        "patch" => Ok(Method::Patch),
        "post" => Ok(Method::Post),
        "put" => Ok(Method::Put),
        "trace" => Ok(Method::Trace),
        _ => Err(Error::UnknownMethod),
    }
}

pub fn method_to_string(method: &Method) -> String {
    match method {
        Method::Connect => "connect".to_string(),
        Method::Delete => "delete".to_string(),
        Method::Get => "get".to_string(),
        Method::Head => "head".to_string(),
        Method::Options => "options".to_string(),
        Method::Patch => "patch".to_string(),
        Method::Post => "post".to_string(),
        Method::Put => "put".to_string(),
        Method::Trace => "trace".to_string(),
        Method::Other(s) => s.clone(),
    }
}
