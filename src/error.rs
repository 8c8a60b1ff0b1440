use std::{error::Error as StdError, fmt, str::Utf8Error};

/// The single failure sentinel returned by every parsing entry point.
///
/// "Need more input" is never represented by this type -- callers distinguish
/// it from failure by inspecting the result variant (`MultipartHeaders::NeedMore`,
/// `MultipartBody::NeedMore`), not by catching an error.
#[derive(Debug)]
pub enum Error {
    /// A header line had no `:` before the end of the header block.
    MalformedHeaderLine,

    /// A header name or value was not valid UTF-8 on commit.
    InvalidHeaderText(Utf8Error),

    /// The two bytes following `--boundary` were neither `\r\n` nor `--`.
    UnexpectedByteAfterBoundary,

    /// A quoted Content-Disposition parameter value had no closing `"`.
    UnterminatedQuotedValue,

    /// A Content-Disposition parameter had no `=` separating name and value.
    MissingParameterEquals,

    /// A continuation's `resume` was called with an empty buffer.
    EmptyContinuation,

    /// `parse_method` was given a token that is not one of the nine
    /// standard verbs.
    UnknownMethod,

    /// `scheme_from_string` was given anything other than `http`/`https`.
    UnknownScheme,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::MalformedHeaderLine => {
                write!(f, "header line missing ':' before end of block")
            }
            Error::InvalidHeaderText(ref e) => {
                write!(f, "header name or value is not valid UTF-8: {}", e)
            }
            Error::UnexpectedByteAfterBoundary => {
                write!(f, "boundary must be followed by \"--\" or CRLF")
            }
            Error::UnterminatedQuotedValue => {
                write!(f, "quoted Content-Disposition parameter value never closed")
            }
            Error::MissingParameterEquals => {
                write!(f, "Content-Disposition parameter missing '='")
            }
            Error::EmptyContinuation => write!(f, "continuation resumed with an empty buffer"),
            Error::UnknownMethod => write!(f, "not one of the nine standard HTTP methods"),
            Error::UnknownScheme => write!(f, "scheme is neither \"http\" nor \"https\""),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::InvalidHeaderText(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<Utf8Error> for Error {
    fn from(inner: Utf8Error) -> Self {
        Error::InvalidHeaderText(inner)
    }
}
