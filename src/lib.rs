//! An incremental, streaming parser for MIME multipart messages
//! (RFC 2045/2046) and the `Content-Disposition` header.
//!
//! The parser never performs I/O. Every entry point below consumes an
//! immutable byte buffer and returns either a finished result or a
//! [`Continuation`] the caller resumes once more bytes are available --
//! suitable for driving from a network reader that may hand over the
//! message in arbitrarily small pieces.
//!
//! There is no crate-level configuration: the only parameter any entry
//! point takes is the `boundary` string itself, which comes from the
//! message's own `Content-Type` header, not from deployment configuration.
//!
//! ```
//! use streamed_multipart::{parse_multipart_body, parse_multipart_headers, MultipartHeaders, MultipartBody};
//!
//! let input = b"--X\r\nA: 1\r\n\r\nbody\r\n--X--";
//! let (headers, remaining) = match parse_multipart_headers(input, "X").unwrap() {
//!     MultipartHeaders::Complete { headers, remaining } => (headers, remaining),
//!     MultipartHeaders::NeedMore(_) => panic!("expected enough input"),
//! };
//! assert_eq!(headers[0].name, "a");
//!
//! match parse_multipart_body(&remaining, "X").unwrap() {
//!     MultipartBody::Complete { chunk, done, .. } => {
//!         assert_eq!(&chunk[..], b"body");
//!         assert!(done);
//!     }
//!     MultipartBody::NeedMore { .. } => panic!("expected enough input"),
//! }
//! ```

mod error;
pub use error::Error;

mod buf;

mod continuation;
pub use continuation::Continuation;

mod preamble;

mod headers;
pub use headers::{parse_multipart_headers, Header, MultipartHeaders};

mod body;
pub use body::{parse_multipart_body, MultipartBody};

mod disposition;
pub use disposition::{parse_content_disposition, ContentDisposition};

mod header_list;
pub use header_list::HeaderListExt;

mod method;
pub use method::{method_to_string, parse_method, Method};

mod scheme;
pub use scheme::{scheme_from_string, scheme_to_string, Scheme};
