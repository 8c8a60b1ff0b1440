//! Header-block parser (§4.2): after a recognized boundary line, consumes a
//! CRLF-terminated header block into an ordered list of (name, value) pairs.

use crate::buf::{self, COLON, CR, LF};
use crate::continuation::Continuation;
use crate::error::Error;
use crate::preamble;
use bytes::{Bytes, BytesMut};
use std::sync::Arc;

/// A single parsed header. `name` is always lowercased; `value` preserves
/// original casing, with folded continuations joined by a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    fn new(name: String, value: String) -> Self {
        Header { name, value }
    }
}

/// Result of [`parse_multipart_headers`].
#[derive(Debug)]
pub enum MultipartHeaders {
    Complete {
        headers: Vec<Header>,
        remaining: Bytes,
    },
    NeedMore(Continuation<MultipartHeaders>),
}

#[cfg(test)]
impl PartialEq for MultipartHeaders {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                MultipartHeaders::Complete { headers, remaining },
                MultipartHeaders::Complete {
                    headers: h2,
                    remaining: r2,
                },
            ) => headers == h2 && remaining == r2,
            (MultipartHeaders::NeedMore(_), MultipartHeaders::NeedMore(_)) => true,
            _ => false,
        }
    }
}

/// Parses the header block following a multipart boundary.
///
/// `bytes` may begin with an arbitrary preamble; the first recognized
/// `--boundary` line is located and everything before it is discarded. If
/// the boundary's immediate closing form (`--boundary--`) is found instead
/// of a header block, an empty header list is returned per §4.2.
pub fn parse_multipart_headers(bytes: &[u8], boundary: &str) -> Result<MultipartHeaders, Error> {
    parse_from(Bytes::copy_from_slice(bytes), Arc::from(boundary))
}

fn parse_from(buf: Bytes, boundary: Arc<str>) -> Result<MultipartHeaders, Error> {
    match step(&buf, &boundary) {
        Step::Complete(headers, remaining_start) => Ok(MultipartHeaders::Complete {
            headers,
            remaining: buf.slice(remaining_start..),
        }),
        Step::NeedMore => Ok(MultipartHeaders::NeedMore(continuation(buf, boundary))),
        Step::Fail(e) => Err(e),
    }
}

fn continuation(existing: Bytes, boundary: Arc<str>) -> Continuation<MultipartHeaders> {
    Continuation::new(move |extra: &[u8]| {
        log::trace!("resuming header parse with {} extra bytes", extra.len());
        let mut combined = BytesMut::with_capacity(existing.len() + extra.len());
        combined.extend_from_slice(&existing);
        combined.extend_from_slice(extra);
        parse_from(combined.freeze(), boundary.clone())
    })
}

enum Step {
    Complete(Vec<Header>, usize),
    NeedMore,
    Fail(Error),
}

fn step(buf: &[u8], boundary: &str) -> Step {
    let marker = buf::boundary_marker(boundary);

    let after_marker = match preamble::find_boundary_start(buf, &marker) {
        Some(pos) => pos,
        None => return Step::NeedMore,
    };

    if buf.len() < after_marker + 2 {
        return Step::NeedMore;
    }

    let after_boundary = &buf[after_marker..after_marker + 2];
    if after_boundary == buf::DASHDASH {
        log::trace!("terminal boundary reached while reading headers");
        return Step::Complete(Vec::new(), after_marker + 2);
    }
    if after_boundary != buf::CRLF {
        return Step::Fail(Error::UnexpectedByteAfterBoundary);
    }

    parse_header_lines(buf, after_marker + 2)
}

fn parse_header_lines(buf: &[u8], start: usize) -> Step {
    if buf.len() - start < 2 {
        return Step::NeedMore;
    }

    if &buf[start..start + 2] == buf::CRLF {
        log::trace!("header block is empty");
        return Step::Complete(Vec::new(), start + 2);
    }

    let mut headers = Vec::new();
    let mut cursor = start;

    loop {
        match parse_one_header(buf, cursor) {
            HeaderStep::Committed {
                header,
                next_cursor,
                end_of_headers,
            } => {
                headers.push(header);
                cursor = next_cursor;
                if end_of_headers {
                    log::trace!("parsed {} header(s)", headers.len());
                    return Step::Complete(headers, cursor);
                }
            }
            HeaderStep::NeedMore => return Step::NeedMore,
            HeaderStep::Fail(e) => return Step::Fail(e),
        }
    }
}

enum HeaderStep {
    Committed {
        header: Header,
        next_cursor: usize,
        end_of_headers: bool,
    },
    NeedMore,
    Fail(Error),
}

/// Name loop followed by value loop, per §4.2.
fn parse_one_header(buf: &[u8], start: usize) -> HeaderStep {
    let mut i = start;

    while i < buf.len() && buf::is_space_or_tab(buf[i]) {
        i += 1;
    }
    if i >= buf.len() {
        return HeaderStep::NeedMore;
    }

    let name_start = i;
    loop {
        if i >= buf.len() {
            return HeaderStep::NeedMore;
        }
        if buf[i] == COLON {
            break;
        }
        if buf[i] == CR {
            // The line ended before a ':' was ever found.
            if i + 1 >= buf.len() {
                return HeaderStep::NeedMore;
            }
            return HeaderStep::Fail(Error::MalformedHeaderLine);
        }
        i += 1;
    }
    let name_bytes = &buf[name_start..i];
    i += 1; // consume ':'

    while i < buf.len() && buf::is_space_or_tab(buf[i]) {
        i += 1;
    }

    parse_value(buf, i, name_bytes)
}

fn parse_value(buf: &[u8], value_start: usize, name_bytes: &[u8]) -> HeaderStep {
    let mut value = Vec::new();
    let mut seg_start = value_start;
    let mut j = value_start;

    loop {
        if buf.len() - j < 4 {
            return HeaderStep::NeedMore;
        }

        if buf[j] == CR && buf[j + 1] == LF && buf[j + 2] == CR && buf[j + 3] == LF {
            value.extend_from_slice(&buf[seg_start..j]);
            return commit(name_bytes, &value, j + 4, true);
        }

        if buf[j] == CR && buf[j + 1] == LF && buf::is_space_or_tab(buf[j + 2]) {
            // Folded continuation: drop the CRLF and the first whitespace
            // octet, preserving a single separating space (§9 decision).
            value.extend_from_slice(&buf[seg_start..j]);
            value.push(buf::SP);
            j += 3;
            seg_start = j;
            continue;
        }

        if buf[j] == CR && buf[j + 1] == LF {
            value.extend_from_slice(&buf[seg_start..j]);
            return commit(name_bytes, &value, j + 2, false);
        }

        j += 1;
    }
}

fn commit(name_bytes: &[u8], value_bytes: &[u8], next_cursor: usize, end_of_headers: bool) -> HeaderStep {
    let name = match std::str::from_utf8(name_bytes) {
        Ok(s) => s.to_ascii_lowercase(),
        Err(e) => return HeaderStep::Fail(e.into()),
    };
    let value = match std::str::from_utf8(value_bytes) {
        Ok(s) => s.to_string(),
        Err(e) => return HeaderStep::Fail(e.into()),
    };

    HeaderStep::Committed {
        header: Header::new(name, value),
        next_cursor,
        end_of_headers,
    }
}
