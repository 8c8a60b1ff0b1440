//! Body parser (§4.4): consumes bytes of a part body up to the next
//! boundary, signalling whether the message is complete.

use crate::buf::{self, CR, LF};
use crate::continuation::Continuation;
use crate::error::Error;
use bytes::{Bytes, BytesMut};
use std::sync::Arc;

/// Result of [`parse_multipart_body`].
#[derive(Debug)]
pub enum MultipartBody {
    Complete {
        chunk: Bytes,
        done: bool,
        remaining: Bytes,
    },
    NeedMore {
        chunk: Bytes,
        resume: Continuation<MultipartBody>,
    },
}

#[cfg(test)]
impl PartialEq for MultipartBody {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                MultipartBody::Complete {
                    chunk,
                    done,
                    remaining,
                },
                MultipartBody::Complete {
                    chunk: c2,
                    done: d2,
                    remaining: r2,
                },
            ) => chunk == c2 && done == d2 && remaining == r2,
            (MultipartBody::NeedMore { chunk, .. }, MultipartBody::NeedMore { chunk: c2, .. }) => {
                chunk == c2
            }
            _ => false,
        }
    }
}

/// Parses a part's body, starting at the first byte after its header block.
pub fn parse_multipart_body(bytes: &[u8], boundary: &str) -> Result<MultipartBody, Error> {
    parse_from(Bytes::copy_from_slice(bytes), Arc::from(boundary))
}

fn parse_from(buf: Bytes, boundary: Arc<str>) -> Result<MultipartBody, Error> {
    let marker = buf::boundary_marker(&boundary);

    if buf::starts_with(&buf, &marker) {
        log::trace!("body is empty; buffer already at the boundary");
        return Ok(MultipartBody::Complete {
            chunk: Bytes::new(),
            done: false,
            remaining: buf,
        });
    }

    // The shortest suffix that lets us decide is CRLF + marker + 2, i.e.
    // `marker.len() + 4` bytes ahead of the scan cursor (see spec §4.4).
    let threshold = marker.len() + 4;
    let mut cursor = 0usize;

    loop {
        let remaining = buf.len() - cursor;
        if remaining < threshold {
            log::trace!("body needs more input, {} byte(s) confirmed so far", cursor);
            let chunk = buf.slice(0..cursor);
            let tail = buf.slice(cursor..);
            return Ok(MultipartBody::NeedMore {
                chunk,
                resume: continuation(tail, boundary),
            });
        }

        if buf[cursor] == CR
            && buf[cursor + 1] == LF
            && &buf[cursor + 2..cursor + 2 + marker.len()] == marker.as_slice()
        {
            let after = cursor + 2 + marker.len();
            let after_marker = &buf[after..after + 2];

            if after_marker == buf::CRLF {
                log::trace!("next part boundary found at offset {}", cursor);
                return Ok(MultipartBody::Complete {
                    chunk: buf.slice(0..cursor),
                    done: false,
                    remaining: buf.slice(cursor + 2..),
                });
            }
            if after_marker == buf::DASHDASH {
                log::trace!("terminal boundary found at offset {}", cursor);
                return Ok(MultipartBody::Complete {
                    chunk: buf.slice(0..cursor),
                    done: true,
                    remaining: buf.slice(after + 2..),
                });
            }

            // CRLF followed by the marker text but not by a real delimiter
            // tail; it was body content, not a boundary.
            cursor += 2;
            continue;
        }

        cursor += 1;
    }
}

fn continuation(tail: Bytes, boundary: Arc<str>) -> Continuation<MultipartBody> {
    Continuation::new(move |extra: &[u8]| {
        log::trace!("resuming body parse with {} extra bytes", extra.len());
        let mut combined = BytesMut::with_capacity(tail.len() + extra.len());
        combined.extend_from_slice(&tail);
        combined.extend_from_slice(extra);
        parse_from(combined.freeze(), boundary.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(result: Result<MultipartBody, Error>) -> (Bytes, bool, Bytes) {
        match result.expect("parse failed") {
            MultipartBody::Complete {
                chunk,
                done,
                remaining,
            } => (chunk, done, remaining),
            MultipartBody::NeedMore { .. } => panic!("expected Complete, got NeedMore"),
        }
    }

    #[test]
    fn single_part_terminal_boundary() {
        let input = b"body\r\n--X--";
        let (chunk, done, remaining) = complete(parse_multipart_body(input, "X"));
        assert_eq!(&chunk[..], b"body");
        assert!(done);
        assert_eq!(&remaining[..], b"");
    }

    #[test]
    fn intermediate_boundary_is_not_done() {
        let input = b"first\r\n--X\r\nmore headers follow";
        let (chunk, done, remaining) = complete(parse_multipart_body(input, "X"));
        assert_eq!(&chunk[..], b"first");
        assert!(!done);
        assert_eq!(&remaining[..], b"--X\r\nmore headers follow");
    }

    #[test]
    fn empty_body() {
        let input = b"--X--epilogue";
        let (chunk, done, remaining) = complete(parse_multipart_body(input, "X"));
        assert_eq!(&chunk[..], b"");
        assert!(done);
        assert_eq!(&remaining[..], b"epilogue");
    }

    #[test]
    fn chunk_never_contains_the_boundary() {
        let input = b"part body text\r\n--X--";
        let (chunk, _, _) = complete(parse_multipart_body(input, "X"));
        assert!(twoway::find_bytes(&chunk, b"\r\n--X").is_none());
    }

    #[test]
    fn embedded_dashdash_not_matching_boundary_is_kept_as_body() {
        // "--X" here isn't preceded by CRLF at a position this scan
        // recognizes as a delimiter start, so it stays part of the body.
        let input = b"value--Xish\r\n--X--";
        let (chunk, done, _) = complete(parse_multipart_body(input, "X"));
        assert_eq!(&chunk[..], b"value--Xish");
        assert!(done);
    }

    #[test]
    fn crlf_followed_by_non_boundary_text_stays_in_body() {
        let input = b"line one\r\nline two\r\n--X--";
        let (chunk, done, _) = complete(parse_multipart_body(input, "X"));
        assert_eq!(&chunk[..], b"line one\r\nline two");
        assert!(done);
    }

    #[test]
    fn byte_at_a_time_matches_single_shot() {
        let input: &[u8] = b"hello world\r\n--X--trailer";
        let mut result = parse_multipart_body(&input[..1], "X").unwrap();
        let mut fed = 1;
        let mut full_chunk = Vec::new();
        let (done, remaining) = loop {
            match result {
                MultipartBody::Complete {
                    chunk,
                    done,
                    remaining,
                } => {
                    full_chunk.extend_from_slice(&chunk);
                    break (done, remaining);
                }
                MultipartBody::NeedMore { chunk, resume } => {
                    full_chunk.extend_from_slice(&chunk);
                    let next_byte = &input[fed..fed + 1];
                    fed += 1;
                    result = resume.resume(next_byte).unwrap();
                }
            }
        };
        assert_eq!(full_chunk, b"hello world");
        assert!(done);
        assert_eq!(&remaining[..], b"trailer");
    }

    #[test]
    fn continuation_rejects_empty_resume() {
        let result = parse_multipart_body(b"x", "boundarythatislong").unwrap();
        match result {
            MultipartBody::NeedMore { resume, .. } => match resume.resume(&[]) {
                Err(Error::EmptyContinuation) => {}
                other => panic!("expected EmptyContinuation, got {:?}", other),
            },
            _ => panic!("expected NeedMore"),
        }
    }
}
