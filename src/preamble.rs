//! The preamble skipper (§4.3): locates where the first recognized
//! `--boundary` line begins, discarding everything before it.

use crate::buf::{self, CR, LF};
use twoway::find_bytes;

/// Returns the byte offset immediately after the matched `--boundary`
/// marker, or `None` if no boundary has appeared in `buf` yet.
///
/// A buffer that is merely too short and a buffer that genuinely has no
/// boundary in it are indistinguishable without more input, so both report
/// `None` -- the caller suspends either way and re-scans the larger buffer
/// on resume. The spec's byte-by-byte scan is replaced here with a memmem
/// search (`twoway`), which the design notes explicitly permit as long as
/// suspension semantics are preserved; correctness is unaffected since the
/// search always runs over the *entire* buffered-so-far preamble.
pub(crate) fn find_boundary_start(buf: &[u8], marker: &[u8]) -> Option<usize> {
    if buf::starts_with(buf, marker) {
        return Some(marker.len());
    }

    let mut needle = Vec::with_capacity(marker.len() + 2);
    needle.push(CR);
    needle.push(LF);
    needle.extend_from_slice(marker);

    find_bytes(buf, &needle).map(|pos| pos + needle.len())
}
