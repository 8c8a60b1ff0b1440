//! Case-insensitive convenience lookups over an already-parsed header list,
//! grounded on the teacher's `Part::headers()` (which builds an
//! `http::HeaderMap` for the same reason) but without a dependency on the
//! `http` crate, since this crate never receives transport-layer data.

use crate::headers::Header;

pub trait HeaderListExt {
    /// The first value for a header matching `name`, case-insensitively.
    fn get(&self, name: &str) -> Option<&str>;

    /// All values for headers matching `name`, case-insensitively, in
    /// source order.
    fn get_all(&self, name: &str) -> Vec<&str>;
}

impl HeaderListExt for [Header] {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    fn get_all(&self, name: &str) -> Vec<&str> {
        self.iter()
            .filter(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
            .collect()
    }
}
