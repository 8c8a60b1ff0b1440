use crate::error::Error;
use std::fmt;
use std::sync::Arc;

/// A suspended parse, per §4.1: given non-empty `extra` bytes, resumes
/// parsing as though the caller had originally supplied `existing ++ extra`.
///
/// Calling `resume` with an empty buffer is always a failure, never a panic
/// -- the caller is expected to hold off until more bytes genuinely arrive.
/// `Continuation` is cheap to clone (it's an `Arc` around the boxed closure)
/// so a caller may fan a single suspended parse out to multiple retry paths
/// if that's useful; the closure itself is `Fn`, not `FnMut`, so repeated
/// calls with identical input are guaranteed to produce identical output.
pub struct Continuation<T> {
    resume: Arc<dyn Fn(&[u8]) -> Result<T, Error> + Send + Sync>,
}

impl<T> Continuation<T> {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&[u8]) -> Result<T, Error> + Send + Sync + 'static,
    {
        Continuation { resume: Arc::new(f) }
    }

    /// Feeds more bytes to a suspended parse. `extra` must be non-empty.
    pub fn resume(&self, extra: &[u8]) -> Result<T, Error> {
        if extra.is_empty() {
            return Err(Error::EmptyContinuation);
        }
        (self.resume)(extra)
    }
}

impl<T> Clone for Continuation<T> {
    fn clone(&self) -> Self {
        Continuation {
            resume: Arc::clone(&self.resume),
        }
    }
}

impl<T> fmt::Debug for Continuation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Continuation(..)")
    }
}
