/// Mutable byte offset threaded through one encode or one decode pass.
///
/// Owned exclusively by the pass that created it; monotonically increasing;
/// never a concurrency primitive. A caller reading several successive values
/// out of one buffer threads the same cursor across the decode calls.
#[derive(Default, Debug)]
pub struct Cursor(usize);

impl Cursor {
    pub fn new() -> Self {
        Self(0)
    }

    /// Returns the pre-advance offset, then moves the offset forward by `n`.
    pub fn advance(&mut self, n: usize) -> usize {
        let at = self.0;
        self.0 += n;
        at
    }

    pub fn position(&self) -> usize {
        self.0
    }
}
