use std::str::Utf8Error;

/// In-memory accumulator for one response body.
///
/// Owned by exactly one in-flight request: the executor takes it by `&mut`,
/// so nothing can read it (or write it concurrently) until the transfer is
/// over. Appends are amortized O(1).
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    bytes: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one inbound chunk, returning the number of bytes taken.
    pub fn write_chunk(&mut self, chunk: &[u8]) -> usize {
        self.bytes.extend_from_slice(chunk);
        chunk.len()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// View the accumulated body as text.
    pub fn as_text(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }
}
