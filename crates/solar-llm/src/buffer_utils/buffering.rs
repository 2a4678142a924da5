use std::collections::VecDeque;

/// Circular buffer for line-based parsing of a chunked body
///
/// Chunks may split a line anywhere; bytes are held until a `\n` arrives
/// or the body ends.
pub struct CircularLineBuffer {
    buffer: VecDeque<u8>,
}

impl CircularLineBuffer {
    /// Create a new buffer with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Add bytes to the buffer
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes);
    }

    /// Extract next complete line (up to `\n`), trimmed.
    /// Returns None if no complete line is available.
    ///
    /// Lines that are not valid UTF-8 come back as `Some(None)`.
    pub fn next_line(&mut self) -> Option<Option<String>> {
        let newline_pos = self.buffer.iter().position(|&b| b == b'\n')?;
        let line_bytes: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
        Some(decode(line_bytes))
    }

    /// Drain whatever is left once the body has ended
    pub fn finish(&mut self) -> Option<Option<String>> {
        if self.buffer.is_empty() {
            return None;
        }
        let rest: Vec<u8> = self.buffer.drain(..).collect();
        Some(decode(rest))
    }

    /// Current buffer size
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

fn decode(bytes: Vec<u8>) -> Option<String> {
    match String::from_utf8(bytes) {
        Ok(line) => Some(line.trim().to_string()),
        Err(e) => {
            tracing::trace!(error = %e, "skipping line with invalid UTF-8");
            None
        }
    }
}
