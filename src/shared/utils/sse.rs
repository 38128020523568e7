//! Incremental reader for `text/event-stream` responses.
//!
//! The AI endpoints answer with SSE-style frames:
//!
//! ```text
//! event: message
//! data: some text
//!
//! ```
//!
//! Chunks arrive from the transport with arbitrary boundaries - mid-line,
//! mid-field, even mid-character - so the reader buffers undecoded bytes and
//! unterminated text between `feed` calls. Frame payloads are handed to the
//! caller strictly in the order their terminating blank line was seen.

use crate::shared::errors::StreamError;

/// UTF-8 decoder that carries an incomplete trailing multi-byte sequence
/// over to the next chunk instead of failing on it.
#[derive(Debug, Default)]
struct Utf8Carry {
    pending: Vec<u8>,
}

impl Utf8Carry {
    /// Decode `chunk` (prefixed with any carried bytes) into `out`.
    ///
    /// A truncated sequence at the end of the input is held back; a sequence
    /// that can never become valid is a hard error.
    fn decode(&mut self, chunk: &[u8], out: &mut String) -> Result<(), StreamError> {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        match std::str::from_utf8(&bytes) {
            Ok(text) => out.push_str(text),
            Err(err) => {
                let valid = err.valid_up_to();
                if err.error_len().is_some() {
                    return Err(StreamError::Decode(valid));
                }
                // from_utf8_lossy on an already-validated prefix allocates
                // nothing and replaces nothing.
                out.push_str(&String::from_utf8_lossy(&bytes[..valid]));
                self.pending = bytes[valid..].to_vec();
            }
        }
        Ok(())
    }

    /// End of stream: bytes still pending can never complete.
    fn finish(&mut self) -> Result<(), StreamError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(StreamError::Decode(0))
        }
    }
}

/// One parsed frame block: optional event type plus joined `data:` lines.
fn parse_frame_block(block: &str) -> Result<Option<String>, StreamError> {
    let mut event_type: Option<&str> = None;
    let mut data_lines: Vec<&str> = Vec::new();

    for raw in block.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("event:") {
            event_type = Some(rest.trim());
        } else if let Some(rest) = line.strip_prefix("data:") {
            // Both `data:` and `data: ` are emitted in the wild; strip at
            // most one leading space so payload-internal spaces survive.
            data_lines.push(rest.strip_prefix(' ').unwrap_or(rest));
        }
        // Unrecognized fields (id:, retry:, comments) are ignored.
    }

    let payload = data_lines.join("\n");
    if payload.is_empty() {
        // Heartbeat / comment-only frames carry no payload and are dropped,
        // even when tagged `event: error`.
        return Ok(None);
    }
    if event_type == Some("error") {
        return Err(StreamError::ErrorEvent(payload));
    }
    Ok(Some(payload))
}

/// Find the next frame terminator (a blank line: `\n\n`, `\n\r\n`,
/// `\r\n\r\n`, ...). Returns (end of block, start of next frame).
fn find_frame_boundary(buf: &str) -> Option<(usize, usize)> {
    let bytes = buf.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let mut j = i + 1;
            if j < bytes.len() && bytes[j] == b'\r' {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'\n' {
                return Some((i, j + 1));
            }
        }
        i += 1;
    }
    None
}

/// Streaming SSE frame reader.
///
/// Owned by a single stream invocation; feed it chunks as they arrive and
/// call [`SseFrameReader::finish`] when the transport reports completion.
/// No state survives the invocation.
#[derive(Debug, Default)]
pub struct SseFrameReader {
    decoder: Utf8Carry,
    buffer: String,
}

impl SseFrameReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of bytes.
    ///
    /// `on_payload` is invoked synchronously once per completed frame with a
    /// non-empty payload, in terminator order. An `event: error` frame stops
    /// parsing immediately: earlier frames in the same chunk have already
    /// been delivered, the error frame's payload becomes the error message,
    /// and the caller must not feed further chunks.
    pub fn feed<F>(&mut self, chunk: &[u8], on_payload: &mut F) -> Result<(), StreamError>
    where
        F: FnMut(String),
    {
        self.decoder.decode(chunk, &mut self.buffer)?;
        self.drain_complete_frames(on_payload)
    }

    /// Signal end of stream.
    ///
    /// A trailing unterminated frame (no final blank line) is parsed and
    /// dispatched like any other; pure-whitespace leftovers are discarded.
    pub fn finish<F>(mut self, on_payload: &mut F) -> Result<(), StreamError>
    where
        F: FnMut(String),
    {
        self.decoder.finish()?;
        self.drain_complete_frames(on_payload)?;
        if !self.buffer.trim().is_empty() {
            let block = std::mem::take(&mut self.buffer);
            if let Some(payload) = parse_frame_block(&block)? {
                on_payload(payload);
            }
        }
        Ok(())
    }

    fn drain_complete_frames<F>(&mut self, on_payload: &mut F) -> Result<(), StreamError>
    where
        F: FnMut(String),
    {
        while let Some((block_end, next_start)) = find_frame_boundary(&self.buffer) {
            let block: String = self.buffer[..block_end].to_string();
            self.buffer.drain(..next_start);
            if block.trim().is_empty() {
                continue;
            }
            if let Some(payload) = parse_frame_block(&block)? {
                on_payload(payload);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the reader over the given chunks, collecting payloads and the
    /// final outcome.
    fn run(chunks: &[&[u8]]) -> (Vec<String>, Result<(), StreamError>) {
        let mut payloads = Vec::new();
        let result = (|| {
            let mut reader = SseFrameReader::new();
            for chunk in chunks {
                reader.feed(chunk, &mut |p| payloads.push(p))?;
            }
            reader.finish(&mut |p| payloads.push(p))
        })();
        (payloads, result)
    }

    fn run_ok(chunks: &[&[u8]]) -> Vec<String> {
        let (payloads, result) = run(chunks);
        result.expect("stream should parse cleanly");
        payloads
    }

    #[test]
    fn single_frame_single_data_line() {
        let payloads = run_ok(&[b"event: message\ndata: hello\n\n"]);
        assert_eq!(payloads, vec!["hello"]);
    }

    #[test]
    fn frame_without_event_field_still_delivers() {
        let payloads = run_ok(&[b"data: plain\n\n"]);
        assert_eq!(payloads, vec!["plain"]);
    }

    #[test]
    fn multiple_data_lines_join_with_newline() {
        let payloads = run_ok(&[b"data: foo\ndata: bar\n\n"]);
        assert_eq!(payloads, vec!["foo\nbar"]);
    }

    #[test]
    fn back_to_back_frames_deliver_in_order() {
        let payloads = run_ok(&[b"event: message\ndata: A\n\nevent: message\ndata: B\n\n"]);
        assert_eq!(payloads, vec!["A", "B"]);
    }

    #[test]
    fn ping_frame_without_data_is_dropped() {
        let payloads = run_ok(&[b"event: ping\n\n", b"data: real\n\n"]);
        assert_eq!(payloads, vec!["real"]);
    }

    #[test]
    fn empty_payload_frame_is_dropped_silently() {
        // `data:` present but empty still joins to the empty payload.
        let payloads = run_ok(&[b"event: message\ndata:\n\n"]);
        assert!(payloads.is_empty());
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let payloads = run_ok(&[b"event: message\r\ndata: windows\r\n\r\n"]);
        assert_eq!(payloads, vec!["windows"]);
    }

    #[test]
    fn mixed_line_endings_within_one_stream() {
        let payloads = run_ok(&[b"data: one\r\n\r\ndata: two\n\n"]);
        assert_eq!(payloads, vec!["one", "two"]);
    }

    #[test]
    fn data_without_space_after_colon() {
        let payloads = run_ok(&[b"data:tight\n\n"]);
        assert_eq!(payloads, vec!["tight"]);
    }

    #[test]
    fn at_most_one_leading_space_is_stripped() {
        let payloads = run_ok(&[b"data:  indented\n\n"]);
        assert_eq!(payloads, vec![" indented"]);
    }

    #[test]
    fn unrecognized_fields_are_ignored() {
        let payloads = run_ok(&[b"id: 7\nretry: 100\ndata: kept\n\n"]);
        assert_eq!(payloads, vec!["kept"]);
    }

    #[test]
    fn unterminated_tail_is_flushed_at_end_of_stream() {
        let payloads = run_ok(&[b"data: head\n\ndata: tail"]);
        assert_eq!(payloads, vec!["head", "tail"]);
    }

    #[test]
    fn whitespace_only_tail_is_discarded() {
        let payloads = run_ok(&[b"data: head\n\n", b"\n  \n"]);
        assert_eq!(payloads, vec!["head"]);
    }

    #[test]
    fn error_frame_raises_with_payload_as_message() {
        let (payloads, result) = run(&[b"event: error\ndata: model unavailable\n\n"]);
        assert!(payloads.is_empty());
        assert_eq!(
            result,
            Err(StreamError::ErrorEvent("model unavailable".to_string()))
        );
    }

    #[test]
    fn frames_before_an_error_frame_are_still_delivered() {
        let (payloads, result) =
            run(&[b"data: early\n\nevent: error\ndata: boom\n\ndata: never\n\n"]);
        assert_eq!(payloads, vec!["early"]);
        assert_eq!(result, Err(StreamError::ErrorEvent("boom".to_string())));
    }

    #[test]
    fn error_frame_with_empty_payload_is_dropped_not_raised() {
        // Payload emptiness is checked before the event type.
        let payloads = run_ok(&[b"event: error\n\ndata: after\n\n"]);
        assert_eq!(payloads, vec!["after"]);
    }

    #[test]
    fn chunk_split_mid_line_is_invisible() {
        let payloads = run_ok(&[b"event: mes", b"sage\ndata: spl", b"it\n\n"]);
        assert_eq!(payloads, vec!["split"]);
    }

    #[test]
    fn chunk_split_between_terminator_newlines() {
        let payloads = run_ok(&[b"data: A\n", b"\ndata: B\n\n"]);
        assert_eq!(payloads, vec!["A", "B"]);
    }

    #[test]
    fn chunk_split_mid_multibyte_character() {
        let text = "data: caf\u{e9} \u{4e2d}\u{6587}\n\n".as_bytes();
        // Split inside the two-byte 'é' (bytes 0xC3 0xA9).
        let split = text.iter().position(|&b| b == 0xC3).unwrap() + 1;
        let payloads = run_ok(&[&text[..split], &text[split..]]);
        assert_eq!(payloads, vec!["caf\u{e9} \u{4e2d}\u{6587}"]);
    }

    #[test]
    fn chunking_invariance_over_every_split_point() {
        let text = "event: message\ndata: \u{4f60}\u{597d}\ndata: world\n\nevent: ping\n\ndata: tail\u{2026}"
            .as_bytes();
        let whole = run_ok(&[text]);
        for split in 0..=text.len() {
            let parts = run_ok(&[&text[..split], &text[split..]]);
            assert_eq!(parts, whole, "divergence at split {split}");
        }
    }

    #[test]
    fn chunking_invariance_byte_at_a_time() {
        let text = "data: a\r\n\r\ndata: \u{00fc}ber\ndata: zwei\n\n".as_bytes();
        let whole = run_ok(&[text]);
        let bytes: Vec<&[u8]> = text.chunks(1).collect();
        assert_eq!(run_ok(&bytes), whole);
    }

    #[test]
    fn rerun_over_same_input_is_deterministic() {
        let input: &[&[u8]] = &[b"data: one\n\nda", b"ta: two\n\n"];
        assert_eq!(run_ok(input), run_ok(input));
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let (payloads, result) = run(&[b"data: ok\n\n", &[0xFF, 0xFE]]);
        assert_eq!(payloads, vec!["ok"]);
        assert!(matches!(result, Err(StreamError::Decode(_))));
    }

    #[test]
    fn truncated_multibyte_at_end_of_stream_is_a_decode_error() {
        // First byte of a two-byte sequence, then the stream ends.
        let (payloads, result) = run(&[b"data: ok\n\n", &[0xC3]]);
        assert_eq!(payloads, vec!["ok"]);
        assert!(matches!(result, Err(StreamError::Decode(_))));
    }

    #[test]
    fn empty_stream_yields_nothing() {
        assert!(run_ok(&[]).is_empty());
        assert!(run_ok(&[b""]).is_empty());
    }
}
