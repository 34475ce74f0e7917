use crate::chat_client::ResponseBuffer;

/// **VALUE**: Verifies chunked writes concatenate regardless of boundaries.
///
/// **WHY THIS MATTERS**: The transport hands over the body in arbitrary slices. The
/// envelope parser must see one contiguous document.
///
/// **BUG THIS CATCHES**: Would catch a write that overwrites instead of appending.
#[test]
fn given_three_chunks_when_written_then_buffer_holds_concatenation() {
    // GIVEN: An empty buffer
    let mut buffer = ResponseBuffer::new();
    assert!(buffer.is_empty());

    // WHEN: Writing "ab", "cd", "ef"
    for chunk in ["ab", "cd", "ef"] {
        let written = buffer.write_chunk(chunk.as_bytes());
        assert_eq!(written, 2);
    }

    // THEN: Content is "abcdef", length 6
    assert_eq!(buffer.as_text().unwrap(), "abcdef");
    assert_eq!(buffer.len(), 6);
}

#[test]
fn given_many_single_byte_chunks_when_written_then_length_tracks_total() {
    let mut buffer = ResponseBuffer::new();
    let body = br#"{"choices":[]}"#;

    for byte in body {
        buffer.write_chunk(std::slice::from_ref(byte));
    }

    assert_eq!(buffer.len(), body.len());
    assert_eq!(buffer.as_bytes(), body);
}

#[test]
fn given_empty_chunk_when_written_then_buffer_unchanged() {
    let mut buffer = ResponseBuffer::new();
    buffer.write_chunk(b"abc");

    assert_eq!(buffer.write_chunk(b""), 0);
    assert_eq!(buffer.len(), 3);
}

#[test]
fn given_split_multibyte_character_when_reassembled_then_text_is_valid() {
    // GIVEN: "é" split across two chunks
    let bytes = "é".as_bytes();
    let mut buffer = ResponseBuffer::new();

    // WHEN: Writing each half separately
    buffer.write_chunk(&bytes[..1]);
    buffer.write_chunk(&bytes[1..]);

    // THEN: The whole buffer decodes
    assert_eq!(buffer.as_text().unwrap(), "é");
}

#[test]
fn given_invalid_utf8_when_read_as_text_then_returns_error() {
    let mut buffer = ResponseBuffer::new();
    buffer.write_chunk(&[0xff, 0xfe]);

    assert!(buffer.as_text().is_err());
}
