//! Framing for the cdbmake input stream.
//!
//! A cdb builder consumes records of the form `+klen,vlen:key->value\n`
//! followed by one blank line marking end-of-input. The length prefixes make
//! the framing binary-safe; key and value bytes are never escaped.

use std::io::{self, Write};

use bytes::{BufMut, Bytes, BytesMut};

/// Frame one key/value pair as a cdbmake input record.
pub fn frame_record(key: &[u8], value: &[u8]) -> Bytes {
    let mut frame = BytesMut::with_capacity(key.len() + value.len() + 32);
    frame.put_slice(format!("+{},{}:", key.len(), value.len()).as_bytes());
    frame.put_slice(key);
    frame.put_slice(b"->");
    frame.put_slice(value);
    frame.put_u8(b'\n');
    frame.freeze()
}

/// The terminator the builder expects after the last record.
pub fn end_of_stream() -> Bytes {
    Bytes::from_static(b"\n")
}

pub fn write_record(sink: &mut impl Write, key: &[u8], value: &[u8]) -> io::Result<()> {
    sink.write_all(&frame_record(key, value))
}

pub fn finish(sink: &mut impl Write) -> io::Result<()> {
    sink.write_all(&end_of_stream())?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let frame = frame_record(b"key", b"value");
        assert_eq!(&frame[..], b"+3,5:key->value\n");
    }

    #[test]
    fn test_frame_is_binary_safe() {
        let key = [0x00, 0xff, b'\n'];
        let value = [b'-', b'>', 0x00];
        let frame = frame_record(&key, &value);
        assert_eq!(&frame[..5], b"+3,3:");
        assert_eq!(&frame[5..8], &key);
        assert_eq!(&frame[8..10], b"->");
        assert_eq!(&frame[10..13], &value);
        assert_eq!(frame[13], b'\n');
        assert_eq!(frame.len(), 14);
    }

    #[test]
    fn test_end_of_stream() {
        assert_eq!(&end_of_stream()[..], b"\n");
    }

    #[test]
    fn test_write_record_and_finish() {
        let mut sink = Vec::new();
        write_record(&mut sink, b"k", b"v").unwrap();
        finish(&mut sink).unwrap();
        assert_eq!(sink, b"+1,1:k->v\n\n");
    }
}
