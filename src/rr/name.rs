use std::fmt;
use std::str::FromStr;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::CompileError;

/// A domain name in uncompressed DNS wire format: each label as a length
/// byte followed by its bytes, terminated by the zero-length root label.
///
/// Built from dotted text with a purely lexical split on `.` — no trimming,
/// no case folding, no escape handling. Labels must be ASCII and between 1
/// and 255 bytes, so the empty name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireName(Bytes);

impl WireName {
    pub fn from_dotted(name: &str) -> Result<Self, CompileError> {
        let mut wire = BytesMut::new();
        for label in name.split('.') {
            if !label.is_ascii() {
                return Err(CompileError::Encoding(label.to_string()));
            }
            let len = label.len();
            if len == 0 || len > 255 {
                return Err(CompileError::LabelLength(len));
            }
            wire.put_u8(len as u8);
            wire.put_slice(label.as_bytes());
        }
        wire.put_u8(0);
        Ok(WireName(wire.freeze()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the wire form back into its label strings.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        let mut rest = &self.0[..];
        loop {
            let len = rest[0] as usize;
            if len == 0 {
                break;
            }
            labels.push(String::from_utf8_lossy(&rest[1..=len]).into_owned());
            rest = &rest[len + 1..];
        }
        labels
    }
}

impl fmt::Display for WireName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().join("."))
    }
}

impl FromStr for WireName {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WireName::from_dotted(s)
    }
}

impl From<WireName> for Bytes {
    fn from(value: WireName) -> Self {
        value.0
    }
}
