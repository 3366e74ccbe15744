use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use super::name::WireName;
use super::ttl::{TimeToDie, TimeToLive};
use crate::codec;
use crate::error::CompileError;

/// DNS record type code.
///
/// TXT and AAAA are declared alongside A because the value layout is
/// type-agnostic, but only A records have a line parser wired up today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordType(u16);

impl RecordType {
    pub const A: RecordType = RecordType(1);
    pub const TXT: RecordType = RecordType(16);
    pub const AAAA: RecordType = RecordType(28);

    pub fn code(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RecordType::A => write!(f, "A"),
            RecordType::TXT => write!(f, "TXT"),
            RecordType::AAAA => write!(f, "AAAA"),
            RecordType(code) => write!(f, "TYPE{code}"),
        }
    }
}

/// Two-byte location code selecting geo-targeted records, an extension
/// beyond plain DNS semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationTag([u8; 2]);

impl LocationTag {
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl TryFrom<&str> for LocationTag {
    type Error = CompileError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.is_ascii() {
            return Err(CompileError::BadLocationTag(value.to_string()));
        }
        let tag: [u8; 2] = value
            .as_bytes()
            .try_into()
            .map_err(|_| CompileError::BadLocationTag(value.to_string()))?;
        Ok(LocationTag(tag))
    }
}

impl fmt::Display for LocationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

/// One resource record, assembled from a resolved input line and consumed
/// immediately into a cdb key/value pair.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    name: WireName,
    rtype: RecordType,
    location: Option<LocationTag>,
    ttl: TimeToLive,
    ttd: TimeToDie,
    payload: Bytes,
}

impl ResourceRecord {
    pub fn new(
        name: WireName,
        rtype: RecordType,
        location: Option<LocationTag>,
        ttl: TimeToLive,
        ttd: TimeToDie,
        payload: Bytes,
    ) -> Self {
        ResourceRecord {
            name,
            rtype,
            location,
            ttl,
            ttd,
            payload,
        }
    }

    pub fn name(&self) -> &WireName {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.rtype
    }

    pub fn location(&self) -> Option<LocationTag> {
        self.location
    }

    pub fn ttl(&self) -> TimeToLive {
        self.ttl
    }

    pub fn ttd(&self) -> TimeToDie {
        self.ttd
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The cdb key: the owner name in wire format.
    pub fn cdb_key(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// The cdb value: `type(2)` then a separator byte (`=` without a
    /// location tag, `>` with one, followed by the two tag bytes), then
    /// `ttl(4)`, `ttd(8)`, and the type-specific payload.
    pub fn cdb_value(&self) -> Bytes {
        let mut value = BytesMut::with_capacity(15 + 2 + self.payload.len());
        codec::put_u16(&mut value, self.rtype.code());
        match self.location {
            None => value.put_u8(b'='),
            Some(tag) => {
                value.put_u8(b'>');
                value.put_slice(tag.as_bytes());
            }
        }
        codec::put_u32(&mut value, self.ttl.as_secs());
        codec::put_u64(&mut value, self.ttd.timestamp());
        value.put_slice(&self.payload);
        value.freeze()
    }
}
