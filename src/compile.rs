//! The line-to-record pipeline and its driving loop.

use std::io::{BufRead, Write};

use bytes::Bytes;
use tracing::{debug, trace};

use crate::cdb;
use crate::codec;
use crate::error::CompileError;
use crate::overlay::overlay;
use crate::rr::{LocationTag, RecordType, ResourceRecord, TimeToDie, TimeToLive, WireName};

/// Field defaults for an address line: name, address, ttl, ttd, location.
const ADDRESS_DEFAULTS: &[Option<&str>] = &[None, None, Some("86400"), Some("0"), None];

/// Record kinds dispatched by the sigil character a line starts with.
///
/// Only `+` is wired up. Adding a kind means adding a variant here, a match
/// arm in `from_sigil`, and a parser; existing kinds are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `+name:address:ttl:ttd:loc` — an IPv4 address (A) record.
    Address,
}

impl RecordKind {
    pub fn from_sigil(sigil: char) -> Option<RecordKind> {
        match sigil {
            '+' => Some(RecordKind::Address),
            _ => None,
        }
    }

    /// Parse the colon-separated fields following the sigil.
    pub fn parse(&self, rest: &str) -> Result<ResourceRecord, CompileError> {
        match self {
            RecordKind::Address => parse_address(rest),
        }
    }
}

fn parse_address(rest: &str) -> Result<ResourceRecord, CompileError> {
    let given: Vec<&str> = rest.split(':').collect();
    let fields = overlay(&given, ADDRESS_DEFAULTS);

    let name = fields[0].ok_or(CompileError::MissingField("name"))?;
    let address = fields[1].ok_or(CompileError::MissingField("address"))?;
    let ttl: TimeToLive = fields[2].ok_or(CompileError::MissingField("ttl"))?.parse()?;
    let ttd: TimeToDie = fields[3].ok_or(CompileError::MissingField("ttd"))?.parse()?;
    let location = fields[4].map(LocationTag::try_from).transpose()?;

    let payload = codec::encode_uint(parse_ipv4(address)? as u64, 32)?;
    Ok(ResourceRecord::new(
        WireName::from_dotted(name)?,
        RecordType::A,
        location,
        ttl,
        ttd,
        Bytes::from(payload),
    ))
}

/// Pack a dotted-quad address into a `u32`.
///
/// Exactly four parts, each a decimal octet in [0,255]. Out-of-range octets
/// are rejected rather than bit-packed with overflow.
fn parse_ipv4(address: &str) -> Result<u32, CompileError> {
    let mut packed = 0u32;
    let mut parts = 0usize;
    for part in address.split('.') {
        let octet: u8 = part
            .parse()
            .map_err(|_| CompileError::InvalidAddress(address.to_string()))?;
        packed = (packed << 8) | octet as u32;
        parts += 1;
    }
    if parts != 4 {
        return Err(CompileError::InvalidAddress(address.to_string()));
    }
    Ok(packed)
}

/// Compile one data line (sigil plus fields, already stripped) into a record.
pub fn compile_line(line: &str) -> Result<ResourceRecord, CompileError> {
    let Some(sigil) = line.chars().next() else {
        return Err(CompileError::MissingField("sigil"));
    };
    let kind = RecordKind::from_sigil(sigil).ok_or(CompileError::UnknownSigil(sigil))?;
    kind.parse(&line[sigil.len_utf8()..])
}

/// Compile the whole data stream: one cdb record per data line, in input
/// order, followed by the end-of-stream terminator.
///
/// Blank lines and lines starting with `#` are skipped. The first error
/// aborts the run; anything already written to the sink stays written.
pub fn compile(reader: impl BufRead, sink: &mut impl Write) -> Result<(), CompileError> {
    let mut records = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record = compile_line(line)?;
        trace!(
            line = index + 1,
            name = %record.name(),
            rtype = %record.record_type(),
            "encoded record"
        );
        cdb::write_record(sink, record.cdb_key(), &record.cdb_value())?;
        records += 1;
    }
    cdb::finish(sink)?;
    debug!(records, "record stream complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigil_dispatch() {
        assert_eq!(RecordKind::from_sigil('+'), Some(RecordKind::Address));
        assert_eq!(RecordKind::from_sigil('%'), None);
        assert!(matches!(
            compile_line("%example.com:192.0.2.1"),
            Err(CompileError::UnknownSigil('%'))
        ));
    }

    #[test]
    fn test_address_line_with_defaults() {
        let record = compile_line("+example.com:192.0.2.1").unwrap();
        assert_eq!(record.record_type(), RecordType::A);
        assert_eq!(record.ttl(), TimeToLive::from_secs(86400));
        assert_eq!(record.ttd(), TimeToDie::NEVER);
        assert_eq!(record.location(), None);
        assert_eq!(record.payload(), &[0xc0, 0x00, 0x02, 0x01]);
    }

    #[test]
    fn test_address_line_fully_given() {
        let record = compile_line("+host.example:10.0.0.1:300:ff:US").unwrap();
        assert_eq!(record.ttl(), TimeToLive::from_secs(300));
        assert_eq!(record.ttd(), TimeToDie::at(255));
        assert_eq!(record.location().unwrap().to_string(), "US");
        assert_eq!(record.payload(), &[0x0a, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_empty_middle_fields_take_defaults() {
        let record = compile_line("+host.example:10.0.0.1:::US").unwrap();
        assert_eq!(record.ttl(), TimeToLive::from_secs(86400));
        assert_eq!(record.ttd(), TimeToDie::NEVER);
        assert_eq!(record.location().unwrap().to_string(), "US");
    }

    #[test]
    fn test_missing_address_field() {
        assert!(matches!(
            compile_line("+example.com"),
            Err(CompileError::MissingField("address"))
        ));
    }

    #[test]
    fn test_ipv4_part_count() {
        assert_eq!(parse_ipv4("192.0.2.1").unwrap(), 0xc0000201);
        assert!(matches!(
            parse_ipv4("192.0.2"),
            Err(CompileError::InvalidAddress(_))
        ));
        assert!(matches!(
            parse_ipv4("192.0.2.1.5"),
            Err(CompileError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_ipv4_octet_range() {
        assert!(matches!(
            parse_ipv4("999.0.0.1"),
            Err(CompileError::InvalidAddress(_))
        ));
        assert!(matches!(
            parse_ipv4("1.2.3.x"),
            Err(CompileError::InvalidAddress(_))
        ));
        assert_eq!(parse_ipv4("255.255.255.255").unwrap(), u32::MAX);
    }
}
