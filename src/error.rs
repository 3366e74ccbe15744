use std::io;
use std::num::ParseIntError;

/// Errors raised while compiling record data into the cdb stream.
///
/// Every variant is fatal to the run: the compile loop stops at the first
/// failing line, and bytes already written to the sink stay written.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("{bits} bits is not byte aligned")]
    Alignment { bits: u32 },

    #[error("value {value} does not fit in {bits} bits")]
    Range { value: u64, bits: u32 },

    #[error("non-ascii text where ascii is required: {0:?}")]
    Encoding(String),

    #[error("bad label length {0}")]
    LabelLength(usize),

    #[error("invalid IPv4 address: {0:?}")]
    InvalidAddress(String),

    #[error("bad location tag: {0:?}")]
    BadLocationTag(String),

    #[error("unrecognized record sigil {0:?}")]
    UnknownSigil(char),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid ttl: {0}")]
    InvalidTtl(#[source] ParseIntError),

    #[error("invalid ttd: {0}")]
    InvalidTtd(#[source] ParseIntError),

    #[error(transparent)]
    IO(#[from] io::Error),
}
