pub mod cdb;
pub mod codec;
pub mod compile;
pub mod error;
pub mod overlay;
pub mod rr;

pub use self::compile::{RecordKind, compile, compile_line};
pub use self::error::CompileError;
