//! Resource record types and their wire encodings.

mod name;
mod record;
mod ttl;

pub use self::name::WireName;
pub use self::record::{LocationTag, RecordType, ResourceRecord};
pub use self::ttl::{TimeToDie, TimeToLive};
