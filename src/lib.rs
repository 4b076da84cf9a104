/// Rowscope - Container File Record Viewer
///
/// A record viewer for large container files: decoded records are held in a
/// caller-owned store, narrowed with ad-hoc filter expressions and paged
/// through with bounded memory. Decoding and rendering live behind small
/// boundaries so the core stays a pure interpreter plus a view-model.

pub mod value;
pub mod filter;
pub mod store;
pub mod decode;

pub use value::Value;
pub use filter::{compare, matches, parse, CompareOp, Predicate};
pub use store::{PageView, RecordStore, DEFAULT_PAGE_SIZE};
pub use decode::{DecodedFile, Decoder, FieldDescriptor, FileMeta, JsonDecoder};

// HTTP viewer modules - only when server feature is enabled
#[cfg(feature = "server")]
pub mod messages;
#[cfg(feature = "server")]
pub mod server;
