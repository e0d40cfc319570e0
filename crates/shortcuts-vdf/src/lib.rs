//! Fault-tolerant decoder and encoder for Steam's binary `shortcuts.vdf`
//! registry of non-Steam shortcuts.
//!
//! The format is a tag-driven, length-implicit nesting of key/value
//! objects. [`decode_shortcuts`] (or [`ShortcutsDecoder`] with an attached
//! [`DiagnosticSink`]) turns a byte buffer into a [`Registry`] of entries,
//! tolerating the truncation and boundary noise found in real files.
//! [`ShortcutsEncoder`] produces buffers in the same format, and
//! [`registry_to_json`] bridges decoded registries to `serde_json` values.
//!
//! Callers do all file I/O; the crate only ever sees a complete in-memory
//! buffer.
//!
//! # Example
//!
//! ```
//! use shortcuts_vdf::{decode_shortcuts, PropertyValue};
//!
//! let mut data = Vec::new();
//! data.extend_from_slice(b"\x00shortcuts\x00\x00"); // header
//! data.extend_from_slice(b"0\x00"); // entry index "0"
//! data.extend_from_slice(b"\x01AppName\x00Portal\x00"); // string property
//! data.extend_from_slice(b"\x02appid\x00\x39\x30\x00\x00"); // u32 property
//! data.extend_from_slice(b"\x08\x08"); // end of entry, end of registry
//!
//! let registry = decode_shortcuts(&data).unwrap();
//! let entry = registry.get("0").unwrap();
//! assert_eq!(entry.get("AppName"), Some(&PropertyValue::Str("Portal".into())));
//! assert_eq!(entry.get("appid").unwrap().as_text(), "12345");
//! ```

mod constants;
mod convert;
mod decoder;
mod diagnostics;
mod encoder;
mod error;
mod types;

pub use constants::{END_OBJECT, ROOT_KEY, TYPE_OBJECT, TYPE_STRING, TYPE_UINT32};
pub use convert::{entry_to_json, registry_to_json};
pub use decoder::{decode_shortcuts, ShortcutsDecoder};
pub use diagnostics::{CollectingSink, DecodeEvent, DiagnosticSink};
pub use encoder::{encode_shortcuts, ShortcutsEncoder};
pub use error::DecodeError;
pub use types::{Entry, PropertyValue, Registry};
