//! Wire-level constants for the binary shortcuts format.

/// Tag byte opening a nested object; also the marker before the root key.
pub const TYPE_OBJECT: u8 = 0x00;

/// Tag byte for a null-terminated string property.
pub const TYPE_STRING: u8 = 0x01;

/// Tag byte for a little-endian unsigned 32-bit property.
pub const TYPE_UINT32: u8 = 0x02;

/// Closes the current object (an entry, a nested object, or the registry).
pub const END_OBJECT: u8 = 0x08;

/// Expected top-level key, compared case-insensitively.
pub const ROOT_KEY: &str = "shortcuts";
