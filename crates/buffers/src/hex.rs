//! Hex rendering of byte slices for diagnostics.

/// Formats a byte slice as lowercase space-separated hex, capped at `max`
/// bytes.
///
/// When the slice is longer than `max`, the output ends with a count of the
/// bytes left out.
///
/// # Example
///
/// ```
/// use shortcuts_vdf_buffers::hex_octets;
///
/// assert_eq!(hex_octets(&[0x00, 0x08, 0xff], 16), "00 08 ff");
/// assert_eq!(hex_octets(&[1, 2, 3, 4], 2), "01 02 (+2 more)");
/// assert_eq!(hex_octets(&[], 16), "");
/// ```
pub fn hex_octets(octets: &[u8], max: usize) -> String {
    use std::fmt::Write;

    let shown = octets.len().min(max);
    let mut out = String::with_capacity(shown * 3 + 12);
    for (i, byte) in octets.iter().take(shown).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02x}", byte);
    }
    if octets.len() > max {
        if shown > 0 {
            out.push(' ');
        }
        let _ = write!(out, "(+{} more)", octets.len() - max);
    }
    out
}
