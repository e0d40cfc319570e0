//! Wire-level decode/encode matrix for well-formed and degraded buffers.

use shortcuts_vdf::{
    decode_shortcuts, encode_shortcuts, Entry, PropertyValue, Registry, ShortcutsEncoder,
};

fn entry(props: &[(&str, PropertyValue)]) -> Entry {
    let mut entry = Entry::new();
    for (name, value) in props {
        entry.insert(*name, value.clone());
    }
    entry
}

fn registry(entries: &[(&str, Entry)]) -> Registry {
    let mut registry = Registry::new();
    for (index, e) in entries {
        registry.insert(*index, e.clone());
    }
    registry
}

// ---------------------------------------------------------------------------
// Well-formed buffers
// ---------------------------------------------------------------------------

#[test]
fn empty_registry_wire() {
    let registry = decode_shortcuts(b"\x00shortcuts\x00\x00\x08").unwrap();
    assert!(registry.is_empty());
    assert_eq!(encode_shortcuts(&registry), b"\x00shortcuts\x00\x00\x08");
}

#[test]
fn single_entry_decodes_exact_contents() {
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00\x00");
    data.extend_from_slice(b"0\x00");
    data.extend_from_slice(b"\x01AppName\x00Test Game\x00");
    data.extend_from_slice(b"\x02appid\x00\x39\x30\x00\x00");
    data.extend_from_slice(b"\x08\x08");

    let registry = decode_shortcuts(&data).unwrap();
    assert_eq!(registry.len(), 1);
    let entry = registry.get("0").unwrap();
    assert_eq!(entry.len(), 2);
    assert_eq!(
        entry.get("AppName"),
        Some(&PropertyValue::Str("Test Game".into()))
    );
    assert_eq!(entry.get("appid"), Some(&PropertyValue::U32(12345)));
    assert_eq!(entry.get("appid").unwrap().as_text(), "12345");
}

#[test]
fn multiple_entries_keep_wire_order() {
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00\x00");
    data.extend_from_slice(b"0\x00\x01AppName\x00First\x00\x08");
    data.extend_from_slice(b"1\x00\x01AppName\x00Second\x00\x08");
    data.extend_from_slice(b"\x08");

    let registry = decode_shortcuts(&data).unwrap();
    assert_eq!(registry.len(), 2);
    let indexes: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
    assert_eq!(indexes, ["0", "1"]);
    assert_eq!(
        registry.get("1").unwrap().get("AppName").unwrap().as_text(),
        "Second"
    );
}

#[test]
fn root_key_compare_is_case_insensitive() {
    for key in ["SHORTCUTS", "Shortcuts", "sHoRtCuTs"] {
        let mut data = vec![0x00];
        data.extend_from_slice(key.as_bytes());
        data.extend_from_slice(b"\x00\x00\x08");
        let registry = decode_shortcuts(&data).unwrap_or_else(|e| panic!("{key}: {e}"));
        assert!(registry.is_empty());
    }
}

#[test]
fn real_file_layout_single_entry_parses() {
    // Steam writes an object marker before each entry index and doubles the
    // final end marker.
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00");
    data.extend_from_slice(b"\x000\x00");
    data.extend_from_slice(b"\x01appname\x00Portal\x00");
    data.extend_from_slice(b"\x02appid\x00\x39\x30\x00\x00");
    data.extend_from_slice(b"\x08");
    data.extend_from_slice(b"\x08\x08");

    let registry = decode_shortcuts(&data).unwrap();
    assert_eq!(registry.len(), 1);
    let entry = registry.get("0").unwrap();
    assert_eq!(entry.get("appname").unwrap().as_text(), "Portal");
    assert_eq!(entry.get("appid").unwrap().as_text(), "12345");
}

#[test]
fn trailing_bytes_after_end_marker_are_ignored() {
    let mut data = b"\x00shortcuts\x00\x00\x08".to_vec();
    let clean = decode_shortcuts(&data).unwrap();
    data.extend_from_slice(b"\xde\xad\xbe\xef");
    assert_eq!(decode_shortcuts(&data).unwrap(), clean);
}

#[test]
fn repeated_index_last_write_wins() {
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00\x00");
    data.extend_from_slice(b"0\x00\x01AppName\x00Old\x00\x08");
    data.extend_from_slice(b"0\x00\x01AppName\x00New\x00\x08");
    data.extend_from_slice(b"\x08");

    let registry = decode_shortcuts(&data).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get("0").unwrap().get("AppName").unwrap().as_text(),
        "New"
    );
}

// ---------------------------------------------------------------------------
// Degraded buffers that still decode
// ---------------------------------------------------------------------------

#[test]
fn body_truncated_at_boundaries_returns_partial() {
    // complete property, then nothing: the entry ends and so does the
    // registry
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00\x00");
    data.extend_from_slice(b"0\x00\x01Exe\x00/bin/sh\x00");
    let registry = decode_shortcuts(&data).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get("0").unwrap().get("Exe").unwrap().as_text(),
        "/bin/sh"
    );

    // entry closed but the registry end marker is missing
    data.extend_from_slice(b"\x08");
    let registry = decode_shortcuts(&data).unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn unterminated_final_string_reads_to_end() {
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00\x00");
    data.extend_from_slice(b"0\x00\x01AppName\x00Cut off");
    let registry = decode_shortcuts(&data).unwrap();
    assert_eq!(
        registry.get("0").unwrap().get("AppName").unwrap().as_text(),
        "Cut off"
    );
}

#[test]
fn invalid_utf8_in_value_becomes_replacement_chars() {
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00\x00");
    data.extend_from_slice(b"0\x00\x01Exe\x00\xff\xfeok\x00\x08\x08");
    let registry = decode_shortcuts(&data).unwrap();
    assert_eq!(
        registry.get("0").unwrap().get("Exe").unwrap().as_text(),
        "\u{fffd}\u{fffd}ok"
    );
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

#[test]
fn encoder_wire_bytes_exact() {
    let mut enc = ShortcutsEncoder::new();
    let source = registry(&[(
        "0",
        entry(&[
            ("AppName", PropertyValue::Str("Test Game".into())),
            ("appid", PropertyValue::U32(12345)),
        ]),
    )]);

    let mut expected = Vec::new();
    expected.extend_from_slice(b"\x00shortcuts\x00\x00");
    expected.extend_from_slice(b"0\x00");
    expected.extend_from_slice(b"\x01AppName\x00Test Game\x00");
    expected.extend_from_slice(b"\x02appid\x00\x39\x30\x00\x00");
    expected.extend_from_slice(b"\x08\x08");
    assert_eq!(enc.encode(&source), expected);
}

#[test]
fn encode_decode_roundtrip_multi_entry() {
    let source = registry(&[
        (
            "0",
            entry(&[
                ("AppName", PropertyValue::Str("Émulateur".into())),
                ("appid", PropertyValue::U32(u32::MAX)),
            ]),
        ),
        ("1", entry(&[])),
        (
            "12",
            entry(&[("LaunchOptions", PropertyValue::Str(String::new()))]),
        ),
    ]);
    let bytes = encode_shortcuts(&source);
    assert_eq!(decode_shortcuts(&bytes).unwrap(), source);
}

#[test]
fn incremental_encoder_produces_skippable_nested_objects() {
    let mut enc = ShortcutsEncoder::new();
    enc.write_registry_open();
    enc.write_entry_open("0");
    enc.write_str("AppName", "Kept");
    enc.write_nested_open("tags");
    enc.write_str("0", "favorite");
    enc.write_end(); // nested object
    enc.write_u32("appid", 42);
    enc.write_end(); // entry
    enc.write_end(); // registry
    let bytes = enc.writer.flush();

    let registry = decode_shortcuts(&bytes).unwrap();
    let entry = registry.get("0").unwrap();
    assert_eq!(entry.len(), 2);
    assert_eq!(entry.get("AppName").unwrap().as_text(), "Kept");
    assert_eq!(entry.get("appid"), Some(&PropertyValue::U32(42)));
    assert!(entry.get("tags").is_none());
}

// ---------------------------------------------------------------------------
// Statelessness
// ---------------------------------------------------------------------------

#[test]
fn parsing_twice_yields_equal_registries() {
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00\x00");
    data.extend_from_slice(b"0\x00\x02appid\x00\x01\x00\x00\x00\x08\x08");
    let first = decode_shortcuts(&data).unwrap();
    let second = decode_shortcuts(&data).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), second.len());
}

#[test]
fn independent_decodes_run_concurrently() {
    let mut data = Vec::new();
    data.extend_from_slice(b"\x00shortcuts\x00\x00");
    for i in 0..8 {
        data.extend_from_slice(format!("{i}\x00").as_bytes());
        data.extend_from_slice(b"\x02appid\x00\x2a\x00\x00\x00\x08");
    }
    data.extend_from_slice(b"\x08");

    let baseline = decode_shortcuts(&data).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| decode_shortcuts(&data).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), baseline);
        }
    });
}
