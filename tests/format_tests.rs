use proptest::prelude::*;
use speccyscan::decode::{decode, decode_tagged};
use speccyscan::report::{Field, Report, Severity, Verdict};
use speccyscan::FormatTag;

fn run(ext: &str, data: &[u8]) -> Report {
    decode(ext, data, data.len() as u64)
}

fn verdict(ext: &str, data: &[u8]) -> Verdict {
    run(ext, data).verdict
}

// ── Fixture builders ─────────────────────────────────────────────────────────

fn csw_header(major: u8, minor: u8, compression: u8) -> Vec<u8> {
    let mut v = vec![0u8; 0x21];
    v[..22].copy_from_slice(b"Compressed Square Wave");
    v[0x16] = 0x1a;
    v[0x17] = major;
    v[0x18] = minor;
    v[0x19..0x1b].copy_from_slice(&44100u16.to_le_bytes());
    v[0x1b] = compression;
    v[0x1c] = 0;
    v
}

fn voc_header() -> Vec<u8> {
    let mut v = vec![0u8; 0x1b];
    v[..19].copy_from_slice(b"Creative Voice File");
    v[0x13] = 0x1a;
    v[0x14] = 0x1a;
    v[0x15] = 0x00;
    v[0x16] = 0x0a; // minor
    v[0x17] = 0x01; // major
    v[0x18..0x1a].copy_from_slice(&0x1129u16.to_le_bytes());
    v
}

/// One TAP block: little-endian length prefix plus the payload verbatim.
fn tap_block(payload: &[u8]) -> Vec<u8> {
    let mut v = (payload.len() as u16).to_le_bytes().to_vec();
    v.extend_from_slice(payload);
    v
}

/// Standard 19-byte header-block payload (flag, type, name, lengths, params).
fn tap_header_payload(kind: u8, name: &[u8; 10], data_len: u16, param1: u16, param2: u16) -> Vec<u8> {
    let mut p = vec![0x00, kind];
    p.extend_from_slice(name);
    p.extend_from_slice(&data_len.to_le_bytes());
    p.extend_from_slice(&param1.to_le_bytes());
    p.extend_from_slice(&param2.to_le_bytes());
    p.push(0x5a); // stored checksum, arbitrary
    p
}

fn tzx(blocks: &[u8]) -> Vec<u8> {
    let mut v = b"ZXTape!\x1a".to_vec();
    v.extend_from_slice(&[1, 20]);
    v.extend_from_slice(blocks);
    v
}

/// Central directory + EOCD only; the scanner never looks at local headers.
/// Entries are (name, compression method, bit flags).
fn zip_archive(entries: &[(&str, u16, u16)]) -> Vec<u8> {
    let mut v = Vec::new();
    for (name, method, flags) in entries {
        v.extend_from_slice(&0x0201_4b50u32.to_le_bytes());
        v.extend_from_slice(&[0u8; 4]); // version made by / needed
        v.extend_from_slice(&flags.to_le_bytes());
        v.extend_from_slice(&method.to_le_bytes());
        v.extend_from_slice(&[0u8; 16]); // time, date, crc, sizes
        v.extend_from_slice(&(name.len() as u16).to_le_bytes());
        v.extend_from_slice(&0u16.to_le_bytes()); // extra
        v.extend_from_slice(&0u16.to_le_bytes()); // comment
        v.extend_from_slice(&[0u8; 12]); // disk, attributes, local offset
        v.extend_from_slice(name.as_bytes());
    }
    let cd_len = v.len() as u32;
    let count = entries.len() as u16;
    v.extend_from_slice(&0x0605_4b50u32.to_le_bytes());
    v.extend_from_slice(&0u16.to_le_bytes()); // this disk
    v.extend_from_slice(&0u16.to_le_bytes()); // disk with CD start
    v.extend_from_slice(&count.to_le_bytes());
    v.extend_from_slice(&count.to_le_bytes());
    v.extend_from_slice(&cd_len.to_le_bytes());
    v.extend_from_slice(&0u32.to_le_bytes()); // CD offset: directory leads the file
    v.extend_from_slice(&0u16.to_le_bytes()); // comment length
    v
}

// ── Size-classified formats ──────────────────────────────────────────────────

#[test]
fn rom_accepts_exactly_16k() {
    assert_eq!(verdict("rom", &vec![0u8; 16384]), Verdict::Valid);
    assert_eq!(verdict("rom", &vec![0u8; 16383]), Verdict::Invalid);
    assert_eq!(verdict("rom", &vec![0u8; 16385]), Verdict::Invalid);
}

#[test]
fn scr_accepts_exactly_6912() {
    assert_eq!(verdict("scr", &vec![0u8; 6912]), Verdict::Valid);
    assert_eq!(verdict("scr", &vec![0u8; 6911]), Verdict::Invalid);
}

#[test]
fn sna_size_grid() {
    for (size, label) in [
        (49179usize, "48k"),
        (131103, "128k (short)"),
        (147487, "128k (long)"),
        (16411, "16k (hypothetical)"),
    ] {
        let report = run("sna", &vec![0u8; size]);
        assert_eq!(report.verdict, Verdict::Valid, "size {size}");
        assert!(
            report.findings.iter().any(|f| f.field == Some(Field::Text { value: label.to_string() })),
            "size {size} should carry label {label}"
        );
    }
    assert_eq!(verdict("sna", &vec![0u8; 49180]), Verdict::Invalid);
}

// ── CSW ──────────────────────────────────────────────────────────────────────

#[test]
fn csw_valid_v1_01() {
    let report = run("csw", &csw_header(1, 1, 1));
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.is_clean());
    assert!(report
        .findings
        .iter()
        .any(|f| f.field == Some(Field::Version { major: 1, minor: 1 })));
}

#[test]
fn csw_rejects_bad_compression_type() {
    assert_eq!(verdict("csw", &csw_header(1, 1, 3)), Verdict::Invalid);
}

#[test]
fn csw_rejects_zrle_for_v1() {
    assert_eq!(verdict("csw", &csw_header(1, 1, 2)), Verdict::Invalid);
}

#[test]
fn csw_v2_is_recognized_but_unsupported() {
    assert_eq!(verdict("csw", &csw_header(2, 0, 2)), Verdict::Unsupported);
}

#[test]
fn csw_rejects_unknown_version() {
    assert_eq!(verdict("csw", &csw_header(3, 1, 1)), Verdict::Invalid);
}

#[test]
fn csw_rejects_nonzero_reserved_bytes() {
    let mut data = csw_header(1, 1, 1);
    data[0x1e] = 0x42;
    assert_eq!(verdict("csw", &data), Verdict::Invalid);
}

#[test]
fn csw_rejects_bad_signature_and_short_file() {
    let mut data = csw_header(1, 1, 1);
    data[0] = b'X';
    assert_eq!(verdict("csw", &data), Verdict::Invalid);
    assert_eq!(verdict("csw", &data[..0x20]), Verdict::Invalid);
}

// ── DCK ──────────────────────────────────────────────────────────────────────

#[test]
fn dck_valid_two_rom_banks() {
    let mut data = vec![0u8; 9 + 2 * 8 * 1024];
    data[1] = 2;
    data[2] = 2;
    let report = run("dck", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.is_clean());
}

#[test]
fn dck_bank_count_mismatch_is_warning_only() {
    let mut data = vec![0u8; 9 + 2 * 8 * 1024];
    data[1] = 2; // one ROM bank declared, size implies two
    let report = run("dck", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.findings.iter().any(|f| f.severity == Severity::Warning));
}

#[test]
fn dck_unexpected_bank_type_is_reported() {
    let mut data = vec![0u8; 9 + 8 * 1024];
    data[1] = 2;
    data[3] = 77;
    let report = run("dck", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.severity == Severity::Warning && f.message.contains("77")));
}

#[test]
fn dck_rejects_unaligned_size() {
    assert_eq!(verdict("dck", &vec![0u8; 9 + 1000]), Verdict::Invalid);
    assert_eq!(verdict("dck", &vec![0u8; 5]), Verdict::Invalid);
}

// ── POK ──────────────────────────────────────────────────────────────────────

#[test]
fn pok_two_poke_set_with_popup() {
    let report = run("pok", b"N Foo\nM 0 1234 5 255\nZ 0 1235 256 254\nY\n");
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.field == Some(Field::Text { value: "Foo".to_string() })));

    let pokes: Vec<&Field> = report
        .findings
        .iter()
        .filter_map(|f| f.field.as_ref())
        .filter(|f| matches!(f, Field::Poke { .. }))
        .collect();
    assert_eq!(pokes.len(), 2);
    assert_eq!(
        pokes[0],
        &Field::Poke { bank: 0, address: 1234, value: Some(5), original: 255 }
    );
    assert_eq!(
        pokes[1],
        &Field::Poke { bank: 0, address: 1235, value: None, original: 254 }
    );
    assert!(report.findings.iter().any(|f| f.message.contains("POPUP")));
}

#[test]
fn pok_stops_on_unexpected_line() {
    assert_eq!(verdict("pok", b"N Foo\nX what\nY\n"), Verdict::Invalid);
    assert_eq!(verdict("pok", b"Q nonsense\n"), Verdict::Invalid);
}

#[test]
fn pok_missing_terminator_is_truncated() {
    assert_eq!(verdict("pok", b"N Foo\nZ 0 1235 10 254\n"), Verdict::Truncated);
    assert_eq!(verdict("pok", b"N Foo\nM 0 1234 5 255\n"), Verdict::Truncated);
    assert_eq!(verdict("pok", b""), Verdict::Truncated);
}

#[test]
fn pok_field_problems_are_warnings() {
    let report = run("pok", b"N Foo\nZ 0 1235 10\nY\n");
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.findings.iter().any(|f| f.severity == Severity::Warning));

    let report = run("pok", b"N Foo\nZ 0 here 10 254\nY\n");
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.severity == Severity::Warning && f.message.contains("here")));
}

// ── TAP ──────────────────────────────────────────────────────────────────────

#[test]
fn tap_code_header_and_data_block() {
    let mut data = tap_block(&tap_header_payload(3, b"JETPAC    ", 4, 0x8000, 0));
    data.extend_from_slice(&tap_block(&[0xff, 1, 2, 3, 4, 0x42]));
    let report = run("tap", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.findings.iter().any(|f| f.message.contains("\"JETPAC    \"")));
    assert!(report.findings.iter().any(|f| f.message == "type: code"));
    assert!(report.findings.iter().any(|f| f.message.contains("2 block(s)")));
}

#[test]
fn tap_program_header_reports_autostart() {
    let data = tap_block(&tap_header_payload(0, b"LOADER    ", 100, 10, 78));
    let report = run("tap", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.findings.iter().any(|f| f.message.contains("autostart line number 10")));
    assert!(report.findings.iter().any(|f| f.message.contains("variable area offset 78")));
}

#[test]
fn tap_zero_length_block_ends_the_walk() {
    let mut data = tap_block(&[0xff, 9, 0x42]);
    data.extend_from_slice(&[0, 0, 0, 0]); // zero-padding tail
    assert_eq!(verdict("tap", &data), Verdict::EndedOnZeroBlock);
}

#[test]
fn tap_overlong_block_is_truncated() {
    assert_eq!(verdict("tap", &[10, 0, 1, 2]), Verdict::Truncated);
    // Length prefix itself cut in half.
    assert_eq!(verdict("tap", &[3, 0, 0xff, 1, 2, 9]), Verdict::Truncated);
}

#[test]
fn tap_empty_and_oversized_inputs() {
    assert_eq!(verdict("tap", &[]), Verdict::Invalid);
    assert_eq!(decode("tap", &[], 256 * 1024).verdict, Verdict::Unsupported);
}

// ── TZX ──────────────────────────────────────────────────────────────────────

#[test]
fn tzx_single_group_end_block() {
    let mut data = b"ZXTape!\x1a".to_vec();
    data.extend_from_slice(&[2, 0, 0x22]);
    let report = run("tzx", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    let group_ends: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.message.contains("group end"))
        .collect();
    assert_eq!(group_ends.len(), 1);
    assert_eq!(group_ends[0].field, Some(Field::BlockId { id: 0x22 }));
}

#[test]
fn tzx_standard_speed_block_walk() {
    // 4 header bytes + declared payload of 3.
    let data = tzx(&[0x10, 0x00, 0x00, 0x03, 0x00, 0xaa, 0xbb, 0xcc]);
    assert_eq!(verdict("tzx", &data), Verdict::Valid);
}

#[test]
fn tzx_group_start_and_text_description() {
    let mut blocks = vec![0x21, 4];
    blocks.extend_from_slice(b"Side");
    blocks.push(0x30);
    blocks.push(5);
    blocks.extend_from_slice(b"hello");
    blocks.push(0x22);
    let report = run("tzx", &tzx(&blocks));
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.findings.iter().any(|f| f.message == "\"Side\""));
    assert!(report.findings.iter().any(|f| f.message == "hello"));
}

#[test]
fn tzx_archive_info_strings() {
    // count=2: (0, "Dizzy"), (0xff, "ok")
    let mut payload = vec![2u8, 0, 5];
    payload.extend_from_slice(b"Dizzy");
    payload.extend_from_slice(&[0xff, 2]);
    payload.extend_from_slice(b"ok");
    let mut blocks = vec![0x32];
    blocks.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    blocks.extend_from_slice(&payload);
    let report = run("tzx", &tzx(&blocks));
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.findings.iter().any(|f| f.message.contains("Full title") && f.message.contains("Dizzy")));
    assert!(report.findings.iter().any(|f| f.message.contains("Comment(s)")));
}

#[test]
fn tzx_hardware_type_lookup() {
    let report = run("tzx", &tzx(&[0x33, 1, 0, 1, 1]));
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.message == "Computers: ZX Spectrum 48k, Plus, uses the special hardware"));
}

#[test]
fn tzx_unknown_block_stops_the_walk() {
    let report = run("tzx", &tzx(&[0x22, 0x99, 0x22]));
    assert_eq!(report.verdict, Verdict::Unsupported);
    // The walk stops at 0x99: exactly one group end seen.
    assert_eq!(report.findings.iter().filter(|f| f.message.contains("group end")).count(), 1);
}

#[test]
fn tzx_named_undecoded_block() {
    let report = run("tzx", &tzx(&[0x15]));
    assert_eq!(report.verdict, Verdict::Unsupported);
    assert!(report.findings.iter().any(|f| f.message.contains("direct recording")));
}

#[test]
fn tzx_block_past_end_is_truncated() {
    // Standard speed block declaring more payload than the file holds.
    let data = tzx(&[0x10, 0x00, 0x00, 0xff, 0x00, 0xaa]);
    assert_eq!(verdict("tzx", &data), Verdict::Truncated);
}

#[test]
fn tzx_bad_signature() {
    assert_eq!(verdict("tzx", b"ZXTape?\x1a\x01\x14"), Verdict::Invalid);
}

// ── VOC ──────────────────────────────────────────────────────────────────────

#[test]
fn voc_valid_header() {
    let report = run("voc", &voc_header());
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.field == Some(Field::Version { major: 1, minor: 10 })));
}

#[test]
fn voc_rejects_bad_marker_bytes() {
    let mut data = voc_header();
    data[0x14] = 0;
    assert_eq!(verdict("voc", &data), Verdict::Invalid);
}

#[test]
fn voc_rejects_short_and_missigned_files() {
    assert_eq!(verdict("voc", &voc_header()[..0x1a]), Verdict::Invalid);
    let mut data = voc_header();
    data[0] = b'X';
    assert_eq!(verdict("voc", &data), Verdict::Invalid);
}

// ── Z80 ──────────────────────────────────────────────────────────────────────

#[test]
fn z80_v1_uncompressed_length_check() {
    let mut data = vec![0u8; 30 + 48 * 1024];
    data[6] = 0x34; // non-zero PC: v1 header
    assert_eq!(verdict("z80", &data), Verdict::Valid);

    let mut short = vec![0u8; 30 + 48 * 1024 - 1];
    short[6] = 0x34;
    assert_eq!(verdict("z80", &short), Verdict::Invalid);
}

#[test]
fn z80_v1_compressed_skips_length_check() {
    let mut data = vec![0u8; 100];
    data[6] = 0x34;
    data[12] = 1 << 5;
    assert_eq!(verdict("z80", &data), Verdict::Valid);
}

#[test]
fn z80_v2_hardware_labels() {
    let mut data = vec![0u8; 64];
    data[30] = 23; // v2 extended header
    data[34] = 3;
    let report = run("z80", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.field == Some(Field::Text { value: "128k".to_string() })));
}

#[test]
fn z80_v3_mgt_label_and_modified_flag() {
    let mut data = vec![0u8; 64];
    data[30] = 54; // v3 short
    data[34] = 3;
    let report = run("z80", &data);
    assert!(report
        .findings
        .iter()
        .any(|f| f.field == Some(Field::Text { value: "48k + MGT".to_string() })));

    // Modified flag knocks the plain-48k mapping out.
    let mut data = vec![0u8; 64];
    data[30] = 23;
    data[37] = 0x80;
    let report = run("z80", &data);
    assert!(report
        .findings
        .iter()
        .any(|f| f.field == Some(Field::Text { value: "???".to_string() })));
}

#[test]
fn z80_unknown_extended_length_is_reported_not_fatal() {
    let mut data = vec![0u8; 64];
    data[30] = 60;
    let report = run("z80", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report.findings.iter().any(|f| f.severity == Severity::Warning));
}

#[test]
fn z80_short_buffer_is_truncated() {
    assert_eq!(verdict("z80", &[0u8; 5]), Verdict::Truncated);
    assert_eq!(verdict("z80", &[0u8; 32]), Verdict::Truncated);
}

// ── ZIP ──────────────────────────────────────────────────────────────────────

#[test]
fn zip_matches_emulator_files_only() {
    let data = zip_archive(&[
        ("games/jetpac.z80", 0, 0),
        ("readme.txt", 0, 0),
        ("games/", 0, 0),
        ("._jetpac.sna", 0, 0),
        ("secret.sna", 0, 1),    // encrypted
        ("packed.tap", 12, 0),   // bzip2-compressed member
    ]);
    let report = run("zip", &data);
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.field == Some(Field::ZipTotals { matched: 1, total: 6 })));
    assert!(report.findings.iter().any(|f| {
        f.field == Some(Field::ZipEntry { name: "games/jetpac.z80".to_string(), method: 0 })
    }));
}

#[test]
fn zip_deflated_member_matches() {
    let report = run("zip", &zip_archive(&[("game.tzx", 8, 0)]));
    assert_eq!(report.verdict, Verdict::Valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.field == Some(Field::ZipTotals { matched: 1, total: 1 })));
}

#[test]
fn zip_multi_volume_is_unsupported() {
    let mut data = zip_archive(&[("a.sna", 0, 0)]);
    let eocd = data.len() - 22;
    data[eocd + 8..eocd + 10].copy_from_slice(&5u16.to_le_bytes());
    data[eocd + 10..eocd + 12].copy_from_slice(&7u16.to_le_bytes());
    assert_eq!(verdict("zip", &data), Verdict::Unsupported);
}

#[test]
fn zip_zip64_sentinel_is_unsupported() {
    let mut data = zip_archive(&[("a.sna", 0, 0)]);
    let eocd = data.len() - 22;
    data[eocd + 16..eocd + 20].copy_from_slice(&0xffff_ffffu32.to_le_bytes());
    assert_eq!(verdict("zip", &data), Verdict::Unsupported);
}

#[test]
fn zip_trailing_comment_is_tolerated() {
    let mut data = zip_archive(&[("a.sna", 0, 0)]);
    let comment = b"packed by speccyscan tests";
    let eocd = data.len() - 22;
    data[eocd + 20..eocd + 22].copy_from_slice(&(comment.len() as u16).to_le_bytes());
    data.extend_from_slice(comment);
    assert_eq!(verdict("zip", &data), Verdict::Valid);
}

#[test]
fn zip_rejects_small_garbled_and_oversized_input() {
    assert_eq!(verdict("zip", &[0u8; 22]), Verdict::Invalid);
    assert_eq!(verdict("zip", &[0u8; 100]), Verdict::Invalid);
    assert_eq!(decode("zip", &[], 2 * 1024 * 1024).verdict, Verdict::Unsupported);
}

// ── Dispatch, registry-only formats, determinism ─────────────────────────────

#[test]
fn unmapped_extension_is_unsupported() {
    assert_eq!(verdict("exe", &[0u8; 64]), Verdict::Unsupported);
}

#[test]
fn registry_only_formats_are_unsupported() {
    for ext in ["dsk", "hobeta", "mdr", "mgt", "slt", "trd"] {
        let report = run(ext, &[0u8; 64]);
        assert_eq!(report.verdict, Verdict::Unsupported, "{ext}");
        assert!(report
            .findings
            .iter()
            .any(|f| f.field == Some(Field::Size { bytes: 64 })));
    }
}

#[test]
fn header_formats_reject_empty_buffers() {
    for ext in ["csw", "voc", "tzx", "z80", "zip"] {
        let v = verdict(ext, &[]);
        assert!(
            matches!(v, Verdict::Invalid | Verdict::Truncated),
            "{ext} returned {v:?} for an empty buffer"
        );
    }
}

#[test]
fn decoding_twice_yields_identical_reports() {
    let fixtures: Vec<(&str, Vec<u8>)> = vec![
        ("csw", csw_header(1, 1, 1)),
        ("tap", tap_block(&tap_header_payload(0, b"LOADER    ", 100, 10, 78))),
        ("tzx", tzx(&[0x22])),
        ("zip", zip_archive(&[("a.sna", 0, 0)])),
        ("pok", b"N Foo\nZ 0 1235 256 254\nY\n".to_vec()),
    ];
    for (ext, data) in fixtures {
        assert_eq!(run(ext, &data), run(ext, &data), "{ext}");
    }
}

#[test]
fn driver_style_read_from_disk() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut tape = tap_block(&tap_header_payload(3, b"FROMDISK  ", 4, 0x8000, 0));
    tape.extend_from_slice(&tap_block(&[0xff, 1, 2, 3, 4, 0x42]));
    file.write_all(&tape).unwrap();

    let data = std::fs::read(file.path()).unwrap();
    let declared = std::fs::metadata(file.path()).unwrap().len();
    let report = decode("tap", &data, declared);
    assert_eq!(report.verdict, Verdict::Valid);
}

// ── Property: no input panics a decoder ──────────────────────────────────────

proptest! {
    #[test]
    fn decoders_never_panic(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        idx in 0usize..FormatTag::ALL.len(),
    ) {
        let tag = FormatTag::ALL[idx];
        let first = decode_tagged(tag, &data, data.len() as u64);
        let second = decode_tagged(tag, &data, data.len() as u64);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tap_walker_is_total(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let report = decode_tagged(FormatTag::Tap, &data, data.len() as u64);
        prop_assert!(matches!(
            report.verdict,
            Verdict::Valid | Verdict::Invalid | Verdict::Truncated | Verdict::EndedOnZeroBlock
        ));
    }
}
