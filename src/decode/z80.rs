//! Z80 snapshot — header layout dispatched on version.
//!
//! Bytes 6-7 hold the program counter in the original 30-byte header.  A
//! zero PC there means a v2/v3 extended header follows; its declared length
//! at offset 30 selects the exact revision (23 = v2, 54/55 = v3).  The
//! hardware-mode byte is only meaningful relative to that revision, hence
//! the combined lookup below.

use crate::cursor::{ByteCursor, CursorError};
use crate::report::{Field, Report, Verdict};

/// 30-byte v1 header plus a full 48 KiB RAM image.
const V1_UNCOMPRESSED_SIZE: u64 = 30 + 48 * 1024;

pub fn decode(data: &[u8], declared_size: u64) -> Report {
    let mut r = Report::new();
    let verdict = super::run_guarded(data, &mut r, |cur, r| run(cur, declared_size, r));
    r.finish(verdict)
}

fn run(cur: ByteCursor<'_>, declared_size: u64, r: &mut Report) -> Result<Verdict, CursorError> {
    if declared_size >= super::TAPE_ANALYSIS_CAP {
        r.warning(0, "larger than 256 KiB, too large to analyze");
        return Ok(Verdict::Unsupported);
    }

    if cur.read_u16_le(6)? == 0 {
        // Extended header.  Its length field picks the revision.
        let ext_len = cur.read_u16_le(30)?;
        let version = match ext_len {
            23      => Some(2u8),
            54 | 55 => Some(3),
            _       => None,
        };
        match ext_len {
            23 => r.info(0, "Z80 snapshot, version 2"),
            54 => r.info(0, "Z80 snapshot, version 3 (short)"),
            55 => r.info(0, "Z80 snapshot, version 3 (long)"),
            n  => r.warning(0, format!("Z80 snapshot, version 3+ with unknown extended header length {n}")),
        }

        let hw       = cur.read_u8(34)?;
        let modified = cur.read_u8(37)? & 0x80 != 0;
        r.info(1, format!("hardware mode {hw}, modified flag {}", u8::from(modified)));

        let label = hardware_label(hw, version, modified).unwrap_or("???");
        r.info_field(2, label, Field::Text { value: label.to_string() });
        Ok(Verdict::Valid)
    } else {
        // Non-zero PC: original version 1 header.
        let compressed = cur.read_u8(12)? & (1 << 5) != 0;
        if compressed {
            r.info(0, "Z80 snapshot, version 1, compressed");
            Ok(Verdict::Valid)
        } else {
            r.info(0, "Z80 snapshot, version 1, not compressed");
            if declared_size == V1_UNCOMPRESSED_SIZE {
                r.info(1, "valid length");
                Ok(Verdict::Valid)
            } else {
                r.error(1, format!("{declared_size} bytes is not valid for an uncompressed 48k image"));
                Ok(Verdict::Invalid)
            }
        }
    }
}

/// Hardware label for a (mode, revision, modified-flag) combination.  The
/// mode numbering shifted between v2 and v3, so both contribute.  Unmapped
/// combinations are reported as unknown, never failed.
fn hardware_label(hw: u8, version: Option<u8>, modified: bool) -> Option<&'static str> {
    match (hw, version) {
        (0, _) if !modified => Some("48k"),
        (1, _) if !modified => Some("48k + Interface 1"),
        (3, Some(2))        => Some("128k"),
        (4, Some(3))        => Some("128k"),
        (3, Some(3))        => Some("48k + MGT"),
        (4, Some(2))        => Some("128k + Interface 1"),
        (5, Some(3))        => Some("128k + Interface 1"),
        _                   => None,
    }
}
