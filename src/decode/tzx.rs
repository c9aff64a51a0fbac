//! TZX tape image — tagged blocks, each with its own fixed layout.
//!
//! After the 10-byte file header (signature + revision), the file is a run
//! of blocks introduced by a one-byte ID.  Each known ID has a fixed rule
//! for how many bytes the block occupies, so the walker can hop from ID to
//! ID without decoding payloads:
//!
//! | ID   | Block                | Length rule (from the ID byte)     |
//! |------|----------------------|------------------------------------|
//! | 0x10 | standard speed data  | 1 + 4 + u16 LE at +3               |
//! | 0x11 | turbo speed data     | 1 + 18 + u24 LE at +16             |
//! | 0x12 | pure tone            | 1 + 4                              |
//! | 0x13 | pulse sequence       | 1 + 1 + 2 x u8 at +1               |
//! | 0x14 | pure data            | 1 + 10 + u24 LE at +8              |
//! | 0x21 | group start          | 1 + 1 + u8 at +1 (name string)     |
//! | 0x22 | group end            | 1                                  |
//! | 0x23 | jump to block        | 1 + 2                              |
//! | 0x30 | text description     | 1 + 1 + u8 at +1 (string)          |
//! | 0x32 | archive info         | 1 + 2 + u16 LE at +1 (tuples)      |
//! | 0x33 | hardware type        | 1 + 1 + 3 x u8 at +1               |
//!
//! Any other ID ends the walk: without a length rule the rest of the file
//! is unreachable.  IDs the 1.20 revision defines but this walker does not
//! decode (direct recording, CSW/generalized data, loops, ...) are named
//! in the diagnostic rather than reported as unknown.

use crate::cursor::{ByteCursor, CursorError};
use crate::report::{Field, Report, Verdict};

pub const SIGNATURE: &[u8; 8] = b"ZXTape!\x1a";

const ARCHIVE_INFO_KINDS: [&str; 9] = [
    "Full title",
    "Software house/publisher",
    "Author(s)",
    "Year of publication",
    "Language",
    "Game/utility type",
    "Price",
    "Protection scheme/loader",
    "Origin",
];

const HW_TYPES: [&str; 1] = ["Computers"];

const HW_IDS: [&str; 8] = [
    "ZX Spectrum 16k",
    "ZX Spectrum 48k, Plus",
    "ZX Spectrum 48k ISSUE 1",
    "ZX Spectrum 128k +(Sinclair)",
    "ZX Spectrum 128k +2 (grey case)",
    "ZX Spectrum 128k +2A, +3",
    "Timex Sinclair TC-2048",
    "Timex Sinclair TS-2068",
];

const HW_INFOS: [&str; 4] = [
    "runs but may or may not use the special hardware",
    "uses the special hardware",
    "runs but doesn't use the special hardware",
    "doesn't run",
];

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
    let sig = cur.slice(0, SIGNATURE.len())?;
    if sig != SIGNATURE {
        r.error(0, format!("signature mismatch, not a TZX tape image (starts {})", hex::encode(sig)));
        return Ok(Verdict::Invalid);
    }
    let major = cur.read_u8(8)?;
    let minor = cur.read_u8(9)?;
    r.info_field(
        0,
        format!("TZX tape image, revision {major}.{minor}, {} bytes", cur.len()),
        Field::Version { major, minor },
    );

    let mut offset = 10usize;
    while offset < cur.len() {
        let id = cur.read_u8(offset)?;
        let block_len = match id {
            0x10 => {
                r.info_field(1, "0x10: standard speed data block", Field::BlockId { id });
                1 + 4 + cur.read_u16_le(offset + 3)? as usize
            }
            0x11 => {
                r.info_field(1, "0x11: turbo speed data block", Field::BlockId { id });
                1 + 18 + cur.read_u24_le(offset + 16)? as usize
            }
            0x12 => {
                r.info_field(1, "0x12: pure tone", Field::BlockId { id });
                1 + 4
            }
            0x13 => {
                r.info_field(1, "0x13: pulse sequence", Field::BlockId { id });
                1 + 1 + 2 * cur.read_u8(offset + 1)? as usize
            }
            0x14 => {
                r.info_field(1, "0x14: pure data block", Field::BlockId { id });
                1 + 10 + cur.read_u24_le(offset + 8)? as usize
            }
            0x21 => {
                r.info_field(1, "0x21: group start", Field::BlockId { id });
                let len = cur.read_u8(offset + 1)? as usize;
                let name = cur.utf8_lossy(offset + 2, len)?;
                r.info_field(2, format!("\"{name}\""), Field::Text { value: name });
                1 + 1 + len
            }
            0x22 => {
                r.info_field(1, "0x22: group end", Field::BlockId { id });
                1
            }
            0x23 => {
                r.info_field(1, "0x23: jump to block", Field::BlockId { id });
                1 + 2
            }
            0x30 => {
                r.info_field(1, "0x30: text description", Field::BlockId { id });
                let len = cur.read_u8(offset + 1)? as usize;
                let text = cur.utf8_lossy(offset + 2, len)?;
                r.info_field(2, text.clone(), Field::Text { value: text });
                1 + 1 + len
            }
            0x32 => {
                r.info_field(1, "0x32: archive info", Field::BlockId { id });
                let total = cur.read_u16_le(offset + 1)? as usize;
                archive_info(cur, offset, r)?;
                1 + 2 + total
            }
            0x33 => {
                r.info_field(1, "0x33: hardware type", Field::BlockId { id });
                1 + 1 + 3 * hardware_info(cur, offset, r)?
            }
            other => {
                match undecoded_block_name(other) {
                    Some(name) => r.error(1, format!("0x{other:02x}: {name} is not decoded, stopping")),
                    None => r.error(1, format!("0x{other:02x}: unknown block ID, cannot determine its length")),
                }
                return Ok(Verdict::Unsupported);
            }
        };

        offset += block_len;
        if offset > cur.len() {
            r.error(1, format!("block runs past end of file (would end at offset 0x{offset:x})"));
            return Ok(Verdict::Truncated);
        }
    }

    r.info(1, "clean end of file");
    Ok(Verdict::Valid)
}

/// 0x32 payload: a count byte then `count` (id, len, string) tuples.
/// Multi-line strings are reported one finding per line.
fn archive_info(cur: ByteCursor<'_>, offset: usize, r: &mut Report) -> Result<(), CursorError> {
    let count = cur.read_u8(offset + 3)?;
    r.info(2, format!("{count} string(s)"));

    let mut to = offset + 4;
    for _ in 0..count {
        let tid  = cur.read_u8(to)?;
        let tlen = cur.read_u8(to + 1)? as usize;
        let text = cur.utf8_lossy(to + 2, tlen)?;

        let desc = match tid {
            0xff => Some("Comment(s)"),
            n    => ARCHIVE_INFO_KINDS.get(n as usize).copied(),
        };
        match desc {
            Some(desc) if text.lines().count() > 1 => {
                r.info(3, format!("{desc}:"));
                for line in text.lines() {
                    r.info(4, format!("\"{line}\""));
                }
            }
            Some(desc) => r.info_field(
                3,
                format!("{desc}: \"{text}\""),
                Field::Text { value: text },
            ),
            None => r.info(3, format!("id {tid}: \"{text}\"")),
        }

        to += 2 + tlen;
    }
    Ok(())
}

/// 0x33 payload: a count byte then `count` (type, id, info) triples, each
/// component mapped through its fixed table; out-of-table values render
/// numerically instead of failing.  Returns the triple count.
fn hardware_info(cur: ByteCursor<'_>, offset: usize, r: &mut Report) -> Result<usize, CursorError> {
    let count = cur.read_u8(offset + 1)? as usize;
    for i in 0..count {
        let base = offset + 2 + i * 3;
        let typ  = cur.read_u8(base)?;
        let id   = cur.read_u8(base + 1)?;
        let info = cur.read_u8(base + 2)?;

        let typ_s = HW_TYPES
            .get(typ as usize)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("type 0x{typ:02x}"));
        let id_s = HW_IDS
            .get(id as usize)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("id 0x{id:02x}"));
        let info_s = HW_INFOS
            .get(info as usize)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("info 0x{info:02x}"));

        r.info(2, format!("{typ_s}: {id_s}, {info_s}"));
    }
    Ok(count)
}

/// Blocks the 1.20 revision defines but this walker stops on.
fn undecoded_block_name(id: u8) -> Option<&'static str> {
    match id {
        0x15 => Some("direct recording block"),
        0x18 => Some("CSW recording block"),
        0x19 => Some("generalized data block"),
        0x20 => Some("pause or stop-the-tape command"),
        0x24 => Some("loop start"),
        0x25 => Some("loop end"),
        0x26 => Some("call sequence"),
        0x27 => Some("return from sequence"),
        0x28 => Some("select block"),
        0x2a => Some("stop the tape if in 48k mode"),
        0x2b => Some("set signal level"),
        0x31 => Some("message block"),
        0x35 => Some("custom info block"),
        0x5a => Some("glue block"),
        _    => None,
    }
}
