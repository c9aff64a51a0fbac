//! VOC "Creative Voice File" — header validation.
//!
//! ```text
//! 0x00  19 B  ASCII signature "Creative Voice File"
//! 0x13   3 B  fixed bytes 0x1a 0x1a 0x00
//! 0x16   1 B  version minor
//! 0x17   1 B  version major
//! 0x18   2 B  validation word (LE)
//! ```
//!
//! The validation word is reported as stored.  It is nominally derived from
//! the version bytes, but the cross-check is deliberately not performed.

use crate::cursor::{ByteCursor, CursorError};
use crate::report::{Field, Report, Verdict};

pub const SIGNATURE: &[u8; 19] = b"Creative Voice File";

/// Header span; sound data blocks start at 0x1a.
const HEADER_LEN: u64 = 0x1a;

pub fn decode(data: &[u8], declared_size: u64) -> Report {
    let mut r = Report::new();
    let verdict = super::run_guarded(data, &mut r, |cur, r| run(cur, declared_size, r));
    r.finish(verdict)
}

fn run(cur: ByteCursor<'_>, declared_size: u64, r: &mut Report) -> Result<Verdict, CursorError> {
    if declared_size <= HEADER_LEN {
        r.error(0, "file too short to hold a VOC header");
        return Ok(Verdict::Invalid);
    }
    let sig = cur.slice(0, SIGNATURE.len())?;
    if sig != SIGNATURE {
        r.error(0, format!("signature mismatch, not a VOC file (starts {})", hex::encode(&sig[..8])));
        return Ok(Verdict::Invalid);
    }
    r.info_field(
        0,
        format!("VOC Creative Voice file, {declared_size} bytes"),
        Field::Size { bytes: declared_size },
    );

    if cur.slice(0x13, 3)? != [0x1a, 0x1a, 0x00] {
        r.error(1, "bytes 0x13-0x15 are not the expected 0x1a 0x1a 0x00");
        return Ok(Verdict::Invalid);
    }

    let minor      = cur.read_u8(0x16)?;
    let major      = cur.read_u8(0x17)?;
    let validation = cur.read_u16_le(0x18)?;
    r.info_field(
        1,
        format!("version {major}.{minor}, validation 0x{validation:04x}"),
        Field::Version { major, minor },
    );
    Ok(Verdict::Valid)
}
