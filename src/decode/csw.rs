//! CSW "Compressed Square Wave" tape audio capture — header validation.
//!
//! Header layout, v1.01:
//!
//! ```text
//! 0x00  22 B  ASCII signature "Compressed Square Wave"
//! 0x16   1 B  terminator code
//! 0x17   1 B  major revision
//! 0x18   1 B  minor revision
//! 0x19   2 B  sample rate (LE)
//! 0x1b   1 B  compression type (1 = RLE, 2 = Z-RLE)
//! 0x1c   1 B  flags (bit 0 = initial signal polarity)
//! 0x1d   3 B  reserved, must be zero
//! ```
//!
//! Versions 1.01 and 2.0 are recognized; only 1.01 is decoded past the
//! version bytes.  Z-RLE is a v2 compression scheme and is rejected when a
//! v1 header declares it.

use crate::cursor::{ByteCursor, CursorError};
use crate::report::{Field, Report, Verdict};

pub const SIGNATURE: &[u8; 22] = b"Compressed Square Wave";

/// Full v1.01 header span; the payload starts at 0x20.
const HEADER_LEN: u64 = 0x20;

pub fn decode(data: &[u8], declared_size: u64) -> Report {
    let mut r = Report::new();
    let verdict = super::run_guarded(data, &mut r, |cur, r| run(cur, declared_size, r));
    r.finish(verdict)
}

fn run(cur: ByteCursor<'_>, declared_size: u64, r: &mut Report) -> Result<Verdict, CursorError> {
    if declared_size <= HEADER_LEN {
        r.error(0, "file too short to hold a CSW 1.01 header");
        return Ok(Verdict::Invalid);
    }
    let sig = cur.slice(0, SIGNATURE.len())?;
    if sig != SIGNATURE {
        r.error(0, format!("signature mismatch, not a CSW file (starts {})", hex::encode(&sig[..8])));
        return Ok(Verdict::Invalid);
    }
    r.info_field(
        0,
        format!("CSW compressed square wave, {declared_size} bytes"),
        Field::Size { bytes: declared_size },
    );

    // Fields common to v1.01 and v2.0.
    let terminator = cur.read_u8(0x16)?;
    let major      = cur.read_u8(0x17)?;
    let minor      = cur.read_u8(0x18)?;
    r.info_field(
        1,
        format!("version {major}.{minor:02}, terminator code 0x{terminator:02x}"),
        Field::Version { major, minor },
    );
    match (major, minor) {
        (1, 1) => {}
        (2, 0) => {
            r.warning(1, "only version 1.01 is decoded");
            return Ok(Verdict::Unsupported);
        }
        _ => {
            r.error(1, "invalid version");
            return Ok(Verdict::Invalid);
        }
    }

    // v1.01-only fields.
    let sample_rate = cur.read_u16_le(0x19)?;
    let compression = cur.read_u8(0x1b)?;
    let flags       = cur.read_u8(0x1c)?;

    let compression_name = match compression {
        1 => "RLE".to_string(),
        2 => "Z-RLE".to_string(),
        n => format!("0x{n:02x}"),
    };
    let polarity = match flags {
        0 => "signal starts at logical low".to_string(),
        1 => "signal starts at logical high".to_string(),
        n => format!("flags 0x{n:02x}"),
    };
    r.info(1, format!("sample rate {sample_rate}, compression {compression_name}, {polarity}"));

    if compression != 1 && compression != 2 {
        r.error(2, "invalid compression type");
        return Ok(Verdict::Invalid);
    }
    if compression == 2 {
        r.error(2, "Z-RLE is not a valid compression type for a version 1 CSW");
        return Ok(Verdict::Invalid);
    }
    if cur.read_u8(0x1d)? | cur.read_u8(0x1e)? | cur.read_u8(0x1f)? != 0 {
        r.error(1, "reserved bytes 0x1d-0x1f are not all zero");
        return Ok(Verdict::Invalid);
    }

    r.info(1, "well-formed CSW 1.01 header");
    Ok(Verdict::Valid)
}
