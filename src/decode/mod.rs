//! Decoder dispatch and shared analysis limits.
//!
//! Every decoder is a total function `(buffer, declared size) → Report`:
//! malformed input of any shape ends in a well-formed report with an
//! `Invalid`/`Truncated` verdict, never in an error the caller must handle.
//! Out-of-range cursor reads are caught at this boundary and folded into a
//! `Truncated` finding, so individual decoders parse with plain `?`.
//!
//! The declared size is the file length reported by the caller.  Formats
//! with unbounded payloads are capped: a file over the cap yields
//! `Unsupported` ("too large to analyze") before any byte is touched, which
//! also lets the driver skip reading such files entirely.

pub mod csw;
pub mod dck;
pub mod pok;
pub mod sizes;
pub mod tap;
pub mod tzx;
pub mod voc;
pub mod z80;
pub mod zip;

use crate::cursor::{ByteCursor, CursorError};
use crate::registry::FormatTag;
use crate::report::{Field, Report, Verdict};

/// Upper bound for full-content analysis of tape images and snapshots.
pub const TAPE_ANALYSIS_CAP: u64 = 256 * 1024;
/// Upper bound for archive central-directory scans.
pub const ARCHIVE_ANALYSIS_CAP: u64 = 2 * 1024 * 1024;

/// The analysis cap for a format, if it has one.  Files at or over the cap
/// are rejected on declared size alone; the buffer is never read.
pub fn analysis_cap(tag: FormatTag) -> Option<u64> {
    match tag {
        FormatTag::Tap | FormatTag::Tzx | FormatTag::Z80 => Some(TAPE_ANALYSIS_CAP),
        FormatTag::Zip                                   => Some(ARCHIVE_ANALYSIS_CAP),
        _                                                => None,
    }
}

/// Decode a buffer claimed (by file extension) to hold a known format.
///
/// Unmapped extensions yield `Unsupported`; they are reported, not failed,
/// so a directory sweep can treat every file uniformly.
pub fn decode(ext: &str, data: &[u8], declared_size: u64) -> Report {
    match FormatTag::from_extension(ext) {
        Some(tag) => decode_tagged(tag, data, declared_size),
        None => {
            let mut r = Report::new();
            r.info_field(
                0,
                format!("unrecognized extension \"{ext}\", {declared_size} bytes"),
                Field::Size { bytes: declared_size },
            );
            r.finish(Verdict::Unsupported)
        }
    }
}

/// Decode with an already-resolved format tag.
pub fn decode_tagged(tag: FormatTag, data: &[u8], declared_size: u64) -> Report {
    match tag {
        FormatTag::Csw => csw::decode(data, declared_size),
        FormatTag::Dck => dck::decode(data, declared_size),
        FormatTag::Pok => pok::decode(data, declared_size),
        FormatTag::Rom => sizes::decode_rom(declared_size),
        FormatTag::Scr => sizes::decode_scr(declared_size),
        FormatTag::Sna => sizes::decode_sna(declared_size),
        FormatTag::Tap => tap::decode(data, declared_size),
        FormatTag::Tzx => tzx::decode(data, declared_size),
        FormatTag::Voc => voc::decode(data, declared_size),
        FormatTag::Z80 => z80::decode(data, declared_size),
        FormatTag::Zip => zip::decode(data, declared_size),

        // Registry-only formats: category membership matters (archive member
        // matching), structural decoding does not exist for them yet.
        FormatTag::Dsk
        | FormatTag::Hobeta
        | FormatTag::Mdr
        | FormatTag::Mgt
        | FormatTag::Slt
        | FormatTag::Trd => {
            let mut r = Report::new();
            r.info_field(
                0,
                format!("{} ({}), {declared_size} bytes, no structural decoder", tag.extension(), tag.category().name()),
                Field::Size { bytes: declared_size },
            );
            r.finish(Verdict::Unsupported)
        }
    }
}

/// Run a decoder body, folding an out-of-range read into a `Truncated`
/// report.  The cursor error message carries the offending offset.
fn run_guarded<F>(data: &[u8], r: &mut Report, body: F) -> Verdict
where
    F: FnOnce(ByteCursor<'_>, &mut Report) -> Result<Verdict, CursorError>,
{
    match body(ByteCursor::new(data), r) {
        Ok(verdict) => verdict,
        Err(e) => {
            r.error(0, e.to_string());
            Verdict::Truncated
        }
    }
}
