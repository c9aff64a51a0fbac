//! ZIP archive — central-directory-only scan.
//!
//! The end-of-central-directory record sits at the tail of the file behind
//! an optional comment of up to 64 KiB.  It is located by scanning comment
//! lengths backwards until one matches the remaining byte count and the
//! EOCD signature lines up 22 bytes earlier.  From there the central
//! directory is walked entry by entry; member contents are never touched
//! and never decompressed.
//!
//! Zip64 and multi-volume archives are rejected with a diagnostic.  Members
//! are filtered down to files an emulator could load (by extension
//! category, skipping directories, resource-fork metadata, encrypted
//! entries and exotic compression methods); the archive itself is `Valid`
//! as soon as the EOCD is located, whether or not anything matched.

use crate::cursor::{ByteCursor, CursorError};
use crate::registry::category_for_extension;
use crate::report::{Field, Report, Verdict};

const EOCD_LEN:            usize = 22;
const EOCD_SIGNATURE:      u32   = 0x0605_4b50;
const CD_HEADER_LEN:       usize = 46;
const CD_HEADER_SIGNATURE: u32   = 0x0201_4b50;

const METHOD_STORED:  u16 = 0;
const METHOD_DEFLATE: u16 = 8;
const FLAG_ENCRYPTED: u16 = 0x0001;

/// Maximum trailing-comment length the EOCD scan considers.
const MAX_COMMENT: usize = 65536;

pub fn decode(data: &[u8], declared_size: u64) -> Report {
    let mut r = Report::new();
    let verdict = super::run_guarded(data, &mut r, |cur, r| run(cur, declared_size, r));
    r.finish(verdict)
}

fn run(cur: ByteCursor<'_>, declared_size: u64, r: &mut Report) -> Result<Verdict, CursorError> {
    if declared_size <= EOCD_LEN as u64 {
        r.error(0, "too small to hold an end-of-central-directory record");
        return Ok(Verdict::Invalid);
    }
    if declared_size >= super::ARCHIVE_ANALYSIS_CAP {
        r.warning(0, "larger than 2 MiB, too large to analyze");
        return Ok(Verdict::Unsupported);
    }

    let size = cur.len();
    let Some(eocd) = locate_eocd(cur, size)? else {
        r.error(0, "no end-of-central-directory record found, not a valid ZIP");
        return Ok(Verdict::Invalid);
    };

    let this_disk         = cur.read_u16_le(eocd + 4)?;
    let cd_start_disk     = cur.read_u16_le(eocd + 6)?;
    let entries_this_disk = cur.read_u16_le(eocd + 8)?;
    let entries_all_disks = cur.read_u16_le(eocd + 10)?;
    let cd_length         = cur.read_u32_le(eocd + 12)?;
    let cd_offset         = cur.read_u32_le(eocd + 16)?;

    if this_disk == 0xffff
        || cd_start_disk == 0xffff
        || entries_this_disk == 0xffff
        || entries_all_disks == 0xffff
        || cd_length == 0xffff_ffff
        || cd_offset == 0xffff_ffff
    {
        r.error(0, "Zip64 archive, not supported");
        return Ok(Verdict::Unsupported);
    }
    if entries_this_disk != entries_all_disks {
        r.error(0, "multi-volume archive, not supported");
        return Ok(Verdict::Unsupported);
    }

    // Walk the central directory, keeping entries an emulator could load.
    let mut matched: Vec<(String, u16)> = Vec::new();
    let mut next = cd_offset as usize;
    loop {
        let Ok(sig) = cur.read_u32_le(next) else {
            break;
        };
        if sig != CD_HEADER_SIGNATURE {
            // Some archives pad the directory; end the walk quietly.
            break;
        }
        let flags       = cur.read_u16_le(next + 8)?;
        let method      = cur.read_u16_le(next + 10)?;
        let name_len    = cur.read_u16_le(next + 28)? as usize;
        let extra_len   = cur.read_u16_le(next + 30)? as usize;
        let comment_len = cur.read_u16_le(next + 32)? as usize;
        let name        = cur.utf8_lossy(next + CD_HEADER_LEN, name_len)?;
        next += CD_HEADER_LEN + name_len + extra_len + comment_len;

        if name.ends_with('/') {
            continue; // directory entry
        }
        let last = name.rsplit('/').next().unwrap_or(&name);
        if last.starts_with("._") {
            continue; // resource-fork metadata
        }
        if method != METHOD_STORED && method != METHOD_DEFLATE {
            continue;
        }
        if flags & FLAG_ENCRYPTED != 0 {
            continue;
        }
        let ext = match last.rsplit_once('.') {
            Some((_, ext)) => ext,
            None => continue,
        };
        if !category_for_extension(ext).is_emulator_payload() {
            continue;
        }
        matched.push((name, method));
    }

    r.info_field(
        0,
        format!("ZIP with {} emulator file(s) out of {} entries", matched.len(), entries_this_disk),
        Field::ZipTotals { matched: matched.len(), total: entries_this_disk as usize },
    );
    for (name, method) in matched {
        r.info_field(1, format!("\"{name}\""), Field::ZipEntry { name, method });
    }
    Ok(Verdict::Valid)
}

/// Backwards scan for the EOCD record.  A candidate offset `o` is the end
/// of the comment; it matches when the u16 two bytes before it equals the
/// remaining byte count and the signature sits `EOCD_LEN` bytes earlier.
/// Returns the offset of the EOCD record itself.
fn locate_eocd(cur: ByteCursor<'_>, size: usize) -> Result<Option<usize>, CursorError> {
    let floor = size.saturating_sub(MAX_COMMENT).max(EOCD_LEN);
    let mut o = size;
    while o > floor {
        let comment_len = cur.read_u16_le(o - 2)? as usize;
        if comment_len == size - o && cur.read_u32_le(o - EOCD_LEN)? == EOCD_SIGNATURE {
            return Ok(Some(o - EOCD_LEN));
        }
        o -= 1;
    }
    Ok(None)
}
