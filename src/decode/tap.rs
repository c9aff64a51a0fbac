//! TAP tape image — a flat run of length-prefixed blocks.
//!
//! Each block is a 2-byte little-endian length followed by exactly that
//! many bytes: a flag byte first (0x00 header, 0xff data), a checksum byte
//! last.  The checksum is reported as stored, never recomputed.
//!
//! Real-world tapes often carry runs of zero bytes after the last block
//! (TOPMAD.TAP pads 0x6cef-0x6dff with zeros, NEW_ZEAL.TAP similar), so a
//! zero block length is treated as end-of-data rather than corruption and
//! surfaces as the dedicated `EndedOnZeroBlock` verdict.

use crate::cursor::{ByteCursor, CursorError};
use crate::report::{Field, Report, Verdict};

const HEADER_FLAG: u8 = 0x00;
const DATA_FLAG:   u8 = 0xff;

/// flag + type + 10-byte name + data length + param1 + param2 + checksum.
const HEADER_BLOCK_LEN: usize = 19;

const TYPE_NAMES: [&str; 4] = ["program", "number array", "char array", "code"];

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
    if cur.is_empty() {
        r.error(0, "empty file");
        return Ok(Verdict::Invalid);
    }
    r.info_field(
        0,
        format!("TAP tape image, {} bytes", cur.len()),
        Field::Size { bytes: cur.len() as u64 },
    );

    let mut offset = 0usize;
    let mut blocks = 0usize;
    while offset < cur.len() {
        let block_len = cur.read_u16_le(offset)? as usize;
        offset += 2;

        if block_len == 0 {
            r.info(1, format!("zero-length block at offset 0x{:x}, treating as end of data", offset - 2));
            return Ok(Verdict::EndedOnZeroBlock);
        }
        if offset + block_len > cur.len() {
            r.error(1, format!("block of {block_len} bytes at offset 0x{offset:x} runs past end of file"));
            return Ok(Verdict::Truncated);
        }

        let flag     = cur.read_u8(offset)?;
        let checksum = cur.read_u8(offset + block_len - 1)?;
        match flag {
            HEADER_FLAG => {
                r.info_field(
                    1,
                    format!("header block, {block_len} bytes, checksum 0x{checksum:02x}"),
                    Field::BlockId { id: flag },
                );
                if block_len >= HEADER_BLOCK_LEN {
                    describe_header(cur, offset, r)?;
                } else {
                    r.warning(2, format!("header block shorter than the standard {HEADER_BLOCK_LEN} bytes"));
                }
            }
            DATA_FLAG => r.info_field(
                1,
                format!("data block, {block_len} bytes, checksum 0x{checksum:02x}"),
                Field::BlockId { id: flag },
            ),
            other => r.warning(
                1,
                format!("unknown flag 0x{other:02x}, {block_len} bytes, checksum 0x{checksum:02x}"),
            ),
        }

        offset += block_len;
        blocks += 1;
    }

    r.info(1, format!("{blocks} block(s), clean end of file"));
    Ok(Verdict::Valid)
}

/// Fixed sub-fields of a standard header block.  `offset` addresses the
/// flag byte; param meanings depend on the type byte.
fn describe_header(cur: ByteCursor<'_>, offset: usize, r: &mut Report) -> Result<(), CursorError> {
    let kind     = cur.read_u8(offset + 1)?;
    let name     = cur.utf8_lossy(offset + 2, 10)?;
    let data_len = cur.read_u16_le(offset + 12)?;
    let param1   = cur.read_u16_le(offset + 14)?;
    let param2   = cur.read_u16_le(offset + 16)?;

    r.info_field(2, format!("name \"{name}\""), Field::Text { value: name.clone() });
    r.info(2, format!("data block length {data_len} (0x{data_len:04x})"));
    match kind {
        0 => {
            r.info(2, "type: program");
            r.info(2, format!("autostart line number {param1}"));
            r.info(2, format!("BASIC variable area offset {param2}"));
        }
        3 => {
            r.info(2, "type: code");
            r.info(2, format!("code address {param1} (0x{param1:04x})"));
            r.info(2, format!("param2 {param2} (0x{param2:04x})"));
        }
        1 | 2 => {
            r.info(2, format!("type: {}", TYPE_NAMES[kind as usize]));
            r.info(2, format!("param1 {param1} (0x{param1:04x})"));
            r.info(2, format!("param2 {param2} (0x{param2:04x})"));
        }
        n => {
            r.warning(2, format!("unknown type {n}"));
            r.info(2, format!("param1 {param1} (0x{param1:04x})"));
            r.info(2, format!("param2 {param2} (0x{param2:04x})"));
        }
    }
    Ok(())
}
