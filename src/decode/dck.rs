//! DCK Timex/Sinclair dock cartridge image.
//!
//! Layout: a 9-byte header (1-byte dock bank ID + 8 bank-type bytes)
//! followed by the bank contents in 1 KiB chunks.  Bank IDs:
//!
//! - 0:     DOCK bank (the most frequent variant)
//! - 1-253: reserved for expansions beyond three 64 KiB banks
//! - 254:   EXROM bank
//! - 255:   HOME bank (HOME content normally ships as a Z80 snapshot)
//!
//! The ID is reported, not validated.  A ROM-bank count that disagrees with
//! the file size is a warning only; such files may still load.

use crate::cursor::{ByteCursor, CursorError};
use crate::report::{Field, Report, Verdict};

const BANK_KINDS: [&str; 4] = ["absent", "blank RAM", "ROM", "set RAM"];

pub fn decode(data: &[u8], declared_size: u64) -> Report {
    let mut r = Report::new();
    let verdict = super::run_guarded(data, &mut r, |cur, r| run(cur, declared_size, r));
    r.finish(verdict)
}

fn run(cur: ByteCursor<'_>, declared_size: u64, r: &mut Report) -> Result<Verdict, CursorError> {
    if declared_size < 9 || (declared_size - 9) % 1024 != 0 {
        r.error(0, format!("{declared_size} bytes does not fit a 9-byte header plus 1 KiB chunks"));
        return Ok(Verdict::Invalid);
    }
    let declared_banks = (declared_size - 9) / (8 * 1024);
    r.info_field(
        0,
        format!(
            "dock cartridge, {} KiB of content = {declared_banks} bank(s)",
            (declared_size - 9) / 1024
        ),
        Field::Size { bytes: declared_size },
    );

    let dock_id = cur.read_u8(0)?;
    r.info(1, format!("dock bank ID {dock_id}"));

    let mut rom_banks = 0u64;
    for i in 1..=8usize {
        let val = cur.read_u8(i)?;
        match BANK_KINDS.get(val as usize) {
            Some(kind) => {
                r.info(2, format!("bank {i}: {kind}"));
                if val == 2 {
                    rom_banks += 1;
                }
            }
            None => r.warning(2, format!("bank {i}: unexpected type {val}")),
        }
    }

    if rom_banks == declared_banks {
        r.info(2, "ROM bank count matches the file size");
    } else {
        r.warning(2, format!("{rom_banks} ROM bank(s) declared but the size implies {declared_banks}"));
    }
    Ok(Verdict::Valid)
}
