//! Formats classified by length alone.  No byte content is inspected, so
//! these decoders take only the declared size.

use crate::report::{Field, Report, Verdict};

/// Interface 2 cartridges are exactly one 16 KiB ROM.
pub const ROM_CARTRIDGE_SIZE: u64 = 16 * 1024;

/// 6144-byte pixel bitmap plus 768 attribute bytes.
pub const SCR_SIZE: u64 = 192 * 32 + 24 * 32;

pub fn decode_rom(declared_size: u64) -> Report {
    let mut r = Report::new();
    if declared_size == ROM_CARTRIDGE_SIZE {
        r.info(0, "ROM Interface 2 cartridge image");
        r.finish(Verdict::Valid)
    } else {
        r.error(0, format!("{declared_size} bytes is not a valid Interface 2 cartridge size"));
        r.finish(Verdict::Invalid)
    }
}

pub fn decode_scr(declared_size: u64) -> Report {
    let mut r = Report::new();
    if declared_size == SCR_SIZE {
        r.info(0, "SCR screen dump");
        r.finish(Verdict::Valid)
    } else {
        r.error(0, format!("{declared_size} bytes is not a valid {SCR_SIZE}-byte screen dump"));
        r.finish(Verdict::Invalid)
    }
}

/// SNA images are a 27-byte register header plus the RAM of each model.
/// 16 KiB images are documented only in passing; they are accepted but
/// labelled as hypothetical.
pub fn decode_sna(declared_size: u64) -> Report {
    let mut r = Report::new();
    let label = match declared_size {
        49179  => Some("48k"),               // 27 + 48 KiB
        131103 => Some("128k (short)"),      // 27 + 8 x 16 KiB
        147487 => Some("128k (long)"),       // 27 + 9 x 16 KiB
        16411  => Some("16k (hypothetical)"),
        _      => None,
    };
    match label {
        Some(label) => {
            r.info_field(
                0,
                format!("SNA snapshot, {label}"),
                Field::Text { value: label.to_string() },
            );
            r.finish(Verdict::Valid)
        }
        None => {
            r.error(0, format!("{declared_size} bytes is not a valid SNA snapshot size"));
            r.finish(Verdict::Invalid)
        }
    }
}
