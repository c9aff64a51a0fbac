//! Structural identification and validation of ZX Spectrum container
//! formats: tape images (TAP/TZX), snapshots (SNA/Z80), cartridges
//! (DCK/ROM), screens, poke lists, audio captures (CSW/VOC) and ZIP
//! archives of the above.
//!
//! Each format has an independent decoder that takes a byte buffer plus the
//! declared file size and returns a [`report::Report`]: an ordered list of
//! findings and a terminal verdict.  Decoders never perform I/O and never
//! print; they are pure, deterministic and safe to run concurrently.

pub mod cursor;
pub mod decode;
pub mod registry;
pub mod render;
pub mod report;

pub use cursor::{ByteCursor, CursorError};
pub use decode::{decode, decode_tagged};
pub use registry::{category_for_extension, FormatCategory, FormatTag};
pub use report::{Field, Finding, Report, Severity, Verdict};
