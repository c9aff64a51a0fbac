//! Static extension → format registry.
//!
//! Identity is a fixed table, never negotiated at runtime: an extension maps
//! to exactly one [`FormatTag`], a tag to exactly one [`FormatCategory`].
//! The driver uses the table to decide which files to examine; the ZIP
//! decoder uses category membership to filter archive members.  Nothing
//! else in the crate branches on extension strings.

use serde::Serialize;

/// Broad classification of a container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    Archive,
    Audio,
    Cartridge,
    DiskImage,
    MicrodriveImage,
    Poke,
    Screen,
    Snapshot,
    TapeImage,
    Unknown,
}

impl FormatCategory {
    pub fn name(self) -> &'static str {
        match self {
            FormatCategory::Archive         => "archive",
            FormatCategory::Audio           => "audio",
            FormatCategory::Cartridge       => "cartridge",
            FormatCategory::DiskImage       => "disk image",
            FormatCategory::MicrodriveImage => "microdrive image",
            FormatCategory::Poke            => "poke list",
            FormatCategory::Screen          => "screen",
            FormatCategory::Snapshot        => "snapshot",
            FormatCategory::TapeImage       => "tape image",
            FormatCategory::Unknown         => "unknown",
        }
    }

    /// True for categories an emulator loads directly: everything except
    /// archive containers and unrecognized extensions.  This is the member
    /// filter used when scanning ZIP central directories.
    pub fn is_emulator_payload(self) -> bool {
        !matches!(self, FormatCategory::Archive | FormatCategory::Unknown)
    }
}

/// One variant per recognized file extension.
///
/// Not every tag has a structural decoder: the disk, microdrive and
/// super-level-loader formats are registry-only; they participate in
/// category lookups and archive-member matching but yield an `Unsupported`
/// report when decoded directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Csw,
    Dck,
    Dsk,
    Hobeta,
    Mdr,
    Mgt,
    Pok,
    Rom,
    Scr,
    Slt,
    Sna,
    Tap,
    Trd,
    Tzx,
    Voc,
    Z80,
    Zip,
}

impl FormatTag {
    pub const ALL: [FormatTag; 17] = [
        FormatTag::Csw,
        FormatTag::Dck,
        FormatTag::Dsk,
        FormatTag::Hobeta,
        FormatTag::Mdr,
        FormatTag::Mgt,
        FormatTag::Pok,
        FormatTag::Rom,
        FormatTag::Scr,
        FormatTag::Slt,
        FormatTag::Sna,
        FormatTag::Tap,
        FormatTag::Trd,
        FormatTag::Tzx,
        FormatTag::Voc,
        FormatTag::Z80,
        FormatTag::Zip,
    ];

    /// Case-insensitive lookup.  Unrecognized extensions return `None`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csw"    => Some(FormatTag::Csw),
            "dck"    => Some(FormatTag::Dck),
            "dsk"    => Some(FormatTag::Dsk),
            "hobeta" => Some(FormatTag::Hobeta),
            "mdr"    => Some(FormatTag::Mdr),
            "mgt"    => Some(FormatTag::Mgt),
            "pok"    => Some(FormatTag::Pok),
            "rom"    => Some(FormatTag::Rom),
            "scr"    => Some(FormatTag::Scr),
            "slt"    => Some(FormatTag::Slt),
            "sna"    => Some(FormatTag::Sna),
            "tap"    => Some(FormatTag::Tap),
            "trd"    => Some(FormatTag::Trd),
            "tzx"    => Some(FormatTag::Tzx),
            "voc"    => Some(FormatTag::Voc),
            "z80"    => Some(FormatTag::Z80),
            "zip"    => Some(FormatTag::Zip),
            _        => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FormatTag::Csw    => "csw",
            FormatTag::Dck    => "dck",
            FormatTag::Dsk    => "dsk",
            FormatTag::Hobeta => "hobeta",
            FormatTag::Mdr    => "mdr",
            FormatTag::Mgt    => "mgt",
            FormatTag::Pok    => "pok",
            FormatTag::Rom    => "rom",
            FormatTag::Scr    => "scr",
            FormatTag::Slt    => "slt",
            FormatTag::Sna    => "sna",
            FormatTag::Tap    => "tap",
            FormatTag::Trd    => "trd",
            FormatTag::Tzx    => "tzx",
            FormatTag::Voc    => "voc",
            FormatTag::Z80    => "z80",
            FormatTag::Zip    => "zip",
        }
    }

    pub fn category(self) -> FormatCategory {
        match self {
            FormatTag::Csw                     => FormatCategory::Audio,
            FormatTag::Voc                     => FormatCategory::Audio,
            FormatTag::Dck | FormatTag::Rom    => FormatCategory::Cartridge,
            FormatTag::Dsk | FormatTag::Hobeta => FormatCategory::DiskImage,
            FormatTag::Mgt | FormatTag::Trd    => FormatCategory::DiskImage,
            FormatTag::Mdr                     => FormatCategory::MicrodriveImage,
            FormatTag::Pok                     => FormatCategory::Poke,
            FormatTag::Scr                     => FormatCategory::Screen,
            FormatTag::Slt | FormatTag::Sna    => FormatCategory::Snapshot,
            FormatTag::Z80                     => FormatCategory::Snapshot,
            FormatTag::Tap | FormatTag::Tzx    => FormatCategory::TapeImage,
            FormatTag::Zip                     => FormatCategory::Archive,
        }
    }
}

/// Registry lookup for the driver: unknown extensions fold to
/// [`FormatCategory::Unknown`] instead of an error.
pub fn category_for_extension(ext: &str) -> FormatCategory {
    FormatTag::from_extension(ext)
        .map(FormatTag::category)
        .unwrap_or(FormatCategory::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(FormatTag::from_extension("TZX"), Some(FormatTag::Tzx));
        assert_eq!(FormatTag::from_extension("Z80"), Some(FormatTag::Z80));
        assert_eq!(FormatTag::from_extension("exe"), None);
    }

    #[test]
    fn every_tag_round_trips_through_its_extension() {
        for tag in FormatTag::ALL {
            assert_eq!(FormatTag::from_extension(tag.extension()), Some(tag));
        }
    }

    #[test]
    fn archive_members_exclude_archives_and_unknowns() {
        assert!(category_for_extension("sna").is_emulator_payload());
        assert!(category_for_extension("trd").is_emulator_payload());
        assert!(!category_for_extension("zip").is_emulator_payload());
        assert!(!category_for_extension("txt").is_emulator_payload());
    }
}
