//! Manufacturer detection and the per-brand maker-note block.

use serde::Serialize;

use crate::engine::{
    CanonMakernotes, FujiMakernotes, HasselbladMakernotes, KodakMakernotes, MakernotesRecord,
    NikonMakernotes, OlympusMakernotes, PanasonicMakernotes, PentaxMakernotes,
    PhaseOneMakernotes, RicohMakernotes, SamsungMakernotes, SonyMakernotes,
};

/// Camera manufacturers with a dedicated maker-note block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Canon,
    Nikon,
    Fuji,
    Sony,
    Panasonic,
    Olympus,
    Pentax,
    Hasselblad,
    Ricoh,
    Samsung,
    Kodak,
    PhaseOne,
}

impl Brand {
    /// Detection order. The first brand whose name occurs in the make wins.
    pub const PRIORITY: [Brand; 12] = [
        Brand::Canon,
        Brand::Nikon,
        Brand::Fuji,
        Brand::Sony,
        Brand::Panasonic,
        Brand::Olympus,
        Brand::Pentax,
        Brand::Hasselblad,
        Brand::Ricoh,
        Brand::Samsung,
        Brand::Kodak,
        Brand::PhaseOne,
    ];

    /// Lowercase substring searched for in the camera make.
    pub fn needle(self) -> &'static str {
        match self {
            Brand::Canon => "canon",
            Brand::Nikon => "nikon",
            Brand::Fuji => "fuji",
            Brand::Sony => "sony",
            Brand::Panasonic => "panasonic",
            Brand::Olympus => "olympus",
            Brand::Pentax => "pentax",
            Brand::Hasselblad => "hasselblad",
            Brand::Ricoh => "ricoh",
            Brand::Samsung => "samsung",
            Brand::Kodak => "kodak",
            Brand::PhaseOne => "phase one",
        }
    }

    /// Key of the maker-note block in the metadata tree.
    pub fn key(self) -> &'static str {
        match self {
            Brand::PhaseOne => "p1",
            other => other.needle(),
        }
    }

    /// Case-insensitive substring match against a camera make.
    pub fn detect(make: &str) -> Option<Brand> {
        let make = make.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|brand| make.contains(brand.needle()))
    }
}

/// The single manufacturer block included in full metadata output.
///
/// Serializes as `{ "<brand key>": { ... } }` so it can be flattened into
/// the parent map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MakerNotes {
    Canon(CanonMakernotes),
    Nikon(NikonMakernotes),
    Fuji(FujiMakernotes),
    Sony(SonyMakernotes),
    Panasonic(PanasonicMakernotes),
    Olympus(OlympusMakernotes),
    Pentax(PentaxMakernotes),
    Hasselblad(HasselbladMakernotes),
    Ricoh(RicohMakernotes),
    Samsung(SamsungMakernotes),
    Kodak(KodakMakernotes),
    #[serde(rename = "p1")]
    PhaseOne(PhaseOneMakernotes),
}

impl MakerNotes {
    /// Copy the section for `brand` out of the engine record. The section is
    /// copied whether or not the engine populated it.
    pub fn from_record(brand: Brand, record: &MakernotesRecord) -> Self {
        match brand {
            Brand::Canon => MakerNotes::Canon(record.canon.clone()),
            Brand::Nikon => MakerNotes::Nikon(record.nikon.clone()),
            Brand::Fuji => MakerNotes::Fuji(record.fuji.clone()),
            Brand::Sony => MakerNotes::Sony(record.sony.clone()),
            Brand::Panasonic => MakerNotes::Panasonic(record.panasonic.clone()),
            Brand::Olympus => MakerNotes::Olympus(record.olympus.clone()),
            Brand::Pentax => MakerNotes::Pentax(record.pentax.clone()),
            Brand::Hasselblad => MakerNotes::Hasselblad(record.hasselblad.clone()),
            Brand::Ricoh => MakerNotes::Ricoh(record.ricoh.clone()),
            Brand::Samsung => MakerNotes::Samsung(record.samsung.clone()),
            Brand::Kodak => MakerNotes::Kodak(record.kodak.clone()),
            Brand::PhaseOne => MakerNotes::PhaseOne(record.phaseone.clone()),
        }
    }

    pub fn brand(&self) -> Brand {
        match self {
            MakerNotes::Canon(_) => Brand::Canon,
            MakerNotes::Nikon(_) => Brand::Nikon,
            MakerNotes::Fuji(_) => Brand::Fuji,
            MakerNotes::Sony(_) => Brand::Sony,
            MakerNotes::Panasonic(_) => Brand::Panasonic,
            MakerNotes::Olympus(_) => Brand::Olympus,
            MakerNotes::Pentax(_) => Brand::Pentax,
            MakerNotes::Hasselblad(_) => Brand::Hasselblad,
            MakerNotes::Ricoh(_) => Brand::Ricoh,
            MakerNotes::Samsung(_) => Brand::Samsung,
            MakerNotes::Kodak(_) => Brand::Kodak,
            MakerNotes::PhaseOne(_) => Brand::PhaseOne,
        }
    }
}
