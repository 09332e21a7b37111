#![allow(dead_code)]

use fontchain::{AvailableFontSet, FontChain};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The chain a chart template requests by default.
pub fn default_chain() -> FontChain {
    FontChain::default()
}

/// A host reporting exactly the given families.
pub fn host(families: &[&str]) -> AvailableFontSet {
    families.iter().copied().collect()
}

/// Files of a chart package without bundled fonts.
pub fn package_files() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("spcpkg/DESCRIPTION", b"Package: spcpkg\nVersion: 0.4.0\n".to_vec()),
        ("spcpkg/R/export_pdf.R", vec![b'#'; 4_096]),
        ("spcpkg/inst/templates/chart.typ", vec![b'/'; 2_048]),
    ]
}

/// Pseudo-random, poorly compressible bytes standing in for a font file.
pub fn fake_font_bytes(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x9e37_79b9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xff) as u8
        })
        .collect()
}
