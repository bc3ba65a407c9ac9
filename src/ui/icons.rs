// src/ui/icons.rs
//! Icon glyphs for file list rows.

use crate::fs::IconClass;

/// Get the glyph for a row's icon class.
pub fn glyph_for(class: IconClass) -> &'static str {
    match class {
        IconClass::Image => "\u{f1c5}",
        IconClass::Video => "\u{f1c8}",
        IconClass::Document => "\u{f1c1}",
        IconClass::Archive => "\u{f1c6}",
        IconClass::Generic => "\u{f07b}", // folder icon, the original's default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_has_a_distinct_glyph() {
        let glyphs = [
            glyph_for(IconClass::Image),
            glyph_for(IconClass::Video),
            glyph_for(IconClass::Document),
            glyph_for(IconClass::Archive),
            glyph_for(IconClass::Generic),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
