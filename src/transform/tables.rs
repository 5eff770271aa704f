//! Fixed glyph tables.

/// Bracketed superscript glyphs for strongly superposed characters.
pub fn exotic_glyph(c: char) -> Option<&'static str> {
    let glyph = match c {
        'a' => "⟨ᵃ⟩",
        'e' => "⟨ᵉ⟩",
        'i' => "⟨ⁱ⟩",
        'o' => "⟨ᵒ⟩",
        'u' => "⟨ᵘ⟩",
        'A' => "⟨ᴬ⟩",
        'E' => "⟨ᴱ⟩",
        'I' => "⟨ᴵ⟩",
        'O' => "⟨ᴼ⟩",
        'U' => "⟨ᵁ⟩",
        's' => "⟨ˢ⟩",
        't' => "⟨ᵗ⟩",
        'n' => "⟨ⁿ⟩",
        'r' => "⟨ʳ⟩",
        'l' => "⟨ˡ⟩",
        _ => return None,
    };
    Some(glyph)
}

/// Macron and caron variants used by the medium-strength tier.
pub fn diacritic(c: char) -> Option<char> {
    let mapped = match c {
        'a' => 'ā',
        'e' => 'ē',
        'i' => 'ī',
        'o' => 'ō',
        'u' => 'ū',
        'A' => 'Ā',
        'E' => 'Ē',
        'I' => 'Ī',
        'O' => 'Ō',
        'U' => 'Ū',
        's' => 'š',
        't' => 'ť',
        'n' => 'ň',
        'c' => 'č',
        'z' => 'ž',
        _ => return None,
    };
    Some(mapped)
}

/// Look-alike substitutions of the register scramble echo.
pub fn similar(c: char) -> Option<char> {
    let mapped = match c {
        'a' => 'ă',
        'e' => 'ē',
        'i' => 'ī',
        'o' => 'ō',
        'u' => 'ū',
        'A' => 'Ā',
        'E' => 'Ē',
        'I' => 'Ī',
        'O' => 'Ō',
        'U' => 'Ū',
        's' => 'ş',
        't' => 'ţ',
        'n' => 'ñ',
        'c' => 'ç',
        _ => return None,
    };
    Some(mapped)
}

/// Superscript letters of the ghost echo. Keyed by lowercase.
pub fn superscript(c: char) -> Option<char> {
    let mapped = match c {
        'a' => 'ᵃ',
        'e' => 'ᵉ',
        'i' => 'ⁱ',
        'o' => 'ᵒ',
        'u' => 'ᵘ',
        'n' => 'ⁿ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'r' => 'ʳ',
        'l' => 'ˡ',
        _ => return None,
    };
    Some(mapped)
}

/// Accent choices of the pseudo-quantum scramble. Keyed by lowercase.
pub fn pseudo_variants(c: char) -> Option<&'static [char]> {
    let variants: &'static [char] = match c {
        'a' => &['ă', 'ā', 'à', 'á'],
        'e' => &['ē', 'è', 'é', 'ê'],
        'i' => &['ī', 'ì', 'í', 'î'],
        'o' => &['ō', 'ò', 'ó', 'ô'],
        'u' => &['ū', 'ù', 'ú', 'û'],
        's' => &['ş', 'š'],
        't' => &['ţ', 'ť'],
        'n' => &['ñ', 'ň'],
        'c' => &['ç', 'č'],
        _ => return None,
    };
    Some(variants)
}

/// Lowercase becomes uppercase, uppercase becomes lowercase, the rest is kept.
pub fn swap_case(c: char) -> String {
    if c.is_uppercase() {
        c.to_lowercase().collect()
    } else if c.is_lowercase() {
        c.to_uppercase().collect()
    } else {
        c.to_string()
    }
}
