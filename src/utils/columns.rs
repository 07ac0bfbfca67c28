//! Fixed-column field access for PDB-style records.
//!
//! Column positions are 0-based byte offsets, end-exclusive, matching the
//! way the PDB format documentation's 1-based inclusive columns translate
//! (columns 63-66 become `62..66`). Lines shorter than a field simply yield
//! a shorter (possibly empty) field.

/// Raw text between byte offsets `start` and `end`.
///
/// An offset inside a multi-byte character moves outward to the enclosing
/// character boundary, so a replacement character straddling a column edge
/// is kept rather than dropping the whole field.
#[must_use]
pub fn columns(line: &str, start: usize, end: usize) -> &str {
    let mut end = end.min(line.len());
    while !line.is_char_boundary(end) {
        end += 1;
    }
    let mut start = start.min(end);
    while !line.is_char_boundary(start) {
        start -= 1;
    }
    &line[start..end]
}

/// Trimmed text between byte offsets `start` and `end`
#[must_use]
pub fn field(line: &str, start: usize, end: usize) -> &str {
    columns(line, start, end).trim()
}

/// Trimmed text from byte offset `start` to the end of the line
#[must_use]
pub fn field_from(line: &str, start: usize) -> &str {
    columns(line, start, line.len()).trim()
}
