//! Lossless text codecs for room layouts.
//!
//! Two independent transforms, each with an inverse: a pretty JSON tile map
//! for tile consumers, and a compact hexadecimal digest that fits in a URL
//! query parameter. Both are deterministic and round-trip any valid layout.

use crate::grid::{self, Grid};
use std::fmt;

/// Hex digits encoding one grid row; four digits hold up to 16 columns.
const HEX_DIGITS_PER_ROW: usize = 4;

/// Errors produced when decoding a layout from text.
#[derive(Debug)]
pub enum DecodeError {
    /// The input is not parseable as JSON.
    NotJson(serde_json::Error),
    /// The JSON object has no `tiles` field.
    MissingTilesField,
    /// The `tiles` field is not an array.
    TilesNotArray,
    /// The `tiles` array length does not match the grid size.
    WrongTileCount {
        /// Entries required for a full grid
        expected: usize,
        /// Entries actually present
        found: usize,
    },
    /// A tile is something other than `"#"` or `" "`.
    UnknownTileCharacter {
        /// Index of the offending entry within `tiles`
        index: usize,
        /// The offending entry, rendered as JSON
        tile: String,
    },
    /// The hex digest length does not match the grid size.
    WrongHexLength {
        /// Characters required for a full grid
        expected: usize,
        /// Characters actually present
        found: usize,
    },
    /// A row group contains a non-hexadecimal digit.
    NotHex {
        /// The offending four-character group
        chunk: String,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotJson(reason) => write!(f, "string is not valid JSON: {reason}"),
            DecodeError::MissingTilesField => write!(f, "tiles is not defined in the JSON"),
            DecodeError::TilesNotArray => write!(f, "tiles is not an array"),
            DecodeError::WrongTileCount { expected, found } => {
                write!(f, "tiles has {found} entries, expected {expected}")
            }
            DecodeError::UnknownTileCharacter { index, tile } => {
                write!(f, "tiles[{index}] is {tile}, expected \" \" or \"#\"")
            }
            DecodeError::WrongHexLength { expected, found } => {
                write!(f, "hex digest is {found} characters long, expected {expected}")
            }
            DecodeError::NotHex { chunk } => {
                write!(f, "{chunk:?} is not a hexadecimal row group")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::NotJson(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Renders a layout as a pretty JSON tile map.
///
/// The object holds a single `tiles` key: an array of `size * size`
/// one-character strings, `"#"` for wall and `" "` for floor, row-major
/// (`y` outer, `x` inner), with one grid row per line of output.
///
/// # Examples
///
/// ```
/// use dungeon_editor::codec::grid_to_json_string;
/// use dungeon_editor::grid::template;
///
/// let text = grid_to_json_string(&template(5));
/// assert!(text.starts_with("{\n\t\"tiles\": [\n"));
/// assert_eq!(text.matches('#').count(), 12); // border minus four doors
/// ```
pub fn grid_to_json_string(layout: &Grid) -> String {
    let size = layout.len();
    let mut tiles = String::new();
    for y in 0..size {
        tiles.push_str("\t\t");
        for x in 0..size {
            let tile = if layout[x][y] { '#' } else { ' ' };
            let last_of_row = x == size - 1;
            let last_of_grid = last_of_row && y == size - 1;
            if !last_of_row {
                tiles.push_str(&format!("\"{tile}\", "));
            } else if !last_of_grid {
                tiles.push_str(&format!("\"{tile}\","));
            } else {
                tiles.push_str(&format!("\"{tile}\""));
            }
        }
        tiles.push('\n');
    }
    format!("{{\n\t\"tiles\": [\n{tiles}\t]\n}}")
}

/// Parses a JSON tile map back into a layout of the given size.
///
/// Each malformed shape maps to a distinct [`DecodeError`] kind. Parsed
/// tiles overlay a fresh template, and since `tiles` must cover the full
/// grid, every cell ends up exactly as the text describes it.
pub fn json_string_to_grid(text: &str, size: usize) -> Result<Grid, DecodeError> {
    let json: serde_json::Value = serde_json::from_str(text).map_err(DecodeError::NotJson)?;
    let tiles = json.get("tiles").ok_or(DecodeError::MissingTilesField)?;
    let tiles = tiles.as_array().ok_or(DecodeError::TilesNotArray)?;
    if tiles.len() != size * size {
        return Err(DecodeError::WrongTileCount {
            expected: size * size,
            found: tiles.len(),
        });
    }

    let mut layout = grid::template(size);
    for (i, tile) in tiles.iter().enumerate() {
        let wall = match tile.as_str() {
            Some("#") => true,
            Some(" ") => false,
            _ => {
                return Err(DecodeError::UnknownTileCharacter {
                    index: i,
                    tile: tile.to_string(),
                })
            }
        };
        layout[i % size][i / size] = wall;
    }
    Ok(layout)
}

/// Renders a layout as a compact hexadecimal digest.
///
/// Each row `y` becomes one four-digit lowercase hex group: bit 1 marks a
/// wall, with `x = 0` as the most significant bit.
/// Four digits hold rows up to 16 cells wide, which covers every supported
/// room size.
///
/// # Examples
///
/// ```
/// use dungeon_editor::codec::grid_to_hex;
/// use dungeon_editor::grid::template;
///
/// assert_eq!(grid_to_hex(&template(5)), "001b001100000011001b");
/// ```
pub fn grid_to_hex(layout: &Grid) -> String {
    let size = layout.len();
    debug_assert!(
        size <= 4 * HEX_DIGITS_PER_ROW,
        "a row of {size} cells does not fit in {HEX_DIGITS_PER_ROW} hex digits"
    );
    let mut digest = String::with_capacity(size * HEX_DIGITS_PER_ROW);
    for y in 0..size {
        let mut row_bits: u32 = 0;
        for x in 0..size {
            row_bits <<= 1;
            if layout[x][y] {
                row_bits |= 1;
            }
        }
        digest.push_str(&format!("{row_bits:04x}"));
    }
    digest
}

/// Decodes a hexadecimal digest back into a layout of the given size.
///
/// The inverse of [`grid_to_hex`]: one four-digit group per row, keeping the
/// low `size` bits of each group. Fails with [`DecodeError::WrongHexLength`]
/// or [`DecodeError::NotHex`] on malformed input.
pub fn hex_to_grid(text: &str, size: usize) -> Result<Grid, DecodeError> {
    let expected = size * HEX_DIGITS_PER_ROW;
    let bytes = text.as_bytes();
    if bytes.len() != expected {
        return Err(DecodeError::WrongHexLength {
            expected,
            found: bytes.len(),
        });
    }

    let mut layout = grid::template(size);
    for (y, chunk) in bytes.chunks(HEX_DIGITS_PER_ROW).enumerate() {
        let row_bits = std::str::from_utf8(chunk)
            .ok()
            .and_then(|chunk| u32::from_str_radix(chunk, 16).ok())
            .ok_or_else(|| DecodeError::NotHex {
                chunk: String::from_utf8_lossy(chunk).into_owned(),
            })?;
        for x in 0..size {
            layout[x][y] = (row_bits >> (size - 1 - x)) & 1 == 1;
        }
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::template;
    use crate::standard_rooms::StandardRoom;

    fn size_five_json() -> String {
        [
            "{",
            "\t\"tiles\": [",
            "\t\t\"#\", \"#\", \" \", \"#\", \"#\",",
            "\t\t\"#\", \" \", \" \", \" \", \"#\",",
            "\t\t\" \", \" \", \" \", \" \", \" \",",
            "\t\t\"#\", \" \", \" \", \" \", \"#\",",
            "\t\t\"#\", \"#\", \" \", \"#\", \"#\"",
            "\t]",
            "}",
        ]
        .join("\n")
    }

    #[test]
    fn json_emits_exact_template_shape() {
        assert_eq!(grid_to_json_string(&template(5)), size_five_json());
    }

    #[test]
    fn json_round_trips() {
        for room in StandardRoom::get_all() {
            for size in [5, 7, 9, 11] {
                let layout = room.layout(size);
                let text = grid_to_json_string(&layout);
                assert_eq!(json_string_to_grid(&text, size).unwrap(), layout);
            }
        }
    }

    #[test]
    fn json_decode_reads_row_major_tiles() {
        let layout = json_string_to_grid(&size_five_json(), 5).unwrap();
        assert_eq!(layout, template(5));

        let mut walled = template(5);
        walled[1][1] = true;
        let text = grid_to_json_string(&walled);
        assert_eq!(json_string_to_grid(&text, 5).unwrap(), walled);
    }

    #[test]
    fn json_decode_rejects_garbage() {
        let err = json_string_to_grid("not json at all", 5).unwrap_err();
        assert!(matches!(err, DecodeError::NotJson(_)));
    }

    #[test]
    fn json_decode_requires_tiles_field() {
        let err = json_string_to_grid("{\"size\": 5}", 5).unwrap_err();
        assert!(matches!(err, DecodeError::MissingTilesField));

        // a non-object has no fields at all
        let err = json_string_to_grid("[1, 2, 3]", 5).unwrap_err();
        assert!(matches!(err, DecodeError::MissingTilesField));
    }

    #[test]
    fn json_decode_requires_tiles_array() {
        let err = json_string_to_grid("{\"tiles\": 5}", 5).unwrap_err();
        assert!(matches!(err, DecodeError::TilesNotArray));
    }

    #[test]
    fn json_decode_checks_tile_count() {
        let tiles: Vec<String> = vec!["\" \"".into(); 24];
        let text = format!("{{\"tiles\": [{}]}}", tiles.join(", "));
        let err = json_string_to_grid(&text, 5).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::WrongTileCount {
                expected: 25,
                found: 24
            }
        ));
    }

    #[test]
    fn json_decode_checks_tile_characters() {
        let mut tiles: Vec<String> = vec!["\" \"".into(); 25];
        tiles[7] = "\"x\"".into();
        let text = format!("{{\"tiles\": [{}]}}", tiles.join(", "));
        let err = json_string_to_grid(&text, 5).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownTileCharacter { index: 7, .. }
        ));

        // non-string entries are just as unknown
        let mut tiles: Vec<String> = vec!["\"#\"".into(); 25];
        tiles[0] = "3".into();
        let text = format!("{{\"tiles\": [{}]}}", tiles.join(", "));
        let err = json_string_to_grid(&text, 5).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownTileCharacter { index: 0, .. }
        ));
    }

    #[test]
    fn hex_emits_exact_template_digest() {
        assert_eq!(grid_to_hex(&template(5)), "001b001100000011001b");
    }

    #[test]
    fn hex_round_trips() {
        for room in StandardRoom::get_all() {
            for size in [5, 7, 9, 11, 15] {
                let layout = room.layout(size);
                let digest = grid_to_hex(&layout);
                assert_eq!(digest.len(), size * HEX_DIGITS_PER_ROW);
                assert_eq!(hex_to_grid(&digest, size).unwrap(), layout);
            }
        }
    }

    #[test]
    fn hex_round_trips_edited_layouts() {
        let mut layout = template(7);
        layout[1][1] = true;
        layout[4][4] = true;
        layout[5][2] = true;
        let digest = grid_to_hex(&layout);
        assert_eq!(hex_to_grid(&digest, 7).unwrap(), layout);
    }

    #[test]
    fn hex_decode_checks_length() {
        let err = hex_to_grid("001b", 5).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::WrongHexLength {
                expected: 20,
                found: 4
            }
        ));
    }

    #[test]
    fn hex_decode_rejects_non_hex_digits() {
        let err = hex_to_grid("001b0011zzzz0011001b", 5).unwrap_err();
        match err {
            DecodeError::NotHex { chunk } => assert_eq!(chunk, "zzzz"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn hex_decode_masks_bits_beyond_the_row() {
        // high bits outside the 5-cell row are ignored
        let padded = hex_to_grid("001b001100000011001b", 5).unwrap();
        let noisy = hex_to_grid("e01bf01180000011801b", 5).unwrap();
        assert_eq!(padded, noisy);
    }
}
