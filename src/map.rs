//! Tile grid and the terrain query surface.
//!
//! A [`TileMap`] is immutable once loaded. The only classification that
//! matters to the simulation is whether a tile blocks motion; visual ids,
//! decoration layers and the like belong to the presentation side.
//!
//! Maps are authored as plain text: a `width height` header line followed by
//! `height` rows of glyphs, `#` for solid tiles and `.` (or space) for empty
//! ones. Unknown glyphs are tolerated with a warning so that a map authored
//! for a newer tileset still loads.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

/// One terrain cell. Immutable for the lifetime of a loaded map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    /// Whether this tile blocks actor motion.
    pub solid: bool,
}

/// Errors produced while reading or parsing a tile map.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("failed to read map file {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The map text was empty.
    #[error("map is empty; expected a `width height` header line")]
    MissingHeader,
    /// The header line did not parse as two positive integers.
    #[error("bad map header {header:?}; expected `width height`")]
    BadHeader {
        /// The offending header line.
        header: String,
    },
    /// The number of rows did not match the header.
    #[error("map declares {expected} rows but provides {found}")]
    RowCount {
        /// Rows promised by the header.
        expected: usize,
        /// Rows actually present.
        found: usize,
    },
    /// A row's width did not match the header.
    #[error("row {row} has {found} tiles but the map is {expected} wide")]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Width promised by the header.
        expected: usize,
        /// Glyphs actually present.
        found: usize,
    },
}

/// Rectangular grid of classified tiles.
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// An empty zero-by-zero map. Every query answers non-solid.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            tiles: Vec::new(),
        }
    }

    /// Parses a map from its text form.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(MapError::MissingHeader)?;

        let mut parts = header.split_whitespace();
        let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MapError::BadHeader {
                header: header.to_owned(),
            });
        };
        let (Ok(width), Ok(height)) = (w.parse::<usize>(), h.parse::<usize>()) else {
            return Err(MapError::BadHeader {
                header: header.to_owned(),
            });
        };

        let mut tiles = Vec::with_capacity(width * height);
        let mut rows = 0usize;
        for (row, line) in lines.enumerate() {
            let glyphs = line.chars().count();
            if glyphs != width {
                return Err(MapError::RowWidth {
                    row,
                    expected: width,
                    found: glyphs,
                });
            }
            for glyph in line.chars() {
                tiles.push(Self::classify(glyph, row));
            }
            rows += 1;
        }
        if rows != height {
            return Err(MapError::RowCount {
                expected: height,
                found: rows,
            });
        }

        #[expect(
            clippy::cast_possible_wrap,
            reason = "Authored maps are far smaller than i32::MAX per side."
        )]
        let (grid_width, grid_height) = (width as i32, height as i32);
        Ok(Self {
            width: grid_width,
            height: grid_height,
            tiles,
        })
    }

    fn classify(glyph: char, row: usize) -> Tile {
        match glyph {
            '#' => Tile { solid: true },
            '.' | ' ' => Tile { solid: false },
            other => {
                warn!("unknown map glyph {other:?} in row {row}; treating as empty");
                Tile { solid: false }
            }
        }
    }

    /// Reads and parses a map file.
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Map width in tiles.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Map height in tiles.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns the tile at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        #[expect(
            clippy::cast_sign_loss,
            reason = "Both coordinates are range-checked non-negative above."
        )]
        let index = y as usize * self.width as usize + x as usize;
        self.tiles.get(index)
    }

    /// Whether the tile at `(x, y)` blocks motion.
    ///
    /// Total over all integer inputs: coordinates outside the grid answer
    /// non-solid. Containment at the world edge is the position clamp's job,
    /// not the terrain query's.
    #[must_use]
    pub fn solid(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(|tile| tile.solid)
    }
}

/// Resolves a resource name against an ordered list of search paths.
///
/// Returns the first candidate that exists on disk, or `None` when the
/// resource cannot be found anywhere.
#[must_use]
pub fn resolve_search_path(paths: &[PathBuf], name: &str) -> Option<PathBuf> {
    paths.iter().map(|base| base.join(name)).find(|p| p.exists())
}
