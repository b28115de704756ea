//! External packing loader — reads a pre-computed coordinate table from disk.
//!
//! # File format
//! Plain text, one coin per row, whitespace-delimited: `<index> <x> <y> [extra...]`.
//! Column 0 is discarded, columns 1–2 are the center, anything after is
//! ignored. Blank lines and `#` comments are skipped. A table whose rows are all
//! narrower than three columns carries no index column and is malformed.
//!
//! # Normalization
//! The source frame is unknown (its origin may be anywhere, coordinates may be
//! negative). Every center is shifted so the lowest disc edge on each axis sits
//! on zero: `x' = (x - min_x) + r`. The box is then measured with
//! [`crate::packing::bounds::bounding_box`], the same definition the generators use.

use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::packing::bounds::min_corner;
use crate::packing::config::{LoaderOptions, PackingConfig};
use crate::packing::model::{Circle, Packing};

/// Minimum columns per row: index, x, y.
const MIN_COLUMNS: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Errors and warnings
// ────────────────────────────────────────────────────────────────────────────

/// Why a single row of the table could not be read.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("expected at least {} columns (index, x, y), found {found}", MIN_COLUMNS)]
    MissingColumns { found: usize },

    #[error("invalid number {token:?}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("non-finite coordinate {token:?}")]
    NonFinite { token: String },

    #[error("file is not valid UTF-8")]
    NotUtf8,
}

/// Failures while parsing the text of a coordinate table, before a path is known.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("line {line}: {reason}")]
    Row {
        line: usize,
        #[source]
        reason: RowError,
    },

    #[error("line {line}: expected at least {expected} columns, found {found}")]
    Narrow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// A loader failure. Every variant is recoverable: callers get a value, never a panic.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("coordinate file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("coordinate file is empty: {}", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("failed to parse {} at line {line}: {reason}", .path.display())]
    ParseError {
        path: PathBuf,
        line: usize,
        #[source]
        reason: RowError,
    },

    #[error(
        "{} is not an (index, x, y) table: line {line} has {found} columns, expected at least {expected}",
        .path.display()
    )]
    MalformedFormat {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Serializable discriminant of [`LoadError`], for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorKind {
    NotFound,
    EmptyFile,
    ParseError,
    MalformedFormat,
    Io,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::NotFound { .. } => LoadErrorKind::NotFound,
            LoadError::EmptyFile { .. } => LoadErrorKind::EmptyFile,
            LoadError::ParseError { .. } => LoadErrorKind::ParseError,
            LoadError::MalformedFormat { .. } => LoadErrorKind::MalformedFormat,
            LoadError::Io { .. } => LoadErrorKind::Io,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::EmptyFile { path }
            | LoadError::ParseError { path, .. }
            | LoadError::MalformedFormat { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }

    fn from_table(path: &Path, err: TableError) -> Self {
        let path = path.to_path_buf();
        match err {
            TableError::Row { line, reason } => LoadError::ParseError { path, line, reason },
            TableError::Narrow {
                line,
                expected,
                found,
            } => LoadError::MalformedFormat {
                path,
                line,
                expected,
                found,
            },
        }
    }
}

/// Non-fatal findings. Loading proceeds with whatever was parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    CountMismatch { expected: usize, found: usize },
}

impl LoadWarning {
    pub fn message(&self) -> String {
        match self {
            LoadWarning::CountMismatch { expected, found } => {
                format!("expected {expected} circles, found {found}")
            }
        }
    }
}

/// A successfully loaded, normalized packing.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPacking {
    pub packing: Packing,
    pub warnings: Vec<LoadWarning>,
}

// ────────────────────────────────────────────────────────────────────────────
// Loading
// ────────────────────────────────────────────────────────────────────────────

/// Reads, validates and normalizes the coordinate table at `path`.
///
/// This is the only blocking call in the engine; async callers should run it on
/// a blocking thread.
pub fn load_packing_file(
    path: &Path,
    config: &PackingConfig,
    options: &LoaderOptions,
) -> Result<LoadedPacking, LoadError> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() == 0 {
        return Err(LoadError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let text = std::str::from_utf8(&bytes).map_err(|e| LoadError::ParseError {
        path: path.to_path_buf(),
        line: line_of_offset(&bytes, e.valid_up_to()),
        reason: RowError::NotUtf8,
    })?;

    let raw = parse_coordinates(text).map_err(|e| LoadError::from_table(path, e))?;
    if raw.is_empty() {
        return Err(LoadError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let mut warnings = Vec::new();
    if raw.len() != options.expected_count {
        let warning = LoadWarning::CountMismatch {
            expected: options.expected_count,
            found: raw.len(),
        };
        warn!("{}: {}", path.display(), warning.message());
        warnings.push(warning);
    }

    let radius = config.radius();
    let packing = Packing::measured(normalize(&raw, radius), radius);
    info!(
        "Loaded {} circles from {} ({:.4} x {:.4})",
        packing.len(),
        path.display(),
        packing.packing_width,
        packing.packing_height
    );

    Ok(LoadedPacking { packing, warnings })
}

fn io_error(path: &Path, err: io::Error) -> LoadError {
    if err.kind() == io::ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// 1-based line number containing byte `offset`.
fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Parses the raw `(x, y)` columns of a coordinate table.
///
/// Returns an empty vector when the text holds no data rows. Columns past the
/// third are ignored and may vary from row to row. A table in which no row
/// reaches three columns has no index column to discard and is rejected as a
/// whole; a single short row among full ones is a row error.
pub fn parse_coordinates(text: &str) -> Result<Vec<Circle>, TableError> {
    let rows: Vec<(usize, Vec<&str>)> = text
        .lines()
        .enumerate()
        .map(|(idx, raw_line)| {
            let content = raw_line.split('#').next().unwrap_or_default();
            (idx + 1, content.split_whitespace().collect::<Vec<_>>())
        })
        .filter(|(_, tokens)| !tokens.is_empty())
        .collect();

    if let Some((line, tokens)) = rows.first() {
        if rows.iter().all(|(_, t)| t.len() < MIN_COLUMNS) {
            return Err(TableError::Narrow {
                line: *line,
                expected: MIN_COLUMNS,
                found: tokens.len(),
            });
        }
    }

    let mut circles = Vec::with_capacity(rows.len());
    for (line, tokens) in rows {
        if tokens.len() < MIN_COLUMNS {
            return Err(TableError::Row {
                line,
                reason: RowError::MissingColumns {
                    found: tokens.len(),
                },
            });
        }

        let x = parse_coordinate(tokens[1]).map_err(|reason| TableError::Row { line, reason })?;
        let y = parse_coordinate(tokens[2]).map_err(|reason| TableError::Row { line, reason })?;
        circles.push(Circle::new(x, y));
    }

    Ok(circles)
}

fn parse_coordinate(token: &str) -> Result<f64, RowError> {
    let value: f64 = token.parse().map_err(|source| RowError::InvalidNumber {
        token: token.to_string(),
        source,
    })?;
    if !value.is_finite() {
        return Err(RowError::NonFinite {
            token: token.to_string(),
        });
    }
    Ok(value)
}

/// Shifts centers so the lowest disc edge on each axis sits at zero.
///
/// Already-normalized input (minimum center exactly `radius` on both axes) is
/// returned unchanged.
pub fn normalize(centers: &[Circle], radius: f64) -> Vec<Circle> {
    let Some((min_x, min_y)) = min_corner(centers) else {
        return Vec::new();
    };
    if min_x == radius && min_y == radius {
        return centers.to_vec();
    }
    centers
        .iter()
        .map(|c| Circle::new((c.x - min_x) + radius, (c.y - min_y) + radius))
        .collect()
}
