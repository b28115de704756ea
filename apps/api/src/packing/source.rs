//! Packing source selection — maps a caller's choice to a fresh packing.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::packing::config::{LoaderOptions, PackingConfig};
use crate::packing::grid::generate_grid;
use crate::packing::hexagonal::{generate_hexagonal, HexLayout};
use crate::packing::loader::{load_packing_file, LoadError, LoadWarning};
use crate::packing::model::{Circle, Packing};

/// The packings a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackingSource {
    /// A single coin, for scale.
    Reference,
    Grid,
    Hexagonal,
    /// The published optimum, read from the coordinate file.
    Optimal,
}

impl PackingSource {
    pub const ALL: [PackingSource; 4] = [
        PackingSource::Reference,
        PackingSource::Grid,
        PackingSource::Hexagonal,
        PackingSource::Optimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackingSource::Reference => "reference",
            PackingSource::Grid => "grid",
            PackingSource::Hexagonal => "hexagonal",
            PackingSource::Optimal => "optimal",
        }
    }

    /// Circle count the source is expected to produce.
    pub fn expected_count(&self, settings: &EngineSettings) -> usize {
        match self {
            PackingSource::Reference => 1,
            PackingSource::Grid => settings.config.circles_per_side().pow(2),
            PackingSource::Hexagonal => HexLayout::for_config(&settings.config).total(),
            PackingSource::Optimal => settings.loader.expected_count,
        }
    }
}

impl fmt::Display for PackingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSource(pub String);

impl fmt::Display for UnknownSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown packing source '{}' (expected one of: reference, grid, hexagonal, optimal)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSource {}

impl FromStr for PackingSource {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackingSource::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSource(s.to_string()))
    }
}

/// Everything the engine needs to resolve any source.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub config: PackingConfig,
    pub optimal_path: PathBuf,
    pub loader: LoaderOptions,
}

/// Outcome of resolving a source. On failure `packing` is empty and `error` is set.
#[derive(Debug)]
pub struct PackingReport {
    pub source: PackingSource,
    pub packing: Packing,
    pub warnings: Vec<LoadWarning>,
    pub error: Option<LoadError>,
}

impl PackingReport {
    fn ok(source: PackingSource, packing: Packing) -> Self {
        Self {
            source,
            packing,
            warnings: Vec::new(),
            error: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packing.is_empty()
    }

    /// Splits the report into the packing with its warnings, or the failure.
    pub fn into_result(self) -> Result<(Packing, Vec<LoadWarning>), LoadError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok((self.packing, self.warnings)),
        }
    }
}

/// Builds a fresh packing for `source`. Never panics; loader failures are
/// reported through [`PackingReport::error`].
pub fn resolve(source: PackingSource, settings: &EngineSettings) -> PackingReport {
    let config = &settings.config;
    match source {
        PackingSource::Reference => PackingReport::ok(source, reference_packing(config)),
        PackingSource::Grid => PackingReport::ok(source, generate_grid(config)),
        PackingSource::Hexagonal => PackingReport::ok(source, generate_hexagonal(config)),
        PackingSource::Optimal => {
            match load_packing_file(&settings.optimal_path, config, &settings.loader) {
                Ok(loaded) => PackingReport {
                    source,
                    packing: loaded.packing,
                    warnings: loaded.warnings,
                    error: None,
                },
                Err(err) => PackingReport {
                    source,
                    packing: Packing::empty(),
                    warnings: Vec::new(),
                    error: Some(err),
                },
            }
        }
    }
}

/// One coin in the normalized frame; centered in the square it sits at the middle.
pub fn reference_packing(config: &PackingConfig) -> Packing {
    let r = config.radius();
    Packing::measured(vec![Circle::new(r, r)], r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::loader::LoadErrorKind;
    use std::io::Write;

    fn settings_with_path(path: PathBuf) -> EngineSettings {
        EngineSettings {
            config: PackingConfig::default(),
            optimal_path: path,
            loader: LoaderOptions::default(),
        }
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for source in PackingSource::ALL {
            assert_eq!(source.as_str().parse::<PackingSource>(), Ok(source));
        }
        assert_eq!("Grid".parse::<PackingSource>(), Ok(PackingSource::Grid));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "spiral".parse::<PackingSource>().unwrap_err();
        assert!(err.to_string().contains("spiral"));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&PackingSource::Hexagonal).unwrap();
        assert_eq!(json, "\"hexagonal\"");
    }

    #[test]
    fn test_expected_counts_default() {
        let settings = settings_with_path(PathBuf::from("unused"));
        assert_eq!(PackingSource::Reference.expected_count(&settings), 1);
        assert_eq!(PackingSource::Grid.expected_count(&settings), 100);
        assert_eq!(PackingSource::Hexagonal.expected_count(&settings), 105);
        assert_eq!(PackingSource::Optimal.expected_count(&settings), 106);
    }

    #[test]
    fn test_resolve_reference() {
        let settings = settings_with_path(PathBuf::from("unused"));
        let report = resolve(PackingSource::Reference, &settings);
        assert!(report.error.is_none());
        assert_eq!(report.packing.centers, vec![Circle::new(0.5, 0.5)]);
        assert_eq!(report.packing.packing_width, 1.0);
        assert_eq!(report.packing.packing_height, 1.0);
    }

    #[test]
    fn test_resolve_generators() {
        let settings = settings_with_path(PathBuf::from("unused"));
        assert_eq!(resolve(PackingSource::Grid, &settings).packing.len(), 100);
        assert_eq!(resolve(PackingSource::Hexagonal, &settings).packing.len(), 105);
    }

    #[test]
    fn test_resolve_missing_optimal_file_returns_empty_packing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_with_path(dir.path().join("coords_106.txt"));
        let report = resolve(PackingSource::Optimal, &settings);
        assert!(report.is_empty());
        assert_eq!(report.packing.packing_width, 0.0);
        let err = report.into_result().unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::NotFound);
    }

    #[test]
    fn test_resolve_optimal_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 3.0 3.0").unwrap();
        writeln!(file, "2 -1.0 -1.0").unwrap();
        file.flush().unwrap();

        let report = resolve(PackingSource::Optimal, &settings_with_path(file.path().into()));
        let (packing, warnings) = report.into_result().unwrap();
        assert_eq!(packing.len(), 2);
        assert_eq!(packing.packing_width, 5.0);
        assert_eq!(
            warnings,
            vec![LoadWarning::CountMismatch {
                expected: 106,
                found: 2
            }]
        );
    }
}
