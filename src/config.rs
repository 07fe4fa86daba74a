//! Environment configuration: `.env` loading and gas data discovery.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing::debug;

use crate::error::*;
use crate::gas::GasTable;

/// Environment variable naming the gas property file.
pub const GAS_DATA_PATH_VAR: &str = "GAS_DATA_PATH";

/// Environment variable holding the log filter for the CLI.
pub const LOG_VAR: &str = "FLOW_CALC_LOG";

const STANDARD_PATHS: [&str; 2] = ["gas_data.csv", "data/gas_data.csv"];

/// Where the gas table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GasDataSource {
    File(PathBuf),
    Bundled,
}

impl std::fmt::Display for GasDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GasDataSource::File(path) => write!(f, "{}", path.display()),
            GasDataSource::Bundled => write!(f, "bundled gas table"),
        }
    }
}

// ── .env loading (once) ──────────────────────────────────────────────

/// Places a `.env` file is looked for, in order: the working directory,
/// then the directory holding the executable.
pub fn dotenv_candidates(cwd: &Path, exe: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(".env")];
    if let Some(dir) = exe.and_then(Path::parent) {
        let beside_exe = dir.join(".env");
        if !candidates.contains(&beside_exe) {
            candidates.push(beside_exe);
        }
    }
    candidates
}

/// Load the first `.env` found by [`dotenv_candidates`].  Variables already
/// set in the environment are kept.  Runs at most once per process.
pub fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let exe = env::current_exe().ok();
        for path in dotenv_candidates(&cwd, exe.as_deref()) {
            if !path.is_file() {
                continue;
            }
            match dotenvy::from_path(&path) {
                Ok(()) => debug!(path = %path.display(), "loaded .env"),
                Err(e) => debug!(path = %path.display(), error = %e, "ignoring unreadable .env"),
            }
            return;
        }
    });
}

// ── Path discovery ───────────────────────────────────────────────────

/// Locate the gas property file.
///
/// `GAS_DATA_PATH` wins and must exist.  Otherwise the standard locations
/// are tried relative to the working directory; `Bundled` when none exist.
pub fn find_gas_data() -> Result<GasDataSource> {
    load_dotenv();
    resolve_gas_data(env::var(GAS_DATA_PATH_VAR).ok().as_deref(), Path::new("."))
}

/// Discovery with the configured value and search root made explicit.
pub fn resolve_gas_data(configured: Option<&str>, root: &Path) -> Result<GasDataSource> {
    if let Some(path) = configured.filter(|p| !p.trim().is_empty()) {
        let path = PathBuf::from(path);
        if path.exists() { return Ok(GasDataSource::File(path)); }
        return Err(FlowError::DataLoad(format!(
            "{GAS_DATA_PATH_VAR}={} (file does not exist)",
            path.display()
        )));
    }

    for candidate in STANDARD_PATHS {
        let path = root.join(candidate);
        if path.exists() {
            return Ok(GasDataSource::File(path));
        }
        debug!(path = %path.display(), "no gas data here");
    }
    Ok(GasDataSource::Bundled)
}

/// Load the gas table from the configured source.
pub fn load_gas_table() -> Result<(GasTable, GasDataSource)> {
    let source = find_gas_data()?;
    let table = match &source {
        GasDataSource::File(path) => GasTable::load(path)?,
        GasDataSource::Bundled => GasTable::bundled()?,
    };
    Ok((table, source))
}
