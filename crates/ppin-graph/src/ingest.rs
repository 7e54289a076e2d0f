use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ppin_core::errors::{ErrorInfo, NetError};

use crate::network::Network;

fn ingest_error(code: &str, path: &Path, err: impl ToString) -> NetError {
    NetError::Ingest(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Reads the tab-separated interaction file at `path` into a fresh network.
///
/// The graph core itself performs no I/O; this is the thin filesystem
/// adapter for callers whose interaction list lives on disk. Returns the
/// built network together with the display name used for report headers
/// (the file name without its directory). Malformed records surface as
/// parse errors carrying that name and the 1-based line number.
pub fn load_network_file(path: &Path) -> Result<(Network, String), NetError> {
    let file = File::open(path).map_err(|err| {
        ingest_error(
            "open-file",
            path,
            format!("failed to open {}: {err}", path.display()),
        )
    })?;
    let display_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line.map_err(|err| ingest_error("read-line", path, err))?);
    }
    let mut network = Network::new();
    network.load_from_lines(&display_name, &lines)?;
    Ok((network, display_name))
}
