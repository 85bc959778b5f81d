//! Shared test utilities and fixtures for catalog loader tests

use std::fs;
use std::path::{Path, PathBuf};


/// A valid basic line (6 columns)
pub const BASIC_LINE: &str = "A;Calbuco;2000;Salmon;Premium;5.5";

/// A valid full line (12 columns)
pub const FULL_LINE: &str =
    "Centro Norte;Calbuco;1500;Salmon Atlantico;Premium;7.25;Av. Costanera;120;Los Lagos;Ruta Norte;Ana Perez;2024-05-01";

/// Header line used by CSV fixtures
pub const CSV_HEADER_LINE: &str = "nombre;comuna;produccion;producto;tipo;precio";

/// Write a catalog fixture and return its path
pub fn write_catalog(dir: &Path, filename: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(filename);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}
