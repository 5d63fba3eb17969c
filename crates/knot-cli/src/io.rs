//! Plain-coordinate trace I/O.
//!
//! The on-disk format is one whitespace-separated `x y z` triple per line,
//! with blank lines and `#` comments ignored. This is the boundary the core
//! specifies: an ordered coordinate list in, an ordered coordinate list out,
//! index order doubling as connection order. Structure-file formats
//! (PDB/CIF) are deliberately not handled here.

use crate::error::{CliError, Result};
use knotpp::core::models::trace::BackboneTrace;
use nalgebra::Point3;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn read_trace(path: &Path) -> Result<BackboneTrace> {
    let content = fs::read_to_string(path)?;
    let mut positions = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |message: &str| CliError::TraceParsing {
            path: path.to_path_buf(),
            line: line_idx + 1,
            message: message.to_string(),
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(parse_error(&format!(
                "expected 3 coordinates, found {}",
                fields.len()
            )));
        }

        let mut coords = [0.0f64; 3];
        for (slot, field) in coords.iter_mut().zip(&fields) {
            *slot = field
                .parse()
                .map_err(|_| parse_error(&format!("invalid coordinate '{}'", field)))?;
        }
        positions.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    Ok(BackboneTrace::from_positions(positions))
}

pub fn write_trace(path: &Path, trace: &BackboneTrace) -> Result<()> {
    let mut out = Vec::new();
    for position in trace.iter() {
        writeln!(out, "{} {} {}", position.x, position.y, position.z)?;
    }
    fs::write(path, out)?;
    Ok(())
}
