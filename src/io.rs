// Plain-text fixture files used by the regression tests: one particle per
// line, eleven whitespace-separated floats in the fixed order
// [px py pz vx vy vz ax ay az radius charge]. Paired input/output
// directories are correlated by sorted filename.

use std::fs;
use std::path::{Path, PathBuf};

use ultraviolet::DVec3;

use crate::charge::Charge;
use crate::error::{Result, SimError};

/// One distance regression case: two fixture charges and the expected
/// distance between them.
#[derive(Clone, Debug)]
pub struct DistanceTest {
    pub a: Charge,
    pub b: Charge,
    pub expected: f64,
}

/// Reads charges from the inclusive line range `[line_start, line_end]` of
/// a fixture file.
pub fn read_charges_from_file<P: AsRef<Path>>(
    path: P,
    line_start: usize,
    line_end: usize,
) -> Result<Vec<Charge>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut charges = Vec::new();
    for line in content
        .lines()
        .skip(line_start)
        .take(line_end - line_start + 1)
    {
        charges.push(parse_charge_line(path, line)?);
    }
    Ok(charges)
}

fn parse_charge_line(path: &Path, line: &str) -> Result<Charge> {
    let fields = line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>().map_err(|_| SimError::MalformedFixture {
                path: path.display().to_string(),
                reason: format!("invalid float {tok:?}"),
            })
        })
        .collect::<Result<Vec<f64>>>()?;
    if fields.len() != 11 {
        return Err(SimError::MalformedFixture {
            path: path.display().to_string(),
            reason: format!("expected 11 fields per line, found {}", fields.len()),
        });
    }
    Ok(Charge {
        pos: DVec3::new(fields[0], fields[1], fields[2]),
        vel: DVec3::new(fields[3], fields[4], fields[5]),
        acc: DVec3::new(fields[6], fields[7], fields[8]),
        radius: fields[9],
        charge: fields[10],
        // Fixtures carry no mass or fixed flag; they exercise geometry only.
        mass: 0.0,
        fixed: false,
    })
}

/// Reads a single float from the last line of a file.
pub fn read_float_from_file<P: AsRef<Path>>(path: P) -> Result<f64> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let last = content.lines().last().unwrap_or("");
    last.trim()
        .parse::<f64>()
        .map_err(|_| SimError::MalformedFixture {
            path: path.display().to_string(),
            reason: format!("invalid float {last:?}"),
        })
}

/// Loads distance test cases from `dir`, pairing `dir/input` and
/// `dir/output` files by sorted filename. The counts must match and each
/// input file must hold at least two charges on its first two lines.
pub fn read_distance_tests<P: AsRef<Path>>(dir: P) -> Result<Vec<DistanceTest>> {
    let dir = dir.as_ref();
    let inputs = sorted_files(&dir.join("input"))?;
    let outputs = sorted_files(&dir.join("output"))?;
    if inputs.len() != outputs.len() {
        return Err(SimError::FixtureCountMismatch {
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }

    let mut tests = Vec::with_capacity(inputs.len());
    for (input, output) in inputs.iter().zip(outputs.iter()) {
        let charges = read_charges_from_file(input, 0, 1)?;
        if charges.len() < 2 {
            return Err(SimError::MalformedFixture {
                path: input.display().to_string(),
                reason: format!("expected 2 charges, found {}", charges.len()),
            });
        }
        tests.push(DistanceTest {
            a: charges[0],
            b: charges[1],
            expected: read_float_from_file(output)?,
        });
    }
    Ok(tests)
}

fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}
