//! Whitespace-delimited text files.
//!
//! A matrix file holds one row per line; the first non-empty line fixes the
//! column count and the first empty line after it ends the matrix. A vector
//! file is a flat stream of numbers read to end of file, any number per line.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{LinalgError, Result};
use crate::io::number::{format_g, FULL_PRECISION_DIGITS};
use crate::layout::StorageOrder;
use crate::math::{Array1, Array2};

const INITIAL_CAPACITY: usize = 256;
const SHORT_PRECISION_DIGITS: usize = 6;

fn parse_token(token: &str, path: &Path, line: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| LinalgError::format(path, line, format!("'{}' is not a number", token)))
}

/// Parse a vector from `reader`; `path` only labels errors.
pub fn read_vector<R: BufRead>(reader: R, path: &Path) -> Result<Array1> {
    let mut values = Array1::with_capacity(INITIAL_CAPACITY)?;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LinalgError::io(path, e))?;
        for token in line.split_whitespace() {
            values.push(parse_token(token, path, idx + 1)?)?;
        }
    }
    Ok(values)
}

/// Parse a row-major matrix from `reader`; `path` only labels errors.
pub fn read_matrix<R: BufRead>(reader: R, path: &Path) -> Result<Array2> {
    let mut values = Array1::with_capacity(INITIAL_CAPACITY)?;
    let mut nrows = 0usize;
    let mut ncols = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LinalgError::io(path, e))?;
        let mut colcnt = 0usize;
        for token in line.split_whitespace() {
            values.push(parse_token(token, path, idx + 1)?)?;
            colcnt += 1;
        }

        if colcnt == 0 {
            if nrows == 0 {
                continue;
            }
            break;
        }
        if nrows == 0 {
            ncols = colcnt;
        } else if colcnt != ncols {
            return Err(LinalgError::format(
                path,
                idx + 1,
                format!("expected {} columns, found {}", ncols, colcnt),
            ));
        }
        nrows += 1;
    }

    if nrows == 0 {
        return Err(LinalgError::format(path, 0, "file contains no matrix rows"));
    }
    log::debug!("Read {}x{} matrix from {}", nrows, ncols, path.display());
    Array2::from_shape_vec((nrows, ncols), StorageOrder::RowMajor, values.to_vec())
}

/// Write one value per line with full precision.
pub fn write_vector<W: Write>(writer: &mut W, values: &Array1) -> std::io::Result<()> {
    for value in values.iter() {
        writeln!(writer, "{}", format_g(*value, FULL_PRECISION_DIGITS))?;
    }
    Ok(())
}

/// Write the logical rows of `a`, whatever its storage order.
pub fn write_matrix<W: Write>(writer: &mut W, a: &Array2, full_precision: bool) -> std::io::Result<()> {
    let digits = if full_precision {
        FULL_PRECISION_DIGITS
    } else {
        SHORT_PRECISION_DIGITS
    };
    let (rows, cols) = a.shape();
    for i in 0..rows {
        for j in 0..cols {
            write!(writer, "{} ", format_g(a[(i, j)], digits))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LinalgError::io(path, e))
}

fn save<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| LinalgError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| LinalgError::io(path, e))
}

impl Array1 {
    /// Read a vector file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        read_vector(open(path)?, path)
    }

    /// Write the live values, one per line, with 17 significant digits.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save(path.as_ref(), |w| write_vector(w, self))
    }
}

impl Array2 {
    /// Read a matrix file. The result is always row-major.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        read_matrix(open(path)?, path)
    }

    /// Write the matrix row by row. `full_precision` selects 17 significant
    /// digits instead of 6.
    pub fn to_file<P: AsRef<Path>>(&self, path: P, full_precision: bool) -> Result<()> {
        save(path.as_ref(), |w| write_matrix(w, self, full_precision))
    }
}
