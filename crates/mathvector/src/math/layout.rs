//! Two-dimensional input layouts (a slice of rows, each a slice of columns)
//! and their classification into a row or column vector.

use crate::error::{Result, VectorError};
use crate::math::vector::Orientation;

/// Shape of a layout as `(rows, columns of the first row)`.
pub fn shape<R: AsRef<[f64]>>(rows: &[R]) -> (usize, usize) {
    let cols = rows.first().map_or(0, |row| row.as_ref().len());
    (rows.len(), cols)
}

/// Classify `rows` and copy its values into a flat buffer in source order.
///
/// A single row yields a row vector; several rows with exactly one column
/// each yield a column vector. Anything else is rejected with
/// `VectorError::InvalidShape`.
pub fn flatten<R: AsRef<[f64]>>(rows: &[R]) -> Result<(Orientation, Vec<f64>)> {
    let (nrows, ncols) = shape(rows);
    if nrows == 0 {
        return Err(VectorError::invalid_shape(
            nrows,
            ncols,
            "number of rows must be positive",
        ));
    }
    if ncols == 0 {
        return Err(VectorError::invalid_shape(
            nrows,
            ncols,
            "number of columns must be positive",
        ));
    }

    if nrows == 1 {
        return Ok((Orientation::Row, rows[0].as_ref().to_vec()));
    }

    if ncols == 1 {
        let mut data = Vec::with_capacity(nrows);
        for row in rows {
            match row.as_ref() {
                [value] => data.push(*value),
                _ => {
                    return Err(VectorError::invalid_shape(
                        nrows,
                        ncols,
                        "for each row, the number of columns must be 1",
                    ))
                }
            }
        }
        return Ok((Orientation::Column, data));
    }

    Err(VectorError::invalid_shape(
        nrows,
        ncols,
        "either the number of rows or the number of columns must be 1",
    ))
}

/// Inverse of [`flatten`]: a `1 x n` layout for rows, `n x 1` for columns.
pub fn unflatten(orientation: Orientation, values: &[f64]) -> Vec<Vec<f64>> {
    match orientation {
        Orientation::Row => vec![values.to_vec()],
        Orientation::Column => values.iter().map(|&v| vec![v]).collect(),
    }
}
