use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::slice::Iter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorError};
use crate::math::layout;

/// Whether a vector is laid out along a row or down a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Row,
    Column,
}

impl Orientation {
    pub fn transposed(self) -> Self {
        match self {
            Orientation::Row => Orientation::Column,
            Orientation::Column => Orientation::Row,
        }
    }

    /// Two-dimensional layout of `values` in this orientation.
    ///
    /// A single value always lays out as `[[x]]`, whatever the orientation.
    pub fn layout(self, values: &[f64]) -> Vec<Vec<f64>> {
        layout::unflatten(self, values)
    }

    fn separator(self) -> &'static str {
        match self {
            Orientation::Row => " ",
            Orientation::Column => "\n",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Row => write!(f, "row"),
            Orientation::Column => write!(f, "column"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row" => Ok(Orientation::Row),
            "column" | "col" => Ok(Orientation::Column),
            _ => Err(format!(
                "Unknown orientation: {}. Expected one of: row, column",
                s
            )),
        }
    }
}

/// A row or column vector of `f64` values.
///
/// The orientation is fixed at construction and the element buffer is never
/// empty. Binary operations (`add`, `dot_product`) require both operands to
/// share orientation and length.
///
/// Serializes with an explicit tag, e.g.
/// `{"orientation":"column","elements":[3.0,1.0]}`, so a one-element column
/// keeps its orientation. Deserialization rejects an empty `elements` list.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "TaggedVector", into = "TaggedVector")]
pub struct MathVector {
    orientation: Orientation,
    data: Vec<f64>,
}

/// Orientation plus flat elements: the serialized form of a `MathVector`.
///
/// Unvalidated; convert with `MathVector::try_from` to check it is non-empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaggedVector {
    pub orientation: Orientation,
    pub elements: Vec<f64>,
}

impl MathVector {
    /// Create a vector from a rows-of-columns layout.
    ///
    /// A layout with exactly one row becomes a row vector whose length is that
    /// row's column count. A layout whose rows each hold exactly one value
    /// becomes a column vector whose length is the row count.
    ///
    /// # Errors
    ///
    /// `VectorError::InvalidShape` when the layout has no rows, the first row
    /// has no columns, a multi-row layout has a row that does not hold exactly
    /// one value, or the layout has several rows and several columns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mathvector::{MathVector, Orientation};
    ///
    /// let row = MathVector::new(&[[3.0, 1.0, 2.0]]).unwrap();
    /// assert_eq!(row.orientation(), Orientation::Row);
    /// assert_eq!(row.to_string(), "3.0 1.0 2.0");
    ///
    /// assert!(MathVector::new(&[[1.0, 2.0], [3.0, 4.0]]).is_err());
    /// ```
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let (orientation, data) = layout::flatten(rows)?;
        log::trace!(
            "Constructed {} vector of length {} from {:?} layout",
            orientation,
            data.len(),
            layout::shape(rows)
        );
        Ok(Self { orientation, data })
    }

    /// Create a row vector from a flat list of values.
    pub fn row(values: Vec<f64>) -> Result<Self> {
        Self::from_flat(Orientation::Row, values)
    }

    /// Create a column vector from a flat list of values.
    pub fn column(values: Vec<f64>) -> Result<Self> {
        Self::from_flat(Orientation::Column, values)
    }

    fn from_flat(orientation: Orientation, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            let shape = match orientation {
                Orientation::Row => (1, 0),
                Orientation::Column => (0, 0),
            };
            return Err(VectorError::invalid_shape(
                shape.0,
                shape.1,
                "a vector must hold at least one value",
            ));
        }
        Ok(Self {
            orientation,
            data: values,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_row(&self) -> bool {
        self.orientation == Orientation::Row
    }

    pub fn is_column(&self) -> bool {
        self.orientation == Orientation::Column
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; construction rejects empty vectors.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Two-dimensional layout of this vector: `1 x n` for rows, `n x 1` for
    /// columns.
    ///
    /// A one-element column yields `[[x]]`, which [`MathVector::new`]
    /// classifies as a row; use [`MathVector::column`] to rebuild it.
    pub fn to_layout(&self) -> Vec<Vec<f64>> {
        self.orientation.layout(&self.data)
    }

    /// Multiply every element by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        log::trace!("Scaling {} vector of length {} by {}", self.orientation, self.len(), factor);
        for value in self.data.iter_mut() {
            *value *= factor;
        }
    }

    /// A new vector with the opposite orientation and the same elements.
    pub fn transpose(&self) -> MathVector {
        MathVector {
            orientation: self.orientation.transposed(),
            data: self.data.clone(),
        }
    }

    /// Element-wise sum of `self` and `other` as a new vector.
    ///
    /// # Errors
    ///
    /// `VectorError::IncompatibleOperands` when the orientations or lengths differ.
    pub fn add(&self, other: &MathVector) -> Result<MathVector> {
        self.check_compatible(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(MathVector {
            orientation: self.orientation,
            data,
        })
    }

    /// Sum of the pairwise products of `self` and `other`.
    ///
    /// # Errors
    ///
    /// `VectorError::IncompatibleOperands` when the orientations or lengths differ.
    pub fn dot_product(&self, other: &MathVector) -> Result<f64> {
        self.check_compatible(other)?;
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            // SAFETY: SSE2 is part of the x86_64 baseline and both slices have
            // the same length after `check_compatible`.
            Ok(unsafe { dot_simd_f64(self.as_slice(), other.as_slice()) })
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            Ok(dot_scalar_f64(self.as_slice(), other.as_slice()))
        }
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale this vector in place to unit magnitude.
    ///
    /// # Errors
    ///
    /// `VectorError::DivisionByZero` for an all-zero vector, which is left
    /// unchanged.
    pub fn normalize(&mut self) -> Result<()> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        log::trace!("Normalizing vector with magnitude {}", magnitude);
        self.scale(1.0 / magnitude);
        Ok(())
    }

    /// Compare with `other` allowing an absolute difference of `tolerance`
    /// per element. Orientation and length must still match exactly.
    pub fn approx_eq(&self, other: &MathVector, tolerance: f64) -> bool {
        self.orientation == other.orientation
            && self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    fn check_compatible(&self, other: &MathVector) -> Result<()> {
        if self.orientation != other.orientation || self.len() != other.len() {
            return Err(VectorError::IncompatibleOperands {
                lhs: (self.orientation, self.len()),
                rhs: (other.orientation, other.len()),
            });
        }
        Ok(())
    }
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
unsafe fn dot_simd_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    use std::arch::x86_64::*;

    let mut i = 0usize;
    let mut acc = _mm_setzero_pd();

    while i + 2 <= lhs.len() {
        let a = _mm_loadu_pd(lhs.as_ptr().add(i));
        let b = _mm_loadu_pd(rhs.as_ptr().add(i));
        acc = _mm_add_pd(acc, _mm_mul_pd(a, b));
        i += 2;
    }

    let mut buffer = [0f64; 2];
    _mm_storeu_pd(buffer.as_mut_ptr(), acc);
    let mut sum = buffer.iter().sum::<f64>();

    while i < lhs.len() {
        sum += lhs[i] * rhs[i];
        i += 1;
    }

    sum
}

impl PartialEq for MathVector {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation && self.data == other.data
    }
}

impl Hash for MathVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.orientation.hash(state);
        self.data.len().hash(state);
        for value in &self.data {
            // -0.0 == 0.0, so both must hash alike
            let canonical = if *value == 0.0 { 0.0f64 } else { *value };
            canonical.to_bits().hash(state);
        }
    }
}

impl Index<usize> for MathVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a MathVector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl TryFrom<TaggedVector> for MathVector {
    type Error = VectorError;

    fn try_from(tagged: TaggedVector) -> Result<Self> {
        MathVector::from_flat(tagged.orientation, tagged.elements)
    }
}

impl From<MathVector> for TaggedVector {
    fn from(value: MathVector) -> Self {
        TaggedVector {
            orientation: value.orientation,
            elements: value.data,
        }
    }
}

/// Elements separated by a space for rows and a newline for columns, with
/// no trailing separator. Values use the `f64` debug form (`3.0`, `-3.4`).
impl fmt::Display for MathVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.orientation.separator();
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{:?}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, "{}", separator)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &MathVector) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_scalar_dot_matches_manual_sum() {
        let lhs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let rhs = [0.5, -1.0, 2.0, 0.0, 1.0];
        assert_eq!(dot_scalar_f64(&lhs, &rhs), 0.5 - 2.0 + 6.0 + 0.0 + 5.0);
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    #[test]
    fn test_simd_dot_matches_scalar() {
        let lhs = [3.0, 1.0, 2.0, -4.0, 0.25];
        let rhs = [1.0, 1.0, 1.0, 2.0, 8.0];
        let simd = unsafe { dot_simd_f64(&lhs, &rhs) };
        assert_eq!(simd, dot_scalar_f64(&lhs, &rhs));
    }

    #[test]
    fn test_signed_zero_hashes_alike() {
        let a = MathVector::row(vec![0.0, 1.0]).unwrap();
        let b = MathVector::row(vec![-0.0, 1.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_orientation_participates_in_hash() {
        let row = MathVector::row(vec![1.0, 2.0]).unwrap();
        assert_ne!(hash_of(&row), hash_of(&row.transpose()));
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("Row".parse::<Orientation>().unwrap(), Orientation::Row);
        assert_eq!("col".parse::<Orientation>().unwrap(), Orientation::Column);
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_from_flat_rejects_empty() {
        assert!(matches!(
            MathVector::column(vec![]),
            Err(VectorError::InvalidShape { rows: 0, cols: 0, .. })
        ));
        assert!(matches!(
            MathVector::row(vec![]),
            Err(VectorError::InvalidShape { rows: 1, cols: 0, .. })
        ));
    }
}
