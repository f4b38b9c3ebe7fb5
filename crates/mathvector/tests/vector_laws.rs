//! Property tests for the algebraic laws of MathVector.

use approx::assert_relative_eq;
use mathvector::{MathVector, Orientation, VectorError};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Row), Just(Orientation::Column)]
}

fn values(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, len)
}

fn build(o: Orientation, values: Vec<f64>) -> MathVector {
    match o {
        Orientation::Row => MathVector::row(values).unwrap(),
        Orientation::Column => MathVector::column(values).unwrap(),
    }
}

/// Any vector, including one-element columns.
fn vector() -> impl Strategy<Value = MathVector> {
    (orientation(), prop::collection::vec(-1.0e6f64..1.0e6, 1..32))
        .prop_map(|(o, v)| build(o, v))
}

/// Two vectors with the same orientation and length.
fn compatible_pair() -> impl Strategy<Value = (MathVector, MathVector)> {
    (orientation(), 1usize..32).prop_flat_map(|(o, len)| {
        (values(len), values(len)).prop_map(move |(a, b)| (build(o, a), build(o, b)))
    })
}

fn rebuild(v: &MathVector) -> MathVector {
    build(v.orientation(), v.as_slice().to_vec())
}

proptest! {
    #[test]
    fn prop_single_row_is_row(cols in prop::collection::vec(any::<f64>(), 1..64)) {
        let v = MathVector::new(&[cols.clone()]).unwrap();
        prop_assert!(v.is_row());
        prop_assert_eq!(v.len(), cols.len());
    }

    #[test]
    fn prop_single_column_is_column(rows in prop::collection::vec(-1.0e3f64..1.0e3, 2..64)) {
        let layout: Vec<Vec<f64>> = rows.iter().map(|&x| vec![x]).collect();
        let v = MathVector::new(&layout).unwrap();
        prop_assert!(v.is_column());
        prop_assert_eq!(v.len(), rows.len());
    }

    #[test]
    fn prop_matrix_is_invalid(nrows in 2usize..8, ncols in 2usize..8) {
        let layout = vec![vec![1.0; ncols]; nrows];
        let is_invalid = matches!(MathVector::new(&layout), Err(VectorError::InvalidShape { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn prop_jagged_column_is_invalid(nrows in 2usize..16, bad in 1usize..16, width in 2usize..4) {
        let bad = bad % nrows;
        let mut layout = vec![vec![0.5]; nrows];
        layout[bad] = vec![0.5; width];
        let is_invalid = matches!(MathVector::new(&layout), Err(VectorError::InvalidShape { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn prop_equality_is_reflexive_and_symmetric(v in vector()) {
        let copy = rebuild(&v);
        prop_assert_eq!(&v, &v);
        prop_assert_eq!(&v, &copy);
        prop_assert_eq!(&copy, &v);
    }

    #[test]
    fn prop_equality_is_transitive(v in vector()) {
        let b = v.clone();
        let c = rebuild(&b);
        prop_assert!(v == b && b == c);
        prop_assert_eq!(&v, &c);
    }

    #[test]
    fn prop_transpose_never_equal(v in vector()) {
        prop_assert_ne!(&v, &v.transpose());
    }

    #[test]
    fn prop_transpose_round_trip(v in vector()) {
        prop_assert_eq!(v.transpose().transpose(), v);
    }

    #[test]
    fn prop_serde_round_trip(v in vector()) {
        let json = serde_json::to_string(&v).unwrap();
        let back: MathVector = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.orientation(), v.orientation());
        prop_assert_eq!(back, v);
    }

    #[test]
    fn prop_single_element_keeps_orientation(o in orientation(), x in -1.0e6f64..1.0e6) {
        let v = build(o, vec![x]);
        prop_assert_eq!(v.orientation(), o);
        prop_assert_eq!(v.transpose().orientation(), o.transposed());
        prop_assert_ne!(&v, &v.transpose());
    }

    #[test]
    fn prop_add_commutes((a, b) in compatible_pair()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn prop_add_and_dot_reject_mismatch(v in vector(), extra in 1usize..4) {
        let transposed = v.transpose();
        prop_assert!(v.add(&transposed).is_err());
        prop_assert!(v.dot_product(&transposed).is_err());

        let mut longer = v.as_slice().to_vec();
        longer.extend(std::iter::repeat(1.0).take(extra));
        let longer = build(v.orientation(), longer);
        prop_assert!(v.add(&longer).is_err());
        prop_assert!(v.dot_product(&longer).is_err());
    }

    #[test]
    fn prop_dot_with_self_is_squared_magnitude(v in vector()) {
        let dot = v.dot_product(&v).unwrap();
        assert_relative_eq!(dot.sqrt(), v.magnitude(), max_relative = 1e-9);
    }

    #[test]
    fn prop_magnitude_non_negative(v in vector()) {
        prop_assert!(v.magnitude() >= 0.0);
    }

    #[test]
    fn prop_zero_vector_cannot_normalize(o in orientation(), len in 1usize..32) {
        let mut v = build(o, vec![0.0; len]);
        prop_assert_eq!(v.magnitude(), 0.0);
        prop_assert_eq!(v.normalize(), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn prop_normalize_gives_unit_magnitude(v in vector()) {
        prop_assume!(v.magnitude() > 1e-3);
        let mut v = v;
        v.normalize().unwrap();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-9);
    }
}
