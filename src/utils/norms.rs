//! Vector and matrix norm computations
//!
//! Norms are always real-valued, also for complex elements.

use ndarray::{ArrayView1, ArrayView2};

use crate::numeric::Scalar;

/// 2-norm (Euclidean norm) of a vector
pub fn norm_2<T: Scalar>(vec: ArrayView1<'_, T>) -> f64 {
    let mut sum = 0.0;
    for &x in vec.iter() {
        let a = x.abs();
        sum += a * a;
    }
    sum.sqrt()
}

/// Frobenius norm of a matrix
pub fn norm_frobenius<T: Scalar>(mat: ArrayView2<'_, T>) -> f64 {
    let mut sum = 0.0;
    for &x in mat.iter() {
        let a = x.abs();
        sum += a * a;
    }
    sum.sqrt()
}
