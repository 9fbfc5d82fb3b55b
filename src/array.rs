// Copyright 2025 Cowboy AI, LLC.

//! The numeric value capability
//!
//! Every physical quantity in the trait layer is returned as an opaque
//! array-like value supplied by a numeric backend. This crate does not
//! compute with those values; it only requires the minimal contract below so
//! that conformant libraries can interoperate. A scalar `f64` implementation
//! is provided so the crate is usable without a tensor backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Element type of an array-like value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dtype {
    /// Boolean elements
    Bool,
    /// 32-bit signed integer elements
    Int32,
    /// 64-bit signed integer elements
    Int64,
    /// 32-bit floating point elements
    Float32,
    /// 64-bit floating point elements
    Float64,
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dtype::Bool => write!(f, "bool"),
            Dtype::Int32 => write!(f, "int32"),
            Dtype::Int64 => write!(f, "int64"),
            Dtype::Float32 => write!(f, "float32"),
            Dtype::Float64 => write!(f, "float64"),
        }
    }
}

/// Minimal contract on a numeric/array-like return value
///
/// Arithmetic and comparison come from the standard operator traits; the
/// methods here add the shape/dtype introspection a consumer needs to route
/// a value without knowing its backend.
pub trait CosmologyArray:
    Clone
    + fmt::Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Number of dimensions; zero for scalars
    fn ndim(&self) -> usize;

    /// Extent of each dimension; empty for scalars
    fn shape(&self) -> Vec<usize>;

    /// Element type
    fn dtype(&self) -> Dtype;

    /// Total number of elements
    fn size(&self) -> usize {
        self.shape().iter().product()
    }
}

impl CosmologyArray for f64 {
    fn ndim(&self) -> usize {
        0
    }

    fn shape(&self) -> Vec<usize> {
        Vec::new()
    }

    fn dtype(&self) -> Dtype {
        Dtype::Float64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_f64_is_an_array() {
        let z = 0.5_f64;
        assert_eq!(z.ndim(), 0);
        assert!(z.shape().is_empty());
        assert_eq!(z.dtype(), Dtype::Float64);
        assert_eq!(z.size(), 1);
    }

    #[test]
    fn test_operators_available_through_the_bound() {
        fn sum<A: CosmologyArray>(a: A, b: A) -> A {
            a + b
        }
        assert_eq!(sum(1.0, 2.0), 3.0);
    }

    #[test]
    fn test_dtype_display() {
        assert_eq!(Dtype::Float64.to_string(), "float64");
        assert_eq!(Dtype::Bool.to_string(), "bool");
    }
}
