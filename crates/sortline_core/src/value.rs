//! Values that can flow through an instrumented sort.
//!
//! Comparison sorts only need an ordering. The counting family (counting,
//! radix, pigeonhole) and bucket normalization additionally need an integer
//! key and a real-valued position, so those conversions are part of the
//! trait rather than bolted onto individual algorithms.

use std::fmt;

/// A sortable, copyable element of a recorded sequence.
///
/// `Default` supplies the filler for output buffers that are recorded
/// before every slot has been written.
pub trait SortValue: Copy + Default + PartialOrd + fmt::Debug + fmt::Display {
    /// Integer key, truncated toward zero for non-integral values.
    fn to_key(&self) -> i64;

    /// Real-valued magnitude used for range normalization.
    fn to_real(&self) -> f64;

    /// The same element with its key negated.
    #[must_use]
    fn negated(&self) -> Self;
}

macro_rules! impl_sort_value_int {
    ($($ty:ty),*) => {
        $(
            impl SortValue for $ty {
                fn to_key(&self) -> i64 {
                    *self as i64
                }

                fn to_real(&self) -> f64 {
                    *self as f64
                }

                fn negated(&self) -> Self {
                    self.wrapping_neg()
                }
            }
        )*
    };
}

impl_sort_value_int!(i32, i64);

impl SortValue for f64 {
    fn to_key(&self) -> i64 {
        *self as i64
    }

    fn to_real(&self) -> f64 {
        *self
    }

    fn negated(&self) -> Self {
        -*self
    }
}

impl SortValue for f32 {
    fn to_key(&self) -> i64 {
        *self as i64
    }

    fn to_real(&self) -> f64 {
        f64::from(*self)
    }

    fn negated(&self) -> Self {
        -*self
    }
}
