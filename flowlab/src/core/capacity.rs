//! Edge capacities and the ways of reading them from edge attributes.
//!
//! Flow algorithms are generic over the capacity type. Integers give exact
//! results, floating point types are supported for graphs such as fractional
//! capacities, but the usual rounding caveats apply.

use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

pub trait Capacity:
    PartialOrd + Add<Self, Output = Self> + Sub<Self, Output = Self> + Copy + Debug + Sized
{
    /// Type that holds sums of many capacities without overflow. Flow values
    /// and excesses are accumulated in it.
    type Sum: Capacity;

    fn zero() -> Self;
    fn one() -> Self;

    /// Capacity of an unconstrained edge.
    ///
    /// For integers, this is the maximum value of the type, for floats the
    /// positive infinity.
    fn inf() -> Self;

    fn is_unsigned() -> bool;

    /// Addition that does not overflow for integer types. It is used when
    /// summing up all capacities of a graph.
    fn saturating_add(self, other: Self) -> Self;

    fn widen(self) -> Self::Sum;

    /// Converts a sum back, or returns `None` if it does not fit.
    fn narrow(sum: Self::Sum) -> Option<Self>;

    fn is_inf(&self) -> bool {
        *self == Self::inf()
    }
}

pub trait GetCapacity<E, C>
where
    C: Capacity,
{
    fn get(&self, edge: &E) -> C;
}

impl<F, E, C> GetCapacity<E, C> for F
where
    F: Fn(&E) -> C,
    C: Capacity,
{
    fn get(&self, edge: &E) -> C {
        (self)(edge)
    }
}

/// Uses the edge attribute itself as the capacity.
#[derive(Debug, Clone, Copy)]
pub struct Identity;

impl<E> GetCapacity<E, E> for Identity
where
    E: Capacity,
{
    fn get(&self, edge: &E) -> E {
        *edge
    }
}

/// Every edge has capacity one, regardless of its attribute.
#[derive(Debug, Clone, Copy)]
pub struct Unit;

impl<E, C> GetCapacity<E, C> for Unit
where
    C: Capacity,
{
    fn get(&self, _edge: &E) -> C {
        C::one()
    }
}

macro_rules! impl_int_capacity {
    ($ty:ty, $is_unsigned:expr, $sum:ty) => {
        impl Capacity for $ty {
            type Sum = $sum;

            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn saturating_add(self, other: Self) -> Self {
                <$ty>::saturating_add(self, other)
            }

            fn widen(self) -> $sum {
                self as $sum
            }

            fn narrow(sum: $sum) -> Option<Self> {
                <$ty>::try_from(sum).ok()
            }
        }
    };
}

impl_int_capacity!(i32, false, i128);
impl_int_capacity!(i64, false, i128);
impl_int_capacity!(i128, false, i128);
impl_int_capacity!(isize, false, i128);
impl_int_capacity!(u8, true, u128);
impl_int_capacity!(u16, true, u128);
impl_int_capacity!(u32, true, u128);
impl_int_capacity!(u64, true, u128);
impl_int_capacity!(u128, true, u128);
impl_int_capacity!(usize, true, u128);

macro_rules! impl_float_capacity {
    ($ty:ty) => {
        impl Capacity for $ty {
            type Sum = f64;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn saturating_add(self, other: Self) -> Self {
                self + other
            }

            fn widen(self) -> f64 {
                self as f64
            }

            fn narrow(sum: f64) -> Option<Self> {
                Some(sum as $ty)
            }
        }
    };
}

impl_float_capacity!(f32);
impl_float_capacity!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_sum_of_integers() {
        assert_eq!(Capacity::saturating_add(u8::MAX - 1, 5u8), u8::MAX);
        assert_eq!(Capacity::saturating_add(2i32, 3i32), 5);
    }

    #[test]
    fn sums_are_wide() {
        let sum = 200u8.widen() + 200u8.widen();

        assert_eq!(sum, 400u128);
        assert_eq!(u8::narrow(sum), None);
        assert_eq!(u8::narrow(sum - 200), Some(200));
        assert_eq!(i32::narrow(-5i32.widen()), Some(-5));
        assert_eq!(f32::narrow(1.5f32.widen()), Some(1.5));
    }

    #[test]
    fn infinity() {
        assert!(u32::inf().is_inf());
        assert!(f64::inf().is_inf());
        assert!(!1.5f64.is_inf());
    }

    #[test]
    fn accessors() {
        assert_eq!(GetCapacity::<u32, u32>::get(&Identity, &7), 7);
        assert_eq!(GetCapacity::<&str, u64>::get(&Unit, &"edge"), 1);
        assert_eq!(GetCapacity::<(u8, i32), i32>::get(&|e: &(u8, i32)| e.1, &(0, -4)), -4);
    }
}
