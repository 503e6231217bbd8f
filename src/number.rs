use num_traits::{cast, NumCast};
use std::ops::{Add, Div, Mul, Neg, Sub};

cfg_if::cfg_if! {
    if #[cfg(feature = "fixed_point")] {
        use fixed::traits::{FromFixed, ToFixed};
        use fixed::types::I32F32;

        #[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct FP(I32F32);

        impl FP {
            pub const ONE: Self = Self(I32F32::ONE);
            pub const ZERO: Self = Self(I32F32::ZERO);
            pub const PI: Self = Self(I32F32::PI);

            pub fn cos(self) -> Self {
                Self(cordic::cos(self.0))
            }

            pub fn from<T: NumCast>(x: T) -> Self {
                Self(cast::<T, f32>(x).unwrap_or_default().to_fixed())
            }
            pub fn into<T: FromFixed>(self) -> T {
                T::from_fixed(self.0)
            }
        }
    } else {
        #[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct FP(f32);

        impl FP {
            pub const ONE: Self = Self(1.0);
            pub const ZERO: Self = Self(0.0);
            pub const PI: Self = Self(std::f32::consts::PI);

            pub fn cos(self) -> Self {
                Self(self.0.cos())
            }

            pub fn from<T: NumCast>(x: T) -> Self {
                Self(cast::<T, f32>(x).unwrap_or_default())
            }
            pub fn into<T: NumCast + Default>(self) -> T {
                cast::<f32, T>(self.0).unwrap_or_default()
            }
        }
    }
}

macro_rules! impl_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for FP {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                FP(self.0 $op rhs.0)
            }
        }
    };
}

impl_op!(Add, add, +);
impl_op!(Sub, sub, -);
impl_op!(Mul, mul, *);
impl_op!(Div, div, /);

impl Neg for FP {
    type Output = Self;

    fn neg(self) -> Self {
        FP(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cos_endpoints() {
        let one: f32 = FP::ZERO.cos().into();
        let minus_one: f32 = FP::PI.cos().into();

        assert!((one - 1.0).abs() < 1e-4);
        assert!((minus_one + 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_arithmetic() {
        let value: f32 = (FP::from(3) * FP::from(0.5) - FP::ONE / FP::from(4) + -FP::ONE).into();
        assert!((value - 0.25).abs() < 1e-4);
    }
}
