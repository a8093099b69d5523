//! Scalar helpers: linear remapping, interpolation and wrap-around modulo.

/// Interpolation and modulo helpers for floating point scalars.
pub trait Interpolate: Sized + Copy {
    /// Map `self` linearly from `[in_from, in_to]` onto `[out_from, out_to]`.
    ///
    /// Values outside the input range extrapolate.
    #[must_use]
    fn remap(self, in_from: Self, in_to: Self, out_from: Self, out_to: Self) -> Self;

    /// Treat `self` as the blend factor `t` between `from` and `to`.
    #[must_use]
    fn lerp(self, from: Self, to: Self) -> Self;

    /// Remainder in `[0, modulus)` for a positive modulus.
    #[must_use]
    fn positive_mod(self, modulus: Self) -> Self;

    /// Remainder in `(-modulus / 2, modulus / 2]`.
    #[must_use]
    fn mod_around(self, modulus: Self) -> Self;
}

macro_rules! impl_interpolate {
    ($($t:ty),*) => {
        $(
            impl Interpolate for $t {
                fn remap(self, in_from: Self, in_to: Self, out_from: Self, out_to: Self) -> Self {
                    ((self - in_from) / (in_to - in_from)).mul_add(out_to - out_from, out_from)
                }

                fn lerp(self, from: Self, to: Self) -> Self {
                    self.mul_add(to - from, from)
                }

                fn positive_mod(self, modulus: Self) -> Self {
                    let res = self % modulus;
                    if res < 0.0 { res + modulus } else { res }
                }

                fn mod_around(self, modulus: Self) -> Self {
                    let res = self.positive_mod(modulus);
                    if res > modulus / 2.0 { res - modulus } else { res }
                }
            }
        )*
    };
}

impl_interpolate!(f32, f64);

/// Wrap-around modulo for signed integers.
pub trait PositiveMod: Sized {
    /// Remainder shifted into `[0, modulus)` for a positive modulus.
    ///
    /// `None` for a zero modulus or on overflow.
    fn positive_mod(self, modulus: Self) -> Option<Self>;
}

macro_rules! impl_positive_mod {
    ($($t:ty),*) => {
        $(
            impl PositiveMod for $t {
                fn positive_mod(self, modulus: Self) -> Option<Self> {
                    self.checked_rem(modulus)
                        .and_then(|res| if res < 0 { res.checked_add(modulus) } else { Some(res) })
                }
            }
        )*
    };
}

impl_positive_mod!(i32, i64);

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_remap() {
        assert!(close(5.0_f64.remap(0.0, 10.0, 0.0, 100.0), 50.0));
        assert!(close(0.0_f64.remap(-1.0, 1.0, 10.0, 20.0), 15.0));
        assert!(close(20.0_f64.remap(0.0, 10.0, 0.0, 1.0), 2.0));
        assert!((2.5_f32.remap(0.0, 5.0, 0.0, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lerp() {
        assert!(close(0.0_f64.lerp(3.0, 7.0), 3.0));
        assert!(close(1.0_f64.lerp(3.0, 7.0), 7.0));
        assert!(close(0.25_f64.lerp(0.0, 8.0), 2.0));
        assert!(close(1.5_f64.lerp(2.0, 4.0), 5.0));
        assert!((0.5_f32.lerp(-2.0, 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_float_positive_mod() {
        assert!(close((-1.0_f64).positive_mod(360.0), 359.0));
        assert!(close(725.0_f64.positive_mod(360.0), 5.0));
        assert!(close(0.0_f64.positive_mod(3.0), 0.0));
    }

    #[test]
    fn test_mod_around() {
        assert!(close(270.0_f64.mod_around(360.0), -90.0));
        assert!(close(180.0_f64.mod_around(360.0), 180.0));
        assert!(close((-190.0_f64).mod_around(360.0), 170.0));
        assert!((370.0_f32.mod_around(360.0) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_int_positive_mod() {
        assert_eq!((-1_i32).positive_mod(5), Some(4));
        assert_eq!(7_i32.positive_mod(5), Some(2));
        assert_eq!((-10_i64).positive_mod(5), Some(0));
        assert_eq!(3_i32.positive_mod(0), None);
        assert_eq!(i64::MIN.positive_mod(-1), None);
    }
}
