//! Degree based trigonometry and angle helpers.
//!
//! Every astronomical formula in this crate is written in degrees. The functions here hide the
//! radian conversion so call sites read like the published formulas.

#![allow(clippy::many_single_char_names)]

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    let wrapped = if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    };
    // A tiny negative input rounds up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Normalizes a time angle in hours to the range [0, 24).
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    let normalized = hours % 24.0;
    let wrapped = if normalized < 0.0 {
        normalized + 24.0
    } else {
        normalized
    };
    if wrapped >= 24.0 { 0.0 } else { wrapped }
}

/// Computes a polynomial using Horner's method for numerical stability.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = mul_add(result, x, coeff);
    }
    result
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees.to_radians())
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees.to_radians())
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees.to_radians())
}

/// Arcsine in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    asin(x).to_degrees()
}

/// Arccosine in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    acos(x).to_degrees()
}

/// Quadrant-correct arctangent of `y / x` in degrees, in (-180, 180].
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    atan2(y, x).to_degrees()
}

/// Computes sin(x) using the configured math backend.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.sin();

    #[cfg(feature = "libm")]
    return libm::sin(x);
}

/// Computes cos(x) using the configured math backend.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.cos();

    #[cfg(feature = "libm")]
    return libm::cos(x);
}

/// Computes tan(x) using the configured math backend.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.tan();

    #[cfg(feature = "libm")]
    return libm::tan(x);
}

/// Computes asin(x) using the configured math backend.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.asin();

    #[cfg(feature = "libm")]
    return libm::asin(x);
}

/// Computes acos(x) using the configured math backend.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.acos();

    #[cfg(feature = "libm")]
    return libm::acos(x);
}

/// Computes atan2(y, x) using the configured math backend.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return y.atan2(x);

    #[cfg(feature = "libm")]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the configured math backend.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.sqrt();

    #[cfg(feature = "libm")]
    return libm::sqrt(x);
}

/// Computes hypot(x, y) using the configured math backend.
#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.hypot(y);

    #[cfg(feature = "libm")]
    return libm::hypot(x, y);
}

/// Computes floor(x) using the configured math backend.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.floor();

    #[cfg(feature = "libm")]
    return libm::floor(x);
}

/// Computes ceil(x) using the configured math backend.
#[inline]
pub fn ceil(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.ceil();

    #[cfg(feature = "libm")]
    return libm::ceil(x);
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.mul_add(a, b);

    #[cfg(feature = "libm")]
    return libm::fma(x, a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(90.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_never_reaches_upper_bound() {
        assert_eq!(normalize_degrees_0_to_360(-1e-15), 0.0);
        assert_eq!(normalize_hours_0_to_24(-1e-16), 0.0);
        assert!(normalize_degrees_0_to_360(-1e-10) < 360.0);
    }

    #[test]
    fn test_normalize_hours_0_to_24() {
        assert_eq!(normalize_hours_0_to_24(25.5), 1.5);
        assert_eq!(normalize_hours_0_to_24(-1.5), 22.5);
        assert_eq!(normalize_hours_0_to_24(24.0), 0.0);
        assert_eq!(normalize_hours_0_to_24(12.25), 12.25);
    }

    #[test]
    fn test_polynomial() {
        assert_eq!(polynomial(&[], 5.0), 0.0);
        assert_eq!(polynomial(&[3.0], 5.0), 3.0);
        assert_eq!(polynomial(&[2.0, 3.0], 4.0), 14.0);
        assert!((polynomial(&[1.0, 2.0, 3.0], 2.0) - 17.0).abs() < EPSILON);
    }

    #[test]
    fn test_degree_trigonometry() {
        assert!(sin_deg(0.0).abs() < EPSILON);
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(60.0) - 0.5).abs() < EPSILON);
        assert!((tan_deg(45.0) - 1.0).abs() < EPSILON);
        assert!((asin_deg(0.5) - 30.0).abs() < EPSILON);
        assert!((acos_deg(0.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_atan2_deg_quadrants() {
        assert!((atan2_deg(1.0, 1.0) - 45.0).abs() < EPSILON);
        assert!((atan2_deg(1.0, -1.0) - 135.0).abs() < EPSILON);
        assert!((atan2_deg(-1.0, -1.0) + 135.0).abs() < EPSILON);
        assert!((atan2_deg(-1.0, 1.0) + 45.0).abs() < EPSILON);
    }
}
