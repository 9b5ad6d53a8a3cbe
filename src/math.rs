//! Exponential used by the sigmoid force law.
//!
//! With the `std` feature this is the platform `f64::exp`. Without it, a
//! range-reduced Taylor polynomial stands in so the crate builds on `no_std`
//! targets.

const LN2_HI: f64 = 6.931_471_803_691_238_164_90e-1;
const LN2_LO: f64 = 1.908_214_929_270_587_700_02e-10;
const INV_LN2: f64 = core::f64::consts::LOG2_E;

/// Inverse factorials 1/13! down to 1/0!, evaluated in Horner order.
const TAYLOR: [f64; 14] = [
    1.0 / 6_227_020_800.0,
    1.0 / 479_001_600.0,
    1.0 / 39_916_800.0,
    1.0 / 3_628_800.0,
    1.0 / 362_880.0,
    1.0 / 40_320.0,
    1.0 / 5_040.0,
    1.0 / 720.0,
    1.0 / 120.0,
    1.0 / 24.0,
    1.0 / 6.0,
    0.5,
    1.0,
    1.0,
];

/// `e^x`.
#[inline]
pub fn exp(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.exp()
    }
    #[cfg(not(feature = "std"))]
    {
        exp_poly(x)
    }
}

/// Polynomial `e^x` for `no_std` builds.
///
/// Reduces `x = k·ln2 + r` with `|r| ≤ ln2/2`, evaluates the degree-13 Taylor
/// polynomial of `e^r` and scales by `2^k` through the exponent bits.
/// Relative error stays below 1e-13 across the normal range.
#[cfg_attr(feature = "std", allow(dead_code))]
fn exp_poly(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > 709.78 {
        return f64::INFINITY;
    }
    if x < -745.13 {
        return 0.0;
    }

    let t = x * INV_LN2;
    let k = if t >= 0.0 { (t + 0.5) as i32 } else { (t - 0.5) as i32 };
    let kf = k as f64;
    let r = (x - kf * LN2_HI) - kf * LN2_LO;

    let mut p = 0.0;
    for c in TAYLOR {
        p = p * r + c;
    }

    // Two half-steps keep each factor a normal float, so subnormal results
    // still come out right.
    let k1 = k / 2;
    p * pow2(k1) * pow2(k - k1)
}

/// `2^n` for `n` in `[-1022, 1023]`.
#[cfg_attr(feature = "std", allow(dead_code))]
fn pow2(n: i32) -> f64 {
    f64::from_bits(((1023 + n) as u64) << 52)
}
