//! Row statistics shared by both kernel strategies.

#[inline]
pub fn mean(a: &[f64]) -> f64 {
    let mut m = 0.0;
    for v in a {
        m += v;
    }
    m / a.len() as f64
}

/// Population standard deviation (divisor `n`, not `n - 1`).
#[inline]
pub fn std(a: &[f64]) -> f64 {
    let m = mean(a);
    let mut v = 0.0;
    for x in a {
        v += (x - m) * (x - m);
    }
    (v / a.len() as f64).sqrt()
}

#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum::<f64>()
}

#[inline]
pub fn l2norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Largest elementwise gap between two results. Matching NaNs count as equal,
/// a NaN against a number counts as infinitely far apart.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x.is_nan(), y.is_nan()) {
            (true, true) => 0.0,
            (false, false) if x == y => 0.0,
            (false, false) => (x - y).abs(),
            _ => f64::INFINITY,
        })
        .fold(0.0, f64::max)
}
