/// Largest absolute component of a vector.
fn max_abs(v: &[f64; 3]) -> f64 {
    v.iter().fold(0.0, |acc, c| acc.max(c.abs()))
}

/// Euclidean norm of a vector.
///
/// The components are divided by the largest one before squaring, so the
/// result neither underflows to zero for tiny vectors nor overflows to
/// infinity for huge ones.
pub fn norm(v: &[f64; 3]) -> f64 {
    let scale = max_abs(v);
    if scale == 0.0 {
        return 0.0;
    }
    scale * v.iter().map(|c| (c / scale).powi(2)).sum::<f64>().sqrt()
}

/// Unit vector pointing along `v`.
///
/// Returns `None` when every component is exactly zero.
pub fn normalize(v: &[f64; 3]) -> Option<[f64; 3]> {
    let scale = max_abs(v);
    if scale == 0.0 {
        return None;
    }
    let scaled = v.map(|c| c / scale);
    let n = scaled.iter().map(|c| c * c).sum::<f64>().sqrt();
    Some(scaled.map(|c| c / n))
}

/// Cross product `a x b`.
pub fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
