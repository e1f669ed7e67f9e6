use glam::DVec2;

use super::BezierSegment;

/// Natural cubic spline through `knots`, expressed as Bezier control points.
///
/// The first control points solve the tridiagonal system
///
/// ```text
/// 2 P[0]   +   P[1]              = K[0] + 2 K[1]
///   P[i-1] + 4 P[i]   + P[i+1]   = 4 K[i] + 2 K[i+1]
/// 2 P[n-2] + 7 P[n-1]            = 8 K[n-1] + K[n]
/// ```
///
/// and the second ones follow from C1 continuity at each interior knot and
/// zero curvature at the last one. Both axes share the matrix, so they are
/// solved together.
pub fn natural_segments(knots: &[DVec2]) -> Vec<BezierSegment> {
    let n = knots.len().saturating_sub(1);
    match n {
        0 => return Vec::new(),
        1 => {
            let first = (knots[0] * 2.0 + knots[1]) / 3.0;
            let second = first * 2.0 - knots[0];
            return vec![BezierSegment::new(first, second)];
        }
        _ => {}
    }

    let mut lower = vec![1.0; n];
    let mut diag = vec![4.0; n];
    let mut upper = vec![1.0; n];
    let mut rhs: Vec<DVec2> = (0..n).map(|i| knots[i] * 4.0 + knots[i + 1] * 2.0).collect();

    lower[0] = 0.0;
    diag[0] = 2.0;
    rhs[0] = knots[0] + knots[1] * 2.0;

    lower[n - 1] = 2.0;
    diag[n - 1] = 7.0;
    upper[n - 1] = 0.0;
    rhs[n - 1] = knots[n - 1] * 8.0 + knots[n];

    let first = solve_tridiagonal(&lower, &mut diag, &upper, &mut rhs);

    (0..n)
        .map(|i| {
            let second = if i + 1 < n {
                knots[i + 1] * 2.0 - first[i + 1]
            } else {
                (knots[n] + first[n - 1]) / 2.0
            };
            BezierSegment::new(first[i], second)
        })
        .collect()
}

/// Thomas algorithm. `diag` and `rhs` are overwritten during elimination.
/// The system above is diagonally dominant, so no pivot is ever zero.
fn solve_tridiagonal(lower: &[f64], diag: &mut [f64], upper: &[f64], rhs: &mut [DVec2]) -> Vec<DVec2> {
    let n = diag.len();
    for i in 1..n {
        let m = lower[i] / diag[i - 1];
        diag[i] -= m * upper[i - 1];
        rhs[i] = rhs[i] - rhs[i - 1] * m;
    }

    let mut solution = vec![DVec2::ZERO; n];
    solution[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        solution[i] = (rhs[i] - solution[i + 1] * upper[i]) / diag[i];
    }
    solution
}
