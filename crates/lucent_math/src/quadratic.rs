//! Quadratic equation solver shared by the primitive intersectors.

use crate::scalar;

/// Real roots of `a·t² + b·t + c = 0`.
///
/// `Two` roots are always ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    None,
    One(f32),
    Two(f32, f32),
}

/// Solve `a·t² + b·t + c = 0`.
///
/// A discriminant within epsilon of zero collapses to the single root
/// `-b / 2a`, as does a degenerate `a` or `c` that drives `4ac`
/// non-finite; neither case is allowed to leak NaN to the caller.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Roots {
    let four_ac = 4.0 * a * c;
    let discriminant = b * b - four_ac;
    if !four_ac.is_finite() || scalar::is_zero(discriminant) {
        return Roots::One(-b / (2.0 * a));
    }
    if discriminant < 0.0 {
        return Roots::None;
    }

    let sqrt_d = discriminant.sqrt();
    // Dividing by a negative `a` flips which sign of the square root
    // yields the smaller root, so the ordering comes from the sign of
    // `a` instead of a second comparison.
    let (root1, root2) = if a > 0.0 {
        ((-b - sqrt_d) / (2.0 * a), (-b + sqrt_d) / (2.0 * a))
    } else {
        ((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
    };
    Roots::Two(root1, root2)
}
