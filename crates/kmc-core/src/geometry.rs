//! Periodic-cell geometry: coordinate wrapping and the minimum-image
//! convention for an orthorhombic cell.

/// A Cartesian vector or position in three dimensions.
pub type Vec3 = [f64; 3];

/// Wrap a single coordinate into `[0, length)`.
///
/// Uses the Euclidean remainder, so coordinates any number of cells
/// outside the box land on their periodic image. `rem_euclid` can
/// round a tiny negative value up to exactly `length`; that case maps
/// to `0.0`.
///
/// ```
/// use kmc_core::geometry::wrap_coordinate;
///
/// assert_eq!(wrap_coordinate(-1.0, 10.0), 9.0);
/// assert_eq!(wrap_coordinate(23.0, 10.0), 3.0);
/// assert_eq!(wrap_coordinate(10.0, 10.0), 0.0);
/// ```
#[inline]
pub fn wrap_coordinate(x: f64, length: f64) -> f64 {
    let w = x.rem_euclid(length);
    if w >= length {
        0.0
    } else {
        w
    }
}

/// Wrap every component of `r` into the cell.
#[inline]
pub fn wrap_position(r: Vec3, cell_lengths: &Vec3) -> Vec3 {
    [
        wrap_coordinate(r[0], cell_lengths[0]),
        wrap_coordinate(r[1], cell_lengths[1]),
        wrap_coordinate(r[2], cell_lengths[2]),
    ]
}

/// Component-wise `a - b`.
#[inline]
pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Component-wise `a + b`.
#[inline]
pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Dot product.
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean norm.
#[inline]
pub fn norm(a: &Vec3) -> f64 {
    dot(a, a).sqrt()
}

/// Apply the minimum-image convention to a displacement.
///
/// Each component whose magnitude exceeds half the cell length on that
/// axis is shifted by one cell length towards zero. For displacements
/// between two wrapped positions one shift is always enough.
///
/// ```
/// use kmc_core::geometry::minimum_image;
///
/// // Sites at x = 0 and x = 9 in a cell of length 10 are one apart.
/// let dr = minimum_image([9.0, 0.0, 0.0], &[10.0, 10.0, 10.0]);
/// assert_eq!(dr, [-1.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn minimum_image(mut dr: Vec3, cell_lengths: &Vec3) -> Vec3 {
    for (d, &length) in dr.iter_mut().zip(cell_lengths.iter()) {
        let half = 0.5 * length;
        if *d > half {
            *d -= length;
        } else if *d < -half {
            *d += length;
        }
    }
    dr
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wrap_leaves_interior_coordinates_alone() {
        assert_eq!(wrap_coordinate(4.25, 10.0), 4.25);
        assert_eq!(wrap_coordinate(0.0, 10.0), 0.0);
    }

    #[test]
    fn wrap_handles_tiny_negative() {
        let w = wrap_coordinate(-1e-18, 10.0);
        assert!((0.0..10.0).contains(&w));
    }

    #[test]
    fn minimum_image_both_directions() {
        let cell = [10.0, 4.0, 6.0];
        assert_eq!(minimum_image([-9.0, 3.0, 1.0], &cell), [1.0, -1.0, 1.0]);
        assert_eq!(minimum_image([5.0, 0.0, 0.0], &cell), [5.0, 0.0, 0.0]);
    }

    #[test]
    fn vector_helpers() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, 0.5, 0.5];
        assert_eq!(add(&a, &b), [1.5, 2.5, 3.5]);
        assert_eq!(sub(&a, &b), [0.5, 1.5, 2.5]);
        assert_eq!(dot(&a, &a), 14.0);
        assert_eq!(norm(&[3.0, 4.0, 0.0]), 5.0);
    }

    proptest! {
        #[test]
        fn wrapped_coordinate_in_cell_and_congruent(
            x in -1.0e4f64..1.0e4,
            length in 0.5f64..50.0,
        ) {
            let w = wrap_coordinate(x, length);
            prop_assert!(w >= 0.0);
            prop_assert!(w < length);
            let cells = ((x - w) / length).round();
            let tolerance = 1e-9 * (1.0 + x.abs());
            prop_assert!((cells * length + w - x).abs() <= tolerance);
        }

        #[test]
        fn minimum_image_is_within_half_cell(
            a in 0.0f64..10.0,
            b in 0.0f64..10.0,
        ) {
            let cell = [10.0, 10.0, 10.0];
            let dr = minimum_image([a - b, 0.0, 0.0], &cell);
            prop_assert!(dr[0].abs() <= 5.0);
        }
    }
}
