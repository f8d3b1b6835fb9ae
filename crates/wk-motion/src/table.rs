//! The cube orientation table.
//!
//! One fixed `(x, y)` pair per face, in degrees within `[0, 360)`, that
//! turns that face toward the viewer. Opposite faces sum to seven.

use wk_core::{CUBE_FACES, Orientation, WkError, WkResult};

/// Base `(x, y)` rotation for faces 1 through 6, in face order.
pub const CUBE_TABLE: [(f64, f64); CUBE_FACES as usize] = [
    (0.0, 0.0),   // 1 front
    (0.0, 270.0), // 2 right
    (270.0, 0.0), // 3 top
    (90.0, 0.0),  // 4 bottom
    (0.0, 90.0),  // 5 left
    (0.0, 180.0), // 6 back
];

/// Base `(x, y)` angles for `face`.
pub fn base_angles(face: u32) -> WkResult<(f64, f64)> {
    face.checked_sub(1)
        .and_then(|i| CUBE_TABLE.get(i as usize))
        .copied()
        .ok_or_else(|| WkError::invalid(format!("face {face} outside 1..={CUBE_FACES}")))
}

/// The exact resting orientation for `face`: base angles, no spin, no jitter.
pub fn rest_orientation(face: u32) -> WkResult<Orientation> {
    let (x, y) = base_angles(face)?;
    Ok(Orientation::new(x, y, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_face() {
        for face in 1..=CUBE_FACES {
            assert!(base_angles(face).is_ok());
        }
        assert!(base_angles(0).is_err());
        assert!(base_angles(7).is_err());
    }

    #[test]
    fn entries_are_distinct_and_canonical() {
        for (i, a) in CUBE_TABLE.iter().enumerate() {
            assert!((0.0..360.0).contains(&a.0) && (0.0..360.0).contains(&a.1));
            for b in &CUBE_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn six_faces_back() {
        assert_eq!(
            rest_orientation(6).unwrap(),
            Orientation::new(0.0, 180.0, 0.0)
        );
    }

    #[test]
    fn opposite_faces_differ_by_half_turn() {
        for (a, b) in [(1, 6), (2, 5), (3, 4)] {
            let (ax, ay) = base_angles(a).unwrap();
            let (bx, by) = base_angles(b).unwrap();
            let turn = (bx - ax).abs() + (by - ay).abs();
            assert!((turn - 180.0).abs() < f64::EPSILON, "{a}/{b}");
        }
    }
}
