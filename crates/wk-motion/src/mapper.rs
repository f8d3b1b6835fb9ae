//! Maps a face value to the rotation a renderer should animate toward.
//!
//! Only the forward direction exists. Working out which face is in front
//! from an arbitrary rotation would need a full 3D decomposition, so any
//! caller that wants a "visual result first" flow still picks the face
//! first and asks for a rotation that shows it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use wk_core::{Orientation, WkError, WkResult};

use crate::table::base_angles;

/// Jitter span that keeps a free-stop landing unambiguous (+-10 degrees).
pub const MAX_SAFE_JITTER_DEGREES: f64 = 20.0;

/// Half-range of the free-stop twist around the viewing axis.
pub const FREE_STOP_TWIST_DEGREES: f64 = 90.0;

/// Visual options for one animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinOptions {
    /// Whole turns added to X and Y.
    pub spin_cycles: u32,
    /// Total jitter span; each of X and Y moves by at most half of it.
    pub jitter_degrees: f64,
    /// Land at a randomized offset instead of the exact face angles.
    pub free_stop: bool,
}

impl SpinOptions {
    /// Set the number of whole turns.
    pub fn with_spin_cycles(mut self, cycles: u32) -> Self {
        self.spin_cycles = cycles;
        self
    }

    /// Set the jitter span.
    pub fn with_jitter_degrees(mut self, degrees: f64) -> Self {
        self.jitter_degrees = degrees;
        self
    }

    /// Enable or disable free-stop landings.
    pub fn with_free_stop(mut self, free_stop: bool) -> Self {
        self.free_stop = free_stop;
        self
    }

    /// Reject negative or non-finite jitter.
    pub fn validate(&self) -> WkResult<()> {
        if !self.jitter_degrees.is_finite() || self.jitter_degrees < 0.0 {
            return Err(WkError::invalid(format!(
                "jitter must be a finite number >= 0, got {}",
                self.jitter_degrees
            )));
        }
        Ok(())
    }
}

/// Compute the target rotation that shows `face` once an animation ends.
///
/// Spin adds `spin_cycles * 360` to X and Y, which never changes the face
/// that ends up forward. With `free_stop`, X and Y each move by a uniform
/// offset within half the jitter span and Z twists by up to 90 degrees.
/// Keeping the jitter below [`MAX_SAFE_JITTER_DEGREES`] is up to the caller.
///
/// `rng` only shapes the landing; it never decides the face.
pub fn rotation_for_face<R>(face: u32, opts: &SpinOptions, rng: &mut R) -> WkResult<Orientation>
where
    R: Rng + ?Sized,
{
    opts.validate()?;
    let (base_x, base_y) = base_angles(face)?;

    let spin = f64::from(opts.spin_cycles) * 360.0;
    let mut target = Orientation::new(base_x + spin, base_y + spin, 0.0);

    if opts.free_stop {
        let half = opts.jitter_degrees / 2.0;
        target.x += rng.random_range(-half..=half);
        target.y += rng.random_range(-half..=half);
        target.z += rng.random_range(-FREE_STOP_TWIST_DEGREES..=FREE_STOP_TWIST_DEGREES);
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::table::CUBE_TABLE;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn plain_rotation_is_table_entry() {
        let opts = SpinOptions::default();
        for (i, &(x, y)) in CUBE_TABLE.iter().enumerate() {
            let face = i as u32 + 1;
            let o = rotation_for_face(face, &opts, &mut rng()).unwrap();
            assert_eq!(o, Orientation::new(x, y, 0.0), "face {face}");
        }
    }

    #[test]
    fn face_six_is_half_turn_on_y() {
        let o = rotation_for_face(6, &SpinOptions::default(), &mut rng()).unwrap();
        assert_eq!(o, Orientation::new(0.0, 180.0, 0.0));
    }

    #[test]
    fn spin_adds_whole_turns() {
        let opts = SpinOptions::default().with_spin_cycles(3);
        let o = rotation_for_face(4, &opts, &mut rng()).unwrap();
        assert_eq!(o, Orientation::new(90.0 + 1080.0, 1080.0, 0.0));
    }

    #[test]
    fn jitter_without_free_stop_is_ignored() {
        let opts = SpinOptions::default().with_jitter_degrees(20.0);
        let o = rotation_for_face(2, &opts, &mut rng()).unwrap();
        assert_eq!(o, Orientation::new(0.0, 270.0, 0.0));
    }

    #[test]
    fn jitter_stays_within_half_span() {
        let d = 12.0;
        let opts = SpinOptions::default()
            .with_jitter_degrees(d)
            .with_free_stop(true);
        let mut rng = rng();
        for i in 0..10_000u32 {
            let face = i % 6 + 1;
            let (bx, by) = base_angles(face).unwrap();
            let o = rotation_for_face(face, &opts, &mut rng).unwrap();
            assert!((o.x - bx).abs() <= d / 2.0);
            assert!((o.y - by).abs() <= d / 2.0);
            assert!(o.z.abs() <= FREE_STOP_TWIST_DEGREES);
        }
    }

    #[test]
    fn free_stop_with_zero_jitter_only_twists() {
        let opts = SpinOptions::default().with_free_stop(true);
        let o = rotation_for_face(3, &opts, &mut rng()).unwrap();
        assert_eq!((o.x, o.y), (270.0, 0.0));
        assert!(o.z.abs() <= FREE_STOP_TWIST_DEGREES);
    }

    #[test]
    fn invalid_face() {
        let opts = SpinOptions::default();
        for face in [0, 7, 100] {
            assert!(matches!(
                rotation_for_face(face, &opts, &mut rng()),
                Err(WkError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn invalid_jitter() {
        for jitter in [-1.0, f64::NAN, f64::INFINITY] {
            let opts = SpinOptions::default().with_jitter_degrees(jitter);
            assert!(rotation_for_face(1, &opts, &mut rng()).is_err());
        }
    }

    proptest! {
        #[test]
        fn spin_never_changes_the_face(face in 1u32..=6, cycles in 0u32..10_000) {
            let still = rotation_for_face(face, &SpinOptions::default(), &mut rng()).unwrap();
            let spun = SpinOptions::default().with_spin_cycles(cycles);
            let o = rotation_for_face(face, &spun, &mut rng()).unwrap();
            prop_assert_eq!(o.x.rem_euclid(360.0), still.x.rem_euclid(360.0));
            prop_assert_eq!(o.y.rem_euclid(360.0), still.y.rem_euclid(360.0));
            prop_assert_eq!(o.z, 0.0);
        }

        #[test]
        fn jitter_bound_holds_for_any_span(face in 1u32..=6, d in 0.0f64..=40.0, seed in any::<u64>()) {
            let opts = SpinOptions::default().with_jitter_degrees(d).with_free_stop(true);
            let (bx, by) = base_angles(face).unwrap();
            let o = rotation_for_face(face, &opts, &mut StdRng::seed_from_u64(seed)).unwrap();
            prop_assert!((o.x - bx).abs() <= d / 2.0 + 1e-9);
            prop_assert!((o.y - by).abs() <= d / 2.0 + 1e-9);
        }
    }
}
