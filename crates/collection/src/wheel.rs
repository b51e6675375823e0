use std::f64::consts::TAU;

use dinnerwheel_shared::{Error, Result};

/// Map a final cumulative rotation angle (radians) to the selected slice
/// index of a wheel with `slices` equal segments ordered by index.
///
/// The index decreases from `slices - 1` as the normalized angle grows.
/// That direction encodes which slice edge sits under the pointer when the
/// wheel stops; changing the sign or offset changes which item the pointer
/// lines up with, so the formula must stay as-is unless the pointer
/// geometry itself changes.
///
/// Pure function of its inputs: the random target angle (full turns plus
/// offset) is the caller's business.
pub fn resolve_index(final_angle: f64, slices: usize) -> Result<usize> {
    if slices == 0 {
        return Err(Error::EmptyWheel);
    }

    let width = TAU / slices as f64;
    // rem_euclid keeps negative angles in [0, TAU) as well.
    let normalized = final_angle.rem_euclid(TAU);
    let steps = (normalized / width).floor() as usize % slices;

    Ok(slices - steps - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_angle_selects_last_slice() {
        assert_eq!(resolve_index(0.0, 5).unwrap(), 4);
    }

    #[test]
    fn test_one_slice_width_steps_down() {
        assert_eq!(resolve_index(TAU / 5.0, 5).unwrap(), 3);
    }

    #[test]
    fn test_full_turns_are_normalized_away() {
        let angle = 3.0 * TAU + TAU / 5.0;
        assert_eq!(resolve_index(angle, 5).unwrap(), 3);
    }

    #[test]
    fn test_negative_angles_stay_in_range() {
        for slices in 1..=8 {
            let index = resolve_index(-1.25, slices).unwrap();
            assert!(index < slices);
        }
    }

    #[test]
    fn test_zero_slices_is_rejected() {
        let err = resolve_index(1.0, 0).unwrap_err();
        assert!(matches!(err, Error::EmptyWheel));
    }

    #[test]
    fn test_single_slice_always_resolves_to_zero() {
        assert_eq!(resolve_index(0.0, 1).unwrap(), 0);
        assert_eq!(resolve_index(12.34, 1).unwrap(), 0);
    }
}
