//! Toroidal board wrapping.
//!
//! A coordinate that leaves the board past the outer edge of the last cell
//! re-enters from the opposite side, carrying its overflow with it. x wraps
//! against the half-width, z against the half-height; y is untouched.

use glam::DVec3;

use snake3d_core::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryWrapper {
    half_width: f64,
    half_height: f64,
    half_cell: f64,
}

impl BoundaryWrapper {
    pub fn new(half_width: f64, half_height: f64, cell_size: f64) -> Self {
        Self {
            half_width,
            half_height,
            half_cell: cell_size * 0.5,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.board_half_width,
            config.board_half_height,
            config.cell_size,
        )
    }

    pub fn wrap(&self, position: DVec3) -> DVec3 {
        DVec3::new(
            wrap_axis(position.x, self.half_width, self.half_cell),
            position.y,
            wrap_axis(position.z, self.half_height, self.half_cell),
        )
    }
}

fn wrap_axis(value: f64, half_extent: f64, half_cell: f64) -> f64 {
    let edge = half_extent + half_cell;
    if value < -edge {
        let overflow = -edge - value;
        half_extent - half_cell - overflow
    } else if value > edge {
        let overflow = value - edge;
        -half_extent + half_cell + overflow
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper() -> BoundaryWrapper {
        BoundaryWrapper::new(5.0, 4.0, 1.0)
    }

    #[test]
    fn inside_positions_are_unchanged() {
        let w = wrapper();
        for p in [
            DVec3::ZERO,
            DVec3::new(5.5, 0.0, 4.5),
            DVec3::new(-5.5, 0.0, -4.5),
            DVec3::new(3.2, 1.0, -2.7),
        ] {
            assert_eq!(w.wrap(p), p);
        }
    }

    #[test]
    fn positive_overflow_reenters_on_negative_side() {
        let w = wrapper();
        for d in [0.125, 0.25, 0.5, 1.0] {
            let wrapped = w.wrap(DVec3::new(5.5 + d, 0.0, 0.0));
            assert_eq!(wrapped.x, -4.5 + d, "d = {d}");
        }
        let wrapped = w.wrap(DVec3::new(0.0, 0.0, 4.75));
        assert_eq!(wrapped.z, -3.25);
    }

    #[test]
    fn exact_outer_edge_is_not_wrapped() {
        // W + s and -W + s name the same seam; only a strict overshoot moves.
        let w = wrapper();
        assert_eq!(w.wrap(DVec3::new(5.5, 0.0, 0.0)).x, 5.5);
        assert_eq!(w.wrap(DVec3::new(-5.5, 0.0, 0.0)).x, -5.5);
        assert_eq!(w.wrap(DVec3::new(0.0, 0.0, 4.5)).z, 4.5);
        assert_eq!(w.wrap(DVec3::new(0.0, 0.0, -4.5)).z, -4.5);
        assert!(w.wrap(DVec3::new(5.5 + 1e-9, 0.0, 0.0)).x < 0.0);
    }

    #[test]
    fn negative_overflow_reenters_on_positive_side() {
        let w = wrapper();
        let wrapped = w.wrap(DVec3::new(-5.75, 0.0, -4.75));
        assert_eq!(wrapped.x, 4.25);
        assert_eq!(wrapped.z, 3.25);
    }

    #[test]
    fn axes_wrap_independently_and_keep_height() {
        let w = wrapper();
        let wrapped = w.wrap(DVec3::new(6.0, 2.0, 1.0));
        assert_eq!(wrapped, DVec3::new(-4.0, 2.0, 1.0));
    }
}
