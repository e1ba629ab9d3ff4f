use crate::simulation::matrix::Matrix;

impl Matrix {
    /// 2x2 counter-clockwise rotation in a right-handed Cartesian frame.
    pub fn rotation(angle_radians: f64) -> Matrix {
        let mut rotation = Matrix::new(2, 2);
        rotation[(0, 0)] = angle_radians.cos();
        rotation[(0, 1)] = -angle_radians.sin();
        rotation[(1, 0)] = angle_radians.sin();
        rotation[(1, 1)] = angle_radians.cos();
        rotation
    }

    /// 2x2 uniform scale about the origin.
    pub fn scaling(scale_factor: f64) -> Matrix {
        let mut scaling = Matrix::new(2, 2);
        scaling[(0, 0)] = scale_factor;
        scaling[(1, 1)] = scale_factor;
        scaling
    }

    /// 2xN shift: row 0 repeats the x shift, row 1 repeats the y shift.
    ///
    /// Added to a 2xN coordinate matrix, it moves every column by
    /// (x_shift, y_shift).
    pub fn translation(x_shift: f64, y_shift: f64, column_count: usize) -> Matrix {
        let mut translation = Matrix::new(2, column_count);
        for column in 0..column_count {
            translation[(0, column)] = x_shift;
            translation[(1, column)] = y_shift;
        }
        translation
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, SQRT_2};

    use crate::simulation::matrix::{almost_equal, Matrix};

    #[test]
    fn rotation_matches_the_closed_form() {
        let rotation = Matrix::rotation(FRAC_PI_4);

        let half_sqrt_two = SQRT_2 / 2.0;
        assert_eq!(rotation.row_count(), 2);
        assert_eq!(rotation.column_count(), 2);
        assert!(almost_equal(rotation[(0, 0)], half_sqrt_two));
        assert!(almost_equal(rotation[(0, 1)], -half_sqrt_two));
        assert!(almost_equal(rotation[(1, 0)], half_sqrt_two));
        assert!(almost_equal(rotation[(1, 1)], half_sqrt_two));
    }

    #[test]
    fn scaling_is_a_uniform_diagonal() {
        let scaling = Matrix::scaling(1.5);

        assert!(almost_equal(scaling[(0, 0)], 1.5));
        assert!(almost_equal(scaling[(0, 1)], 0.0));
        assert!(almost_equal(scaling[(1, 0)], 0.0));
        assert!(almost_equal(scaling[(1, 1)], 1.5));
    }

    #[test]
    fn translation_repeats_the_shift_across_every_column() {
        let translation = Matrix::translation(5.0, -5.0, 3);

        assert_eq!(translation.row_count(), 2);
        assert_eq!(translation.column_count(), 3);
        for column in 0..3 {
            assert!(almost_equal(translation[(0, column)], 5.0));
            assert!(almost_equal(translation[(1, column)], -5.0));
        }
    }

    #[test]
    fn quarter_turn_rotation_sends_x_axis_to_y_axis() {
        let rotation = Matrix::rotation(std::f64::consts::FRAC_PI_2);
        let mut x_axis = Matrix::new(2, 1);
        x_axis[(0, 0)] = 1.0;

        let rotated = rotation.multiply(&x_axis).unwrap();

        assert!(almost_equal(rotated[(0, 0)], 0.0));
        assert!(almost_equal(rotated[(1, 0)], 1.0));
    }
}
