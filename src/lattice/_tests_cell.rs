#[cfg(test)]
mod _tests_cell {
    use super::super::cell::Lattice;
    use super::super::construction::*;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::PI;

    // ==================== Construction & Derived Quantities ====================

    #[test]
    fn test_cubic_cell_parameters() {
        let lattice = cubic_cell(2.5).unwrap();
        let (a, b, c) = lattice.parameters();
        assert_relative_eq!(a, 2.5);
        assert_relative_eq!(b, 2.5);
        assert_relative_eq!(c, 2.5);

        let (alpha, beta, gamma) = lattice.angles();
        assert_relative_eq!(alpha, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(beta, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(gamma, PI / 2.0, epsilon = 1e-12);

        assert_relative_eq!(lattice.volume(), 2.5_f64.powi(3), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_matrix_is_rejected() {
        // Two identical columns
        let direct = Matrix3::new(1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert!(Lattice::from_matrix(direct).is_err());

        assert!(Lattice::from_matrix(Matrix3::zeros()).is_err());
    }

    #[test]
    fn test_hexagonal_cell_angles() {
        let lattice = hexagonal_cell(1.0, 1.6).unwrap();
        let (alpha, beta, gamma) = lattice.angles();
        assert_relative_eq!(alpha, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(beta, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(gamma, 2.0 * PI / 3.0, epsilon = 1e-12);

        assert!(lattice.is_hexagonal(1e-8));
        assert!(!cubic_cell(1.0).unwrap().is_hexagonal(1e-8));
    }

    #[test]
    fn test_primitive_cell_volumes() {
        // Primitive fcc and bcc cells hold 1/4 and 1/2 of the conventional
        // cell volume
        let fcc = fcc_primitive_cell(1.0).unwrap();
        assert_relative_eq!(fcc.volume().abs(), 0.25, epsilon = 1e-12);

        let bcc = bcc_primitive_cell(1.0).unwrap();
        assert_relative_eq!(bcc.volume().abs(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_triclinic_cell_round_trips_parameters() {
        let lattice = triclinic_cell(
            1.2,
            0.9,
            2.1,
            80.0_f64.to_radians(),
            95.0_f64.to_radians(),
            112.0_f64.to_radians(),
        )
        .unwrap();

        let (a, b, c) = lattice.parameters();
        assert_relative_eq!(a, 1.2, epsilon = 1e-10);
        assert_relative_eq!(b, 0.9, epsilon = 1e-10);
        assert_relative_eq!(c, 2.1, epsilon = 1e-10);

        let (alpha, beta, gamma) = lattice.angles();
        assert_relative_eq!(alpha, 80.0_f64.to_radians(), epsilon = 1e-10);
        assert_relative_eq!(beta, 95.0_f64.to_radians(), epsilon = 1e-10);
        assert_relative_eq!(gamma, 112.0_f64.to_radians(), epsilon = 1e-10);
    }

    // ==================== Reciprocal Basis ====================

    #[test]
    fn test_reciprocal_is_dual_to_direct() {
        let lattice = triclinic_cell(
            1.0,
            1.3,
            0.8,
            75.0_f64.to_radians(),
            85.0_f64.to_radians(),
            100.0_f64.to_radians(),
        )
        .unwrap();

        // a_i* . a_j = delta_ij
        let product = lattice.reciprocal().transpose() * lattice.direct();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(product[(i, j)], expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_plane_normal_cubic() {
        let lattice = cubic_cell(3.0).unwrap();
        let normal = lattice.plane_normal(&Vector3::new(1.0, 1.0, 0.0)).normalize();
        let expected = Vector3::new(1.0, 1.0, 0.0).normalize();
        assert_relative_eq!(normal[0], expected[0], epsilon = 1e-12);
        assert_relative_eq!(normal[1], expected[1], epsilon = 1e-12);
        assert_relative_eq!(normal[2], expected[2], epsilon = 1e-12);
    }

    #[test]
    fn test_crystal_to_cartesian_uses_columns() {
        let lattice = hexagonal_cell(2.0, 3.0).unwrap();
        let cart = lattice.crystal_to_cartesian(&Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(cart[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(cart[1], 3.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(cart[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_is_unit_cube() {
        let lattice = Lattice::default();
        assert_relative_eq!(lattice.volume(), 1.0);
        assert_eq!(*lattice.direct(), Matrix3::identity());
    }
}
