#[cfg(test)]
mod _tests_settings {
    use super::super::settings::*;
    use crate::errors::IndexError;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};

    // ==================== Matrix Tables ====================

    #[test]
    fn test_matrix_pairs_are_exact_inverses() {
        for setting in CellSetting::ALL {
            let product = setting.primitive_vectors() * setting.conventional_vectors();
            let identity = Matrix3::identity();
            for i in 0..3 {
                for j in 0..3 {
                    assert_relative_eq!(product[(i, j)], identity[(i, j)], epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_primitive_setting_is_identity() {
        assert_eq!(
            CellSetting::Primitive.primitive_vectors(),
            Matrix3::identity()
        );
    }

    // ==================== Round Trips ====================

    #[test]
    fn test_vector_round_trip_all_settings() {
        let uvw = Vector3::new(0.3, -1.7, 2.2);
        for setting in CellSetting::ALL {
            let there = vector_conventional_to_primitive(&uvw, setting);
            let back = vector_primitive_to_conventional(&there, setting);
            assert_relative_eq!(back[0], uvw[0], epsilon = 1e-12);
            assert_relative_eq!(back[1], uvw[1], epsilon = 1e-12);
            assert_relative_eq!(back[2], uvw[2], epsilon = 1e-12);

            // and in the opposite composition order
            let there = vector_primitive_to_conventional(&uvw, setting);
            let back = vector_conventional_to_primitive(&there, setting);
            assert_relative_eq!(back[0], uvw[0], epsilon = 1e-12);
            assert_relative_eq!(back[1], uvw[1], epsilon = 1e-12);
            assert_relative_eq!(back[2], uvw[2], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_plane_round_trip_all_settings() {
        let hkl = Vector3::new(1.0, -2.0, 3.5);
        for setting in CellSetting::ALL {
            let there = plane_conventional_to_primitive(&hkl, setting);
            let back = plane_primitive_to_conventional(&there, setting);
            assert_relative_eq!(back[0], hkl[0], epsilon = 1e-12);
            assert_relative_eq!(back[1], hkl[1], epsilon = 1e-12);
            assert_relative_eq!(back[2], hkl[2], epsilon = 1e-12);
        }
    }

    // ==================== Known Conversions ====================

    #[test]
    fn test_fcc_conventional_111_direction() {
        // In an fcc lattice the conventional [111] body diagonal is the sum
        // of the three primitive cell vectors
        let uvw = vector_conventional_to_primitive(
            &Vector3::new(1.0, 1.0, 1.0),
            CellSetting::FaceCentered,
        );
        assert_relative_eq!(uvw[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(uvw[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(uvw[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bcc_conventional_111_direction() {
        // In a bcc lattice the conventional [111] runs twice along the first
        // primitive cell vector
        let uvw = vector_conventional_to_primitive(
            &Vector3::new(1.0, 1.0, 1.0),
            CellSetting::BodyCentered,
        );
        assert_relative_eq!(uvw[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(uvw[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(uvw[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fcc_conventional_100_plane() {
        let hkl = plane_conventional_to_primitive(
            &Vector3::new(1.0, 0.0, 0.0),
            CellSetting::FaceCentered,
        );
        assert_relative_eq!(hkl[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(hkl[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(hkl[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fcc_conventional_111_plane_is_unchanged() {
        let hkl = plane_conventional_to_primitive(
            &Vector3::new(1.0, 1.0, 1.0),
            CellSetting::FaceCentered,
        );
        assert_relative_eq!(hkl[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(hkl[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(hkl[2], 1.0, epsilon = 1e-12);
    }

    // ==================== Token Parsing ====================

    #[test]
    fn test_setting_tokens() {
        assert_eq!("p".parse::<CellSetting>(), Ok(CellSetting::Primitive));
        assert_eq!("a".parse::<CellSetting>(), Ok(CellSetting::ACentered));
        assert_eq!("b".parse::<CellSetting>(), Ok(CellSetting::BCentered));
        assert_eq!("c".parse::<CellSetting>(), Ok(CellSetting::CCentered));
        assert_eq!("i".parse::<CellSetting>(), Ok(CellSetting::BodyCentered));
        assert_eq!("F".parse::<CellSetting>(), Ok(CellSetting::FaceCentered));

        assert_eq!(
            "q".parse::<CellSetting>(),
            Err(IndexError::UnknownSetting("q".to_string()))
        );
    }

    #[test]
    fn test_tokens_round_trip() {
        for setting in CellSetting::ALL {
            assert_eq!(setting.token().to_string().parse::<CellSetting>(), Ok(setting));
        }
    }
}
