#[cfg(test)]
mod tests {
    use crate::math::*;

    const R: f32 = 200.0;

    #[test]
    fn projected_points_stay_on_sphere() {
        let mut lat = -90.0f32;
        while lat <= 90.0 {
            let mut lon = -180.0f32;
            while lon <= 180.0 {
                let p = lat_lon_to_vector3(lat, lon, R);
                assert!(
                    (p.length() - R).abs() < 2e-3,
                    "|p|={} at lat={lat} lon={lon}",
                    p.length()
                );
                lon += 7.5;
            }
            lat += 7.5;
        }
    }

    #[test]
    fn equator_prime_meridian_reference_axis() {
        let p = lat_lon_to_vector3(0.0, 0.0, R);
        assert!((p.x - R).abs() < 1e-2);
        assert!(p.y.abs() < 1e-2);
        assert!(p.z.abs() < 1e-2);
    }

    #[test]
    fn pole_is_longitude_degenerate() {
        let n0 = lat_lon_to_vector3(90.0, 0.0, R);
        for lon in [-180.0f32, -77.3, 0.0, 45.0, 179.0] {
            let p = lat_lon_to_vector3(90.0, lon, R);
            assert!((p.x - n0.x).abs() < 1e-3);
            assert!((p.y - n0.y).abs() < 1e-3);
            assert!((p.z - n0.z).abs() < 1e-3);
        }
        assert!((n0.y - R).abs() < 1e-3);
    }

    #[test]
    fn unit_variant_matches_radius_one() {
        let a = lat_lon_to_unit(37.0, -122.0);
        let b = lat_lon_to_vector3(37.0, -122.0, 1.0);
        assert_eq!(a, b);
        assert!((a.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn slerp_hits_endpoints_and_stays_on_sphere() {
        let a = lat_lon_to_vector3(10.0, 20.0, R);
        let b = lat_lon_to_vector3(-35.0, 140.0, R);
        let s0 = slerp(a, b, 0.0);
        let s1 = slerp(a, b, 1.0);
        assert!(s0.sub(a).length() < 1e-2);
        assert!(s1.sub(b).length() < 1e-2);
        for i in 1..8 {
            let t = i as f32 / 8.0;
            let p = slerp(a, b, t);
            assert!((p.length() - R).abs() < 2e-2);
        }
    }

    #[test]
    fn slerp_midpoint_bisects_the_arc() {
        let a = lat_lon_to_vector3(0.0, 0.0, R);
        let b = lat_lon_to_vector3(0.0, 90.0, R);
        let m = slerp(a, b, 0.5);
        let half = arc_angle(a, b) * 0.5;
        assert!((arc_angle(a, m) - half).abs() < 1e-4);
        assert!((arc_angle(m, b) - half).abs() < 1e-4);
    }

    #[test]
    fn arc_angle_of_orthogonal_directions() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert!((arc_angle(a, b) - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
