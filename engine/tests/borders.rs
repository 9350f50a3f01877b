use engine::borders::{self, MAX_SEGMENT_ARC_RAD, WORLD_BORDERS_STR};

const RADIUS: f32 = 200.0;

fn arc_between(a: geo::Vec3, b: geo::Vec3) -> f32 {
    geo::arc_angle(a, b)
}

#[test]
fn embedded_dataset_parses() {
    let fc = borders::parse(WORLD_BORDERS_STR).unwrap();
    assert!(fc.features.len() >= 10);
}

#[test]
fn rejects_malformed_input() {
    assert!(borders::parse("{\"type\": \"FeatureCollection\"").is_err());
    assert!(borders::parse("[]").is_err());
}

#[test]
fn segments_lie_on_the_sphere() {
    let fc = borders::parse(WORLD_BORDERS_STR).unwrap();
    let segs = borders::border_segments(&fc, RADIUS);
    assert!(!segs.is_empty());
    for [a, b] in &segs {
        assert!((a.length() - RADIUS).abs() < 1e-2, "start off sphere: {}", a.length());
        assert!((b.length() - RADIUS).abs() < 1e-2, "end off sphere: {}", b.length());
    }
}

#[test]
fn long_arcs_are_subdivided() {
    let fc = borders::parse(
        r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[0.0, 0.0], [90.0, 0.0]]
                }
            }]
        }"#,
    )
    .unwrap();
    let segs = borders::border_segments(&fc, RADIUS);
    assert!(segs.len() >= 18, "expected at least 18 chords, got {}", segs.len());
    for [a, b] in &segs {
        assert!(arc_between(*a, *b) <= MAX_SEGMENT_ARC_RAD + 1e-4);
    }
}

#[test]
fn subdivision_preserves_endpoints_and_chains() {
    let fc = borders::parse(
        r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[10.0, 20.0], [40.0, 50.0]]
                }
            }]
        }"#,
    )
    .unwrap();
    let segs = borders::border_segments(&fc, RADIUS);
    let first = geo::lat_lon_to_vector3(20.0, 10.0, RADIUS);
    let last = geo::lat_lon_to_vector3(50.0, 40.0, RADIUS);
    assert!(arc_between(segs[0][0], first) < 1e-5);
    assert!(arc_between(segs[segs.len() - 1][1], last) < 1e-5);
    for w in segs.windows(2) {
        let gap = w[0][1].sub(w[1][0]).length();
        assert!(gap < 1e-3, "chain break of {gap}");
    }
}

#[test]
fn null_geometry_features_are_skipped() {
    let fc = borders::parse(
        r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {}, "geometry": null }
            ]
        }"#,
    )
    .unwrap();
    assert!(borders::border_segments(&fc, RADIUS).is_empty());
}

#[test]
fn multipolygon_rings_each_contribute() {
    let fc = borders::parse(
        r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                        [[[10.0, 10.0], [11.0, 10.0], [11.0, 11.0], [10.0, 10.0]]]
                    ]
                }
            }]
        }"#,
    )
    .unwrap();
    let segs = borders::border_segments(&fc, RADIUS);
    assert_eq!(segs.len(), 6);
}
