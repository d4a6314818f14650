//! Invariants checked over a deterministic spread of coordinates, with the
//! `geohash` crate as an independent reference for encoding and neighbours.

use geocell::{Direction, GeoHash, location};

/// Coordinates away from the poles and the antimeridian, none on a cell edge.
fn sample_coordinates() -> Vec<(f64, f64)> {
    let mut samples = Vec::new();
    for i in 0..23 {
        for j in 0..29 {
            let latitude = -79.9137 + i as f64 * 7.13791;
            let longitude = -169.8713 + j as f64 * 11.91377;
            samples.push((latitude, longitude));
        }
    }
    samples.push((53.2030476, 45.0324948));
    samples.push((40.7128, -74.0060));
    samples.push((-33.8688, 151.2093));
    samples
}

#[test]
fn test_round_trip() {
    for (latitude, longitude) in sample_coordinates() {
        for precision in 1..=12 {
            let encoded = GeoHash::from_coordinate(latitude, longitude, precision).unwrap();
            let text = encoded.to_text().unwrap();
            assert_eq!(text.len(), precision);

            let decoded = GeoHash::from_text(&text).unwrap();
            assert_eq!(decoded, encoded);
            assert_eq!(decoded.to_text().unwrap(), text);
            assert!(
                decoded.contains(&location(latitude, longitude)),
                "{} does not contain ({}, {})",
                text,
                latitude,
                longitude
            );
        }
    }
}

#[test]
fn test_matches_reference_encoder() {
    for (latitude, longitude) in sample_coordinates() {
        for precision in [1, 5, 9, 12] {
            let ours = GeoHash::from_coordinate(latitude, longitude, precision)
                .unwrap()
                .to_text()
                .unwrap();
            let reference = geohash::encode(
                geohash::Coord {
                    x: longitude,
                    y: latitude,
                },
                precision,
            )
            .unwrap();
            assert_eq!(ours, reference);
        }
    }
}

#[test]
fn test_matches_reference_neighbours() {
    for (latitude, longitude) in sample_coordinates() {
        for precision in [3, 6, 9] {
            let hash = GeoHash::from_coordinate(latitude, longitude, precision).unwrap();
            let text = hash.to_text().unwrap();
            let reference = geohash::neighbors(&text).unwrap();
            let expected = [
                reference.n,
                reference.ne,
                reference.e,
                reference.se,
                reference.s,
                reference.sw,
                reference.w,
                reference.nw,
            ];
            let actual: Vec<String> = hash
                .adjacent()
                .iter()
                .map(|neighbour| neighbour.to_text().unwrap())
                .collect();
            assert_eq!(actual, expected, "neighbours of {}", text);
        }
    }
}

#[test]
fn test_monotonic_containment() {
    for (latitude, longitude) in sample_coordinates() {
        let full = GeoHash::from_coordinates(latitude, longitude).unwrap();
        let text = full.to_text().unwrap();
        for length in 0..text.len() {
            let prefix = GeoHash::from_text(&text[..length]).unwrap();
            let longer = GeoHash::from_text(&text[..=length]).unwrap();
            assert!(prefix.bounding_box().contains_box(longer.bounding_box()));
            assert!(longer.within(&prefix));
        }
    }
}

#[test]
fn test_ordinal_symmetry() {
    for (latitude, longitude) in sample_coordinates() {
        for precision in [2, 7, 12] {
            let hash = GeoHash::from_coordinate(latitude, longitude, precision).unwrap();
            assert_eq!(hash.next_cell().prev(), hash);
            assert_eq!(hash.prev().next_cell(), hash);
            assert_eq!(hash.next(5).next(-5), hash);
            assert_eq!(hash.next(3), hash.next_cell().next_cell().next_cell());
        }
    }
}

#[test]
fn test_neighbour_symmetry() {
    for (latitude, longitude) in sample_coordinates() {
        for precision in [3, 8, 12] {
            let hash = GeoHash::from_coordinate(latitude, longitude, precision).unwrap();
            assert_eq!(hash.northern_neighbour().southern_neighbour(), hash);
            assert_eq!(hash.southern_neighbour().northern_neighbour(), hash);
            assert_eq!(hash.eastern_neighbour().western_neighbour(), hash);
            assert_eq!(hash.western_neighbour().eastern_neighbour(), hash);
        }
    }
}

#[test]
fn test_adjacent_ring_consistency() {
    for (latitude, longitude) in sample_coordinates() {
        let hash = GeoHash::from_coordinate(latitude, longitude, 7).unwrap();
        let ring = hash.adjacent();
        let north = hash.northern_neighbour();
        let south = hash.southern_neighbour();

        assert_eq!(ring[Direction::North.index()], north);
        assert_eq!(ring[Direction::NorthEast.index()], north.eastern_neighbour());
        assert_eq!(ring[Direction::SouthEast.index()], south.eastern_neighbour());
        assert_eq!(ring[Direction::SouthWest.index()], south.western_neighbour());
        assert_eq!(ring[Direction::NorthWest.index()], north.western_neighbour());
        assert_eq!(ring[Direction::East.index()], hash.eastern_neighbour());
    }
}

#[test]
fn test_plane_arithmetic_matches_cell_geometry() {
    for (latitude, longitude) in sample_coordinates() {
        let hash = GeoHash::from_coordinate(latitude, longitude, 6).unwrap();
        let north = hash.northern_neighbour();
        let east = hash.eastern_neighbour();

        assert_eq!(north.latitude_plane().value(), hash.latitude_plane().value() + 1);
        assert_eq!(north.longitude_plane(), hash.longitude_plane());
        assert_eq!(
            north.bounding_box().min_latitude(),
            hash.bounding_box().max_latitude()
        );
        assert_eq!(
            east.bounding_box().min_longitude(),
            hash.bounding_box().max_longitude()
        );
    }
}
