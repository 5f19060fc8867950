//! Scenario tests for stop placement.
//!
//! Routes run north along the prime meridian from (0, 0), so a stop's
//! distance from the start is simply its latitude in radians times the
//! Earth radius.

use super::*;
use crate::domain::{Coordinate, StopColor};
use crate::geo::EARTH_RADIUS_KM;
use crate::planner::config::ColorPolicy;

fn along_route(km: f64) -> Coordinate {
    Coordinate {
        lat: (km / EARTH_RADIUS_KM).to_degrees(),
        long: 0.0,
    }
}

fn stop_at(name: &str, km: f64) -> Stop {
    let c = along_route(km);
    Stop::new(name, c.lat, c.long)
}

fn request(distance: i64, stops: Vec<Stop>) -> RecommendRequest {
    RecommendRequest {
        distance,
        start_point: along_route(0.0),
        arrival_point: along_route(distance.max(0) as f64),
        stops,
    }
}

fn recommend_with(config: &PlacementConfig, req: &RecommendRequest) -> Vec<Advice> {
    StopPlacementPlanner::new(config).recommend(req)
}

fn recommend(req: &RecommendRequest) -> Vec<Advice> {
    recommend_with(&PlacementConfig::default(), req)
}

fn chosen(advice: &Advice) -> Option<&str> {
    advice.stops.first().map(|s| s.name.as_str())
}

#[test]
fn checkpoints_short_route() {
    let config = PlacementConfig::default();
    let planner = StopPlacementPlanner::new(&config);

    assert_eq!(planner.checkpoints(400), vec![200]);
    assert_eq!(planner.checkpoints(650), vec![325]);
    assert_eq!(planner.checkpoints(401), vec![200]);
    assert_eq!(planner.checkpoints(0), vec![0]);
    assert_eq!(planner.checkpoints(-120), vec![-60]);
}

#[test]
fn checkpoints_long_route() {
    let config = PlacementConfig::default();
    let planner = StopPlacementPlanner::new(&config);

    assert_eq!(planner.checkpoints(651), vec![300, 600]);
    assert_eq!(planner.checkpoints(900), vec![300, 600, 900]);
    assert_eq!(planner.checkpoints(1250), vec![300, 600, 900, 1200]);
}

#[test]
fn short_route_gives_three_advice() {
    let advices = recommend(&request(400, vec![stop_at("Bolu", 205.0)]));

    assert_eq!(advices.len(), 3);
    for (i, advice) in advices.iter().enumerate() {
        assert_eq!(advice.number, i + 1);
        assert_eq!(advice.target_km, 200.0);
        assert_eq!(chosen(advice), Some("Bolu"));
        assert_eq!(advice.stops[0].color, Some(StopColor::Red));
    }
}

#[test]
fn long_route_gives_three_advice_per_checkpoint() {
    let stops = vec![
        stop_at("A", 298.0),
        stop_at("B", 604.0),
        stop_at("C", 880.0),
    ];
    let advices = recommend(&request(900, stops));

    assert_eq!(advices.len(), 9);

    let numbers: Vec<usize> = advices.iter().map(|a| a.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 1, 2, 3, 1, 2, 3]);

    let targets: Vec<f64> = advices.iter().map(|a| a.target_km).collect();
    assert_eq!(
        targets,
        vec![300.0, 300.0, 300.0, 600.0, 600.0, 600.0, 900.0, 900.0, 900.0]
    );

    let names: Vec<Option<&str>> = advices.iter().map(chosen).collect();
    assert_eq!(
        names,
        vec![
            Some("A"),
            Some("A"),
            Some("A"),
            Some("B"),
            Some("B"),
            Some("B"),
            Some("C"),
            Some("C"),
            Some("C"),
        ]
    );
}

#[test]
fn just_over_single_checkpoint_limit() {
    let advices = recommend(&request(651, vec![]));
    assert_eq!(advices.len(), 6);
}

#[test]
fn empty_pool_gives_empty_advice() {
    for distance in [0, 400, 650, 900, 2000] {
        let advices = recommend(&request(distance, vec![]));
        assert!(!advices.is_empty());
        assert!(advices.iter().all(|a| a.stops.is_empty()), "distance {distance}");
    }
}

#[test]
fn non_positive_distance_uses_single_checkpoint() {
    let advices = recommend(&request(0, vec![stop_at("Start", 3.0)]));
    assert_eq!(advices.len(), 3);
    assert!(advices.iter().all(|a| chosen(a) == Some("Start")));

    let advices = recommend(&request(-100, vec![stop_at("Start", 3.0)]));
    assert_eq!(advices.len(), 3);
    assert!(advices.iter().all(|a| a.stops.is_empty()));
}

#[test]
fn closest_stop_wins() {
    let stops = vec![stop_at("Far", 194.0), stop_at("Near", 202.0)];
    let advices = recommend(&request(400, stops));

    assert!(advices.iter().all(|a| chosen(a) == Some("Near")));
}

#[test]
fn equal_distance_breaks_on_name() {
    let stops = vec![stop_at("Zeta", 205.0), stop_at("Alpha", 205.0)];
    let advices = recommend(&request(400, stops));

    assert!(advices.iter().all(|a| chosen(a) == Some("Alpha")));
}

#[test]
fn tolerance_widens_until_match() {
    let advices = recommend(&request(400, vec![stop_at("Outer", 245.0)]));
    assert!(advices.iter().all(|a| chosen(a) == Some("Outer")));
}

#[test]
fn gives_up_beyond_max_tolerance() {
    let stops = vec![stop_at("TooEarly", 140.0), stop_at("TooLate", 255.0)];
    let advices = recommend(&request(400, stops));

    assert_eq!(advices.len(), 3);
    assert!(advices.iter().all(|a| a.stops.is_empty()));
}

#[test]
fn unreachable_checkpoint_does_not_affect_others() {
    let stops = vec![stop_at("First", 310.0), stop_at("Third", 905.0)];
    let advices = recommend(&request(900, stops));

    assert!(advices[0..3].iter().all(|a| chosen(a) == Some("First")));
    assert!(advices[3..6].iter().all(|a| a.stops.is_empty()));
    assert!(advices[6..9].iter().all(|a| chosen(a) == Some("Third")));
}

#[test]
fn tiered_colors_follow_match_tolerance() {
    let config = PlacementConfig {
        colors: ColorPolicy::tiered(),
        ..PlacementConfig::default()
    };

    let cases = [
        (205.0, StopColor::Green),
        (215.0, StopColor::Blue),
        (225.0, StopColor::Red),
        (245.0, StopColor::Red),
    ];
    for (km, expected) in cases {
        let advices = recommend_with(&config, &request(400, vec![stop_at("S", km)]));
        assert_eq!(advices[0].stops[0].color, Some(expected), "stop at {km} km");
    }
}

#[test]
fn input_stops_are_not_modified() {
    let req = request(400, vec![stop_at("Bolu", 205.0)]);
    let _ = recommend(&req);
    assert_eq!(req.stops[0].color, None);
}

#[test]
fn distinct_variants_pick_different_stops() {
    let config = PlacementConfig {
        distinct_variants: true,
        ..PlacementConfig::default()
    };
    let stops = vec![
        stop_at("Third", 232.0),
        stop_at("First", 201.0),
        stop_at("Second", 212.0),
    ];
    let advices = recommend_with(&config, &request(400, stops));

    let names: Vec<Option<&str>> = advices.iter().map(chosen).collect();
    assert_eq!(names, vec![Some("First"), Some("Second"), Some("Third")]);
}

#[test]
fn distinct_variants_run_out_of_stops() {
    let config = PlacementConfig {
        distinct_variants: true,
        ..PlacementConfig::default()
    };
    let advices = recommend_with(&config, &request(400, vec![stop_at("Only", 200.5)]));

    assert_eq!(chosen(&advices[0]), Some("Only"));
    assert!(advices[1].stops.is_empty());
    assert!(advices[2].stops.is_empty());
}

#[test]
fn custom_advice_count() {
    let config = PlacementConfig {
        advice_count: 1,
        ..PlacementConfig::default()
    };
    let advices = recommend_with(&config, &request(1000, vec![]));
    assert_eq!(advices.len(), 3);
}

#[test]
fn repeated_calls_are_identical() {
    let stops = vec![
        stop_at("D", 296.0),
        stop_at("C", 304.0),
        stop_at("B", 596.0),
        stop_at("A", 604.0),
    ];
    let req = request(900, stops);

    assert_eq!(recommend(&req), recommend(&req));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn pool() -> impl Strategy<Value = Vec<Stop>> {
        prop::collection::vec(0.0f64..1200.0, 0..20).prop_map(|kms| {
            kms.into_iter()
                .enumerate()
                .map(|(i, km)| stop_at(&format!("S{i:02}"), km))
                .collect()
        })
    }

    proptest! {
        /// Advice count depends only on the distance
        #[test]
        fn advice_count_matches_checkpoints(distance in -100i64..3000, stops in pool()) {
            let advices = recommend(&request(distance, stops));
            let expected = if distance <= 650 { 1 } else { (distance / 300) as usize };
            prop_assert_eq!(advices.len(), expected * 3);
        }

        /// Each advice holds at most one stop, within the widest window
        #[test]
        fn matched_stops_are_within_tolerance(distance in 1i64..2000, stops in pool()) {
            let start = along_route(0.0);
            for advice in recommend(&request(distance, stops)) {
                prop_assert!(advice.stops.len() <= 1);
                if let Some(stop) = advice.stops.first() {
                    let d = distance_km(start, stop.coordinate());
                    prop_assert!((d - advice.target_km).abs() < 50.0);
                }
            }
        }

        /// The order stops are supplied in doesn't matter
        #[test]
        fn pool_order_is_irrelevant(
            distance in 1i64..2000,
            (stops, shuffled) in pool().prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle())),
        ) {
            let a = recommend(&request(distance, stops));
            let b = recommend(&request(distance, shuffled));
            prop_assert_eq!(a, b);
        }
    }
}
