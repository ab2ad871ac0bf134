use connect_core::models::professional::Professional;
use connect_search::error::SearchError;
use connect_search::nearest::{nearest, ProfessionalQuery};

fn pro(id: u64, profession: &str, lat: f64, lng: f64) -> Professional {
    Professional {
        id,
        name: format!("pro-{id}"),
        profession: profession.to_string(),
        lat,
        lng,
    }
}

fn query(profession: &str) -> ProfessionalQuery {
    // Sydney CBD
    ProfessionalQuery {
        profession: profession.to_string(),
        lat: -33.8688,
        lng: 151.2093,
    }
}

#[test]
fn results_are_sorted_nearest_first() {
    let pros = vec![
        pro(1, "doctor", -37.8136, 144.9631), // Melbourne
        pro(2, "doctor", -33.8688, 151.2093), // same spot
        pro(3, "doctor", -33.4245, 151.3417), // Gosford
    ];

    let hits = nearest(&pros, &query("doctor")).unwrap();
    let ids: Vec<u64> = hits.iter().map(|m| m.id).collect();
    assert_eq!(ids, [2, 3, 1]);
    assert_eq!(hits[0].distance_km, 0.0);
}

#[test]
fn other_professions_are_excluded() {
    let pros = vec![
        pro(1, "welder", -33.87, 151.21),
        pro(2, "doctor", -33.87, 151.21),
    ];

    let hits = nearest(&pros, &query("doctor")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].profession, "doctor");
}

#[test]
fn profession_match_is_case_sensitive() {
    let pros = vec![pro(1, "Doctor", -33.87, 151.21)];
    assert!(nearest(&pros, &query("doctor")).unwrap().is_empty());
}

#[test]
fn distances_are_rounded_to_two_decimals() {
    let pros = vec![pro(1, "doctor", -33.4245, 151.3417)];
    let hits = nearest(&pros, &query("doctor")).unwrap();
    let d = hits[0].distance_km;
    assert_eq!((d * 100.0).round() / 100.0, d);
}

#[test]
fn ties_keep_registration_order() {
    let pros = vec![
        pro(7, "doctor", -33.0, 151.0),
        pro(3, "doctor", -33.0, 151.0),
    ];
    let ids: Vec<u64> = nearest(&pros, &query("doctor"))
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, [7, 3]);
}

#[test]
fn searcher_position_must_be_valid() {
    let bad = ProfessionalQuery {
        profession: "doctor".to_string(),
        lat: 123.0,
        lng: 0.0,
    };
    assert!(matches!(nearest(&[], &bad), Err(SearchError::InvalidCoordinate(_))));
}
