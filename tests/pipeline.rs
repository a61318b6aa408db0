use std::fs;

use route_proximity::graph::{build_graph, GraphBuilder};
use route_proximity::io::{load_routes, save_graph};
use route_proximity::ProximityError;
use serde_json::Value;

const THREE_ROUTES: &str = r#"{
  "jeepneyRoute": [
    { "name": "R1", "coordinates": [[0.0, 0.0], [0.0, 0.001]] },
    { "name": "R2", "coordinates": [[0.0, 0.01], [0.0, 0.011]] },
    { "name": "R3", "coordinates": [[20.0, 20.0], [20.0, 20.5]] }
  ]
}"#;

fn neighbors_of<'a>(doc: &'a Value, route: &str) -> &'a Vec<Value> {
    doc["graph"]
        .as_array()
        .expect("graph array")
        .iter()
        .find(|entry| entry["route"] == route)
        .and_then(|entry| entry["neighbors"].as_array())
        .expect("route present")
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("D1_routes.json");
    let output = dir.path().join("routes_graph.json");
    fs::write(&input, THREE_ROUTES).expect("write input");

    let routes = load_routes(&input).expect("load");
    let graph = build_graph(&routes, 2.0);
    save_graph(&output, &graph).expect("save");

    let text = fs::read_to_string(&output).expect("read output");
    assert!(text.starts_with("{\n  \"graph\": [\n    {"));
    let doc: Value = serde_json::from_str(&text).expect("json");

    let order: Vec<&str> = doc["graph"]
        .as_array()
        .expect("graph array")
        .iter()
        .map(|e| e["route"].as_str().expect("name"))
        .collect();
    assert_eq!(order, vec!["R1", "R2", "R3"]);

    let r1 = neighbors_of(&doc, "R1");
    let r2 = neighbors_of(&doc, "R2");
    assert_eq!(r1.len(), 1);
    assert_eq!(r2.len(), 1);
    assert_eq!(r1[0]["route"], "R2");
    assert_eq!(r2[0]["route"], "R1");

    let d12 = r1[0]["distance_km"].as_f64().expect("number");
    let d21 = r2[0]["distance_km"].as_f64().expect("number");
    assert!(d12 > 1.0 && d12 < 1.2);
    assert!((d12 - d21).abs() < 1e-12);

    assert!(neighbors_of(&doc, "R3").is_empty());
}

#[test]
fn test_output_is_deterministic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.json");
    let first = dir.path().join("a.json");
    let second = dir.path().join("b.json");
    fs::write(&input, THREE_ROUTES).expect("write input");

    let routes = load_routes(&input).expect("load");
    save_graph(&first, &build_graph(&routes, 2.0)).expect("save");
    let parallel = GraphBuilder::new(2.0)
        .with_parallel(true)
        .build(&routes, &())
        .expect("no deadline");
    save_graph(&second, &parallel).expect("save");

    assert_eq!(
        fs::read(&first).expect("read a"),
        fs::read(&second).expect("read b")
    );
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_routes(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, ProximityError::InputUnavailable { .. }));
}
