use labelgraph::{GraphDisplay, PathDisplay, ScenarioError, ScenarioSet, INFINITY};
use std::io::Write;
use tempfile::Builder;

const YAML: &str = r#"
scenarios:
  - name: normal
    vertices: [A, B, C, D]
    edges:
      - [A, B, 1]
      - [A, C, 4]
      - [B, C, 2]
      - [C, D, 1]
    query: { from: A, to: D }
  - name: isolated
    vertices: [A, B, C]
    edges:
      - { from: A, to: B, weight: 3 }
    query: { from: A, to: C }
"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_yaml_file() {
    let file = write_temp(".yaml", YAML);
    let set = ScenarioSet::from_path(file.path()).unwrap();
    assert_eq!(set.len(), 2);

    let normal = set.find("normal").unwrap().run().unwrap();
    let result = normal.query.unwrap().unwrap();
    assert_eq!(result.cost, 4);
    assert_eq!(result.path, vec!["A", "B", "C", "D"]);

    let isolated = set.find("isolated").unwrap().run().unwrap();
    let result = isolated.query.unwrap().unwrap();
    assert_eq!(result.cost, INFINITY);
    assert!(result.path.is_empty());
}

#[test]
fn test_load_json_file_matches_yaml() {
    let yaml_set = ScenarioSet::from_yaml_str(YAML).unwrap();
    let json = serde_json::to_string(&yaml_set).unwrap();

    let file = write_temp(".json", &json);
    let json_set = ScenarioSet::from_path(file.path()).unwrap();
    assert_eq!(json_set, yaml_set);
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".toml", "scenarios = []");
    assert!(matches!(
        ScenarioSet::from_path(file.path()),
        Err(ScenarioError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert!(matches!(
        ScenarioSet::from_path(&path),
        Err(ScenarioError::Io(_))
    ));
}

#[test]
fn test_malformed_yaml() {
    let file = write_temp(".yml", "scenarios: [ { name: broken, edges: [[A, B]] } ]");
    assert!(matches!(
        ScenarioSet::from_path(file.path()),
        Err(ScenarioError::Yaml(_))
    ));
}

#[test]
fn test_rendered_output_of_builtin_textbook() {
    let set = ScenarioSet::builtin();
    let outcome = set.find("textbook").unwrap().run().unwrap();

    let graph_text = GraphDisplay(&outcome.graph).to_string();
    assert!(graph_text.starts_with("Vertices: 1 2 3 4 5 6 \nEdges: \n"));
    assert!(graph_text.contains("\t1 -> 2 (Weight: 7)\n"));
    assert!(graph_text.contains("\t2 -> 1 (Weight: 7)\n"));
    assert_eq!(graph_text.lines().count(), 2 + 18);

    let result = outcome.query.unwrap().unwrap();
    assert_eq!(
        PathDisplay(&result).to_string(),
        "Shortest Path from 1 to 5: 1 -> 3 -> 6 -> 5\nDistance: 20\n"
    );
}

#[test]
fn test_builtin_expected_distances() {
    let expected = [
        ("textbook", Some(20)),
        ("seven-vertex", Some(6)),
        ("normal", Some(4)),
        ("disconnected", None),
        ("cycle", Some(1)),
        ("single-vertex", Some(0)),
        ("same-start-end", Some(0)),
        ("no-edges", None),
        ("chain", Some(9)),
        ("partially-connected", None),
    ];

    let set = ScenarioSet::builtin();
    for (name, distance) in expected {
        let outcome = set.find(name).unwrap().run().unwrap();
        let result = outcome.query.unwrap().unwrap();
        match distance {
            Some(d) => assert_eq!(result.cost, d, "{}", name),
            None => assert!(!result.is_reachable(), "{}", name),
        }
    }

    let unknown = set.find("unknown-vertex").unwrap().run().unwrap();
    assert!(unknown.query.unwrap().is_err());
}

#[test]
fn test_bundled_sample_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/sample.yaml");
    let set = ScenarioSet::from_path(&path).unwrap();
    assert_eq!(set.len(), 2);

    let textbook = set.find("textbook").unwrap().run().unwrap();
    let result = textbook.query.unwrap().unwrap();
    assert_eq!(result.cost, 20);
    assert_eq!(result.path, vec!["1", "3", "6", "5"]);

    let partial = set.find("partially-connected").unwrap().run().unwrap();
    assert!(!partial.query.unwrap().unwrap().is_reachable());
}
