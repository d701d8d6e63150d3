//! Parser diagnostics and map loading.

use invasion_core::{load_map, parse_map, DirectionKind, ParseError, Parser, SyntaxErrorKind};
use proptest::prelude::*;
use std::io::Write;

/// (input, expected error) pairs, all parsed with source name "testing".
const ERROR_CASES: &[(&str, &str)] = &[
    (
        "London",
        "testing:1:7: unexpected EOF, city must contain at least one direction",
    ),
    (
        "London\n",
        "testing:2:1: unexpected newline, city must contain at least one direction",
    ),
    (
        "London, west=Boston",
        "testing:1:8: expected a valid city name, got London,",
    ),
    (
        "London west=Boston*",
        "testing:1:20: expected a valid city name as a mapDirection value, got Boston*",
    ),
    ("London west=", "testing:1:13: Unexpected EOF"),
    ("London east", "testing:1:12: Unexpected EOF"),
    (
        "London west=Boston west=Chicago",
        "testing:1:24: got mapDirection type duplication west for city London",
    ),
    (
        "London west=Boston east=Boston",
        "testing:1:31: got mapDirection value duplication Boston for city London",
    ),
    (
        "London west=Boston \nLondon west=Bolton",
        "testing:2:7: got city duplication for London previously declared on line 1",
    ),
    (
        "London nowhere=Boston",
        "testing:1:15: got unexpected mapDirection type nowhere, expected one of south,north,west,east",
    ),
    (
        "London west 12",
        "testing:1:15: unexpected token 12, expected =",
    ),
    (
        "Area0 west=Boston",
        "testing:1:6: expected a valid city name, got Area0",
    ),
    (
        "London West=Boston",
        "testing:1:12: got unexpected mapDirection type West, expected one of south,north,west,east",
    ),
];

#[test]
fn test_parser_error_handling() {
    for (input, expected) in ERROR_CASES {
        let mut parser = Parser::new(input, "testing");
        let err = parser.parse().expect_err(input);
        assert_eq!(err.to_string(), *expected, "input: {:?}", input);
    }
}

#[test]
fn test_syntax_errors_carry_structured_position() {
    let err = Parser::new("London west=Boston west=Chicago", "testing")
        .parse()
        .unwrap_err();
    match err {
        ParseError::Syntax {
            source_name,
            line,
            column,
            kind,
        } => {
            assert_eq!(source_name, "testing");
            assert_eq!((line, column), (1, 24));
            assert_eq!(
                kind,
                SyntaxErrorKind::DuplicateDirectionType {
                    direction: DirectionKind::West,
                    city: "London".to_string(),
                }
            );
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn test_handle_non_existent_direction_value() {
    let input = "London west=Boston east=Bolton\nBolton west=London ";
    let mut parser = Parser::new(input, "testing");
    parser.parse().unwrap();
    let err = parser.check_direction_values().unwrap_err();
    assert_eq!(
        err.to_string(),
        "city London on line 1 has direction west which points to non existent city Boston"
    );
    assert!(matches!(err, ParseError::NonExistentCity { line: 1, .. }));
}

#[test]
fn test_fail_non_existent_city_check_on_non_parsed_parser() {
    let parser = Parser::new("London east=Bolton\nBolton west=London", "testing");
    let err = parser.check_direction_values().unwrap_err();
    assert_eq!(err.to_string(), "cannot check direction value for unparsed file");
}

#[test]
fn test_fail_to_build_map_on_non_parsed_parser() {
    let parser = Parser::new("London east=Bolton\nBolton west=London", "testing");
    let err = parser.build_map().unwrap_err();
    assert_eq!(err.to_string(), "cannot build simulation for unparsed file");
}

#[test]
fn test_parse_twice_fails() {
    let mut parser = Parser::new("London east=Bolton\nBolton west=London", "testing");
    parser.parse().unwrap();
    assert_eq!(parser.parse().unwrap_err().to_string(), "already parsed");
}

#[test]
fn test_successfully_parse_valid_input() {
    let map = parse_map("London east=Bolton\nBolton west=London ", "testing").unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.to_string(), "London east=Bolton\nBolton west=London\n");
}

#[test]
fn test_load_map_reports_base_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("earth.map");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "London").unwrap();

    let err = load_map(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "earth.map:1:7: unexpected EOF, city must contain at least one direction"
    );
}

#[test]
fn test_load_map_surfaces_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_map(dir.path().join("missing.map")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn test_load_map_with_trailing_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.txt");
    std::fs::write(
        &path,
        "Foo north=Bar west=Baz south=Qu-ux \r\nBar south=Foo west=Bee\nBaz east=Foo\nQu-ux north=Foo\nBee east=Bar\n",
    )
    .unwrap();

    let map = load_map(&path).unwrap();
    assert_eq!(map.len(), 5);
    let foo = map.get("Foo").unwrap();
    assert_eq!(foo.directions().len(), 3);
    assert_eq!(
        foo.direction(DirectionKind::South).map(|d| d.target.as_str()),
        Some("Qu-ux")
    );
}

/// Renders a map from unique names and, per city, up to four picks of road
/// targets. Targets repeating an earlier road of the same city are skipped.
fn render_map(names: &[String], picks: &[Vec<prop::sample::Index>]) -> String {
    let mut source = String::new();
    for (name, city_picks) in names.iter().zip(picks) {
        source.push_str(name);
        let mut used: Vec<&str> = Vec::new();
        for (kind, pick) in DirectionKind::ALL.iter().zip(city_picks) {
            let target = pick.get(names).as_str();
            if used.contains(&target) {
                continue;
            }
            used.push(target);
            source.push_str(&format!(" {}={}", kind, target));
        }
        source.push('\n');
    }
    source
}

fn valid_map() -> impl Strategy<Value = String> {
    prop::collection::btree_set("[A-Za-z][A-Za-z1-9_-]{0,7}", 1..10).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let count = names.len();
        prop::collection::vec(
            prop::collection::vec(any::<prop::sample::Index>(), 1..=4),
            count,
        )
        .prop_map(move |picks| render_map(&names, &picks))
    })
}

proptest! {
    #[test]
    fn prop_valid_maps_parse(source in valid_map()) {
        let map = parse_map(&source, "prop").unwrap();
        prop_assert_eq!(map.len(), source.lines().count());

        for city in map.cities() {
            prop_assert!(!city.directions().is_empty());
            for (i, direction) in city.directions().iter().enumerate() {
                prop_assert!(map.contains(&direction.target));
                for other in &city.directions()[i + 1..] {
                    prop_assert_ne!(direction.kind, other.kind);
                    prop_assert_ne!(&direction.target, &other.target);
                }
            }
        }

        // nothing destroyed: rendering gives the source back
        prop_assert_eq!(map.to_string(), source);
    }
}
