use super::*;
use clap::CommandFactory;

#[test]
fn test_format_simple_is_tab_separated() {
    let quote = Quote::new("Stay hungry.", "Life");
    assert_eq!(format_simple(&quote), "Life\tStay hungry.");
}

#[test]
fn test_json_and_simple_conflict() {
    let result = Args::command().try_get_matches_from(["list", "--json", "--simple"]);
    assert!(result.is_err());
}

#[test]
fn test_category_flag_parses() {
    let matches = Args::command()
        .try_get_matches_from(["list", "--category", "Life"])
        .unwrap();
    assert_eq!(
        matches.get_one::<String>("category").map(String::as_str),
        Some("Life")
    );
}
