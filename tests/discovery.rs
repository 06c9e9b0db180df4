use anyhow::Result;
use serde_json::json;
use std::fs;
use tempfile::tempdir;
use test_cmd::discovery::discover_cases;

#[test]
fn pairs_inputs_with_outputs() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("test-A.in.txt"), "a")?;
    fs::write(dir.path().join("test-A.out.txt"), "A")?;
    fs::write(dir.path().join("test-B.in.json"), "{}")?;
    fs::write(dir.path().join("notes.txt"), "ignored")?;
    fs::write(dir.path().join("stray.out.txt"), "ignored")?;

    let cases = discover_cases(dir.path())?;
    assert_eq!(cases.len(), 2);

    let a = cases["test A"].as_ref().expect("test A has an output file");
    assert!(a.input_file.is_absolute());
    assert!(a.input_file.ends_with("test-A.in.txt"));
    assert!(a.output_file.ends_with("test-A.out.txt"));
    assert_eq!(a.data, json!({}));

    assert!(cases["test B"].is_none());
    Ok(())
}

#[test]
fn does_not_descend_into_subdirectories() -> Result<()> {
    let dir = tempdir()?;
    let nested = dir.path().join("nested");
    fs::create_dir(&nested)?;
    fs::write(nested.join("deep.in.txt"), "x")?;
    fs::write(nested.join("deep.out.txt"), "x")?;

    let cases = discover_cases(dir.path())?;
    assert!(cases.is_empty());
    Ok(())
}

#[test]
fn output_must_share_the_outer_extension() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("case.in.txt"), "x")?;
    fs::write(dir.path().join("case.out.json"), "x")?;

    let cases = discover_cases(dir.path())?;
    assert!(cases["case"].is_none());
    Ok(())
}

#[test]
fn colliding_names_keep_one_entry() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a-b.in.txt"), "x")?;
    fs::write(dir.path().join("a-b.out.txt"), "x")?;
    fs::write(dir.path().join("a b.in.txt"), "y")?;

    // Whichever of the two inputs the listing yields last decides the value.
    let last_input = fs::read_dir(dir.path())?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|name| name == "a-b.in.txt" || name == "a b.in.txt")
        .last()
        .expect("both inputs are listed");

    let cases = discover_cases(dir.path())?;
    assert_eq!(cases.len(), 1);
    assert_eq!(cases["a b"].is_some(), last_input == "a-b.in.txt");
    if let Some(case) = &cases["a b"] {
        assert!(case.input_file.ends_with("a-b.in.txt"));
    }
    Ok(())
}

#[test]
fn tests_json_overrides_data() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("test-A.in.txt"), "a")?;
    fs::write(dir.path().join("test-A.out.txt"), "a")?;
    fs::write(dir.path().join("test-B.in.txt"), "b")?;
    fs::write(dir.path().join("test-B.out.txt"), "b")?;
    fs::write(dir.path().join("missing.in.txt"), "m")?;
    fs::write(
        dir.path().join("tests.json"),
        r#"{
            "test A": {"data": {"x": 1, "nested": ["é", null]}},
            "missing": {"data": 5},
            "nobody": {"data": 7}
        }"#,
    )?;

    let cases = discover_cases(dir.path())?;
    assert_eq!(cases.len(), 3);
    assert_eq!(
        cases["test A"].as_ref().unwrap().data,
        json!({"x": 1, "nested": ["é", null]})
    );
    assert_eq!(cases["test B"].as_ref().unwrap().data, json!({}));
    assert!(cases["missing"].is_none());
    Ok(())
}

#[test]
fn malformed_tests_json_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("test-A.in.txt"), "a")?;
    fs::write(dir.path().join("test-A.out.txt"), "a")?;
    fs::write(dir.path().join("tests.json"), "{ not json")?;

    let err = discover_cases(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("tests.json"));
    Ok(())
}

#[test]
fn tests_json_must_be_an_object() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("tests.json"), "[1, 2]")?;
    assert!(discover_cases(dir.path()).is_err());
    Ok(())
}
