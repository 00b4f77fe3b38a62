mod common;
use common::*;

#[test]
fn test_coordinate_file_csv() {
    let (_dir, path) = data_file(
        "coords.txt",
        &["# city coordinates", "52.52, 13.405", "", "-33,9249 18,4241", "40.4168;-3.7038"],
    );

    let out = GeoddTest::new()
        .args(["--format=csv", &file_arg(&path), "parse"])
        .stdout();

    assert_eq!(
        out,
        "latitude,longitude\n52.52,13.405\n-33.9249,18.4241\n40.4168,-3.7038\n"
    );
}

#[test]
fn test_coordinate_file_text_table() {
    let (_dir, path) = data_file("coords.txt", &["1 2", "3 4"]);

    let out = GeoddTest::new().args([&file_arg(&path), "parse"]).stdout();
    let lines: Vec<&str> = out.lines().collect();

    // top border, header, separator, two rows, bottom border
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with('┌'));
    assert!(lines[1].contains("latitude"));
    assert!(lines[3].contains("│            1 │            2 │"));
    assert!(lines[5].starts_with('└'));
}

#[test]
fn test_distance_file() {
    let (_dir, path) = data_file(
        "pairs.txt",
        &[
            "37.165611,-8.545786,38.737545,-9.370047",
            "37.165611 -8.545786 37.165611 -8.545786",
        ],
    );

    GeoddTest::new()
        .args(["--format=csv", "--no-headers", &file_arg(&path), "distance"])
        .assert_success()
        .stdout(
            "37.165611,-8.545786,38.737545,-9.370047,189143,m\n\
             37.165611,-8.545786,37.165611,-8.545786,0,m\n",
        );
}

#[test]
fn test_convert_file() {
    let (_dir, path) = data_file("values.txt", &["1", "2,5"]);

    GeoddTest::new()
        .args([
            "--format=csv",
            &file_arg(&path),
            "convert",
            "--from=km",
            "--to=m",
        ])
        .assert_success()
        .stdout("value,from,result,to\n1,km,1000,m\n2.5,km,2500,m\n");
}

#[test]
fn test_stdin_input() {
    GeoddTest::new()
        .args(["--format=json", "@-", "geojson"])
        .stdin("10 20\n-5.5 100.25\n")
        .assert_success()
        .stdout(
            "{\"type\":\"Point\",\"coordinates\":[20.0,10.0]}\n\
             {\"type\":\"Point\",\"coordinates\":[100.25,-5.5]}\n",
        );
}

#[test]
fn test_invalid_line_reports_location() {
    let (_dir, path) = data_file("coords.txt", &["10 20", "# skipped", "95 20"]);
    let display = path.display().to_string();

    GeoddTest::new()
        .args(["--format=csv", &file_arg(&path), "parse"])
        .assert_failure()
        .stdout("latitude,longitude\n10,20\n")
        .stderr(predicates::str::contains(format!(
            "Error: {}:3: The maximum latitude is 90. Value '95'",
            display
        )));
}

#[test]
fn test_missing_field_reports_parameter() {
    GeoddTest::new()
        .args(["@-", "parse"])
        .stdin("52.5\n")
        .assert_error("stdin:1: The value cannot be null (Parameter 'longitude')");
}

#[test]
fn test_too_many_fields() {
    GeoddTest::new()
        .args(["@-", "parse"])
        .stdin("1 2 3\n")
        .assert_error("stdin:1: expected 2 fields (lat lon), found 3");
}

#[test]
fn test_missing_file() {
    GeoddTest::new()
        .args(["@/definitely/not/here.txt", "parse"])
        .assert_error("Error opening /definitely/not/here.txt");
}

#[test]
fn test_empty_file_produces_no_output() {
    let (_dir, path) = data_file("empty.txt", &["# nothing here"]);
    GeoddTest::new()
        .args([&file_arg(&path), "parse"])
        .assert_success()
        .stdout("");
}

#[test]
fn test_perf_reports_record_count() {
    let (_dir, path) = data_file("coords.txt", &["1 2", "3 4", "5 6"]);
    GeoddTest::new()
        .args(["--perf", "--format=csv", &file_arg(&path), "parse"])
        .assert_success()
        .stderr(predicates::str::contains("Processed 3 records in"));
}

#[test]
fn test_decimal_comma_in_whitespace_separated_line() {
    GeoddTest::new()
        .args(["--format=csv", "--no-headers", "@-", "parse"])
        .stdin("52.5 13,4\n52,5 13\n")
        .assert_success()
        .stdout("52.5,13.4\n52.5,13\n");
    GeoddTest::new()
        .args(["--format=csv", "--no-headers", "@-", "distance"])
        .stdin("37,1 -8,5 37,1 -8,5\n")
        .assert_success()
        .stdout("37.1,-8.5,37.1,-8.5,0,m\n");
}
