//! Загрузка параметров: значения по умолчанию и переопределения из TOML.

use countygen::PartitionParams;

#[test]
fn missing_sections_fall_back_to_defaults() {
    let params: PartitionParams = toml::from_str("seed = 42").unwrap();

    assert_eq!(params.seed, 42);
    assert!((params.counties.high_density_threshold - 500.0).abs() < f32::EPSILON);
    assert!((params.counties.target_population - 200.0).abs() < f32::EPSILON);
    assert_eq!(params.counties.max_cells_per_county, 64);
    assert_eq!(params.demo.width, 128);
    assert_eq!(params.demo.height, 64);
}

#[test]
fn partial_county_section_keeps_other_defaults() {
    let params: PartitionParams = toml::from_str(
        r#"
seed = 7

[counties]
target_population = 250.0
"#,
    )
    .unwrap();

    assert!((params.counties.target_population - 250.0).abs() < f32::EPSILON);
    assert!((params.counties.high_density_threshold - 500.0).abs() < f32::EPSILON);
    assert_eq!(params.counties.max_cells_per_county, 64);
}
