//! 설정 파일 로드/저장과 파라미터 검증 테스트.
use duct_sizing_toolbox::config::{self, Config, ConfigError};
use duct_sizing_toolbox::duct::{DuctCalcError, ParameterSet};

#[test]
fn defaults_match_reset_values() {
    let p = ParameterSet::default();
    assert_eq!(p.velocity_m_per_s, 10.0);
    assert_eq!(p.pressure_drop_pa_per_m, 1.2);
    assert_eq!(p.roughness_m, 0.0001);
    assert_eq!(p.flex_derate_factor, 1.5);
    assert_eq!(p.density_kg_per_m3, 1.2);
    assert_eq!(p.kinematic_viscosity_m2_per_s, 0.000015);
    assert!(p.validate().is_ok());
    assert!(p.advisories().is_empty());
}

#[test]
fn toml_roundtrip_preserves_parameters() {
    let cfg = Config {
        language: Some("ko".into()),
        parameters: ParameterSet {
            velocity_m_per_s: 6.5,
            ..ParameterSet::default()
        },
    };
    let text = cfg.to_toml().expect("serialize");
    let back = config::parse(&text).expect("parse");
    assert_eq!(back, cfg);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg = config::parse("[parameters]\nvelocity_m_per_s = 8.0\n").expect("parse");
    assert_eq!(cfg.language, None);
    assert_eq!(cfg.parameters.velocity_m_per_s, 8.0);
    assert_eq!(cfg.parameters.density_kg_per_m3, 1.2);
}

#[test]
fn zero_viscosity_is_a_configuration_error() {
    let err = config::parse("[parameters]\nkinematic_viscosity_m2_per_s = 0.0\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(DuctCalcError::InvalidParameter {
            field: "kinematic_viscosity_m2_per_s",
            ..
        })
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(
        config::parse("parameters = ["),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn out_of_range_values_are_advisories_not_errors() {
    let p = ParameterSet {
        velocity_m_per_s: 25.0,
        density_kg_per_m3: 0.5,
        ..ParameterSet::default()
    };
    assert!(p.validate().is_ok());
    let fields: Vec<&str> = p.advisories().iter().map(|a| a.field).collect();
    assert_eq!(fields, vec!["velocity_m_per_s", "density_kg_per_m3"]);
}

#[test]
fn load_or_default_writes_then_reads_file() {
    let dir = std::env::temp_dir().join(format!("duct_sizing_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let first = config::load_or_default(&path).expect("create");
    assert_eq!(first, Config::default());
    assert!(path.exists());

    let edited = Config {
        language: None,
        parameters: ParameterSet {
            pressure_drop_pa_per_m: 2.0,
            ..ParameterSet::default()
        },
    };
    edited.save(&path).expect("save");
    assert_eq!(config::load_or_default(&path).expect("load"), edited);

    let _ = std::fs::remove_dir_all(&dir);
}
