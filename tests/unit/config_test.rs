//! Tests for configuration validation

use fitting_rooms::config::{ScenarioConfig, SimulationConfig};

#[test]
fn test_scenario_config_validation() {
    let valid = ScenarioConfig {
        room_count: 3,
        customer_count: 10,
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn test_scenario_config_invalid_room_count() {
    let invalid = ScenarioConfig {
        room_count: 0,
        customer_count: 10,
    };
    let err = invalid.validate().expect_err("zero rooms must fail");
    assert!(err.contains("room_count"));
}

#[test]
fn test_scenario_config_invalid_customer_count() {
    let invalid = ScenarioConfig {
        room_count: 3,
        customer_count: 0,
    };
    let err = invalid.validate().expect_err("zero customers must fail");
    assert!(err.contains("customer_count"));
}

#[test]
fn test_simulation_config_requires_scenarios() {
    let empty = SimulationConfig { scenarios: vec![] };
    assert!(empty.validate().is_err());
}

#[test]
fn test_simulation_config_names_invalid_scenario() {
    let cfg = SimulationConfig {
        scenarios: vec![
            ScenarioConfig {
                room_count: 3,
                customer_count: 10,
            },
            ScenarioConfig {
                room_count: 0,
                customer_count: 5,
            },
        ],
    };
    let err = cfg.validate().expect_err("invalid scenario must fail");
    assert!(err.contains("scenario 1"));
}

#[test]
fn test_simulation_config_from_json() {
    let json = r#"{"scenarios":[{"room_count":2,"customer_count":4}]}"#;
    let cfg = SimulationConfig::from_json_str(json).expect("valid json config");
    assert_eq!(cfg.scenarios.len(), 1);
    assert_eq!(cfg.scenarios[0].room_count, 2);
    assert_eq!(cfg.scenarios[0].customer_count, 4);
}

#[test]
fn test_simulation_config_from_json_rejects_invalid() {
    let json = r#"{"scenarios":[{"room_count":0,"customer_count":4}]}"#;
    assert!(SimulationConfig::from_json_str(json).is_err());
    assert!(SimulationConfig::from_json_str("not json").is_err());
}

#[test]
fn test_default_run_list() {
    let cfg = SimulationConfig::default();
    assert!(cfg.validate().is_ok());
    let pairs: Vec<(u32, u32)> = cfg
        .scenarios
        .iter()
        .map(|s| (s.room_count, s.customer_count))
        .collect();
    assert_eq!(pairs, vec![(3, 10), (5, 15), (7, 20)]);
}
