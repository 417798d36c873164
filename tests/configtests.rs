use BoundedQueueMini::core::config::{ConfigError, SimulationConfig, usage};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parses_flags_in_any_order() {
    let config =
        SimulationConfig::parse_args(args(&["-t", "5", "-p", "3", "-s", "4", "-c", "2"])).unwrap();
    assert_eq!(
        config,
        SimulationConfig {
            producers: 3,
            consumers: 2,
            initial_capacity: 4,
            timeout_secs: 5,
        }
    );
}

#[test]
fn rejects_missing_flag() {
    let err = SimulationConfig::parse_args(args(&["-p", "3", "-c", "2", "-s", "4"])).unwrap_err();
    assert_eq!(err, ConfigError::MissingFlag("-t"));
}

#[test]
fn rejects_zero_values() {
    let err =
        SimulationConfig::parse_args(args(&["-p", "0", "-c", "2", "-s", "4", "-t", "5"]))
            .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            flag: "-p",
            value: "0".to_string(),
        }
    );
}

#[test]
fn rejects_non_numeric_values() {
    let err =
        SimulationConfig::parse_args(args(&["-p", "3", "-c", "two", "-s", "4", "-t", "5"]))
            .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            flag: "-c",
            value: "two".to_string(),
        }
    );
}

#[test]
fn rejects_unknown_flag() {
    let err = SimulationConfig::parse_args(args(&["-x", "1"])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownFlag("-x".to_string()));
}

#[test]
fn rejects_flag_without_value() {
    let err =
        SimulationConfig::parse_args(args(&["-p", "3", "-c", "2", "-s", "4", "-t"])).unwrap_err();
    assert_eq!(err, ConfigError::MissingValue("-t"));
}

#[test]
fn usage_names_every_flag() {
    let text = usage("BoundedQueueMini");
    for flag in ["-p", "-c", "-s", "-t"] {
        assert!(text.contains(flag));
    }
}
