use std::fs;

use couplings_core::coupling::Openable;
use couplings_host::config::{self, HostConfig};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = config::load(&dir.path().join("couplings.json")).unwrap();
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.coupling_distance, 1);
    assert_eq!(config.coupling_signal, 15);
    assert!(config.couples(Openable::Door));
}

#[test]
fn partial_file_overrides_only_given_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("couplings.json");
    fs::write(&path, r#"{ "coupling_distance": 8, "couple_fence_gates": false }"#).unwrap();

    let config = config::load(&path).unwrap();
    assert_eq!(config.coupling_distance, 8);
    assert_eq!(config.coupling_signal, 15);
    assert!(!config.couples(Openable::FenceGate));
    assert!(config.couples(Openable::Trapdoor));

    let core = config.coupling().unwrap();
    assert_eq!(core.distance(), 8);
}

#[test]
fn out_of_range_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("couplings.json");
    fs::write(&path, r#"{ "coupling_signal": 0 }"#).unwrap();

    let err = config::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("coupling signal 0"));
}

#[test]
fn unknown_keys_and_bad_json_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("couplings.json");

    fs::write(&path, r#"{ "coupling_range": 3 }"#).unwrap();
    assert!(config::load(&path).is_err());

    fs::write(&path, "{ not json").unwrap();
    let err = config::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing"));
}
