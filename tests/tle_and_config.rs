use approx::assert_relative_eq;
use camino::Utf8Path;
use proxorbit::{
    collision::csv_export::write_events_csv, trajectories::tle_reader::read_tle_file,
    AlertStatus, MonitorConfig, MonitorParams, ProxOrbitError, ProximityMonitor,
    TrajectorySource,
};

mod common;
use common::assert_point_close;

#[test]
fn test_read_tle_file() {
    let set = read_tle_file(Utf8Path::new("tests/data/stations.tle")).unwrap();

    assert_eq!(set.names().collect::<Vec<_>>(), vec!["ISS (ZARYA)", "HST"]);
    assert!(set.iter().all(|t| t.len() == 45));

    assert_point_close(
        &set.get("ISS (ZARYA)").unwrap().points[0],
        (-4693.11345992818, 3405.7005323254366, 4303.339509771357),
        1e-6,
    );
    assert_point_close(
        &set.get("HST").unwrap().points[10],
        (-7450.536304793681, -1182.5275585317318, -641.2318958569615),
        1e-6,
    );
}

#[test]
fn test_missing_tle_file() {
    let err = read_tle_file(Utf8Path::new("tests/data/nope.tle")).unwrap_err();
    assert!(matches!(err, ProxOrbitError::IoError(_)));
}

#[test]
fn test_tle_pipeline() {
    let text = std::fs::read_to_string("tests/data/stations.tle").unwrap();
    let params = MonitorParams::builder().tle_text(text).build().unwrap();
    let report = ProximityMonitor::new(params).run().unwrap();

    assert_eq!(report.status, AlertStatus::Safe);
    assert!(report.detection.events.is_empty());
    assert_relative_eq!(
        report.detection.closest_distance_km.unwrap(),
        2577.0434390564637,
        epsilon = 1e-6
    );
    assert_eq!(report.threat_percent, 0);
}

#[test]
fn test_empty_tle_text_is_insufficient_data() {
    let params = MonitorParams::builder().tle_text("").build().unwrap();
    let report = ProximityMonitor::new(params).run().unwrap();
    assert!(report.trajectories.is_empty());
    assert_eq!(report.status, AlertStatus::InsufficientData);
}

#[test]
fn test_synthetic_config_file() {
    let config = MonitorConfig::load(Utf8Path::new("tests/data/monitor.toml")).unwrap();
    let params = config.resolve().unwrap();
    assert_eq!(
        params.source,
        TrajectorySource::Synthetic {
            object_count: 4,
            seed: 30
        }
    );

    let report = ProximityMonitor::new(params).run().unwrap();
    assert_eq!(report.detection.events.len(), 6);
    assert_eq!(report.threat_percent, 60);

    let mut buffer = Vec::new();
    write_events_csv(&report.detection.events, &mut buffer).unwrap();
    let csv = String::from_utf8(buffer).unwrap();
    assert_eq!(csv.lines().count(), 7);
    assert!(csv
        .lines()
        .nth(1)
        .unwrap()
        .starts_with("SIM-3 ↔ SIM-4,SIM-3,SIM-4,308.5"));
}

#[test]
fn test_tle_config_file_with_overrides() {
    let base = MonitorConfig::load(Utf8Path::new("tests/data/monitor_tle.toml")).unwrap();
    // relative to the configuration file, not to the working directory
    assert_eq!(
        base.tle_file.as_deref(),
        Some(Utf8Path::new("tests/data/stations.tle"))
    );

    let overrides = MonitorConfig {
        threshold_km: Some(3_000.0),
        ..Default::default()
    };
    let params = base.merge(overrides).resolve().unwrap();
    assert!(matches!(params.source, TrajectorySource::TleText(_)));
    assert_eq!(params.threshold_km, 3_000.0);

    let report = ProximityMonitor::new(params).run().unwrap();
    assert_eq!(report.status, AlertStatus::RedAlert);
    assert!(report
        .detection
        .events
        .iter()
        .all(|e| e.pair_label == "ISS (ZARYA) ↔ HST"));
}

#[test]
fn test_malformed_config() {
    let err = MonitorConfig::from_toml_str("object_count = \"many\"").unwrap_err();
    assert!(matches!(err, ProxOrbitError::ConfigParseError(_)));

    let err = MonitorConfig::from_toml_str("colour = \"red\"").unwrap_err();
    assert!(matches!(err, ProxOrbitError::ConfigParseError(_)));
}

#[test]
fn test_repeated_tle_names_still_run() {
    let text = "DEB\n1 a\n2 1 51.6 0 0 10 0 15.5\n\
                DEB\n1 b\n2 1 51.6 0 0 12 0 15.5\n\
                SAT\n1 c\n2 1 28.5 0 0 90 0 14.9";
    let params = MonitorParams::builder().tle_text(text).build().unwrap();
    let report = ProximityMonitor::new(params).run().unwrap();

    assert_eq!(
        report.trajectories.names().collect::<Vec<_>>(),
        vec!["DEB", "DEB #2", "SAT"]
    );
    assert_ne!(report.status, AlertStatus::InsufficientData);
    assert!(report.detection.closest_distance_km.is_some());
}
