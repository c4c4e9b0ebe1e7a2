//! JSON export of monitoring reports.

use crate::error::Result;
use crate::reports::MonitoringReport;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write a report to disk as pretty-printed JSON.
///
/// With no explicit path, writes a timestamped
/// `flight_monitoring_results_YYYYMMDD_HHMMSS.json` into `default_dir`.
/// Returns the path actually written.
pub fn export_report(
    report: &MonitoringReport,
    path: Option<&Path>,
    default_dir: &Path,
) -> Result<PathBuf> {
    let path = path.map_or_else(|| default_dir.join(default_filename()), Path::to_path_buf);

    fs::write(&path, report.to_json()?)?;
    info!("Results exported to {}", path.display());
    Ok(path)
}

fn default_filename() -> String {
    format!(
        "flight_monitoring_results_{}.json",
        Utc::now().format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use crate::reports::build_report;

    #[test]
    fn test_export_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = build_report(vec![normalize("parked at gate", None)], Vec::new());

        let written = export_report(&report, Some(&path), dir.path()).unwrap();
        assert_eq!(written, path);

        let contents = fs::read_to_string(&written).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(
            parsed["individual_analyses"][0]["flight_status"],
            "ground_operation"
        );
    }

    #[test]
    fn test_export_default_filename() {
        let dir = tempfile::tempdir().unwrap();
        let report = build_report(Vec::new(), Vec::new());

        let written = export_report(&report, None, dir.path()).unwrap();
        let name = written.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("flight_monitoring_results_"));
        assert!(name.ends_with(".json"));
        assert!(written.exists());
    }
}
