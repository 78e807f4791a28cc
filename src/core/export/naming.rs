//! Output naming
//!
//! Pure, deterministic derivation of the output directory and per-case
//! plot filenames. Stems replace spaces with underscores and nothing
//! else; labels that differ only by whitespace therefore collide, a
//! known limitation that is deliberately not corrected here.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Suffix appended to every plot filename
const PLOT_SUFFIX: &str = "_ISO_Applied_Loads.png";

/// Prefix of the per-run output directory
const DIR_PREFIX: &str = "RISA_LoadCase_Plots_";

/// Derives the filesystem-safe stem for a load case label
///
/// Spaces become underscores; no other sanitization is applied.
pub fn plot_stem(label: &str) -> String {
    label.replace(' ', "_")
}

/// Derives the plot filename for a load case label
pub fn plot_file_name(label: &str) -> String {
    format!("{}{}", plot_stem(label), PLOT_SUFFIX)
}

/// Names the per-run output directory from the run-start timestamp
///
/// Unique per run at second granularity; same-second collisions across
/// runs are out of scope.
pub fn output_dir_name(at: DateTime<Local>) -> String {
    format!("{}{}", DIR_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

/// Resolves the full output directory path under `root`
pub fn resolve_output_dir(root: &Path, at: DateTime<Local>) -> PathBuf {
    root.join(output_dir_name(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case("Dead Load", "Dead_Load"; "single space")]
    #[test_case("DeadLoad", "DeadLoad"; "no space")]
    #[test_case("Wind +X Service", "Wind_+X_Service"; "multiple spaces")]
    #[test_case("  padded  ", "__padded__"; "leading and trailing spaces")]
    #[test_case("", ""; "empty label")]
    fn test_plot_stem(label: &str, expected: &str) {
        assert_eq!(plot_stem(label), expected);
    }

    #[test]
    fn test_plot_file_name() {
        assert_eq!(plot_file_name("Dead Load"), "Dead_Load_ISO_Applied_Loads.png");
        assert_eq!(plot_file_name("DeadLoad"), "DeadLoad_ISO_Applied_Loads.png");
    }

    #[test]
    fn test_whitespace_only_labels_collide() {
        // Known limitation: disambiguation is intentionally not applied.
        assert_eq!(plot_file_name("Dead_Load"), plot_file_name("Dead Load"));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(plot_file_name("Snow Drift"), plot_file_name("Snow Drift"));
    }

    #[test]
    fn test_output_dir_name_format() {
        let at = Local.with_ymd_and_hms(2026, 8, 24, 14, 30, 5).unwrap();
        assert_eq!(output_dir_name(at), "RISA_LoadCase_Plots_20260824_143005");
    }

    #[test]
    fn test_resolve_output_dir_joins_root() {
        let at = Local.with_ymd_and_hms(2026, 8, 24, 14, 30, 5).unwrap();
        let dir = resolve_output_dir(Path::new("plots"), at);
        assert_eq!(
            dir,
            Path::new("plots").join("RISA_LoadCase_Plots_20260824_143005")
        );
    }
}
