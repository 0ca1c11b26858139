//! Module line parsing.
//!
//! A module line looks like
//!
//! ```text
//! PiAware master process (piaware) is running with pid 25826.
//! PiAware ADS-B UAT client (faup978) is not running (disabled by configuration settings)
//! ```
//!
//! Splitting on both parentheses yields the free-text description, the
//! module name, the status clause and, for stopped modules, an optional
//! notice.

use feeder_types::ModuleStatus;
use tracing::debug;

use super::normalize::normalize;

const IS_RUNNING: &str = "is running";
const WITH_PID: &str = "with pid ";

/// Parse a module line. Returns `None` when the line has no parenthesized
/// module name.
///
/// The untrimmed input is kept as the module's raw line.
pub fn parse_module_line(line: &str) -> Option<ModuleStatus> {
    let parts: Vec<&str> = line.trim().split(['(', ')']).collect();
    if parts.len() < 3 {
        debug!("dropping module line without module name: {:?}", line);
        return None;
    }

    let kind = normalize(parts[1]);
    let clause = parts[2];

    if clause.contains(IS_RUNNING) {
        Some(ModuleStatus::running(kind, parse_pid(clause), line))
    } else {
        let notice = parts
            .get(3)
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Some(ModuleStatus::stopped(kind, notice, line))
    }
}

/// Pid between the `with pid ` marker and the trailing period.
fn parse_pid(clause: &str) -> Option<u32> {
    let start = clause.find(WITH_PID)? + WITH_PID.len();
    let pid = clause[start..].trim_end();
    let pid = pid.strip_suffix('.').unwrap_or(pid);
    pid.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feeder_types::ModuleKind;

    #[test]
    fn test_running_with_pid() {
        let line = "PiAware master process (piaware) is running with pid 25826.";
        let module = parse_module_line(line).unwrap();
        assert_eq!(module.kind(), ModuleKind::Piaware);
        assert!(module.is_running());
        assert_eq!(module.pid(), Some(25826));
        assert!(module.notice().is_none());
        assert_eq!(module.raw_line(), line);
    }

    #[test]
    fn test_raw_line_is_untrimmed() {
        let line = "  PiAware master process (piaware) is running with pid 25826.\t";
        let module = parse_module_line(line).unwrap();
        assert_eq!(module.pid(), Some(25826));
        assert_eq!(module.raw_line(), line);
    }

    #[test]
    fn test_not_running_with_notice() {
        let module = parse_module_line(
            "PiAware ADS-B UAT client (faup978) is not running (disabled by configuration settings)",
        )
        .unwrap();
        assert_eq!(module.kind(), ModuleKind::Faup978);
        assert!(!module.is_running());
        assert!(module.pid().is_none());
        assert_eq!(module.notice(), Some("disabled by configuration settings"));
    }

    #[test]
    fn test_not_running_without_notice() {
        let module =
            parse_module_line("Local ADS-B UAT receiver (dump978-fa) is not running.").unwrap();
        assert_eq!(module.kind(), ModuleKind::Dump978Fa);
        assert!(!module.is_running());
        assert!(module.notice().is_none());
    }

    #[test]
    fn test_running_decoder_and_mlat() {
        let decoder =
            parse_module_line("Local ADS-B receiver (dump1090-fa) is running with pid 3739.")
                .unwrap();
        assert_eq!(decoder.kind(), ModuleKind::Dump1090Fa);
        assert_eq!(decoder.pid(), Some(3739));

        let mlat =
            parse_module_line("PiAware mlat client (fa-mlat-client) is running with pid 3737.")
                .unwrap();
        assert_eq!(mlat.kind(), ModuleKind::FaMlatClient);
        assert_eq!(mlat.pid(), Some(3737));
    }

    #[test]
    fn test_running_without_pid() {
        let module = parse_module_line("PiAware master process (piaware) is running.").unwrap();
        assert!(module.is_running());
        assert!(module.pid().is_none());
    }

    #[test]
    fn test_unparseable_pid_is_absent() {
        let module =
            parse_module_line("PiAware master process (piaware) is running with pid abc.").unwrap();
        assert!(module.is_running());
        assert!(module.pid().is_none());
    }

    #[test]
    fn test_pid_without_trailing_period() {
        let module =
            parse_module_line("PiAware ADS-B client (faup1090) is running with pid 25876").unwrap();
        assert_eq!(module.pid(), Some(25876));
    }

    #[test]
    fn test_unknown_module_name() {
        let module = parse_module_line("PiAware gizmo (gizmo) is running with pid 12.").unwrap();
        assert_eq!(module.kind(), ModuleKind::Unknown);
        assert_eq!(module.pid(), Some(12));
    }

    #[test]
    fn test_line_without_parentheses_is_dropped() {
        assert!(parse_module_line("PiAware master process is running").is_none());
        assert!(parse_module_line("").is_none());
    }
}
