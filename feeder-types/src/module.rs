//! Feeder sub-modules and their reported run state.

use core::fmt;

/// The sub-modules a feeder status report knows about.
///
/// The canonical string form is the hyphenated process name printed by the
/// feeder (`dump1090-fa`, `fa-mlat-client`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ModuleKind {
    /// The master process (`piaware`).
    Piaware,
    /// ADS-B bridge on 1090 MHz (`faup1090`).
    Faup1090,
    /// UAT bridge on 978 MHz (`faup978`).
    Faup978,
    /// Multilateration client (`fa-mlat-client`).
    FaMlatClient,
    /// Local 1090 MHz decoder (`dump1090-fa`).
    Dump1090Fa,
    /// Local 978 MHz decoder (`dump978-fa`).
    Dump978Fa,
    /// Anything the report names that is not in the list above.
    #[default]
    Unknown,
}

impl ModuleKind {
    /// Every known kind, excluding `Unknown`.
    pub const KNOWN: [ModuleKind; 6] = [
        ModuleKind::Piaware,
        ModuleKind::Faup1090,
        ModuleKind::Faup978,
        ModuleKind::FaMlatClient,
        ModuleKind::Dump1090Fa,
        ModuleKind::Dump978Fa,
    ];

    /// Returns the canonical, hyphenated name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Piaware => "piaware",
            ModuleKind::Faup1090 => "faup1090",
            ModuleKind::Faup978 => "faup978",
            ModuleKind::FaMlatClient => "fa-mlat-client",
            ModuleKind::Dump1090Fa => "dump1090-fa",
            ModuleKind::Dump978Fa => "dump978-fa",
            ModuleKind::Unknown => "unknown",
        }
    }

    /// Decoders turn radio samples into messages and serve them on a port.
    pub fn is_decoder(&self) -> bool {
        matches!(self, ModuleKind::Dump1090Fa | ModuleKind::Dump978Fa)
    }

    /// Bridges forward decoded messages to the upstream client.
    pub fn is_bridge(&self) -> bool {
        matches!(self, ModuleKind::Faup1090 | ModuleKind::Faup978)
    }

    pub fn is_master(&self) -> bool {
        matches!(self, ModuleKind::Piaware)
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One module line of a status report.
///
/// A running module may carry a pid; a stopped module may carry a notice
/// explaining why it is not running. The constructors make it impossible to
/// have both, and deserialization rejects input that has both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawModuleStatus"))]
pub struct ModuleStatus {
    kind: ModuleKind,
    running: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pid: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    notice: Option<String>,
    /// The original line, kept for diagnostics.
    #[cfg_attr(feature = "serde", serde(default))]
    raw_line: String,
}

impl ModuleStatus {
    /// A module reported as running, optionally with its process id.
    pub fn running(kind: ModuleKind, pid: Option<u32>, raw_line: impl Into<String>) -> Self {
        Self {
            kind,
            running: true,
            pid,
            notice: None,
            raw_line: raw_line.into(),
        }
    }

    /// A module reported as not running, optionally with the reason given.
    pub fn stopped(kind: ModuleKind, notice: Option<String>, raw_line: impl Into<String>) -> Self {
        Self {
            kind,
            running: false,
            pid: None,
            notice,
            raw_line: raw_line.into(),
        }
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Process id; only ever present for running modules.
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Reason for not running; only ever present for stopped modules.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }
}

/// Unchecked wire form of [`ModuleStatus`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawModuleStatus {
    kind: ModuleKind,
    running: bool,
    #[serde(default)]
    pid: Option<u32>,
    #[serde(default)]
    notice: Option<String>,
    #[serde(default)]
    raw_line: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawModuleStatus> for ModuleStatus {
    type Error = &'static str;

    fn try_from(raw: RawModuleStatus) -> Result<Self, Self::Error> {
        match (raw.running, raw.pid, raw.notice) {
            (false, Some(_), _) => Err("a stopped module cannot have a pid"),
            (true, _, Some(_)) => Err("a running module cannot have a notice"),
            (true, pid, None) => Ok(Self::running(raw.kind, pid, raw.raw_line)),
            (false, None, notice) => Ok(Self::stopped(raw.kind, notice, raw.raw_line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        let names: Vec<&str> = ModuleKind::KNOWN.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "piaware",
                "faup1090",
                "faup978",
                "fa-mlat-client",
                "dump1090-fa",
                "dump978-fa"
            ]
        );
        assert_eq!(ModuleKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_kind_roles() {
        assert!(ModuleKind::Dump978Fa.is_decoder());
        assert!(ModuleKind::Faup1090.is_bridge());
        assert!(ModuleKind::Piaware.is_master());
        assert!(!ModuleKind::FaMlatClient.is_decoder());
        assert!(!ModuleKind::FaMlatClient.is_bridge());
        assert!(!ModuleKind::Unknown.is_master());
    }

    #[test]
    fn test_running_module_has_no_notice() {
        let module = ModuleStatus::running(ModuleKind::Piaware, Some(25826), "line");
        assert!(module.is_running());
        assert_eq!(module.pid(), Some(25826));
        assert!(module.notice().is_none());
        assert_eq!(module.raw_line(), "line");
    }

    #[test]
    fn test_stopped_module_has_no_pid() {
        let module = ModuleStatus::stopped(
            ModuleKind::Faup978,
            Some("disabled by configuration settings".to_string()),
            "",
        );
        assert!(!module.is_running());
        assert!(module.pid().is_none());
        assert_eq!(module.notice(), Some("disabled by configuration settings"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_kind_serializes_hyphenated() {
        let json = serde_json::to_string(&ModuleKind::FaMlatClient).unwrap();
        assert_eq!(json, "\"fa-mlat-client\"");
        let kind: ModuleKind = serde_json::from_str("\"dump1090-fa\"").unwrap();
        assert_eq!(kind, ModuleKind::Dump1090Fa);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_pid_and_notice() {
        let module: ModuleStatus =
            serde_json::from_str(r#"{"kind":"piaware","running":true,"pid":5}"#).unwrap();
        assert_eq!(module.pid(), Some(5));

        let module: ModuleStatus = serde_json::from_str(
            r#"{"kind":"faup978","running":false,"notice":"disabled"}"#,
        )
        .unwrap();
        assert_eq!(module.notice(), Some("disabled"));

        let err = serde_json::from_str::<ModuleStatus>(
            r#"{"kind":"piaware","running":false,"pid":5}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("stopped module cannot have a pid"));

        let err = serde_json::from_str::<ModuleStatus>(
            r#"{"kind":"piaware","running":true,"notice":"why"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("running module cannot have a notice"));
    }
}
