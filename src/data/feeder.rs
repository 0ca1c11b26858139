//! Feeder data with health annotations.
//!
//! This module turns an interpreted status report into processed data with
//! a health status per module and a keep/restart verdict for the feeder.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use feeder_types::{ConnectionStatus, DumpEndpoint, FeederId, Fr24Status, ModuleKind, ModuleStatus};

use crate::status::{self, StatusReport};

/// Policy for per-module health computation.
///
/// Modules listed as optional are expected to be stopped in some
/// configurations; a stopped optional module is a warning, not critical.
#[derive(Debug, Clone)]
pub struct HealthPolicy {
    pub optional_modules: Vec<ModuleKind>,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self {
            optional_modules: vec![ModuleKind::Faup978, ModuleKind::Dump978Fa],
        }
    }
}

impl HealthPolicy {
    pub fn is_optional(&self, kind: ModuleKind) -> bool {
        self.optional_modules.contains(&kind)
    }
}

/// Health status for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "OK",
            HealthStatus::Warning => "WARN",
            HealthStatus::Critical => "CRIT",
        }
    }
}

/// What the caller should do with the feeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// The snapshot or the fr24feed status is critical; the feeder should
    /// be restarted.
    Restart,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Keep => "keep",
            Verdict::Restart => "restart",
        }
    }
}

/// One module with its connection (if reported) and computed health.
#[derive(Debug, Clone)]
pub struct ModuleData {
    pub status: ModuleStatus,
    pub connection: Option<ConnectionStatus>,
    pub health: HealthStatus,
}

impl ModuleData {
    pub fn kind(&self) -> ModuleKind {
        self.status.kind()
    }
}

/// Complete processed feeder data.
#[derive(Debug, Clone)]
pub struct FeederData {
    /// Modules in report order.
    pub modules: Vec<ModuleData>,
    /// Connection lines whose module has no module line.
    pub orphan_connections: Vec<ConnectionStatus>,
    pub running: usize,
    pub critical: bool,
    pub verdict: Verdict,
    pub feeder_id: Option<FeederId>,
    pub dump_endpoint: Option<DumpEndpoint>,
    pub fr24: Option<Fr24Status>,
    pub unknown_lines: Vec<String>,
    pub issues: Vec<String>,
    pub last_updated: Instant,
}

impl FeederData {
    /// Load and interpret a status report file.
    pub fn load(path: &Path, policy: &HealthPolicy) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content, policy))
    }

    /// Interpret status report text.
    pub fn parse(content: &str, policy: &HealthPolicy) -> Self {
        Self::from_report(status::interpret(content), policy)
    }

    /// Convert an interpreted report into processed data.
    pub fn from_report(report: StatusReport, policy: &HealthPolicy) -> Self {
        let StatusReport {
            snapshot,
            unknown_lines,
            issues,
        } = report;

        let modules: Vec<ModuleData> = snapshot
            .modules()
            .iter()
            .map(|module| ModuleData {
                status: module.clone(),
                connection: snapshot.connection(module.kind()).cloned(),
                health: Self::compute_module_health(module, policy),
            })
            .collect();

        let orphan_connections = snapshot
            .connections()
            .iter()
            .filter(|c| snapshot.module(c.kind()).is_none())
            .cloned()
            .collect();

        let fr24 = snapshot.fr24().cloned();
        let critical =
            snapshot.is_critical() || fr24.as_ref().is_some_and(Fr24Status::is_critical);
        let verdict = if critical {
            Verdict::Restart
        } else {
            Verdict::Keep
        };

        Self {
            modules,
            orphan_connections,
            running: snapshot.running_count(),
            critical,
            verdict,
            feeder_id: snapshot.feeder_id(),
            dump_endpoint: snapshot.dump_endpoint().cloned(),
            fr24,
            unknown_lines,
            issues: issues.iter().map(|e| e.to_string()).collect(),
            last_updated: Instant::now(),
        }
    }

    fn compute_module_health(module: &ModuleStatus, policy: &HealthPolicy) -> HealthStatus {
        if module.is_running() {
            HealthStatus::Healthy
        } else if policy.is_optional(module.kind()) {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }

    /// Health of the fr24feed status, if the report had one.
    ///
    /// A lost MLAT link is a warning; see [`Fr24Status::is_critical`] for
    /// what is critical.
    pub fn fr24_health(&self) -> Option<HealthStatus> {
        let fr24 = self.fr24.as_ref()?;
        Some(if fr24.is_critical() {
            HealthStatus::Critical
        } else if fr24.mlat.as_ref().is_some_and(|l| !l.connected) {
            HealthStatus::Warning
        } else {
            HealthStatus::Healthy
        })
    }

    /// Overall health: the worst of all modules and the fr24feed status.
    pub fn health(&self) -> HealthStatus {
        self.modules
            .iter()
            .map(|m| m.health)
            .chain(self.fr24_health())
            .max()
            .unwrap_or(HealthStatus::Healthy)
    }

    /// Modules that are not healthy, critical first.
    pub fn unhealthy_modules(&self) -> Vec<&ModuleData> {
        let mut result: Vec<&ModuleData> = self
            .modules
            .iter()
            .filter(|m| m.health != HealthStatus::Healthy)
            .collect();
        result.sort_by(|a, b| b.health.cmp(&a.health));
        result
    }
}
