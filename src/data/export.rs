//! JSON export and one-line summaries of feeder data.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use feeder_types::SchemaVersion;
use serde_json::{json, Value};

use super::FeederData;

impl FeederData {
    /// Build the JSON export document.
    pub fn to_json(&self) -> Result<Value> {
        let modules = self
            .modules
            .iter()
            .map(|m| {
                json!({
                    "name": m.kind().as_str(),
                    "running": m.status.is_running(),
                    "pid": m.status.pid(),
                    "notice": m.status.notice(),
                    "health": m.health.symbol(),
                    "connected": m.connection.as_ref().map(|c| c.is_connected()),
                })
            })
            .collect::<Vec<Value>>();

        let connections = self
            .modules
            .iter()
            .filter_map(|m| m.connection.as_ref())
            .chain(self.orphan_connections.iter())
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;

        Ok(json!({
            "version": serde_json::to_value(SchemaVersion::current())?,
            "summary": {
                "modules": self.modules.len(),
                "running": self.running,
                "critical": self.critical,
                "verdict": self.verdict.label(),
            },
            "feeder_id": self.feeder_id.map(|id| id.to_string()),
            "dump_endpoint": serde_json::to_value(&self.dump_endpoint)?,
            "fr24": serde_json::to_value(&self.fr24)?,
            "modules": modules,
            "connections": connections,
            "issues": self.issues,
        }))
    }

    /// Write the JSON export document to a file.
    pub fn export(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_json()?)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// One line for terminals and logs.
    ///
    /// `4/5 modules running, verdict keep (faup978 WARN)`, with
    /// `, fr24 OK` appended for fr24feed reports.
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "{}/{} modules running, verdict {}",
            self.running,
            self.modules.len(),
            self.verdict.label()
        );

        let unhealthy: Vec<String> = self
            .unhealthy_modules()
            .iter()
            .map(|m| format!("{} {}", m.kind(), m.health.symbol()))
            .collect();
        if !unhealthy.is_empty() {
            line.push_str(&format!(" ({})", unhealthy.join(", ")));
        }
        if let Some(health) = self.fr24_health() {
            line.push_str(&format!(", fr24 {}", health.symbol()));
        }
        if !self.issues.is_empty() {
            line.push_str(&format!(", {} issue(s)", self.issues.len()));
        }
        line
    }
}
