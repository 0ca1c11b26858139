//! Snapshot - the structured form of one feeder status report.

use crate::{
    ConnectionStatus, DumpEndpoint, FeederId, Fr24Status, ModuleKind, ModuleStatus, SchemaVersion,
};

/// Everything a single status report says about a feeder.
///
/// A snapshot is built once from one report and never changes afterwards;
/// a new report produces a new snapshot. The running count and the critical
/// flag are derived from the module list on demand.
///
/// # Example
///
/// ```rust
/// use feeder_types::{DumpEndpoint, ModuleKind, ModuleStatus, Snapshot};
///
/// let snapshot = Snapshot::builder()
///     .module(ModuleStatus::running(ModuleKind::Piaware, Some(25826), ""))
///     .module(ModuleStatus::stopped(ModuleKind::Dump978Fa, None, ""))
///     .dump_endpoint(DumpEndpoint::new("localhost", 30005))
///     .build();
///
/// assert_eq!(snapshot.len(), 2);
/// assert!(snapshot.feeder_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    version: SchemaVersion,
    modules: Vec<ModuleStatus>,
    connections: Vec<ConnectionStatus>,
    #[cfg_attr(feature = "serde", serde(default))]
    feeder_id: FeederId,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    dump_endpoint: Option<DumpEndpoint>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    fr24: Option<Fr24Status>,
}

impl Snapshot {
    /// Create a builder for constructing snapshots.
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Modules in the order the report listed them.
    pub fn modules(&self) -> &[ModuleStatus] {
        &self.modules
    }

    /// Connections in the order the report listed them.
    pub fn connections(&self) -> &[ConnectionStatus] {
        &self.connections
    }

    /// The feeder id, or `None` when the report carried none.
    pub fn feeder_id(&self) -> Option<FeederId> {
        (!self.feeder_id.is_empty()).then_some(self.feeder_id)
    }

    pub fn dump_endpoint(&self) -> Option<&DumpEndpoint> {
        self.dump_endpoint.as_ref()
    }

    /// fr24feed fields, when the report came from fr24feed.
    pub fn fr24(&self) -> Option<&Fr24Status> {
        self.fr24.as_ref()
    }

    /// Check if the snapshot holds no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of modules in the snapshot.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// First module of the given kind.
    pub fn module(&self, kind: ModuleKind) -> Option<&ModuleStatus> {
        self.modules.iter().find(|m| m.kind() == kind)
    }

    /// First connection record of the given kind.
    pub fn connection(&self, kind: ModuleKind) -> Option<&ConnectionStatus> {
        self.connections.iter().find(|c| c.kind() == kind)
    }

    /// Number of modules reported as running.
    pub fn running_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_running()).count()
    }

    /// True when more than one module is down, i.e.
    /// `(module count - 1) > running count`.
    ///
    /// An empty snapshot is not critical.
    pub fn is_critical(&self) -> bool {
        self.modules.len().saturating_sub(1) > self.running_count()
    }
}

/// Builder for constructing `Snapshot` instances.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    modules: Vec<ModuleStatus>,
    connections: Vec<ConnectionStatus>,
    feeder_id: FeederId,
    dump_endpoint: Option<DumpEndpoint>,
    fr24: Option<Fr24Status>,
}

impl SnapshotBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module; order of calls is preserved.
    pub fn module(mut self, module: ModuleStatus) -> Self {
        self.modules.push(module);
        self
    }

    /// Append a connection; order of calls is preserved.
    pub fn connection(mut self, connection: ConnectionStatus) -> Self {
        self.connections.push(connection);
        self
    }

    pub fn feeder_id(mut self, id: FeederId) -> Self {
        self.feeder_id = id;
        self
    }

    pub fn dump_endpoint(mut self, endpoint: DumpEndpoint) -> Self {
        self.dump_endpoint = Some(endpoint);
        self
    }

    pub fn fr24(mut self, status: Fr24Status) -> Self {
        self.fr24 = Some(status);
        self
    }

    /// Modules added so far, for cross-referencing while building.
    pub fn modules(&self) -> &[ModuleStatus] {
        &self.modules
    }

    /// Build the snapshot.
    pub fn build(self) -> Snapshot {
        Snapshot {
            version: SchemaVersion::current(),
            modules: self.modules,
            connections: self.connections,
            feeder_id: self.feeder_id,
            dump_endpoint: self.dump_endpoint,
            fr24: self.fr24,
        }
    }
}
