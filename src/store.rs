//! Flow ownership lookup collaborator.
//!
//! The database behind this trait is external to the authorization core;
//! any error a store returns is treated as fatal to the current check and
//! passed through unmodified.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::{Flow, FlowId};

/// Capability to fetch flow ownership records.
#[async_trait]
pub trait FlowStore: Send + Sync {
    /// Fetches the ownership record for `flow_id`.
    ///
    /// Errors are opaque to the authorization core and surface to the caller
    /// unchanged.
    async fn get_flow(&self, flow_id: FlowId) -> anyhow::Result<Flow>;
}

/// In-memory flow store.
///
/// Used by tests and embeddings that do not bring a database.
#[derive(Debug, Default)]
pub struct MemoryFlowStore {
    flows: RwLock<HashMap<FlowId, Flow>>,
}

impl MemoryFlowStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an ownership record.
    pub async fn insert(&self, flow: Flow) {
        self.flows.write().await.insert(flow.id, flow);
    }

    /// Removes a record, returning it if present.
    pub async fn remove(&self, flow_id: FlowId) -> Option<Flow> {
        self.flows.write().await.remove(&flow_id)
    }
}

#[async_trait]
impl FlowStore for MemoryFlowStore {
    async fn get_flow(&self, flow_id: FlowId) -> anyhow::Result<Flow> {
        match self.flows.read().await.get(&flow_id) {
            Some(flow) => Ok(flow.clone()),
            None => anyhow::bail!("flow {} not found", flow_id),
        }
    }
}
