use crate::core::{Result, zero_value_via_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceRole {
    Frontend,
    History,
    Matching,
    Worker,
}

/// One heartbeat record of the membership table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterMember {
    pub role: ServiceRole,
    pub host_id: Uuid,
    pub rpc_address: IpAddr,
    pub rpc_port: u16,
    pub session_start: DateTime<Utc>,
    pub last_heartbeat: DateTime<Utc>,
    pub record_expiry: DateTime<Utc>,
}

/// Membership filters; unset fields match everything
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetClusterMembersRequest {
    pub last_heartbeat_within: Option<Duration>,
    pub rpc_address_equals: Option<IpAddr>,
    pub host_id_equals: Option<Uuid>,
    pub role_equals: Option<ServiceRole>,
    pub session_started_after: Option<DateTime<Utc>>,
    pub page_size: usize,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetClusterMembersResponse {
    pub active_members: Vec<ClusterMember>,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpsertClusterMembershipRequest {
    pub role: ServiceRole,
    pub host_id: Uuid,
    pub rpc_address: IpAddr,
    pub rpc_port: u16,
    pub session_start: DateTime<Utc>,
    pub record_expiry: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PruneClusterMembershipRequest {
    pub max_records_pruned: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterMetadata {
    pub cluster_name: String,
    pub cluster_id: Uuid,
    pub cluster_address: String,
    pub history_shard_count: i32,
    pub is_global_namespace_enabled: bool,
    pub is_connection_enabled: bool,
    pub failover_version_increment: i64,
    pub initial_failover_version: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListClusterMetadataRequest {
    pub page_size: usize,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListClusterMetadataResponse {
    pub cluster_metadata: Vec<GetClusterMetadataResponse>,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetClusterMetadataRequest {
    pub cluster_name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetClusterMetadataResponse {
    pub cluster_metadata: ClusterMetadata,
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveClusterMetadataRequest {
    pub cluster_metadata: ClusterMetadata,
    /// Expected stored version; `0` creates the record
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteClusterMetadataRequest {
    pub cluster_name: String,
}

zero_value_via_default!(
    GetClusterMembersResponse,
    ListClusterMetadataResponse,
    GetClusterMetadataResponse,
);

/// Cluster membership and cluster metadata records
pub trait ClusterMetadataManager: Send + Sync {
    fn get_name(&self) -> &str;

    fn get_cluster_members(
        &self,
        request: &GetClusterMembersRequest,
    ) -> Result<GetClusterMembersResponse>;

    fn upsert_cluster_membership(&self, request: &UpsertClusterMembershipRequest) -> Result<()>;

    fn prune_cluster_membership(&self, request: &PruneClusterMembershipRequest) -> Result<()>;

    fn list_cluster_metadata(
        &self,
        request: &ListClusterMetadataRequest,
    ) -> Result<ListClusterMetadataResponse>;

    fn get_current_cluster_metadata(&self) -> Result<GetClusterMetadataResponse>;

    fn get_cluster_metadata(
        &self,
        request: &GetClusterMetadataRequest,
    ) -> Result<GetClusterMetadataResponse>;

    /// Returns `false` when the stored version did not match
    fn save_cluster_metadata(&self, request: &SaveClusterMetadataRequest) -> Result<bool>;

    fn delete_cluster_metadata(&self, request: &DeleteClusterMetadataRequest) -> Result<()>;

    fn close(&self);
}
