use crate::core::{Result, zero_value_via_default};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NamespaceState {
    #[default]
    Unspecified,
    Registered,
    Deprecated,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceInfo {
    pub id: Uuid,
    pub name: String,
    pub state: NamespaceState,
    pub description: String,
    pub owner_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceConfig {
    pub retention: Duration,
    pub history_archival_uri: String,
    pub visibility_archival_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceReplicationConfig {
    pub active_cluster_name: String,
    pub clusters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceDetail {
    pub info: NamespaceInfo,
    pub config: NamespaceConfig,
    pub replication_config: NamespaceReplicationConfig,
    pub config_version: i64,
    pub failover_version: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNamespaceRequest {
    pub namespace: NamespaceDetail,
    pub is_global_namespace: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateNamespaceResponse {
    pub id: Uuid,
}

/// Looks a namespace up by id or by name; exactly one should be set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetNamespaceRequest {
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

impl GetNamespaceRequest {
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetNamespaceResponse {
    pub namespace: NamespaceDetail,
    pub is_global_namespace: bool,
    pub notification_version: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateNamespaceRequest {
    pub namespace: NamespaceDetail,
    pub is_global_namespace: bool,
    pub notification_version: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameNamespaceRequest {
    pub previous_name: String,
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteNamespaceRequest {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteNamespaceByNameRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListNamespacesRequest {
    pub page_size: usize,
    pub next_page_token: Vec<u8>,
    pub include_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListNamespacesResponse {
    pub namespaces: Vec<GetNamespaceResponse>,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetMetadataResponse {
    pub notification_version: i64,
}

zero_value_via_default!(
    CreateNamespaceResponse,
    GetNamespaceResponse,
    ListNamespacesResponse,
    GetMetadataResponse,
);

/// Namespace records
pub trait MetadataManager: Send + Sync {
    fn get_name(&self) -> &str;

    fn create_namespace(
        &self,
        request: &CreateNamespaceRequest,
    ) -> Result<CreateNamespaceResponse>;

    fn get_namespace(&self, request: &GetNamespaceRequest) -> Result<GetNamespaceResponse>;

    fn update_namespace(&self, request: &UpdateNamespaceRequest) -> Result<()>;

    fn rename_namespace(&self, request: &RenameNamespaceRequest) -> Result<()>;

    fn delete_namespace(&self, request: &DeleteNamespaceRequest) -> Result<()>;

    fn delete_namespace_by_name(&self, request: &DeleteNamespaceByNameRequest) -> Result<()>;

    fn list_namespaces(&self, request: &ListNamespacesRequest) -> Result<ListNamespacesResponse>;

    fn get_metadata(&self) -> Result<GetMetadataResponse>;

    /// Creates the system namespaces owned by `current_cluster_name` if missing
    fn initialize_system_namespaces(&self, current_cluster_name: &str) -> Result<()>;

    fn close(&self);
}
