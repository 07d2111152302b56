use super::{RateLimitedClient, rate_limited};
use crate::persistence::*;

impl<P: ClusterMetadataManager + ?Sized> ClusterMetadataManager for RateLimitedClient<P> {
    fn get_name(&self) -> &str {
        self.persistence.get_name()
    }

    rate_limited! {
        "cluster metadata";
        fn get_cluster_members(&self, request: &GetClusterMembersRequest) -> GetClusterMembersResponse;
        fn upsert_cluster_membership(&self, request: &UpsertClusterMembershipRequest) -> ();
        fn prune_cluster_membership(&self, request: &PruneClusterMembershipRequest) -> ();
        fn list_cluster_metadata(&self, request: &ListClusterMetadataRequest) -> ListClusterMetadataResponse;
        fn get_current_cluster_metadata(&self) -> GetClusterMetadataResponse;
        fn get_cluster_metadata(&self, request: &GetClusterMetadataRequest) -> GetClusterMetadataResponse;
        fn save_cluster_metadata(&self, request: &SaveClusterMetadataRequest) -> bool;
        fn delete_cluster_metadata(&self, request: &DeleteClusterMetadataRequest) -> ();
    }

    fn close(&self) {
        self.persistence.close();
    }
}
