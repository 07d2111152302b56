use super::{RateLimitedClient, rate_limited};
use crate::persistence::*;

impl<P: MetadataManager + ?Sized> MetadataManager for RateLimitedClient<P> {
    fn get_name(&self) -> &str {
        self.persistence.get_name()
    }

    // System namespace initialization is a write like any other and is gated.
    rate_limited! {
        "metadata";
        fn create_namespace(&self, request: &CreateNamespaceRequest) -> CreateNamespaceResponse;
        fn get_namespace(&self, request: &GetNamespaceRequest) -> GetNamespaceResponse;
        fn update_namespace(&self, request: &UpdateNamespaceRequest) -> ();
        fn rename_namespace(&self, request: &RenameNamespaceRequest) -> ();
        fn delete_namespace(&self, request: &DeleteNamespaceRequest) -> ();
        fn delete_namespace_by_name(&self, request: &DeleteNamespaceByNameRequest) -> ();
        fn list_namespaces(&self, request: &ListNamespacesRequest) -> ListNamespacesResponse;
        fn get_metadata(&self) -> GetMetadataResponse;
        fn initialize_system_namespaces(&self, current_cluster_name: &str) -> ();
    }

    fn close(&self) {
        self.persistence.close();
    }
}
