use tracing::instrument;

use crate::{
    filters::ClientFilter,
    models::ClientRecord,
    repositories::RecordStore,
    services::analytics::{self, ClientMetrics, MaterialDemand},
};

/// Read-only client directory.
#[derive(Debug, Clone)]
pub struct ClientDirectoryService {
    store: RecordStore<ClientRecord>,
}

impl ClientDirectoryService {
    pub fn new(store: RecordStore<ClientRecord>) -> Self {
        Self { store }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[instrument(skip(self))]
    pub fn list(&self, filter: &ClientFilter) -> Vec<ClientRecord> {
        self.store.filtered(filter).into_iter().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<ClientRecord> {
        self.store.get(id).cloned()
    }

    pub fn summary(&self) -> ClientMetrics {
        analytics::client_metrics(&self.store)
    }

    pub fn material_demand(&self) -> Vec<MaterialDemand> {
        analytics::material_demand(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientStatus;
    use crate::seed;

    fn directory() -> ClientDirectoryService {
        ClientDirectoryService::new(RecordStore::new(seed::sample_clients()).unwrap())
    }

    #[test]
    fn active_filter_keeps_directory_order() {
        let ids: Vec<String> = directory()
            .list(&ClientFilter::new().with_status(Some(ClientStatus::Active)))
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn search_and_status_combine() {
        let found = directory().list(
            &ClientFilter::new()
                .with_query("builders")
                .with_status(Some(ClientStatus::Active)),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn summary_and_demand_use_full_directory() {
        let directory = directory();
        assert_eq!(directory.summary().active_clients, 3);
        assert_eq!(directory.material_demand()[0].material, "Steel Pipes - 6 inch");
    }
}
