use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::classifier::Category;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub category_usage: HashMap<String, u64>,
    pub external_failures: u64,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn increment_category(&self, category: Category) {
        let mut data = self.inner.write().await;
        *data
            .category_usage
            .entry(category.as_str().to_string())
            .or_insert(0) += 1;
    }

    pub async fn record_failure(&self) {
        self.inner.write().await.external_failures += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
