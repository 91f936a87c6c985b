//! Background cache warming.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{cache::REFRESH_INTERVAL, domain::products::ProductsService};

/// Owns the periodic task that keeps the first product page warm.
///
/// The first refresh runs immediately, then every five minutes, overwriting
/// the warm entry whether or not it has expired. A failed refresh logs and
/// leaves the previous entry in place.
#[derive(Debug)]
pub struct CacheWarmer {
    handle: JoinHandle<()>,
}

impl CacheWarmer {
    /// Spawn the refresh task.
    #[must_use]
    pub fn spawn(products: Arc<dyn ProductsService>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(REFRESH_INTERVAL);

            loop {
                ticker.tick().await;

                match products.warm().await {
                    Ok(()) => debug!("warmed first product page"),
                    Err(error) => warn!("cache warm-up failed: {error}"),
                }
            }
        });

        Self { handle }
    }

    /// Stop the refresh task. Called on server shutdown so the timer does
    /// not outlive the process lifecycle it belongs to.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::products::MockProductsService;

    use super::*;

    #[tokio::test]
    async fn test_spawn_warms_immediately() -> TestResult {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let mut products = MockProductsService::new();
        let tx = std::sync::Mutex::new(Some(tx));

        products.expect_warm().returning(move || {
            if let Ok(mut guard) = tx.lock() {
                if let Some(tx) = guard.take() {
                    let _ = tx.send(());
                }
            }

            Ok(())
        });

        let warmer = CacheWarmer::spawn(Arc::new(products));

        tokio::time::timeout(std::time::Duration::from_secs(1), rx).await??;

        warmer.shutdown();

        Ok(())
    }
}
