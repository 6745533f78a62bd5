use std::sync::Arc;

use tracing::{debug, info, instrument};

use restock_parties::Supplier;
use restock_replenishment::{compose, match_suppliers, PendingGroups, SupplierNotification};

use super::ReorderError;
use crate::delivery::DeliveryProvider;
use crate::dispatch::DispatchGateway;
use crate::store::{StockQuery, SupplierDirectory};

/// Notifier wired to trait objects, as the HTTP layer holds it.
pub type SharedReorderNotifier =
    ReorderNotifier<Arc<dyn StockQuery>, Arc<dyn SupplierDirectory>, Arc<dyn DeliveryProvider>>;

/// Runs one reorder notification pass per call.
///
/// Holds no state between runs. Two concurrent runs are not excluded from
/// each other and may both notify the same supplier.
#[derive(Debug, Clone)]
pub struct ReorderNotifier<Q, D, P> {
    stock: Q,
    directory: D,
    gateway: DispatchGateway<P>,
}

impl<Q, D, P> ReorderNotifier<Q, D, P>
where
    Q: StockQuery,
    D: SupplierDirectory,
    P: DeliveryProvider,
{
    pub fn new(stock: Q, directory: D, gateway: DispatchGateway<P>) -> Self {
        Self {
            stock,
            directory,
            gateway,
        }
    }

    pub fn gateway(&self) -> &DispatchGateway<P> {
        &self.gateway
    }

    /// Notify every supplier that covers at least one pending category.
    ///
    /// - Suppliers are processed in directory order, one at a time.
    /// - Suppliers with no matching category are skipped silently.
    /// - The first failed dispatch ends the run; later suppliers are not
    ///   attempted.
    #[instrument(skip(self), err)]
    pub async fn run(&self) -> Result<Vec<SupplierNotification>, ReorderError> {
        let Some((pending, suppliers)) = self.load().await? else {
            return Ok(Vec::new());
        };

        let mut notified = Vec::new();
        for matched in match_suppliers(&suppliers, &pending) {
            let supplier = matched.supplier();
            if matched.is_empty() {
                debug!(supplier = %supplier.name(), "no pending category for supplier");
                continue;
            }

            let request = compose(&matched);
            let outcome = self
                .gateway
                .send(supplier.contact(), &request.subject, &request.body)
                .await;

            if let Err(failure) = outcome.into_result(supplier.name(), supplier.contact().as_str()) {
                return Err(ReorderError::Dispatch { failure, notified });
            }
            notified.push(SupplierNotification::from_match(&matched));
        }

        info!(notified = notified.len(), "reorder notification run complete");
        Ok(notified)
    }

    /// Dry run: the notifications `run` would send right now, without
    /// calling the provider.
    #[instrument(skip(self), err)]
    pub async fn plan(&self) -> Result<Vec<SupplierNotification>, ReorderError> {
        let Some((pending, suppliers)) = self.load().await? else {
            return Ok(Vec::new());
        };

        Ok(match_suppliers(&suppliers, &pending)
            .iter()
            .filter(|m| !m.is_empty())
            .map(SupplierNotification::from_match)
            .collect())
    }

    /// Candidates grouped by category, and the directory. `None` when
    /// nothing is below its reorder level; the directory is not read then.
    async fn load(&self) -> Result<Option<(PendingGroups, Vec<Supplier>)>, ReorderError> {
        let candidates = self
            .stock
            .items_below_reorder_level()
            .await
            .map_err(ReorderError::Stock)?;

        if candidates.is_empty() {
            info!("no stock below reorder level; nothing to notify");
            return Ok(None);
        }

        let pending = PendingGroups::from_items(candidates);
        info!(
            categories = pending.len(),
            items = pending.item_count(),
            "stock below reorder level"
        );

        let suppliers = self
            .directory
            .suppliers()
            .await
            .map_err(ReorderError::Directory)?;

        Ok(Some((pending, suppliers)))
    }
}
