use tracing::info;

use storefront_cart::CartEvent;
use storefront_events::EventListener;

/// Email notification stub.
///
/// Logs a product-update mail for every addition; other cart events are
/// ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailListener;

impl EmailListener {
    pub fn new() -> Self {
        Self
    }
}

impl EventListener<CartEvent> for EmailListener {
    fn on_event(&mut self, event: &CartEvent) {
        if let CartEvent::ProductAdded(added) = event {
            info!(
                product = added.product.name(),
                "sending product update email"
            );
        }
    }
}
