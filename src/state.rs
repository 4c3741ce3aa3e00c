use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::services::ledger::Ledger;
use crate::services::messaging::NotificationSink;
use crate::services::notifications::Notifier;
use crate::services::sessions::SessionRegistry;
use crate::store::BookingStore;

pub struct AppState {
    pub config: AppConfig,
    pub ledger: Ledger,
    pub notifier: Arc<Notifier>,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Box<dyn BookingStore>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let notifier = Arc::new(Notifier::new(
            sink,
            config.business_name.clone(),
            config.admin_phone.clone(),
            config.base_url.clone(),
            Duration::from_secs(config.notify_timeout_secs),
        ));

        let session_ttl = Duration::from_secs(config.session_ttl_hours * 3600);

        Self {
            ledger: Ledger::new(store, Arc::clone(&notifier)),
            notifier,
            sessions: SessionRegistry::new(session_ttl),
            config,
        }
    }
}
