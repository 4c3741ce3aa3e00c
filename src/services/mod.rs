pub mod ledger;
pub mod messaging;
pub mod notifications;
pub mod scheduling;
pub mod sessions;
