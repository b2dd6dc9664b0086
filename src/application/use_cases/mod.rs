/// Use cases module containing application business logic orchestration
mod list_security_alerts;
mod sync_security_alerts;

pub use list_security_alerts::ListSecurityAlertsUseCase;
pub use sync_security_alerts::SyncSecurityAlertsUseCase;
