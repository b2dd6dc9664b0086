/// Alert synchronization domain layer
///
/// Pure business logic: the advisory report and alert models, the identifier
/// policy, and the reconciliation service. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
