/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe what the application core needs
/// from infrastructure: an advisory checker, an alert store, file access,
/// progress reporting and output.
pub mod outbound;
