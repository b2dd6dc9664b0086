/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod sync_request;
mod sync_response;

pub use output_format::OutputFormat;
pub use sync_request::SyncRequest;
pub use sync_response::SyncResponse;
