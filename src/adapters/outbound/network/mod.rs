/// Network adapters for external API calls
mod http_advisory_checker;

pub use http_advisory_checker::HttpAdvisoryChecker;
