mod identifier_policy;

pub use identifier_policy::IdentifierPolicy;
