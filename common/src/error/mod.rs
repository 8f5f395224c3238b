pub mod location;
pub mod redact;
