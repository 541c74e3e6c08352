/// Errors raised while loading, saving or validating the configuration.
pub mod configuration_error;
