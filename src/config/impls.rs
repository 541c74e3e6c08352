/// Configuration implementation: defaults, loading, saving and validation.
pub mod configuration;
