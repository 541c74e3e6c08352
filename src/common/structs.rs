/// Simple message-carrying error used at process startup.
pub mod custom_error;
