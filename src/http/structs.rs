/// Per-listener application state.
pub mod http_service_data;
