use std::sync::Arc;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

#[derive(Debug)]
pub struct HttpServiceData {
    pub swarm_registry: Arc<SwarmRegistry>
}
