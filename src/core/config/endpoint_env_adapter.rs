use std::env;

use anyhow::Result;

use super::endpoint_entity::EndpointDescriptor;

/// Source of endpoint configuration values.
pub trait EndpointSourceTrait {
    fn read(&self) -> Result<EndpointDescriptor>;
}

/// Env-backed adapter with shipped defaults.
///
/// Recognized variables:
/// - `LYFEGENTT_GRAPHQL_SERVICE` — service identifier
/// - `LYFEGENTT_GRAPHQL_URL` — GraphQL endpoint URL
/// - `LYFEGENTT_GRAPHQL_INCLUDES` — comma-separated glob patterns
pub struct EndpointEnvAdapter;

impl EndpointEnvAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for EndpointEnvAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointSourceTrait for EndpointEnvAdapter {
    fn read(&self) -> Result<EndpointDescriptor> {
        let mut descriptor = EndpointDescriptor::default();

        if let Ok(v) = env::var("LYFEGENTT_GRAPHQL_SERVICE") {
            let v = v.trim();
            if !v.is_empty() {
                descriptor.service_name = v.to_string();
            }
        }

        if let Ok(v) = env::var("LYFEGENTT_GRAPHQL_URL") {
            let v = v.trim();
            if !v.is_empty() {
                descriptor.endpoint_url = v.to_string();
            }
        }

        if let Ok(v) = env::var("LYFEGENTT_GRAPHQL_INCLUDES") {
            let patterns: Vec<String> = v
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            if !patterns.is_empty() {
                descriptor.include_patterns = patterns;
            }
        }

        Ok(descriptor)
    }
}
