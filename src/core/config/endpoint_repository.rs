use anyhow::{Context, Result};
use validator::Validate;

use super::endpoint_entity::EndpointDescriptor;
use super::endpoint_env_adapter::{EndpointEnvAdapter, EndpointSourceTrait};

/// Repository abstraction over endpoint configuration sources.
pub trait EndpointApiRepository {
    fn source(&self) -> &dyn EndpointSourceTrait;

    /// Read and validate the descriptor.
    fn load(&self) -> Result<EndpointDescriptor> {
        let descriptor = self.source().read()?;
        descriptor
            .validate()
            .with_context(|| format!("invalid GraphQL endpoint `{}`", descriptor.endpoint_url))?;
        Ok(descriptor)
    }
}

pub struct EndpointRepository {
    adapter: EndpointEnvAdapter,
}

impl EndpointRepository {
    pub fn new() -> Self {
        Self {
            adapter: EndpointEnvAdapter::new(),
        }
    }
}

impl Default for EndpointRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointApiRepository for EndpointRepository {
    fn source(&self) -> &dyn EndpointSourceTrait {
        &self.adapter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSource {
        descriptor: EndpointDescriptor,
    }

    impl EndpointSourceTrait for MockSource {
        fn read(&self) -> Result<EndpointDescriptor> {
            Ok(self.descriptor.clone())
        }
    }

    struct MockRepository {
        source: MockSource,
    }

    impl EndpointApiRepository for MockRepository {
        fn source(&self) -> &dyn EndpointSourceTrait {
            &self.source
        }
    }

    #[test]
    fn load_returns_valid_descriptor() {
        let repo = MockRepository {
            source: MockSource {
                descriptor: EndpointDescriptor {
                    service_name: "lyfegentt".into(),
                    endpoint_url: "https://api.example.com/graphql".into(),
                    include_patterns: vec!["src/**/*.rs".into()],
                },
            },
        };

        let descriptor = repo.load().expect("load should succeed");
        assert_eq!(descriptor.endpoint_url, "https://api.example.com/graphql");
    }

    #[test]
    fn load_rejects_malformed_url() {
        let repo = MockRepository {
            source: MockSource {
                descriptor: EndpointDescriptor {
                    endpoint_url: "graphql".into(),
                    ..Default::default()
                },
            },
        };

        assert!(repo.load().is_err());
    }
}
