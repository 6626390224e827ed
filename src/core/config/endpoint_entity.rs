use serde::{Deserialize, Serialize};
use validator::Validate;

/// Location of the GraphQL service the client talks to.
///
/// Constructed once at startup and never mutated; consumers read it, the
/// core never speaks the protocol itself. `include_patterns` is passed
/// verbatim to external tooling that scans sources for GraphQL usage;
/// the glob dialect is that tooling's concern.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EndpointDescriptor {
    /// Service identifier, used only for tooling display.
    #[validate(length(min = 1))]
    pub service_name: String,
    /// Network location of the GraphQL API.
    #[validate(url)]
    pub endpoint_url: String,
    /// Glob patterns selecting the files tooling scans.
    pub include_patterns: Vec<String>,
}

impl Default for EndpointDescriptor {
    fn default() -> Self {
        Self {
            service_name: "lyfegentt".into(),
            endpoint_url: "http://localhost:5000/graphql".into(),
            include_patterns: vec!["src/**/*.rs".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        EndpointDescriptor::default()
            .validate()
            .expect("shipped defaults must be valid");
    }

    #[test]
    fn malformed_url_fails_validation() {
        let descriptor = EndpointDescriptor {
            endpoint_url: "not a url".into(),
            ..Default::default()
        };
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn deserializes_from_json_config() {
        let descriptor: EndpointDescriptor = serde_json::from_value(serde_json::json!({
            "service_name": "lyfegentt",
            "endpoint_url": "http://localhost:5000/graphql",
            "include_patterns": ["src/**/*.rs"]
        }))
        .unwrap();

        descriptor.validate().unwrap();
        assert_eq!(descriptor.service_name, "lyfegentt");
    }

    #[test]
    fn empty_service_name_fails_validation() {
        let descriptor = EndpointDescriptor {
            service_name: String::new(),
            ..Default::default()
        };
        assert!(descriptor.validate().is_err());
    }
}
