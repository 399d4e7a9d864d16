use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use url::Url;

/// Struct representing the `~service` decorator from its [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0056-service-decorator/README.md>).
///
/// Lets a connectionless message carry the routing information needed to answer it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub recipient_keys: Vec<String>,
    #[builder(default)]
    #[serde(default)]
    pub routing_keys: Vec<String>,
    pub service_endpoint: Url,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub mod tests {
    use serde_json::json;

    use super::*;
    use crate::misc::test_utils;

    pub fn make_extended_service() -> Service {
        Service::builder()
            .recipient_keys(vec!["verkey".to_owned()])
            .routing_keys(vec!["routing_key".to_owned()])
            .service_endpoint("https://agent.example.org/".parse().unwrap())
            .build()
    }

    #[test]
    fn test_extended_service() {
        let service = make_extended_service();
        let expected = json!({
            "recipientKeys": ["verkey"],
            "routingKeys": ["routing_key"],
            "serviceEndpoint": "https://agent.example.org/"
        });

        test_utils::test_serde(service, expected);
    }

    #[test]
    fn test_service_without_routing_keys() {
        let service: Service = serde_json::from_value(json!({
            "recipientKeys": ["verkey"],
            "serviceEndpoint": "https://agent.example.org/"
        }))
        .unwrap();

        assert!(service.routing_keys.is_empty());
    }
}
