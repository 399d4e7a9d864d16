use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Struct representing the `~thread` decorator from its [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/concepts/0008-message-id-and-threading/README.md>).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, TypedBuilder)]
pub struct Thread {
    pub thid: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pthid: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_order: Option<u32>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_orders: Option<HashMap<String, u32>>,
}

impl Thread {
    pub fn new(thid: String) -> Self {
        Self {
            thid,
            pthid: None,
            sender_order: None,
            received_orders: None,
        }
    }
}
