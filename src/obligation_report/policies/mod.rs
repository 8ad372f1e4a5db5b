mod fulfillment_policy;

pub use fulfillment_policy::FulfillmentPolicy;
