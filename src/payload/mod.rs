pub mod delegating;
pub mod ports;
pub mod types;

pub use delegating::DelegatingInputPayloadMetadata;
pub use ports::{InputPayloadMetadata, PayloadMetadata, PropertyStream};
pub use types::{InputPayload, PayloadProperties, TypedInputPayloadMetadata};
