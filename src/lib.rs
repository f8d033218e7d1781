//! Machine-readable descriptions of the interactions a hypermedia API
//! offers on a resource.
//!
//! ```
//! use affordance::{
//!     Affordances, HttpMethod, InputPayloadMetadata, Link, PayloadProperties, PropertyMetadata,
//!     TypedInputPayloadMetadata,
//! };
//!
//! struct Order;
//!
//! let input = TypedInputPayloadMetadata::of::<Order>(PayloadProperties::new([
//!     PropertyMetadata::new("id").with_read_only(true),
//!     PropertyMetadata::new("title").with_required(true),
//! ]));
//!
//! let model = Affordances::of(Link::new("/orders"))
//!     .afford(HttpMethod::Post)
//!     .with_input(input)
//!     .build()
//!     .expect("default name is valid");
//!
//! assert_eq!(model.name(), "postOrder");
//! assert_eq!(model.input().i18n_codes().last().map(String::as_str), Some("Order"));
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod http_method;
pub mod link;
pub mod logging;
pub mod model;
pub mod payload;
pub mod property;
pub mod query;
pub mod set;

pub use builder::{Affordances, ConfigurableAffordance};
pub use error::{AffordanceError, AffordanceErrorKind};
pub use http_method::HttpMethod;
pub use link::{Expandable, Link, Variables};
pub use model::AffordanceModel;
pub use payload::{
    DelegatingInputPayloadMetadata, InputPayload, InputPayloadMetadata, PayloadMetadata,
    PayloadProperties, PropertyStream, TypedInputPayloadMetadata,
};
pub use property::{
    ConfigurableProperty, Named, PropertyMetadata, PropertyMetadataConfigured, TypeDescriptor,
};
pub use query::QueryParameter;
pub use set::AffordanceSet;
