/// Marker trait for intents: navigation requests and fetch results.
pub trait Intent: Send + 'static {}
