/// Marker trait for state objects.
///
/// `Default` lets dispatchers `mem::take` the state out, `PartialEq` lets
/// tests and the view detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
