/// View state owned by one widget.
///
/// Reducers take it by value and hand back the successor, so it must be
/// cheap to clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
