/// Something that happened to a widget: an input gesture, a timer tick
/// or a change in host preferences.
pub trait Intent: Send + 'static {}
