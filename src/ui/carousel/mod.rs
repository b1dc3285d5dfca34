//! Pipeline carousel: a fixed sequence of slides advanced by an autoplay
//! timer or by the indicator controls.

mod autoplay;
mod intent;
mod reducer;
mod slides;
mod state;
mod widget;

pub use autoplay::AutoplayTimer;
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use slides::{Slide, SLIDES, SLIDE_COUNT};
pub use state::CarouselState;
pub use widget::{render_carousel, CarouselFrame};
