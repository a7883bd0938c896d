mod handle;
mod handle_error;
mod range_slider;
mod slider_props;
mod track;
mod value_change;

pub use handle::Handle;
pub use handle_error::HandleError;
pub use range_slider::RangeSlider;
pub use slider_props::SliderProps;
pub use slider_props::DEFAULT_PADDING;
pub use track::Track;
pub use value_change::ValueChange;
