#![warn(missing_docs)]

//! rangeslide is the headless core of a multi-handle range slider
//!
//! You can use it to:
//! - Validate a slider's `min`, `max` and `step` once, up front
//! - Convert handle values to normalised fractions and back
//! - Snap free-form pointer input to the configured step
//! - Produce percentage positions for rendering each handle
//! - Turn pointer movement along a track into change events
//!
//! # Example
//!
//! ```rust
//! use rangeslide::{RangeSlider, SliderProps, Track};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let props = SliderProps::default_for(5.0, 15.0).with_value(vec![5.0, 10.0]);
//! let slider = RangeSlider::from_props(&props)?;
//!
//! for handle in slider.handles(&props.value)? {
//!     println!("handle {} sits at {}", handle.index, handle.position);
//! }
//!
//! let track = Track::new(0.0, 200.0)?;
//! if let Some(change) = slider.drag(&props.value, 1, 150.0, &track)? {
//!     println!("new values: {:?}", change.values);
//! }
//! # Ok(())
//! # }
//! ```

mod range;
mod slider;
mod utility;

pub use range::ConfigurationError;
pub use range::RangeCalculator;
pub use range::RangeConfig;
pub use range::DEFAULT_STEP;

pub use slider::Handle;
pub use slider::HandleError;
pub use slider::RangeSlider;
pub use slider::SliderProps;
pub use slider::Track;
pub use slider::ValueChange;
pub use slider::DEFAULT_PADDING;

pub use utility::Percentage;
