use crate::range::{ConfigurationError, RangeCalculator};

use super::{Handle, HandleError, SliderProps, Track, ValueChange};

/// A multi-handle range slider, minus the rendering
///
/// The slider owns its validated configuration but not its values: the host
/// passes the current value set into each call and receives new values back.
pub struct RangeSlider {
    calculator: RangeCalculator,
    padding: String,
}

impl RangeSlider {
    /// Build a slider from host props, validating the numeric configuration
    pub fn from_props(props: &SliderProps) -> Result<Self, ConfigurationError> {
        let config = props.config()?;

        tracing::debug!(
            min = config.min(),
            max = config.max(),
            step = config.step(),
            handles = props.value.len(),
            "created range slider"
        );

        Ok(Self {
            calculator: RangeCalculator::new(config),
            padding: props.padding.clone(),
        })
    }

    /// The calculator backing this slider
    pub fn calculator(&self) -> &RangeCalculator {
        &self.calculator
    }

    /// Presentation padding, as given in the props
    pub fn padding(&self) -> &str {
        &self.padding
    }

    /// Normalised fractions for each value, unclamped
    pub fn value_fractions(&self, values: &[f64]) -> Vec<f64> {
        self.calculator.normalize_all(values)
    }

    /// Render data for each value, in input order
    pub fn handles(&self, values: &[f64]) -> Result<Vec<Handle>, HandleError> {
        check_finite(values)?;

        let handles = values
            .iter()
            .enumerate()
            .map(|(index, value)| Handle {
                index,
                value: self.calculator.round(*value),
                fraction: self.calculator.normalize(*value),
                position: self.calculator.position(*value),
            })
            .collect();

        Ok(handles)
    }

    /// Move one handle to a new value
    ///
    /// The value is snapped to the step and clamped. Returns `None` if that
    /// leaves the handle where it already was.
    pub fn set_value(
        &self,
        values: &[f64],
        index: usize,
        value: f64,
    ) -> Result<Option<ValueChange>, HandleError> {
        check_finite(values)?;

        let previous = *values.get(index).ok_or(HandleError::IndexOutOfRange {
            index,
            count: values.len(),
        })?;

        if !value.is_finite() {
            return Err(HandleError::NonFiniteValue { index, value });
        }

        let value = self.calculator.round(value);

        if value == previous {
            return Ok(None);
        }

        let mut new_values = values.to_vec();
        new_values[index] = value;

        tracing::trace!(index, previous, value, "handle moved");

        Ok(Some(ValueChange {
            index,
            previous,
            value,
            values: new_values,
        }))
    }

    /// Move one handle to the value under a pointer on the track
    pub fn drag(
        &self,
        values: &[f64],
        index: usize,
        pointer: f64,
        track: &Track,
    ) -> Result<Option<ValueChange>, HandleError> {
        if !pointer.is_finite() {
            return Err(HandleError::NonFiniteValue {
                index,
                value: pointer,
            });
        }

        self.set_value(values, index, self.calculator.value_at(pointer, track))
    }
}

fn check_finite(values: &[f64]) -> Result<(), HandleError> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(HandleError::NonFiniteValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
