/// Everything the render layer needs to draw one handle
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    /// Position of the handle in the value set
    pub index: usize,

    /// The stepped, clamped value to display
    pub value: f64,

    /// The normalised position of the raw value
    pub fraction: f64,

    /// The position formatted for rendering, e.g. `"50%"`
    pub position: String,
}
