/// Emitted when a handle moves to a new value
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    /// The handle that moved
    pub index: usize,

    /// The value it held before
    pub previous: f64,

    /// The value it holds now
    pub value: f64,

    /// The complete value set after the change, in the original order
    pub values: Vec<f64>,
}
