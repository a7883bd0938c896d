mod percentage;

pub use percentage::Percentage;
