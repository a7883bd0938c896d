use std::{fs, path::Path};

use rangeslide::SliderProps;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropsFileError {
    #[error("Could not read props file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

pub fn read_props(path: &Path) -> Result<SliderProps, PropsFileError> {
    let contents = fs::read_to_string(path)?;
    let props = ron::from_str(&contents)?;
    tracing::info!(path = %path.display(), "loaded slider props");
    Ok(props)
}

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
}
