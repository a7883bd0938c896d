use std::{error::Error, path::PathBuf};

use demos::{init_logging, read_props};
use rangeslide::{RangeSlider, Track};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Options {
    #[structopt(parse(from_os_str))]
    props_file: PathBuf,

    #[structopt(short, long)]
    handle: usize,

    /// Pointer coordinates to drag the handle through, in pixels
    #[structopt(short, long)]
    pointer: Vec<f64>,

    #[structopt(short, long, default_value = "400.0")]
    track_length: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let options = Options::from_args();
    let props = read_props(&options.props_file)?;
    let slider = RangeSlider::from_props(&props)?;
    let track = Track::new(0.0, options.track_length)?;

    let mut values = props.value.clone();

    for pointer in options.pointer {
        match slider.drag(&values, options.handle, pointer, &track)? {
            Some(change) => {
                println!(
                    "{pointer}px: handle {} {} -> {}",
                    change.index, change.previous, change.value
                );
                values = change.values;
            }
            None => println!("{pointer}px: no change"),
        }
    }

    println!("final values: {values:?}");

    Ok(())
}
