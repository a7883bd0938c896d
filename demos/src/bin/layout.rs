use std::{error::Error, path::PathBuf};

use demos::{init_logging, read_props};
use rangeslide::{RangeSlider, Track};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Options {
    #[structopt(parse(from_os_str))]
    props_file: PathBuf,

    #[structopt(short, long, default_value = "400.0")]
    track_length: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let options = Options::from_args();
    let props = read_props(&options.props_file)?;
    let slider = RangeSlider::from_props(&props)?;
    let track = Track::new(0.0, options.track_length)?;

    println!(
        "range {}..{} step {} padding {}",
        props.min,
        props.max,
        props.step,
        slider.padding()
    );

    for handle in slider.handles(&props.value)? {
        let offset = slider.calculator().offset(handle.value, &track);
        println!(
            "handle {}: value {} at {} ({offset:.1}px)",
            handle.index, handle.value, handle.position
        );
    }

    Ok(())
}
