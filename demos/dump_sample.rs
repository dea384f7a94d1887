//! This example dumps an OpenTrackIO JSON sample.
//!
//! Prints every decoded property group followed by the diagnostics collected while decoding.
//!
//! # Usage:
//! ```bash
//! cargo run --example dump_sample ./fixtures/complete.json
//! ```

use std::env;

use anyhow::{Context as _, Result};
use opentrackio::Sample;

fn main() -> Result<()> {
    let args = env::args().collect::<Vec<_>>();

    let path = args
        .get(1)
        .context("Missing path to sample file, use: cargo run --example dump_sample {PATH_TO_FILE}.json")?;

    let sample = Sample::open(path).context("Failed to read sample")?;

    println!("-- Protocol");
    match &sample.protocol {
        Some(protocol) => println!("{} {}", protocol.name, protocol.version),
        None => println!("<none>"),
    }
    println!();

    println!("-- Identifiers");
    if let Some(id) = &sample.sample_id {
        println!("Sample: {}", id);
    }
    if let Some(id) = &sample.stream_id {
        println!("Stream: {}", id);
    }
    if let Some(related) = &sample.related_sample_ids {
        for (index, id) in related.samples.iter().enumerate() {
            println!("Related #{}:\t{}", index, id);
        }
    }
    println!();

    println!("-- Camera: {:#?}", sample.camera);
    println!("-- Duration: {:?}", sample.duration.map(|duration| duration.rational.to_string()));
    println!("-- Global stage: {:?}", sample.global_stage);
    println!("-- Lens: {:#?}", sample.lens);
    println!("-- Tracker: {:#?}", sample.tracker);
    println!();

    println!("-- Timing:");
    if let Some(timing) = &sample.timing {
        if let Some(timecode) = &timing.timecode {
            println!("Timecode: {}", timecode);
        }
        println!("{:#?}", timing);
    }
    println!();

    println!("-- Transforms:");
    if let Some(transforms) = &sample.transforms {
        for (index, transform) in transforms.transforms.iter().enumerate() {
            println!(
                "#{}:\t{} (parent: {})",
                index,
                transform.id.as_deref().unwrap_or("-"),
                transform.parent_id.as_deref().unwrap_or("-")
            );
        }
    }
    println!();

    println!("-- Diagnostics ({}):", sample.diagnostics().len());
    for (index, diagnostic) in sample.diagnostics().iter().enumerate() {
        println!("#{}:\t{}", index, diagnostic);
    }

    Ok(())
}
