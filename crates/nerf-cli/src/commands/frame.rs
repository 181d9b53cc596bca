use crate::cli::FrameArgs;
use crate::config::build_config;
use crate::config::builder::BatchFlags;
use crate::error::Result;
use crate::output;
use nerfkit::engine::frame::build_reference_frame;
use tracing::info;

pub fn run(args: FrameArgs) -> Result<()> {
    let config = build_config(&args.config, BatchFlags::default())?;

    let triple = &args.triple;
    info!(
        "Building reference frame for {} {} {}.",
        triple.first, triple.second, triple.third
    );
    let basis = build_reference_frame(&triple.first, &triple.second, &triple.third)?;

    println!("{}", output::format_frame(&basis, &config.output));
    Ok(())
}
