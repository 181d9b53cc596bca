use crate::cli::BuildArgs;
use crate::config::build_config;
use crate::config::builder::BatchFlags;
use crate::error::Result;
use crate::output;
use nerfkit::engine::nerf::build_coordinate;
use tracing::{debug, info};

pub fn run(args: BuildArgs) -> Result<()> {
    let config = build_config(&args.config, BatchFlags::default())?;
    debug!("Resolved configuration: {:?}", config);

    let triple = &args.triple;
    info!(
        distance = args.distance,
        bond_angle = args.angle,
        torsion = args.torsion,
        "Building coordinate from {} {} {}.",
        triple.first,
        triple.second,
        triple.third
    );

    let position = build_coordinate(
        &triple.first,
        &triple.second,
        &triple.third,
        args.distance,
        args.angle,
        args.torsion,
        None,
    )?;

    println!("{}", output::format_point(&position, &config.output));
    Ok(())
}
