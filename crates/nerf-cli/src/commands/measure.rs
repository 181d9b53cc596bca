use crate::cli::MeasureArgs;
use crate::config::build_config;
use crate::config::builder::BatchFlags;
use crate::error::{CliError, Result};
use crate::output;
use nerfkit::core::utils::geometry::measure_internal;
use tracing::info;

pub fn run(args: MeasureArgs) -> Result<()> {
    let config = build_config(&args.config, BatchFlags::default())?;

    let triple = &args.triple;
    info!(
        "Measuring {} against {} {} {}.",
        args.fourth, triple.first, triple.second, triple.third
    );
    let ic = measure_internal(&triple.first, &triple.second, &triple.third, &args.fourth);

    if ic.bond_angle.is_nan() || ic.torsion.is_nan() {
        return Err(CliError::Argument(
            "The four points do not define a bond angle and torsion (coincident or collinear points)."
                .to_string(),
        ));
    }

    println!("{}", output::format_internal(&ic, &config.output));
    Ok(())
}
