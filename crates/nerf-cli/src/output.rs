use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use nerfkit::core::models::coords::InternalCoordinate;
use nerfkit::core::models::frame::BasisMatrix;
use nerfkit::core::models::vector::Vector;
use nerfkit::workflows::batch::BatchResult;
use serde::Serialize;
use std::io::Write;

pub fn format_point(point: &Vector, config: &OutputConfig) -> String {
    let p = config.precision;
    match config.format {
        OutputFormat::Text => format!("{:.*}", p, point),
        OutputFormat::Csv => format!(
            "{:.*},{:.*},{:.*}",
            p,
            point.x(),
            p,
            point.y(),
            p,
            point.z()
        ),
    }
}

pub fn format_frame(basis: &BasisMatrix, config: &OutputConfig) -> String {
    let [bc, nbc, n] = basis.rows();
    match config.format {
        OutputFormat::Text => format!(
            "bc  = {}\nnbc = {}\nn   = {}",
            format_point(&bc, config),
            format_point(&nbc, config),
            format_point(&n, config)
        ),
        OutputFormat::Csv => format!(
            "row,x,y,z\nbc,{}\nnbc,{}\nn,{}",
            format_point(&bc, config),
            format_point(&nbc, config),
            format_point(&n, config)
        ),
    }
}

pub fn format_internal(ic: &InternalCoordinate, config: &OutputConfig) -> String {
    let p = config.precision;
    match config.format {
        OutputFormat::Text => format!(
            "distance   = {:.*}\nbond-angle = {:.*}\ntorsion    = {:.*}",
            p, ic.distance, p, ic.bond_angle, p, ic.torsion
        ),
        OutputFormat::Csv => format!(
            "distance,bond_angle,torsion\n{:.*},{:.*},{:.*}",
            p, ic.distance, p, ic.bond_angle, p, ic.torsion
        ),
    }
}

#[derive(Serialize)]
struct PointRecord<'a> {
    job: &'a str,
    index: usize,
    distance: f64,
    bond_angle: f64,
    torsion: f64,
    x: String,
    y: String,
    z: String,
}

/// Writes the successfully built points of a batch run.
pub fn write_batch<W: Write>(result: &BatchResult, config: &OutputConfig, writer: W) -> Result<()> {
    match config.format {
        OutputFormat::Text => write_batch_text(result, config, writer),
        OutputFormat::Csv => write_batch_csv(result, config, writer),
    }
}

fn write_batch_text<W: Write>(
    result: &BatchResult,
    config: &OutputConfig,
    mut writer: W,
) -> Result<()> {
    for point in &result.points {
        writeln!(
            writer,
            "{}[{}]: {}",
            point.job,
            point.index,
            format_point(&point.position, config)
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_batch_csv<W: Write>(result: &BatchResult, config: &OutputConfig, writer: W) -> Result<()> {
    let p = config.precision;
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in &result.points {
        csv_writer.serialize(PointRecord {
            job: &point.job,
            index: point.index,
            distance: point.coordinate.distance,
            bond_angle: point.coordinate.bond_angle,
            torsion: point.coordinate.torsion,
            x: format!("{:.*}", p, point.position.x()),
            y: format!("{:.*}", p, point.position.y()),
            z: format!("{:.*}", p, point.position.z()),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nerfkit::workflows::batch::BuiltPoint;

    fn config(format: OutputFormat, precision: usize) -> OutputConfig {
        OutputConfig { precision, format }
    }

    fn sample_result() -> BatchResult {
        BatchResult {
            points: vec![
                BuiltPoint {
                    job: "alpha".to_string(),
                    index: 0,
                    coordinate: InternalCoordinate::new(1.0, 90.0, 90.0),
                    position: Vector::new(0.0, 1.0, -1.0),
                },
                BuiltPoint {
                    job: "alpha".to_string(),
                    index: 1,
                    coordinate: InternalCoordinate::new(1.5, 180.0, 0.0),
                    position: Vector::new(0.0, 2.5, 0.0),
                },
            ],
            failures: Vec::new(),
        }
    }

    #[test]
    fn formats_point_in_both_formats() {
        let p = Vector::new(1.0, -0.5, 0.123456);
        assert_eq!(
            format_point(&p, &config(OutputFormat::Text, 3)),
            "(1.000, -0.500, 0.123)"
        );
        assert_eq!(
            format_point(&p, &config(OutputFormat::Csv, 2)),
            "1.00,-0.50,0.12"
        );
    }

    #[test]
    fn formats_internal_coordinate_as_csv_with_header() {
        let ic = InternalCoordinate::new(1.5, 109.5, -60.0);
        assert_eq!(
            format_internal(&ic, &config(OutputFormat::Csv, 1)),
            "distance,bond_angle,torsion\n1.5,109.5,-60.0"
        );
    }

    #[test]
    fn writes_batch_as_text_lines() {
        let mut buffer = Vec::new();
        write_batch(&sample_result(), &config(OutputFormat::Text, 1), &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "alpha[0]: (0.0, 1.0, -1.0)\nalpha[1]: (0.0, 2.5, 0.0)\n"
        );
    }

    #[test]
    fn writes_batch_as_csv_with_header() {
        let mut buffer = Vec::new();
        write_batch(&sample_result(), &config(OutputFormat::Csv, 2), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "job,index,distance,bond_angle,torsion,x,y,z"
        );
        assert_eq!(lines[1], "alpha,0,1.0,90.0,90.0,0.00,1.00,-1.00");
        assert_eq!(lines.len(), 3);
    }
}
