use geo_closest_point::geojson;
use geo_closest_point::output::Output;
use geo_closest_point::{closest_points, ClosestPointInfo};
use geo_types::Point;
use std::error::Error;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum Format {
    JsonLines,
    GeoJson,
}

fn parse_format(src: &str) -> Result<Format, String> {
    match src {
        "json-lines" => Ok(Format::JsonLines),
        "geojson" => Ok(Format::GeoJson),
        _ => Err(format!("unknown output format '{}'", src)),
    }
}

fn parse_query(src: &str) -> Result<Point<f64>, String> {
    let mut parts = src.splitn(2, ',');
    let mut next = || -> Result<f64, String> {
        let part = parts.next().ok_or("expected 'x,y'")?;
        part.trim().parse().map_err(|e| format!("{}: '{}'", e, part))
    };
    let x = next()?;
    let y = next()?;
    Ok(Point::new(x, y))
}

#[derive(StructOpt, Debug)]
#[structopt(
    name = "closest_point",
    about = "Finds the closest point of a GeoJSON geometry to query points"
)]
struct Opt {
    /// Query point as 'x,y', may be given multiple times
    #[structopt(
        short,
        long,
        required = true,
        allow_hyphen_values = true,
        number_of_values = 1,
        parse(try_from_str = parse_query)
    )]
    query: Vec<Point<f64>>,

    /// Output format, 'json-lines' or 'geojson'
    #[structopt(short, long, default_value = "json-lines", parse(try_from_str = parse_format))]
    format: Format,

    /// Maximum nesting depth of geometry and feature collections
    #[structopt(long, default_value = "32")]
    max_depth: usize,

    /// GeoJSON input, read from stdin if omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

fn read_input(path: &Option<PathBuf>) -> Result<String, Box<dyn Error>> {
    let mut json = String::new();
    match path {
        Some(path) => File::open(path)?.read_to_string(&mut json)?,
        None => io::stdin().read_to_string(&mut json)?,
    };
    Ok(json)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opt = Opt::from_args();
    debug!(?opt, "parsed options");

    let json = read_input(&opt.input)?;
    let geometry = geojson::parse(&json, opt.max_depth)?;
    info!(depth = geometry.depth(), "geometry loaded");

    let results: Vec<ClosestPointInfo> = closest_points(&opt.query, &geometry)
        .into_iter()
        .map(ClosestPointInfo::from)
        .collect();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match opt.format {
        Format::JsonLines => results.write_json_lines(&mut handle)?,
        Format::GeoJson => results.write_geojson(&mut handle)?,
    }
    Ok(())
}
