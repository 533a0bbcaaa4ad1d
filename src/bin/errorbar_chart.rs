use std::fs;
use std::path::PathBuf;

use chart_errorbars::api::{ChartConfig, ChartEngine, ChartEngineConfig};
use chart_errorbars::core::Viewport;
use chart_errorbars::loader::{
    CommitChartParams, commit_history_chart, load_series, load_series_with_error_bars,
};
use chart_errorbars::render::SvgRenderer;
use chart_errorbars::telemetry::{init_default_tracing, init_tracing};

const USAGE: &str = "usage: errorbar_chart --input <path|url> --output <svg> [--scale <f>] [--errors] [--type <chart type>] [--ylabel <text>] [--xlabel <text>] [--color <r,g,b>] [--width <px>] [--height <px>] [--config <json>] [--transparent] [--verbose]";

#[derive(Debug)]
struct CliArgs {
    input: String,
    output: PathBuf,
    scale: Option<String>,
    errors: bool,
    params: CommitChartParams,
    width: u32,
    height: u32,
    config: Option<PathBuf>,
    transparent: bool,
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = if args.verbose {
        init_tracing("chart_errorbars=debug")
    } else {
        init_default_tracing()
    };

    let series = if args.errors {
        load_series_with_error_bars(&args.input, args.scale.as_deref())
    } else {
        load_series(&args.input, args.scale.as_deref())
    }
    .map_err(|err| format!("failed to load `{}`: {err}", args.input))?;

    let chart = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            let mut chart = ChartConfig::from_json_str(&raw)
                .map_err(|err| format!("invalid chart config: {err}"))?;
            chart.data.labels = series.labels;
            match chart.data.datasets.first_mut() {
                Some(dataset) => dataset.data = series.data,
                None => {
                    return Err(format!(
                        "chart config `{}` has no dataset to fill",
                        path.display()
                    ));
                }
            }
            chart
        }
        None => commit_history_chart(series.labels, series.data, &args.params),
    };

    let config = ChartEngineConfig::new(Viewport::new(args.width, args.height), chart);
    let renderer = if args.transparent {
        SvgRenderer::new().with_background(None)
    } else {
        SvgRenderer::new()
    };
    let mut engine = ChartEngine::new(renderer, config)
        .map_err(|err| format!("failed to build chart: {err}"))?;
    engine
        .render()
        .map_err(|err| format!("failed to render chart: {err}"))?;
    engine
        .into_renderer()
        .write_to_file(&args.output)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<String>;
    let mut output = None::<PathBuf>;
    let mut scale = None::<String>;
    let mut errors = false;
    let mut params = CommitChartParams::default();
    let mut width = 800_u32;
    let mut height = 400_u32;
    let mut config = None::<PathBuf>;
    let mut transparent = false;
    let mut verbose = false;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(value("--input")?),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--scale" => scale = Some(value("--scale")?),
            "--errors" => errors = true,
            "--type" => params.chart_type = Some(value("--type")?),
            "--ylabel" => params.ylabel = value("--ylabel")?,
            "--xlabel" => params.xlabel = Some(value("--xlabel")?),
            "--color" => params.color = Some(parse_rgb(&value("--color")?)?),
            "--width" => width = parse_pixels("--width", &value("--width")?)?,
            "--height" => height = parse_pixels("--height", &value("--height")?)?,
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--transparent" => transparent = true,
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    let output = output.ok_or_else(|| format!("missing --output\n{USAGE}"))?;
    Ok(CliArgs {
        input,
        output,
        scale,
        errors,
        params,
        width,
        height,
        config,
        transparent,
        verbose,
    })
}

fn parse_rgb(text: &str) -> Result<[u8; 3], String> {
    let channels = text
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid --color `{text}`: {err}"))?;
    match channels.as_slice() {
        [red, green, blue] => Ok([*red, *green, *blue]),
        _ => Err(format!("--color expects `r,g,b`, got `{text}`")),
    }
}

fn parse_pixels(name: &str, text: &str) -> Result<u32, String> {
    match text.parse::<u32>() {
        Ok(pixels) if pixels > 0 => Ok(pixels),
        Ok(_) => Err(format!("{name} must be positive")),
        Err(err) => Err(format!("invalid {name} `{text}`: {err}")),
    }
}
