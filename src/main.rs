use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mandelbrot_explorer::{
    FilePresenterPort, MandelbrotConfig, MandelbrotEngine, PointerEvent, PpmFilePresenter,
    RenderStrategy,
};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Render a view of the Mandelbrot set to a PPM image")]
struct Cli {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Iterations before a point is considered inside the set
    #[arg(long, default_value_t = MandelbrotConfig::default().max_iterations)]
    max_iterations: u32,

    /// Pointer events replayed in order before rendering, e.g. left:400,300
    #[arg(long = "click", value_name = "KIND:X,Y")]
    clicks: Vec<PointerEvent>,

    /// Render on a single thread
    #[arg(long)]
    serial: bool,

    /// Output file
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = MandelbrotConfig {
        max_iterations: cli.max_iterations,
        ..MandelbrotConfig::default()
    };
    let mut engine = MandelbrotEngine::with_config(cli.width, cli.height, config)?;

    if cli.serial {
        engine.set_render_strategy(RenderStrategy::Serial);
    }

    for &event in &cli.clicks {
        engine.handle_pointer(event);
    }

    engine.render();

    if let Some(parent) = cli.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    PpmFilePresenter::new().present(engine.frame_buffer(), &cli.output)?;
    info!(path = %cli.output.display(), "image written");

    Ok(engine.status_text())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let status = run(&cli)?;

    println!("{}", status);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_output(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("mandelbrot_explorer_cli_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["mandelbrot_explorer"]).unwrap();

        assert_eq!(cli.width, 800);
        assert_eq!(cli.height, 600);
        assert_eq!(cli.max_iterations, 64);
        assert!(cli.clicks.is_empty());
        assert!(!cli.serial);
        assert_eq!(cli.output, PathBuf::from("output/mandelbrot.ppm"));
    }

    #[test]
    fn test_cli_parses_repeated_clicks() {
        let cli = Cli::try_parse_from([
            "mandelbrot_explorer",
            "--click",
            "left:10,20",
            "--click",
            "right:5,5",
        ])
        .unwrap();

        assert_eq!(cli.clicks.len(), 2);
        assert!(matches!(cli.clicks[0], PointerEvent::LeftClick(_)));
        assert!(matches!(cli.clicks[1], PointerEvent::RightClick(_)));
    }

    #[test]
    fn test_cli_rejects_malformed_click() {
        assert!(Cli::try_parse_from(["mandelbrot_explorer", "--click", "up:1,2"]).is_err());
    }

    #[test]
    fn test_run_writes_image_and_reports_status() {
        let output = temp_output("zoomed.ppm");
        let cli = Cli::try_parse_from([
            "mandelbrot_explorer",
            "--width",
            "100",
            "--height",
            "100",
            "--click",
            "left:75,25",
            "--serial",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let status = run(&cli).unwrap();

        let written = std::fs::read(&output).unwrap();
        std::fs::remove_dir_all(output.parent().unwrap()).unwrap();

        assert!(written.starts_with(b"P6\n100 100\n255\n"));
        assert!(status.contains("Center: (0.5,0.5)"));
    }

    #[test]
    fn test_run_rejects_zero_width() {
        let cli = Cli::try_parse_from(["mandelbrot_explorer", "--width", "0"]).unwrap();

        assert!(run(&cli).is_err());
    }
}
