mod scenes;

use crate::scenes::ScenesType;
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use misray::integrator::{AmbientOcclusion, Integrator, NormalIntegrator, PathTracer, Strategy};
use misray::renderer::{RenderSettings, Renderer};
use misray::sampler::RandomSampler;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum IntegratorType {
    /// Absolute shading normals.
    Normal,
    /// Ambient occlusion.
    Ao,
    /// Path tracing, sampling the materials.
    Material,
    /// Path tracing, sampling the lights.
    Light,
    /// Path tracing, multiple importance sampling of lights and materials.
    Mis,
    /// Path tracing, resampled importance sampling of the materials.
    Ris,
}

/// Render one of the built-in scenes to a PPM or PNG image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// samples per pixel
    #[arg(short = 's', long, default_value_t = 64)]
    samples: usize,
    /// maximum number of bounces
    #[arg(short = 'd', long, default_value_t = 10)]
    max_depth: u32,
    /// depth from which Russian roulette may end paths
    #[arg(long)]
    roulette_start: Option<u32>,
    #[arg(long, value_enum, default_value_t = IntegratorType::Mis)]
    strategy: IntegratorType,
    /// candidates per RIS vertex
    #[arg(long, default_value_t = 8)]
    pool_size: usize,
    /// picks per RIS vertex
    #[arg(long, default_value_t = 1)]
    resamples: usize,
    /// image width in pixels
    #[arg(short = 'w', long, default_value_t = 500)]
    width: u32,
    /// width over height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f64,
    /// use specified number of threads for rendering
    #[arg(short = 't', long, default_value_t = 4)]
    threads: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = ScenesType::SphereBox)]
    scene: ScenesType,
    /// output image, .ppm or .png
    #[arg(short = 'o', long, default_value = "image.ppm")]
    output: PathBuf,
}

fn make_integrator(cli: &Cli) -> Result<Box<dyn Integrator>> {
    let strategy = match cli.strategy {
        IntegratorType::Normal => return Ok(Box::new(NormalIntegrator)),
        IntegratorType::Ao => return Ok(Box::new(AmbientOcclusion::default())),
        IntegratorType::Material => Strategy::Material,
        IntegratorType::Light => Strategy::Light,
        IntegratorType::Mis => Strategy::Mis,
        IntegratorType::Ris => Strategy::Ris {
            pool_size: cli.pool_size,
            resample_count: cli.resamples,
        },
    };
    let tracer = PathTracer::new(strategy, cli.max_depth)?;
    Ok(match cli.roulette_start {
        Some(start) => Box::new(tracer.with_roulette(start)),
        None => Box::new(tracer),
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();
    let extension = cli
        .output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if !matches!(extension.as_deref(), Some("ppm") | Some("png")) {
        bail!("unsupported output format: {}", cli.output.display());
    }
    let settings = RenderSettings::from_aspect(cli.width, cli.aspect, cli.samples, cli.threads)?;
    let integrator = make_integrator(&cli)?;
    let (scene, camera) = scenes::get(cli.scene, settings.aspect());
    info!("{:?} scene constructed", cli.scene);

    let mut sampler = RandomSampler::new(cli.samples, cli.seed);
    let image = Renderer::new(settings).render(&camera, integrator.as_ref(), &scene, &mut sampler);

    if extension.as_deref() == Some("png") {
        image
            .save_png(&cli.output)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("failed to create {}", cli.output.display()))?;
        image
            .write_ppm(&mut BufWriter::new(file))
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
    }
    info!("saved {}", cli.output.display());
    Ok(())
}
