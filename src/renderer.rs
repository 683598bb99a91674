use crate::aliases::Color;
use crate::camera::Camera;
use crate::error::ConfigError;
use crate::integrator::Integrator;
use crate::sampler::Sampler;
use crate::scene::Scene;
use itertools::iproduct;
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    width: u32,
    height: u32,
    samples_per_pixel: usize,
    threads: usize,
}

impl RenderSettings {
    pub fn new(
        width: u32,
        height: u32,
        samples_per_pixel: usize,
        threads: usize,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroResolution { width, height });
        }
        if samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(RenderSettings {
            width,
            height,
            samples_per_pixel,
            threads,
        })
    }
    /// Height derived from `width` and the aspect ratio (width over height).
    pub fn from_aspect(
        width: u32,
        aspect: f64,
        samples_per_pixel: usize,
        threads: usize,
    ) -> Result<Self, ConfigError> {
        let height = if aspect > 0.0 && aspect.is_finite() {
            (width as f64 / aspect) as u32
        } else {
            0
        };
        Self::new(width, height, samples_per_pixel, threads)
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn samples_per_pixel(&self) -> usize {
        self.samples_per_pixel
    }
    pub fn threads(&self) -> usize {
        self.threads
    }
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Linear radiance per pixel, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Image {
            width,
            height,
            pixels: vec![Color::zeros(); width as usize * height as usize],
        }
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn pixel(&self, x: u32, y: u32) -> &Color {
        &self.pixels[self.index(x, y)]
    }
    pub fn set_pixel(&mut self, x: u32, y: u32, color: &Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = *color;
    }
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        x as usize + y as usize * self.width as usize
    }
    fn set_row(&mut self, y: u32, row: &[Color]) {
        let start = self.index(0, y);
        self.pixels[start..start + row.len()].copy_from_slice(row);
    }
    /// Gamma 2 encoding of one linear color, clamped to [0, 255].
    pub fn to_rgb8(color: &Color) -> [u8; 3] {
        let encode = |c: f64| (256.0 * c.sqrt().max(0.0).min(0.999)) as u8;
        [encode(color[0]), encode(color[1]), encode(color[2])]
    }
    /// Writes a plain-text PPM (P3).
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;
        for color in &self.pixels {
            let [r, g, b] = Image::to_rgb8(color);
            writeln!(out, "{} {} {}", r, g, b)?;
        }
        Ok(())
    }
    pub fn save_png(&self, path: &Path) -> image::ImageResult<()> {
        let mut buffer: Vec<u8> = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            buffer.extend_from_slice(&Image::to_rgb8(color));
        }
        image::save_buffer(
            path,
            buffer.as_slice(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }
}

/// Averages `samples_per_pixel` radiance estimates per pixel.
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Renderer { settings }
    }
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Estimates the radiance of one pixel. `sampler` must already be started on it.
    pub fn render_pixel(
        &self,
        x: u32,
        y: u32,
        camera: &Camera,
        integrator: &dyn Integrator,
        scene: &Scene,
        sampler: &mut dyn Sampler,
    ) -> Color {
        let (width, height) = (self.settings.width as f64, self.settings.height as f64);
        let mut sum = Color::zeros();
        for _ in 0..self.settings.samples_per_pixel {
            let jitter = sampler.sample_2d();
            let s = (x as f64 + jitter[0]) / width;
            let t = ((self.settings.height - 1 - y) as f64 + jitter[1]) / height;
            let ray = camera.get_ray(s, t, sampler);
            sum += integrator.radiance(&ray, scene, sampler);
            sampler.advance();
        }
        sum / self.settings.samples_per_pixel as f64
    }

    /// Renders the image on `threads` workers, each taking every `threads`-th row.
    /// Every worker draws from its own fork of `sampler`, restarted at each pixel,
    /// so the result does not depend on the thread count.
    pub fn render(
        &self,
        camera: &Camera,
        integrator: &dyn Integrator,
        scene: &Scene,
        sampler: &mut dyn Sampler,
    ) -> Image {
        let start_time = Instant::now();
        let RenderSettings {
            width,
            height,
            samples_per_pixel,
            threads,
        } = self.settings;
        info!(
            "rendering {}x{} with {} samples per pixel on {} threads",
            width, height, samples_per_pixel, threads
        );
        if integrator.needs_lights() && scene.lights.is_none() {
            warn!("the scene has no lights, falling back to material sampling");
        }
        let mut image = Image::new(width, height);
        let (tx, rx) = channel::<(u32, Vec<Color>)>();
        let workers: Vec<Box<dyn Sampler>> = (0..threads).map(|_| sampler.fork()).collect();
        let result = crossbeam::scope(|scope| {
            for (worker, mut sampler) in workers.into_iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let rows = (worker as u32..height).step_by(threads);
                    let mut row = Vec::with_capacity(width as usize);
                    for (y, x) in iproduct!(rows, 0..width) {
                        sampler.start_pixel(x, y);
                        row.push(self.render_pixel(
                            x,
                            y,
                            camera,
                            integrator,
                            scene,
                            sampler.as_mut(),
                        ));
                        if x + 1 == width && tx.send((y, std::mem::take(&mut row))).is_err() {
                            return;
                        }
                    }
                });
            }
            drop(tx); // the collector below stops once every worker hung up
            let mut done = 0;
            for (y, row) in rx.iter() {
                image.set_row(y, &row);
                done += 1;
                debug!("row {} done ({}/{})", y, done, height);
            }
        });
        if result.is_err() {
            warn!("a render worker panicked, the image is incomplete");
        }
        info!(
            "rendered in {:.3} secs",
            start_time.elapsed().as_secs_f64()
        );
        image
    }
}
