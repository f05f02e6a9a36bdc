use crate::icon_layout::IconLayout;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ColorType, ImageEncoder, ImageError, ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Icon sizes a PWA manifest expects, in generation order.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source image has no pixels: {0}")]
    EmptySource(PathBuf),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IconError {
    /// Anything that went wrong after the source was located.
    pub fn is_processing_failure(&self) -> bool {
        !matches!(self, IconError::SourceNotFound(_))
    }
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub source_width: u32,
    pub source_height: u32,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

pub struct IconGenerator {
    output_dir: PathBuf,
}

impl IconGenerator {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes one `icon-{s}x{s}.png` per entry of [`ICON_SIZES`].
    ///
    /// Stops at the first failure. Icons written before it stay on disk.
    pub fn generate(&self, source: &Path) -> Result<GenerationReport, IconError> {
        // Everything about the source is checked before touching the output directory
        if !source.is_file() {
            println!("❌ Error: could not find image: {}", source.display());
            return Err(IconError::SourceNotFound(source.to_path_buf()));
        }
        let bytes = fs::read(source).map_err(|e| {
            println!("❌ Error: could not read image: {} ({})", source.display(), e);
            IconError::SourceNotFound(source.to_path_buf())
        })?;

        println!("📷 Loading image: {}", source.display());
        let source_img = decode_source(source, &bytes)?;
        let (source_width, source_height) = source_img.dimensions();
        if source_width == 0 || source_height == 0 {
            return Err(IconError::EmptySource(source.to_path_buf()));
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| IconError::Io {
            path: self.output_dir.clone(),
            source: e,
        })?;

        println!("✅ Image loaded: {}x{} px", source_width, source_height);
        println!("📁 Saving icons to: {}\n", self.output_dir.display());

        let mut files = Vec::with_capacity(ICON_SIZES.len());
        for &size in ICON_SIZES.iter() {
            let icon = render_icon(&source_img, size);
            let file_name = icon_file_name(size);
            let output_path = self.output_dir.join(&file_name);

            let bytes = encode_png(&icon)?;
            fs::write(&output_path, &bytes).map_err(|e| IconError::Io {
                path: output_path.clone(),
                source: e,
            })?;
            log::debug!("Wrote {} ({} bytes)", output_path.display(), bytes.len());

            println!("✅ Generated: {}", file_name);
            files.push(output_path);
        }

        println!("\n🎉 All {} icons generated!", files.len());

        Ok(GenerationReport {
            source_width,
            source_height,
            output_dir: self.output_dir.clone(),
            files,
        })
    }
}

/// Decodes by file extension when it names a known format, by content otherwise.
fn decode_source(source: &Path, bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    let decoded = match ImageFormat::from_path(source) {
        Ok(format) => image::load_from_memory_with_format(bytes, format)?,
        Err(_) => image::load_from_memory(bytes)?,
    };
    Ok(decoded.to_rgba8())
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Scales `source` to fit a `size` x `size` white canvas and centers it there.
pub fn render_icon(source: &RgbaImage, size: u32) -> RgbaImage {
    let layout = IconLayout::fit(source.width(), source.height(), size);
    if layout.is_padded() {
        log::debug!("Padding {}px icon: {:?}", size, layout);
    }

    let mut canvas = RgbaImage::from_pixel(size, size, BACKGROUND);
    let resized = imageops::resize(source, layout.width, layout.height, FilterType::Lanczos3);

    // Alpha-blends, so transparent regions show the white background
    imageops::overlay(&mut canvas, &resized, layout.x as i64, layout.y as i64);

    canvas
}

pub fn encode_png(icon: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(icon.as_raw(), icon.width(), icon.height(), ColorType::Rgba8)?;
    Ok(buf)
}
