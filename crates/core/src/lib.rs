use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{ColorType, ImageEncoder, RgbaImage};

/// Failures of the resizing operation.
///
/// The operation is fail-fast: the first error aborts the remaining sizes.
/// Outputs written before the failure are left on disk.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The source image is missing or cannot be decoded.
    #[error("source image unavailable: {0}")]
    SourceUnavailable(String),

    /// An output file could not be created or written.
    #[error("destination unwritable: {0}")]
    DestinationUnwritable(String),

    /// A resize or encode step failed.
    #[error("processing failed: {0}")]
    ProcessingFailure(String),
}

/// One written output file.
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
    pub bytes: u64,
}

/// File name for a generated icon of the given pixel size.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

/// Resizes one decoded source image into square PNG icons.
///
/// The source is decoded once on [`IconResizer::open`], held in memory in
/// RGBA form for the lifetime of the value, and released when it is dropped.
pub struct IconResizer {
    source: RgbaImage,
}

impl IconResizer {
    /// Decode the source image and normalize it to RGBA.
    ///
    /// The format is sniffed from the file content rather than the
    /// extension. Sources without an alpha channel gain a fully-opaque one;
    /// sources that already carry alpha pass through unchanged.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let unavailable =
            |e: &dyn std::fmt::Display| IconError::SourceUnavailable(format!("{}: {}", path.display(), e));

        let decoded = ImageReader::open(path)
            .map_err(|e| unavailable(&e))?
            .with_guessed_format()
            .map_err(|e| unavailable(&e))?
            .decode()
            .map_err(|e| unavailable(&e))?;

        Ok(Self {
            source: decoded.to_rgba8(),
        })
    }

    /// Width and height of the decoded source in pixels.
    pub fn source_size(&self) -> (u32, u32) {
        self.source.dimensions()
    }

    /// Resample the source to exactly `size` x `size` pixels.
    ///
    /// Non-square sources are stretched to fit, not cropped or padded.
    pub fn render(&self, size: u32) -> RgbaImage {
        image::imageops::resize(&self.source, size, size, FilterType::Lanczos3)
    }

    /// Render one size and write it as `icon-{size}.png` under `out_dir`,
    /// overwriting any existing file of the same name.
    pub fn write_icon(&self, out_dir: &Path, size: u32) -> Result<GeneratedIcon, IconError> {
        if size == 0 {
            return Err(IconError::ProcessingFailure(
                "target size must be positive".to_string(),
            ));
        }

        let rendered = self.render(size);
        let path = out_dir.join(icon_file_name(size));

        // Encode in memory first so encoder failures and filesystem
        // failures stay distinguishable.
        let mut encoded = Vec::new();
        PngEncoder::new_with_quality(&mut encoded, CompressionType::Best, PngFilter::Adaptive)
            .write_image(rendered.as_raw(), size, size, ColorType::Rgba8)
            .map_err(|e| IconError::ProcessingFailure(format!("{}: {}", path.display(), e)))?;

        fs::write(&path, &encoded)
            .map_err(|e| IconError::DestinationUnwritable(format!("{}: {}", path.display(), e)))?;

        Ok(GeneratedIcon {
            size,
            path,
            bytes: encoded.len() as u64,
        })
    }

    /// Produce every size in `sizes`, in order.
    ///
    /// An empty list is a valid no-op. The first failure aborts the
    /// remaining sizes; already-written files are not rolled back.
    pub fn write_all(&self, out_dir: &Path, sizes: &[u32]) -> Result<Vec<GeneratedIcon>, IconError> {
        let mut produced = Vec::with_capacity(sizes.len());
        for &size in sizes {
            produced.push(self.write_icon(out_dir, size)?);
        }
        Ok(produced)
    }
}
