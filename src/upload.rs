//! Image upload normalization
//!
//! Turns an uploaded image file into a size-bounded JPEG data URL suitable
//! for inline storage: validate the file, decode it, resize to bounded
//! dimensions, then walk the JPEG quality down until the encoded string
//! fits the target. The quality floor is accepted whatever size results —
//! a huge photo degrades, it never fails outright.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::config::{
    BASE64_OVERHEAD, JPEG_QUALITY_FLOOR, JPEG_QUALITY_START, JPEG_QUALITY_STEP, MAX_IMAGE_HEIGHT,
    MAX_IMAGE_WIDTH, MAX_UPLOAD_BYTES, TARGET_ENCODED_KB,
};
use crate::error::{AppError, Result};

/// A raw file as handed over by the upload widget
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Transient preview of the original upload.
///
/// Stands in for the object URL a browser hands to the preview element: it
/// holds the undecoded upload bytes and must be explicitly released once
/// nothing displays it anymore. It is a separate resource from the
/// persisted encoded value.
#[derive(Debug)]
pub struct PreviewHandle {
    filename: String,
    bytes: Vec<u8>,
    released: bool,
}

impl PreviewHandle {
    fn new(upload: &ImageUpload) -> Self {
        Self {
            filename: upload.filename.clone(),
            bytes: upload.bytes.clone(),
            released: false,
        }
    }

    /// The previewed bytes, valid until release
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Release the preview resource. Whoever displayed it calls this when
    /// the dialog closes or the image is replaced.
    pub fn release(mut self) {
        self.released = true;
        tracing::debug!("Released preview for {}", self.filename);
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if !self.released {
            tracing::warn!("Preview for {} dropped without release", self.filename);
        }
    }
}

/// Result of a successful normalization
#[derive(Debug)]
pub struct NormalizedImage {
    /// JPEG data URL, within the size target unless the quality floor was hit
    pub data_url: String,
    /// Quality percent the compression search settled on
    pub quality: u8,
    /// Transient preview of the original file; caller must release it
    pub preview: PreviewHandle,
}

/// Validate, decode, resize and compress one uploaded image
pub fn normalize(upload: &ImageUpload) -> Result<NormalizedImage> {
    if upload.bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(AppError::FileTooLarge {
            size: upload.bytes.len() as u64,
        });
    }

    if !upload.mime_type.starts_with("image/") {
        return Err(AppError::InvalidFileType(upload.mime_type.clone()));
    }

    let decoded =
        image::load_from_memory(&upload.bytes).map_err(|e| AppError::LoadFailed(e.to_string()))?;

    let resized = resize_to_bounds(&decoded);
    let (data_url, quality) = compress_to_target(&resized)?;

    tracing::debug!(
        "Image compressed from {:.2}KB to ~{:.2}KB at quality {}",
        upload.bytes.len() as f64 / 1024.0,
        data_url.len() as f64 * 0.75 / 1024.0,
        quality
    );

    Ok(NormalizedImage {
        data_url,
        quality,
        preview: PreviewHandle::new(upload),
    })
}

/// Scale down so the larger dimension sits at its bound, preserving aspect
/// ratio; never scale up. Landscape images clamp width, portrait and
/// square images clamp height; the other dimension follows the ratio.
fn resize_to_bounds(img: &DynamicImage) -> DynamicImage {
    let (width, height) = (img.width(), img.height());

    let (new_width, new_height) = if width > height {
        if width <= MAX_IMAGE_WIDTH {
            return img.clone();
        }
        let scaled = (height as f64 * MAX_IMAGE_WIDTH as f64 / width as f64).round() as u32;
        (MAX_IMAGE_WIDTH, scaled.max(1))
    } else {
        if height <= MAX_IMAGE_HEIGHT {
            return img.clone();
        }
        let scaled = (width as f64 * MAX_IMAGE_HEIGHT as f64 / height as f64).round() as u32;
        (scaled.max(1), MAX_IMAGE_HEIGHT)
    };

    img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}

/// Encode at decreasing quality until the data URL fits the size target or
/// the quality floor is reached.
fn compress_to_target(img: &DynamicImage) -> Result<(String, u8)> {
    // JPEG carries no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let limit = (TARGET_ENCODED_KB * 1024) as f64 * BASE64_OVERHEAD;

    let mut quality = JPEG_QUALITY_START;
    let mut data_url = encode_jpeg_data_url(&rgb, quality)?;

    while data_url.len() as f64 > limit && quality > JPEG_QUALITY_FLOOR {
        quality -= JPEG_QUALITY_STEP;
        data_url = encode_jpeg_data_url(&rgb, quality)?;
    }

    Ok((data_url, quality))
}

fn encode_jpeg_data_url(img: &DynamicImage, quality: u8) -> Result<String> {
    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| AppError::ProcessingFailed(e.to_string()))?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)))
}

/// Supersession guard for overlapping uploads.
///
/// There is no cancellation of an in-flight decode; if a second file is
/// selected before the first finishes, the stale completion must be
/// discarded instead of clobbering the newer one. Every attempt takes a
/// ticket; only the newest ticket is current.
#[derive(Clone, Debug, Default)]
pub struct UploadSequencer {
    latest: Arc<AtomicU64>,
}

/// Ticket for one upload attempt
#[derive(Debug)]
pub struct UploadTicket {
    seq: u64,
}

impl UploadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt, superseding all earlier ones
    pub fn begin(&self) -> UploadTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        UploadTicket { seq }
    }

    /// Whether this attempt is still the newest one
    pub fn is_current(&self, ticket: &UploadTicket) -> bool {
        ticket.seq == self.latest.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    /// PNG bytes for a gradient image of the given dimensions
    fn png_upload(width: u32, height: u32) -> ImageUpload {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        ImageUpload {
            filename: "test.png".into(),
            mime_type: "image/png".into(),
            bytes,
        }
    }

    fn decode_data_url(data_url: &str) -> DynamicImage {
        let payload = data_url
            .strip_prefix("data:image/jpeg;base64,")
            .expect("data URL prefix");
        let bytes = BASE64.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn rejects_files_over_the_size_limit() {
        let upload = ImageUpload {
            filename: "huge.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize],
        };

        let result = normalize(&upload);
        assert!(matches!(result, Err(AppError::FileTooLarge { .. })));
    }

    #[test]
    fn rejects_non_image_mime_types() {
        let upload = ImageUpload {
            filename: "notes.pdf".into(),
            mime_type: "application/pdf".into(),
            bytes: vec![1, 2, 3],
        };

        let result = normalize(&upload);
        assert!(matches!(result, Err(AppError::InvalidFileType(_))));
    }

    #[test]
    fn corrupt_image_fails_to_load() {
        let upload = ImageUpload {
            filename: "broken.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![0xde, 0xad, 0xbe, 0xef],
        };

        let result = normalize(&upload);
        assert!(matches!(result, Err(AppError::LoadFailed(_))));
    }

    #[test]
    fn oversized_image_is_scaled_to_bounds() {
        let normalized = normalize(&png_upload(1600, 1200)).unwrap();

        let decoded = decode_data_url(&normalized.data_url);
        assert_eq!(decoded.width(), 800);
        assert_eq!(decoded.height(), 600);

        normalized.preview.release();
    }

    #[test]
    fn landscape_clamps_width_and_keeps_ratio() {
        let normalized = normalize(&png_upload(1000, 900)).unwrap();

        let decoded = decode_data_url(&normalized.data_url);
        assert_eq!(decoded.width(), 800);
        assert_eq!(decoded.height(), 720);

        normalized.preview.release();
    }

    #[test]
    fn small_image_is_never_scaled_up() {
        let normalized = normalize(&png_upload(100, 80)).unwrap();

        let decoded = decode_data_url(&normalized.data_url);
        assert_eq!(decoded.width(), 100);
        assert_eq!(decoded.height(), 80);

        normalized.preview.release();
    }

    #[test]
    fn encoded_size_is_bounded_unless_quality_floor_reached() {
        let normalized = normalize(&png_upload(800, 600)).unwrap();

        let limit = (TARGET_ENCODED_KB * 1024) as f64 * BASE64_OVERHEAD;
        assert!(
            normalized.data_url.len() as f64 <= limit
                || normalized.quality == JPEG_QUALITY_FLOOR,
            "data URL {} bytes at quality {}",
            normalized.data_url.len(),
            normalized.quality
        );

        normalized.preview.release();
    }

    #[test]
    fn preview_exposes_the_original_bytes() {
        let upload = png_upload(50, 50);
        let normalized = normalize(&upload).unwrap();

        assert_eq!(normalized.preview.bytes(), upload.bytes.as_slice());
        normalized.preview.release();
    }

    #[test]
    fn newer_upload_supersedes_older_one() {
        let sequencer = UploadSequencer::new();

        let first = sequencer.begin();
        let second = sequencer.begin();

        assert!(!sequencer.is_current(&first));
        assert!(sequencer.is_current(&second));
    }
}
