//! End-to-end export scenarios
//!
//! Load a file through the session, export it, and inspect what lands in the
//! download directory.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use resizer_core::pipeline;
use resizer_core::{
    DirectorySink, DownloadSink, ImageLoader, LoadOutcome, PendingFile, ResizeError, Session,
    SessionState, TargetSize,
};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    encode(&DynamicImage::ImageRgba8(img), ImageFormat::Png)
}

/// Left half red, right half blue
fn split_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });
    encode(&DynamicImage::ImageRgb8(img), ImageFormat::Jpeg)
}

/// Splice an EXIF APP1 segment carrying only an Orientation tag in after SOI
fn with_orientation(jpeg: Vec<u8>, orientation: u8) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    #[rustfmt::skip]
    let app1 = [
        0xFF, 0xE1, 0x00, 0x22,
        b'E', b'x', b'i', b'f', 0x00, 0x00,
        // Big-endian TIFF header, IFD0 at offset 8
        b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08,
        // One entry: 0x0112 Orientation, SHORT, count 1
        0x00, 0x01,
        0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, orientation, 0x00, 0x00,
        // No next IFD
        0x00, 0x00, 0x00, 0x00,
    ];

    let mut out = Vec::with_capacity(jpeg.len() + app1.len());
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

async fn load(session: &mut Session, name: &str, bytes: Vec<u8>) -> Result<LoadOutcome, ResizeError> {
    let ticket = session.begin_load();
    let result = ImageLoader::default()
        .load_cancellable(PendingFile::new(name, bytes), ticket.token())
        .await;
    session.complete_load(&ticket, result)
}

/// Run the Download action: no-op when nothing is loaded
async fn download(session: &Session, sink: &DirectorySink) -> Option<PathBuf> {
    let request = session.export_request()?;
    let artifact = pipeline::export(request).await.unwrap();
    Some(sink.deliver(&artifact).unwrap())
}

fn open(path: &Path) -> DynamicImage {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    image::load_from_memory(&bytes).unwrap()
}

fn is_reddish(p: Rgba<u8>) -> bool {
    p[0] > 200 && p[2] < 60 && p[3] == 255
}

fn is_bluish(p: Rgba<u8>) -> bool {
    p[2] > 200 && p[0] < 60 && p[3] == 255
}

// ============================================================================
// Scenarios
// ============================================================================

/// 200×100 JPEG at 64×64 is stretched to fill, not letterboxed
#[tokio::test]
async fn test_wide_jpeg_to_server_icon() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let mut session = Session::default();

    load(&mut session, "wide.jpg", split_jpeg(200, 100)).await.unwrap();
    assert_eq!(session.source().unwrap().dimensions(), (200, 100));
    assert_eq!(session.source().unwrap().mime(), "image/jpeg");

    session.set_target_size(TargetSize::Server);
    let path = download(&session, &sink).await.unwrap();

    assert_eq!(path.file_name().unwrap(), "resized_64x64.png");
    let out = open(&path);
    assert_eq!(out.dimensions(), (64, 64));

    // Both halves reach the top and bottom edges
    for y in [0, 32, 63] {
        assert!(is_reddish(out.get_pixel(4, y)), "left edge at y={y}");
        assert!(is_bluish(out.get_pixel(59, y)), "right edge at y={y}");
    }
}

/// Orientation 6 (rotate 90° clockwise): a 200×100 file is a 100×200 image
/// with the file's left half on top
#[tokio::test]
async fn test_exif_rotated_cw_jpeg() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let mut session = Session::default();

    let bytes = with_orientation(split_jpeg(200, 100), 6);
    load(&mut session, "phone.jpg", bytes).await.unwrap();
    assert_eq!(session.source().unwrap().dimensions(), (100, 200));

    let out = open(&download(&session, &sink).await.unwrap());
    assert_eq!(out.dimensions(), (64, 64));
    for x in [0, 32, 63] {
        assert!(is_reddish(out.get_pixel(x, 4)), "top edge at x={x}");
        assert!(is_bluish(out.get_pixel(x, 59)), "bottom edge at x={x}");
    }
}

/// Orientation 8 (rotate 90° counter-clockwise): the file's left half ends
/// up at the bottom
#[tokio::test]
async fn test_exif_rotated_ccw_jpeg() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let mut session = Session::default();

    let bytes = with_orientation(split_jpeg(200, 100), 8);
    load(&mut session, "phone.jpg", bytes).await.unwrap();
    assert_eq!(session.source().unwrap().dimensions(), (100, 200));

    session.set_target_size(TargetSize::Plugin);
    let out = open(&download(&session, &sink).await.unwrap());
    assert_eq!(out.dimensions(), (96, 96));
    assert!(is_bluish(out.get_pixel(48, 4)));
    assert!(is_reddish(out.get_pixel(48, 91)));
}

/// 512×512 PNG at 96×96
#[tokio::test]
async fn test_square_png_to_plugin_icon() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let mut session = Session::default();

    load(&mut session, "square.png", solid_png(512, 512, [0, 128, 0, 255]))
        .await
        .unwrap();
    session.set_target_size(TargetSize::Plugin);

    let path = download(&session, &sink).await.unwrap();
    assert_eq!(path.file_name().unwrap(), "resized_96x96.png");

    let out = open(&path);
    assert_eq!(out.dimensions(), (96, 96));
    assert_eq!(out.get_pixel(48, 48), Rgba([0, 128, 0, 255]));
}

/// Download with nothing loaded does nothing
#[tokio::test]
async fn test_download_without_image_is_noop() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let session = Session::default();

    assert!(download(&session, &sink).await.is_none());
    assert_eq!(session.state(), SessionState::NoImage);
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

/// A second load replaces the first completely
#[tokio::test]
async fn test_second_load_replaces_first() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let mut session = Session::default();

    load(&mut session, "red.png", solid_png(50, 50, [255, 0, 0, 255]))
        .await
        .unwrap();
    load(&mut session, "green.png", solid_png(30, 80, [0, 255, 0, 255]))
        .await
        .unwrap();

    assert_eq!(session.source().unwrap().name(), "green.png");

    let out = open(&download(&session, &sink).await.unwrap());
    for (_, _, pixel) in out.pixels() {
        assert_eq!(pixel, Rgba([0, 255, 0, 255]));
    }
}

/// Changing the size after loading only changes the output dimensions
#[tokio::test]
async fn test_size_change_keeps_source() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let mut session = Session::default();

    load(&mut session, "blue.png", solid_png(120, 40, [0, 0, 255, 255]))
        .await
        .unwrap();

    let small = open(&download(&session, &sink).await.unwrap());
    session.set_target_size(TargetSize::Plugin);
    let large_path = download(&session, &sink).await.unwrap();
    let large = open(&large_path);

    assert_eq!(small.dimensions(), (64, 64));
    assert_eq!(large.dimensions(), (96, 96));
    assert_eq!(large_path.file_name().unwrap(), "resized_96x96.png");
    assert_eq!(small.get_pixel(10, 10), large.get_pixel(10, 10));
    assert_eq!(session.source().unwrap().name(), "blue.png");
}

/// Repeated exports at the same size never overwrite each other
#[tokio::test]
async fn test_repeated_download_gets_numbered_name() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let mut session = Session::default();

    load(&mut session, "a.png", solid_png(10, 10, [1, 2, 3, 255]))
        .await
        .unwrap();

    let first = download(&session, &sink).await.unwrap();
    let second = download(&session, &sink).await.unwrap();

    assert_eq!(first.file_name().unwrap(), "resized_64x64.png");
    assert_eq!(second.file_name().unwrap(), "resized_64x64 (1).png");
}

// ============================================================================
// Failure handling
// ============================================================================

/// A corrupt file is reported and leaves the session untouched
#[tokio::test]
async fn test_corrupt_file_reports_error() {
    let mut session = Session::default();

    let result = load(&mut session, "broken.png", b"\x89PNG\r\n\x1a\ngarbage".to_vec()).await;
    assert!(result.is_err());
    assert_eq!(session.state(), SessionState::NoImage);
    assert!(!session.is_loading());

    load(&mut session, "good.png", solid_png(8, 8, [9, 9, 9, 255]))
        .await
        .unwrap();

    let result = load(&mut session, "notes.txt", b"just text".to_vec()).await;
    assert!(matches!(result, Err(ResizeError::UnsupportedFormat(_))));
    assert_eq!(session.source().unwrap().name(), "good.png");
}

/// An older load finishing after a newer one started is discarded
#[tokio::test]
async fn test_superseded_load_loses() {
    let mut session = Session::default();
    let loader = ImageLoader::default();

    let first = session.begin_load();
    let second = session.begin_load();

    let second_result = loader
        .load_cancellable(
            PendingFile::new("second.png", solid_png(5, 5, [0, 0, 0, 255])),
            second.token(),
        )
        .await;
    assert_eq!(
        session.complete_load(&second, second_result).unwrap(),
        LoadOutcome::Installed
    );

    let first_result = loader
        .load_cancellable(
            PendingFile::new("first.png", solid_png(5, 5, [255, 255, 255, 255])),
            first.token(),
        )
        .await;
    assert!(matches!(first_result, Err(ResizeError::Cancelled)));
    assert_eq!(
        session.complete_load(&first, first_result).unwrap(),
        LoadOutcome::Superseded
    );
    assert_eq!(session.source().unwrap().name(), "second.png");
}
