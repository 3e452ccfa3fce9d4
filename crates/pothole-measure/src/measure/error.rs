use std::path::PathBuf;

/// Errors that make a single image unusable.
#[derive(thiserror::Error, Debug)]
pub enum MeasureError {
    #[error("couldn't load image at {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("not able to find enough regions in this image (found {found}, need 2)")]
    InsufficientRegions { found: usize },
    #[error("reference region has a degenerate bounding box ({width}x{height})")]
    DegenerateReference { width: u32, height: u32 },
    #[error("couldn't save annotated image to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
