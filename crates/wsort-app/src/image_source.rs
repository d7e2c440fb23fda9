//! Image source capability.
//!
//! The screen never talks to a picker or camera directly; it goes through
//! [`ImageSource`] so the platform integration stays swappable.

use std::path::{Path, PathBuf};

/// Reference to a locally available image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    uri: PathBuf,
}

impl ImageHandle {
    pub fn new(uri: impl Into<PathBuf>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &Path {
        &self.uri
    }

    /// Load the raw image bytes for upload.
    pub fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.uri)
    }
}

/// Outcome of asking the platform for an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user chose or captured an image
    Selected(ImageHandle),
    /// The user backed out; no alert is shown for this
    Cancelled,
    /// The platform refused camera access
    PermissionDenied,
}

/// Platform picker/camera capability.
pub trait ImageSource {
    /// Let the user choose an existing photo from the library.
    fn pick_from_library(&self) -> PickOutcome;

    /// Capture a new photo with the camera.
    fn capture_from_camera(&self) -> PickOutcome;
}

/// Image source backed by a path on the local filesystem.
///
/// A missing path reads as a cancelled pick rather than an error, matching
/// how a real picker reports "nothing chosen".
pub struct FsImageSource {
    path: PathBuf,
}

impl FsImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FsImageSource {
    fn pick_from_library(&self) -> PickOutcome {
        if self.path.exists() {
            PickOutcome::Selected(ImageHandle::new(&self.path))
        } else {
            PickOutcome::Cancelled
        }
    }

    fn capture_from_camera(&self) -> PickOutcome {
        // There is no camera on this platform; the configured path is the shot.
        self.pick_from_library()
    }
}
