//! Screen state machine for the classification flow.

use thiserror::Error;
use tracing::{error, info};

use wsort_ml_client::{ClassifyClient, ClassifyError};
use wsort_models::Prediction;

use crate::alert::Alert;
use crate::image_source::{ImageHandle, ImageSource, PickOutcome};

#[derive(Debug, Error)]
enum AttemptError {
    #[error("Could not read image: {0}")]
    Image(#[from] std::io::Error),

    #[error(transparent)]
    Service(#[from] ClassifyError),
}

/// State behind the classification screen.
///
/// Holds the three pieces of state the screen renders from: the currently
/// selected image, whether a request is in flight, and the last top result.
/// `top_result` survives failed attempts; `image` is only ever overwritten
/// by the next pick.
pub struct ClassifierScreen {
    client: ClassifyClient,
    image: Option<ImageHandle>,
    loading: bool,
    top_result: Option<Prediction>,
}

impl ClassifierScreen {
    pub fn new(client: ClassifyClient) -> Self {
        Self {
            client,
            image: None,
            loading: false,
            top_result: None,
        }
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn top_result(&self) -> Option<&Prediction> {
        self.top_result.as_ref()
    }

    /// Let the user choose an existing photo from the library.
    pub fn pick_image(&mut self, source: &dyn ImageSource) -> Option<Alert> {
        self.apply_pick(source.pick_from_library())
    }

    /// Capture a new photo with the camera.
    pub fn take_picture(&mut self, source: &dyn ImageSource) -> Option<Alert> {
        self.apply_pick(source.capture_from_camera())
    }

    fn apply_pick(&mut self, outcome: PickOutcome) -> Option<Alert> {
        match outcome {
            PickOutcome::Selected(handle) => {
                self.image = Some(handle);
                None
            }
            PickOutcome::Cancelled => None,
            PickOutcome::PermissionDenied => Some(Alert::PermissionDenied),
        }
    }

    /// Upload the selected image and record the top prediction.
    ///
    /// Returns `None` on success. Without a selected image no request is
    /// issued. Every failure surfaces as the same generic alert and leaves
    /// `top_result` untouched; `loading` is cleared on every exit path.
    pub async fn classify(&mut self) -> Option<Alert> {
        let Some(image) = self.image.clone() else {
            return Some(Alert::NoImageSelected);
        };

        self.loading = true;
        let outcome = self.run_classify(&image).await;
        self.loading = false;

        match outcome {
            Ok(prediction) => {
                info!("Top prediction: {}", prediction);
                self.top_result = Some(prediction);
                None
            }
            Err(e) => {
                error!("Error classifying image: {}", e);
                Some(Alert::ClassificationFailed)
            }
        }
    }

    async fn run_classify(&self, image: &ImageHandle) -> Result<Prediction, AttemptError> {
        let bytes = image.read_bytes()?;
        Ok(self.client.classify(bytes).await?)
    }
}
