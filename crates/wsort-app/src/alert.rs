//! User-facing alert surface.

/// Alerts shown by the classification screen.
///
/// Every classify failure maps to `ClassificationFailed`; the user is never
/// told which kind of failure occurred. The distinct kinds live in the error
/// taxonomy and the logs only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    NoImageSelected,
    PermissionDenied,
    ClassificationFailed,
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::NoImageSelected => "No image selected",
            Alert::PermissionDenied => "Permission Denied",
            Alert::ClassificationFailed => "Error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Alert::NoImageSelected => "Please select or take an image to classify.",
            Alert::PermissionDenied => "Camera permission is required to take pictures.",
            Alert::ClassificationFailed => "Failed to classify image. Please try again later.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_image_alert_text() {
        assert_eq!(Alert::NoImageSelected.title(), "No image selected");
        assert_eq!(
            Alert::NoImageSelected.message(),
            "Please select or take an image to classify."
        );
    }
}
