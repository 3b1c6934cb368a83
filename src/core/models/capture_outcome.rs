use image::DynamicImage;

#[derive(Clone)]
pub enum CaptureOutcome {
    Captured(DynamicImage),
    NotCaptured,
}

impl std::fmt::Debug for CaptureOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureOutcome::Captured(image) => {
                write!(f, "Captured({}x{})", image.width(), image.height())
            }
            CaptureOutcome::NotCaptured => write!(f, "NotCaptured"),
        }
    }
}
