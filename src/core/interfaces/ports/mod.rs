mod image_source;
mod notifier;

pub use image_source::ImageSource;
pub use notifier::Notifier;
