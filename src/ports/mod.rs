mod console_notifier;
mod file_image_source;

pub use console_notifier::ConsoleNotifier;
pub use file_image_source::FileImageSource;
