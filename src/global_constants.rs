pub const APPLICATION_NAME: &str = "Face Recognition Client";
pub const SETTINGS_DIRECTORY_NAME: &str = "face-recog-client";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_RECOGNIZE: &str = "[RECOGNIZE]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_NOTIFY: &str = "[NOTIFY]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const DEFAULT_RECOGNITION_BASE_URL: &str = "https://your.face.recognition.api.url/";
pub const RECOGNIZE_ENDPOINT_PATH: &str = "recognize";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub const IMAGE_FORM_FIELD_NAME: &str = "image";
pub const DEFAULT_IMAGE_FILE_NAME: &str = "image.jpg";
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

pub const USER_MESSAGE_RECOGNIZED_PREFIX: &str = "Recognized persons: ";
pub const USER_MESSAGE_NO_PERSONS: &str = "No persons recognized";
pub const USER_MESSAGE_RECOGNITION_FAILED: &str = "Face recognition failed";
pub const USER_MESSAGE_NO_IMAGE: &str = "No image captured";

pub const NOTIFICATION_SHORT_MILLIS: u64 = 2000;
pub const NOTIFICATION_LONG_MILLIS: u64 = 3500;
