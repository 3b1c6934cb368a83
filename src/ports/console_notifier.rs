use crate::core::interfaces::ports::Notifier;
use crate::core::models::Notification;
use crate::global_constants::LOG_TAG_NOTIFY;

pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn initialize() -> Self {
        log::debug!("{} initializing console notifier", LOG_TAG_NOTIFY);
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn show(&self, notification: &Notification) {
        log::info!(
            "{} showing for {:?}: {}",
            LOG_TAG_NOTIFY,
            notification.duration.as_duration(),
            notification.text
        );
        println!("{}", notification.text);
    }
}
