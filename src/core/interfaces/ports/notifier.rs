use crate::core::models::Notification;

pub trait Notifier: Send + Sync {
    fn show(&self, notification: &Notification);
}
