mod reminder_service;

pub use reminder_service::send_overdue_reminders;
