pub mod dispatcher;
pub mod sender;

pub use dispatcher::NotificationDispatcher;
pub use sender::{ReqwestWebhookSender, WebhookSender};
