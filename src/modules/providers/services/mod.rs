pub mod calendar;
pub mod provider_trait;
pub mod reconciler;
pub mod video;

pub use calendar::ReqwestCalendarClient;
pub use provider_trait::{CalendarClient, VideoClient};
pub use reconciler::{ArtifactReconciler, PROVIDER_CONCURRENCY};
pub use video::ReqwestVideoClient;
