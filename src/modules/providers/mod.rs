pub mod services;

pub use services::{
    ArtifactReconciler, CalendarClient, ReqwestCalendarClient, ReqwestVideoClient, VideoClient,
    PROVIDER_CONCURRENCY,
};
