pub mod clock;
pub mod notifier;
pub mod status_api;

pub use clock::Clock;
pub use notifier::Notifier;
pub use status_api::StatusApi;
