pub mod configuration;
pub mod model;
pub mod notifier;
pub mod telemetry;
pub mod util;

pub use configuration::Settings;
pub use model::global_error::NotifierError;
pub use notifier::{run, Outcome};
