pub mod config;
pub mod helpers;
pub mod http;
pub mod logging;
pub mod providers;
pub mod record;
pub mod traits;

pub use config::*;
pub use helpers::*;
pub use http::*;
pub use logging::*;
pub use providers::*;
pub use record::*;
pub use traits::*;
