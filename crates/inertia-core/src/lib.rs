pub mod config;
pub mod error;
pub mod momentum;

pub use config::{AppConfig, ScrollConfig, UiConfig};
pub use error::{Error, Result};
pub use momentum::{
    FrameId, FrameScheduler, MomentumEngine, Phase, ScrollHost, ScrollState, WheelEvent,
    WheelOutcome,
};
