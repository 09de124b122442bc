//! Momentum ("inertia") scrolling engine
//!
//! Replaces discrete wheel steps with a velocity that decays by a fixed
//! friction factor every frame. Wheel events add a capped impulse; each frame
//! tick moves the scroll offset by the current velocity, clamps it to the
//! document, decays the velocity and either re-arms a single frame callback
//! or goes idle.
//!
//! # Architecture
//!
//! ## Atomic layer
//! - `physics` - Impulse shaping and friction decay (pure functions)
//! - `bounds` - Scrollable range and position clamping (pure functions)
//! - `timing` - Closed-form and iterated glide analysis
//! - `state` - `ScrollState` and scheduler `Phase`
//!
//! ## Boundary layer
//! - `host` - Traits for the environment (scroll offset, measurements,
//!   frame requests) plus an in-memory page
//! - `frames` - Frame schedulers: a manually pumped queue and a
//!   fixed-interval timer
//!
//! ## Molecular layer
//! - `engine` - `MomentumEngine`, owning the state and wiring it all together
//!
//! # Usage
//!
//! ```ignore
//! use inertia_core::momentum::{MemoryPage, MomentumEngine, QueuedFrames, WheelEvent};
//!
//! let page = MemoryPage::new(0.0, 2000.0, 600.0);
//! let mut engine = MomentumEngine::new(Default::default(), page, QueuedFrames::new());
//! engine.start();
//!
//! let mut event = WheelEvent::new(100.0);
//! engine.handle_wheel(&mut event);
//!
//! // Deliver frames until the glide comes to rest
//! let ticks = engine.settle();
//! ```

// Atomic layer
pub mod bounds;
pub mod physics;
pub mod state;
pub mod timing;

// Boundary layer
pub mod frames;
pub mod host;

// Molecular layer
pub mod engine;

pub use engine::{MomentumEngine, WheelOutcome};
pub use frames::{IntervalFrames, QueuedFrames};
pub use host::{FrameId, FrameScheduler, MemoryPage, ScrollHost, WheelEvent};
pub use physics::Decay;
pub use state::{Phase, ScrollState};
