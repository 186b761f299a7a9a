//! # FocusHive Core Library
//!
//! This library provides the core logic for the FocusHive Pomodoro timer.
//! It implements a CLI-first philosophy where the timer is fully usable from
//! a standalone CLI binary, with any richer shell being a thin layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Cycle Engine**: A tick-driven state machine that requires the caller
//!   to invoke `tick()` once per elapsed second while the countdown runs
//! - **Session Sync**: Bridges local timer activity to a durable session
//!   record on the remote study-session API
//! - **Session Controller**: The action surface a shell drives (start,
//!   pause, reset, finish) and the read-only snapshot it renders
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`CycleEngine`]: Core countdown/cycle state machine
//! - [`SessionSync`]: Remote session record lifecycle (open/close)
//! - [`SessionController`]: Ties the engine and sync together
//! - [`Config`]: Application configuration management

pub mod timer;
pub mod sync;
pub mod controller;
pub mod storage;
pub mod events;
pub mod error;

pub use timer::{CycleEngine, CyclePhase, PhasePlan};
pub use sync::{RemoteSession, SessionClient, SessionId, SessionRecord, SessionSync, SyncError};
pub use controller::{format_mmss, SessionController, Snapshot};
pub use storage::Config;
pub use events::Event;
pub use error::{ConfigError, CoreError, ValidationError};
