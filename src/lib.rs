//! Client-side interaction controller for a collaborative pixel canvas.
//!
//! The controller owns the local user's selected color, gates drawing behind a
//! server-enforced cooldown, submits draws to the remote service, and smooths
//! camera zoom/pan toward targets once per frame. Everything it talks to
//! (render surface, canvas, cursor indicator, sound, network) sits behind a
//! narrow trait so hosts can plug in their own.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | The [`controller::InteractionController`] state machine |
//! | [`cooldown`] | Cooldown deadlines and shareable completion handles |
//! | [`camera`] | `Tween` smoothing and the pan/zoom camera |
//! | [`color`] | Validated `#rrggbb` colors |
//! | [`service`] | Remote service trait and its error type |
//! | [`http`] | reqwest-backed service implementation |
//! | [`sinks`] | Output collaborator traits and log-only implementations |
//! | [`config`] | Environment-driven configuration |
//! | [`command`] | Line commands for the headless driver |
//! | [`consts`] | Smoothing rates, zoom presets, defaults |

pub mod camera;
pub mod color;
pub mod command;
pub mod config;
pub mod consts;
pub mod controller;
pub mod cooldown;
pub mod http;
pub mod service;
pub mod sinks;

pub use controller::{Completion, Completions, InteractionController, Phase, SessionInit};
