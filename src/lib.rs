// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Avatar navigation, input arbitration and view transitions for 3D
//! showcase graphs.
//!
//! A user pilots an avatar across a graph of showcase nodes with keyboard,
//! gamepad or touch input. Confirming on a node zooms the camera onto it
//! and transitions into a detail overlay; the transition waits for the
//! overlay to report that it has mounted.
//!
//! # Key entry points
//!
//! - [`showcase::Showcase`] - application root; owns everything below and
//!   runs the per-frame tick
//! - [`graph::NavigationGraph`] - node dataset and shortest-path queries
//! - [`input::InputHub`] - keyboard/touch/gamepad merged into one action
//!   stream plus analog axes
//! - [`avatar::AvatarController`] - directional and multi-hop traversal
//! - [`camera::CameraRig`] - smooth follow and node focus
//! - [`modal`] - detail overlay menu state machine
//! - [`transition::TransitionOrchestrator`] - the shared transition session
//! - [`loading::LoadingCoordinator`] - startup progress
//! - [`options::Options`] - runtime configuration (TOML)
//!
//! # Architecture
//!
//! Everything runs on one thread, driven by
//! [`Showcase::frame`](showcase::Showcase::frame). Delays are callbacks on
//! a virtual-clock [`Scheduler`](util::scheduler::Scheduler) advanced at
//! the top of each frame; nothing blocks.

pub mod avatar;
pub mod camera;
pub mod error;
pub mod graph;
pub mod input;
pub mod loading;
pub mod modal;
pub mod options;
pub mod showcase;
pub mod transition;
pub mod util;
