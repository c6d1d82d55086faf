//! Project-detail overlay: its menu state machine and reveal sequencing.

pub mod fsm;
pub mod overlay;

pub use fsm::{transition, ModalEffect, ModalMode, ModalNavState, ModalNavigator};
pub use overlay::{DetailOverlay, RevealStage};
