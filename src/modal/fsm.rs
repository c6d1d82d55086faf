//! Menu navigation inside the project-detail overlay.
//!
//! The machine is a plain state value plus [`transition`], a pure function
//! from `(state, action)` to `(state, effect)`. [`ModalNavigator`] wraps it
//! with the link/image counts of the open project and the host callbacks.

use std::fmt;

use crate::input::InputAction;

/// Which sub-view of the overlay has the focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModalMode {
    /// Overview; `back` closes the overlay.
    #[default]
    Default,
    /// Link dropdown open.
    Dropdown,
    /// Image carousel.
    Showcase,
}

/// FSM state. Indices survive mode changes for the life of the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalNavState {
    /// Focused sub-view.
    pub mode: ModalMode,
    /// Selected dropdown link.
    pub dropdown_index: usize,
    /// Image shown in the carousel.
    pub image_index: usize,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffect {
    /// Nothing beyond the state change.
    None,
    /// The overlay should close.
    Close,
    /// Open the dropdown link at this index.
    OpenLink(usize),
}

fn step(index: usize, count: usize, forward: bool) -> usize {
    if count == 0 {
        return 0;
    }
    if forward {
        (index + 1) % count
    } else {
        (index + count - 1) % count
    }
}

/// Apply `action` to `state`.
///
/// `links` and `images` are the counts the indices wrap over; a zero count
/// pins the matching index at 0. Actions with no entry for the current mode
/// leave the state unchanged.
#[must_use]
pub fn transition(
    state: ModalNavState,
    action: InputAction,
    links: usize,
    images: usize,
) -> (ModalNavState, ModalEffect) {
    use InputAction as A;
    use ModalMode as M;

    let mut next = state;
    let effect = match (state.mode, action) {
        (M::Default, A::MenuToggle) => {
            next.mode = M::Dropdown;
            ModalEffect::None
        }
        (M::Default, A::Back) => ModalEffect::Close,
        (M::Default, A::Confirm) if images > 0 => {
            next.mode = M::Showcase;
            ModalEffect::None
        }

        (M::Dropdown, A::MenuToggle | A::Back) => {
            next.mode = M::Default;
            ModalEffect::None
        }
        (M::Dropdown, A::Confirm) if links > 0 => ModalEffect::OpenLink(state.dropdown_index),
        (M::Dropdown, A::NavUp) => {
            next.dropdown_index = step(state.dropdown_index, links, false);
            ModalEffect::None
        }
        (M::Dropdown, A::NavDown) => {
            next.dropdown_index = step(state.dropdown_index, links, true);
            ModalEffect::None
        }

        (M::Showcase, A::Back) => {
            next.mode = M::Default;
            ModalEffect::None
        }
        (M::Showcase, A::NavLeft) => {
            next.image_index = step(state.image_index, images, false);
            ModalEffect::None
        }
        (M::Showcase, A::NavRight) => {
            next.image_index = step(state.image_index, images, true);
            ModalEffect::None
        }

        _ => ModalEffect::None,
    };
    (next, effect)
}

/// FSM instance for one open overlay.
pub struct ModalNavigator {
    state: ModalNavState,
    links: usize,
    images: usize,
    on_close: Option<Box<dyn FnMut()>>,
    on_open_link: Option<Box<dyn FnMut(usize)>>,
}

impl ModalNavigator {
    /// Navigator over `links` dropdown entries and `images` carousel images.
    #[must_use]
    pub fn new(links: usize, images: usize) -> Self {
        Self {
            state: ModalNavState::default(),
            links,
            images,
            on_close: None,
            on_open_link: None,
        }
    }

    /// Callback invoked when `back` is pressed in the default view.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Callback invoked with the selected index when a link is confirmed.
    #[must_use]
    pub fn on_open_link(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_open_link = Some(Box::new(callback));
        self
    }

    /// Feed one action through the machine and run the resulting callback.
    pub fn dispatch(&mut self, action: InputAction) -> ModalEffect {
        let (next, effect) = transition(self.state, action, self.links, self.images);
        if next.mode != self.state.mode {
            log::debug!("modal {:?} -> {:?}", self.state.mode, next.mode);
        }
        self.state = next;
        match effect {
            ModalEffect::Close => {
                if let Some(cb) = self.on_close.as_mut() {
                    cb();
                }
            }
            ModalEffect::OpenLink(index) => {
                if let Some(cb) = self.on_open_link.as_mut() {
                    cb(index);
                }
            }
            ModalEffect::None => {}
        }
        effect
    }

    /// Full state snapshot.
    #[must_use]
    pub fn state(&self) -> ModalNavState {
        self.state
    }

    /// Focused sub-view.
    #[must_use]
    pub fn mode(&self) -> ModalMode {
        self.state.mode
    }

    /// Selected dropdown link.
    #[must_use]
    pub fn dropdown_index(&self) -> usize {
        self.state.dropdown_index
    }

    /// Image shown in the carousel.
    #[must_use]
    pub fn image_index(&self) -> usize {
        self.state.image_index
    }
}

impl fmt::Debug for ModalNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalNavigator")
            .field("state", &self.state)
            .field("links", &self.links)
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}
