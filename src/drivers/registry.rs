// Per-button click / long-press handlers
//
// Handlers are registered at setup and called synchronously from the
// poll loop, so they must be short.  A slow handler delays every button
// after it in the same tick.  Each handler gets the device context it
// acts on as its only argument; nothing else is shared with it.

use alloc::boxed::Box;
use log::warn;

use crate::board::button::ButtonId;
use crate::drivers::gesture::Gesture;

pub type Handler<C> = Box<dyn FnMut(&mut C)>;

struct CallbackSet<C> {
    on_click: Option<Handler<C>>,
    on_long_press: Option<Handler<C>>,
}

impl<C> CallbackSet<C> {
    fn empty() -> Self {
        Self {
            on_click: None,
            on_long_press: None,
        }
    }
}

pub struct Registry<C> {
    slots: [CallbackSet<C>; ButtonId::COUNT],
}

impl<C> Registry<C> {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| CallbackSet::empty()),
        }
    }

    /// Registration handle for one button.
    pub fn button(&mut self, id: ButtonId) -> ButtonHandle<'_, C> {
        ButtonHandle {
            id,
            set: &mut self.slots[id.index()],
        }
    }

    pub fn has_handler(&self, id: ButtonId, gesture: Gesture) -> bool {
        let set = &self.slots[id.index()];
        match gesture {
            Gesture::Click => set.on_click.is_some(),
            Gesture::LongPressStart => set.on_long_press.is_some(),
            Gesture::PressStart | Gesture::Release => false,
        }
    }

    /// Run the handler bound to `gesture` on `id`, if any.
    /// Returns whether one ran.
    pub fn dispatch(&mut self, id: ButtonId, gesture: Gesture, ctx: &mut C) -> bool {
        let set = &mut self.slots[id.index()];
        let handler = match gesture {
            Gesture::Click => set.on_click.as_mut(),
            Gesture::LongPressStart => set.on_long_press.as_mut(),
            Gesture::PressStart | Gesture::Release => None,
        };
        match handler {
            Some(h) => {
                h(ctx);
                true
            }
            None => false,
        }
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returned by [`Registry::button`]; chain `on_click` / `on_long_press`.
///
/// Registering twice for the same gesture replaces the earlier handler.
pub struct ButtonHandle<'r, C> {
    id: ButtonId,
    set: &'r mut CallbackSet<C>,
}

impl<C> ButtonHandle<'_, C> {
    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn on_click<F>(self, f: F) -> Self
    where
        F: FnMut(&mut C) + 'static,
    {
        if self.set.on_click.is_some() {
            warn!("input: replacing click handler on {}", self.id);
        }
        self.set.on_click = Some(Box::new(f));
        self
    }

    pub fn on_long_press<F>(self, f: F) -> Self
    where
        F: FnMut(&mut C) + 'static,
    {
        if self.set.on_long_press.is_some() {
            warn!("input: replacing long-press handler on {}", self.id);
        }
        self.set.on_long_press = Some(Box::new(f));
        self
    }
}
