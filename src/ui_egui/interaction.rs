// Interaction module
// Routes clicks on event blocks to the configured handlers

use crate::models::event::ScheduleEvent;

/// Receives the event whose block was clicked
#[cfg_attr(test, mockall::automock)]
pub trait EventHandler {
    fn handle(&mut self, event: &ScheduleEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&ScheduleEvent),
{
    fn handle(&mut self, event: &ScheduleEvent) {
        self(event)
    }
}

/// Click routing: a custom popup handler replaces the default popup, and the
/// click callback is notified either way
pub struct InteractionHandlers {
    pub custom_popup: Option<Box<dyn EventHandler>>,
    pub on_click: Option<Box<dyn EventHandler>>,
    pub use_default_popup: bool,
}

impl Default for InteractionHandlers {
    fn default() -> Self {
        Self {
            custom_popup: None,
            on_click: None,
            use_default_popup: true,
        }
    }
}

impl std::fmt::Debug for InteractionHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionHandlers")
            .field("custom_popup", &self.custom_popup.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("use_default_popup", &self.use_default_popup)
            .finish()
    }
}

impl InteractionHandlers {
    /// Notify handlers about a click. Returns true when the built-in popup
    /// should open for `event`.
    pub fn dispatch(&mut self, event: &ScheduleEvent) -> bool {
        let open_default = match self.custom_popup.as_mut() {
            Some(handler) => {
                handler.handle(event);
                false
            }
            None => self.use_default_popup,
        };

        if let Some(callback) = self.on_click.as_mut() {
            callback.handle(event);
        }

        log::debug!(
            "Clicked event '{}' (default popup: {})",
            event.id,
            open_default
        );
        open_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::ClockTime;
    use mockall::predicate::function;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event(id: &str) -> ScheduleEvent {
        ScheduleEvent::new(
            id,
            vec![0],
            ClockTime::parse("09:00").unwrap(),
            ClockTime::parse("10:00").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_default_popup_when_no_handlers() {
        let mut handlers = InteractionHandlers::default();
        assert!(handlers.dispatch(&event("1")));
    }

    #[test]
    fn test_default_popup_can_be_disabled() {
        let mut handlers = InteractionHandlers {
            use_default_popup: false,
            ..Default::default()
        };
        assert!(!handlers.dispatch(&event("1")));
    }

    #[test]
    fn test_custom_popup_replaces_default() {
        let mut popup = MockEventHandler::new();
        popup
            .expect_handle()
            .with(function(|e: &ScheduleEvent| e.id == "7"))
            .times(1)
            .return_const(());

        let mut handlers = InteractionHandlers {
            custom_popup: Some(Box::new(popup)),
            ..Default::default()
        };
        assert!(!handlers.dispatch(&event("7")));
    }

    #[test]
    fn test_click_callback_always_fires() {
        let mut popup = MockEventHandler::new();
        popup.expect_handle().times(1).return_const(());
        let mut callback = MockEventHandler::new();
        callback.expect_handle().times(2).return_const(());

        let mut handlers = InteractionHandlers {
            custom_popup: Some(Box::new(popup)),
            on_click: Some(Box::new(callback)),
            use_default_popup: true,
        };
        assert!(!handlers.dispatch(&event("1")));

        handlers.custom_popup = None;
        assert!(handlers.dispatch(&event("2")));
    }

    #[test]
    fn test_closures_are_handlers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut handlers = InteractionHandlers {
            on_click: Some(Box::new(move |e: &ScheduleEvent| {
                sink.borrow_mut().push(e.id.clone())
            })),
            ..Default::default()
        };

        handlers.dispatch(&event("a"));
        handlers.dispatch(&event("b"));
        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }
}
