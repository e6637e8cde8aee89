use std::panic;

/// Intercepts otherwise-uncaught panics from the UI layer. In development
/// mode they are logged with payload and location; outside it they are
/// suppressed entirely.
pub fn install_error_hook(dev_mode: bool) {
    panic::set_hook(Box::new(move |info| {
        if !dev_mode {
            return;
        }

        let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "<unknown location>".to_string());

        log::error!("Unhandled panic at {location}: {message}");
    }));
}
