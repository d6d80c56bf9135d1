//! Injected side-effect capabilities: blocking notices and navigation.

/// Shows a blocking, modal-style message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Moves the user to another route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}
