/// Cosmetic notification side-channel. Listeners must return quickly and
/// must never fail past their call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A remote operation was started.
    Sent,
    /// A submission was fully accepted.
    Accepted,
}

pub trait Notifier {
    fn notify(&self, event: Event);
}

/// Default listener: discards every event.
pub struct Silent;
impl Notifier for Silent {
    fn notify(&self, _event: Event) {}
}
