pub mod composite;
pub mod terminal;
pub mod toast;

pub use composite::CompositeNotifier;
pub use terminal::TerminalNotifier;
pub use toast::ToastNotifier;
