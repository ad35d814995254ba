pub mod draw;
pub mod events;

pub use events::EventHandler;
