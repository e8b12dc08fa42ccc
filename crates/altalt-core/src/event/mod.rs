// Altalt Event Handling
// Synchronous event loop

pub mod r#loop;

pub use r#loop::EventLoop;
