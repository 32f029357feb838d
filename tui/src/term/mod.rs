//! Terminal rendering: a framebuffer filled by pure view code, flushed to the terminal with
//! crossterm.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::FrameBuffer;
pub use renderer::TerminalRenderer;
pub use view::Viewport;
