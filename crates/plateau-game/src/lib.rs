//! Game session for plateau: turn order, drag-and-drop input and the seams
//! to rendering and audio.

pub mod config;
pub mod error;
pub mod input;
pub mod presenter;
pub mod session;

pub use config::SessionConfig;
pub use error::ConfigError;
pub use input::{InputEvent, Key, MouseButton, ScreenPos};
pub use presenter::{Animation, Audio, Easing, LevelPos, Renderer, SoundCue};
pub use session::GameSession;
