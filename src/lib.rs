#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod drawable;
pub mod error;
pub mod export;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod session;
pub mod stamps;
pub mod surface;
pub mod tools;

pub use app::{FALLBACK_MESSAGE, SketchApp};
pub use config::SketchConfig;
pub use drawable::{Command, Drawable, DrawableId, Preview};
pub use error::{SketchError, SketchResult};
pub use geometry::Point;
pub use history::CommandHistory;
pub use input::{InputEvent, InputHandler};
pub use session::Session;
pub use stamps::StampPalette;
pub use surface::{EguiSurface, RasterSurface, Surface};
pub use tools::{Tool, ToolState};
