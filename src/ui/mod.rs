pub mod theme;

pub use theme::{Palette, Spinners, Theme};
