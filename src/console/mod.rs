pub mod banner;
pub use banner::Align;

pub mod prompt;
pub use prompt::*;

pub mod screen;
pub use screen::*;

pub mod text;
pub use text::*;
