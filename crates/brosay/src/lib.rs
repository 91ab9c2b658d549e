//! brosay: an ASCII greeter with an ANSI-aware speech bubble.
//!
//! Renders the Brootal figure next to a bordered speech bubble containing a
//! word-wrapped message. Escape sequences embedded in the message survive
//! wrapping: they are recorded against the visible character stream, the
//! plain text is wrapped, and the escapes are re-inserted at their visible
//! offsets in the wrapped output.
//!
//! # Example
//!
//! ```
//! let greeting = brosay::render("Sindre is a horse", brosay::RenderOptions::default());
//! assert!(greeting.contains("Sindre is a horse"));
//! assert!(greeting.contains('╭'));
//! ```

mod ansi;
mod figure;
mod frame;
mod render;
mod restyle;
mod text;

pub use ansi::strip_ansi;
pub use render::{DEFAULT_MESSAGE, RenderOptions, render};
