//! Scoreboard
//!
//! Render ranking data (names paired with scores) into PNG images, either as
//! a multi-row [`Leaderboard`] or as a two-team [`Head2Head`] comparison.
//!
//! # Features
//!
//! - **Lazy rendering**: nothing is drawn until the first export, and the
//!   canvas is reused by every later export on the same instance
//! - **Deterministic output**: a bundled bitmap font and pixel-aligned shapes
//!   give byte-identical PNGs for identical input
//! - **Transparent by default**: the background stays fully transparent unless
//!   a `fill_color` is set
//!
//! # Example
//!
//! ```no_run
//! use scoreboard::{Leaderboard, Scoreboard, StyleConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ranking = [("A really long username", 30), ("Player 1", 15), ("Player 2", 50)];
//! let style = StyleConfig {
//!     title: Some("Ranking".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut lb = Leaderboard::new(ranking, style)?;
//! lb.save_image("leaderboard.png")?;
//! let b64 = lb.b64_image()?;
//! std::fs::write("leaderboard.b64", b64)?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod export;
pub mod head2head;
pub mod leaderboard;
pub mod ranking;
pub mod rendering;
pub mod style;

pub use head2head::Head2Head;
pub use leaderboard::Leaderboard;
pub use ranking::{layout_metrics, Entry, LayoutMetrics, Ranking, Score};
pub use rendering::Canvas;
pub use style::{FontConfig, Margins, Rgba, StyleConfig};

/// Behaviour shared by every scoreboard type
///
/// Implementors supply [`render`](Scoreboard::render) and a cache slot; the
/// export methods render on first use and reuse the cached canvas afterwards,
/// so repeated exports produce identical bytes without redrawing.
pub trait Scoreboard {
    /// Draw the scoreboard onto a fresh canvas
    fn render(&self) -> Result<Canvas>;

    /// Slot holding the canvas produced by the first export
    fn cache(&mut self) -> &mut Option<Canvas>;

    /// The rendered canvas, drawing it if this is the first request
    fn image(&mut self) -> Result<&Canvas> {
        let canvas = match self.cache().take() {
            Some(canvas) => {
                log::debug!(
                    "reusing cached {}x{} canvas",
                    canvas.width(),
                    canvas.height()
                );
                canvas
            }
            None => self.render()?,
        };
        Ok(self.cache().insert(canvas))
    }

    /// Save the image as PNG. A `.png` extension is appended when missing;
    /// returns the path written.
    fn save_image(&mut self, path: impl AsRef<Path>) -> Result<PathBuf>
    where
        Self: Sized,
    {
        export::to_file(self.image()?, path)
    }

    /// Base64-encoded PNG bytes
    fn b64_image(&mut self) -> Result<Vec<u8>> {
        export::to_base64(self.image()?)
    }

    /// Base64-encoded PNG prefixed with `data:image/png;base64,`
    fn data_uri(&mut self) -> Result<Vec<u8>> {
        export::to_data_uri(self.image()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting {
        renders: Cell<u32>,
        rendered: Option<Canvas>,
    }

    impl Scoreboard for Counting {
        fn render(&self) -> Result<Canvas> {
            self.renders.set(self.renders.get() + 1);
            Canvas::new(2, 2, Rgba::TRANSPARENT)
        }

        fn cache(&mut self) -> &mut Option<Canvas> {
            &mut self.rendered
        }
    }

    #[test]
    fn exports_render_once() {
        let mut board = Counting {
            renders: Cell::new(0),
            rendered: None,
        };
        let first = board.b64_image().unwrap();
        let second = board.b64_image().unwrap();
        board.data_uri().unwrap();
        assert_eq!(first, second);
        assert_eq!(board.renders.get(), 1);
    }

    #[test]
    fn cached_canvas_is_returned_unchanged() {
        let mut board = Counting {
            renders: Cell::new(0),
            rendered: None,
        };
        let first = board.image().unwrap().clone();
        let again = board.image().unwrap();
        assert_eq!(&first, again);
        assert_eq!(board.renders.get(), 1);
        assert!(board.rendered.is_some());
    }

    #[test]
    fn failed_render_is_not_cached() {
        struct Broken(Option<Canvas>);
        impl Scoreboard for Broken {
            fn render(&self) -> Result<Canvas> {
                Err(Error::RenderError("boom".into()))
            }
            fn cache(&mut self) -> &mut Option<Canvas> {
                &mut self.0
            }
        }
        let mut board = Broken(None);
        assert!(board.b64_image().is_err());
        assert!(board.0.is_none());
    }
}
