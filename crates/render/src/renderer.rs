use lifegrid_session::Session;

use crate::status::status_text;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the session after the frame's intents and clock step
/// have run, and produces output. It never mutates the session.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given session state.
    fn render(&self, session: &Session) -> Self::Output;
}

/// Plain-text renderer for terminals, logs, and tests.
///
/// Draws one line per grid row, then a summary line and the status line.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub alive: char,
    pub dead: char,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: '.',
        }
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, session: &Session) -> String {
        let grid = session.grid();
        let mut out = String::with_capacity((grid.cols() + 1) * (grid.rows() + 2));
        let mut live = grid.live_cells().peekable();

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let here = live.peek().is_some_and(|p| p.row == row && p.col == col);
                if here {
                    live.next();
                    out.push(self.alive);
                } else {
                    out.push(self.dead);
                }
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "generation={} population={}\n",
            grid.generation(),
            grid.population()
        ));
        out.push_str(&status_text(session.clock()));
        out.push('\n');

        tracing::trace!(bytes = out.len(), "text frame rendered");
        out
    }
}
