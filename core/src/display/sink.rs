use crate::display::PpmView;

/// Consumer of transform results. Calls are fire-and-forget.
pub trait DisplaySink {
    fn show_ppm(&self, view: &PpmView);

    /// Problems with the caller's selection.
    fn show_error(&self, message: &str);

    /// Data or processing failures.
    fn show_warning(&self, message: &str);

    /// Asks the display to redraw, clearing stale state.
    fn request_repaint(&self);
}
