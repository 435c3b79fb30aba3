pub mod form;
pub mod format;
pub mod theme;

/// What the event loop should do after a key press.
pub enum Action {
    None,
    Submit,
    Quit,
}
