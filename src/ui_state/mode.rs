#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Only the video surface and the seek bar are drawn.
    Fullscreen,
    QUIT,
}
