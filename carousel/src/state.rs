/// A lightweight, serializable snapshot of the current viewport width.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub width: u32,
}

/// A lightweight, serializable snapshot of the navigation state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    /// The centered item index.
    pub index: usize,
}

/// A combined snapshot of viewport + navigation state.
///
/// This is useful for restoring the carousel across remounts without coupling the
/// engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportState,
    pub nav: NavState,
}
