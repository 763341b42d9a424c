//! High-level runtime engine settings
//!
//! Selects what happens with the completed run: trajectory playback in the
//! viewer, the energy report, and how long a trail the viewer draws

#[derive(Debug, Clone)]
pub struct Engine {
    pub animate: bool, // true = open the Bevy playback viewer
    pub report_energy: bool, // true = print the per-step energy CSV
    pub trail_length: usize, // trajectory trail frames drawn behind each particle
}
