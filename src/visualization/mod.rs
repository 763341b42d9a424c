pub mod ljbox_vis2d;
pub mod energy;
