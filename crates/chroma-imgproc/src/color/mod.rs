mod chromatic;
mod white_patch;

pub use chromatic::chromatic_coordinates;
pub use white_patch::white_patch;
