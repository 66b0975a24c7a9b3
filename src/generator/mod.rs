pub mod builder;
pub mod recommend;
pub mod sample;
pub mod seeds;
pub mod tracks;

pub use builder::*;
pub use recommend::*;
pub use sample::*;
pub use seeds::*;
pub use tracks::*;
