pub use self::{overlay::Overlay, play::PlayScreen};

mod overlay;
mod play;
