pub mod pcm;
pub mod probe;

pub use pcm::wrap_pcm_as_wav;
pub use probe::{probe, AudioKind};
