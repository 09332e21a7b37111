pub mod available;
pub mod probe;

pub use available::AvailableFontSet;
pub use probe::{FontAvailabilityProbe, InMemoryFontProbe, ProbeError};
