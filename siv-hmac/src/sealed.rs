/// Prevents implementing the crate's marker traits outside of this crate.
pub trait Sealed {}
