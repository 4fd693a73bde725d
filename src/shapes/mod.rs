mod cup;

pub use cup::*;
