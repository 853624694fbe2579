mod builtin;

pub use builtin::{GregorianLayout, Locale};
