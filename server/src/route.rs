mod borrow;
mod reader;
mod rule;

pub use self::{borrow::*, reader::*, rule::*};
