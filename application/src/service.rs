mod borrow;
mod reader;
mod reader_borrow;
mod rule;

pub use self::{borrow::*, reader::*, reader_borrow::*, rule::*};
