mod book;
mod borrow;
mod reader;
mod rule;

pub use self::{book::*, borrow::*, reader::*, rule::*};
