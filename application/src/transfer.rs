mod borrow;
mod reader;
mod report;
mod rule;

pub use self::{borrow::*, reader::*, report::*, rule::*};
