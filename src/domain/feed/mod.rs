pub mod collector;
pub mod model;

pub use collector::{PageSource, WindowedCollector};
pub use model::{Page, Published};
