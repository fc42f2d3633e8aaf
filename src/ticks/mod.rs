pub mod bitmap;
pub mod provider;
pub mod tick;
pub mod tick_list;

pub use bitmap::TickBitmapProvider;
pub use provider::{TickDataProvider, TickListProvider};
pub use tick::Tick;
pub use tick_list::TickList;
