pub mod store;

pub use store::{LottoApp, PageRequest, Tab, WinningNumbersState};
