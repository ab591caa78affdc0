//! 領域基本定義（不依賴棋盤狀態）

pub mod alias;
pub mod constants;
pub mod core_types;
