//! 地城西洋棋規則引擎
//!
//! - `domain`：別名、常數、棋子種類與數值表
//! - `component`：格子、棋子、玩家等資料型別
//! - `logic`：純函數判定（幾何、移動策略、攻擊策略）
//! - `board`：棋盤本體，唯一可改動狀態的地方
//! - `battle`：移動、攻擊、回合結束等指令
//! - `loader` / `loader_schema`：ASCII 與存檔格式

pub mod battle;
pub mod board;
pub mod component;
pub mod domain;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;

pub use domain::alias;
