//! 遊戲常數定義

use crate::domain::alias::{Coord, Energy, Hp};

/// 預設棋盤邊長（8x8）
pub const BOARD_SIZE: Coord = 8;

/// 棋盤邊長上限，存檔中的 boardSize 超過即拒絕載入
pub const MAX_BOARD_SIZE: Coord = 64;

/// 每回合開始時的能量，亦即每回合只能做一次移動或攻擊
pub const STARTING_ENERGY: Energy = 1;

/// 玩家預設生命值（目前沒有任何規則會扣除）
pub const DEFAULT_PLAYER_HP: Hp = 3;

/// 預設存檔路徑（相對於執行目錄）
pub const DEFAULT_SAVE_PATH: &str = "saves/save_current.json";
