//! 存檔文件的資料結構定義
//!
//! 種類與顏色一律以名稱字串保存，方便人工閱讀。

use crate::domain::alias::{Coord, Energy, Hp};
use crate::domain::core_types::{ColorName, PieceType, PlayerId};
use serde::{Deserialize, Serialize};

/// 整盤遊戲狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board_size: Coord,
    pub current_player: PlayerId,
    pub player1: PlayerRecord,
    pub player2: PlayerRecord,
    /// 未列出的格子使用預設值（可通行、白色）
    #[serde(default)]
    pub tiles: Vec<TileRecord>,
    #[serde(default)]
    pub pieces: Vec<PieceRecord>,
}

/// 格子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub row: Coord,
    pub col: Coord,
    pub is_traversable: bool,
    #[serde(default)]
    pub background_color: ColorName,
}

/// 棋子（數值依種類重建，不存 HP）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceRecord {
    pub row: Coord,
    pub col: Coord,
    pub owner_id: PlayerId,
    #[serde(rename = "type")]
    pub piece_type: PieceType,
}

/// 玩家
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub energy: Energy,
    pub hp: Hp,
    pub color_name: ColorName,
}
