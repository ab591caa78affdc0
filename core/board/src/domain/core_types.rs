//! 基本資料類型定義

use crate::domain::alias::{Coord, Distance, Hp};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

// ============================================================================
// 座標
// ============================================================================

/// 棋盤位置（列, 行）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl Position {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

// ============================================================================
// 玩家
// ============================================================================

/// 玩家識別（只有兩位），存檔時寫成 1 或 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// 對手
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 玩家陣列索引（0 或 1）
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// 存檔用編號（1 或 2）
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(format!("玩家編號必須是 1 或 2，實際為 {other}")),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.number()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// 顏色名稱，存檔時以名稱字串保存
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum ColorName {
    #[default]
    White,
    Black,
    Gray,
    DarkGray,
    Red,
    Blue,
    Green,
    Yellow,
    Brown,
    Purple,
}

// ============================================================================
// 棋子種類
// ============================================================================

/// 棋子種類的靜態數值（建立棋子時的預設值）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceStats {
    pub symbol: char,
    pub movement_range: Distance,
    pub attack_range: Distance,
    pub hp: Hp,
    pub attack_damage: Hp,
    pub is_ranged: bool,
}

/// 定義棋子種類與數值表的 macro（單一來源）
///
/// 格式：(variant, 符號, 移動距離, 攻擊距離, HP, 攻擊力, 是否遠程)
/// 同時產生：
/// - `PieceType` enum
/// - `PieceType::stats`
macro_rules! define_piece_types {
    ($(($variant:ident, $symbol:literal, $movement:expr, $attack:expr, $hp:expr, $damage:expr, $ranged:expr)),* $(,)?) => {
        /// 棋子種類（封閉集合）
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Serialize,
            Deserialize,
            Display,
            EnumString,
            EnumIter,
        )]
        pub enum PieceType {
            $($variant,)*
        }

        impl PieceType {
            /// 種類對應的預設數值
            pub fn stats(self) -> PieceStats {
                match self {
                    $(PieceType::$variant => PieceStats {
                        symbol: $symbol,
                        movement_range: $movement,
                        attack_range: $attack,
                        hp: $hp,
                        attack_damage: $damage,
                        is_ranged: $ranged,
                    },)*
                }
            }
        }
    };
}

define_piece_types!(
    (Pawn, 'P', 1, 1, 10, 10, false),
    (Bishop, 'B', 2, 4, 10, 10, false),
    (Knight, 'N', 3, 3, 10, 10, false),
    (Rook, 'R', 10, 1, 10, 10, false),
    (Queen, 'Q', 10, 10, 10, 10, false),
    (Archer, 'A', 1, 2, 10, 5, true),
    (Chaplain, 'C', 1, 1, 10, 10, false),
    (King, 'K', 1, 1, 20, 10, false),
);

impl PieceType {
    pub fn symbol(self) -> char {
        self.stats().symbol
    }

    /// 依玩家回傳顯示符號：玩家 1 大寫、玩家 2 小寫
    pub fn symbol_for(self, owner: PlayerId) -> char {
        match owner {
            PlayerId::One => self.symbol(),
            PlayerId::Two => self.symbol().to_ascii_lowercase(),
        }
    }

    /// 由顯示符號反查種類與玩家
    pub fn from_symbol(symbol: char) -> Option<(PieceType, PlayerId)> {
        let owner = if symbol.is_ascii_uppercase() {
            PlayerId::One
        } else if symbol.is_ascii_lowercase() {
            PlayerId::Two
        } else {
            return None;
        };
        let upper = symbol.to_ascii_uppercase();
        PieceType::iter()
            .find(|piece_type| piece_type.symbol() == upper)
            .map(|piece_type| (piece_type, owner))
    }
}
