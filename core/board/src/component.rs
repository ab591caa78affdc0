//! 棋盤上的資料型別：格子、棋子、玩家

use crate::domain::alias::{Distance, Energy, Hp, ID};
use crate::domain::constants::{DEFAULT_PLAYER_HP, STARTING_ENERGY};
use crate::domain::core_types::{ColorName, PieceType, PlayerId, Position};
use crate::logic::attack::AttackPolicy;
use crate::logic::movement::MovementPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 棋子唯一 ID（不存檔，載入時重新產生）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub ID);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}

/// 格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub traversable: bool,
    /// 只供顯示，不影響規則
    pub background: ColorName,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            traversable: true,
            background: ColorName::White,
        }
    }
}

impl Tile {
    /// 不可通行的障礙格
    pub fn barrier() -> Self {
        Self {
            traversable: false,
            background: ColorName::DarkGray,
        }
    }
}

/// 棋子
///
/// 數值在建立時依種類決定，之後只有 `hp` 會因戰鬥改變。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub pos: Position,
    pub owner: PlayerId,
    pub piece_type: PieceType,
    pub hp: Hp,
    pub attack_damage: Hp,
    pub movement_range: Distance,
    pub attack_range: Distance,
    pub is_ranged: bool,
    pub movement_policy: Option<MovementPolicy>,
    pub attack_policy: Option<AttackPolicy>,
}

impl Piece {
    pub fn new(id: PieceId, piece_type: PieceType, owner: PlayerId, pos: Position) -> Self {
        let stats = piece_type.stats();
        Self {
            id,
            pos,
            owner,
            piece_type,
            hp: stats.hp,
            attack_damage: stats.attack_damage,
            movement_range: stats.movement_range,
            attack_range: stats.attack_range,
            is_ranged: stats.is_ranged,
            movement_policy: MovementPolicy::for_piece_type(piece_type),
            attack_policy: AttackPolicy::for_piece_type(piece_type),
        }
    }

    /// 顯示符號（玩家 1 大寫、玩家 2 小寫）
    pub fn symbol(&self) -> char {
        self.piece_type.symbol_for(self.owner)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// 承受傷害，最低為 0，回傳剩餘 HP
    pub(crate) fn take_damage(&mut self, damage: Hp) -> Hp {
        self.hp = (self.hp - damage.max(0)).max(0);
        self.hp
    }
}

/// 玩家資源狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub energy: Energy,
    pub hp: Hp,
    pub color: ColorName,
}

impl Player {
    pub fn new(color: ColorName) -> Self {
        Self {
            energy: STARTING_ENERGY,
            hp: DEFAULT_PLAYER_HP,
            color,
        }
    }

    /// 回合開始的能量（固定值）
    pub fn starting_energy(&self) -> Energy {
        STARTING_ENERGY
    }

    pub fn has_energy(&self) -> bool {
        self.energy > 0
    }
}
