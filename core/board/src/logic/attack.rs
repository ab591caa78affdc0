//! 攻擊策略
//!
//! 與移動策略互相獨立：同一棋子可以有不同的移動與攻擊距離、視線規則。
//! 目標是否存在、是否為敵方由棋盤負責，策略本身不一定檢查。

use crate::component::Piece;
use crate::domain::core_types::{PieceType, PlayerId, Position};
use crate::logic::geometry::{
    abs_offset, chebyshev_distance, is_diagonal, is_l_shape, is_path_clear,
};

/// 攻擊策略（封閉集合，依棋子種類決定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPolicy {
    Pawn,
    Bishop,
    Rook,
    Queen,
    Knight,
    King,
    Archer,
}

impl AttackPolicy {
    /// 棋子種類對應的攻擊策略，牧師沒有
    pub fn for_piece_type(piece_type: PieceType) -> Option<Self> {
        match piece_type {
            PieceType::Pawn => Some(AttackPolicy::Pawn),
            PieceType::Bishop => Some(AttackPolicy::Bishop),
            PieceType::Knight => Some(AttackPolicy::Knight),
            PieceType::Rook => Some(AttackPolicy::Rook),
            PieceType::Queen => Some(AttackPolicy::Queen),
            PieceType::Archer => Some(AttackPolicy::Archer),
            PieceType::King => Some(AttackPolicy::King),
            PieceType::Chaplain => None,
        }
    }

    /// 判斷棋子能否攻擊目標格
    ///
    /// `get_occupant` 回傳某格上棋子的擁有者，空格為 `None`
    pub fn allows<F>(self, piece: &Piece, target: Position, get_occupant: F) -> bool
    where
        F: Fn(Position) -> Option<PlayerId> + Copy,
    {
        let from = piece.pos;
        let distance = chebyshev_distance(from, target);
        match self {
            // 斜向、距離內、目標必須是敵方棋子
            AttackPolicy::Pawn => {
                let (d_row, _) = abs_offset(from, target);
                is_diagonal(from, target)
                    && d_row <= piece.attack_range
                    && matches!(get_occupant(target), Some(owner) if owner != piece.owner)
            }
            AttackPolicy::Bishop => diagonal_strike(piece, target, get_occupant),
            // 不限方向、不看路徑
            AttackPolicy::Rook | AttackPolicy::Queen => distance <= piece.attack_range,
            // 只看 L 形，不看距離也不看目標歸屬
            AttackPolicy::Knight => is_l_shape(from, target),
            AttackPolicy::King => distance <= piece.attack_range && distance == 1,
            AttackPolicy::Archer => distance == 2,
        }
    }
}

/// 攻擊的幾何判定：有策略用策略，沒有就只看距離
pub fn attack_allows<F>(piece: &Piece, target: Position, get_occupant: F) -> bool
where
    F: Fn(Position) -> Option<PlayerId> + Copy,
{
    match piece.attack_policy {
        Some(policy) => policy.allows(piece, target, get_occupant),
        None => chebyshev_distance(piece.pos, target) <= piece.attack_range,
    }
}

/// 斜線攻擊：距離、方向、中間格必須全空（目標格本身不算）
fn diagonal_strike<F>(piece: &Piece, target: Position, get_occupant: F) -> bool
where
    F: Fn(Position) -> Option<PlayerId> + Copy,
{
    chebyshev_distance(piece.pos, target) <= piece.attack_range
        && is_diagonal(piece.pos, target)
        && is_path_clear(piece.pos, target, |pos| get_occupant(pos).is_some())
}
