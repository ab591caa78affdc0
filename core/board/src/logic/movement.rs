//! 移動策略
//!
//! 每種棋子一個純函數判定：只看棋子目前位置、數值與棋盤佔據狀況。
//! 邊界、回合、可通行、目的地佔據、能量等由棋盤另外檢查。

use crate::component::Piece;
use crate::domain::core_types::{PieceType, PlayerId, Position};
use crate::logic::geometry::{Axes, chebyshev_distance, is_l_shape, is_path_clear};

/// 移動策略（封閉集合，依棋子種類決定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPolicy {
    Pawn,
    Bishop,
    Rook,
    Queen,
    Knight,
    King,
    Archer,
}

impl MovementPolicy {
    /// 棋子種類對應的移動策略，牧師沒有
    pub fn for_piece_type(piece_type: PieceType) -> Option<Self> {
        match piece_type {
            PieceType::Pawn => Some(MovementPolicy::Pawn),
            PieceType::Bishop => Some(MovementPolicy::Bishop),
            PieceType::Knight => Some(MovementPolicy::Knight),
            PieceType::Rook => Some(MovementPolicy::Rook),
            PieceType::Queen => Some(MovementPolicy::Queen),
            PieceType::Archer => Some(MovementPolicy::Archer),
            PieceType::King => Some(MovementPolicy::King),
            PieceType::Chaplain => None,
        }
    }

    /// 判斷棋子能否移動到目標格
    ///
    /// `get_occupant` 回傳某格上棋子的擁有者，空格為 `None`
    pub fn allows<F>(self, piece: &Piece, target: Position, get_occupant: F) -> bool
    where
        F: Fn(Position) -> Option<PlayerId> + Copy,
    {
        let from = piece.pos;
        let distance = chebyshev_distance(from, target);
        match self {
            // 不限方向，但目的地必須是空格
            MovementPolicy::Pawn => {
                distance <= piece.movement_range && get_occupant(target).is_none()
            }
            MovementPolicy::Bishop => slide(piece, target, Axes::Diagonal, get_occupant),
            MovementPolicy::Rook => slide(piece, target, Axes::Orthogonal, get_occupant),
            MovementPolicy::Queen => slide(piece, target, Axes::Any, get_occupant),
            // 固定 L 形，不看移動距離
            MovementPolicy::Knight => is_l_shape(from, target),
            MovementPolicy::King => distance <= piece.movement_range && distance == 1,
            MovementPolicy::Archer => {
                if distance > piece.movement_range {
                    return false;
                }
                // 目的地有棋子時距離須為 2；棋盤禁止移到有人的格子，此分支實際走不到
                match get_occupant(target) {
                    None => distance == 1,
                    Some(_) => distance == 2,
                }
            }
        }
    }
}

/// 移動的幾何判定：有策略用策略，沒有就只看距離
pub fn movement_allows<F>(piece: &Piece, target: Position, get_occupant: F) -> bool
where
    F: Fn(Position) -> Option<PlayerId> + Copy,
{
    match piece.movement_policy {
        Some(policy) => policy.allows(piece, target, get_occupant),
        None => chebyshev_distance(piece.pos, target) <= piece.movement_range,
    }
}

/// 直線滑行：距離、方向、中間格必須全空（不檢查目的地）
fn slide<F>(piece: &Piece, target: Position, axes: Axes, get_occupant: F) -> bool
where
    F: Fn(Position) -> Option<PlayerId> + Copy,
{
    chebyshev_distance(piece.pos, target) <= piece.movement_range
        && axes.allows(piece.pos, target)
        && is_path_clear(piece.pos, target, |pos| get_occupant(pos).is_some())
}
