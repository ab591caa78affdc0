//! 棋盤幾何：邊界、距離、直線路徑

use crate::domain::alias::{Coord, Distance};
use crate::domain::core_types::Position;

/// 直線方向限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axes {
    /// 只能斜走
    Diagonal,
    /// 只能直走或橫走
    Orthogonal,
    /// 斜、直、橫皆可
    Any,
}

impl Axes {
    /// 判斷 from → to 是否符合方向限制（原地不算任何方向）
    pub fn allows(self, from: Position, to: Position) -> bool {
        match self {
            Axes::Diagonal => is_diagonal(from, to),
            Axes::Orthogonal => is_orthogonal(from, to),
            Axes::Any => is_diagonal(from, to) || is_orthogonal(from, to),
        }
    }
}

/// 驗證位置是否在棋盤邊界內
pub fn is_valid_position(size: Coord, pos: Position) -> bool {
    pos.row < size && pos.col < size
}

/// 列差與行差的絕對值
pub fn abs_offset(from: Position, to: Position) -> (Distance, Distance) {
    (from.row.abs_diff(to.row), from.col.abs_diff(to.col))
}

/// Chebyshev 距離：max(|Δrow|, |Δcol|)
pub fn chebyshev_distance(from: Position, to: Position) -> Distance {
    let (d_row, d_col) = abs_offset(from, to);
    d_row.max(d_col)
}

/// 嚴格斜線（|Δrow| == |Δcol| ≠ 0）
pub fn is_diagonal(from: Position, to: Position) -> bool {
    let (d_row, d_col) = abs_offset(from, to);
    d_row == d_col && d_row != 0
}

/// 同列或同行，且不是原地
pub fn is_orthogonal(from: Position, to: Position) -> bool {
    from != to && (from.row == to.row || from.col == to.col)
}

/// 騎士 L 形偏移：(2,1) 或 (1,2)
pub fn is_l_shape(from: Position, to: Position) -> bool {
    matches!(abs_offset(from, to), (2, 1) | (1, 2))
}

/// 直線上介於兩端之間的格子（不含起點與終點）
///
/// 非直線（或原地）返回 `None`
pub fn straight_path(from: Position, to: Position) -> Option<Vec<Position>> {
    if !Axes::Any.allows(from, to) {
        return None;
    }

    let row_step = step_sign(from.row, to.row);
    let col_step = step_sign(from.col, to.col);
    let steps = chebyshev_distance(from, to);

    let path = (1..steps)
        .map(|i| Position {
            row: shift(from.row, row_step, i),
            col: shift(from.col, col_step, i),
        })
        .collect();
    Some(path)
}

/// 直線路徑中間是否全為空格
///
/// 非直線視為不通
pub fn is_path_clear<F>(from: Position, to: Position, is_occupied: F) -> bool
where
    F: Fn(Position) -> bool,
{
    match straight_path(from, to) {
        Some(path) => path.into_iter().all(|pos| !is_occupied(pos)),
        None => false,
    }
}

fn step_sign(from: Coord, to: Coord) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

// 只用於兩端之間的格子，結果必定非負
fn shift(coord: Coord, step: isize, times: usize) -> Coord {
    (coord as isize + step * times as isize) as Coord
}
