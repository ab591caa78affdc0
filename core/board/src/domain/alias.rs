//! 型別別名

/// 棋盤座標（列或行）
pub type Coord = usize;

/// 格子距離（Chebyshev）
pub type Distance = usize;

/// 生命值
pub type Hp = i32;

/// 行動能量
pub type Energy = i32;

/// 棋子唯一 ID
pub type ID = u64;
