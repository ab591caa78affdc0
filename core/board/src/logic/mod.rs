//! 核心判定邏輯（純函數，不改動棋盤）

pub mod attack;
pub mod debug;
pub mod geometry;
pub mod id_generator;
pub mod movement;
