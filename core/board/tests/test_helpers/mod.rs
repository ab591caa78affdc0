//! 測試輔助：ASCII 建盤、查棋子、狀態快照、存檔文件 builder

#![allow(dead_code)]

mod scenario_builder;

pub use scenario_builder::ScenarioBuilder;

use board::board::Board;
use board::component::PieceId;
use board::domain::alias::{Energy, Hp};
use board::domain::core_types::{PlayerId, Position};
use board::loader::load_from_ascii;
use board::logic::debug::render_ascii;
use std::collections::HashMap;

/// 開啟測試輸出的日誌（`RUST_LOG=board=debug cargo test`），可重複呼叫
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 從 ASCII 建立棋盤與標記
pub fn setup(ascii: &str) -> (Board, HashMap<String, Vec<Position>>) {
    load_from_ascii(ascii).expect("ASCII 棋盤應可載入")
}

/// 取得指定位置的棋子 ID
pub fn id_at(board: &Board, row: usize, col: usize) -> PieceId {
    board
        .piece_at(Position::new(row, col))
        .unwrap_or_else(|| panic!("({row}, {col}) 應有棋子"))
        .id
}

/// 取得單一標記的位置
pub fn marker(markers: &HashMap<String, Vec<Position>>, name: &str) -> Position {
    markers[name][0]
}

/// 棋盤可觀察狀態的快照，用於驗證「失敗時不改動」
#[derive(Debug, PartialEq)]
pub struct Snapshot {
    ascii: String,
    hps: Vec<(Position, Hp)>,
    energies: [Energy; 2],
    current: PlayerId,
}

pub fn snapshot(board: &Board) -> Snapshot {
    Snapshot {
        ascii: render_ascii(board),
        hps: board
            .pieces()
            .into_iter()
            .map(|piece| (piece.pos, piece.hp))
            .collect(),
        energies: [
            board.player(PlayerId::One).energy,
            board.player(PlayerId::Two).energy,
        ],
        current: board.current_player_id(),
    }
}
