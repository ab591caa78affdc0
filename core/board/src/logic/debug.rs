//! 調試相關的工具函數

use crate::battle::Highlight;
use crate::board::Board;
use crate::component::PieceId;
use crate::domain::core_types::Position;

/// 把棋盤畫成 ASCII（與 `load_from_ascii` 同格式，不含標記）
pub fn render_ascii(board: &Board) -> String {
    render_with(board, |board, pos| match board.piece_at(pos) {
        Some(piece) => piece.symbol(),
        None if board.is_traversable(pos) => '.',
        None => '#',
    })
}

/// 畫出選取棋子的標示：`m` 可移動、`x` 可攻擊、`*` 兩者皆可、`@` 棋子本身
pub fn render_highlights(board: &Board, id: PieceId) -> String {
    let origin = board.piece(id).map(|piece| piece.pos);
    render_with(board, |board, pos| {
        if Some(pos) == origin {
            return '@';
        }
        match board.highlight(id, pos) {
            Highlight::Move => 'm',
            Highlight::Attack => 'x',
            Highlight::MoveAndAttack => '*',
            Highlight::None if board.is_traversable(pos) => '.',
            Highlight::None => '#',
        }
    })
}

fn render_with<F>(board: &Board, symbol_at: F) -> String
where
    F: Fn(&Board, Position) -> char,
{
    let size = board.size();
    let mut out = String::new();
    for row in 0..size {
        let line: Vec<String> = (0..size)
            .map(|col| symbol_at(board, Position { row, col }).to_string())
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
