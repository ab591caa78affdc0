//! 棋盤：擁有格子、棋子、兩位玩家與目前回合
//!
//! 所有欄位皆為私有，外部只能透過查詢函數讀取，
//! 並透過 `battle` 中的指令（移動、攻擊、結束回合）改動狀態。

use crate::component::{Piece, PieceId, Player, Tile};
use crate::domain::alias::{Coord, Hp};
use crate::domain::constants::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::domain::core_types::{ColorName, PieceType, PlayerId, Position};
use crate::error::{BoardError, Result};
use crate::logic::geometry::is_valid_position;
use crate::logic::id_generator::PieceIdPool;
use std::collections::HashMap;

/// 開局後排（由左至右）
const STANDARD_BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 開局前排（由左至右）
const STANDARD_FRONT_ROW: [PieceType; 8] = [
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Archer,
    PieceType::Chaplain,
    PieceType::Chaplain,
    PieceType::Archer,
    PieceType::Pawn,
    PieceType::Pawn,
];

/// 位置 → 棋子索引
///
/// 與 `Piece::pos` 同步，只由 `Board` 內部維護
#[derive(Debug, Default, Clone)]
struct PieceMap {
    pos_to_piece: HashMap<Position, PieceId>,
}

impl PieceMap {
    fn get(&self, pos: Position) -> Option<PieceId> {
        self.pos_to_piece.get(&pos).copied()
    }

    // 呼叫端需確保 pos 為空格
    fn insert(&mut self, pos: Position, id: PieceId) {
        self.pos_to_piece.insert(pos, id);
    }

    // 呼叫端需確保 to 為空格
    fn relocate(&mut self, id: PieceId, from: Position, to: Position) {
        if self.pos_to_piece.get(&from) == Some(&id) {
            self.pos_to_piece.remove(&from);
        }
        self.pos_to_piece.insert(to, id);
    }

    fn remove(&mut self, pos: Position) {
        self.pos_to_piece.remove(&pos);
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    size: Coord,
    // tiles[row][col]
    tiles: Vec<Vec<Tile>>,
    pieces: HashMap<PieceId, Piece>,
    piece_map: PieceMap,
    players: [Player; 2],
    current_player: PlayerId,
    ids: PieceIdPool,
}

impl Board {
    /// 建立空棋盤：格子全部可通行，玩家 1 先手
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(BoardError::EmptyBoard.into());
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardError::TooLarge {
                size,
                max: MAX_BOARD_SIZE,
            }
            .into());
        }
        Ok(Self::empty(size))
    }

    /// 標準開局：玩家 2 在第 0、1 列，玩家 1 在第 6、7 列
    pub fn standard() -> Self {
        let mut board = Self::empty(BOARD_SIZE);
        let rows = [
            (0, STANDARD_BACK_ROW, PlayerId::Two),
            (1, STANDARD_FRONT_ROW, PlayerId::Two),
            (BOARD_SIZE - 2, STANDARD_FRONT_ROW, PlayerId::One),
            (BOARD_SIZE - 1, STANDARD_BACK_ROW, PlayerId::One),
        ];
        for (row, types, owner) in rows {
            for (col, piece_type) in types.into_iter().enumerate() {
                board.spawn(piece_type, owner, Position::new(row, col));
            }
        }
        board
    }

    fn empty(size: Coord) -> Self {
        Self {
            size,
            tiles: vec![vec![Tile::default(); size]; size],
            pieces: HashMap::new(),
            piece_map: PieceMap::default(),
            players: [Player::new(ColorName::White), Player::new(ColorName::Red)],
            current_player: PlayerId::One,
            ids: PieceIdPool::default(),
        }
    }

    // ========================================================================
    // 查詢
    // ========================================================================

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn is_valid_position(&self, pos: Position) -> bool {
        is_valid_position(self.size, pos)
    }

    /// 所有棋盤位置（列優先）
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position { row, col }))
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(pos.row)?.get(pos.col)
    }

    /// 超出棋盤視為不可通行
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(|tile| tile.traversable)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.piece_map.get(pos).and_then(|id| self.pieces.get(&id))
    }

    /// 某格棋子的擁有者，供移動/攻擊策略查詢佔據狀況
    pub fn occupant_owner(&self, pos: Position) -> Option<PlayerId> {
        self.piece_at(pos).map(|piece| piece.owner)
    }

    /// 所有棋子（依位置排序）
    pub fn pieces(&self) -> Vec<&Piece> {
        let mut pieces: Vec<&Piece> = self.pieces.values().collect();
        pieces.sort_by_key(|piece| piece.pos);
        pieces
    }

    pub fn pieces_of(&self, owner: PlayerId) -> Vec<&Piece> {
        self.pieces()
            .into_iter()
            .filter(|piece| piece.owner == owner)
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.current_player
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current_player)
    }

    // ========================================================================
    // 開局設定
    // ========================================================================

    /// 設定格子（場景障礙物）
    ///
    /// 不可把有棋子站著的格子改成不可通行
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> Result<()> {
        if !self.is_valid_position(pos) {
            return Err(BoardError::OutOfBounds {
                pos,
                size: self.size,
            }
            .into());
        }
        if !tile.traversable && self.piece_map.get(pos).is_some() {
            return Err(BoardError::NotTraversable { pos }.into());
        }
        self.tiles[pos.row][pos.col] = tile;
        Ok(())
    }

    /// 放置新棋子，數值依種類預設
    pub fn place_piece(
        &mut self,
        piece_type: PieceType,
        owner: PlayerId,
        pos: Position,
    ) -> Result<PieceId> {
        if !self.is_valid_position(pos) {
            return Err(BoardError::OutOfBounds {
                pos,
                size: self.size,
            }
            .into());
        }
        if !self.is_traversable(pos) {
            return Err(BoardError::NotTraversable { pos }.into());
        }
        if let Some(occupant) = self.piece_map.get(pos) {
            return Err(BoardError::Occupied { pos, occupant }.into());
        }
        Ok(self.spawn(piece_type, owner, pos))
    }

    /// 調整棋子 HP（場景設定用），必須大於 0
    pub fn set_piece_hp(&mut self, id: PieceId, hp: Hp) -> Result<()> {
        if hp <= 0 {
            return Err(BoardError::InvalidHp { id, hp }.into());
        }
        let piece = self
            .pieces
            .get_mut(&id)
            .ok_or(BoardError::PieceNotFound { id })?;
        piece.hp = hp;
        Ok(())
    }

    /// 設定玩家狀態與目前回合（載入存檔用）
    pub(crate) fn restore_players(&mut self, players: [Player; 2], current_player: PlayerId) {
        self.players = players;
        self.current_player = current_player;
    }

    // 呼叫端需確保位置合法且為空格
    fn spawn(&mut self, piece_type: PieceType, owner: PlayerId, pos: Position) -> PieceId {
        let id = self.ids.issue();
        self.pieces
            .insert(id, Piece::new(id, piece_type, owner, pos));
        self.piece_map.insert(pos, id);
        id
    }

    // ========================================================================
    // 狀態改動（只供 battle 使用）
    // ========================================================================

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub(crate) fn set_current_player(&mut self, id: PlayerId) {
        self.current_player = id;
    }

    /// 把棋子移到空格，回傳原位置
    pub(crate) fn relocate(&mut self, id: PieceId, to: Position) -> Result<Position> {
        if let Some(occupant) = self.piece_map.get(to).filter(|&occupant| occupant != id) {
            return Err(BoardError::Occupied { pos: to, occupant }.into());
        }
        let piece = self
            .pieces
            .get_mut(&id)
            .ok_or(BoardError::PieceNotFound { id })?;
        let from = piece.pos;
        piece.pos = to;
        self.piece_map.relocate(id, from, to);
        Ok(from)
    }

    /// 從棋盤移除棋子
    pub(crate) fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        self.piece_map.remove(piece.pos);
        Some(piece)
    }
}
