//! battle.rs：
//! - 負責回合管理（能量、換手）與戰鬥結算（傷害、死亡、近戰佔位）。
//! - 移動與攻擊的幾何合法性交給 `logic::movement` / `logic::attack`，
//!   此處只組合棋盤層級的檢查（邊界、回合、可通行、佔據、能量、友軍）。
//! - 任何檢查失敗都回傳 `ActionError`，棋盤狀態保持不變。

use crate::board::Board;
use crate::component::{Piece, PieceId};
use crate::domain::alias::Hp;
use crate::domain::core_types::{PlayerId, Position};
use crate::error::ActionError;
use crate::logic::attack::attack_allows;
use crate::logic::geometry::chebyshev_distance;
use crate::logic::movement::movement_allows;
use tracing::{debug, info};

/// 攻擊結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub target: PieceId,
    pub damage: Hp,
    pub remaining_hp: Hp,
    pub died: bool,
    /// 近戰擊殺後攻擊者是否移入目標格
    pub attacker_advanced: bool,
}

/// 選取棋子時，某格可進行的動作（供畫面標示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Move,
    Attack,
    MoveAndAttack,
}

impl Highlight {
    fn from_flags(can_move: bool, can_attack: bool) -> Self {
        match (can_move, can_attack) {
            (true, true) => Highlight::MoveAndAttack,
            (true, false) => Highlight::Move,
            (false, true) => Highlight::Attack,
            (false, false) => Highlight::None,
        }
    }
}

impl Board {
    // ========================================================================
    // 移動
    // ========================================================================

    /// 檢查移動是否合法（不改動狀態）
    pub fn check_move(&self, id: PieceId, to: Position) -> Result<&Piece, ActionError> {
        let piece = self.piece(id).ok_or(ActionError::NoSuchPiece { id })?;
        if !self.is_valid_position(to) {
            return Err(ActionError::OutOfBounds { pos: to });
        }
        if piece.pos == to {
            return Err(ActionError::SamePosition { pos: to });
        }
        self.check_turn(piece)?;
        if self.piece_at(to).is_some_and(|occupant| occupant.id != id) {
            return Err(ActionError::Occupied { pos: to });
        }
        if !self.is_traversable(to) {
            return Err(ActionError::NotTraversable { pos: to });
        }
        let distance = chebyshev_distance(piece.pos, to);
        if distance > piece.movement_range {
            return Err(ActionError::OutOfMovementRange {
                distance,
                range: piece.movement_range,
            });
        }
        if !movement_allows(piece, to, |pos| self.occupant_owner(pos)) {
            return Err(ActionError::MoveRejected { pos: to });
        }
        self.check_energy()?;
        Ok(piece)
    }

    pub fn can_move(&self, id: PieceId, to: Position) -> bool {
        self.check_move(id, to).is_ok()
    }

    /// 移動棋子，成功時消耗 1 點能量
    pub fn move_piece(&mut self, id: PieceId, to: Position) -> Result<(), ActionError> {
        if let Err(err) = self.check_move(id, to) {
            debug!(%id, %to, %err, "移動被拒絕");
            return Err(err);
        }

        let from = self
            .relocate(id, to)
            .map_err(|_| ActionError::Occupied { pos: to })?;
        let player = self.current_player_id();
        self.player_mut(player).energy -= 1;
        debug!(%id, %from, %to, %player, "移動棋子");
        Ok(())
    }

    // ========================================================================
    // 攻擊
    // ========================================================================

    /// 檢查攻擊是否合法（不改動狀態），回傳攻擊者與目標
    pub fn check_attack(
        &self,
        attacker_id: PieceId,
        target_pos: Position,
    ) -> Result<(&Piece, &Piece), ActionError> {
        let attacker = self
            .piece(attacker_id)
            .ok_or(ActionError::NoSuchPiece { id: attacker_id })?;
        self.check_turn(attacker)?;
        self.check_energy()?;
        if !self.is_valid_position(target_pos) {
            return Err(ActionError::OutOfBounds { pos: target_pos });
        }
        let target = self
            .piece_at(target_pos)
            .ok_or(ActionError::NoTarget { pos: target_pos })?;
        if !attack_allows(attacker, target_pos, |pos| self.occupant_owner(pos)) {
            return Err(ActionError::AttackRejected { pos: target_pos });
        }
        // 騎士等策略不檢查歸屬，友軍判定一律在此
        if target.owner == attacker.owner {
            return Err(ActionError::FriendlyFire { pos: target_pos });
        }
        Ok((attacker, target))
    }

    pub fn can_attack(&self, attacker_id: PieceId, target_pos: Position) -> bool {
        self.check_attack(attacker_id, target_pos).is_ok()
    }

    /// 攻擊目標格的棋子，成功時消耗 1 點能量
    ///
    /// 目標 HP 歸零即移除；攻擊者非遠程時移入目標格。
    pub fn attack(
        &mut self,
        attacker_id: PieceId,
        target_pos: Position,
    ) -> Result<AttackOutcome, ActionError> {
        let (damage, is_ranged, target_id) = match self.check_attack(attacker_id, target_pos) {
            Ok((attacker, target)) => (attacker.attack_damage, attacker.is_ranged, target.id),
            Err(err) => {
                debug!(attacker = %attacker_id, defender = %target_pos, %err, "攻擊被拒絕");
                return Err(err);
            }
        };

        let remaining_hp = match self.piece_mut(target_id) {
            Some(target) => target.take_damage(damage),
            None => return Err(ActionError::NoTarget { pos: target_pos }),
        };

        let died = remaining_hp == 0;
        let mut attacker_advanced = false;
        if died {
            self.remove_piece(target_id);
            if !is_ranged {
                // 目標格剛清空且攻擊者仍在棋盤上，搬移必定成功
                let advanced = self.relocate(attacker_id, target_pos);
                debug_assert!(advanced.is_ok(), "近戰擊殺後無法移入目標格: {advanced:?}");
                attacker_advanced = advanced.is_ok();
            }
            info!(
                attacker = %attacker_id,
                defender = %target_id,
                pos = %target_pos,
                attacker_advanced,
                "擊殺棋子"
            );
        } else {
            debug!(
                attacker = %attacker_id,
                defender = %target_id,
                damage,
                remaining_hp,
                "攻擊命中"
            );
        }

        let player = self.current_player_id();
        self.player_mut(player).energy -= 1;

        Ok(AttackOutcome {
            target: target_id,
            damage,
            remaining_hp,
            died,
            attacker_advanced,
        })
    }

    // ========================================================================
    // 回合
    // ========================================================================

    /// 結束回合：換手，並把新玩家的能量重設為起始值
    pub fn end_turn(&mut self) -> PlayerId {
        let next = self.current_player_id().other();
        self.set_current_player(next);
        let player = self.player_mut(next);
        player.energy = player.starting_energy();
        info!(player = %next, energy = player.energy, "回合開始");
        next
    }

    // ========================================================================
    // 畫面標示
    // ========================================================================

    /// 選取棋子時某格的標示
    ///
    /// 只看幾何：略過自身與不可通行格，有策略用策略，否則只看距離；
    /// 不檢查回合與能量。
    pub fn highlight(&self, id: PieceId, pos: Position) -> Highlight {
        let Some(piece) = self.piece(id) else {
            return Highlight::None;
        };
        if pos == piece.pos || !self.is_traversable(pos) {
            return Highlight::None;
        }
        let get_occupant = |p: Position| self.occupant_owner(p);
        Highlight::from_flags(
            movement_allows(piece, pos, get_occupant),
            attack_allows(piece, pos, get_occupant),
        )
    }

    /// 所有需要標示的格子
    pub fn highlights(&self, id: PieceId) -> Vec<(Position, Highlight)> {
        self.positions()
            .map(|pos| (pos, self.highlight(id, pos)))
            .filter(|(_, highlight)| *highlight != Highlight::None)
            .collect()
    }

    fn check_turn(&self, piece: &Piece) -> Result<(), ActionError> {
        let current = self.current_player_id();
        if piece.owner != current {
            return Err(ActionError::NotYourTurn {
                owner: piece.owner,
                current,
            });
        }
        Ok(())
    }

    fn check_energy(&self) -> Result<(), ActionError> {
        if !self.current_player().has_energy() {
            return Err(ActionError::NoEnergy {
                player: self.current_player_id(),
            });
        }
        Ok(())
    }
}
