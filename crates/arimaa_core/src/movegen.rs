use crate::{board::Board, types::*};

/// Generate every action available to `side`, returning a fresh vector.
///
/// Order is deterministic: origins row-major, then per origin its steps,
/// pushes and pulls, each enumerated in `Direction::ALL` order. Search relies
/// on this order for tie-breaking.
pub fn generate(board: &Board, side: Side) -> Vec<Action> {
    let mut out = Vec::with_capacity(64);
    generate_into(board, side, &mut out);
    out
}

/// Generate into the provided buffer, reusing it across calls.
pub fn generate_into(board: &Board, side: Side, out: &mut Vec<Action>) {
    out.clear();
    for (from, pc) in board.pieces() {
        if pc.side != side || board.is_frozen(from) {
            continue;
        }
        gen_steps(board, from, pc, out);
        gen_displacements(board, from, pc, out);
    }
}

/// Like `generate`, minus actions that cost more than `steps_remaining`.
pub fn generate_within(board: &Board, side: Side, steps_remaining: u8) -> Vec<Action> {
    let mut out = generate(board, side);
    out.retain(|a| a.cost() <= steps_remaining);
    out
}

pub fn has_any_action(board: &Board, side: Side) -> bool {
    let mut buf = Vec::with_capacity(16);
    generate_into(board, side, &mut buf);
    !buf.is_empty()
}

/// True if moving `piece` from `from` to `to` is a rabbit retreating toward
/// its own home edge.
pub fn rabbit_retreats(piece: Piece, from: Pos, to: Pos) -> bool {
    piece.is_rabbit() && to.row - from.row == -piece.side.forward()
}

fn gen_steps(board: &Board, from: Pos, pc: Piece, out: &mut Vec<Action>) {
    for to in Board::neighbors(from) {
        if board.is_vacant(to) && !rabbit_retreats(pc, from, to) {
            out.push(Action::step(from, to));
        }
    }
}

fn gen_displacements(board: &Board, from: Pos, pc: Piece, out: &mut Vec<Action>) {
    for victim in Board::neighbors(from) {
        let Some(enemy) = board.piece_at(victim) else {
            continue;
        };
        if !pc.dominates(enemy) {
            continue;
        }
        // The mover's own square is occupied, so `is_vacant` excludes it.
        for dest in Board::neighbors(victim) {
            if board.is_vacant(dest) {
                out.push(Action::push(from, victim, dest));
            }
        }
        for dest in Board::neighbors(from) {
            if board.is_vacant(dest) {
                out.push(Action::pull(from, victim, dest));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
