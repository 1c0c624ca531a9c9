use crate::{board::Board, movegen::generate_into, types::{Action, Side}};

/// Action-tree node count.
/// Counts the leaves reached by playing `depth` actions with the sides
/// alternating every ply and traps resolved after each action, the same tree
/// the search walks.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, side: Side, depth: u8, layers: &mut [Vec<Action>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        buf.clear();
        generate_into(board, side, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut child = board.apply(mv);
            child.resolve_traps();
            nodes += inner(&child, side.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, side, depth, &mut layers[..])
}

/// Per-action leaf counts at the root, in generator order.
pub fn perft_divide(board: &Board, side: Side, depth: u8) -> Vec<(Action, u64)> {
    let mut moves = Vec::new();
    generate_into(board, side, &mut moves);
    moves
        .into_iter()
        .map(|mv| {
            let mut child = board.apply(mv);
            child.resolve_traps();
            (mv, perft(&child, side.other(), depth.saturating_sub(1)))
        })
        .collect()
}
