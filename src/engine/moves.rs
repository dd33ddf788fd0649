// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `apply_move` / `undo_move` on the search context.

use super::MoveRejection;
use crate::context::SearchContext;
use crate::geometry::{Direction, Move};
use crate::state::MoveRecord;

impl SearchContext {
    /// Try to lay the next segment along `mv`.
    ///
    /// On success the new cells are occupied, the span and head are updated, a
    /// `MoveRecord` is pushed and the cursor advances. On rejection nothing changes.
    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveRejection> {
        let Self {
            chain, side, state, ..
        } = self;
        let axis = mv.axis;

        // A real fold always changes axis.
        if state.last_axis() == Some(axis) {
            return Err(MoveRejection::AxisRepeat);
        }

        let Some(length) = chain.get(state.cursor) else {
            return Err(MoveRejection::ChainExhausted);
        };
        // The first cell of the segment is the current head.
        let reach = length as i32 - 1;
        let limit = *side as i32 - 1;
        let start = state.head.get(axis);

        let span_delta = match mv.direction {
            Direction::Negative => {
                let min = start - reach;
                if min < state.span.max(axis) - limit {
                    return Err(MoveRejection::SpanOverflow);
                }
                (min - state.span.min(axis)).min(0)
            }
            Direction::Positive => {
                let max = start + reach;
                if max > state.span.min(axis) + limit {
                    return Err(MoveRejection::SpanOverflow);
                }
                (max - state.span.max(axis)).max(0)
            }
        };

        let mut cell = state.head;
        for _ in 0..reach {
            cell = cell.step(axis, mv.direction);
            if state.lattice.is_occupied(cell) {
                return Err(MoveRejection::Collision);
            }
        }

        // The move will succeed; start mutating.
        let mut cell = state.head;
        for _ in 0..reach {
            cell = cell.step(axis, mv.direction);
            state.lattice.occupy(cell);
        }
        state.span.extend(axis, span_delta);
        state.history.push(MoveRecord { mv, span_delta });
        state.head = cell;
        state.cursor += 1;

        Ok(())
    }

    /// Reverse the most recent successful `apply_move`, returning the move undone.
    ///
    /// # Panics
    ///
    /// Panics if no move has been applied. Undo must always be paired with a
    /// successful apply; an unpaired call is a bug in the caller.
    #[inline]
    pub fn undo_move(&mut self) -> Move {
        let Self { chain, state, .. } = self;
        let Some(record) = state.history.pop() else {
            panic!("undo_move called with an empty move history");
        };
        state.cursor -= 1;

        let reach = chain.length(state.cursor) as i32 - 1;
        let back = record.direction().reversed();
        let mut cell = state.head;
        for _ in 0..reach {
            state.lattice.release(cell);
            cell = cell.step(record.axis(), back);
        }
        state.head = cell;
        state.span.retract(record.axis(), record.span_delta);
        if state.history.len() < state.seeded {
            state.seeded = state.history.len();
        }

        record.mv
    }
}

#[cfg(test)]
mod tests {
    use crate::chain::Chain;
    use crate::context::SearchContext;
    use crate::engine::MoveRejection;
    use crate::geometry::{Axis, Coord, Direction, Move};

    const PX: Move = Move::new(Axis::X, Direction::Positive);
    const NX: Move = Move::new(Axis::X, Direction::Negative);
    const PY: Move = Move::new(Axis::Y, Direction::Positive);
    const NY: Move = Move::new(Axis::Y, Direction::Negative);
    const PZ: Move = Move::new(Axis::Z, Direction::Positive);

    fn context(segments: &[u32], side: usize) -> SearchContext {
        SearchContext::new(Chain::new(segments.to_vec()).unwrap(), side).unwrap()
    }

    #[test]
    fn test_l_shaped_fold() {
        let mut ctx = context(&[3, 2], 4);
        ctx.apply_move(PX).unwrap();
        for x in 0..3 {
            assert!(ctx.state.is_occupied(Coord::new(x, 0, 0)));
        }
        ctx.apply_move(PY).unwrap();
        assert!(ctx.state.is_occupied(Coord::new(2, 1, 0)));
        assert_eq!(ctx.state.occupied_cells(), 4);
        assert_eq!(ctx.state.head(), Coord::new(2, 1, 0));
        assert!(ctx.is_complete());

        let span = ctx.state.span();
        assert_eq!((span.min(Axis::X), span.max(Axis::X)), (0, 2));
        assert_eq!((span.min(Axis::Y), span.max(Axis::Y)), (0, 1));
        assert_eq!((span.min(Axis::Z), span.max(Axis::Z)), (0, 0));
    }

    #[test]
    fn test_span_delta_records_direction() {
        let mut ctx = context(&[3, 2, 4], 4);
        ctx.apply_move(PX).unwrap();
        ctx.apply_move(PY).unwrap();
        // From x=2, a length-4 segment along -x reaches x=-1: lowers the min by 1.
        ctx.apply_move(NX).unwrap();
        assert_eq!(ctx.state.history().last().unwrap().span_delta, -1);
        assert_eq!(ctx.state.span().min(Axis::X), -1);
        assert_eq!(ctx.state.span().extent(Axis::X), 3);

        assert_eq!(ctx.undo_move(), NX);
        assert_eq!(ctx.state.span().min(Axis::X), 0);
        // The previous move is +y again.
        assert_eq!(ctx.apply_move(NY), Err(MoveRejection::AxisRepeat));
    }

    #[test]
    fn test_rejects_axis_repeat() {
        let mut ctx = context(&[2, 2, 2], 4);
        ctx.apply_move(PX).unwrap();
        let before = ctx.state.clone();
        assert_eq!(ctx.apply_move(PX), Err(MoveRejection::AxisRepeat));
        assert_eq!(ctx.apply_move(NX), Err(MoveRejection::AxisRepeat));
        assert_eq!(ctx.state, before);
    }

    #[test]
    fn test_rejects_span_overflow() {
        let mut ctx = context(&[4, 2, 2], 4);
        ctx.apply_move(PX).unwrap();
        ctx.apply_move(PY).unwrap();
        let before = ctx.state.clone();
        // x already spans 0..=3; one more cell along +x needs a side of 5.
        assert_eq!(ctx.apply_move(PX), Err(MoveRejection::SpanOverflow));
        assert_eq!(ctx.state, before);
        // Going back along -x stays inside.
        ctx.apply_move(NX).unwrap();
        assert_eq!(ctx.state.span().min(Axis::X), 0);
    }

    #[test]
    fn test_rejects_collision() {
        let mut ctx = context(&[2, 2, 2, 2], 4);
        ctx.apply_move(PX).unwrap();
        ctx.apply_move(PY).unwrap();
        ctx.apply_move(NX).unwrap();
        let before = ctx.state.clone();
        // (0,1,0) -> (0,0,0) is the origin.
        assert_eq!(ctx.apply_move(NY), Err(MoveRejection::Collision));
        assert_eq!(ctx.state, before);
        ctx.apply_move(PZ).unwrap();
    }

    #[test]
    fn test_rejects_exhausted_chain() {
        let mut ctx = context(&[2], 4);
        ctx.apply_move(PX).unwrap();
        assert_eq!(ctx.apply_move(PY), Err(MoveRejection::ChainExhausted));
    }

    #[test]
    fn test_negative_move_lowers_min() {
        let mut ctx = context(&[2, 3, 2], 4);
        ctx.apply_move(PX).unwrap();
        ctx.apply_move(NY).unwrap();
        assert_eq!(ctx.state.span().min(Axis::Y), -2);
        assert_eq!(ctx.state.history().last().unwrap().span_delta, -2);
        ctx.apply_move(NX).unwrap();
        // x=0 is already inside the span.
        assert_eq!(ctx.state.history().last().unwrap().span_delta, 0);
        assert_eq!(ctx.state.head(), Coord::new(0, -2, 0));
    }

    #[test]
    fn test_undo_restores_state() {
        let mut ctx = context(&[3, 2, 3, 2], 4);
        let mut snapshots = vec![ctx.state.clone()];
        for mv in [PX, PY, NX, PZ] {
            ctx.apply_move(mv).unwrap();
            snapshots.push(ctx.state.clone());
        }
        snapshots.pop();
        for expected in [PZ, NX, PY, PX] {
            assert_eq!(ctx.undo_move(), expected);
            assert_eq!(&ctx.state, snapshots.last().unwrap());
            snapshots.pop();
        }
        assert_eq!(ctx.state.occupied_cells(), 1);
    }

    #[test]
    #[should_panic(expected = "empty move history")]
    fn test_undo_empty_history_panics() {
        let mut ctx = context(&[2, 2], 4);
        ctx.undo_move();
    }
}
