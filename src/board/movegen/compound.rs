use super::super::{Board, Coord, Piece, PieceType};

/// The variants whose union makes up a compound piece.
pub(crate) const fn components(kind: PieceType) -> &'static [PieceType] {
    match kind {
        PieceType::Wildebeest => &[PieceType::Knight, PieceType::Camel],
        PieceType::Wamazon => &[PieceType::Rook, PieceType::Bishop, PieceType::Wildebeest],
        PieceType::Queen => &[PieceType::Rook, PieceType::Bishop],
        PieceType::Chancellor => &[PieceType::Rook, PieceType::Knight],
        PieceType::Archbishop => &[PieceType::Bishop, PieceType::Knight],
        _ => &[],
    }
}

/// Legal iff any component, standing on the same square with the same
/// color, could make the move.
pub(super) fn reaches(piece: &Piece, board: &Board, to: Coord) -> bool {
    components(piece.kind())
        .iter()
        .any(|&kind| piece.as_kind(kind).reaches(board, to))
}
