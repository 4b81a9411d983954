//! Error types for the rules engine
//!
//! 記法の不正・反則手・前提条件違反を区別する。
//! 反則手は通常の結果として `IllegalMove` で返し、前提条件違反は呼び出し側のバグとして扱う。

/// 反則手の理由
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalMove {
    #[error("no piece on the origin square")]
    EmptyOrigin,

    #[error("the piece does not belong to the side to move")]
    NotOwnPiece,

    #[error("the destination is not reachable by the piece")]
    Unreachable,

    #[error("the piece is not in hand")]
    NotInHand,

    #[error("this piece kind cannot be dropped")]
    NotDroppable,

    #[error("the drop square is occupied")]
    Occupied,

    #[error("the dropped piece would have no legal move from that rank")]
    DeadRank,

    #[error("an unpromoted pawn of the same side is already on that file")]
    TwoPawns,

    #[error("a pawn drop may not deliver checkmate")]
    DropPawnMate,

    #[error("the piece cannot promote")]
    CannotPromote,

    #[error("promotion requires the origin or destination inside the promotion zone")]
    OutsidePromotionZone,

    #[error("the move leaves the own king in check")]
    LeavesKingInCheck,
}

/// Errors reported by the rules engine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShogiError {
    /// 局面文字列が文法に合わない
    #[error("malformed position notation: {0}")]
    MalformedNotation(String),

    /// 指し手文字列が文法に合わない、または解決できない
    #[error("malformed move: {0}")]
    MalformedMove(String),

    /// 囲い・戦法の定義ファイルが読めない
    #[error("malformed formation book: {0}")]
    MalformedFormation(String),

    /// 文法上は正しいがルール上指せない手
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    /// 局面の不変条件に反する操作（存在しない持ち駒の削除など）
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// 合法性を確認していない手の適用
    #[error("illegal application: {0}")]
    IllegalApplication(String),
}

/// Result type for rules engine operations
pub type Result<T> = std::result::Result<T, ShogiError>;
