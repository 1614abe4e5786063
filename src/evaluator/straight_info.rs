use crate::cards::Rank;

/// Straight detection over sorted ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Highest rank of the run (kept for debugging and tests; the grouped
    /// tie-break sequence already ends with it)
    #[allow(dead_code)]
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Raw-difference rule: five distinct ranks spanning exactly four steps.
    /// The ace only plays high, so A-2-3-4-5 is not a straight here.
    ///
    /// Input ranks must be sorted descending.
    pub fn detect(ranks_desc: &[Rank; 5]) -> Self {
        let distinct = ranks_desc.windows(2).all(|pair| pair[0] != pair[1]);
        let span = ranks_desc[0].value() - ranks_desc[4].value();

        if distinct && span == 4 {
            StraightInfo { is_straight: true, top_rank: Some(ranks_desc[0]) }
        } else {
            StraightInfo { is_straight: false, top_rank: None }
        }
    }
}
