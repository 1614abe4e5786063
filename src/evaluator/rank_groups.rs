use crate::cards::Rank;

/// Rank groups of a 5-card hand, stored ascending by (group size, rank).
///
/// Singleton kickers come first, the largest/highest group last, so the last
/// entry is always the decisive group of the hand. The stored order is also
/// the order tie-break sequences are read in.
///
/// Example: AAAKQ groups as [(Queen, 1), (King, 1), (Ace, 3)].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build groups from a fixed rank count array indexed by `Rank::value()`.
    pub fn from_counts(rank_counts: &[u8; 13]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        // Stable sort by size; equal sizes keep the rank-ascending scan order.
        groups.sort_by_key(|&(_, count)| count);

        Self { groups }
    }

    /// Rank of the four-of-a-kind group, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.find_size(4)
    }

    /// Rank of the three-of-a-kind group, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.find_size(3)
    }

    /// Number of groups of exactly two cards.
    pub fn pair_count(&self) -> usize {
        self.groups.iter().filter(|(_, count)| *count == 2).count()
    }

    /// True when the hand splits into a size-3 and a size-2 group.
    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.pair_count() == 1
    }

    /// Rank of the last stored group: the largest, or among equals the
    /// highest. A hand always has at least one group.
    pub fn top_rank(&self) -> Rank {
        self.groups[self.groups.len() - 1].0
    }

    /// One Rank per group in stored order: the tie-break sequence for every
    /// category except HighCard.
    pub fn group_ranks(&self) -> Vec<Rank> {
        self.groups.iter().map(|(rank, _)| *rank).collect()
    }

    fn find_size(&self, size: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == size).map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
