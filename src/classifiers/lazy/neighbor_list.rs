/// Ascending-sorted bounded list of `(distance, item)` pairs.
///
/// The list keeps at least `k` entries and never cuts inside a run of tied
/// distances: every entry tied with the k-th smallest distance is retained,
/// so the final length may exceed `k`.
pub(crate) struct NeighborList<T> {
    k: usize,
    entries: Vec<(usize, T)>,
}

impl<T> NeighborList<T> {
    pub fn new(k: usize) -> NeighborList<T> {
        NeighborList {
            k: k.max(1),
            entries: Vec::new(),
        }
    }

    /// Offers a candidate. Candidates strictly farther than the current worst
    /// kept distance are dropped once the list already holds `k` entries;
    /// anything at or below the worst kept distance is inserted in order.
    pub fn consider(&mut self, distance: usize, item: T) {
        if self.entries.len() >= self.k {
            let worst = self.entries[self.entries.len() - 1].0;
            if distance > worst {
                return;
            }
        }
        let position = self.entries.partition_point(|entry| entry.0 <= distance);
        self.entries.insert(position, (distance, item));
        self.truncate_at_tie_boundary();
    }

    /// Drops the tail once `k` entries are kept and the k-th entry is not
    /// tied with its successor.
    fn truncate_at_tie_boundary(&mut self) {
        if self.entries.len() <= self.k {
            return;
        }
        let mut cut = self.k;
        while cut < self.entries.len() && self.entries[cut].0 == self.entries[cut - 1].0 {
            cut += 1;
        }
        self.entries.truncate(cut);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &(usize, T)> {
        self.entries.iter()
    }
}
