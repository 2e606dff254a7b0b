// src/table.rs
//
// Standings grid: one column per played matchday, one row per rank.
// Column-major because that is how the scraper produces it (matchday by
// matchday) and how trajectories are read back out.

/// Team-at-position per matchday. Matchdays are 1-based and contiguous;
/// positions are 0-based (0 = first place). Every column holds the same
/// number of teams and, on well-formed input, the same team set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StandingsTable {
    matchdays: Vec<Vec<String>>,
}

impl StandingsTable {
    pub fn new() -> Self {
        Self { matchdays: Vec::new() }
    }

    pub fn from_columns(matchdays: Vec<Vec<String>>) -> Self {
        Self { matchdays }
    }

    pub fn num_matchdays(&self) -> usize {
        self.matchdays.len()
    }

    pub fn num_teams(&self) -> usize {
        self.matchdays.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.matchdays.is_empty()
    }

    /// Ranking after matchday `m` (1-based).
    pub fn matchday(&self, m: usize) -> Option<&[String]> {
        if m == 0 {
            return None;
        }
        self.matchdays.get(m - 1).map(|c| c.as_slice())
    }

    /// Append the ranking of the next matchday.
    pub fn push_matchday(&mut self, teams: Vec<String>) {
        self.matchdays.push(teams);
    }

    /// Team names in the order of the latest matchday. Empty when no
    /// matchday has been played.
    pub fn team_names(&self) -> &[String] {
        self.matchdays.last().map(|c| c.as_slice()).unwrap_or(&[])
    }

    /// Ordered (matchday, position) pairs for one team; one entry per
    /// matchday the team appears in.
    pub fn trajectory(&self, team: &str) -> Vec<(usize, usize)> {
        let mut coords = Vec::with_capacity(self.matchdays.len());
        for (m, column) in self.matchdays.iter().enumerate() {
            if let Some(pos) = column.iter().position(|t| t == team) {
                coords.push((m + 1, pos));
            }
        }
        coords
    }

    /// Every column holds exactly the teams of matchday 1.
    pub fn is_consistent(&self) -> bool {
        let Some(first) = self.matchdays.first() else {
            return true;
        };
        let mut reference: Vec<&String> = first.iter().collect();
        reference.sort();
        self.matchdays.iter().all(|column| {
            let mut sorted: Vec<&String> = column.iter().collect();
            sorted.sort();
            sorted == reference
        })
    }

    /// Row-major view: for each rank, the team holding it per matchday.
    /// This is the export orientation (rank rows, matchday columns).
    pub fn rows(&self) -> Vec<Vec<String>> {
        let teams = self.num_teams();
        let mut rows = Vec::with_capacity(teams);
        for pos in 0..teams {
            let row = self
                .matchdays
                .iter()
                .map(|column| column.get(pos).cloned().unwrap_or_default())
                .collect();
            rows.push(row);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StandingsTable {
        StandingsTable::from_columns(vec![
            vec![s!("A"), s!("B"), s!("C")],
            vec![s!("B"), s!("A"), s!("C")],
            vec![s!("B"), s!("C"), s!("A")],
        ])
    }

    #[test]
    fn trajectory_has_one_entry_per_matchday() {
        let t = table();
        assert_eq!(t.trajectory("A"), vec![(1, 0), (2, 1), (3, 2)]);
        assert_eq!(t.trajectory("C"), vec![(1, 2), (2, 2), (3, 1)]);
    }

    #[test]
    fn team_names_follow_latest_matchday() {
        assert_eq!(table().team_names(), &[s!("B"), s!("C"), s!("A")]);
        assert!(StandingsTable::new().team_names().is_empty());
    }

    #[test]
    fn consistency_check_spots_foreign_team() {
        assert!(table().is_consistent());
        let mut t = table();
        t.push_matchday(vec![s!("A"), s!("B"), s!("X")]);
        assert!(!t.is_consistent());
    }

    #[test]
    fn rows_transpose_columns() {
        let rows = table().rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![s!("A"), s!("B"), s!("B")]);
        assert_eq!(rows[2], vec![s!("C"), s!("C"), s!("A")]);
    }
}
