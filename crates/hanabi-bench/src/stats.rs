use std::fmt;

use hanabi_core::game::session::Outcome;
use serde::Serialize;

/// One finished game, as the runner recorded it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameStat {
    pub outcome: Outcome,
    pub score: usize,
    pub lives: u8,
    pub clues: u8,
    pub turns: usize,
}

/// Min/mean/max of one metric.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Spread {
    pub min: usize,
    pub mean: f64,
    pub max: usize,
}

impl Spread {
    fn of(values: &[usize]) -> Spread {
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        let mean = values.iter().sum::<usize>() as f64 / values.len() as f64;
        Spread { min, mean, max }
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min {} mean {:.1} max {}", self.min, self.mean, self.max)
    }
}

/// Aggregate over the games that ended in one outcome class. Spreads
/// are taken over the class itself, not the whole run, so one lucky
/// win reads as its own score rather than being diluted across every
/// loss.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassSummary {
    pub count: usize,
    pub scores: Spread,
    pub lives: Spread,
    pub clues: Spread,
    pub turns: Spread,
}

impl ClassSummary {
    fn of(stats: &[GameStat], outcome: Outcome) -> Option<ClassSummary> {
        let class: Vec<GameStat> = stats
            .iter()
            .filter(|s| s.outcome == outcome)
            .copied()
            .collect();
        if class.is_empty() {
            return None;
        }
        let metric =
            |f: fn(&GameStat) -> usize| Spread::of(&class.iter().map(f).collect::<Vec<usize>>());
        Some(ClassSummary {
            count: class.len(),
            scores: metric(|s| s.score),
            lives: metric(|s| usize::from(s.lives)),
            clues: metric(|s| usize::from(s.clues)),
            turns: metric(|s| s.turns),
        })
    }
}

/// Aggregate of a whole run, partitioned by how each game ended.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub games: usize,
    pub won: Option<ClassSummary>,
    pub completed: Option<ClassSummary>,
    pub lost: Option<ClassSummary>,
}

impl RunSummary {
    pub fn from_stats(stats: &[GameStat]) -> RunSummary {
        RunSummary {
            games: stats.len(),
            won: ClassSummary::of(stats, Outcome::Won),
            completed: ClassSummary::of(stats, Outcome::Completed),
            lost: ClassSummary::of(stats, Outcome::Lost),
        }
    }

    fn percent(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.games as f64
        }
    }

    fn write_class(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        class: &Option<ClassSummary>,
    ) -> fmt::Result {
        let Some(class) = class else {
            return Ok(());
        };
        writeln!(
            f,
            "  {label} ({} game{}, {:.1}%):",
            class.count,
            if class.count == 1 { "" } else { "s" },
            self.percent(class.count),
        )?;
        writeln!(f, "    score: {}", class.scores)?;
        writeln!(f, "    lives: {}", class.lives)?;
        writeln!(f, "    clues: {}", class.clues)?;
        writeln!(f, "    turns: {}", class.turns)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = |class: &Option<ClassSummary>| class.map_or(0, |c| c.count);
        writeln!(
            f,
            "{} games: {} won, {} completed, {} lost",
            self.games,
            count(&self.won),
            count(&self.completed),
            count(&self.lost),
        )?;
        self.write_class(f, "won", &self.won)?;
        self.write_class(f, "completed", &self.completed)?;
        self.write_class(f, "lost", &self.lost)
    }
}
