//! Base state and the pure advancement rules.
//!
//! Runners are tracked by lineup slot so speed checks, runs and stolen bases
//! are credited to the player actually on base. Every function here returns a
//! new `Advance`; the engine applies it.

use serde::{Deserialize, Serialize};

pub const FIRST: usize = 0;
pub const SECOND: usize = 1;
pub const THIRD: usize = 2;

/// Lineup slot occupying each base (1st, 2nd, 3rd).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bases {
    pub runners: [Option<usize>; 3],
}

/// Bases after a play plus the slots that crossed the plate, lead runner
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    pub bases: Bases,
    pub scored: Vec<usize>,
}

impl Advance {
    pub fn runs(&self) -> u32 {
        self.scored.len() as u32
    }
}

impl Bases {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_runners(first: Option<usize>, second: Option<usize>, third: Option<usize>) -> Self {
        Self { runners: [first, second, third] }
    }

    pub fn occupied(&self) -> [bool; 3] {
        [self.runners[0].is_some(), self.runners[1].is_some(), self.runners[2].is_some()]
    }

    #[inline]
    pub fn is_occupied(&self, base: usize) -> bool {
        self.runners[base].is_some()
    }

    #[inline]
    pub fn runner_on(&self, base: usize) -> Option<usize> {
        self.runners[base]
    }

    pub fn count(&self) -> usize {
        self.runners.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Walk / hit-by-pitch: the batter takes 1st and only runners in an
    /// unbroken chain behind him move up.
    pub fn force_advance(&self, batter: usize) -> Advance {
        let mut next = *self;
        let mut scored = Vec::new();

        if self.is_occupied(FIRST) {
            if self.is_occupied(SECOND) {
                if let Some(runner) = self.runner_on(THIRD) {
                    scored.push(runner);
                }
                next.runners[THIRD] = self.runners[SECOND];
            }
            next.runners[SECOND] = self.runners[FIRST];
        }
        next.runners[FIRST] = Some(batter);

        Advance { bases: next, scored }
    }

    /// Every runner moves exactly `num_bases`; the batter lands on
    /// `num_bases - 1` (or scores on 4).
    pub fn advance_all(&self, num_bases: usize, batter: usize) -> Advance {
        let mut next = Bases::empty();
        let mut scored = Vec::new();

        for base in (0..3).rev() {
            if let Some(runner) = self.runners[base] {
                let dest = base + num_bases;
                if dest >= 3 {
                    scored.push(runner);
                } else {
                    next.runners[dest] = Some(runner);
                }
            }
        }

        if num_bases >= 4 {
            scored.push(batter);
        } else if num_bases > 0 {
            next.runners[num_bases - 1] = Some(batter);
        }

        Advance { bases: next, scored }
    }

    /// Clears the bases; every runner and the batter score.
    pub fn home_run(&self, batter: usize) -> Advance {
        self.advance_all(4, batter)
    }

    /// Two-out single with a runner on 2nd. The runner from 3rd always scores,
    /// the runner from 2nd scores only if `runner_scores`, otherwise holds at
    /// 3rd.
    pub fn single_with_two_outs(&self, batter: usize, runner_scores: bool) -> Advance {
        let mut next = Bases::empty();
        let mut scored = Vec::new();

        if let Some(runner) = self.runner_on(THIRD) {
            scored.push(runner);
        }
        if let Some(runner) = self.runner_on(SECOND) {
            if runner_scores {
                scored.push(runner);
            } else {
                next.runners[THIRD] = Some(runner);
            }
        }
        next.runners[SECOND] = self.runners[FIRST];
        next.runners[FIRST] = Some(batter);

        Advance { bases: next, scored }
    }

    /// Double with a runner on 1st. Runners on 2nd and 3rd always score; the
    /// runner from 1st scores only if `runner_scores`, otherwise holds at 3rd.
    pub fn double_with_runner_on_first(&self, batter: usize, runner_scores: bool) -> Advance {
        let mut next = Bases::empty();
        let mut scored = Vec::new();

        if let Some(runner) = self.runner_on(THIRD) {
            scored.push(runner);
        }
        if let Some(runner) = self.runner_on(SECOND) {
            scored.push(runner);
        }
        if let Some(runner) = self.runner_on(FIRST) {
            if runner_scores {
                scored.push(runner);
            } else {
                next.runners[THIRD] = Some(runner);
            }
        }
        next.runners[SECOND] = Some(batter);

        Advance { bases: next, scored }
    }

    /// Successful hit-and-run: runners take two bases, the batter singles.
    pub fn hit_and_run(&self, batter: usize) -> Advance {
        let mut advance = self.advance_all(2, batter);
        advance.bases.runners[SECOND] = None;
        advance.bases.runners[FIRST] = Some(batter);
        // A runner from 1st lands on 3rd; nobody else can occupy 2nd.
        advance
    }

    /// Sacrifice: every runner moves up one base, the batter is out.
    pub fn sacrifice(&self) -> Advance {
        let mut next = Bases::empty();
        let mut scored = Vec::new();
        if let Some(runner) = self.runner_on(THIRD) {
            scored.push(runner);
        }
        next.runners[THIRD] = self.runners[SECOND];
        next.runners[SECOND] = self.runners[FIRST];
        Advance { bases: next, scored }
    }

    /// Remove the runner on `base`, returning the slot.
    pub fn erase(&mut self, base: usize) -> Option<usize> {
        self.runners[base].take()
    }

    /// Move the runner on `from` to `to` (caller guarantees `to` is free).
    pub fn move_runner(&mut self, from: usize, to: usize) {
        self.runners[to] = self.runners[from].take();
    }

    /// "1st, 3rd" style description.
    pub fn describe(&self) -> String {
        const NAMES: [&str; 3] = ["1st", "2nd", "3rd"];
        let occupied: Vec<&str> =
            (0..3).filter(|&b| self.is_occupied(b)).map(|b| NAMES[b]).collect();
        if occupied.is_empty() {
            "bases empty".to_string()
        } else {
            occupied.join(", ")
        }
    }
}
