//! Per-run and per-batch results.

use gw_agent::{AgentState, MoveHistory};

/// Final snapshot of one finished (or interrupted) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Total simulated transit time.
    pub cur_t: u64,
    /// Portion of `cur_t` spent at stoplights.
    pub time_waiting: u64,
    /// Number of steps taken; equals `history.len()`.
    pub steps: usize,
    /// One entry per step, `true` for vertical moves.
    pub history: MoveHistory,
}

impl From<&AgentState> for RunSummary {
    fn from(agent: &AgentState) -> Self {
        Self {
            cur_t:        agent.cur_t,
            time_waiting: agent.time_waiting,
            steps:        agent.history.len(),
            history:      agent.history.clone(),
        }
    }
}

impl From<AgentState> for RunSummary {
    fn from(agent: AgentState) -> Self {
        Self {
            cur_t:        agent.cur_t,
            time_waiting: agent.time_waiting,
            steps:        agent.history.len(),
            history:      agent.history,
        }
    }
}

/// Aggregate of many independent runs.
///
/// Built by folding [`RunSummary`]s with [`add`](Self::add) and combining
/// partial results with [`merge`](Self::merge); the empty summary is the
/// identity for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub runs:          u64,
    pub total_time:    u64,
    pub total_waiting: u64,
    pub min_time:      u64,
    pub max_time:      u64,
    pub min_waiting:   u64,
    pub max_waiting:   u64,
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self {
            runs:          0,
            total_time:    0,
            total_waiting: 0,
            min_time:      u64::MAX,
            max_time:      0,
            min_waiting:   u64::MAX,
            max_waiting:   0,
        }
    }
}

impl BatchSummary {
    /// Fold one run into the aggregate.
    pub fn add(mut self, run: &RunSummary) -> Self {
        self.runs          += 1;
        self.total_time    += run.cur_t;
        self.total_waiting += run.time_waiting;
        self.min_time       = self.min_time.min(run.cur_t);
        self.max_time       = self.max_time.max(run.cur_t);
        self.min_waiting    = self.min_waiting.min(run.time_waiting);
        self.max_waiting    = self.max_waiting.max(run.time_waiting);
        self
    }

    /// Combine two partial aggregates.
    pub fn merge(self, other: BatchSummary) -> Self {
        Self {
            runs:          self.runs + other.runs,
            total_time:    self.total_time + other.total_time,
            total_waiting: self.total_waiting + other.total_waiting,
            min_time:      self.min_time.min(other.min_time),
            max_time:      self.max_time.max(other.max_time),
            min_waiting:   self.min_waiting.min(other.min_waiting),
            max_waiting:   self.max_waiting.max(other.max_waiting),
        }
    }

    /// Mean transit time, or `0.0` for an empty batch.
    pub fn mean_time(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_time as f64 / self.runs as f64
    }

    /// Mean waiting time, or `0.0` for an empty batch.
    pub fn mean_waiting(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_waiting as f64 / self.runs as f64
    }
}
