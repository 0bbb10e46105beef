use crate::blob::BlobStore;
use crate::error::StoreError;
use crate::observer::{Observers, Subscription};
use crate::persistence::Persistence;
use declog_core::decision::DecisionUpdate;
use declog_core::{validate_decision, CoreError, Decision, DecisionData, EvaluationResult, Status};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// View-level status predicate. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Executed,
    Evaluated,
}

impl Filter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == Status::Pending,
            Self::Executed => status == Status::Executed,
            Self::Evaluated => status == Status::Evaluated,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Pending => f.write_str("PENDING"),
            Self::Executed => f.write_str("EXECUTED"),
            Self::Evaluated => f.write_str("EVALUATED"),
        }
    }
}

impl FromStr for Filter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Ok(match s.parse::<Status>()? {
            Status::Pending => Self::Pending,
            Status::Executed => Self::Executed,
            Status::Evaluated => Self::Evaluated,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub executed: usize,
    pub evaluated: usize,
}

/// Snapshot handed to observers on every change.
#[derive(Debug, Default)]
pub struct State {
    /// Most recent first.
    pub decisions: Vec<Decision>,
    pub filter: Filter,
}

/// The single authority over the decision collection.
///
/// Every mutation runs as: change the collection, persist it, notify
/// observers. If persisting fails the collection is rolled back, observers
/// are not notified and the error is returned.
pub struct Store<B> {
    state: State,
    persistence: Persistence<B>,
    observers: Observers<State>,
}

impl<B: BlobStore> Store<B> {
    /// Open a store over `blobs`, loading whatever collection is persisted.
    pub fn new(blobs: B) -> Self {
        let persistence = Persistence::new(blobs);
        let decisions: Vec<Decision> = persistence
            .load()
            .into_iter()
            .map(Decision::from_data)
            .collect();
        tracing::debug!(count = decisions.len(), "loaded decisions");
        Self {
            state: State {
                decisions,
                filter: Filter::All,
            },
            persistence,
            observers: Observers::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }

    /// Register a change callback. It is invoked immediately with the
    /// current state, then after every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&State) + 'static) -> Subscription {
        self.observers.subscribe(&self.state, callback)
    }

    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        self.observers.unsubscribe(handle)
    }

    /// Decisions matching the current filter, in collection order.
    pub fn decisions(&self) -> Vec<&Decision> {
        let filter = self.state.filter;
        self.state
            .decisions
            .iter()
            .filter(|d| filter.matches(d.status()))
            .collect()
    }

    pub fn decision(&self, id: &str) -> Option<&Decision> {
        self.state.decisions.iter().find(|d| d.id() == id)
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.state
            .decisions
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Persist the current collection, restoring `previous` on failure.
    fn commit(&mut self, previous: Vec<Decision>) -> Result<(), StoreError> {
        if let Err(e) = self.persistence.save(&self.state.decisions) {
            self.state.decisions = previous;
            return Err(e);
        }
        self.observers.notify(&self.state);
        Ok(())
    }

    /// Create a decision from `data` and insert it first.
    pub fn add_decision(&mut self, data: DecisionData) -> Result<Decision, StoreError> {
        let decision = Decision::from_data(data);
        let previous = self.state.decisions.clone();
        self.state.decisions.insert(0, decision.clone());
        self.commit(previous)?;
        tracing::debug!(id = decision.id(), "added decision");
        Ok(decision)
    }

    /// Merge `update` into a decision. The merged record is validated first;
    /// an invalid result is rejected without applying anything.
    pub fn update_decision(
        &mut self,
        id: &str,
        update: DecisionUpdate,
    ) -> Result<Decision, StoreError> {
        let index = self.position(id)?;
        let errors = validate_decision(&self.state.decisions[index].merged(&update));
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }
        let previous = self.state.decisions.clone();
        self.state.decisions[index].apply(update);
        self.commit(previous)?;
        tracing::debug!(id, "updated decision");
        Ok(self.state.decisions[index].clone())
    }

    pub fn delete_decision(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self.position(id)?;
        let previous = self.state.decisions.clone();
        self.state.decisions.remove(index);
        self.commit(previous)?;
        tracing::debug!(id, "deleted decision");
        Ok(())
    }

    pub fn mark_as_executed(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self.position(id)?;
        let previous = self.state.decisions.clone();
        self.state.decisions[index].mark_as_executed()?;
        self.commit(previous)?;
        tracing::debug!(id, "decision executed");
        Ok(())
    }

    pub fn evaluate_decision(
        &mut self,
        id: &str,
        result: EvaluationResult,
        learnings: impl Into<String>,
    ) -> Result<(), StoreError> {
        let index = self.position(id)?;
        let previous = self.state.decisions.clone();
        self.state.decisions[index].evaluate(result, learnings)?;
        self.commit(previous)?;
        tracing::debug!(id, %result, "decision evaluated");
        Ok(())
    }

    /// Change the current filter. Filters are not persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
        self.observers.notify(&self.state);
    }

    pub fn filter(&self) -> Filter {
        self.state.filter
    }

    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            total: self.state.decisions.len(),
            ..Stats::default()
        };
        for d in &self.state.decisions {
            match d.status() {
                Status::Pending => stats.pending += 1,
                Status::Executed => stats.executed += 1,
                Status::Evaluated => stats.evaluated += 1,
            }
        }
        stats
    }

    /// Drop every decision, in memory and in storage.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.persistence.clear()?;
        let removed = std::mem::take(&mut self.state.decisions).len();
        self.observers.notify(&self.state);
        tracing::debug!(removed, "cleared journal");
        Ok(())
    }
}
