//! Side-by-side comparison of the three policies.

use std::fmt;
use std::thread;

use tracing::debug;

use crate::common::{Result, SimConfig};
use crate::simulator::{Policy, Simulation};

/// One policy's outcome within a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyResult<P> {
    pub policy: Policy,
    pub simulation: Simulation<P>,
}

/// Every policy run over the same reference string and frame count.
///
/// Results are kept in [`Policy::ALL`] order whether the runs were
/// sequential or parallel.
///
/// # Example
/// ```
/// use pagesim::{Comparison, Policy, SimConfig};
///
/// let pages = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
/// let cmp = Comparison::run(&pages, &SimConfig::new(3).unwrap()).unwrap();
///
/// assert_eq!(cmp.get(Policy::Lru).unwrap().faults, 9);
/// assert_eq!(cmp.best().unwrap().policy, Policy::Optimal);
/// ```
#[derive(Debug, Clone)]
pub struct Comparison<P> {
    config: SimConfig,
    total_references: usize,
    results: Vec<PolicyResult<P>>,
}

impl<P> Comparison<P>
where
    P: Clone + PartialEq + fmt::Debug + Send + Sync,
{
    /// Run all policies, on separate threads if `config.parallel` is set.
    pub fn run(pages: &[P], config: &SimConfig) -> Result<Self> {
        if config.parallel {
            return Self::run_parallel(pages, config);
        }

        let results = Policy::ALL
            .iter()
            .map(|&policy| -> Result<PolicyResult<P>> {
                let simulation = policy.simulate(pages, config.frames, config.verbose)?;
                Ok(PolicyResult { policy, simulation })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::finish(pages.len(), *config, results))
    }

    /// Run each policy on its own scoped thread.
    ///
    /// The simulators share nothing but the read-only reference string.
    pub fn run_parallel(pages: &[P], config: &SimConfig) -> Result<Self> {
        let SimConfig {
            frames, verbose, ..
        } = *config;

        let results = thread::scope(|s| {
            let handles: Vec<_> = Policy::ALL
                .iter()
                .map(|&policy| {
                    s.spawn(move || {
                        policy
                            .simulate(pages, frames, verbose)
                            .map(|simulation| PolicyResult { policy, simulation })
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect::<Result<Vec<_>>>()
        })?;

        Ok(Self::finish(pages.len(), *config, results))
    }

    fn finish(total_references: usize, config: SimConfig, results: Vec<PolicyResult<P>>) -> Self {
        let cmp = Self {
            config,
            total_references,
            results,
        };
        debug!(
            references = total_references,
            frames = config.frames,
            best = cmp.best().map(|r| r.policy.name()),
            "comparison complete"
        );
        cmp
    }
}

impl<P> Comparison<P> {
    pub fn total_references(&self) -> usize {
        self.total_references
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn results(&self) -> &[PolicyResult<P>] {
        &self.results
    }

    pub fn get(&self, policy: Policy) -> Option<&Simulation<P>> {
        self.results
            .iter()
            .find(|r| r.policy == policy)
            .map(|r| &r.simulation)
    }

    /// The policy with the fewest faults. Ties go to the earliest policy in
    /// [`Policy::ALL`] order.
    pub fn best(&self) -> Option<&PolicyResult<P>> {
        // min_by_key keeps the first of equal minima
        self.results.iter().min_by_key(|r| r.simulation.faults)
    }
}

impl<P: fmt::Display> Comparison<P> {
    /// Per-step resident sets for `policy`, one line per reference.
    ///
    /// `None` when the comparison was not run verbose.
    pub fn render_frame_states(&self, policy: Policy) -> Option<String> {
        if !self.config.verbose {
            return None;
        }
        let simulation = self.get(policy)?;

        let mut out = format!("Frame states for {} (after each reference):\n", policy);
        for snapshot in &simulation.snapshots {
            let pages: Vec<String> = snapshot.iter().map(ToString::to_string).collect();
            out.push('[');
            out.push_str(&pages.join(", "));
            out.push_str("]\n");
        }
        Some(out)
    }
}

impl<P> fmt::Display for Comparison<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Results ---")?;
        writeln!(f, "Total references: {}", self.total_references)?;
        for result in &self.results {
            writeln!(
                f,
                "{:<5} -> Page Faults: {}, Hit Ratio: {:.2}",
                result.policy.name(),
                result.simulation.faults,
                result.simulation.hit_ratio()
            )?;
        }
        if let Some(best) = self.best() {
            writeln!(f)?;
            write!(
                f,
                "Best algorithm for given input: {} with {} page faults",
                best.policy.name(),
                best.simulation.faults
            )?;
        }
        Ok(())
    }
}
