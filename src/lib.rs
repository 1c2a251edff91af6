//! pagesim - page replacement simulation for FIFO, LRU and Optimal.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │   Input (input.rs)       pages line + frames line       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │   Simulator (simulator/)                                │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacers: FIFO | LRU | Optimal                │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      run() driver + FrameSet + SimulationStats          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │   Report (report.rs)     Comparison + best policy       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, SimConfig)
//! - [`simulator`] - Replacement policies and the fault-counting driver
//! - [`input`] - Parsing a reference string and frame count
//! - [`report`] - Running every policy and summarizing the outcome
//!
//! # Quick Start
//! ```
//! use pagesim::simulator::{fifo, lru, optimal};
//! use pagesim::hit_ratio;
//!
//! let pages = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
//! let opt = optimal(&pages, 3, false).unwrap();
//!
//! assert!(opt.faults <= fifo(&pages, 3, false).unwrap().faults);
//! assert!(opt.faults <= lru(&pages, 3, false).unwrap().faults);
//! assert_eq!(hit_ratio(pages.len(), opt.faults), opt.hit_ratio());
//! ```

pub mod common;
pub mod input;
pub mod report;
pub mod simulator;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result, SimConfig};

pub use input::Workload;
pub use report::{Comparison, PolicyResult};
pub use simulator::{fifo, hit_ratio, lru, optimal, Policy, Simulation, SimulationStats};
