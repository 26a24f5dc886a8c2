//! # linsys
//!
//! Small dense linear systems solved three ways, with a derivation you can
//! check.
//!
//! One `use linsys::prelude::*;` gives you the [`Matrix`](core::Matrix)
//! type, the three solving [`Method`](core::Method)s, the solvability
//! classifier and the step [`Trace`](core::Trace).
//!
//! ```
//! use linsys::prelude::*;
//!
//! let ab = linsys::core::io::parse_augmented("2\n1\t1\t2\n1\t1\t3\n").unwrap();
//! assert_eq!(classify(&ab).unwrap(), SolutionStatus::NoSolution);
//! ```

pub use linsys_core as core;

/// Glob-import convenience: `use linsys::prelude::*;`
pub mod prelude {
    pub use linsys_core::prelude::*;
}
