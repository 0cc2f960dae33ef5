/// Memoisation of weight accumulation per observed kernel
pub mod cache;
/// Validated pattern catalog and the stock dungeon rule set
pub mod catalog;
/// Cell evaluation: kernel matching and entropy
pub mod evaluator;
/// Generation state machine and entry points
pub mod executor;
/// Set of cells whose evaluation is stale
pub mod frontier;
/// Weighted random tile assignment
pub mod resolver;
/// Rotation permutation tables and rotation sets
pub mod rotation;
