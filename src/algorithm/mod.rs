/// Greedy tile placement into the macro grid
pub mod assembler;
/// Edge uniqueness classification and tile pool partitioning
pub mod classifier;
/// Border trimming and tile concatenation into one image
pub mod merge;
/// Oriented pattern matching and the roughness metric
pub mod scanner;
