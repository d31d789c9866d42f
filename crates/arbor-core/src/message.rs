/// Ordered per-tick message log threaded through the tree.
///
/// Composite nodes hand the same log to each child in iteration order, so a later sibling sees
/// everything earlier siblings appended during the same tick. Nothing in the engine keeps the log
/// between ticks; the caller decides what each root tick starts with.
pub type MessageLog<M> = Vec<M>;
