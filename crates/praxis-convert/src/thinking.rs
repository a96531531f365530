use crate::types::{ReasoningItem, ThinkingBlock};

/// Project a reasoning item into thinking blocks, one per summary segment.
///
/// Every block carries the item's signature verbatim. A reasoning item
/// without segments yields no blocks, even when it is signed.
pub fn project(reasoning: &ReasoningItem) -> Vec<ThinkingBlock> {
    reasoning
        .summary
        .iter()
        .map(|segment| ThinkingBlock::new(segment.text.clone(), reasoning.signature.clone()))
        .collect()
}
