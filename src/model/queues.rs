use crate::model::structures::{competition_queue::CompetitionQueue, queue_type::QueueType};

/// Decides whether a match played in `queue` counts toward a competition
/// configured with `filter`. Pure and O(1): this runs once per
/// (match, roster member) pairing during aggregation.
pub fn matches_filter(queue: QueueType, filter: CompetitionQueue) -> bool {
    match filter {
        CompetitionQueue::All => true,
        CompetitionQueue::RankedAny => queue.is_ranked(),
        concrete => match concrete.semantic_type() {
            Some(semantic) => queue == semantic,
            None => false
        }
    }
}
