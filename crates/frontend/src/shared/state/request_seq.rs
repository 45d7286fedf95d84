/// Tag attached to an outgoing request: sequence number plus the key it was
/// issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag<K> {
    pub seq: u64,
    pub key: K,
}

/// Monotonic request counter for one logical resource.
///
/// Only the response to the most recently issued request is accepted; anything
/// older belongs to a superseded selection and is dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue<K>(&mut self, key: K) -> RequestTag<K> {
        self.latest += 1;
        RequestTag {
            seq: self.latest,
            key,
        }
    }

    /// Invalidate everything in flight without issuing a new request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current<K>(&self, tag: &RequestTag<K>) -> bool {
        tag.seq == self.latest
    }
}
