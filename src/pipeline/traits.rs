use crate::types::{EditDistance, SpaceTally};

pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

pub trait DistanceEngine: Send + Sync {
    fn distance(&self, reference: &[char], candidate: &[char]) -> EditDistance;
}

pub trait SpaceScanner: Send + Sync {
    fn scan(&self, reference: &[char], candidate: &[char]) -> SpaceTally;
}
