use crate::domain::model::{Berry, Compote};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Buckets berries by color and ranks the resulting compotes.
pub fn create_compotes(berries: Vec<Berry>) -> Vec<Compote> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut compotes: Vec<Compote> = Vec::new();

    for berry in berries {
        let name = berry.compote_name();
        let slot = match index.get(&name) {
            Some(&slot) => slot,
            None => {
                tracing::debug!("Creating {}", name);
                compotes.push(Compote::new(name.clone()));
                index.insert(name, compotes.len() - 1);
                compotes.len() - 1
            }
        };
        compotes[slot].add_berry(berry);
    }

    compotes.sort_by(rank);
    compotes
}

/// Larger compotes first, then by name (byte-wise).
pub fn rank(a: &Compote, b: &Compote) -> Ordering {
    b.berry_count().cmp(&a.berry_count()).then_with(|| a.name.cmp(&b.name))
}
