use super::*;

use slotmap::Key;

/// Keys from a map nothing else uses. Keys past the number of entries in a real map of the same
/// type are guaranteed to be missing from it.
pub fn mock_keys<T: Key>(number: u32) -> Vec<T> {
    let mut map = slotmap::SlotMap::with_key();
    (0..number).map(|_| map.insert(())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_keys_all_different() {
        let k = mock_keys::<EntityType>(3);
        assert_eq!(k.len(), 3);
        assert_ne!(k[0], k[1]);
        assert_ne!(k[0], k[2]);
        assert_ne!(k[1], k[2]);
    }
}
