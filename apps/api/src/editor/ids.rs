use uuid::Uuid;

use crate::models::resume::Entry;

/// Draws an id not used by any entry of `existing`.
pub fn fresh_id<T: Entry>(existing: &[T]) -> String {
    loop {
        let candidate = Uuid::new_v4().to_string();
        if !existing.iter().any(|e| e.id() == candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillItem;

    #[test]
    fn test_fresh_id_not_in_list() {
        let existing: Vec<SkillItem> = (0..50)
            .map(|_| SkillItem {
                id: fresh_id::<SkillItem>(&[]),
                ..Default::default()
            })
            .collect();
        let id = fresh_id(&existing);
        assert!(!id.is_empty());
        assert!(existing.iter().all(|s| s.id != id));
    }
}
