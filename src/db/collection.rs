use std::collections::BTreeMap;

use super::Record;

/// Records of one resource, indexed by id.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: BTreeMap<u32, R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `max(id) + 1`, or 1 when the collection is empty.
    pub fn next_id(&self) -> u32 {
        self.records
            .keys()
            .next_back()
            .map_or(1, |max| max + 1)
    }

    /// Records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn get(&self, id: u32) -> Option<&R> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records.contains_key(&id)
    }

    /// Stores `record` under its own id, returning the record it displaced.
    pub fn insert(&mut self, record: R) -> Option<R> {
        self.records.insert(record.id(), record)
    }

    pub fn remove(&mut self, id: u32) -> Option<R> {
        self.records.remove(&id)
    }
}

impl<R: Record> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|r| (r.id(), r)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Doctor;

    fn doctor(id: u32) -> Doctor {
        Doctor {
            id,
            name: format!("Dr. {}", id),
            specialty: "Cardiology".into(),
            contact_info: format!("dr{}@hospital.com", id),
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(Collection::<Doctor>::new().next_id(), 1);
    }

    #[test]
    fn next_id_follows_the_maximum_not_the_length() {
        let mut doctors: Collection<Doctor> = [1, 2, 7].into_iter().map(doctor).collect();
        assert_eq!(doctors.next_id(), 8);

        doctors.remove(7);
        assert_eq!(doctors.next_id(), 3);

        doctors.remove(1);
        assert_eq!(doctors.next_id(), 3);
        assert_eq!(doctors.len(), 1);
    }

    #[test]
    fn iteration_is_ordered_by_id() {
        let doctors: Collection<Doctor> = [5, 1, 3].into_iter().map(doctor).collect();
        let ids: Vec<_> = doctors.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
