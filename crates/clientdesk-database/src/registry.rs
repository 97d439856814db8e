//! In-memory student registry.
//!
//! A trivial counter-keyed map with no policy attached. Seeded with three
//! records at startup, matching the original data set.

use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::DashMap;

use clientdesk_entity::student::{NewStudent, Student};

/// Concurrent registry of students.
#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: DashMap<i32, Student>,
    next_id: AtomicI32,
}

impl StudentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the seed students.
    pub fn seeded() -> Self {
        let registry = Self::new();
        registry.add(NewStudent {
            name: "Ivan".to_string(),
            age: 10,
            group: "M".to_string(),
        });
        registry.add(NewStudent {
            name: "Maria".to_string(),
            age: 10,
            group: "A".to_string(),
        });
        registry.add(NewStudent {
            name: "Sergey".to_string(),
            age: 10,
            group: "K".to_string(),
        });
        registry
    }

    /// Add a student, assigning the next id.
    pub fn add(&self, student: NewStudent) -> Student {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let student = Student {
            id,
            name: student.name,
            age: student.age,
            group: student.group,
        };
        self.students.insert(id, student.clone());
        student
    }

    /// List all students, ordered by id.
    pub fn all(&self) -> Vec<Student> {
        let mut all: Vec<Student> = self.students.iter().map(|s| s.clone()).collect();
        all.sort_by_key(|s| s.id);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_registry_has_three_students() {
        let registry = StudentRegistry::seeded();
        let all = registry.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Ivan");
        assert_eq!(all[2].group, "K");
    }

    #[test]
    fn test_add_continues_id_sequence() {
        let registry = StudentRegistry::seeded();
        let added = registry.add(NewStudent {
            name: "Olga".to_string(),
            age: 11,
            group: "B".to_string(),
        });
        assert_eq!(added.id, 4);
        assert_eq!(registry.all().len(), 4);
    }
}
