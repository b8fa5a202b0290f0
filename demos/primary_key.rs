use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use ksuid::{KsuidGenerator, PrimaryKeySource};

/// Stand-in for a repository that asks for a fresh key on every insert
struct Table<K: PrimaryKeySource> {
    keys: K,
    rows: BTreeMap<String, String>,
}

impl<K: PrimaryKeySource> Table<K> {
    fn insert(&mut self, value: &str) -> String {
        let key = self.keys.autogenerate();
        self.rows.insert(key.clone(), value.to_string());
        key
    }
}

fn main() {
    let mut table = Table {
        keys: KsuidGenerator::new(),
        rows: BTreeMap::new(),
    };

    for name in ["alice", "bob", "carol"] {
        let key = table.insert(name);
        println!("Inserted {name} with key {key}");
    }

    // A single generator is shared across threads without locking
    let generator = Arc::new(KsuidGenerator::new());
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || (worker, generator.autogenerate()))
        })
        .collect();

    for handle in handles {
        let (worker, key) = handle.join().unwrap();
        println!("Worker {worker} generated {key}");
    }

    println!("\nRows in key order:");
    for (key, value) in &table.rows {
        println!("  {key} => {value}");
    }
}
