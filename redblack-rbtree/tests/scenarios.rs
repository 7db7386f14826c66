//! End-to-end scenarios over the public API

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use redblack_rbtree::RbTree;

/// Mixed payloads, as callers store opaque values of any shape
#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Int(i64),
    Text(&'static str),
}

use Payload::{Int, Text};

fn scenario_a() -> RbTree<i64, Payload> {
    let mut tree = RbTree::new();
    tree.add(10, Int(100));
    tree.add(5, Text("test"));
    tree.add(15, Int(200));
    tree.add(-1, Text("string"));
    tree
}

#[test]
fn test_first_returns_minimum() {
    let tree = scenario_a();
    assert_eq!(tree.first(), Some((&-1, &Text("string"))));
    tree.validate().unwrap();
}

#[test]
fn test_pop_drains_in_order() {
    let mut tree = scenario_a();

    assert_eq!(tree.first(), Some((&-1, &Text("string"))));
    assert_eq!(tree.pop(), Some((-1, Text("string"))));
    assert_eq!(tree.first(), Some((&5, &Text("test"))));
    assert_eq!(tree.pop(), Some((5, Text("test"))));
    assert_eq!(tree.first(), Some((&10, &Int(100))));
    assert_eq!(tree.pop(), Some((10, Int(100))));
    assert_eq!(tree.first(), Some((&15, &Int(200))));
    assert_eq!(tree.pop(), Some((15, Int(200))));

    assert_eq!(tree.first(), None);
    assert_eq!(tree.pop(), None);
    assert!(tree.is_empty());
}

#[test]
fn test_remove_then_pop() {
    let mut tree = scenario_a();

    tree.remove(&-1);
    tree.remove(&10);
    tree.validate().unwrap();

    assert_eq!(tree.first(), Some((&5, &Text("test"))));
    assert_eq!(tree.pop(), Some((5, Text("test"))));
    assert_eq!(tree.first(), Some((&15, &Int(200))));
    assert_eq!(tree.pop(), Some((15, Int(200))));
    assert_eq!(tree.pop(), None);
}

#[test]
fn test_random_permutation_stress() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut keys: Vec<i64> = (-100_000..100_000).collect();
    keys.shuffle(&mut rng);
    keys.truncate(5000);

    let mut tree = RbTree::new();
    let mut min = i64::MAX;
    for (i, &key) in keys.iter().enumerate() {
        tree.add(key, i);
        min = min.min(key);
        assert_eq!(tree.first().map(|(k, _)| *k), Some(min));
    }
    tree.validate().unwrap();
    assert_eq!(tree.len(), 5000);
    // 2 * log2(5001)
    assert!(tree.height() <= 24);

    let mut sorted = keys.clone();
    sorted.sort_unstable();
    let popped: Vec<i64> = std::iter::from_fn(|| tree.pop().map(|(k, _)| k)).collect();
    assert_eq!(popped, sorted);
    assert!(tree.is_empty());
}

#[test]
fn test_random_removals_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut keys: Vec<i64> = (0..2000).collect();
    keys.shuffle(&mut rng);

    let mut tree: RbTree<i64, i64> = keys.iter().map(|&k| (k, -k)).collect();
    tree.validate().unwrap();

    keys.shuffle(&mut rng);
    let (gone, kept) = keys.split_at(1000);
    for (i, key) in gone.iter().enumerate() {
        assert_eq!(tree.remove(key), Some((*key, -key)));
        if i % 50 == 0 {
            tree.validate().unwrap();
        }
    }
    tree.validate().unwrap();

    for key in gone {
        assert!(!tree.contains_key(key));
    }
    let mut expected = kept.to_vec();
    expected.sort_unstable();
    let popped: Vec<i64> = std::iter::from_fn(|| tree.pop().map(|(k, _)| k)).collect();
    assert_eq!(popped, expected);
}

#[test]
fn test_comparator_on_unordered_payload() {
    #[derive(Debug, PartialEq)]
    struct Job {
        priority: u8,
        name: &'static str,
    }

    let mut queue: RbTree<Job, (), _> =
        RbTree::with_comparator(|a: &Job, b: &Job| a.priority > b.priority);
    queue.add(Job { priority: 1, name: "sweep" }, ());
    queue.add(Job { priority: 9, name: "page" }, ());
    queue.add(Job { priority: 5, name: "deploy" }, ());

    let order: Vec<&str> = std::iter::from_fn(|| queue.pop().map(|(job, _)| job.name)).collect();
    assert_eq!(order, vec!["page", "deploy", "sweep"]);
}
