mod common;

use common::Lcg;
use graph_algorithms::priority_queue::{IndexPriorityQueue, PriorityQueue};
use graph_algorithms::Error;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(vec![5, 1, 4, 1, 5, 9, 2, 6])]
#[case(vec![3])]
#[case(vec![])]
fn min_heap_dequeues_in_ascending_order(#[case] items: Vec<i32>) {
    let mut pq = PriorityQueue::new_min();
    items.iter().for_each(|&x| pq.enqueue(x));
    assert_eq!(pq.len(), items.len());

    let mut sorted = items.clone();
    sorted.sort();
    assert_eq!(std::iter::from_fn(|| pq.dequeue()).collect::<Vec<_>>(), sorted);
    assert!(pq.is_empty());
}

#[test]
fn max_heap_snapshot_is_in_heap_order() {
    let mut pq = PriorityQueue::new_max();
    for x in [2, 8, 5, 9, 1] {
        pq.enqueue(x);
    }

    assert_eq!(pq.iter().next(), Some(&9));
    let mut snapshot: Vec<_> = pq.iter().copied().collect();
    snapshot.sort();
    assert_eq!(snapshot, vec![1, 2, 5, 8, 9]);
    assert_eq!(pq.dequeue(), Some(9));
    assert_eq!(pq.dequeue(), Some(8));
}

#[test]
fn index_queue_dequeues_best_present_id() {
    let mut pq = IndexPriorityQueue::new_min(8);
    for (id, key) in [(0, 50), (3, 20), (5, 70), (6, 10), (7, 30)] {
        assert!(pq.enqueue(id, key).unwrap());
    }
    assert_eq!(pq.peek(), Some((6, &10)));

    assert!(pq.change_key(5, 5).unwrap());
    assert!(pq.change_key(6, 60).unwrap());

    let order: Vec<_> = std::iter::from_fn(|| pq.dequeue()).collect();
    assert_eq!(order, vec![(5, 5), (3, 20), (7, 30), (0, 50), (6, 60)]);
    assert_eq!(pq.dequeue(), None);
    assert_eq!(pq.peek(), None);
}

#[test]
fn index_queue_remove_then_reenqueue() {
    let mut pq = IndexPriorityQueue::new_min(4);
    assert!(pq.enqueue(2, 'b').unwrap());
    assert!(pq.enqueue(1, 'a').unwrap());
    assert!(!pq.enqueue(2, 'z').unwrap());

    assert_eq!(pq.remove(2).unwrap(), Some('b'));
    assert!(!pq.contains(2).unwrap());
    assert_eq!(pq.key_of(2).unwrap(), None);
    assert_eq!(pq.remove(2).unwrap(), None);
    assert!(!pq.change_key(2, 'c').unwrap());

    assert!(pq.enqueue(2, 'c').unwrap());
    assert_eq!(pq.key_of(2).unwrap(), Some(&'c'));
    assert_eq!(pq.len(), 2);
}

#[test]
fn index_queue_rejects_ids_outside_capacity() {
    let mut pq = IndexPriorityQueue::new_min(3);
    assert!(matches!(pq.enqueue(3, 1), Err(Error::IdOutOfRange { id: 3, capacity: 3 })));
    assert!(matches!(pq.contains(10), Err(Error::IdOutOfRange { .. })));
    assert!(matches!(pq.key_of(3), Err(Error::IdOutOfRange { .. })));
    assert!(matches!(pq.change_key(3, 0), Err(Error::IdOutOfRange { .. })));
    assert!(matches!(pq.remove(3), Err(Error::IdOutOfRange { .. })));
}

#[test]
fn index_queue_agrees_with_brute_force() {
    const CAPACITY: usize = 32;
    let mut rng = Lcg(11);
    let mut pq = IndexPriorityQueue::new_max(CAPACITY);
    let mut model: Vec<Option<u64>> = vec![None; CAPACITY];

    for _ in 0..3000 {
        let id = (rng.next() % CAPACITY as u64) as usize;
        let key = rng.next() % 1000;
        match rng.next() % 4 {
            0 => {
                let inserted = pq.enqueue(id, key).unwrap();
                assert_eq!(inserted, model[id].is_none());
                if inserted {
                    model[id] = Some(key);
                }
            }
            1 => {
                let changed = pq.change_key(id, key).unwrap();
                assert_eq!(changed, model[id].is_some());
                if changed {
                    model[id] = Some(key);
                }
            }
            2 => assert_eq!(pq.remove(id).unwrap(), model[id].take()),
            _ => {
                let best = model.iter().enumerate().filter_map(|(id, key)| key.map(|k| (k, id))).max_by_key(|&(k, _)| k);
                match pq.dequeue() {
                    Some((id, key)) => {
                        assert_eq!(Some(key), best.map(|(k, _)| k));
                        assert_eq!(model[id].take(), Some(key));
                    }
                    None => assert!(best.is_none()),
                }
            }
        }
        assert_eq!(pq.len(), model.iter().filter(|k| k.is_some()).count());
    }
}
