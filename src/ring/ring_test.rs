// ABOUTME: Tests for ring construction and the start/shutdown/join lifecycle.
// ABOUTME: Covers the configuration boundary and the shared-adjacency layout.

use std::sync::Arc;
use std::time::Duration;

use super::{Ring, RingHandle};
use crate::agent::FixedDelay;
use crate::error::RingError;
use crate::resource::Resource;
use crate::trace::{MemorySink, NullSink, Phase};
use tokio_test::assert_ok;

#[test]
fn test_build_rejects_zero_agents() {
    let result = Ring::build(0);
    assert!(matches!(
        result,
        Err(RingError::InvalidConfiguration { agents: 0 })
    ));
}

#[test]
fn test_build_rejects_a_single_agent() {
    let result = Ring::build(1);
    assert!(matches!(
        result,
        Err(RingError::InvalidConfiguration { agents: 1 })
    ));
}

#[test]
fn test_invalid_configuration_display() {
    let error = RingError::InvalidConfiguration { agents: 1 };
    assert!(error.to_string().contains("at least 2"));
    assert!(error.to_string().contains("got 1"));
}

#[test]
fn test_build_two_agents_share_both_resources() {
    let ring = Ring::build(2).unwrap();
    assert_eq!(ring.resources().len(), 2);
    assert_eq!(ring.agents().len(), 2);

    let first: Arc<dyn Resource> = ring.resources()[0].clone();
    let second: Arc<dyn Resource> = ring.resources()[1].clone();

    assert!(Arc::ptr_eq(ring.agents()[0].left(), &first));
    assert!(Arc::ptr_eq(ring.agents()[0].right(), &second));
    assert!(Arc::ptr_eq(ring.agents()[1].left(), &second));
    assert!(Arc::ptr_eq(ring.agents()[1].right(), &first));
}

#[test]
fn test_build_assigns_cyclic_adjacency() {
    let n = 5;
    let ring = Ring::build(n).unwrap();

    for i in 0..n {
        let own: Arc<dyn Resource> = ring.resources()[i].clone();
        let next: Arc<dyn Resource> = ring.resources()[(i + 1) % n].clone();
        assert!(Arc::ptr_eq(ring.agents()[i].left(), &own));
        assert!(Arc::ptr_eq(ring.agents()[i].right(), &next));
    }
}

#[test]
fn test_agent_identities_are_ring_indices() {
    let ring = Ring::build(4).unwrap();
    let ids: Vec<usize> = ring.agents().iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_start_runs_and_stop_joins_cleanly() {
    let ring = Ring::build(3).unwrap();
    let sink = Arc::new(MemorySink::new());
    let handle: RingHandle = ring.start(Arc::new(FixedDelay::zero()), sink.clone());

    while sink.count(Phase::Using).await == 0 {
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    tokio_test::assert_ok!(handle.stop().await);
    assert_eq!(sink.count(Phase::Stopped).await, 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_stop_leaves_every_token_free() {
    let ring = Ring::build(3).unwrap();
    let resources = ring.resources().to_vec();
    let handle = ring.start(Arc::new(FixedDelay::zero()), Arc::new(NullSink));

    tokio::time::sleep(Duration::from_millis(50)).await;
    tokio_test::assert_ok!(handle.stop().await);

    for token in &resources {
        assert!(!token.is_held(), "no token may stay held after join");
    }
}
