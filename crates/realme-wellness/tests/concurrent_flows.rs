// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overlapping flow invocations feeding the interaction log.

use std::sync::Arc;

use chrono::Duration;
use realme_core::Identity;
use realme_flows::{RealmeFlows, WorryInput};
use realme_resilience::RetryPolicy;
use realme_storage::MemoryKeyValueStore;
use realme_test_utils::{MockGenerator, MockReply, fixtures};
use realme_wellness::{FixedClock, Interaction, InteractionKind, WellnessStore};

#[tokio::test]
async fn double_submit_records_two_interactions() {
    let mut second = fixtures::worry_reframe();
    second["reframedThought"] = "One exam is one data point.".into();
    let mock = MockGenerator::with_replies([
        MockReply::Output(fixtures::worry_reframe()),
        MockReply::Output(second),
    ]);
    let flows = RealmeFlows::with_policy(Arc::new(mock.clone()), RetryPolicy::default());
    let input = WorryInput {
        worry: "I will fail my exam tomorrow".into(),
    };

    let (first, later) = tokio::join!(flows.reframe_worry(&input), flows.reframe_worry(&input));
    let (first, later) = (first.unwrap(), later.unwrap());
    assert_eq!(mock.calls().await, 2);
    assert_ne!(first.reframed_thought, later.reframed_thought);

    let clock = Arc::new(FixedClock::on(fixtures::today()));
    let mut store = WellnessStore::new(Arc::new(MemoryKeyValueStore::new()), clock.clone());
    store.login(Identity::member("twice@example.com"));

    for (offset, reply) in [(0, &first), (1, &later)] {
        let interaction = Interaction::new(
            InteractionKind::WorryJar,
            "Worry Jar",
            reply.reframed_thought.clone(),
            clock.0 + Duration::seconds(offset),
        )
        .with_exchange(&input, reply)
        .unwrap();
        store.record_interaction(interaction).unwrap();
    }

    let log = store.interactions();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].content, later.reframed_thought);
    assert_eq!(log[1].content, first.reframed_thought);
    assert_ne!(log[0].id, log[1].id);
}
