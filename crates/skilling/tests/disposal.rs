mod support;

use std::path::{Path, PathBuf};

use ocvbot_skilling::{DisposalPolicy, DropToggles, SecondaryItem, SkillingError};
use ocvbot_stats_store::RunCounters;
use support::*;

fn toggles_from_bits(bits: u8) -> DropToggles {
    DropToggles {
        sapphire: bits & 1 != 0,
        emerald: bits & 2 != 0,
        ruby: bits & 4 != 0,
        diamond: bits & 8 != 0,
        clue_geode: bits & 16 != 0,
    }
}

fn stocked_world() -> World {
    let world = World::new();
    world.holds(&ore(), 27);
    for item in SecondaryItem::ORDER {
        world.holds(&needle(item.needle()), 1);
    }
    world
}

#[tokio::test]
async fn every_toggle_combination_drops_in_priority_order() {
    for bits in 0..32u8 {
        let toggles = toggles_from_bits(bits);
        let policy = DisposalPolicy::new(toggles, Path::new(NEEDLES), true);
        let world = stocked_world();
        let mut run = RunCounters::new();

        let summary = policy
            .dispose(&world, &ore(), &mut run, 35.5)
            .await
            .unwrap();

        let mut expected: Vec<PathBuf> = vec![ore().path().to_path_buf()];
        let enabled: Vec<SecondaryItem> = SecondaryItem::ORDER
            .iter()
            .enumerate()
            .filter(|(i, _)| bits & (1 << i) != 0)
            .map(|(_, item)| *item)
            .collect();
        expected.extend(
            enabled
                .iter()
                .map(|item| Path::new(NEEDLES).join(item.needle())),
        );

        assert_eq!(world.dropped(), expected, "toggles {toggles:?}");
        assert_eq!(summary.primary_dropped, 27);
        assert_eq!(
            summary.secondary_dropped,
            enabled.iter().map(|item| (*item, 1)).collect::<Vec<_>>()
        );
        assert_eq!(run.items_gathered(), 27);
        assert_eq!(run.inventories(), 1);
    }
}

#[tokio::test]
async fn absent_secondary_items_are_skipped() {
    let policy = DisposalPolicy::new(DropToggles::ALL, Path::new(NEEDLES), true);
    let world = World::new();
    world.holds(&ore(), 28).holds(&gem("uncut-ruby"), 2);
    let mut run = RunCounters::new();

    let summary = policy
        .dispose(&world, &ore(), &mut run, 16.5)
        .await
        .unwrap();

    assert_eq!(summary.secondary_dropped, vec![(SecondaryItem::Ruby, 2)]);
    assert_eq!(world.dropped().len(), 6);
    assert_eq!(run.experience_gained(), 28.0 * 16.5);
}

#[tokio::test]
async fn disabled_toggles_touch_only_the_primary() {
    let policy = DisposalPolicy::new(DropToggles::NONE, Path::new(NEEDLES), false);
    let world = stocked_world();
    let mut run = RunCounters::new();

    policy
        .dispose(&world, &ore(), &mut run, 35.5)
        .await
        .unwrap();

    assert_eq!(world.dropped(), vec![ore().path().to_path_buf()]);
}

#[tokio::test]
async fn missing_primary_leaves_counters_untouched() {
    let policy = DisposalPolicy::new(DropToggles::ALL, Path::new(NEEDLES), true);
    let world = World::new();
    world.holds(&gem("uncut-diamond"), 1);
    let mut run = RunCounters::new();

    let err = policy
        .dispose(&world, &ore(), &mut run, 35.5)
        .await
        .unwrap_err();

    assert!(matches!(err, SkillingError::NothingToDrop { .. }));
    assert!(run.is_zero());
    assert_eq!(
        world.events(),
        vec![Event::Drop(ore().path().into()), Event::Logout]
    );
}
