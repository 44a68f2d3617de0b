//! Unit tests for hub-tasks.

mod helpers {
    use hub_core::TurtleId;
    use hub_fleet::{Fleet, TurtleStatus};
    use hub_world::World;

    /// Fresh fleet with one turtle at the origin.
    pub fn fleet_with_turtle() -> (Fleet, TurtleId) {
        let fleet = Fleet::new();
        let id = fleet.register(None);
        (fleet, id)
    }

    pub fn world_with(blocks: &[(&str, &str)]) -> World {
        let world = World::new();
        world.ingest(
            blocks
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        world
    }

    pub fn queue_of(fleet: &Fleet, id: TurtleId) -> Vec<String> {
        fleet.drain_queue(id, TurtleStatus::default()).unwrap()
    }
}

mod goto {
    use hub_core::BlockPos;

    use super::helpers::{fleet_with_turtle, queue_of, world_with};
    use crate::{dispatch_batch, enqueue_goto};

    #[test]
    fn queues_compressed_waypoints() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[]);
        let outcome = dispatch_batch(&fleet, &world, id, "goto 3 0 0").unwrap();
        assert_eq!(outcome.commands, vec!["goto 3 0 0"]);
        assert_eq!(queue_of(&fleet, id), vec!["goto 3 0 0"]);
    }

    #[test]
    fn bad_coordinates_queue_nothing() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[]);
        assert!(dispatch_batch(&fleet, &world, id, "goto 1 two 3").is_err());
        assert!(queue_of(&fleet, id).is_empty());
    }

    #[test]
    fn already_there_succeeds_with_empty_assignment() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[]);
        let outcome = enqueue_goto(&fleet, &world, id, BlockPos::new(0, 0, 0)).unwrap();
        assert!(outcome.commands.is_empty());
        assert!(queue_of(&fleet, id).is_empty());
    }

    #[test]
    fn no_path_succeeds_with_empty_assignment() {
        // Seal the destination in lava.
        let dest = BlockPos::new(4, 0, 0);
        let mut blocks = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if (dx, dy, dz) != (0, 0, 0) {
                        blocks.push((
                            format!("{},{},{}", dest.x + dx, dest.y + dy, dest.z + dz),
                            "lava".to_string(),
                        ));
                    }
                }
            }
        }
        let world = hub_world::World::new();
        world.ingest(blocks);

        let (fleet, id) = fleet_with_turtle();
        let outcome = enqueue_goto(&fleet, &world, id, dest).unwrap();
        assert!(outcome.commands.is_empty());
        assert_eq!(outcome.summary(), "no path to (4, 0, 0)");
    }
}

mod mine {
    use hub_core::HubError;

    use super::helpers::{fleet_with_turtle, queue_of, world_with};
    use crate::{dispatch_batch, enqueue_mine_nearest};

    #[test]
    fn nearest_target_wins() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[("10,0,0", "dirt"), ("3,0,0", "dirt")]);
        dispatch_batch(&fleet, &world, id, "mine dirt").unwrap();
        assert_eq!(queue_of(&fleet, id), vec!["goto 3 0 0", "mine 3 0 0"]);
    }

    #[test]
    fn distance_ties_break_lexicographically() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[("3,0,0", "dirt"), ("-3,0,0", "dirt")]);
        let outcome = enqueue_mine_nearest(&fleet, &world, id, "dirt").unwrap();
        assert_eq!(outcome.commands.last().unwrap(), "mine -3 0 0");
    }

    #[test]
    fn name_matching_is_exact() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[("3,0,0", "iron_ore")]);
        assert!(matches!(
            dispatch_batch(&fleet, &world, id, "mine ore"),
            Err(HubError::NoTarget(name)) if name == "ore"
        ));
        assert!(queue_of(&fleet, id).is_empty());
    }

    #[test]
    fn unknown_block_queues_nothing() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[]);
        assert!(enqueue_mine_nearest(&fleet, &world, id, "diamond_ore").is_err());
        assert!(queue_of(&fleet, id).is_empty());
    }
}

mod mineall {
    use super::helpers::{fleet_with_turtle, queue_of, world_with};
    use crate::dispatch_batch;

    #[test]
    fn visits_in_initial_distance_order() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[("10,0,0", "dirt"), ("3,0,0", "dirt")]);
        dispatch_batch(&fleet, &world, id, "mineall dirt").unwrap();
        assert_eq!(
            queue_of(&fleet, id),
            vec!["goto 3 0 0", "mine 3 0 0", "goto 10 0 0", "mine 10 0 0"]
        );
    }

    #[test]
    fn skips_unreachable_targets() {
        // One reachable dirt block and one sealed in lava.
        let mut blocks = vec![("3,0,0".to_string(), "dirt".to_string())];
        let sealed = (20, 0, 0);
        blocks.push((format!("{},{},{}", sealed.0, sealed.1, sealed.2), "dirt".to_string()));
        for dx in -1..=1i32 {
            for dy in -1..=1i32 {
                for dz in -1..=1i32 {
                    if (dx, dy, dz) != (0, 0, 0) {
                        blocks.push((
                            format!("{},{},{}", sealed.0 + dx, sealed.1 + dy, sealed.2 + dz),
                            "lava".to_string(),
                        ));
                    }
                }
            }
        }
        let world = hub_world::World::new();
        world.ingest(blocks);

        let (fleet, id) = fleet_with_turtle();
        let outcome = dispatch_batch(&fleet, &world, id, "mineall dirt").unwrap();
        assert_eq!(outcome.commands, vec!["goto 3 0 0", "mine 3 0 0"]);
        assert!(outcome.summary().contains("1 of 2"));
    }

    #[test]
    fn no_matches_is_an_error() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[]);
        assert!(dispatch_batch(&fleet, &world, id, "mineall dirt").is_err());
        assert!(queue_of(&fleet, id).is_empty());
    }
}

mod batches {
    use hub_core::TurtleId;

    use super::helpers::{fleet_with_turtle, queue_of, world_with};
    use crate::dispatch_batch;

    #[test]
    fn passthrough_commands_are_verbatim() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[]);
        dispatch_batch(&fleet, &world, id, "forward, back").unwrap();
        assert_eq!(queue_of(&fleet, id), vec!["forward", "back"]);
    }

    #[test]
    fn mixed_batch_splits_on_newlines_too() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[("3,0,0", "dirt")]);
        dispatch_batch(&fleet, &world, id, "forward\nmine dirt, back").unwrap();
        assert_eq!(
            queue_of(&fleet, id),
            vec!["forward", "goto 3 0 0", "mine 3 0 0", "back"]
        );
    }

    #[test]
    fn failing_sub_command_aborts_the_whole_batch() {
        let (fleet, id) = fleet_with_turtle();
        let world = world_with(&[]);
        assert!(dispatch_batch(&fleet, &world, id, "forward, goto x y z, back").is_err());
        assert!(queue_of(&fleet, id).is_empty());
    }

    #[test]
    fn unknown_turtle_is_an_error() {
        let (fleet, _) = fleet_with_turtle();
        let world = world_with(&[]);
        assert!(dispatch_batch(&fleet, &world, TurtleId(99), "forward").is_err());
    }
}

mod chat {
    use hub_core::HubError;
    use hub_fleet::Fleet;

    use super::helpers::world_with;
    use crate::dispatch_chat;

    #[test]
    fn empty_fleet_is_rejected() {
        let fleet = Fleet::new();
        let world = world_with(&[]);
        assert!(matches!(
            dispatch_chat(&fleet, &world, "forward"),
            Err(HubError::FleetEmpty)
        ));
    }

    #[test]
    fn picks_the_idle_turtle() {
        let fleet = Fleet::new();
        let world = world_with(&[]);
        let busy = fleet.register(None);
        let idle = fleet.register(None);
        fleet.append_commands(busy, vec!["x".to_string()]).unwrap();

        let (picked, outcome) = dispatch_chat(&fleet, &world, "forward").unwrap();
        assert_eq!(picked, idle);
        assert_eq!(outcome.commands, vec!["forward"]);
    }
}
